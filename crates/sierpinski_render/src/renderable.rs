//! Renderable geometry - bridges core batches to GPU buffers
//!
//! A [`GpuObject`] owns one object's vertex buffers together with its model
//! uniform. Geometry is uploaded only when it changes; moving the object is a
//! 64-byte uniform write.

use wgpu::util::DeviceExt;

use sierpinski_core::{Batch, ColoredVertex};
use sierpinski_math::Mat4;

use crate::pipeline::{ObjectUniforms, Vertex3D};

/// Convert core vertices into the GPU vertex layout
pub fn to_gpu_vertices(vertices: &[ColoredVertex]) -> Vec<Vertex3D> {
    vertices
        .iter()
        .map(|v| Vertex3D::new(v.position.to_array(), v.normal.to_array(), v.color))
        .collect()
}

/// A vertex buffer and how many vertices it holds
struct VertexBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

impl VertexBuffer {
    /// Upload `vertices`, or `None` for an empty list
    fn create(device: &wgpu::Device, label: &str, vertices: &[ColoredVertex]) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }
        let data = to_gpu_vertices(vertices);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Some(Self {
            buffer,
            count: data.len() as u32,
        })
    }
}

/// One independently transformed piece of the scene
pub struct GpuObject {
    label: String,
    model_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    lines: Option<VertexBuffer>,
    triangles: Option<VertexBuffer>,
}

impl GpuObject {
    /// Create an object with no geometry and an identity transform
    ///
    /// `layout` must be [`crate::pipeline::ScenePipeline::object_layout`].
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Model Buffer", label)),
            contents: bytemuck::bytes_of(&ObjectUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", label)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });

        Self {
            label: label.to_string(),
            model_buffer,
            bind_group,
            lines: None,
            triangles: None,
        }
    }

    /// Replace this object's geometry
    pub fn upload(&mut self, device: &wgpu::Device, batch: &Batch) {
        self.lines = VertexBuffer::create(device, &format!("{} Lines", self.label), &batch.lines);
        self.triangles =
            VertexBuffer::create(device, &format!("{} Triangles", self.label), &batch.triangles);
        log::debug!(
            "Uploaded '{}': {} line vertices, {} triangle vertices",
            self.label,
            self.line_vertex_count(),
            self.triangle_vertex_count()
        );
    }

    /// Write the model transform
    pub fn set_transform(&self, queue: &wgpu::Queue, model: Mat4) {
        queue.write_buffer(&self.model_buffer, 0, bytemuck::bytes_of(&ObjectUniforms { model }));
    }

    /// Bind group holding the model uniform (group 1)
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Line-list buffer and vertex count, if any lines were uploaded
    pub fn lines(&self) -> Option<(&wgpu::Buffer, u32)> {
        self.lines.as_ref().map(|v| (&v.buffer, v.count))
    }

    /// Triangle-list buffer and vertex count, if any triangles were uploaded
    pub fn triangles(&self) -> Option<(&wgpu::Buffer, u32)> {
        self.triangles.as_ref().map(|v| (&v.buffer, v.count))
    }

    #[inline]
    pub fn line_vertex_count(&self) -> u32 {
        self.lines.as_ref().map_or(0, |v| v.count)
    }

    #[inline]
    pub fn triangle_vertex_count(&self) -> u32 {
        self.triangles.as_ref().map_or(0, |v| v.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sierpinski_core::PrimitiveSink;
    use sierpinski_math::Vec3;

    #[test]
    fn test_to_gpu_vertices_preserves_fields() {
        let mut batch = Batch::new();
        batch.line(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0), [0.2, 0.2, 0.2, 1.0]);

        let gpu = to_gpu_vertices(&batch.lines);
        assert_eq!(gpu.len(), 2);
        assert_eq!(gpu[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(gpu[1].position, [4.0, 5.0, 6.0]);
        assert_eq!(gpu[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(gpu[1].color, [0.2, 0.2, 0.2, 1.0]);
    }

    #[test]
    fn test_gpu_vertices_cast_to_bytes() {
        let batch = sierpinski_core::ground([0.0, 0.0, 1.0, 1.0]);
        let gpu = to_gpu_vertices(&batch.triangles);
        let bytes: &[u8] = bytemuck::cast_slice(&gpu);
        assert_eq!(bytes.len(), 6 * std::mem::size_of::<Vertex3D>());
    }
}
