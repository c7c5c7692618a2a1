//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The scene pipeline
//! - Ground, pyramid, and sphere objects
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use sierpinski_core::{ground, sphere_group, pyramid_transform, Batch, RenderState, SphereGroup};
use sierpinski_render::{
    camera::Camera,
    context::{ContextError, RenderContext},
    pipeline::{SceneUniforms, ScenePipeline},
    GpuObject,
};
use crate::config::{LightingConfig, SceneConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "{}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ScenePipeline,
    ground: GpuObject,
    pyramid: GpuObject,
    spheres: GpuObject,
    sphere_layout: SphereGroup,
    lighting: LightingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// The ground and sphere group are uploaded once here; the pyramid starts
    /// empty until [`RenderSystem::upload_pyramid`] is called.
    pub fn new(
        window: Arc<Window>,
        lighting: LightingConfig,
        scene: &SceneConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = ScenePipeline::new(
            &context.device,
            context.config.format,
            context.config.width,
            context.config.height,
        );

        let layout = pipeline.object_layout();
        let mut ground_object = GpuObject::new(&context.device, layout, "Ground");
        ground_object.upload(&context.device, &ground(scene.ground_color));

        let sphere_layout = scene.to_sphere_group();
        let mut spheres = GpuObject::new(&context.device, layout, "Spheres");
        spheres.upload(&context.device, &sphere_group(&sphere_layout));

        let pyramid = GpuObject::new(&context.device, layout, "Pyramid");

        Ok(Self {
            context,
            pipeline,
            ground: ground_object,
            pyramid,
            spheres,
            sphere_layout,
            lighting,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface at its current size (after `SurfaceLost`)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.resize(size.width, size.height);
    }

    /// Replace the pyramid geometry
    pub fn upload_pyramid(&mut self, batch: &Batch) {
        self.pyramid.upload(&self.context.device, batch);
        log::info!(
            "Uploaded pyramid: {} edges, {} wall triangles",
            batch.line_count(),
            batch.triangle_count()
        );
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        camera: &Camera,
        state: &RenderState,
    ) -> Result<(), RenderError> {
        let queue = &self.context.queue;

        // Pyramid and sphere group follow the rotation; the ground never moves
        self.pyramid.set_transform(queue, pyramid_transform(state.rotation));
        self.spheres.set_transform(queue, self.sphere_layout.transform(state.rotation));

        let uniforms = SceneUniforms {
            view_proj: camera.view_projection(self.context.aspect_ratio()),
            light_color: state.light_color,
            light_dir: self.lighting.light_dir,
            _padding: 0.0,
            ambient_strength: self.lighting.ambient_strength,
            diffuse_strength: self.lighting.diffuse_strength,
            _padding2: [0.0; 2],
        };
        self.pipeline.update_uniforms(queue, &uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.lighting.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            [&self.ground, &self.pyramid, &self.spheres],
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::from(ContextError::NoAdapter)),
            "No suitable GPU adapter found"
        );
    }
}
