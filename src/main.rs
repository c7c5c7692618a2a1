//! Sierpinski3D - interactive Sierpinski pyramid viewer
//!
//! Asks for a recursion depth, then renders the pyramid above a ground plane
//! with a reference sphere, rotating until the window is closed.

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use sierpinski_core::{pyramid, RenderState, Tetrahedron};
use sierpinski_input::CameraController;
use sierpinski_math::Vec3;
use sierpinski_render::camera::Camera;

use sierpinski3d::config::AppConfig;
use sierpinski3d::input::{InputAction, InputMapper};
use sierpinski3d::prompt::{self, DepthChoice};
use sierpinski3d::systems::{FrameClock, RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    simulation: SimulationSystem,
    state: RenderState,
    camera: Camera,
    controller: CameraController,
    clock: FrameClock,
    /// First fatal error, returned from `main` after the loop ends
    error: Option<Box<dyn Error>>,
}

impl App {
    fn new(config: AppConfig, choice: DepthChoice) -> Self {
        let simulation = SimulationSystem::new(
            Tetrahedron::sierpinski_base(),
            choice.depth,
            &config.fractal,
            config.lighting.override_color,
        );

        let state = RenderState::new(choice.walls_enabled)
            .with_rotation_enabled(config.fractal.rotation_enabled)
            .with_light_color(config.lighting.light_color);

        let cam = &config.camera;
        let camera = Camera::new(Vec3::from_array(cam.start_offset))
            .with_projection(cam.fov, cam.near, cam.far);

        let controller = CameraController::new()
            .with_zoom_step(cam.zoom_step)
            .with_pan_step(cam.pan_step);

        let clock = FrameClock::new(Duration::from_millis(config.frame.interval_ms));

        Self {
            config,
            window: None,
            renderer: None,
            simulation,
            state,
            camera,
            controller,
            clock,
            error: None,
        }
    }

    /// Log a fatal error, keep it for `main`, and stop the loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Box<dyn Error>) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    /// Rebuild and upload the pyramid batch for the current wall state
    fn upload_pyramid(&mut self) {
        let walls = self.state.walls_enabled;
        let batch = pyramid(self.simulation.leaves(), walls);
        if let Some(renderer) = &mut self.renderer {
            renderer.upload_pyramid(&batch);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // 1. Fold queued toggles into the state and advance the rotation
        let result = self.simulation.step(self.state);
        self.state = result.state;

        // 2. Apply queued scroll/arrow steps to the camera
        self.controller.update(&mut self.camera);

        // 3. Wall visibility is baked into the pyramid batch
        if result.walls_changed {
            self.upload_pyramid();
        }

        if let Some(window) = &mut self.window {
            window.update_title(self.simulation.depth(), &self.state);
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match renderer.render_frame(&self.camera, &self.state) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(e @ RenderError::OutOfMemory) => self.fail(event_loop, Box::new(e)),
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, Box::new(e)),
        };

        let renderer = match RenderSystem::new(
            window.window().clone(),
            self.config.lighting.clone(),
            &self.config.scene,
            self.config.window.vsync,
        ) {
            Ok(renderer) => renderer,
            Err(e) => return self.fail(event_loop, Box::new(e)),
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.upload_pyramid();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // Every press is one discrete step; held keys do not repeat
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                            return;
                        }
                        Some(InputAction::ResetCamera) => {
                            self.camera.reset();
                            log::info!("Camera reset to starting position");
                        }
                        Some(action) => self.simulation.queue(action),
                        None => {}
                    }
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.controller.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.clock.tick(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_frame()));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Config first so its log level can seed the logger; RUST_LOG still wins
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Unusable input has already been reported; exit without opening a window
    let Some(choice) = prompt::run_prompt(io::stdin().lock(), io::stdout())? else {
        return Ok(());
    };
    log::info!(
        "Starting Sierpinski3D at depth {} (walls {})",
        choice.depth,
        if choice.walls_enabled { "on" } else { "off" }
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, choice);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
