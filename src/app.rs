use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Fullscreen, Window, WindowId},
};

use crate::camera::{Camera, FrameInput};
use crate::config::{Config, Projection, Viewport};
use crate::core::WinitController;
use crate::frame::{FpsCounter, FrameIterator};
use crate::math::{self, Matrix4};
use crate::renderer::SceneRenderer;
use crate::types::SceneUniforms;

/// Camera plus projection, advanced once per frame
pub struct SceneState {
    camera: Camera,
    projection: Projection,
    viewport: Viewport,
    projection_matrix: Matrix4,
}

impl SceneState {
    pub fn new(config: &Config) -> Self {
        let projection = config.projection();
        let viewport = config.viewport();
        Self {
            camera: Camera::new(&config.camera),
            projection,
            viewport,
            projection_matrix: projection.matrix(viewport.aspect()),
        }
    }

    /// Rebuild the projection for a new drawable size
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }
        self.viewport = viewport;
        self.projection_matrix = self.projection.matrix(viewport.aspect());
    }

    /// Update the camera from this frame's input and produce the uniforms to upload
    pub fn step(&mut self, input: &FrameInput) -> SceneUniforms {
        self.camera.update(input);
        SceneUniforms::new(&self.camera, &self.projection_matrix)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn projection_matrix(&self) -> &Matrix4 {
        &self.projection_matrix
    }
}

pub struct App {
    config: Config,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    scene: SceneState,
    controller: WinitController,
    frames: FrameIterator,
    fps: FpsCounter,
    fullscreen: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            scene: SceneState::new(&config),
            fullscreen: config.window.fullscreen,
            config,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            frames: FrameIterator::new(),
            fps: FpsCounter::default(),
        }
    }

    fn capture_cursor(window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("Cursor grab unavailable, mouse look may stop at window edges: {}", e);
        }
        window.set_cursor_visible(false);
    }

    fn release_cursor(window: &Window) {
        let _ = window.set_cursor_grab(CursorGrabMode::None);
        window.set_cursor_visible(true);
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        if let Some(window) = &self.window {
            window.set_fullscreen(self.fullscreen.then_some(Fullscreen::Borderless(None)));
        }
        log::debug!("Fullscreen: {}", self.fullscreen);
    }

    fn resize(&mut self, viewport: Viewport) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(viewport);
        }
        self.scene.set_viewport(viewport);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(frame) = self.frames.next() {
            if let Some(fps) = self.fps.record(&frame) {
                log::info!("FPS: {:.0}", fps);
            }
        }

        let input = self.controller.take_frame_input();
        let uniforms = self.scene.step(&input);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("uTransform:\n{}", math::format_matrix(&uniforms.transform));
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match renderer.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Frame skipped: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ))
            .with_fullscreen(self.fullscreen.then_some(Fullscreen::Borderless(None)));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            self.config.clear_color,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.scene.set_viewport(renderer.viewport());
        Self::capture_cursor(&window);
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyQ | KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyF),
                        repeat: false,
                        ..
                    },
                ..
            } => self.toggle_fullscreen(),
            WindowEvent::Resized(size) => self.resize(Viewport::new(size.width, size.height)),
            WindowEvent::Focused(focused) => {
                if let Some(window) = &self.window {
                    if focused {
                        Self::capture_cursor(window);
                    } else {
                        Self::release_cursor(window);
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
