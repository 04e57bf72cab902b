//! Walklock demo application
//!
//! A winit host binding for the walk controller: click the window to
//! capture the pointer, walk with WASD/arrows, jump with space, release
//! with Escape. Position is mirrored into the window title.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use walklock::config::AppConfig;
use walklock::input::{InputMapper, SpecialAction};
use walklock::{ControllerEvent, FrameScheduler, WalkController, WinitPointerLock};

/// Drives the controller's frame loop through window redraws
struct RedrawScheduler {
    window: Arc<Window>,
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) {
        self.window.request_redraw();
    }
}

/// Main application state
struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    controller: Option<WalkController<WinitPointerLock, RedrawScheduler>>,
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        Self {
            config,
            window: None,
            controller: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            let capability = WinitPointerLock::new(window.clone())
                .with_sensitivity(self.config.controller.mouse_sensitivity);
            let scheduler = RedrawScheduler {
                window: window.clone(),
            };

            // The render hook is where a scene renderer would draw the
            // frame; the demo has nothing to draw
            let mut controller = WalkController::new(
                capability,
                scheduler,
                Box::new(|| log::trace!("render frame")),
                self.config.motion.to_motion_config(),
                Duration::from_millis(self.config.controller.move_interval_ms),
            );

            let [x, z] = self.config.controller.start_position;
            controller.set_position(x, z, self.config.controller.start_yaw);

            controller.subscribe(ControllerEvent::Moved, |pos| {
                log::info!("Moved to ({:.1}, {:.1}) yaw {:.2}", pos.x, pos.z, pos.yaw);
            });
            controller.subscribe(ControllerEvent::Unlocked, |pos| {
                log::info!("Unlocked at ({:.1}, {:.1})", pos.x, pos.z);
            });

            self.window = Some(window);
            self.controller = Some(controller);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                controller.dispose();
                event_loop.exit();
            }

            WindowEvent::Focused(false) => {
                // The platform drops the grab with focus; mirror it
                controller.notify_lock_lost();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) =
                        InputMapper::map_special(key, event.state, controller.is_locked())
                    {
                        match action {
                            SpecialAction::ReleaseCursor => controller.unlock(),
                            SpecialAction::Exit => {
                                controller.dispose();
                                event_loop.exit();
                            }
                        }
                        return;
                    }
                    if let Some(code) = InputMapper::legacy_code(key) {
                        match event.state {
                            ElementState::Pressed => controller.handle_key_down(code),
                            ElementState::Released => controller.handle_key_up(code),
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                // Click to capture the pointer (FPS style)
                if state == ElementState::Pressed
                    && button == MouseButton::Left
                    && !controller.is_locked()
                {
                    controller.lock();
                }
            }

            WindowEvent::RedrawRequested => {
                controller.on_frame(Instant::now());

                // Mirror position into the title for debugging
                if let Some(window) = &self.window {
                    let pos = controller.position();
                    let hint = if controller.is_locked() {
                        "Esc to release"
                    } else {
                        "Click to capture"
                    };
                    window.set_title(&format!(
                        "{} - ({:.1}, {:.1}) yaw {:.2} [{}]",
                        self.config.window.title, pos.x, pos.z, pos.yaw, hint
                    ));
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if let Some(controller) = self.controller.as_mut() {
                controller.handle_mouse_motion(delta.0, delta.1);
            }
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting walklock");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
