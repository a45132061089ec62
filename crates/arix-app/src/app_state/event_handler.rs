//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::ArixApp;
use super::input::{key_action, mouse_action, InputAction};

impl ApplicationHandler for ArixApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let Some(action) = key_action(&event.logical_key) {
                        self.apply(action);
                    }
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                if let Some(action) = mouse_action(button) {
                    self.apply(action);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
                self.request_redraw();
            }

            _ => {}
        }
    }
}

impl ArixApp {
    fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Toggle => {
                self.signal.toggle();
                tracing::info!("State -> {:?}", self.signal);
            }
            InputAction::Exit => {
                tracing::info!("Exit requested");
                self.should_exit = true;
                self.request_redraw();
            }
        }
    }
}
