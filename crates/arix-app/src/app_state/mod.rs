//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the state signal, the frame clock, the morph scene, and
//! the renderer.

mod core;
mod event_handler;
mod init;
mod input;
mod render;

pub use self::core::ArixApp;
