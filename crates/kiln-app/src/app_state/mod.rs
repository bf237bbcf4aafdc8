//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: window and renderer setup, resize handling and redraws.

mod core;
mod event_handler;
mod init;
mod render;

pub use core::KilnApp;
