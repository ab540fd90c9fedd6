//! GUI module for the sandbox
//!
//! This module provides a native Rust GUI using egui/eframe. It never
//! re-implements game rules: every overlay comes from the engine.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::SandboxApp;
pub use game_state::{Analysis, CaptureAnimation, SandboxState};
