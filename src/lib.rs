//! dwmbar: status text for dwm's root window
//!
//! This library provides the pieces the `dwmbar` binary wires together:
//! - The run loop driving sample/format/publish cycles
//! - X11 and stdout publishers
//! - Detached command launching for click-to-launch

pub mod app;
pub mod display;
pub mod spawn;

// Re-export commonly used types
pub use app::StatusBar;
pub use display::{RootWindow, StdoutPublisher};
pub use spawn::CommandSpawner;
