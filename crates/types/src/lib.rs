//! dwmbar-types: Shared data types for dwmbar.
//!
//! Pure data (colors, samples, regions, the bounded status line and the
//! deployment configuration) shared by every dwmbar crate. Nothing here
//! touches the OS or the display server.

pub mod color;
pub mod config;
pub mod region;
pub mod sample;
pub mod status;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ParseColorError};
pub use config::{BarConfig, ClickConfig, OverflowPolicy, Palette};
pub use region::{ClickRegion, Point};
pub use sample::Sample;
pub use status::{StatusString, STATUS_CAPACITY};
