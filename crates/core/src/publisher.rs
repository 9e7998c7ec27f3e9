//! Publisher trait

use dwmbar_types::StatusString;

use crate::error::PublishError;

/// Destination for the finished status line
///
/// Implementations must make the new text visible before returning; there
/// is no buffering between cycles.
pub trait Publisher {
    fn publish(&mut self, status: &StatusString) -> Result<(), PublishError>;
}
