//! Error types for the shadescale core.

use thiserror::Error;

/// Errors produced by color parsing and scale generation.
///
/// Generation either fully succeeds or fully fails; there is no
/// partially-filled palette state to report.
#[derive(Debug, Error)]
pub enum ScaleError {
    /// A color string could not be parsed as a hex color.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),
}
