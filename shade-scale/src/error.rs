use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors of the shade-scale library.
///
/// Degenerate mix ratios are *not* an error, they are clamped to
/// `[0, 1]` by the color math.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadeError {
    /// A color string that is not 7-character `#rrggbb` hex.
    InvalidColorFormat(String),
    /// A palette update addressed a nonexistent entry.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for ShadeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShadeError::InvalidColorFormat(s) => {
                write!(f, "invalid color format: {:?}", s)
            }
            ShadeError::IndexOutOfRange { index, len } => {
                write!(f, "palette index out of range: {} >= {}", index, len)
            }
        }
    }
}

impl Error for ShadeError {}
