//! Errors for the fallible conversions at the crate edge.
//!
//! The normalizer itself never fails; unmapped input becomes ordinary data.
//! These errors only come out of the explicit `TryFrom` / `FromStr`
//! conversions.

/// Conversion error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Unknown key code: {0:#x}")]
    UnknownKeyCode(u32),

    #[error("Unknown key location: {0}")]
    UnknownKeyLocation(u32),

    #[error("Unknown event type: {0}")]
    UnknownEventType(String),
}

pub type Result<T> = std::result::Result<T, InputError>;
