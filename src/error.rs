//! The error type shared by every fallible operation in the crate. Failures are never recovered
//! from internally: validation happens before any mutation, so an `Err` always means the
//! aggregate is exactly as it was before the call.

use std::error::Error;
use std::fmt;

use light::{Field, Light};

/// An error raised while reading or changing a lighting setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightingError {
    /// A background color was not of the form `#rrggbb` (the `#` is optional). Holds the
    /// offending input.
    InvalidColorFormat(String),
    /// A field name, light name, or value that the addressed light cannot accept, such as a
    /// fixture type from another role, text given for a numeric field, or a field the light does
    /// not have. `light` and `field` are `None` when the name itself could not be parsed.
    InvalidParameter {
        /// The light being changed, if known.
        light: Option<Light>,
        /// The field being changed, if known.
        field: Option<Field>,
        /// A human-readable explanation.
        reason: String,
    },
    /// An operation that is not defined for the given light, like toggling the key light.
    UnsupportedOperation {
        /// The light the operation was attempted on.
        light: Light,
        /// The name of the operation.
        operation: &'static str,
    },
    /// A prompt sink refused the generated text.
    Sink(String),
}

impl LightingError {
    pub(crate) fn invalid<S: Into<String>>(light: Light, field: Field, reason: S) -> LightingError {
        LightingError::InvalidParameter {
            light: Some(light),
            field: Some(field),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LightingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LightingError::InvalidColorFormat(ref input) => {
                write!(f, "invalid color format {:?}: expected #rrggbb", input)
            }
            LightingError::InvalidParameter { light, field, ref reason } => match (light, field) {
                (Some(light), Some(field)) => {
                    write!(f, "invalid parameter {}.{}: {}", light, field, reason)
                }
                (Some(light), None) => write!(f, "invalid parameter for {}: {}", light, reason),
                _ => write!(f, "invalid parameter: {}", reason),
            },
            LightingError::UnsupportedOperation { light, operation } => {
                write!(f, "{} is not supported for the {} light", operation, light)
            }
            LightingError::Sink(ref msg) => write!(f, "prompt sink failed: {}", msg),
        }
    }
}

impl Error for LightingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LightingError::invalid(Light::Rim, Field::Fixture, "the rim light has no fixture");
        assert_eq!(err.to_string(), "invalid parameter rim.fixture: the rim light has no fixture");
        let err = LightingError::UnsupportedOperation {
            light: Light::Key,
            operation: "toggle",
        };
        assert_eq!(err.to_string(), "toggle is not supported for the key light");
        assert_eq!(
            LightingError::InvalidColorFormat("#0b0".to_string()).to_string(),
            "invalid color format \"#0b0\": expected #rrggbb"
        );
    }
}
