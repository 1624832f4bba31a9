//! Validation errors for grid dimensions and simulation parameters.

/// Errors produced when validating grid dimensions or simulation parameters.
///
/// Validation happens up front: constructors and setters return one of these
/// before touching any state, so a failed call never leaves a half-updated
/// component behind.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A requested grid had a zero row or column count.
    InvalidDimension { rows: usize, cols: usize },
    /// A scalar parameter failed its range check.
    InvalidParameter {
        /// Parameter name as it appears on the input struct or argument list.
        name: &'static str,
        /// The rejected value.
        value: f32,
        /// Short description of the violated constraint.
        constraint: &'static str,
    },
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => write!(
                f,
                "Invalid grid dimensions: {rows}x{cols} (rows and cols must be positive)"
            ),
            Self::InvalidParameter {
                name,
                value,
                constraint,
            } => {
                write!(f, "Parameter '{name}' {constraint}, got {value}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let dim = ParameterError::InvalidDimension { rows: 0, cols: 4 };
        assert_eq!(
            dim.to_string(),
            "Invalid grid dimensions: 0x4 (rows and cols must be positive)"
        );

        let param = ParameterError::InvalidParameter {
            name: "wind_speed",
            value: -3.0,
            constraint: "must be finite and non-negative",
        };
        assert_eq!(
            param.to_string(),
            "Parameter 'wind_speed' must be finite and non-negative, got -3"
        );
    }
}
