// ---------------------------------------------------------------------------
// SnowfallError: configuration errors for the snowfall simulator
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while building a `Snowfall` or decoding its configuration.
///
/// Ticking never fails; every variant here is a construction-time problem.
#[derive(Debug)]
pub enum SnowfallError {
    /// The flake count was zero.
    EmptyField,
    /// A range had `min > max` or a non-finite bound.
    InvalidRange { name: &'static str, min: f32, max: f32 },
    /// A scalar setting was out of its allowed domain.
    InvalidValue { name: &'static str, value: f32 },
    /// The configuration file could not be decoded.
    Decode(String),
}

impl fmt::Display for SnowfallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnowfallError::EmptyField => {
                write!(f, "Invalid flake count: at least one flake is required")
            }
            SnowfallError::InvalidRange { name, min, max } => {
                write!(f, "Invalid range for {name}: [{min}, {max}]")
            }
            SnowfallError::InvalidValue { name, value } => {
                write!(f, "Invalid value for {name}: {value}")
            }
            SnowfallError::Decode(msg) => write!(f, "Config decoding error: {msg}"),
        }
    }
}

impl std::error::Error for SnowfallError {}

impl From<serde_json::Error> for SnowfallError {
    fn from(e: serde_json::Error) -> Self {
        SnowfallError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowfall_error_display_empty_field() {
        let msg = format!("{}", SnowfallError::EmptyField);
        assert!(msg.contains("flake count"), "got: {msg}");
    }

    #[test]
    fn test_snowfall_error_display_invalid_range() {
        let err = SnowfallError::InvalidRange {
            name: "fall_speed",
            min: 2.0,
            max: 0.5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("fall_speed"), "got: {msg}");
        assert!(msg.contains("[2, 0.5]"), "got: {msg}");
    }

    #[test]
    fn test_snowfall_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: SnowfallError = json_err.into();
        assert!(matches!(err, SnowfallError::Decode(_)));
        assert!(format!("{err}").contains("Config decoding error"));
    }
}
