//! Error types for linkfield.
//!
//! The per-frame simulation is infallible. Only surface construction and
//! configuration loading can fail, and those errors live here.

use std::fmt;

/// Errors that can occur when describing the wraparound surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceError {
    /// Width or height is zero or negative.
    NonPositive { width: f64, height: f64 },
    /// Width or height is NaN or infinite.
    NonFinite { width: f64, height: f64 },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NonPositive { width, height } => write!(
                f,
                "Surface size must be strictly positive, got {}x{}",
                width, height
            ),
            SurfaceError::NonFinite { width, height } => {
                write!(f, "Surface size must be finite, got {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the configuration file.
    Io(std::io::Error),
    /// The file contents are not valid configuration JSON.
    Json(serde_json::Error),
    /// The configured surface is unusable.
    Surface(SurfaceError),
    /// A parameter is outside its valid range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Surface(e) => write!(f, "Invalid surface: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Surface(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<SurfaceError> for ConfigError {
    fn from(e: SurfaceError) -> Self {
        ConfigError::Surface(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_surface_error_display() {
        let err = SurfaceError::NonPositive {
            width: 0.0,
            height: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "Surface size must be strictly positive, got 0x10"
        );
    }

    #[test]
    fn test_config_error_source_chain() {
        let err: ConfigError = SurfaceError::NonFinite {
            width: f64::NAN,
            height: 1.0,
        }
        .into();
        assert!(err.source().is_some());
        assert!(ConfigError::Invalid("x".into()).source().is_none());
    }
}
