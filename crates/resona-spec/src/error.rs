//! Configuration error types.
//!
//! Every problem reported here is detected before synthesis starts. Unknown
//! presets and frequency keys are deliberately absent: those fall back to
//! documented defaults instead of failing.

use thiserror::Error;

/// Stable error codes for configuration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Effect name is not recognized
    UnknownEffect,
    /// E002: A required parameter was not supplied
    MissingParameter,
    /// E003: A parameter value is out of range
    InvalidParameter,
    /// E004: Duration is not a positive finite number, or too long for a WAV file
    InvalidDuration,
    /// E005: Sample rate is zero or out of range
    InvalidSampleRate,
    /// E006: Request document could not be parsed
    MalformedRequest,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownEffect => "E001",
            ErrorCode::MissingParameter => "E002",
            ErrorCode::InvalidParameter => "E003",
            ErrorCode::InvalidDuration => "E004",
            ErrorCode::InvalidSampleRate => "E005",
            ErrorCode::MalformedRequest => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Configuration error raised while building or validating a request.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Effect name not in the supported set.
    #[error("unknown effect '{name}'")]
    UnknownEffect {
        /// The name that was given.
        name: String,
    },

    /// Required parameter absent (e.g. `text` for a text-driven effect).
    #[error("{effect} requires '{name}'")]
    MissingParameter {
        /// Effect that needs the parameter.
        effect: String,
        /// Parameter name.
        name: String,
    },

    /// Parameter present but unusable.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// What is wrong with it.
        message: String,
    },

    /// Duration is zero, negative, or not finite.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Duration whose PCM would not fit in a single WAV data chunk.
    #[error("duration of {duration} seconds exceeds the {max_seconds:.0} seconds a WAV file can hold at {sample_rate} Hz")]
    DurationTooLong {
        /// The rejected duration.
        duration: f64,
        /// Sample rate the limit was computed for.
        sample_rate: u32,
        /// Longest duration that fits.
        max_seconds: f64,
    },

    /// Sample rate of zero, or too high for a WAV byte rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected rate.
        rate: u32,
    },

    /// JSON request could not be parsed.
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Creates a missing parameter error.
    pub fn missing(effect: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingParameter {
            effect: effect.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SpecError::UnknownEffect { .. } => ErrorCode::UnknownEffect,
            SpecError::MissingParameter { .. } => ErrorCode::MissingParameter,
            SpecError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            SpecError::InvalidDuration { .. } | SpecError::DurationTooLong { .. } => {
                ErrorCode::InvalidDuration
            }
            SpecError::InvalidSampleRate { .. } => ErrorCode::InvalidSampleRate,
            SpecError::Json(_) => ErrorCode::MalformedRequest,
        }
    }
}

/// Result type for configuration operations.
pub type SpecResult<T> = Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorCode::UnknownEffect.code(), "E001");
        assert_eq!(ErrorCode::MalformedRequest.to_string(), "E006");
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = SpecError::missing("spectral", "text");
        assert_eq!(err.to_string(), "spectral requires 'text'");
        assert_eq!(err.code(), ErrorCode::MissingParameter);
    }
}
