//! Shared error type across instrumeter crates.
//!
//! Only setup can fail. Recording paths return `()` and treat every missing
//! piece (instrument, attribute) as "not applicable".

use thiserror::Error;

/// Stable error codes (used in logs and probe output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or semantically invalid configuration.
    BadConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Instrument name registered twice.
    DuplicateInstrument,
    /// Instrument name not part of the known contract.
    UnknownInstrument,
    /// Internal failure (I/O, OS sampler setup).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::DuplicateInstrument => "DUPLICATE_INSTRUMENT",
            ErrorCode::UnknownInstrument => "UNKNOWN_INSTRUMENT",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MeterError>;

/// Unified error type used by core and dispatch.
#[derive(Debug, Error)]
pub enum MeterError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("instrument registered twice: {0}")]
    DuplicateInstrument(String),
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MeterError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MeterError::BadConfig(_) => ErrorCode::BadConfig,
            MeterError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            MeterError::DuplicateInstrument(_) => ErrorCode::DuplicateInstrument,
            MeterError::UnknownInstrument(_) => ErrorCode::UnknownInstrument,
            MeterError::Internal(_) => ErrorCode::Internal,
        }
    }
}
