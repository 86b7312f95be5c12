//! Stable error code registry.
//!
//! Codes are part of the public API: clients match on them, so the
//! strings never change even when messages do.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Machine-readable codes carried in problem-details responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Game id in the path is not a valid UUID.
    InvalidGameId,
    /// Request payload failed validation.
    ValidationError,
    /// No game exists with the requested id.
    GameNotFound,
    /// Some other resource was missing.
    NotFound,
    /// Database operation failed.
    DbError,
    /// Database connection could not be established or was lost.
    DbUnavailable,
    /// Stored state could not be decoded.
    DataCorruption,
    /// Server-side configuration is missing or invalid.
    ConfigError,
    /// Unclassified internal failure.
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidGameId => "INVALID_GAME_ID",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
