//! Unified error codes and error type for the Souk storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General / validation errors
//! - 1xxx: Authentication errors
//! - 2xxx: Storage errors
//! - 3xxx: Collaborator errors
//!
//! Nothing in this taxonomy is fatal to the process: every error path leaves
//! the engine in its last known-good in-memory state.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility with the UI host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (wrong admin password on login)
    InvalidCredentials = 1002,
    /// Current password proof failed on password change
    WrongCurrentPassword = 1010,
    /// New password shorter than the minimum length
    PasswordTooShort = 1011,
    /// New password and confirmation differ
    PasswordMismatch = 1012,

    // ==================== 2xxx: Storage ====================
    /// Persisted namespace contained malformed content
    StorageCorrupt = 2001,
    /// Write to a persisted namespace failed
    StorageWrite = 2002,

    // ==================== 3xxx: Collaborators ====================
    /// An external collaborator (image read, analytics sink) failed
    CollaboratorFailure = 3001,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::RequiredField => "Required field missing",
            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "Incorrect password",
            Self::WrongCurrentPassword => "Current password is incorrect",
            Self::PasswordTooShort => "Password is too short",
            Self::PasswordMismatch => "Passwords do not match",
            Self::StorageCorrupt => "Stored data is corrupt",
            Self::StorageWrite => "Failed to persist data",
            Self::CollaboratorFailure => "External collaborator failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            7 => Ok(Self::RequiredField),
            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::InvalidCredentials),
            1010 => Ok(Self::WrongCurrentPassword),
            1011 => Ok(Self::PasswordTooShort),
            1012 => Ok(Self::PasswordMismatch),
            2001 => Ok(Self::StorageCorrupt),
            2002 => Ok(Self::StorageWrite),
            3001 => Ok(Self::CollaboratorFailure),
            other => Err(other),
        }
    }
}

/// Application error with structured error code
///
/// The primary error type for the Souk engine, providing standardized codes
/// via [`ErrorCode`] plus a human-readable message for the UI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required-field error
    pub fn required_field(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create a wrong-current-password error
    pub fn wrong_current_password() -> Self {
        Self::new(ErrorCode::WrongCurrentPassword)
    }

    /// Create a password-too-short error
    pub fn password_too_short(min_len: usize) -> Self {
        Self::with_message(
            ErrorCode::PasswordTooShort,
            format!("Password must be at least {min_len} characters"),
        )
    }

    /// Create a password-mismatch error
    pub fn password_mismatch() -> Self {
        Self::new(ErrorCode::PasswordMismatch)
    }

    /// Create a storage-corrupt error
    pub fn storage_corrupt(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageCorrupt, msg)
    }

    /// Create a storage-write error
    pub fn storage_write(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageWrite, msg)
    }

    /// Create a collaborator failure error
    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::CollaboratorFailure, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
