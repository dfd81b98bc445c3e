//! Domain-specific error types and error handling.
//!
//! The orchestrator classifies every collaborator failure into an
//! [`AuthError`] kind and passes it to the transport boundary untouched;
//! mapping kinds to response classifications (client fault vs server fault)
//! is the transport's concern, not this crate's.

use thiserror::Error;

/// Authentication flow errors
///
/// `OtpNotFound` covers both "never issued" and "expired"; callers
/// cannot tell the two apart.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("too many requests")]
    RateLimited,

    #[error("otp not found or expired")]
    OtpNotFound,

    #[error("invalid OTP code")]
    InvalidOtp,

    #[error("user not found")]
    UserNotFound,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("operation timed out")]
    Timeout,

    #[error("internal auth service error: {message}")]
    Internal { message: String },
}

impl AuthError {
    /// Build an internal error from any displayable cause
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: cause.to_string(),
        }
    }
}

/// Session token errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("token signing failed")]
    SigningFailed,

    #[error("invalid key size: must be at least {min} bytes")]
    WeakSecret { min: usize, actual: usize },
}

/// OTP storage errors
///
/// `NotFound` stands for absent and expired records alike; finding an
/// expired record behaves identically to finding nothing.
#[derive(Error, Debug)]
pub enum OtpStoreError {
    #[error("otp not found or expired")]
    NotFound,

    #[error("otp storage unavailable: {message}")]
    Unavailable { message: String },
}

/// OTP generator construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OtpGeneratorError {
    #[error("code length must be greater than zero")]
    InvalidLength,

    #[error("alphabet must not be empty")]
    EmptyAlphabet,

    #[error("alphabet must be ASCII")]
    NonAsciiAlphabet,
}

impl From<OtpStoreError> for AuthError {
    fn from(err: OtpStoreError) -> Self {
        match err {
            OtpStoreError::NotFound => AuthError::OtpNotFound,
            OtpStoreError::Unavailable { message } => AuthError::Internal {
                message: format!("otp storage unavailable: {}", message),
            },
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_otp_not_found() {
        let err: AuthError = OtpStoreError::NotFound.into();
        assert!(matches!(err, AuthError::OtpNotFound));
    }

    #[test]
    fn test_store_unavailable_maps_to_internal() {
        let err: AuthError = OtpStoreError::Unavailable {
            message: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(err, AuthError::Internal { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(AuthError::OtpNotFound.to_string(), "otp not found or expired");
        assert_eq!(AuthError::InvalidOtp.to_string(), "invalid OTP code");
        assert_eq!(TokenError::Expired.to_string(), "token has expired");
        assert_eq!(TokenError::Invalid.to_string(), "invalid token");
    }
}
