//! Unified error types for the wifiqr core library.
//!
//! This module provides a unified error type [`WifiQrError`] that covers all
//! failure modes across the wifiqr system: credential validation failures and
//! collaborator (QR/image encoding) failures.
//!
//! # Design Principles
//!
//! - **Specific variants**: Each error variant captures exactly one failure mode
//! - **Actionable messages**: Error messages guide users toward resolution
//! - **Context preservation**: Variants carry the constraint and the observed value
//! - **HTTP-ready**: Error types include HTTP status codes and error codes
//!
//! # Example
//!
//! ```rust
//! use wifiqr_core::error::{Result, WifiQrError};
//!
//! fn check_ssid(ssid: &str) -> Result<()> {
//!     if ssid.is_empty() {
//!         return Err(WifiQrError::EmptyNetworkName);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The unified error type for all wifiqr operations.
///
/// Validation variants are deterministic rejections of user input and are
/// never retryable. Encoding variants represent unexpected collaborator
/// failures and are surfaced as generic failures, distinct from validation.
#[derive(Debug, Error)]
pub enum WifiQrError {
    // =========================================================================
    // VALIDATION ERRORS
    // =========================================================================
    /// The network name (SSID) was empty.
    #[error("Network name cannot be empty")]
    EmptyNetworkName,

    /// The network name exceeds the maximum SSID length.
    #[error("Network name must be at most {max} bytes of UTF-8 (got {actual})")]
    NetworkNameTooLong {
        /// Maximum allowed UTF-8 byte length.
        max: usize,
        /// Actual UTF-8 byte length provided.
        actual: usize,
    },

    /// A password is required for the selected security mode but was absent or empty.
    #[error("A password is required for {mode} security")]
    MissingPassword {
        /// Wire tag of the security mode that required a password.
        mode: &'static str,
    },

    /// The WPA passphrase length is outside the allowed range.
    #[error("WPA password must be between {min} and {max} characters (got {actual})")]
    InvalidWpaPasswordLength {
        /// Minimum allowed character length.
        min: usize,
        /// Maximum allowed character length.
        max: usize,
        /// Actual character length provided.
        actual: usize,
    },

    // =========================================================================
    // COLLABORATOR ERRORS
    // =========================================================================
    /// The payload could not be encoded into a QR symbol.
    #[error("QR encoding failed: {0}")]
    QrEncodingFailed(String),

    /// The rendered symbol could not be encoded as an image.
    #[error("Image encoding failed: {0}")]
    ImageEncodingFailed(String),
}

/// A specialized [`Result`] type for wifiqr operations.
///
/// This type alias eliminates the need to specify the error type explicitly
/// when returning results from wifiqr functions.
pub type Result<T> = std::result::Result<T, WifiQrError>;

impl WifiQrError {
    /// Returns `true` if this error is a credential validation failure.
    ///
    /// Validation failures are deterministic and carry a specific error code;
    /// everything else is an unexpected collaborator failure.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyNetworkName
                | Self::NetworkNameTooLong { .. }
                | Self::MissingPassword { .. }
                | Self::InvalidWpaPasswordLength { .. }
        )
    }

    /// Returns `true` if this error came from a rendering collaborator.
    #[inline]
    #[must_use]
    pub const fn is_render_error(&self) -> bool {
        matches!(self, Self::QrEncodingFailed(_) | Self::ImageEncodingFailed(_))
    }

    /// Returns an HTTP-appropriate status code for this error.
    #[inline]
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 422 Unprocessable Entity - well-formed request, invalid credentials
            Self::EmptyNetworkName
            | Self::NetworkNameTooLong { .. }
            | Self::MissingPassword { .. }
            | Self::InvalidWpaPasswordLength { .. } => 422,

            // 500 Internal Server Error - collaborator failures
            Self::QrEncodingFailed(_) | Self::ImageEncodingFailed(_) => 500,
        }
    }

    /// Returns a machine-readable error code for API responses.
    #[inline]
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyNetworkName => "EMPTY_NETWORK_NAME",
            Self::NetworkNameTooLong { .. } => "NETWORK_NAME_TOO_LONG",
            Self::MissingPassword { .. } => "MISSING_PASSWORD",
            Self::InvalidWpaPasswordLength { .. } => "INVALID_WPA_PASSWORD_LENGTH",
            Self::QrEncodingFailed(_) => "QR_ENCODING_FAILED",
            Self::ImageEncodingFailed(_) => "IMAGE_ENCODING_FAILED",
        }
    }
}

impl From<qrcode::types::QrError> for WifiQrError {
    fn from(err: qrcode::types::QrError) -> Self {
        Self::QrEncodingFailed(err.to_string())
    }
}

impl From<image::ImageError> for WifiQrError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageEncodingFailed(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_classification() {
        assert!(WifiQrError::EmptyNetworkName.is_validation_error());
        assert!(WifiQrError::NetworkNameTooLong { max: 32, actual: 33 }.is_validation_error());
        assert!(WifiQrError::MissingPassword { mode: "WPA" }.is_validation_error());
        assert!(WifiQrError::InvalidWpaPasswordLength {
            min: 8,
            max: 63,
            actual: 7
        }
        .is_validation_error());

        assert!(!WifiQrError::QrEncodingFailed("too long".into()).is_validation_error());
    }

    #[test]
    fn test_render_error_classification() {
        assert!(WifiQrError::QrEncodingFailed("data too long".into()).is_render_error());
        assert!(WifiQrError::ImageEncodingFailed("png".into()).is_render_error());

        assert!(!WifiQrError::EmptyNetworkName.is_render_error());
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(WifiQrError::EmptyNetworkName.http_status_code(), 422);
        assert_eq!(
            WifiQrError::NetworkNameTooLong { max: 32, actual: 40 }.http_status_code(),
            422
        );
        assert_eq!(
            WifiQrError::MissingPassword { mode: "WEP" }.http_status_code(),
            422
        );
        assert_eq!(
            WifiQrError::InvalidWpaPasswordLength {
                min: 8,
                max: 63,
                actual: 64
            }
            .http_status_code(),
            422
        );
        assert_eq!(
            WifiQrError::QrEncodingFailed("error".into()).http_status_code(),
            500
        );
        assert_eq!(
            WifiQrError::ImageEncodingFailed("error".into()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(WifiQrError::EmptyNetworkName.error_code(), "EMPTY_NETWORK_NAME");
        assert_eq!(
            WifiQrError::MissingPassword { mode: "WPA" }.error_code(),
            "MISSING_PASSWORD"
        );
        assert_eq!(
            WifiQrError::QrEncodingFailed("x".into()).error_code(),
            "QR_ENCODING_FAILED"
        );
    }

    #[test]
    fn test_error_display_messages() {
        let err = WifiQrError::NetworkNameTooLong { max: 32, actual: 40 };
        assert!(format!("{err}").contains("32"));
        assert!(format!("{err}").contains("40"));

        let err = WifiQrError::MissingPassword { mode: "WEP" };
        assert!(format!("{err}").contains("WEP"));

        let err = WifiQrError::InvalidWpaPasswordLength {
            min: 8,
            max: 63,
            actual: 7
        };
        assert!(format!("{err}").contains("between 8 and 63"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<WifiQrError>();
        assert_sync::<WifiQrError>();
    }
}
