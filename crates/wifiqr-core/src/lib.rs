//! # wifiqr-core
//!
//! Core encoding logic for the wifiqr WiFi QR code generator.
//!
//! This crate provides:
//! - Credential validation and the canonical WiFi configuration payload
//! - Field escaping for the payload's delimited format
//! - QR symbol rendering to SVG and PNG
//! - Print-ready document composition
//!
//! ## Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`credentials`] - Credential types and validation rules
//! - [`escape`] - Metacharacter escaping for payload fields
//! - [`payload`] - Canonical payload assembly
//! - [`render`] - QR symbol encoding and rasterization
//! - [`document`] - Printable HTML card composition
//! - [`error`] - Unified error types for the crate
//!
//! The encoder itself is a pure transformation: validate once at
//! construction ([`WifiCredentials::new`]), assemble once
//! ([`WifiPayload::assemble`]), no shared state, safe to call concurrently.
//!
//! ## Example
//!
//! ```rust
//! use wifiqr_core::{SecurityMode, WifiCredentials, WifiPayload};
//!
//! # fn main() -> wifiqr_core::Result<()> {
//! let creds = WifiCredentials::new(
//!     "HomeNet",
//!     SecurityMode::Wpa,
//!     Some("password123".to_string()),
//!     false,
//! )?;
//! let payload = WifiPayload::assemble(&creds);
//! assert_eq!(payload.as_str(), "WIFI:T:WPA;S:HomeNet;P:password123;H:false;;");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod credentials;
pub mod document;
pub mod error;
pub mod escape;
pub mod payload;
pub mod render;

// Re-export primary types for convenience
pub use credentials::{
    Credential, SecurityMode, WifiCredentials, MAX_SSID_BYTES, WPA_MAX_PASSPHRASE_CHARS,
    WPA_MIN_PASSPHRASE_CHARS,
};
pub use document::compose_print_html;
pub use error::{Result, WifiQrError};
pub use escape::{escape, unescape};
pub use payload::WifiPayload;
pub use render::{encode_symbol, to_png, to_svg, RenderOptions};
