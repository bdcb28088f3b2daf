//! Canonical payload assembly.
//!
//! Turns a validated [`WifiCredentials`] into the configuration string that
//! scanners understand:
//!
//! ```text
//! WIFI:T:<security>;S:<ssid>;P:<password>;H:<true|false>;;
//! ```
//!
//! The `P:` field is omitted for open networks. Field order is fixed
//! (T, S, P, H) so payloads are byte-reproducible; conforming readers accept
//! any order.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::credentials::{Credential, WifiCredentials};
use crate::escape::escape;

/// An assembled configuration payload.
///
/// Immutable once produced. A conforming reader of this string recovers the
/// original ssid and password bytes exactly, escaping included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct WifiPayload(String);

impl WifiPayload {
    /// Assembles the canonical payload from validated credentials.
    ///
    /// Infallible: every constraint was enforced when the [`WifiCredentials`]
    /// was constructed, so nothing here can fail.
    #[must_use]
    pub fn assemble(credentials: &WifiCredentials) -> Self {
        let mut payload = String::with_capacity(32 + credentials.ssid().len());

        payload.push_str("WIFI:T:");
        payload.push_str(credentials.credential().mode().tag());
        payload.push_str(";S:");
        payload.push_str(&escape(credentials.ssid()));
        payload.push(';');

        match credentials.credential() {
            Credential::Open => {}
            Credential::Wpa { passphrase } => {
                payload.push_str("P:");
                payload.push_str(&escape(passphrase));
                payload.push(';');
            }
            Credential::Wep { key } => {
                payload.push_str("P:");
                payload.push_str(&escape(key));
                payload.push(';');
            }
        }

        payload.push_str("H:");
        payload.push_str(if credentials.hidden() { "true" } else { "false" });
        payload.push_str(";;");

        Self(payload)
    }

    /// The payload as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the payload, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WifiPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WifiPayload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
