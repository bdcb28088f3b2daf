//! WiFi credential types and validation.
//!
//! User-supplied credentials enter through [`WifiCredentials::new`], which
//! applies the format's constraints in a fixed order and fails fast on the
//! first violation. Once constructed, a [`WifiCredentials`] is guaranteed
//! encodable: the [`Credential`] variant makes "password required iff the
//! mode is not open" a type-level invariant rather than a runtime check.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, WifiQrError};

/// Maximum SSID length in UTF-8 bytes (802.11 limit).
pub const MAX_SSID_BYTES: usize = 32;

/// Minimum WPA passphrase length in characters.
pub const WPA_MIN_PASSPHRASE_CHARS: usize = 8;

/// Maximum WPA passphrase length in characters.
pub const WPA_MAX_PASSPHRASE_CHARS: usize = 63;

/// The network's authentication scheme.
///
/// Serialized with the wire tags the configuration string format uses
/// (`WPA`, `WEP`, `nopass`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SecurityMode {
    /// WPA/WPA2 personal. The standard for modern networks.
    #[default]
    #[serde(rename = "WPA")]
    Wpa,

    /// Legacy WEP.
    #[serde(rename = "WEP")]
    Wep,

    /// Open network, no password.
    #[serde(rename = "nopass")]
    Open,
}

impl SecurityMode {
    /// The literal tag used in the payload's `T:` field.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::Open => "nopass",
        }
    }

    /// Whether this mode requires a password.
    #[must_use]
    pub const fn requires_password(self) -> bool {
        !matches!(self, Self::Open)
    }
}

impl fmt::Display for SecurityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A validated credential, tagged by security mode.
///
/// Password presence is carried by the variant itself: an [`Credential::Open`]
/// network has no password field at all, and the other variants always hold
/// a non-empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Open network.
    Open,

    /// WPA/WPA2 with a passphrase of 8-63 characters.
    Wpa {
        /// The network passphrase.
        passphrase: String,
    },

    /// WEP with a non-empty key.
    ///
    /// Real WEP keys come in fixed lengths (5/13/16/29 ASCII characters or
    /// 10/26 hex digits); only non-emptiness is enforced here.
    Wep {
        /// The network key.
        key: String,
    },
}

impl Credential {
    /// The security mode of this credential.
    #[must_use]
    pub const fn mode(&self) -> SecurityMode {
        match self {
            Self::Open => SecurityMode::Open,
            Self::Wpa { .. } => SecurityMode::Wpa,
            Self::Wep { .. } => SecurityMode::Wep,
        }
    }

    /// The password, if this mode carries one.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        match self {
            Self::Open => None,
            Self::Wpa { passphrase } => Some(passphrase),
            Self::Wep { key } => Some(key),
        }
    }
}

/// A validated set of WiFi credentials, ready for payload assembly.
///
/// Constructed only through [`WifiCredentials::new`], so every value of this
/// type satisfies the format's constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    ssid: String,
    credential: Credential,
    hidden: bool,
}

impl WifiCredentials {
    /// Validates raw inputs and constructs a credential set.
    ///
    /// Rules are applied in order, first failure wins:
    ///
    /// 1. `ssid` must be non-empty
    /// 2. `ssid` must be at most [`MAX_SSID_BYTES`] bytes of UTF-8
    /// 3. non-open modes require a non-empty password
    /// 4. WPA passphrases must be [`WPA_MIN_PASSPHRASE_CHARS`] to
    ///    [`WPA_MAX_PASSPHRASE_CHARS`] characters
    /// 5. WEP keys need only be non-empty (already guaranteed by rule 3)
    ///
    /// A password supplied for an open network is ignored.
    ///
    /// # Errors
    ///
    /// Returns the validation failure for the first violated rule.
    pub fn new(
        ssid: impl Into<String>,
        mode: SecurityMode,
        password: Option<String>,
        hidden: bool,
    ) -> Result<Self> {
        let ssid = ssid.into();

        if ssid.is_empty() {
            return Err(WifiQrError::EmptyNetworkName);
        }
        if ssid.len() > MAX_SSID_BYTES {
            return Err(WifiQrError::NetworkNameTooLong {
                max: MAX_SSID_BYTES,
                actual: ssid.len(),
            });
        }

        let credential = match mode {
            SecurityMode::Open => Credential::Open,
            SecurityMode::Wpa | SecurityMode::Wep => {
                let password = password.filter(|p| !p.is_empty()).ok_or(
                    WifiQrError::MissingPassword { mode: mode.tag() },
                )?;

                if mode == SecurityMode::Wpa {
                    let chars = password.chars().count();
                    if !(WPA_MIN_PASSPHRASE_CHARS..=WPA_MAX_PASSPHRASE_CHARS).contains(&chars) {
                        return Err(WifiQrError::InvalidWpaPasswordLength {
                            min: WPA_MIN_PASSPHRASE_CHARS,
                            max: WPA_MAX_PASSPHRASE_CHARS,
                            actual: chars,
                        });
                    }
                    Credential::Wpa { passphrase: password }
                } else {
                    Credential::Wep { key: password }
                }
            }
        };

        Ok(Self {
            ssid,
            credential,
            hidden,
        })
    }

    /// The network name.
    #[must_use]
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// The validated credential.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Whether the network suppresses broadcast of its name.
    #[must_use]
    pub const fn hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wpa(ssid: &str, password: &str) -> Result<WifiCredentials> {
        WifiCredentials::new(ssid, SecurityMode::Wpa, Some(password.to_string()), false)
    }

    #[test]
    fn test_empty_ssid_rejected() {
        let err = wpa("", "password123").unwrap_err();
        assert!(matches!(err, WifiQrError::EmptyNetworkName));
    }

    #[test]
    fn test_ssid_at_32_bytes_accepted() {
        let ssid = "a".repeat(32);
        assert!(wpa(&ssid, "password123").is_ok());
    }

    #[test]
    fn test_ssid_over_32_bytes_rejected() {
        let ssid = "a".repeat(33);
        let err = wpa(&ssid, "password123").unwrap_err();
        assert!(matches!(
            err,
            WifiQrError::NetworkNameTooLong { max: 32, actual: 33 }
        ));
    }

    #[test]
    fn test_ssid_byte_length_counts_utf8_bytes() {
        // 33 two-byte characters: 17 chars would already pass a char count,
        // but the 802.11 limit is bytes.
        let ssid = "\u{e9}".repeat(17); // 34 bytes
        let err = wpa(&ssid, "password123").unwrap_err();
        assert!(matches!(
            err,
            WifiQrError::NetworkNameTooLong { max: 32, actual: 34 }
        ));
    }

    #[test]
    fn test_missing_password_for_wpa() {
        let err = WifiCredentials::new("Net", SecurityMode::Wpa, None, false).unwrap_err();
        assert!(matches!(err, WifiQrError::MissingPassword { mode: "WPA" }));
    }

    #[test]
    fn test_empty_password_for_wep() {
        let err =
            WifiCredentials::new("Net", SecurityMode::Wep, Some(String::new()), false).unwrap_err();
        assert!(matches!(err, WifiQrError::MissingPassword { mode: "WEP" }));
    }

    #[test]
    fn test_wpa_password_length_boundaries() {
        assert!(wpa("Net", &"a".repeat(7)).is_err());
        assert!(wpa("Net", &"a".repeat(8)).is_ok());
        assert!(wpa("Net", &"a".repeat(63)).is_ok());
        let err = wpa("Net", &"a".repeat(64)).unwrap_err();
        assert!(matches!(
            err,
            WifiQrError::InvalidWpaPasswordLength {
                min: 8,
                max: 63,
                actual: 64
            }
        ));
    }

    #[test]
    fn test_wpa_password_length_counts_characters_not_bytes() {
        // 8 two-byte characters are a valid passphrase even at 16 bytes.
        let password = "\u{e9}".repeat(8);
        assert!(wpa("Net", &password).is_ok());
    }

    #[test]
    fn test_wep_accepts_one_character_key() {
        let creds = WifiCredentials::new("Net", SecurityMode::Wep, Some("k".into()), false)
            .expect("1-char WEP key is valid");
        assert_eq!(creds.credential().password(), Some("k"));
    }

    #[test]
    fn test_open_network_needs_no_password() {
        let creds = WifiCredentials::new("Guest", SecurityMode::Open, None, false)
            .expect("open network without password is valid");
        assert_eq!(creds.credential(), &Credential::Open);
        assert_eq!(creds.credential().password(), None);
    }

    #[test]
    fn test_open_network_ignores_supplied_password() {
        let creds =
            WifiCredentials::new("Guest", SecurityMode::Open, Some("ignored".into()), false)
                .expect("password is ignored for open networks");
        assert_eq!(creds.credential(), &Credential::Open);
    }

    #[test]
    fn test_ssid_rule_checked_before_password_rule() {
        // First failure wins: empty ssid reported even though password is also missing.
        let err = WifiCredentials::new("", SecurityMode::Wpa, None, false).unwrap_err();
        assert!(matches!(err, WifiQrError::EmptyNetworkName));
    }

    #[test]
    fn test_security_mode_tags() {
        assert_eq!(SecurityMode::Wpa.tag(), "WPA");
        assert_eq!(SecurityMode::Wep.tag(), "WEP");
        assert_eq!(SecurityMode::Open.tag(), "nopass");
    }

    #[test]
    fn test_security_mode_requires_password() {
        assert!(SecurityMode::Wpa.requires_password());
        assert!(SecurityMode::Wep.requires_password());
        assert!(!SecurityMode::Open.requires_password());
    }

    #[test]
    fn test_security_mode_serde_wire_tags() {
        assert_eq!(serde_json::to_string(&SecurityMode::Wpa).unwrap(), "\"WPA\"");
        assert_eq!(serde_json::to_string(&SecurityMode::Open).unwrap(), "\"nopass\"");
        let mode: SecurityMode = serde_json::from_str("\"WEP\"").unwrap();
        assert_eq!(mode, SecurityMode::Wep);
    }

    #[test]
    fn test_credential_mode_roundtrip() {
        let creds = wpa("Net", "password123").unwrap();
        assert_eq!(creds.credential().mode(), SecurityMode::Wpa);
        assert_eq!(creds.credential().password(), Some("password123"));
    }
}
