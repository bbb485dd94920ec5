//! Four-digit sign-in PIN.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::domain::foundation::ValidationError;

/// PIN assumed for any account without an explicit entry.
pub const DEFAULT_PIN: &str = "0000";

/// A validated PIN: exactly four ASCII digits.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "pin",
                "PIN must be exactly 4 digits",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// Parses a caller-supplied secret.
    pub fn from_secret(secret: &SecretString) -> Result<Self, ValidationError> {
        Self::parse(secret.expose_secret())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// Compares a candidate against the stored PIN (or the default) in constant
/// time with respect to the PIN contents.
pub fn verify_pin(stored: Option<&str>, candidate: &SecretString) -> bool {
    let expected = stored.unwrap_or(DEFAULT_PIN);
    expected
        .as_bytes()
        .ct_eq(candidate.expose_secret().as_bytes())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[test]
    fn parse_accepts_four_digits() {
        assert_eq!(Pin::parse("4821").unwrap().as_str(), "4821");
    }

    #[test]
    fn parse_rejects_wrong_length_and_letters() {
        assert!(Pin::parse("123").is_err());
        assert!(Pin::parse("12345").is_err());
        assert!(Pin::parse("12a4").is_err());
        assert!(Pin::parse("١٢٣٤").is_err());
    }

    #[test]
    fn debug_does_not_leak() {
        assert_eq!(format!("{:?}", Pin::parse("1234").unwrap()), "Pin(****)");
    }

    #[test]
    fn verify_uses_default_when_unset() {
        assert!(verify_pin(None, &secret("0000")));
        assert!(!verify_pin(None, &secret("1111")));
    }

    #[test]
    fn verify_compares_stored_value() {
        assert!(verify_pin(Some("2468"), &secret("2468")));
        assert!(!verify_pin(Some("2468"), &secret("0000")));
        assert!(!verify_pin(Some("2468"), &secret("24680")));
    }
}
