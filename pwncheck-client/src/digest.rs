//! The digest stage: secrets in, uppercase hex SHA-1 fingerprints out.

use std::fmt;

use sha1::{Digest, Sha1};

/// Length of a SHA-1 fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 40;

/// Length of the fingerprint prefix transmitted to the range service.
pub const PREFIX_LEN: usize = 5;

/// Length of the fingerprint suffix retained locally and never transmitted.
pub const SUFFIX_LEN: usize = FINGERPRINT_LEN - PREFIX_LEN;

/// Uppercase hex SHA-1 digest of a secret.
///
/// Stands in for the secret in all lookups. Only the first [`PREFIX_LEN`]
/// characters ever go over the network; the rest stays in this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

/// A pre-computed digest that is not 40 hex characters.
#[derive(Debug, thiserror::Error)]
#[error("invalid fingerprint {input:?}: expected {FINGERPRINT_LEN} hex characters")]
pub struct InvalidFingerprint {
    pub input: String,
}

impl Fingerprint {
    /// Hashes a secret into its fingerprint.
    ///
    /// Pure and deterministic: the same secret always produces the same
    /// fingerprint, and hashing valid UTF-8 cannot fail.
    pub fn of(secret: &str) -> Self {
        Fingerprint(format!("{:X}", Sha1::digest(secret.as_bytes())))
    }

    /// Accepts a digest computed elsewhere, normalizing hex casing.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidFingerprint> {
        if hex.len() != FINGERPRINT_LEN || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidFingerprint { input: hex.to_string() });
        }
        Ok(Fingerprint(hex.to_ascii_uppercase()))
    }

    /// The 5-character prefix sent to the range service.
    pub fn prefix(&self) -> &str {
        &self.0[..PREFIX_LEN]
    }

    /// The 35-character suffix matched locally against the candidate batch.
    pub fn suffix(&self) -> &str {
        &self.0[PREFIX_LEN..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn known_digest() {
        // SHA-1 of "password"
        let fp = Fingerprint::of("password");
        assert_eq!(fp.as_str(), "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn hex_rendering_matches_raw_digest() {
        let raw = Sha1::digest(b"password");
        assert_eq!(raw[..], hex!("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8")[..]);
    }

    #[test]
    fn deterministic() {
        assert_eq!(Fingerprint::of("hunter2"), Fingerprint::of("hunter2"));
    }

    #[test]
    fn case_of_secret_changes_digest() {
        assert_ne!(Fingerprint::of("password"), Fingerprint::of("Password"));
    }

    #[test]
    fn prefix_and_suffix_recompose() {
        let fp = Fingerprint::of("letmein");
        assert_eq!(fp.prefix().len(), PREFIX_LEN);
        assert_eq!(fp.suffix().len(), SUFFIX_LEN);
        assert_eq!(format!("{}{}", fp.prefix(), fp.suffix()), fp.as_str());
    }

    #[test]
    fn empty_secret_still_fingerprints() {
        // SHA-1 of the empty string
        assert_eq!(
            Fingerprint::of("").as_str(),
            "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709"
        );
    }

    #[test]
    fn from_hex_normalizes_case() {
        let fp = Fingerprint::from_hex("5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8").unwrap();
        assert_eq!(fp, Fingerprint::of("password"));
    }

    #[test]
    fn from_hex_rejects_wrong_length_and_non_hex() {
        assert!(Fingerprint::from_hex("5BAA6").is_err());
        assert!(
            Fingerprint::from_hex("ZBAA61E4C9B93F3F0682250B6CF8331B7EE68FD8").is_err()
        );
    }
}
