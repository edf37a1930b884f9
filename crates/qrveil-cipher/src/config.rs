use std::fmt::{self, Debug, Formatter};

/// salt used when nothing else is configured
pub const DEFAULT_SALT: &str = "default_salt";
/// PBKDF2 iterations of the wire format
pub const DEFAULT_ROUNDS: u32 = 100_000;

/// Key derivation parameters of a [`PasswordCipher`](crate::PasswordCipher).
///
/// Blobs only decrypt with the same salt and round count they were sealed with.
#[derive(Clone, PartialEq, Eq)]
pub struct CipherConfig {
    salt: Vec<u8>,
    rounds: u32,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self::with_salt(DEFAULT_SALT)
    }
}

impl CipherConfig {
    pub fn with_salt<S: AsRef<[u8]>>(salt: S) -> Self {
        Self {
            salt: salt.as_ref().to_vec(),
            rounds: DEFAULT_ROUNDS,
        }
    }

    /// Overrides the iteration count, a count of 0 is raised to 1
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl Debug for CipherConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("salt", &"*".repeat(self.salt.len()))
            .field("rounds", &self.rounds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CipherConfig::default();
        assert_eq!(config.salt(), b"default_salt");
        assert_eq!(config.rounds(), 100_000);
    }

    #[test]
    fn test_zero_rounds_are_raised() {
        assert_eq!(CipherConfig::with_salt("s").with_rounds(0).rounds(), 1);
    }

    #[test]
    fn test_debug_masks_the_salt() {
        let config = CipherConfig::with_salt("pepper").with_rounds(7);
        assert_eq!(
            format!("{config:?}"),
            r#"CipherConfig { salt: "******", rounds: 7 }"#
        );
    }
}
