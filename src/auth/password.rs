//! Password validation and hashing.
//!
//! `ValidatedPassword` wraps a string and ensures it is a strong password.
//! `PasswordHash` converts a `ValidatedPassword` into a salted and hashed password.

use std::fmt::Display;

use bcrypt::{BcryptError, hash, verify};
use zxcvbn::{Score, feedback::Feedback, zxcvbn};

use crate::Error;

/// A password that has been validated, but not yet hashed.
///
/// This struct can be used to construct a [PasswordHash].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPassword(String);

impl ValidatedPassword {
    /// Create and validate a new password from a string.
    ///
    /// # Errors
    ///
    /// Returns [Error::TooWeak] if the password is too easy to guess. The
    /// message explains why and suggests how to make it stronger.
    pub fn new(raw_password: &str) -> Result<Self, Error> {
        let analysis = zxcvbn(raw_password, &[]);

        if matches!(analysis.score(), Score::Three | Score::Four) {
            return Ok(Self(raw_password.to_owned()));
        }

        Err(Error::TooWeak(
            analysis
                .feedback()
                .unwrap_or(&Feedback::default())
                .to_string(),
        ))
    }

    /// Create a new `ValidatedPassword` without any validation.
    ///
    /// The caller should ensure that `raw_password` is a secure password.
    pub fn new_unchecked(raw_password: &str) -> Self {
        Self(raw_password.to_owned())
    }
}

impl Display for ValidatedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("********")
    }
}

/// A salted and hashed password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// An alias for the default bcrypt cost for hashing passwords.
    pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

    /// Hash a validated password with the bcrypt `cost`.
    ///
    /// # Errors
    ///
    /// Returns [Error::HashingError] if bcrypt fails.
    pub fn new(password: ValidatedPassword, cost: u32) -> Result<Self, Error> {
        hash(&password.0, cost)
            .map(Self)
            .map_err(|error| Error::HashingError(error.to_string()))
    }

    /// Wrap a hash read back from the database.
    pub fn new_unchecked(raw_password_hash: &str) -> Self {
        Self(raw_password_hash.to_owned())
    }

    /// Validate and hash `raw_password` in one step.
    pub fn from_raw_password(raw_password: &str, cost: u32) -> Result<Self, Error> {
        PasswordHash::new(ValidatedPassword::new(raw_password)?, cost)
    }

    /// Check that `raw_password` matches the stored hash.
    pub fn verify(&self, raw_password: &str) -> Result<bool, BcryptError> {
        verify(raw_password, &self.0)
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{PasswordHash, ValidatedPassword};

    #[test]
    fn rejects_empty_password() {
        assert!(matches!(ValidatedPassword::new(""), Err(Error::TooWeak(_))));
    }

    #[test]
    fn rejects_common_password() {
        assert!(matches!(
            ValidatedPassword::new("password1234"),
            Err(Error::TooWeak(_))
        ));
    }

    #[test]
    fn accepts_long_password() {
        assert!(ValidatedPassword::new("asomewhatlongpassword1").is_ok());
    }

    #[test]
    fn display_hides_password() {
        let password = ValidatedPassword::new_unchecked("hunter2");

        assert_eq!(password.to_string(), "********");
    }

    #[test]
    fn hash_verifies_original_password_only() {
        let hash = PasswordHash::from_raw_password("roostersgocockledoodledoo", 4).unwrap();

        assert!(hash.verify("roostersgocockledoodledoo").unwrap());
        assert!(!hash.verify("the_wrong_password").unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let password = ValidatedPassword::new("turkeysgogobblegobble").unwrap();

        let hash = PasswordHash::new(password.clone(), 4).unwrap();
        let dupe_hash = PasswordHash::new(password, 4).unwrap();

        assert_ne!(hash, dupe_hash);
    }
}
