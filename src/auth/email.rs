//! The email address used to identify a user at log-in.

use std::fmt::Display;

use crate::Error;

/// A trimmed, lower case email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Create and validate an email address.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidEmail] if `raw_email` is empty or has no '@'.
    pub fn new(raw_email: &str) -> Result<Self, Error> {
        let email = raw_email.trim().to_lowercase();

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(Self(email)),
            _ => Err(Error::InvalidEmail(raw_email.to_owned())),
        }
    }

    /// Wrap an email address read back from the database.
    pub fn new_unchecked(raw_email: &str) -> Self {
        Self(raw_email.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::Email;

    #[test]
    fn normalises_email() {
        let email = Email::new("  Driver@Example.COM ").unwrap();

        assert_eq!(email.as_ref(), "driver@example.com");
    }

    #[test]
    fn rejects_missing_at_symbol() {
        assert_eq!(
            Email::new("foobar.baz"),
            Err(Error::InvalidEmail("foobar.baz".to_owned()))
        );
    }

    #[test]
    fn rejects_empty_string() {
        assert!(matches!(Email::new(""), Err(Error::InvalidEmail(_))));
        assert!(matches!(Email::new("@"), Err(Error::InvalidEmail(_))));
    }
}
