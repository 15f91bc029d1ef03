//! Record and Candidate types stored in the collection.
//!
//! A `Record` is one saved site/username/password entry.  The password
//! is stored in plaintext — PassOP is a faithful local-first manager
//! with no encryption layer (a documented limitation, not an accident
//! of this module).

use serde::{Deserialize, Serialize};

use crate::errors::{PassopError, Result};

/// Every textual field must be strictly longer than this many characters.
pub const MIN_FIELD_LEN: usize = 3;

/// A single saved credential entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, assigned at creation and never changed.
    pub id: String,

    /// The site the credential belongs to (e.g. "https://example.com").
    pub site: String,

    /// The username for the site.
    pub username: String,

    /// The password, stored as plaintext.
    pub password: String,
}

/// An unsaved site/username/password triple, as collected from the user.
///
/// Validation happens here so `add` and `edit` apply the identical rule.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub site: String,
    pub username: String,
    pub password: String,
}

impl Candidate {
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check that every field exceeds `MIN_FIELD_LEN` characters.
    ///
    /// Duplicate site/username combinations are allowed; length is the
    /// only rule.  The error message names each offending field.
    pub fn validate(&self) -> Result<()> {
        let mut too_short = Vec::new();
        for (name, value) in [
            ("site", &self.site),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.chars().count() <= MIN_FIELD_LEN {
                too_short.push(name);
            }
        }

        if too_short.is_empty() {
            Ok(())
        } else {
            Err(PassopError::Validation(format!(
                "{} must be longer than {MIN_FIELD_LEN} characters",
                too_short.join(", ")
            )))
        }
    }

    /// Turn this candidate into a `Record` carrying the given identifier.
    pub(crate) fn into_record(self, id: String) -> Record {
        Record {
            id,
            site: self.site,
            username: self.username,
            password: self.password,
        }
    }
}
