//! Content glob patterns.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A file-path pattern used to select source files to scan for class-name usage.
///
/// The pattern is carried verbatim. Resolving it against the filesystem is the
/// job of the consuming tool, so no syntax checks happen here.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentGlob(String);

impl ContentGlob {
    /// Wraps a pattern string.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Returns the pattern as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentGlob {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentGlob {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentGlob {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContentGlob {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ContentGlob> for String {
    fn from(value: ContentGlob) -> Self {
        value.0
    }
}

impl PartialEq<&str> for ContentGlob {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
