//! Plugin references.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Opaque handle naming an optional extension module of the consuming tool,
/// for example `@tailwindcss/forms`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    /// Wraps a plugin handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PluginRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PluginRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PluginRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
