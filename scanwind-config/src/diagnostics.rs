//! Advisory checks over a loaded descriptor.
//!
//! Loading never rejects a descriptor for these findings. Consumers call
//! [`ScanAndThemeConfig::diagnostics`] when they want to surface them.

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use scanwind_primitives::{ContentGlob, CssLength, Error as PrimitiveError};

use crate::schema::ScanAndThemeConfig;

/// A single advisory finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// `content` is empty, so the consumer will find no class usages.
    EmptyContent,
    /// The same glob appears more than once in `content`.
    DuplicateGlob {
        /// The repeated pattern.
        glob: ContentGlob,
    },
    /// `theme.extend.container.padding` is not a CSS length.
    InvalidPadding {
        /// Padding as written.
        padding: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => f.write_str("content lists no globs; no utility classes will be generated"),
            Self::DuplicateGlob { glob } => write!(f, "content glob `{glob}` is listed more than once"),
            Self::InvalidPadding { padding, reason } => {
                write!(f, "container padding `{padding}` is not a css length: {reason}")
            }
        }
    }
}

impl ScanAndThemeConfig {
    /// Returns advisory findings in a stable order: content checks first, then theme checks.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut found = Vec::new();

        if self.content().is_empty() {
            found.push(Diagnostic::EmptyContent);
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for glob in self.content() {
            if !seen.insert(glob) && reported.insert(glob) {
                found.push(Diagnostic::DuplicateGlob { glob: glob.clone() });
            }
        }

        if let Some(container) = self.container() {
            if let Err(PrimitiveError::InvalidCssLength { reason, .. }) =
                CssLength::parse(container.padding())
            {
                found.push(Diagnostic::InvalidPadding {
                    padding: container.padding().to_owned(),
                    reason,
                });
            }
        }

        found
    }
}
