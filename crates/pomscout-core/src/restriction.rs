//! Allow-list of module names read from an `--only-from` file.

use std::collections::BTreeSet;
use std::path::Path;

/// Module artifact ids that switch reporting from terminal modules to named
/// modules at any depth. Order-insensitive; only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionList {
    names: BTreeSet<String>,
}

impl RestrictionList {
    /// Load one module name per line. Blank lines and `#` comments are
    /// skipped. A missing or unreadable file yields an empty list.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!("Failed to read restriction list {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RestrictionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
