//! Descriptor reader for `pom.xml` files.
//!
//! `has_dependency` is two-phase: a line scan for the raw name rules out
//! most files before any XML is parsed, then the parsed POM confirms that
//! the name is a declared dependency and not an incidental substring.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pomscout_core::descriptor::{DescriptorReader, ModuleDescriptor};
use pomscout_util::errors::ScoutError;

use crate::pom::{parse_pom, Pom};

/// Reads module identity and dependency declarations from POM files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PomReader;

impl PomReader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a POM file.
    pub fn load(&self, path: &Path) -> Result<Pom, ScoutError> {
        let bytes = std::fs::read(path).map_err(|e| ScoutError::Descriptor {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        parse_pom(&String::from_utf8_lossy(&bytes)).map_err(|e| ScoutError::Descriptor {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether any line of the file contains `needle` as a literal substring.
    pub fn mentions(&self, path: &Path, needle: &str) -> bool {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Cannot open {}: {e}", path.display());
                return false;
            }
        };
        let needle = needle.as_bytes();
        for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Cannot read {}: {e}", path.display());
                    return false;
                }
            };
            if contains_bytes(&line, needle) {
                tracing::trace!("{}: line {} mentions the name", path.display(), index + 1);
                return true;
            }
        }
        false
    }
}

impl DescriptorReader for PomReader {
    fn read_module(&self, path: &Path) -> Option<ModuleDescriptor> {
        let pom = match self.load(path) {
            Ok(pom) => pom,
            Err(e) => {
                tracing::warn!("{e}");
                return None;
            }
        };
        let packaging = pom.effective_packaging().to_string();
        match pom.artifact_id.filter(|id| !id.is_empty()) {
            Some(artifact_id) => Some(ModuleDescriptor::new(path, artifact_id, packaging)),
            None => {
                tracing::warn!("{} declares no <artifactId>", path.display());
                None
            }
        }
    }

    fn has_dependency(&self, path: &Path, name: &str) -> bool {
        if !self.mentions(path, name) {
            return false;
        }
        match self.load(path) {
            Ok(pom) => match pom.find_dependency(name) {
                Some(dep) => {
                    tracing::debug!(
                        "{} depends on {name} (scope: {}{})",
                        path.display(),
                        dep.scope.as_deref().unwrap_or("compile"),
                        if dep.managed { ", managed" } else { "" }
                    );
                    true
                }
                None => false,
            },
            Err(e) => {
                tracing::warn!("{e}");
                false
            }
        }
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
