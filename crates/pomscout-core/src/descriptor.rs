use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// One module descriptor file discovered under the project root.
///
/// Identity is the file path: equality, hashing and ordering ignore the
/// extracted fields, so a result set of descriptors is deduplicated by path.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    pub path: PathBuf,
    pub artifact_id: String,
    pub packaging: String,
}

impl ModuleDescriptor {
    pub fn new(
        path: impl Into<PathBuf>,
        artifact_id: impl Into<String>,
        packaging: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            artifact_id: artifact_id.into(),
            packaging: packaging.into(),
        }
    }

    /// `artifactId.packaging`, e.g. `moduleA.war`.
    pub fn module_name(&self) -> String {
        format!("{}.{}", self.artifact_id, self.packaging)
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Module: {} [{}]", self.module_name(), self.path.display())
    }
}

impl PartialEq for ModuleDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for ModuleDescriptor {}

impl Hash for ModuleDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialOrd for ModuleDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

/// Extracts module identity and declared dependencies from descriptor files.
///
/// Implementations never fail: a missing or malformed file is logged and
/// behaves as a module that declares nothing.
pub trait DescriptorReader {
    /// Read the module's own artifact id and packaging.
    fn read_module(&self, path: &Path) -> Option<ModuleDescriptor>;

    /// Whether the file declares `name` as one of its direct dependencies.
    fn has_dependency(&self, path: &Path, name: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_is_path_only() {
        let a = ModuleDescriptor::new("/p/app/pom.xml", "app", "war");
        let b = ModuleDescriptor::new("/p/app/pom.xml", "renamed", "jar");
        let c = ModuleDescriptor::new("/p/lib/pom.xml", "app", "war");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_line() {
        let m = ModuleDescriptor::new("/p/moduleA/pom.xml", "moduleA", "war");
        assert_eq!(m.module_name(), "moduleA.war");
        assert_eq!(m.to_string(), "Module: moduleA.war [/p/moduleA/pom.xml]");
    }
}
