//! Operation: find modules depending on an artifact.

use std::path::{Path, PathBuf};

use pomscout_core::config::GlobalConfig;
use pomscout_core::descriptor::ModuleDescriptor;
use pomscout_core::restriction::RestrictionList;
use pomscout_maven::reader::PomReader;
use pomscout_resolver::resolver;
use pomscout_util::fs::find_descriptor_files;

/// Options for `pomscout`.
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Root directory searched recursively for module descriptors.
    pub directory: PathBuf,
    /// Artifact id whose dependents are reported.
    pub search: String,
    /// File listing the only module names that may be reported.
    pub only_from: Option<PathBuf>,
}

/// Outcome of one search, ready for printing.
#[derive(Debug, Clone)]
pub struct FindReport {
    pub target: String,
    /// Selected modules, sorted by display line.
    pub dependents: Vec<ModuleDescriptor>,
    /// Number of descriptor files scanned.
    pub processed: usize,
    pub restriction: RestrictionList,
}

impl FindReport {
    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    /// The console report, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.dependents.len() + 3);
        if self.dependents.is_empty() {
            lines.push(format!("There are no dependent modules on {}", self.target));
        } else {
            lines.push(format!("Dependents on {}:", self.target));
            lines.extend(self.dependents.iter().map(|m| format!("    {m}")));
        }
        lines.push(String::new());
        lines.push(format!(
            "Total count of processed files: {}",
            self.processed
        ));
        lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines().join("\n");
        out.push('\n');
        out
    }
}

/// Scan `opts.directory` and resolve dependents of `opts.search`.
pub fn find(opts: &FindOptions, config: &GlobalConfig) -> miette::Result<FindReport> {
    let files = find_descriptor_files(
        &opts.directory,
        &config.search.descriptor,
        &config.search.exclude,
    )?;
    tracing::info!(
        "Found {} {} files under {}",
        files.len(),
        config.search.descriptor,
        opts.directory.display()
    );

    let restriction = load_restriction(opts.only_from.as_deref());
    let reader = PomReader::new();
    let selected = resolver::find_dependents(
        &reader,
        &files,
        &opts.search,
        &restriction,
        config.resolver.on_cycle,
    )?;

    let mut dependents: Vec<ModuleDescriptor> = selected.into_iter().collect();
    dependents.sort_by_cached_key(|m| m.to_string());

    Ok(FindReport {
        target: opts.search.clone(),
        dependents,
        processed: files.len(),
        restriction,
    })
}

fn load_restriction(path: Option<&Path>) -> RestrictionList {
    match path {
        Some(path) => {
            let list = RestrictionList::load(path);
            tracing::debug!("Restricting results to {} module names", list.len());
            list
        }
        None => RestrictionList::default(),
    }
}
