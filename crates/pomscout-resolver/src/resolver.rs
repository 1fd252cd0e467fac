//! Core dependent resolution algorithm: depth-first walk of the implicit
//! reverse-dependency graph, terminal/named selection, and cycle detection.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use pomscout_core::config::CyclePolicy;
use pomscout_core::descriptor::{DescriptorReader, ModuleDescriptor};
use pomscout_core::restriction::RestrictionList;
use pomscout_util::errors::ScoutError;

use crate::policy::SelectionPolicy;

/// Find every module in `files` that depends, directly or transitively, on
/// `target`, reporting terminal modules or those named in `restriction`.
pub fn find_dependents<R: DescriptorReader>(
    reader: &R,
    files: &[PathBuf],
    target: &str,
    restriction: &RestrictionList,
    on_cycle: CyclePolicy,
) -> Result<BTreeSet<ModuleDescriptor>, ScoutError> {
    Resolver::new(reader, files, restriction, on_cycle).run(target)
}

/// State for one resolution run.
///
/// Dependents of a name are found by scanning every file, so no index is
/// built. The sub-walk below a module depends only on that module, so each
/// module is walked at most once per run.
pub struct Resolver<'a, R> {
    reader: &'a R,
    files: &'a [PathBuf],
    policy: SelectionPolicy,
    on_cycle: CyclePolicy,
    results: BTreeSet<ModuleDescriptor>,
    /// Modules whose dependents are currently being walked, outermost first.
    stack: Vec<ModuleDescriptor>,
    finished: HashSet<PathBuf>,
}

impl<'a, R: DescriptorReader> Resolver<'a, R> {
    pub fn new(
        reader: &'a R,
        files: &'a [PathBuf],
        restriction: &RestrictionList,
        on_cycle: CyclePolicy,
    ) -> Self {
        Self {
            reader,
            files,
            policy: SelectionPolicy::from_restriction(restriction),
            on_cycle,
            results: BTreeSet::new(),
            stack: Vec::new(),
            finished: HashSet::new(),
        }
    }

    /// Walk dependents of `target` and return the selected modules.
    pub fn run(mut self, target: &str) -> Result<BTreeSet<ModuleDescriptor>, ScoutError> {
        tracing::debug!(
            "Searching {} descriptors for dependents of {target} ({:?} policy)",
            self.files.len(),
            self.policy
        );
        self.visit(target, None)?;
        Ok(self.results)
    }

    /// Scan for modules depending on `current_name`, recurse into each, then
    /// decide whether `origin` (the module named `current_name`) is reported.
    /// Returns whether anything depends on `current_name`.
    fn visit(
        &mut self,
        current_name: &str,
        origin: Option<&ModuleDescriptor>,
    ) -> Result<bool, ScoutError> {
        let depth = self.stack.len();
        let files = self.files;
        let mut any_child_depends = false;

        for file in files {
            if !self.reader.has_dependency(file, current_name) {
                continue;
            }
            let Some(child) = self.reader.read_module(file) else {
                tracing::warn!(
                    "Skipping {}: depends on {current_name} but its identity is unreadable",
                    file.display()
                );
                continue;
            };
            any_child_depends = true;
            tracing::debug!(
                "[depth {depth}] {} depends on {current_name}",
                child.module_name()
            );

            if let Some(pos) = self.stack.iter().position(|m| m.path == child.path) {
                let chain: Vec<String> = self.stack[pos..]
                    .iter()
                    .chain(std::iter::once(&child))
                    .map(|m| m.artifact_id.clone())
                    .collect();
                match self.on_cycle {
                    CyclePolicy::Fail => return Err(ScoutError::Cycle { chain }),
                    CyclePolicy::Warn => {
                        tracing::warn!("Not following cycle {}", chain.join(" -> "));
                        continue;
                    }
                }
            }
            if self.finished.contains(&child.path) {
                tracing::trace!("[depth {depth}] {} already walked", child.module_name());
                continue;
            }

            self.stack.push(child.clone());
            let walked = self.visit(&child.artifact_id, Some(&child));
            self.stack.pop();
            walked?;
            self.finished.insert(child.path);
        }

        if let Some(origin) = origin {
            if self.policy.selects(current_name, any_child_depends) {
                tracing::info!("[depth {depth}] selected {origin}");
                self.results.insert(origin.clone());
            }
        }
        Ok(any_child_depends)
    }
}
