//! Which visited modules end up in the result set.

use pomscout_core::restriction::RestrictionList;

/// Selection rule, decided once per run from the restriction list.
#[derive(Debug, Clone)]
pub enum SelectionPolicy {
    /// Report only modules nothing else in the scanned set depends on.
    Terminal,
    /// Report any module whose artifact id is listed, at any depth.
    Named(RestrictionList),
}

impl SelectionPolicy {
    pub fn from_restriction(restriction: &RestrictionList) -> Self {
        if restriction.is_empty() {
            Self::Terminal
        } else {
            Self::Named(restriction.clone())
        }
    }

    /// Whether the module searched under `current_name` is reported, given
    /// whether any other module was found to depend on it.
    pub fn selects(&self, current_name: &str, any_child_depends: bool) -> bool {
        match self {
            Self::Terminal => !any_child_depends,
            Self::Named(names) => names.contains(current_name),
        }
    }
}
