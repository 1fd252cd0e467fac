//! Dependent resolution engine: walks the implicit reverse-dependency graph
//! of module descriptors and selects terminal or named dependents.

pub mod policy;
pub mod resolver;
