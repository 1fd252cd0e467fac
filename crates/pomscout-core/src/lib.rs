//! Core data types for pomscout.
//!
//! This crate defines the types shared by the reader, the resolver and the
//! operations layer: module descriptors and the [`descriptor::DescriptorReader`]
//! seam, restriction lists, and global configuration.
//!
//! This crate is intentionally free of XML parsing and traversal logic.

/// Default module descriptor file name searched for under the project root.
pub const DEFAULT_DESCRIPTOR_NAME: &str = "pom.xml";

pub mod config;
pub mod descriptor;
pub mod restriction;
