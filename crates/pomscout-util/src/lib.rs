//! Shared utilities for pomscout.
//!
//! This crate provides cross-cutting concerns used by all other pomscout crates:
//! the unified error type, descriptor file discovery, and terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
