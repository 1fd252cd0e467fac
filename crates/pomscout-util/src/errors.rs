use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pomscout operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ScoutError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A module descriptor could not be read or parsed.
    #[error("Descriptor error in {}: {message}", .path.display())]
    Descriptor { path: PathBuf, message: String },

    /// The directory to scan does not exist or is not a directory.
    #[error("Not a directory: {}", .path.display())]
    #[diagnostic(help("Pass an existing project root with --directory"))]
    Directory { path: PathBuf },

    /// Invalid or unreadable configuration file.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.pomscout/config.toml for syntax errors"))]
    Config { message: String },

    /// Module descriptors depend on each other in a loop.
    #[error("Dependency cycle detected: {}", .chain.join(" -> "))]
    #[diagnostic(help("Set `on-cycle = \"warn\"` under [resolver] to skip back-edges"))]
    Cycle { chain: Vec<String> },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ScoutResult<T> = miette::Result<T>;
