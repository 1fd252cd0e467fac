//! CLI argument definitions for pomscout.
//!
//! Uses `clap` derive macros. Missing required options make clap print usage
//! and exit before any descriptor is read.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pomscout",
    version,
    about = "Find the modules of a Maven source tree that depend on an artifact",
    long_about = "pomscout scans every pom.xml under a directory and reports the modules that \
                  depend on the given artifact, directly or through other modules. By default \
                  only terminal modules (those nothing else depends on) are reported."
)]
pub struct Cli {
    /// Search dependent modules in pom.xml files in this directory including subdirectories,
    /// e.g. -d /opt/my-project
    #[arg(short, long, value_name = "DIR")]
    pub directory: PathBuf,

    /// Search modules that have this module as a dependency (directly or indirectly),
    /// e.g. -s modBar
    #[arg(
        short,
        long,
        value_name = "ARTIFACT_ID",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub search: String,

    /// Report only modules listed in this file, one module name per line, at any depth
    #[arg(short, long, value_name = "FILE")]
    pub only_from: Option<PathBuf>,

    /// Configuration file (defaults to ~/.pomscout/config.toml)
    #[arg(short, long, value_name = "FILE", env = "POMSCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::try_parse_from([
            "pomscout",
            "-d",
            "/opt/project",
            "--search",
            "core",
            "-o",
            "only.txt",
        ])
        .unwrap();
        assert_eq!(cli.directory, PathBuf::from("/opt/project"));
        assert_eq!(cli.search, "core");
        assert_eq!(cli.only_from, Some(PathBuf::from("only.txt")));
        assert!(!cli.verbose);
    }

    #[test]
    fn directory_and_search_are_required() {
        assert!(Cli::try_parse_from(["pomscout"]).is_err());
        assert!(Cli::try_parse_from(["pomscout", "-d", "."]).is_err());
        assert!(Cli::try_parse_from(["pomscout", "-s", "core"]).is_err());
    }

    #[test]
    fn empty_search_is_rejected() {
        assert!(Cli::try_parse_from(["pomscout", "-d", ".", "-s", ""]).is_err());
    }
}
