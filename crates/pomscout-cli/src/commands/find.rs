//! Handler for `pomscout -d <DIR> -s <ARTIFACT_ID>`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use miette::Result;

use pomscout_core::config::GlobalConfig;
use pomscout_ops::ops_find::{self, FindOptions};
use pomscout_util::progress::{status, status_warn};

pub fn exec(
    directory: PathBuf,
    search: String,
    only_from: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    let started = Instant::now();
    let config = match config_path {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load()?,
    };

    status(
        "Scanning",
        &format!("{} for dependents of {search}", directory.display()),
    );

    let opts = FindOptions {
        directory,
        search,
        only_from,
    };
    let report = ops_find::find(&opts, &config)?;

    if let Some(ref path) = opts.only_from {
        if report.restriction.is_empty() {
            status_warn(
                "Warning",
                &format!(
                    "no module names read from {}, reporting terminal modules",
                    path.display()
                ),
            );
        }
    }

    print!("{}", report.render());
    println!("Total time: {} ms", started.elapsed().as_millis());

    Ok(())
}
