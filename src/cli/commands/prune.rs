//! Remove methods and write the cleaned file

use std::path::Path;

use methodprune::adapters::file::FsDocumentStore;
use methodprune::config;
use methodprune::core::services::WriteStatus;
use methodprune::output::{OutputMode, PruneReport};

use super::selection;
use crate::cli::app::SelectionArgs;

/// Exit status when the run completed but some methods were not found
const EXIT_MISSING: i32 = 2;

/// Remove the selected methods from `input`
pub fn prune(
    input: &Path,
    output: Option<&Path>,
    dry_run: bool,
    args: &SelectionArgs,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let selection = selection::resolve(args, &[], config_path)?;

    let output = output.map_or_else(|| config::default_output_path(input), Path::to_path_buf);
    config::ensure_distinct(input, &output)?;

    let pruner = selection.settings.pruner();
    let target = (!dry_run).then_some(output.as_path());
    let run = pruner.run(&FsDocumentStore::new(), input, target, &selection.methods)?;

    let output_str = output.display().to_string();
    let report = PruneReport::from_plan(
        &run.plan,
        &input.display().to_string(),
        target.map(|_| output_str.as_str()),
        matches!(run.write, WriteStatus::Written(_)),
    );
    report.render(mode);

    if let WriteStatus::Failed(err) = run.write {
        return Err(err.into());
    }

    if !report.all_found() && !selection.settings.allow_missing {
        std::process::exit(EXIT_MISSING);
    }

    Ok(())
}
