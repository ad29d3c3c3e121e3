//! Print method spans without modifying anything

use std::path::Path;

use methodprune::adapters::file::FsDocumentStore;
use methodprune::core::ports::DocumentStore;
use methodprune::output::{LocateReport, MethodReport, OutputMode};

use super::selection;
use crate::cli::app::SelectionArgs;

/// Locate `names` (plus any selected preset) in `input`
pub fn locate(
    input: &Path,
    names: &[String],
    args: &SelectionArgs,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let selection = selection::resolve(args, names, config_path)?;
    let document = FsDocumentStore::new().load(input)?;

    let plan = selection.settings.pruner().plan(&document, &selection.methods);
    let report = LocateReport {
        input: input.display().to_string(),
        methods: plan.outcomes.iter().map(MethodReport::from).collect(),
    };
    report.render(mode);

    Ok(())
}
