//! Pruner service - turns a list of method names into a removal set
//!
//! Planning is pure: locate every name, union the spans, and keep the
//! per-method outcomes for reporting. [`Pruner::run`] wires a plan to a
//! [`DocumentStore`] for loading and saving.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::locator::{LocateError, MethodLocator};
use crate::core::models::{SourceDocument, Span};
use crate::core::ports::{DocumentError, DocumentStore};

/// Options applied after a span is located
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneOptions {
    /// Also remove one blank line directly following each span
    pub trim_trailing_blank: bool,
}

/// What happened to one requested method
#[derive(Debug, Clone)]
pub enum MethodOutcome {
    /// The method was located and its lines marked for removal
    Found {
        /// Method name
        name: String,
        /// Located span
        span: Span,
        /// Index of the trailing blank line also removed, if any
        trailing_blank: Option<usize>,
    },
    /// The method could not be located; nothing was removed for it
    Missing {
        /// Method name
        name: String,
        /// Why locating failed
        error: LocateError,
    },
}

impl MethodOutcome {
    /// Requested method name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Found { name, .. } | Self::Missing { name, .. } => name,
        }
    }

    /// Whether the method was located
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Result of planning a prune over one document
#[derive(Debug, Clone)]
pub struct PrunePlan {
    /// Line count of the source document
    pub original_lines: usize,
    /// Union of every span and trailing blank line
    pub removal: BTreeSet<usize>,
    /// One outcome per requested name, in request order
    pub outcomes: Vec<MethodOutcome>,
}

impl PrunePlan {
    /// Number of lines that will be removed
    #[must_use]
    pub fn removed_lines(&self) -> usize {
        self.removal.len()
    }

    /// Number of lines left after removal
    #[must_use]
    pub fn final_lines(&self) -> usize {
        self.original_lines - self.removal.len()
    }

    /// Share of the original lines removed, in percent
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reduction_percent(&self) -> f64 {
        if self.original_lines == 0 {
            return 0.0;
        }
        self.removal.len() as f64 / self.original_lines as f64 * 100.0
    }

    /// Names that could not be located
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        self.outcomes.iter().filter(|o| !o.is_found()).map(MethodOutcome::name).collect()
    }

    /// Lines of `document` not in the removal set, in original order
    #[must_use]
    pub fn retained<'a>(&self, document: &'a SourceDocument) -> Vec<&'a str> {
        document
            .lines()
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.removal.contains(index))
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

/// What happened to the output of a run
#[derive(Debug)]
pub enum WriteStatus {
    /// Retained lines were written to this path
    Written(PathBuf),
    /// Dry run, nothing written
    Skipped,
    /// Writing failed; the plan is still valid
    Failed(DocumentError),
}

/// A completed run: the plan plus what happened to the output
#[derive(Debug)]
pub struct PruneRun {
    /// The computed plan
    pub plan: PrunePlan,
    /// Output status
    pub write: WriteStatus,
}

/// Removes named methods from documents
#[derive(Debug, Clone)]
pub struct Pruner {
    locator: MethodLocator,
    options: PruneOptions,
}

impl Pruner {
    /// Create a pruner
    #[must_use]
    pub const fn new(locator: MethodLocator, options: PruneOptions) -> Self {
        Self { locator, options }
    }

    /// The locator used for every name
    #[must_use]
    pub const fn locator(&self) -> &MethodLocator {
        &self.locator
    }

    /// Locate every name and build the removal set
    ///
    /// Names that cannot be located are recorded and skipped.
    #[must_use]
    pub fn plan<S: AsRef<str>>(&self, document: &SourceDocument, names: &[S]) -> PrunePlan {
        let mut removal = BTreeSet::new();
        let mut outcomes = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            match self.locator.locate(document.lines(), name) {
                Ok(span) => {
                    removal.extend(span.indices());

                    let trailing_blank = (self.options.trim_trailing_blank
                        && document.is_blank(span.end + 1))
                    .then_some(span.end + 1);
                    if let Some(blank) = trailing_blank {
                        removal.insert(blank);
                    }

                    debug!("marked `{name}`: {span}");
                    outcomes.push(MethodOutcome::Found {
                        name: name.to_string(),
                        span,
                        trailing_blank,
                    });
                },
                Err(error) => {
                    debug!("skipping `{name}`: {error}");
                    outcomes.push(MethodOutcome::Missing {
                        name: name.to_string(),
                        error,
                    });
                },
            }
        }

        PrunePlan {
            original_lines: document.len(),
            removal,
            outcomes,
        }
    }

    /// Load `input`, plan, and write the retained lines to `output`
    ///
    /// A `None` output is a dry run. Only a failed load is an error; a failed
    /// write is reported through [`WriteStatus::Failed`] so the plan survives.
    pub fn run<D, S>(
        &self,
        store: &D,
        input: &Path,
        output: Option<&Path>,
        names: &[S],
    ) -> Result<PruneRun, DocumentError>
    where
        D: DocumentStore + ?Sized,
        S: AsRef<str>,
    {
        let document = store.load(input)?;
        let plan = self.plan(&document, names);

        let write = match output {
            None => WriteStatus::Skipped,
            Some(path) => match store.save(path, &plan.retained(&document), Some(input)) {
                Ok(()) => {
                    info!("wrote {} lines to {}", plan.final_lines(), path.display());
                    WriteStatus::Written(path.to_path_buf())
                },
                Err(err) => WriteStatus::Failed(err),
            },
        };

        Ok(PruneRun { plan, write })
    }
}
