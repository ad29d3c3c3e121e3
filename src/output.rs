//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::{Preset, PruneSettings};
use crate::core::services::{MethodOutcome, PrunePlan};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Outcome of one requested method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodReport {
    /// Method name
    pub name: String,
    /// Whether the method was located
    pub found: bool,
    /// First removed line (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<usize>,
    /// Declaration line (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_line: Option<usize>,
    /// Last removed line of the method (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    /// Lines covered by the method span
    pub lines: usize,
    /// Whether a trailing blank line was removed as well
    pub trailing_blank_removed: bool,
    /// Why the method was not located
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&MethodOutcome> for MethodReport {
    fn from(outcome: &MethodOutcome) -> Self {
        match outcome {
            MethodOutcome::Found {
                name,
                span,
                trailing_blank,
            } => Self {
                name: name.clone(),
                found: true,
                start_line: Some(span.start + 1),
                declaration_line: Some(span.declaration + 1),
                end_line: Some(span.end + 1),
                lines: span.line_count(),
                trailing_blank_removed: trailing_blank.is_some(),
                reason: None,
            },
            MethodOutcome::Missing { name, error } => Self {
                name: name.clone(),
                found: false,
                start_line: None,
                declaration_line: None,
                end_line: None,
                lines: 0,
                trailing_blank_removed: false,
                reason: Some(error.to_string()),
            },
        }
    }
}

impl MethodReport {
    fn render_human(&self) {
        match (self.start_line, self.end_line) {
            (Some(start), Some(end)) if self.found => println!(
                "{} {}: lines {start} to {end} ({} lines)",
                "Found".green(),
                self.name,
                self.lines
            ),
            _ => println!(
                "{} Could not find method {} ({})",
                "Warning:".yellow().bold(),
                self.name,
                self.reason.as_deref().unwrap_or("not found")
            ),
        }
    }
}

/// Result of a prune run
#[derive(Debug, Serialize)]
pub struct PruneReport {
    /// Input path
    pub input: String,
    /// Output path, absent on a dry run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Whether the output file was written
    pub written: bool,
    /// Line count of the input
    pub original_lines: usize,
    /// Lines removed
    pub removed_lines: usize,
    /// Line count of the output
    pub final_lines: usize,
    /// Removed share of the input, in percent
    pub reduction_percent: f64,
    /// Per-method outcomes, in request order
    pub methods: Vec<MethodReport>,
    /// Names that could not be located
    pub missing: Vec<String>,
}

impl PruneReport {
    /// Build a report from a plan
    #[must_use]
    pub fn from_plan(plan: &PrunePlan, input: &str, output: Option<&str>, written: bool) -> Self {
        Self {
            input: input.to_string(),
            output: output.map(String::from),
            written,
            original_lines: plan.original_lines,
            removed_lines: plan.removed_lines(),
            final_lines: plan.final_lines(),
            reduction_percent: plan.reduction_percent(),
            methods: plan.outcomes.iter().map(MethodReport::from).collect(),
            missing: plan.missing().into_iter().map(String::from).collect(),
        }
    }

    /// Whether every requested method was located
    #[must_use]
    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Original file: {} lines\n", self.original_lines);

        for method in &self.methods {
            method.render_human();
        }

        println!("\nRemoved {} lines", self.removed_lines);
        println!("Final file: {} lines", self.final_lines);
        println!(
            "Reduction: {} lines ({:.1}%)",
            self.removed_lines, self.reduction_percent
        );

        if !self.missing.is_empty() {
            println!(
                "\n{} {} method(s) not found: {}",
                "Missing:".red().bold(),
                self.missing.len(),
                self.missing.join(", ")
            );
        }

        match (&self.output, self.written) {
            (Some(output), true) => {
                println!("\nReview the output at: {output}");
                println!("If it looks good, run:");
                println!("  mv {output} {}", self.input);
            },
            (Some(output), false) => println!("\nOutput NOT written: {output}"),
            (None, _) => println!("\nDry run: no file written."),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a locate operation
#[derive(Debug, Serialize)]
pub struct LocateReport {
    /// Input path
    pub input: String,
    /// Per-method outcomes, in request order
    pub methods: Vec<MethodReport>,
}

impl LocateReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for method in &self.methods {
                    method.render_human();
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Summary of a preset
#[derive(Debug, Serialize)]
pub struct PresetInfo {
    /// Preset name
    pub name: String,
    /// Description
    pub description: String,
    /// "builtin" or "project"
    pub source: String,
    /// Lookback strategy after layering
    pub lookback: String,
    /// Lookback depth after layering
    pub lookback_depth: usize,
    /// Accepted access modifiers after layering
    pub modifiers: Vec<String>,
    /// Whether trailing blank lines are trimmed
    pub trim_blank: bool,
    /// Methods in the preset
    pub methods: Vec<String>,
}

impl PresetInfo {
    /// Describe `preset` as it would run on top of `base`
    #[must_use]
    pub fn new(preset: &Preset, base: &PruneSettings) -> Self {
        let mut settings = base.clone();
        settings.apply(&preset.settings);
        Self {
            name: preset.name.clone(),
            description: preset.description.clone(),
            source: preset.source.to_string(),
            lookback: settings.lookback.to_string(),
            lookback_depth: settings.lookback_depth,
            modifiers: settings.modifiers,
            trim_blank: settings.trim_blank,
            methods: preset.methods.clone(),
        }
    }
}

/// Result of a presets listing
#[derive(Debug, Serialize)]
pub struct PresetListResult {
    /// Presets shown
    pub presets: Vec<PresetInfo>,
    /// Whether to print every method name
    #[serde(skip)]
    pub detailed: bool,
}

impl PresetListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.presets.is_empty() {
            println!("No presets found.");
            return;
        }

        for p in &self.presets {
            println!("{} [{}] ({} methods)", p.name.bold(), p.source, p.methods.len());
            if !p.description.is_empty() {
                println!("  {}", p.description);
            }
            if self.detailed {
                println!(
                    "  lookback: {} (depth {}), modifiers: {}, trim blank: {}",
                    p.lookback,
                    p.lookback_depth,
                    p.modifiers.join("|"),
                    p.trim_blank
                );
                for method in &p.methods {
                    println!("    {method}");
                }
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
