//! Method span locator - finds the lines a named method occupies
//!
//! This is a textual heuristic, not a parser. A method is found by its
//! declaration line (`<modifier> <name>(`), extended upward over an attached
//! doc comment and downward until its braces balance.
//!
//! Braces inside string literals, template literals, comments or regular
//! expressions are counted like any other brace. Method bodies containing
//! such braces can be mis-measured.

use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::core::models::{LookbackStrategy, Span};

/// Lines stepped over by the bounded lookback without ending it
const ANNOTATION_MARKERS: &[&str] = &["@deprecated"];

/// Why a method could not be located
#[derive(Debug, Clone, Error)]
pub enum LocateError {
    /// No line matches the declaration pattern
    #[error("no declaration of `{0}` found")]
    NotDeclared(String),

    /// The braces opened after the declaration never close
    #[error("braces of `{name}` (declared on line {line}) never balance")]
    Unbalanced {
        /// Method name
        name: String,
        /// 1-based line of the declaration
        line: usize,
    },

    /// The declaration pattern could not be compiled
    #[error("invalid declaration pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Locates method spans by declaration pattern, doc lookback and brace balance
#[derive(Debug, Clone)]
pub struct MethodLocator {
    modifiers: Vec<String>,
    lookback: LookbackStrategy,
    depth: usize,
}

impl MethodLocator {
    /// Create a locator
    ///
    /// `modifiers` are the access-modifier keywords accepted in front of the
    /// method name, `depth` caps how many lines the lookback inspects.
    #[must_use]
    pub const fn new(modifiers: Vec<String>, lookback: LookbackStrategy, depth: usize) -> Self {
        Self {
            modifiers,
            lookback,
            depth,
        }
    }

    /// Accepted access modifiers
    #[must_use]
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Lookback strategy in use
    #[must_use]
    pub const fn lookback(&self) -> LookbackStrategy {
        self.lookback
    }

    /// Lookback depth in lines
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Build the declaration pattern for `name`
    pub fn declaration_pattern(&self, name: &str) -> Result<Regex, LocateError> {
        let modifiers = self
            .modifiers
            .iter()
            .map(String::as_str)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"^\s*(?:{modifiers})\s+{}\s*\(", regex::escape(name));
        Ok(Regex::new(&pattern)?)
    }

    /// Locate the span of method `name` in `lines`
    ///
    /// Only the first matching declaration is considered.
    pub fn locate<S: AsRef<str>>(&self, lines: &[S], name: &str) -> Result<Span, LocateError> {
        let pattern = self.declaration_pattern(name)?;

        let declaration = lines
            .iter()
            .position(|line| pattern.is_match(line.as_ref()))
            .ok_or_else(|| LocateError::NotDeclared(name.to_string()))?;
        debug!("`{name}` declared on line {}", declaration + 1);

        let start = match self.lookback {
            LookbackStrategy::Bounded => bounded_lookback(lines, declaration, self.depth),
            LookbackStrategy::DocBlock => doc_block_lookback(lines, declaration, self.depth),
        };
        if start < declaration {
            debug!("`{name}` doc comment starts on line {}", start + 1);
        }

        let end = body_end(lines, declaration).ok_or_else(|| LocateError::Unbalanced {
            name: name.to_string(),
            line: declaration + 1,
        })?;
        debug!("`{name}` body closes on line {}", end + 1);

        Ok(Span::new(start, declaration, end))
    }
}

/// Inspect at most `depth` lines above the declaration, absorbing doc lines
///
/// The start only moves to a `/**` opener within reach. A doc block longer
/// than `depth` is left in place whole rather than cut below its opener.
fn bounded_lookback<S: AsRef<str>>(lines: &[S], declaration: usize, depth: usize) -> usize {
    let mut start = declaration;

    for distance in 1..=depth {
        let Some(index) = declaration.checked_sub(distance) else {
            break;
        };
        let text = lines[index].as_ref().trim();

        if is_doc_line(text) {
            if text.starts_with("/**") {
                start = index;
            }
        } else if !text.is_empty() && !is_annotation(text) {
            break;
        }
    }

    start
}

/// Walk up to the `/**` opening the attached doc block, if any
fn doc_block_lookback<S: AsRef<str>>(lines: &[S], declaration: usize, depth: usize) -> usize {
    let floor = declaration.saturating_sub(depth);

    for index in (floor..declaration).rev() {
        let text = lines[index].as_ref().trim();

        if text.starts_with("/**") {
            return index;
        }
        if !text.is_empty() && !text.starts_with('*') && !text.starts_with("//") {
            break;
        }
    }

    declaration
}

fn is_doc_line(text: &str) -> bool {
    text.starts_with("/**") || text == "*/" || (text.starts_with('*') && !text.starts_with("*/"))
}

fn is_annotation(text: &str) -> bool {
    ANNOTATION_MARKERS.iter().any(|marker| text.starts_with(marker))
}

/// Line on which the brace balance first returns to zero after opening
fn body_end<S: AsRef<str>>(lines: &[S], declaration: usize) -> Option<usize> {
    let mut balance: i64 = 0;
    let mut opened = false;

    for (index, line) in lines.iter().enumerate().skip(declaration) {
        for ch in line.as_ref().chars() {
            match ch {
                '{' => {
                    balance += 1;
                    opened = true;
                },
                '}' => {
                    balance -= 1;
                    if opened && balance == 0 {
                        return Some(index);
                    }
                },
                _ => {},
            }
        }
    }

    None
}
