//! Strategies for attaching a leading doc comment to a declaration

use serde::{Deserialize, Serialize};

/// How far, and how, to walk upward from a declaration for its doc comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookbackStrategy {
    /// Look a few lines up, absorbing `/**`, `*` and `*/` lines
    ///
    /// Blank lines and `@deprecated` markers are stepped over. A block whose
    /// `/**` lies beyond the depth is not absorbed at all.
    Bounded,
    /// Walk up to the `/**` that opens the attached doc block
    ///
    /// Gives up without extending when code is hit first.
    #[default]
    DocBlock,
}

impl LookbackStrategy {
    /// Default number of lines inspected above the declaration
    #[must_use]
    pub const fn default_depth(self) -> usize {
        match self {
            Self::Bounded => 3,
            Self::DocBlock => 20,
        }
    }
}

impl std::fmt::Display for LookbackStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bounded => write!(f, "bounded"),
            Self::DocBlock => write!(f, "doc-block"),
        }
    }
}

impl std::str::FromStr for LookbackStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bounded" => Ok(Self::Bounded),
            "doc-block" | "docblock" | "doc_block" => Ok(Self::DocBlock),
            _ => Err(format!("Invalid lookback strategy: {s}. Use: bounded, doc-block")),
        }
    }
}
