//! Inclusive line ranges marked for deletion

use serde::Serialize;

/// A located method: its doc comment, declaration and body
///
/// Indices are 0-based and inclusive. `start <= declaration <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// First line to delete (doc comment start, or the declaration)
    pub start: usize,
    /// Line holding the matched declaration
    pub declaration: usize,
    /// Line holding the closing brace
    pub end: usize,
}

impl Span {
    /// Create a span
    #[must_use]
    pub const fn new(start: usize, declaration: usize, end: usize) -> Self {
        Self {
            start,
            declaration,
            end,
        }
    }

    /// Number of lines covered
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether `index` falls inside the span
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Every covered line index
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }
}

impl std::fmt::Display for Span {
    /// Renders as 1-based line numbers, the way editors show them
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lines {} to {}", self.start + 1, self.end + 1)
    }
}
