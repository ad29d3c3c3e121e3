//! Source documents held as verbatim lines
//!
//! Line terminators are kept on every line so that writing the retained
//! lines back out reproduces the original bytes exactly.

/// An ordered sequence of lines loaded verbatim from a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    lines: Vec<String>,
}

impl SourceDocument {
    /// Split text into lines, keeping `\n` / `\r\n` terminators attached
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(String::from).collect(),
        }
    }

    /// Build a document from already split lines
    #[must_use]
    pub const fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// All lines, terminators included
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the line at `index` exists and holds only whitespace
    #[must_use]
    pub fn is_blank(&self, index: usize) -> bool {
        self.lines.get(index).is_some_and(|line| line.trim().is_empty())
    }
}
