//! Sequence Text Exporter
//!
//! Renders enumerated call sequences as a line-oriented text format for
//! training-data export: one sequence per line, identifiers joined by a
//! delimiter. The serialization lives here at the boundary; the core's
//! internal representation stays the `CallSequence` type.

use crate::domain::paths::CallSequence;
use std::io::Result;

pub struct SequenceExporter;

impl SequenceExporter {
    /// Write sequences to `path`, one per line.
    pub fn export(sequences: &[CallSequence], path: &str, delimiter: &str) -> Result<()> {
        let content = Self::to_lines(sequences, delimiter);
        std::fs::write(path, content)
    }

    /// Render sequences as delimiter-joined lines, in enumeration order.
    pub fn to_lines(sequences: &[CallSequence], delimiter: &str) -> String {
        let mut lines: Vec<String> = sequences
            .iter()
            .map(|s| s.calls.join(delimiter))
            .collect();
        // Trailing newline so the file composes under concatenation.
        lines.push(String::new());
        lines.join("\n")
    }
}
