//! Conversion report formatting.

use crate::cli::OutputFormat;
use serde::Serialize;
use svg_transformer::TransformResult;

/// A line and column position (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column (byte offset within the line).
    pub col: u32,
}

/// An index for converting byte offsets into line/column positions.
///
/// Stores the byte offset of each line start, giving O(log n) lookups.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Creates a new line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (offset, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((offset + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// Converts a byte offset to a line/column position.
    pub fn line_col(&self, offset: u32) -> LineCol {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        LineCol {
            line: line as u32,
            col: offset - self.line_starts[line],
        }
    }
}

/// Record of one completed conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRecord {
    /// The source SVG file.
    pub source: String,
    /// The component file that was written (or would be, under `--stdout`).
    pub destination: String,
    /// The derived component name.
    pub component: String,
    /// How many attribute rewrites were applied.
    pub rewrites: usize,
}

/// Record of one failed conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionFailure {
    /// The source SVG file.
    pub source: String,
    /// Failure category: `read`, `write`, or `unknown`.
    pub kind: String,
    /// The underlying error message.
    pub message: String,
}

/// Summary of a conversion run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConvertSummary {
    /// Number of SVG files found.
    pub file_count: usize,
    /// Number of files converted.
    pub converted_count: usize,
    /// Number of files that failed.
    pub failure_count: usize,
}

impl ConvertSummary {
    /// Formats the closing summary line.
    pub fn format(&self) -> String {
        format!(
            "svg-react-rs converted {} of {} file(s), {} failure(s)",
            self.converted_count, self.file_count, self.failure_count
        )
    }
}

/// Formats conversion reports for output.
///
/// Human and machine formats produce one line per conversion; JSON callers
/// collect the records instead and serialize them in one document.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats one successful conversion, naming the derived component and
    /// the original filename.
    pub fn format_record(&self, record: &ConversionRecord) -> Option<String> {
        match self.format {
            OutputFormat::Human => Some(format!(
                "Converted {} to React component {} ({})\n",
                record.source, record.component, record.destination
            )),
            OutputFormat::Machine => Some(format!(
                "OK {} -> {} {} rewrites={}\n",
                record.source, record.destination, record.component, record.rewrites
            )),
            OutputFormat::Json => None,
        }
    }

    /// Formats one failed conversion.
    pub fn format_failure(&self, failure: &ConversionFailure) -> Option<String> {
        match self.format {
            OutputFormat::Human => Some(format!("Error: {}\n", failure.message)),
            OutputFormat::Machine => Some(format!(
                "ERROR {} {} {}\n",
                failure.source, failure.kind, failure.message
            )),
            OutputFormat::Json => None,
        }
    }
}

/// Formats the verbose per-attribute rewrite listing.
///
/// Positions are 1-indexed line:column into the prepared markup the scan
/// ran over.
pub fn format_rewrites(result: &TransformResult) -> String {
    let index = LineIndex::new(&result.prepared_markup);
    let mut out = String::new();

    for rewrite in &result.rewrites {
        let pos = index.line_col(rewrite.span.start);
        out.push_str(&format!(
            "  {}:{} {} ({:?})\n",
            pos.line + 1,
            pos.col + 1,
            rewrite.name,
            rewrite.rule
        ));
    }

    out
}
