//! Attribute scanning.
//!
//! A single linear pass over the document finds every `name[:=]"value"`
//! occurrence. Matches are independent: the scanner carries no document-wide
//! context, so duplicate attributes and nesting are invisible to it.

/// A half-open byte range `[start, end)` into the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// The start byte offset (inclusive).
    pub start: u32,
    /// The end byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One attribute occurrence found by the scanner.
///
/// The span covers the full match, from the first name byte through the
/// closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttributeMatch<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub span: Span,
}

/// Scans `text` for attribute occurrences in source order.
///
/// An occurrence is a non-empty run of non-whitespace characters, a `:` or
/// `=` separator, an opening quote of either kind, and a value running to
/// the next quote of either kind. A double-quoted value therefore also
/// terminates at an embedded single quote; values containing the matching
/// quote character desynchronize and are an accepted limitation. Candidates
/// with no closing quote are skipped.
pub(crate) fn scan_attributes(text: &str) -> Vec<AttributeMatch<'_>> {
    let bytes = text.as_bytes();
    let mut matches = Vec::new();
    let mut i = 0usize;
    // Names never extend back into a previous match.
    let mut floor = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if (b == b'"' || b == b'\'') && i >= 2 && matches!(bytes[i - 1], b':' | b'=') {
            // Walk the name backwards over the non-whitespace run. Multi-byte
            // UTF-8 units are all >= 0x80 and count as non-whitespace, so the
            // walk only ever stops on a single-byte character boundary.
            let mut start = i - 1;
            while start > floor && !bytes[start - 1].is_ascii_whitespace() {
                start -= 1;
            }

            if start < i - 1 {
                if let Some(rel) = text[i + 1..].find(['"', '\'']) {
                    let close = i + 1 + rel;
                    matches.push(AttributeMatch {
                        name: &text[start..i - 1],
                        value: &text[i + 1..close],
                        span: Span::new(start as u32, (close + 1) as u32),
                    });
                    floor = close + 1;
                    i = close + 1;
                    continue;
                }
            }
        }
        i += 1;
    }

    matches
}
