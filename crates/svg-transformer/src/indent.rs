//! Body indentation normalization.

const INDENT: &str = "    ";

/// Trims every line and re-indents it with four spaces.
///
/// Splits on `\n`, so a trailing newline yields a final blank line; blank
/// lines become a four-space-only line. Cosmetic, and accepted as such.
pub fn indent_body(body: &str) -> String {
    body.split('\n')
        .map(|line| format!("{INDENT}{}", line.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_single_line() {
        assert_eq!(indent_body("<svg/>"), "    <svg/>");
    }

    #[test]
    fn test_indent_strips_existing_indentation() {
        assert_eq!(
            indent_body("<svg>\n  <path/>\n</svg>"),
            "    <svg>\n    <path/>\n    </svg>"
        );
    }

    #[test]
    fn test_indent_trims_trailing_whitespace() {
        assert_eq!(indent_body("<path/>   "), "    <path/>");
    }

    #[test]
    fn test_blank_lines_become_indent_only() {
        assert_eq!(indent_body("<svg>\n\n</svg>"), "    <svg>\n    \n    </svg>");
    }

    #[test]
    fn test_trailing_newline_yields_blank_line() {
        assert_eq!(indent_body("<svg/>\n"), "    <svg/>\n    ");
    }
}
