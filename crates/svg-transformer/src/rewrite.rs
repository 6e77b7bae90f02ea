//! Document-level pre-processing before attribute translation.
//!
//! Two concerns, applied in a fixed order: the first root `<svg` tag gains a
//! props spread, then the non-portable root metadata attributes (`xmlns`,
//! `xmlns:xlink`, `version`) are stripped wherever they appear. The spread
//! goes in first so the removals operate on the already-modified root tag.

/// Pre-processes the whole document: props spread, then attribute removal.
pub fn prepare_document(svg: &str) -> String {
    let with_spread = inject_props_spread(svg);
    let cleaned = strip_attribute(&with_spread, "xmlns");
    let cleaned = strip_attribute(&cleaned, "xmlns:xlink");
    strip_attribute(&cleaned, "version")
}

/// Injects ` {...props}` after the first `<svg` tag name.
fn inject_props_spread(svg: &str) -> String {
    match svg.find("<svg") {
        Some(pos) => {
            let insert_at = pos + "<svg".len();
            let mut out = String::with_capacity(svg.len() + " {...props}".len());
            out.push_str(&svg[..insert_at]);
            out.push_str(" {...props}");
            out.push_str(&svg[insert_at..]);
            out
        }
        None => svg.to_string(),
    }
}

/// Removes every `name="…"` occurrence, along with the whitespace run
/// preceding it. Tolerates either quote kind; the value runs to the next
/// quote of either kind. Occurrences without a quoted value are left alone.
fn strip_attribute(text: &str, name: &str) -> String {
    let needle = format!("{name}=");
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(&needle) {
        let after = pos + needle.len();
        match quoted_value_len(&rest[after..]) {
            Some(len) => {
                let mut keep = pos;
                while keep > 0 && rest.as_bytes()[keep - 1].is_ascii_whitespace() {
                    keep -= 1;
                }
                out.push_str(&rest[..keep]);
                rest = &rest[after + len..];
            }
            None => {
                out.push_str(&rest[..after]);
                rest = &rest[after..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Length of a leading `"…"` or `'…'` value, closing on either quote kind.
fn quoted_value_len(s: &str) -> Option<usize> {
    let first = *s.as_bytes().first()?;
    if first != b'"' && first != b'\'' {
        return None;
    }
    let close = s[1..].find(['"', '\''])?;
    Some(close + 2)
}
