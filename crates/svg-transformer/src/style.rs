//! Inline style attribute parsing.

use crate::name::camel_case;

/// Converts a `style` attribute value into an inline object literal.
///
/// The value is split on `;`, blank segments are dropped, and each remaining
/// segment is split on its first `:` into a key and a value. Keys are
/// trimmed and camel-cased, values are trimmed and double-quoted, and the
/// pairs are joined in input order:
/// `"fill: red; stroke-width: 2"` → `style={{fill: "red", strokeWidth: "2"}}`.
///
/// A segment with no `:` keeps the whole trimmed segment as the key with an
/// empty value. Input is assumed to be well-formed markup; malformed
/// segments degrade rather than error.
pub fn style_object_literal(value: &str) -> String {
    let pairs = value
        .split(';')
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once(':').unwrap_or((segment, ""));
            format!("{}: \"{}\"", camel_case(key.trim()), value.trim())
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("style={{{{{pairs}}}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_two_properties() {
        assert_eq!(
            style_object_literal("fill: red; stroke-width: 2"),
            r#"style={{fill: "red", strokeWidth: "2"}}"#
        );
    }

    #[test]
    fn test_style_single_property() {
        assert_eq!(
            style_object_literal("display:block"),
            r#"style={{display: "block"}}"#
        );
    }

    #[test]
    fn test_style_trailing_semicolon_and_blanks() {
        assert_eq!(
            style_object_literal("fill: red; ; stroke: blue;"),
            r#"style={{fill: "red", stroke: "blue"}}"#
        );
    }

    #[test]
    fn test_style_preserves_input_order() {
        assert_eq!(
            style_object_literal("z-index: 2; fill: red"),
            r#"style={{zIndex: "2", fill: "red"}}"#
        );
    }

    #[test]
    fn test_style_value_with_extra_colon_kept_verbatim() {
        assert_eq!(
            style_object_literal("background: url(a:b)"),
            r#"style={{background: "url(a:b)"}}"#
        );
    }

    #[test]
    fn test_style_segment_without_colon() {
        assert_eq!(style_object_literal("flex"), r#"style={{flex: ""}}"#);
    }

    #[test]
    fn test_style_empty_value() {
        assert_eq!(style_object_literal(""), "style={{}}");
        assert_eq!(style_object_literal("  ;  "), "style={{}}");
    }
}
