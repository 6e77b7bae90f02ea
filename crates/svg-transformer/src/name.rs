//! Component naming: path-derived identifiers and attribute camel-casing.

use smol_str::SmolStr;

/// Fallback identifier for paths with no usable final segment.
pub const FALLBACK_COMPONENT_NAME: &str = "SvgComponent";

/// Derives a component name from a destination file path.
///
/// Takes the final path segment, keeps only the token before the first `.`
/// (so multi-dot filenames keep their leading token), splits on `-` and `_`,
/// and capitalizes the first letter of each token:
/// `icons/arrow-up.svg` becomes `ArrowUp`, `a_b-c.tsx` becomes `ABC`.
///
/// Never fails: degenerate input (empty path, separators only) falls back to
/// [`FALLBACK_COMPONENT_NAME`].
pub fn component_name_from_path(path: &str) -> SmolStr {
    let segment = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = segment.split('.').next().unwrap_or(segment);

    let mut name = String::with_capacity(stem.len());
    for token in stem.split(['-', '_']) {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.push_str(chars.as_str());
        }
    }

    if name.is_empty() {
        SmolStr::new_static(FALLBACK_COMPONENT_NAME)
    } else {
        SmolStr::new(name)
    }
}

/// Camel-cases a hyphen-delimited attribute name.
///
/// Each `-x` pair where `x` is an ASCII lowercase letter collapses into the
/// upper-cased letter (`stroke-width` → `strokeWidth`). Hyphens followed by
/// anything else pass through untouched, and no Unicode case-folding happens
/// beyond the single ASCII upper-case per hyphen. Empty input maps to empty
/// output.
pub fn camel_case(name: &str) -> SmolStr {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }

    SmolStr::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_simple_path() {
        assert_eq!(component_name_from_path("arrow.svg"), "Arrow");
        assert_eq!(component_name_from_path("icons/arrow-up.svg"), "ArrowUp");
        assert_eq!(
            component_name_from_path("/deep/nested/menu_icon.tsx"),
            "MenuIcon"
        );
    }

    #[test]
    fn test_name_from_windows_path() {
        assert_eq!(component_name_from_path("icons\\arrow-up.svg"), "ArrowUp");
    }

    #[test]
    fn test_name_multi_dot_keeps_leading_token() {
        assert_eq!(component_name_from_path("logo.dark.svg"), "Logo");
    }

    #[test]
    fn test_name_mixed_separators() {
        assert_eq!(component_name_from_path("a_b-c.tsx"), "ABC");
    }

    #[test]
    fn test_name_fallback() {
        assert_eq!(component_name_from_path(""), FALLBACK_COMPONENT_NAME);
        assert_eq!(component_name_from_path("/"), FALLBACK_COMPONENT_NAME);
        assert_eq!(component_name_from_path(".svg"), FALLBACK_COMPONENT_NAME);
        assert_eq!(component_name_from_path("-_-"), FALLBACK_COMPONENT_NAME);
    }

    #[test]
    fn test_camel_case_basic() {
        assert_eq!(camel_case("stroke-width"), "strokeWidth");
        assert_eq!(camel_case("fill"), "fill");
        assert_eq!(camel_case("fill-rule"), "fillRule");
        assert_eq!(camel_case("stroke-line-cap"), "strokeLineCap");
    }

    #[test]
    fn test_camel_case_hyphen_without_lowercase_follower() {
        // Only a lowercase ASCII letter triggers the conversion.
        assert_eq!(camel_case("data-2x"), "data-2x");
        assert_eq!(camel_case("trailing-"), "trailing-");
    }

    #[test]
    fn test_camel_case_empty() {
        assert_eq!(camel_case(""), "");
    }
}
