//! Attribute translation rules.
//!
//! The replacement chain is an ordered list of tagged rules evaluated
//! first-match-wins: `xlink:href`, `xml:space`, `class`, `style`, numeric
//! literal, quoted string. Keeping the chain explicit makes the precedence
//! contract independently testable.

use crate::name::camel_case;
use crate::scan::{scan_attributes, Span};
use crate::style::style_object_literal;
use smol_str::SmolStr;

/// Which rule produced a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Exact name `xlink:href`, mapped to `xlinkHref`.
    XlinkHref,
    /// Exact name `xml:space`, mapped to `xmlSpace`.
    XmlSpace,
    /// Camel-cased name `class`, mapped to `className`.
    ClassName,
    /// Camel-cased name `style`, expanded to an inline object literal.
    Style,
    /// Numeric value, embedded unquoted as `name={value}`.
    NumericLiteral,
    /// Everything else, re-quoted as `name="value"`.
    StringLiteral,
}

/// A single attribute replacement applied to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRewrite {
    /// The raw attribute name as it appeared in the source.
    pub name: SmolStr,
    /// The rule that produced the replacement.
    pub rule: RuleKind,
    /// The byte range of the original attribute occurrence.
    pub span: Span,
}

/// Resolves one attribute occurrence to its replacement text.
///
/// Every occurrence yields exactly one replacement. The value is used
/// verbatim: embedded quotes are not escaped, which is an accepted
/// limitation rather than a recoverable error.
pub fn resolve(name: &str, value: &str) -> (RuleKind, String) {
    if name == "xlink:href" {
        return (RuleKind::XlinkHref, format!("xlinkHref=\"{value}\""));
    }
    if name == "xml:space" {
        return (RuleKind::XmlSpace, format!("xmlSpace=\"{value}\""));
    }

    let camel = camel_case(name);
    if camel == "class" {
        return (RuleKind::ClassName, format!("className=\"{value}\""));
    }
    if camel == "style" {
        return (RuleKind::Style, style_object_literal(value));
    }
    if is_numeric_literal(value) {
        return (RuleKind::NumericLiteral, format!("{camel}={{{value}}}"));
    }

    (RuleKind::StringLiteral, format!("{camel}=\"{value}\""))
}

/// A value is numeric when its trimmed form is a non-empty floating-point
/// literal: `"0"`, `"-1.5"`, and `"1e3"` qualify, `""` and `"24px"` do not.
fn is_numeric_literal(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Translates every attribute occurrence in `text`.
///
/// Runs the scanner once over the document, resolves each match through the
/// rule chain, and splices the replacements back in. Returns the rewritten
/// document together with a record of the replacements in source order.
pub fn translate_attributes(text: &str) -> (String, Vec<AttributeRewrite>) {
    let matches = scan_attributes(text);
    let mut out = String::with_capacity(text.len());
    let mut rewrites = Vec::with_capacity(matches.len());
    let mut pos = 0usize;

    for m in matches {
        let (rule, replacement) = resolve(m.name, m.value);
        out.push_str(&text[pos..m.span.start as usize]);
        out.push_str(&replacement);
        rewrites.push(AttributeRewrite {
            name: SmolStr::new(m.name),
            rule,
            span: m.span,
        });
        pos = m.span.end as usize;
    }

    out.push_str(&text[pos..]);
    (out, rewrites)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacement(name: &str, value: &str) -> String {
        resolve(name, value).1
    }

    #[test]
    fn test_xlink_href_precedes_everything() {
        let (rule, text) = resolve("xlink:href", "#id");
        assert_eq!(rule, RuleKind::XlinkHref);
        assert_eq!(text, r##"xlinkHref="#id""##);
    }

    #[test]
    fn test_xml_space() {
        let (rule, text) = resolve("xml:space", "preserve");
        assert_eq!(rule, RuleKind::XmlSpace);
        assert_eq!(text, r#"xmlSpace="preserve""#);
    }

    #[test]
    fn test_class_becomes_class_name() {
        assert_eq!(replacement("class", "icon"), r#"className="icon""#);
    }

    #[test]
    fn test_class_rule_precedes_numeric() {
        // A numeric-looking class value still goes through the class rule.
        let (rule, text) = resolve("class", "42");
        assert_eq!(rule, RuleKind::ClassName);
        assert_eq!(text, r#"className="42""#);
    }

    #[test]
    fn test_style_delegates_to_property_parser() {
        let (rule, text) = resolve("style", "fill: red; stroke-width: 2");
        assert_eq!(rule, RuleKind::Style);
        assert_eq!(text, r#"style={{fill: "red", strokeWidth: "2"}}"#);
    }

    #[test]
    fn test_numeric_value_unquoted() {
        assert_eq!(replacement("stroke-width", "2"), "strokeWidth={2}");
        assert_eq!(replacement("width", "0"), "width={0}");
        assert_eq!(replacement("x", "-1.5"), "x={-1.5}");
    }

    #[test]
    fn test_non_numeric_value_stays_quoted() {
        assert_eq!(replacement("width", "24px"), r#"width="24px""#);
        assert_eq!(replacement("d", "M0 0h24"), r#"d="M0 0h24""#);
        assert_eq!(replacement("aria-label", ""), r#"ariaLabel="""#);
    }

    #[test]
    fn test_default_camel_cases_name() {
        assert_eq!(
            replacement("fill-rule", "evenodd"),
            r#"fillRule="evenodd""#
        );
    }

    #[test]
    fn test_translate_whole_document() {
        let (out, rewrites) =
            translate_attributes(r#"<svg class="icon" stroke-width="2"><path d="M0 0"/></svg>"#);
        assert_eq!(
            out,
            r#"<svg className="icon" strokeWidth={2}><path d="M0 0"/></svg>"#
        );
        let rules: Vec<_> = rewrites.iter().map(|r| r.rule).collect();
        assert_eq!(
            rules,
            vec![
                RuleKind::ClassName,
                RuleKind::NumericLiteral,
                RuleKind::StringLiteral
            ]
        );
    }

    #[test]
    fn test_translate_records_source_spans() {
        let text = r#"<rect width="10"/>"#;
        let (_, rewrites) = translate_attributes(text);
        let span = rewrites[0].span;
        assert_eq!(&text[span.start as usize..span.end as usize], r#"width="10""#);
        assert_eq!(rewrites[0].name, "width");
    }

    #[test]
    fn test_translate_empty_document() {
        let (out, rewrites) = translate_attributes("");
        assert_eq!(out, "");
        assert!(rewrites.is_empty());
    }
}
