//! Main conversion pipeline.

use crate::emit::{emit_component, TargetMode};
use crate::indent::indent_body;
use crate::name::{component_name_from_path, FALLBACK_COMPONENT_NAME};
use crate::rewrite::prepare_document;
use crate::rules::{translate_attributes, AttributeRewrite};
use smol_str::SmolStr;

/// Options for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Destination path: drives the component name and, unless `mode` is
    /// set, the output flavor.
    pub destination: Option<String>,
    /// Explicit output flavor, overriding the destination extension.
    pub mode: Option<TargetMode>,
}

/// The result of a conversion.
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// The generated component source.
    pub code: String,
    /// The derived component identifier.
    pub component_name: SmolStr,
    /// The output flavor that was emitted.
    pub mode: TargetMode,
    /// The markup after document rewriting, exactly as the attribute scan
    /// saw it. Rewrite spans index into this text.
    pub prepared_markup: String,
    /// Attribute replacements applied to the document, in source order.
    pub rewrites: Vec<AttributeRewrite>,
}

/// Converts SVG markup into a React component source.
///
/// The pipeline is document rewriting (props spread, metadata attribute
/// removal), attribute translation, indentation, and emission. It is pure
/// and synchronous: the same input always produces the same output, no
/// state is shared between calls, and it cannot fail on string input.
pub fn transform(source: &str, options: TransformOptions) -> TransformResult {
    let destination = options.destination.as_deref();
    let component_name = destination
        .map(component_name_from_path)
        .unwrap_or_else(|| SmolStr::new_static(FALLBACK_COMPONENT_NAME));
    let mode = options
        .mode
        .or_else(|| destination.map(TargetMode::from_path))
        .unwrap_or_default();

    let prepared_markup = prepare_document(source);
    let (translated, rewrites) = translate_attributes(&prepared_markup);
    let body = indent_body(&translated);
    let code = emit_component(&component_name, &body, mode);

    TransformResult {
        code,
        component_name,
        mode,
        prepared_markup,
        rewrites,
    }
}
