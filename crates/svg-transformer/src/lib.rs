//! SVG to React component transformation.
//!
//! This crate turns vector markup into a React component source string. It
//! handles:
//! - Stripping non-portable root metadata (`xmlns`, `xmlns:xlink`, `version`)
//!   and injecting a `{...props}` spread on the root element
//! - Translating attributes to their JSX property equivalents, including
//!   inline `style` lists
//! - Deriving the component name from the destination path
//! - Emitting the typed (`.tsx`) or untyped (`.jsx`) component wrapper
//!
//! # Example
//!
//! ```
//! use svg_transformer::{transform, TransformOptions};
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon"><path/></svg>"#;
//! let result = transform(
//!     svg,
//!     TransformOptions {
//!         destination: Some("icons/arrow-up.tsx".to_string()),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(result.component_name, "ArrowUp");
//! assert!(result.code.contains("<svg {...props} className=\"icon\">"));
//! ```

mod emit;
mod indent;
mod name;
mod rewrite;
mod rules;
mod scan;
mod style;
mod transform;

pub use emit::TargetMode;
pub use name::{camel_case, component_name_from_path, FALLBACK_COMPONENT_NAME};
pub use rules::{AttributeRewrite, RuleKind};
pub use scan::Span;
pub use transform::{transform, TransformOptions, TransformResult};
