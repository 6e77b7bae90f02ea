//! Component source assembly.

/// Output flavor of the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    /// Plain JSX: untyped props parameter.
    Jsx,
    /// TSX: props annotated with `React.SVGProps<SVGSVGElement>`.
    #[default]
    Tsx,
}

impl TargetMode {
    /// Picks the mode from a destination file extension; anything other
    /// than `.tsx` emits plain JSX.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".tsx") {
            Self::Tsx
        } else {
            Self::Jsx
        }
    }

    /// The props parameter annotation, empty for plain JSX. Purely textual;
    /// nothing here is type-checked.
    fn props_annotation(self) -> &'static str {
        match self {
            Self::Tsx => ": React.SVGProps<SVGSVGElement>",
            Self::Jsx => "",
        }
    }
}

/// Assembles the final component source around an already-indented body.
///
/// The structural contract, in order: import line, blank line, component
/// declaration, indented return body, closing brace, blank line, default
/// export, trailing newline.
pub fn emit_component(name: &str, indented_body: &str, mode: TargetMode) -> String {
    format!(
        "import * as React from \"react\";\n\nconst {name} = (props{annotation}) => {{\n  return (\n{indented_body}\n  );\n}};\n\nexport default {name};\n",
        annotation = mode.props_annotation(),
    )
}
