//! Configuration loading.

use crate::cli::Target;
use camino::Utf8Path;
use serde::Deserialize;
use std::fs;

/// Project configuration, read from `svgreact.config.json` when present.
///
/// Command-line flags always win over configured values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertConfig {
    /// Generated component flavor: `"jsx"` or `"tsx"`.
    pub target: Option<String>,

    /// Directory for generated components.
    pub out_dir: Option<String>,

    /// Glob patterns to ignore.
    pub ignore: Vec<String>,
}

impl ConvertConfig {
    /// Name of the configuration file looked up at the project root.
    pub const FILE_NAME: &'static str = "svgreact.config.json";

    /// Loads configuration from a project root. A missing file yields the
    /// default configuration; a malformed file warns and does the same.
    pub fn load(root: &Utf8Path) -> Self {
        let path = root.join(Self::FILE_NAME);
        let Ok(content) = fs::read_to_string(&path) else {
            return Self::default();
        };

        // Tolerate JSONC-style comments.
        let content = remove_json_comments(&content);
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: failed to parse {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// The configured target flavor, if recognizable.
    pub fn target(&self) -> Option<Target> {
        match self.target.as_deref() {
            Some("jsx") => Some(Target::Jsx),
            Some("tsx") => Some(Target::Tsx),
            Some(other) => {
                eprintln!(
                    "Warning: unknown target {:?} in {}, expected \"jsx\" or \"tsx\"",
                    other,
                    Self::FILE_NAME
                );
                None
            }
            None => None,
        }
    }
}

/// Removes single-line and multi-line comments from JSON.
fn remove_json_comments(json: &str) -> String {
    let mut result = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if c == '"' {
                in_string = false;
            } else if c == '\\' {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            }
        } else if c == '"' {
            result.push(c);
            in_string = true;
        } else if c == '/' && chars.peek() == Some(&'/') {
            chars.next();
            for next in chars.by_ref() {
                if next == '\n' {
                    result.push('\n');
                    break;
                }
            }
        } else if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(next) = chars.next() {
                if next == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}
