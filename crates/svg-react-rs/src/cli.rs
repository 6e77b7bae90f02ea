//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use svg_transformer::TargetMode;

/// SVG to React component converter.
#[derive(Debug, Parser)]
#[command(name = "svg-react-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// SVG files or directories to convert
    #[arg(default_value = ".")]
    pub paths: Vec<Utf8PathBuf>,

    /// Generated component flavor
    #[arg(long, value_enum)]
    pub target: Option<Target>,

    /// Directory for generated components (default: next to each source)
    #[arg(long = "out-dir")]
    pub out_dir: Option<Utf8PathBuf>,

    /// Print generated components to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// List every attribute rewrite with its position
    #[arg(long)]
    pub verbose: bool,

    /// Glob patterns to ignore
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Watch mode: convert SVG files renamed to .jsx/.tsx
    #[arg(long)]
    pub watch: bool,

    /// Preserve watch output (don't clear screen)
    #[arg(long = "preserveWatchOutput")]
    pub preserve_watch_output: bool,
}

/// Generated component flavor.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Target {
    /// Untyped component with a `.jsx` extension
    Jsx,
    /// Typed component with a `.tsx` extension (default)
    #[default]
    Tsx,
}

impl Target {
    /// The file extension written for this flavor.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jsx => "jsx",
            Self::Tsx => "tsx",
        }
    }

    /// The transformer mode for this flavor.
    pub fn mode(self) -> TargetMode {
        match self {
            Self::Jsx => TargetMode::Jsx,
            Self::Tsx => TargetMode::Tsx,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
    /// Machine-readable (one line per conversion)
    Machine,
}
