//! Main orchestration logic.

use crate::cli::{Args, OutputFormat, Target};
use crate::config::ConvertConfig;
use crate::output::{
    format_rewrites, ConversionFailure, ConversionRecord, ConvertSummary, Formatter,
};
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use std::fs;
use svg_transformer::{transform, TransformOptions, TransformResult};
use thiserror::Error;
use walkdir::WalkDir;

/// Extension of the markup files the converter consumes.
const SVG_EXTENSION: &str = "svg";

/// Extensions of the component files a rename may target.
const COMPONENT_EXTENSIONS: [&str; 2] = ["jsx", "tsx"];

/// Orchestration errors.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Failed to read a source file; the file is left unmodified.
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        /// The file that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated component.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// The file that could not be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Watch error.
    #[error("watch error: {0}")]
    WatchFailed(String),
}

impl OrchestratorError {
    /// Failure category for reports: I/O failures carry the underlying
    /// message, everything else is reported generically as unknown.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReadFailed { .. } => "read",
            Self::WriteFailed { .. } => "write",
            Self::InvalidGlob(_) | Self::WatchFailed(_) => "unknown",
        }
    }
}

/// Runs the conversion over all requested inputs.
pub async fn run(args: Args) -> Result<ConvertSummary, OrchestratorError> {
    let root = std::env::current_dir()
        .map(|p| Utf8PathBuf::try_from(p).unwrap_or_default())
        .unwrap_or_default();

    let config = ConvertConfig::load(&root);
    let target = args.target.or_else(|| config.target()).unwrap_or_default();
    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| config.out_dir.as_deref().map(Utf8PathBuf::from));

    let ignore_set = build_ignore_set(args.ignore.iter().chain(config.ignore.iter()))?;
    let files = discover_files(&args.paths, &ignore_set);

    if let Some(dir) = &out_dir {
        fs::create_dir_all(dir).map_err(|e| OrchestratorError::WriteFailed {
            path: dir.clone(),
            source: e,
        })?;
    }

    if args.watch {
        run_watch_mode(&args, &root, files, target, out_dir.as_deref()).await
    } else {
        Ok(run_single_pass(&args, &files, target, out_dir.as_deref()))
    }
}

/// Builds the ignore glob set from CLI and config patterns plus defaults.
fn build_ignore_set<'a>(
    patterns: impl Iterator<Item = &'a String>,
) -> Result<GlobSet, OrchestratorError> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| OrchestratorError::InvalidGlob(e.to_string()))?;
        builder.add(glob);
    }

    // Default ignores
    for pattern in ["**/node_modules/**", "**/dist/**"] {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }

    builder
        .build()
        .map_err(|e| OrchestratorError::InvalidGlob(e.to_string()))
}

/// Finds the SVG files named by the input paths. Files are taken as given
/// when they carry the markup extension; directories are walked recursively.
fn discover_files(paths: &[Utf8PathBuf], ignore_set: &GlobSet) -> Vec<Utf8PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if path.extension() == Some(SVG_EXTENSION) {
                files.push(path.clone());
            }
            continue;
        }

        let walked = WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
            .filter(|p| p.extension() == Some(SVG_EXTENSION))
            .filter(|p| {
                let relative = p.strip_prefix(path).unwrap_or(p);
                !ignore_set.is_match(relative.as_str())
            });
        files.extend(walked);
    }

    files
}

/// Where the generated component for `source` goes.
fn destination_for(source: &Utf8Path, target: Target, out_dir: Option<&Utf8Path>) -> Utf8PathBuf {
    let sibling = source.with_extension(target.extension());
    match (out_dir, sibling.file_name()) {
        (Some(dir), Some(file_name)) => dir.join(file_name),
        _ => sibling,
    }
}

struct FileReport {
    record: ConversionRecord,
    listing: Option<String>,
    code: Option<String>,
}

/// Runs one conversion pass over the discovered files.
///
/// Files are independent, so they convert in parallel; per-file failures
/// are reported and counted without aborting the rest of the batch.
fn run_single_pass(
    args: &Args,
    files: &[Utf8PathBuf],
    target: Target,
    out_dir: Option<&Utf8Path>,
) -> ConvertSummary {
    let formatter = Formatter::new(args.output);

    let outcomes: Vec<Result<FileReport, ConversionFailure>> = files
        .par_iter()
        .map(|path| {
            let destination = destination_for(path, target, out_dir);
            convert_file(path, &destination, !args.stdout)
                .map(|result| FileReport {
                    record: ConversionRecord {
                        source: path.to_string(),
                        destination: destination.to_string(),
                        component: result.component_name.to_string(),
                        rewrites: result.rewrites.len(),
                    },
                    listing: args.verbose.then(|| format_rewrites(&result)),
                    code: args.stdout.then_some(result.code),
                })
                .map_err(|e| ConversionFailure {
                    source: path.to_string(),
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                })
        })
        .collect();

    let mut records = Vec::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome {
            Ok(report) => {
                if let Some(code) = &report.code {
                    print!("{}", code);
                } else if let Some(text) = formatter.format_record(&report.record) {
                    print!("{}", text);
                }
                if let Some(listing) = &report.listing {
                    print!("{}", listing);
                }
                records.push(report.record);
            }
            Err(failure) => {
                if let Some(text) = formatter.format_failure(&failure) {
                    eprint!("{}", text);
                }
                failures.push(failure);
            }
        }
    }

    let summary = ConvertSummary {
        file_count: files.len(),
        converted_count: records.len(),
        failure_count: failures.len(),
    };

    if args.output == OutputFormat::Json {
        let report = serde_json::json!({
            "converted": records,
            "failures": failures,
            "summary": summary,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
        );
    } else if !args.stdout {
        println!("{}", summary.format());
    }

    summary
}

/// Converts one file. The read happens first and leaves the source file
/// untouched on failure; the write is skipped entirely when anything before
/// it failed, so no partial output is ever produced.
fn convert_file(
    source_path: &Utf8Path,
    destination: &Utf8Path,
    write: bool,
) -> Result<TransformResult, OrchestratorError> {
    let source = fs::read_to_string(source_path).map_err(|e| OrchestratorError::ReadFailed {
        path: source_path.to_owned(),
        source: e,
    })?;

    let result = transform(
        &source,
        TransformOptions {
            destination: Some(destination.to_string()),
            ..Default::default()
        },
    );

    if write {
        fs::write(destination, &result.code).map_err(|e| OrchestratorError::WriteFailed {
            path: destination.to_owned(),
            source: e,
        })?;
    }

    Ok(result)
}

/// True when a rename pair is a conversion trigger: `.svg` renamed to a
/// component-source extension.
fn is_conversion_rename(from: &Utf8Path, to: &Utf8Path) -> bool {
    from.extension() == Some(SVG_EXTENSION)
        && to
            .extension()
            .is_some_and(|ext| COMPONENT_EXTENSIONS.contains(&ext))
}

/// Converts a freshly renamed file in place: the content at `to` is still
/// SVG markup, and the destination path drives both name and flavor.
fn convert_renamed(to: &Utf8Path) -> Result<TransformResult, OrchestratorError> {
    convert_file(to, to, true)
}

/// Runs in watch mode: an initial batch pass, then rename-triggered
/// conversions until interrupted.
async fn run_watch_mode(
    args: &Args,
    root: &Utf8Path,
    initial_files: Vec<Utf8PathBuf>,
    target: Target,
    out_dir: Option<&Utf8Path>,
) -> Result<ConvertSummary, OrchestratorError> {
    use notify::event::{EventKind, ModifyKind, RenameMode};
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    println!("Starting watch mode...\n");

    let _summary = run_single_pass(args, &initial_files, target, out_dir);

    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )
    .map_err(|e| OrchestratorError::WatchFailed(e.to_string()))?;

    watcher
        .watch(root.as_std_path(), RecursiveMode::Recursive)
        .map_err(|e| OrchestratorError::WatchFailed(e.to_string()))?;

    println!("Watching for renames... (Ctrl+C to stop)\n");

    while let Some(event) = rx.recv().await {
        if !matches!(
            event.kind,
            EventKind::Modify(ModifyKind::Name(RenameMode::Both))
        ) {
            continue;
        }

        let mut paths = event
            .paths
            .iter()
            .filter_map(|p| Utf8PathBuf::try_from(p.clone()).ok());
        let (Some(from), Some(to)) = (paths.next(), paths.next()) else {
            continue;
        };
        if !is_conversion_rename(&from, &to) {
            continue;
        }

        if !args.preserve_watch_output {
            // Clear screen
            print!("\x1B[2J\x1B[1;1H");
        }

        match convert_renamed(&to) {
            Ok(result) => {
                let original = from.file_name().unwrap_or(from.as_str());
                println!(
                    "Converted {} to React component {}",
                    original, result.component_name
                );
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
    }

    Err(OrchestratorError::WatchFailed(
        "watch channel closed unexpectedly".to_string(),
    ))
}
