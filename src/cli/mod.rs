//! Command-line interface for hexstr
//!
//! Flat flag surface, no subcommands: mutate the ignore list, then encode
//! the named files or scan the working directory. Argument parsing uses
//! clap; usage errors terminate before any other processing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};

mod output;

pub use output::Output;

use crate::config::IgnoreList;
use crate::encoder;
use crate::scanner;

/// Convert files to escaped hex string literals
#[derive(Parser)]
#[command(name = "hexstr", version, about, disable_help_flag = true)]
pub struct Cli {
    /// Add a file extension to the ignore list, or an unspaced
    /// comma-separated list of extensions, eg. 'pdf,rtf'
    #[arg(short, long, value_name = "EXT[,EXT...]", action = ArgAction::Append)]
    pub add: Vec<String>,

    /// Remove a file extension from the ignore list, or an unspaced
    /// comma-separated list of extensions, eg. 'pdf,rtf'
    #[arg(short, long, value_name = "EXT[,EXT...]", action = ArgAction::Append)]
    pub remove: Vec<String>,

    /// Display verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Display help information, including the current ignore list
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Files to encode; the working directory is scanned when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose);
        let output = Output::new(self.verbose);

        if self.help {
            return print_help();
        }

        let mut ignored = IgnoreList::load()?;

        if !self.add.is_empty() {
            let changed = ignored.update(&self.add, true)?;
            report_changes(&output, &changed, "added");
        }
        if !self.remove.is_empty() {
            let changed = ignored.update(&self.remove, false)?;
            report_changes(&output, &changed, "removed");
        }

        if self.files.is_empty() {
            scan_working_dir(&ignored, &output)
        } else {
            for path in &self.files {
                encode_one(path, &output);
            }
            Ok(())
        }
    }
}

/// Scan the working directory and encode every eligible file.
fn scan_working_dir(ignored: &IgnoreList, output: &Output) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve the working directory")?;
    let eligible = scanner::eligible_files(&cwd, ignored)?;

    if eligible.is_empty() {
        output.info(&format!("No suitable files found in {}", cwd.display()));
        return Ok(());
    }

    let noun = if eligible.len() == 1 { "file" } else { "files" };
    output.info(&format!(
        "Processing {} {noun} found in {}",
        eligible.len(),
        cwd.display()
    ));

    for path in &eligible {
        encode_one(path, output);
    }
    Ok(())
}

/// Encode a single file, or report why it was skipped.
///
/// Skips never fail the run; the next file is always attempted.
fn encode_one(path: &Path, output: &Output) {
    output.verbose(&format!("Processing file: {}", path.display()));
    match encoder::encode_file(path) {
        Ok(hex) => println!("{hex}"),
        Err(skip) => output.warning(&format!("Skipping {}: {skip}", path.display())),
    }
}

fn report_changes(output: &Output, changed: &[String], action: &str) {
    if changed.is_empty() {
        output.verbose(&format!("No file extensions {action}"));
    } else {
        let noun = if changed.len() == 1 {
            "file extension"
        } else {
            "file extensions"
        };
        output.verbose(&format!(
            "{} {noun} {action}: {}",
            changed.len(),
            changed.join(", ")
        ));
    }
}

/// Print usage and the current ignore list to stderr, then return.
///
/// Reading the preference file here has no side effects: when none exists
/// yet, the built-in defaults are shown and nothing is written.
fn print_help() -> Result<()> {
    let mut cmd = Cli::command();
    eprint!("{}", cmd.render_help());

    let ignored = IgnoreList::peek()?;
    eprintln!();
    eprintln!("Ignored file types:");
    eprintln!("  {}", ignored.extensions().join(", "));
    Ok(())
}

/// Set up logging based on verbosity; RUST_LOG always wins.
fn setup_logging(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
