//! # hexstr - escaped hex string literals from files
//!
//! hexstr reads files and prints their bytes as a `\xNN`-escaped string
//! literal, the form expected by certain embedded scripting languages when
//! binary blobs are pasted into source code.
//!
//! - **Byte encoding**: every byte becomes `\x` plus two uppercase hex digits,
//!   with no separators, one literal per file on stdout
//! - **Ignore list**: a per-user preference file lists file extensions to skip
//!   when scanning a directory, editable from the command line
//! - **Clean streams**: stdout carries encoded output only; every
//!   human-readable message goes to stderr
//!
//! ## Quick Start
//!
//! ```bash
//! # Encode named files
//! hexstr logo.gif font.bin
//!
//! # Encode everything suitable in the working directory
//! hexstr
//!
//! # Stop scans from picking up PDFs and RTFs
//! hexstr --add pdf,rtf
//! ```

pub mod cli;
pub mod config;
pub mod encoder;
pub mod scanner;

pub use cli::{Cli, Output};
pub use config::IgnoreList;

/// Result type alias for hexstr operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
