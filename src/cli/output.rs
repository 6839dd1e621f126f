//! Output handling for hexstr
//!
//! Every human-readable message goes to stderr so that stdout carries
//! nothing but encoded hex literals. Messages are styled with console,
//! matching the look of other modern CLI tools.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", style("ℹ").blue(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", style("⚠").yellow(), message);
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Get verbose mode status
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
