mod banner;
mod error;
mod progress;
mod tables;

use std::io::{self, Write};

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::print_grid_summary;

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}

/// Prints a non-fatal notice. Warnings are shown even in quiet mode.
pub fn print_warning(ctx: Context, message: &str) {
    let mut stderr = io::stderr().lock();
    if ctx.interactive {
        let _ = writeln!(stderr, "  \x1b[33m!\x1b[0m {}", message);
    } else {
        let _ = writeln!(stderr, "warning: {}", message);
    }
}
