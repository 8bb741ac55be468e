use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};

use gpf_forge::io::Error as IoError;

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn open_input(path: &Path, role: &str) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", role, path.display()))?;
    Ok(BufReader::new(file))
}

/// Checks the output path before any work is done.
///
/// Returns whether an existing file will be overwritten; fails with
/// [`IoError::OutputExists`] if it exists and `overwrite` is off.
pub fn preflight_output(path: &Path, overwrite: bool) -> Result<bool> {
    let exists = path.exists();
    if exists && !overwrite {
        return Err(IoError::OutputExists(path.to_path_buf()).into());
    }
    Ok(exists)
}
