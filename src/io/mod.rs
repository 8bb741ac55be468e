//! Readers and writers for the text formats `gpf-forge` touches.
//!
//! - [`pdbqt`] – Receptor atom types and ligand coordinates from fixed-column
//!   PDBQT (or PDB) records.
//! - [`vina`] – Explicit box descriptions from Vina-style config files.
//! - [`gpf`] – The AutoGrid grid parameter file template and writer.
//!
//! All readers take any [`BufRead`](std::io::BufRead) and all writers any
//! [`Write`](std::io::Write); opening files is left to the caller, except for
//! [`create_output`], which enforces the no-clobber rule for GPF files.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind};
use std::path::Path;

pub mod columns;
pub mod error;

pub mod gpf;
pub mod pdbqt;
pub mod vina;

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdbqt,
    VinaConfig,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pdbqt => write!(f, "PDBQT"),
            Format::VinaConfig => write!(f, "Vina config"),
        }
    }
}

/// Opens `path` for writing.
///
/// Unless `overwrite` is set the file must not exist yet; an existing file
/// yields [`Error::OutputExists`] and is left untouched.
pub fn create_output(path: &Path, overwrite: bool) -> Result<BufWriter<File>, Error> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    match options.open(path) {
        Ok(file) => Ok(BufWriter::new(file)),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(Error::OutputExists(path.to_path_buf()))
        }
        Err(e) => Err(Error::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn refuses_to_clobber_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.gpf");
        fs::write(&path, "original").unwrap();

        let err = create_output(&path, false).unwrap_err();
        assert!(matches!(err, Error::OutputExists(ref p) if p == &path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn overwrite_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.gpf");
        fs::write(&path, "a much longer original body").unwrap();

        let mut out = create_output(&path, true).unwrap();
        out.write_all(b"new").unwrap();
        drop(out);

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.gpf");
        let mut out = create_output(&path, false).unwrap();
        out.write_all(b"npts").unwrap();
        drop(out);
        assert_eq!(fs::read_to_string(&path).unwrap(), "npts");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/rec.gpf");
        assert!(matches!(
            create_output(&path, false),
            Err(Error::Io { .. })
        ));
    }
}
