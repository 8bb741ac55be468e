use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Builds user-facing hints from the typed errors anywhere in the chain.
pub fn collect_hints(err: &Error) -> Vec<String> {
    use gpf_forge::GridError;
    use gpf_forge::io::Error as IoError;

    let mut hints = Vec::new();

    if let Some(grid_err) = err.downcast_ref::<GridError>() {
        grid_hints(grid_err, &mut hints);
    } else if let Some(io_err) = err.downcast_ref::<IoError>() {
        io_hints(io_err, &mut hints);
    } else if let Some(std_err) = err.downcast_ref::<std::io::Error>() {
        std_io_hints(std_err, &mut hints);
    }

    hints
}

fn grid_hints(err: &gpf_forge::GridError, hints: &mut Vec<String>) {
    use gpf_forge::GridError;

    match err {
        GridError::NoAtoms => {
            hints.push("The ligand file has no ATOM or HETATM records".into());
            hints.push("Records must start at column 1 of the line".into());
            hints.push("Or describe the box explicitly with --box".into());
        }
        GridError::InvalidBox { axis, .. } => {
            hints.push(format!("Check the size_{} value in the box file", axis));
            hints.push("Sizes and padding must be finite numbers of ångströms".into());
        }
        GridError::ParameterParse(_) => {
            hints.push("The --params file is not valid TOML".into());
            hints.push("Check for missing quotes, brackets, or invalid values".into());
        }
        GridError::InvalidParameter(_) => {
            hints.push("Fix the offending value in the --params file".into());
            hints.push("Omit a key to fall back to its built-in default".into());
        }
        GridError::Io(io_err) => io_hints(io_err, hints),
    }
}

fn io_hints(err: &gpf_forge::io::Error, hints: &mut Vec<String>) {
    use gpf_forge::io::{Error as IoError, Format};

    match err {
        IoError::Io { source } => std_io_hints(source, hints),

        IoError::Parse { format, line, .. } => {
            hints.push(format!("Inspect line {} of the {} input", line, format));
            match format {
                Format::Pdbqt => {
                    hints.push("PDBQT: x, y, z must occupy columns 31-38, 39-46, 47-54".into());
                    hints.push("PDBQT: ATOM/HETATM records must not be truncated".into());
                }
                Format::VinaConfig => {
                    hints.push("Box entries take the form 'center_x = 12.5'".into());
                    hints.push("Separate key, '=' and value with whitespace".into());
                }
            }
        }

        IoError::MissingKey { key } => {
            hints.push(format!("Add a line '{} = <value>' to the box file", key));
            hints.push("A box needs center_x/y/z and size_x/y/z".into());
        }

        IoError::OutputExists(_) => {
            hints.push("Pass --force to overwrite the existing file".into());
            hints.push("Or choose another name with --mapprefix or --output".into());
        }
    }
}

fn std_io_hints(err: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match err.kind() {
        ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("The file is not valid UTF-8 text".into());
            hints.push("Verify it is a text structure file and not truncated".into());
        }
        ErrorKind::WriteZero => {
            hints.push("Failed to write data (disk full?)".into());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use gpf_forge::GridError;
    use gpf_forge::io::{Error as IoError, Format};
    use std::path::PathBuf;

    #[test]
    fn no_atoms_suggests_explicit_box() {
        let err = Error::from(GridError::NoAtoms);
        let hints = collect_hints(&err);
        assert!(hints.iter().any(|h| h.contains("--box")));
    }

    #[test]
    fn output_exists_suggests_force_through_context() {
        let err: anyhow::Result<()> =
            Err(IoError::OutputExists(PathBuf::from("rec.gpf"))).context("Cannot write GPF");
        let hints = collect_hints(&err.unwrap_err());
        assert!(hints.iter().any(|h| h.contains("--force")));
    }

    #[test]
    fn parse_error_points_at_line() {
        let err = Error::from(IoError::parse(Format::VinaConfig, 7, "bad value"));
        let hints = collect_hints(&err);
        assert_eq!(hints[0], "Inspect line 7 of the Vina config input");
    }

    #[test]
    fn missing_file_hint() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io).context("Failed to open receptor file: rec.pdbqt");
        let hints = collect_hints(&err);
        assert!(hints[0].contains("ensure the file exists"));
    }

    #[test]
    fn invalid_box_names_the_axis() {
        let err = Error::from(GridError::InvalidBox {
            axis: 'y',
            points: f64::INFINITY,
        })
        .context("Cannot build a grid box from box.txt");
        let hints = collect_hints(&err);
        assert_eq!(hints[0], "Check the size_y value in the box file");
    }

    #[test]
    fn untyped_errors_get_no_hints() {
        assert!(collect_hints(&anyhow::anyhow!("something odd")).is_empty());
    }
}
