use crate::io::{Format, columns, error::Error};
use crate::model::types::ReceptorTypes;
use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::ops::Range;

/// Collects the receptor atom types present in columns 77-79 of every line.
///
/// Every line is inspected, not only atom records. Tokens outside `supported`
/// are dropped, which also discards whatever text non-atom records happen to
/// carry in those columns. Only the type field is decoded; a field that is not
/// valid UTF-8 contributes nothing.
pub fn read_receptor_types<R: BufRead>(
    reader: R,
    supported: &[String],
) -> Result<ReceptorTypes, Error> {
    let mut tokens = BTreeSet::new();

    for line in raw_lines(reader) {
        let line = line?;
        let field = columns::clipped_field(&line, columns::ATOM_TYPE).and_then(columns::as_text);
        if let Some(raw) = field {
            tokens.extend(raw.split_whitespace().map(str::to_owned));
        }
    }

    Ok(ReceptorTypes::from_tokens(tokens, supported))
}

/// Reads the Cartesian coordinates of every `ATOM`/`HETATM` record.
pub fn read_coordinates<R: BufRead>(reader: R) -> Result<Vec<[f64; 3]>, Error> {
    let mut coords = Vec::new();

    for (idx, line) in raw_lines(reader).enumerate() {
        let line = line?;
        if !is_atom_record(&line) {
            continue;
        }
        let line_no = idx + 1;
        coords.push([
            parse_coordinate(&line, line_no, columns::X, 'x')?,
            parse_coordinate(&line, line_no, columns::Y, 'y')?,
            parse_coordinate(&line, line_no, columns::Z, 'z')?,
        ]);
    }

    Ok(coords)
}

/// Splits `reader` into lines without requiring them to be UTF-8, dropping
/// the `\n` or `\r\n` terminator.
fn raw_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    reader.split(b'\n').map(|line| {
        line.map(|mut line| {
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            line
        })
    })
}

fn is_atom_record(line: &[u8]) -> bool {
    line.starts_with(b"ATOM") || line.starts_with(b"HETATM")
}

fn parse_coordinate(
    line: &[u8],
    line_no: usize,
    range: Range<usize>,
    axis: char,
) -> Result<f64, Error> {
    let raw = columns::field(line, range.clone()).ok_or_else(|| {
        Error::parse(
            Format::Pdbqt,
            line_no,
            format!(
                "atom record too short for {} coordinate (columns {}-{})",
                axis,
                range.start + 1,
                range.end
            ),
        )
    })?;

    let text = columns::as_text(raw).ok_or_else(|| {
        Error::parse(
            Format::Pdbqt,
            line_no,
            format!("{} coordinate is not valid UTF-8 text", axis),
        )
    })?;

    text.trim().parse::<f64>().map_err(|_| {
        Error::parse(
            Format::Pdbqt,
            line_no,
            format!("invalid {} coordinate '{}'", axis, text.trim()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::default_supported_types;
    use std::io::Cursor;

    fn atom_line(record: &str, xyz: [f64; 3], atom_type: &str) -> String {
        format!(
            "{:<6}{:>5} {:<4} {:>3} {:1}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}    {:>6.3} {:<2}",
            record, 1, "C1", "LIG", 'A', 1, xyz[0], xyz[1], xyz[2], 1.0, 0.0, 0.0, atom_type
        )
    }

    #[test]
    fn atom_line_helper_matches_column_layout() {
        let line = atom_line("ATOM", [1.0, -2.5, 30.125], "HD");
        assert_eq!(line.len(), 79);
        assert_eq!(&line[30..38], "   1.000");
        assert_eq!(&line[38..46], "  -2.500");
        assert_eq!(&line[46..54], "  30.125");
        assert_eq!(&line[76..79], " HD");
    }

    #[test]
    fn extracts_sorted_supported_types() {
        let text = [
            atom_line("ATOM", [0.0; 3], "HD"),
            atom_line("ATOM", [0.0; 3], "C"),
            atom_line("ATOM", [0.0; 3], "Xx"),
            atom_line("HETATM", [0.0; 3], "C"),
        ]
        .join("\n");

        let types =
            read_receptor_types(Cursor::new(text), &default_supported_types()).expect("read");
        assert_eq!(types.to_string(), "C HD");
    }

    #[test]
    fn short_and_non_atom_lines_contribute_nothing() {
        let text = format!(
            "REMARK  short\nROOT\n{}\nENDROOT\nTORSDOF 0\n",
            atom_line("ATOM", [0.0; 3], "OA")
        );
        let types =
            read_receptor_types(Cursor::new(text), &default_supported_types()).expect("read");
        assert_eq!(types.as_slice(), ["OA"]);
    }

    #[test]
    fn truncated_type_column_is_clipped() {
        let full = atom_line("ATOM", [0.0; 3], "NA");
        let truncated = &full[..78];
        let types = read_receptor_types(Cursor::new(truncated.to_string()), &default_supported_types())
            .expect("read");
        assert_eq!(types.as_slice(), ["NA"]);
    }

    #[test]
    fn non_utf8_bytes_outside_the_type_column_are_ignored() {
        let mut text = b"REMARK  caf\xe9\r\n".to_vec();
        text.extend_from_slice(atom_line("ATOM", [0.0; 3], "N").as_bytes());
        text.extend_from_slice(b"\nREMARK  ");
        text.extend_from_slice(&[0xff; 80]);
        text.push(b'\n');

        let types =
            read_receptor_types(Cursor::new(text), &default_supported_types()).expect("read");
        assert_eq!(types.to_string(), "N");
    }

    #[test]
    fn no_types_yields_empty_set() {
        let types =
            read_receptor_types(Cursor::new("HEADER nothing here\n"), &default_supported_types())
                .expect("read");
        assert!(types.is_empty());
    }

    #[test]
    fn reads_atom_and_hetatm_coordinates_only() {
        let text = [
            "REMARK  ligand".to_string(),
            atom_line("ATOM", [1.0, 2.0, 3.0], "C"),
            "BRANCH   1   2".to_string(),
            atom_line("HETATM", [-4.5, 0.25, 10.0], "OA"),
            "TER".to_string(),
        ]
        .join("\n");

        let coords = read_coordinates(Cursor::new(text)).expect("read");
        assert_eq!(coords, vec![[1.0, 2.0, 3.0], [-4.5, 0.25, 10.0]]);
    }

    #[test]
    fn ligand_remarks_may_carry_non_utf8_bytes() {
        let mut text = b"REMARK  r\xe9sum\xe9\r\n".to_vec();
        text.extend_from_slice(atom_line("HETATM", [1.5, -2.0, 0.25], "C").as_bytes());
        text.extend_from_slice(b"\r\n");

        let coords = read_coordinates(Cursor::new(text)).expect("read");
        assert_eq!(coords, vec![[1.5, -2.0, 0.25]]);
    }

    #[test]
    fn record_prefix_must_start_the_line() {
        let text = format!(" {}", atom_line("ATOM", [1.0, 2.0, 3.0], "C"));
        let coords = read_coordinates(Cursor::new(text)).expect("read");
        assert!(coords.is_empty());
    }

    #[test]
    fn short_atom_record_is_a_parse_error() {
        let text = format!(
            "{}\nATOM      2  C   LIG A   1       1.000   2.000\n",
            atom_line("ATOM", [0.0; 3], "C")
        );
        let err = read_coordinates(Cursor::new(text)).unwrap_err();
        match err {
            Error::Parse { format, line, details } => {
                assert_eq!(format, Format::Pdbqt);
                assert_eq!(line, 2);
                assert!(details.contains("z coordinate"), "{details}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_coordinate_is_a_parse_error() {
        let mut line = atom_line("HETATM", [1.0, 2.0, 3.0], "C");
        line.replace_range(38..46, "  abcdef");
        let err = read_coordinates(Cursor::new(line)).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse { line: 1, ref details, .. } if details.contains("invalid y coordinate")
        ));
    }
}
