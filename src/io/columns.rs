//! Fixed-column field access for PDB-style records.
//!
//! Offsets are 0-indexed byte positions, half-open, and fields are returned
//! as raw bytes. Decoding is left to the caller so that bytes outside the
//! requested field never have to be valid UTF-8.

use std::ops::Range;

pub const X: Range<usize> = 30..38;
pub const Y: Range<usize> = 38..46;
pub const Z: Range<usize> = 46..54;

/// AutoDock atom type (columns 77-79).
pub const ATOM_TYPE: Range<usize> = 76..79;

/// Returns the full field, or `None` if the line is too short to contain it.
pub fn field(line: &[u8], range: Range<usize>) -> Option<&[u8]> {
    line.get(range)
}

/// Returns the part of the field that is present on the line.
///
/// A line that ends inside the field yields the available prefix, the way
/// `cut -c` behaves; a line that ends before the field starts yields `None`.
pub fn clipped_field(line: &[u8], range: Range<usize>) -> Option<&[u8]> {
    if range.start >= line.len() {
        return None;
    }
    let end = range.end.min(line.len());
    line.get(range.start..end)
}

/// Decodes a field as text, or `None` if it is not valid UTF-8.
pub fn as_text(raw: &[u8]) -> Option<&str> {
    std::str::from_utf8(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &[u8] =
        b"ATOM      1  N   ILE A  16      -8.453  14.163  26.437  1.00 10.69    -0.061 N ";

    #[test]
    fn reads_coordinate_fields() {
        assert_eq!(field(RECORD, X), Some(&b"  -8.453"[..]));
        assert_eq!(field(RECORD, Y), Some(&b"  14.163"[..]));
        assert_eq!(field(RECORD, Z), Some(&b"  26.437"[..]));
    }

    #[test]
    fn reads_atom_type_field() {
        assert_eq!(field(RECORD, ATOM_TYPE), Some(&b" N "[..]));
    }

    #[test]
    fn short_line_has_no_full_field() {
        assert_eq!(field(b"ATOM      1  N", X), None);
        assert_eq!(field(&RECORD[..50], Z), None);
    }

    #[test]
    fn clipped_field_keeps_available_prefix() {
        assert_eq!(clipped_field(&RECORD[..78], ATOM_TYPE), Some(&b" N"[..]));
        assert_eq!(clipped_field(&RECORD[..76], ATOM_TYPE), None);
        assert_eq!(clipped_field(b"", ATOM_TYPE), None);
    }

    #[test]
    fn split_multibyte_character_does_not_decode() {
        let line = format!("{}é{}", "x".repeat(30), "x".repeat(10));
        let raw = field(line.as_bytes(), 31..38).expect("in bounds");
        assert_eq!(as_text(raw), None);
        assert_eq!(as_text(field(line.as_bytes(), 32..38).unwrap()), Some("xxxxxx"));
    }

    #[test]
    fn bytes_outside_the_field_are_not_decoded() {
        let mut line = RECORD.to_vec();
        line[10] = 0xe9;
        assert_eq!(field(&line, ATOM_TYPE).and_then(as_text), Some(" N "));
    }
}
