use crate::io::{Format, error::Error};
use crate::model::grid::BoxSpec;
use std::io::BufRead;

/// Keys a box description must define, in `[center xyz, size xyz]` order.
pub const BOX_KEYS: [&str; 6] = [
    "center_x", "center_y", "center_z", "size_x", "size_y", "size_z",
];

/// Reads a Vina-style box description.
///
/// A line belongs to a key when it starts with that key; its value is the
/// third whitespace-separated token (`center_x = 12.5`). Lines matching no
/// key are ignored, and a key given more than once keeps its last value.
pub fn read_box<R: BufRead>(reader: R) -> Result<BoxSpec, Error> {
    let mut values: [Option<f64>; 6] = [None; 6];

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(slot) = BOX_KEYS.iter().position(|key| line.starts_with(key)) else {
            continue;
        };
        values[slot] = Some(parse_value(&line, idx + 1, BOX_KEYS[slot])?);
    }

    let mut resolved = [0.0; 6];
    for (slot, value) in values.iter().enumerate() {
        resolved[slot] = value.ok_or(Error::MissingKey {
            key: BOX_KEYS[slot],
        })?;
    }

    Ok(BoxSpec {
        center: [resolved[0], resolved[1], resolved[2]],
        size: [resolved[3], resolved[4], resolved[5]],
    })
}

fn parse_value(line: &str, line_no: usize, key: &str) -> Result<f64, Error> {
    let raw = line.split_whitespace().nth(2).ok_or_else(|| {
        Error::parse(
            Format::VinaConfig,
            line_no,
            format!("expected '{} = <value>'", key),
        )
    })?;

    raw.parse::<f64>().map_err(|_| {
        Error::parse(
            Format::VinaConfig,
            line_no,
            format!("invalid value '{}' for {}", raw, key),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CONFIG: &str = "\
receptor = rec.pdbqt
center_x = 1.0
center_y = -2.5
center_z = 30.125
size_x = 10.0
size_y = 22.5
size_z = 15
exhaustiveness = 8
";

    #[test]
    fn reads_all_six_values() {
        let spec = read_box(Cursor::new(CONFIG)).expect("read");
        assert_eq!(spec.center, [1.0, -2.5, 30.125]);
        assert_eq!(spec.size, [10.0, 22.5, 15.0]);
    }

    #[test]
    fn last_duplicate_wins() {
        let text = format!("{CONFIG}center_x = 7.75\n");
        let spec = read_box(Cursor::new(text)).expect("read");
        assert_eq!(spec.center[0], 7.75);
    }

    #[test]
    fn any_operator_token_is_accepted() {
        let text = CONFIG.replace("size_y = 22.5", "size_y : 22.5");
        let spec = read_box(Cursor::new(text)).expect("read");
        assert_eq!(spec.size[1], 22.5);
    }

    #[test]
    fn missing_key_is_reported_by_name() {
        let text = CONFIG.replace("size_z = 15\n", "");
        let err = read_box(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::MissingKey { key: "size_z" }));
    }

    #[test]
    fn non_numeric_value_is_a_parse_error() {
        let text = CONFIG.replace("center_y = -2.5", "center_y = south");
        let err = read_box(Cursor::new(text)).unwrap_err();
        match err {
            Error::Parse { format, line, details } => {
                assert_eq!(format, Format::VinaConfig);
                assert_eq!(line, 3);
                assert!(details.contains("south"), "{details}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn value_without_separator_is_a_parse_error() {
        let text = CONFIG.replace("center_z = 30.125", "center_z=30.125");
        assert!(matches!(
            read_box(Cursor::new(text)),
            Err(Error::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn indented_keys_are_ignored() {
        let text = CONFIG.replace("center_x = 1.0", "  center_x = 1.0");
        assert!(matches!(
            read_box(Cursor::new(text)),
            Err(Error::MissingKey { key: "center_x" })
        ));
    }
}
