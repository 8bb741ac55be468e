use crate::io::error::Error;
use crate::model::grid::GridBox;
use crate::model::types::ReceptorTypes;
use std::cmp::Reverse;
use std::io::Write;

/// The AutoGrid parameter file template.
///
/// Downstream tools parse this layout, so it is reproduced byte for byte;
/// only the placeholder words are replaced.
pub const TEMPLATE: &str = include_str!("../../../resources/grid.gpf");

/// Values substituted into [`TEMPLATE`].
#[derive(Debug, Clone, Copy)]
pub struct GpfFields<'a> {
    /// Map file prefix (`PREFIX`).
    pub prefix: &'a str,
    /// Receptor path as it should appear on the `receptor` line (`REC`).
    pub receptor: &'a str,
    pub receptor_types: &'a ReceptorTypes,
    pub grid: &'a GridBox,
}

/// Fills the template.
///
/// The template is scanned once from left to right. At each position the
/// longest matching placeholder wins, so `RECTYPES` is never read as `REC`,
/// and substituted values are copied through without being scanned again.
pub fn render(fields: &GpfFields<'_>) -> String {
    let GridBox { center, npts } = *fields.grid;

    let substitutions = [
        ("RECTYPES", fields.receptor_types.to_string()),
        ("PREFIX", fields.prefix.to_string()),
        ("REC", fields.receptor.to_string()),
        ("NPTS_X", npts[0].to_string()),
        ("NPTS_Y", npts[1].to_string()),
        ("NPTS_Z", npts[2].to_string()),
        ("CENTER_X", format!("{:.3}", center[0])),
        ("CENTER_Y", format!("{:.3}", center[1])),
        ("CENTER_Z", format!("{:.3}", center[2])),
    ];

    let mut out = String::with_capacity(TEMPLATE.len() + 256);
    let mut rest = TEMPLATE;
    while let Some((pos, placeholder, value)) = next_placeholder(rest, &substitutions) {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + placeholder.len()..];
    }
    out.push_str(rest);
    out
}

/// Finds the earliest placeholder in `text`, preferring the longest one when
/// several start at the same offset.
fn next_placeholder<'s>(
    text: &str,
    substitutions: &'s [(&'static str, String)],
) -> Option<(usize, &'static str, &'s str)> {
    substitutions
        .iter()
        .filter_map(|(placeholder, value)| {
            text.find(placeholder)
                .map(|pos| (pos, *placeholder, value.as_str()))
        })
        .min_by_key(|&(pos, placeholder, _)| (pos, Reverse(placeholder.len())))
}

pub fn write<W: Write>(mut writer: W, fields: &GpfFields<'_>) -> Result<(), Error> {
    writer.write_all(render(fields).as_bytes())?;
    writer.flush()?;
    Ok(())
}
