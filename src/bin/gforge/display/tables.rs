use std::io::{self, Write};

use gpf_forge::{DEFAULT_SPACING, GridBox, ReceptorTypes};

use crate::config::{BoxSource, RunPlan};
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_grid_summary(plan: &RunPlan, types: &ReceptorTypes, grid: &GridBox) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    print_kv_table(&mut out, "Grid Summary", &summary_rows(plan, types, grid));
}

fn summary_rows(plan: &RunPlan, types: &ReceptorTypes, grid: &GridBox) -> Vec<(&'static str, String)> {
    let source = match &plan.source {
        BoxSource::Explicit(path) => format!("box {}", file_name(path)),
        BoxSource::Ligand { path, padding } => {
            format!("ligand {} (+{:.1} Å)", file_name(path), padding)
        }
    };

    let receptor_types = if types.is_empty() {
        "(none)".to_string()
    } else {
        types.to_string()
    };

    let [nx, ny, nz] = grid.npts;
    let [cx, cy, cz] = grid.center;

    vec![
        ("Receptor", file_name(&plan.receptor)),
        ("Receptor Types", receptor_types),
        ("Box Source", source),
        ("Center (Å)", format!("{:.3} {:.3} {:.3}", cx, cy, cz)),
        ("Grid Points", format!("{} × {} × {}", nx, ny, nz)),
        (
            "Edge (Å)",
            format!(
                "{:.2} × {:.2} × {:.2}",
                nx as f64 * DEFAULT_SPACING,
                ny as f64 * DEFAULT_SPACING,
                nz as f64 * DEFAULT_SPACING
            ),
        ),
        ("Map Prefix", plan.prefix.clone()),
        ("Output", plan.output.display().to_string()),
    ]
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 7;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{left}{}{mid}{}{right}",
            INDENT,
            "─".repeat(key_w + 2),
            "─".repeat(val_w + 2)
        )
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }
    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
    let _ = writeln!(out);
}
