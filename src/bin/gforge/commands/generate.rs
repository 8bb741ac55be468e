use anyhow::{Context, Result};

use gpf_forge::io::{create_output, gpf, pdbqt, vina};
use gpf_forge::{DEFAULT_SPACING, GpfFields, GridBox, ReceptorTypes, explicit_box, ligand_box};

use crate::config::{BoxSource, RunPlan};
use crate::display::{Context as DisplayContext, Progress, print_grid_summary, print_warning};
use crate::io::open_input;

const TOTAL_STEPS: u8 = 3;

pub fn run_generate(plan: RunPlan, replaces_existing: bool, ctx: DisplayContext) -> Result<()> {
    if replaces_existing {
        print_warning(
            ctx,
            &format!("Overwriting existing {}", plan.output.display()),
        );
    }
    if plan.padding_ignored {
        print_warning(ctx, "--pad has no effect with --box");
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading receptor atom types");
    let types = read_receptor_types(&plan)?;
    progress.complete_step(
        "Reading receptor atom types",
        &[format!("{} supported type(s) found", types.len())],
    );
    if types.is_empty() {
        print_warning(
            ctx,
            &format!(
                "No supported atom types in {}; receptor_types will be empty",
                plan.receptor.display()
            ),
        );
    }

    progress.step("Computing grid box");
    let (grid, box_substeps) = compute_grid(&plan)?;
    progress.complete_step("Computing grid box", &box_substeps);

    if ctx.interactive {
        print_grid_summary(&plan, &types, &grid);
    }

    progress.step("Writing GPF");
    write_gpf(&plan, &types, &grid)?;
    progress.complete_step(
        "Writing GPF",
        &[format!("Write GPF → {}", plan.output.display())],
    );

    progress.finish();

    Ok(())
}

fn read_receptor_types(plan: &RunPlan) -> Result<ReceptorTypes> {
    let input = open_input(&plan.receptor, "receptor")?;
    pdbqt::read_receptor_types(input, &plan.params.receptor.supported_types).with_context(|| {
        format!(
            "Failed to read receptor atom types from {}",
            plan.receptor.display()
        )
    })
}

fn compute_grid(plan: &RunPlan) -> Result<(GridBox, Vec<String>)> {
    match &plan.source {
        BoxSource::Explicit(path) => {
            let input = open_input(path, "box")?;
            let spec = vina::read_box(input)
                .with_context(|| format!("Failed to read box description {}", path.display()))?;
            let grid = explicit_box(&spec)
                .with_context(|| format!("Cannot build a grid box from {}", path.display()))?;
            let substeps = vec![
                format!(
                    "Parse box (size {} × {} × {} Å)",
                    spec.size[0], spec.size[1], spec.size[2]
                ),
                "Convert size to points (2 · ⌊size / 0.75⌋)".to_string(),
            ];
            Ok((grid, substeps))
        }
        BoxSource::Ligand { path, padding } => {
            let input = open_input(path, "ligand")?;
            let coords = pdbqt::read_coordinates(input)
                .with_context(|| format!("Failed to read ligand {}", path.display()))?;
            let grid = ligand_box(&coords, *padding, DEFAULT_SPACING)
                .with_context(|| format!("Cannot build a grid box around {}", path.display()))?;
            let substeps = vec![
                format!("Read {} ligand atom(s)", coords.len()),
                format!("Pad bounding box by {:.2} Å", padding),
                format!("Convert extent to points (spacing {} Å)", DEFAULT_SPACING),
            ];
            Ok((grid, substeps))
        }
    }
}

fn write_gpf(plan: &RunPlan, types: &ReceptorTypes, grid: &GridBox) -> Result<()> {
    let fields = GpfFields {
        prefix: &plan.prefix,
        receptor: &plan.receptor_label,
        receptor_types: types,
        grid,
    };

    let writer = create_output(&plan.output, plan.overwrite)
        .with_context(|| format!("Failed to create output file: {}", plan.output.display()))?;
    gpf::write(writer, &fields)
        .with_context(|| format!("Failed to write GPF: {}", plan.output.display()))
}
