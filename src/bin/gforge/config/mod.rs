use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use gpf_forge::{GridParams, load_parameters};

use crate::cli::{Cli, GridOptions};
use crate::util::path::{file_stem, gpf_path};

/// Grid box source selected on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxSource {
    /// Explicit Vina box description.
    Explicit(PathBuf),
    /// Padded bounding box around a ligand.
    Ligand { path: PathBuf, padding: f64 },
}

/// Where the GPF goes: the map prefix and the output file path.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTarget {
    pub prefix: String,
    pub path: PathBuf,
}

/// Fully resolved inputs for one GPF generation run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub receptor: PathBuf,
    /// Receptor path exactly as given, for the `receptor` GPF line.
    pub receptor_label: String,
    pub prefix: String,
    pub output: PathBuf,
    pub source: BoxSource,
    pub overwrite: bool,
    pub params: GridParams,
    /// `--pad` was given but has no effect on an explicit box.
    pub padding_ignored: bool,
}

pub fn build_grid_params(opts: &GridOptions) -> Result<GridParams> {
    match &opts.params {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read grid parameters: {}", path.display()))?;
            load_parameters(Some(&text))
                .with_context(|| format!("Invalid grid parameters in {}", path.display()))
        }
        None => Ok(load_parameters(None)?),
    }
}

/// Resolves the map prefix and output path without touching any input file.
pub fn resolve_target(cli: &Cli) -> Result<OutputTarget> {
    let prefix = match &cli.output.map_prefix {
        Some(prefix) => prefix.clone(),
        None => default_prefix(&cli.receptor)?,
    };
    if prefix.is_empty() {
        bail!("Map prefix must not be empty.");
    }

    let path = cli
        .output
        .output
        .clone()
        .unwrap_or_else(|| gpf_path(&prefix));

    Ok(OutputTarget { prefix, path })
}

pub fn resolve_plan(cli: &Cli, target: OutputTarget) -> Result<RunPlan> {
    let params = build_grid_params(&cli.grid)?;

    let source = match (&cli.grid.source.box_file, &cli.grid.source.ligand) {
        (Some(path), None) => BoxSource::Explicit(path.clone()),
        (None, Some(path)) => {
            let padding = cli.grid.pad.unwrap_or(params.ligand_box.padding);
            if !padding.is_finite() {
                bail!("Padding must be a finite number, got {}.", padding);
            }
            BoxSource::Ligand {
                path: path.clone(),
                padding,
            }
        }
        _ => bail!("Use either --box or --lig."),
    };

    let padding_ignored = matches!(source, BoxSource::Explicit(_)) && cli.grid.pad.is_some();

    Ok(RunPlan {
        receptor: cli.receptor.clone(),
        receptor_label: cli.receptor.to_string_lossy().into_owned(),
        prefix: target.prefix,
        output: target.path,
        source,
        overwrite: cli.output.force,
        params,
        padding_ignored,
    })
}

fn default_prefix(receptor: &Path) -> Result<String> {
    file_stem(receptor).with_context(|| {
        format!(
            "Cannot derive a map prefix from '{}'. Use --mapprefix to specify.",
            receptor.display()
        )
    })
}
