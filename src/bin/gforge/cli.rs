use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Parser)]
#[command(
    name = "gforge",
    about = "AutoGrid grid parameter file generator",
    version,
    author,
    before_help = crate::display::banner_for_help(),
)]
pub struct Cli {
    /// Receptor structure (PDBQT)
    #[arg(value_name = "RECEPTOR")]
    pub receptor: PathBuf,

    #[command(flatten)]
    pub grid: GridOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Where the grid box comes from. Exactly one source is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct BoxSourceOptions {
    /// Vina box description (center_x/y/z, size_x/y/z)
    #[arg(short = 'b', long = "box", value_name = "FILE")]
    pub box_file: Option<PathBuf>,

    /// Ligand to center the box on (PDBQT)
    #[arg(short = 'l', long = "lig", value_name = "FILE")]
    pub ligand: Option<PathBuf>,
}

#[derive(Args)]
#[command(next_help_heading = "Grid Box")]
pub struct GridOptions {
    #[command(flatten)]
    pub source: BoxSourceOptions,

    /// Padding around the ligand (Å) [default: 8.0, or from --params]
    #[arg(short, long, value_name = "Å", allow_hyphen_values = true)]
    pub pad: Option<f64>,

    /// Custom grid parameters (TOML file)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,
}

#[derive(Args)]
#[command(next_help_heading = "Output")]
pub struct OutputOptions {
    /// Prefix for map files [default: receptor file stem]
    #[arg(long = "mapprefix", value_name = "PREFIX")]
    pub map_prefix: Option<String>,

    /// GPF output path [default: <PREFIX>.gpf]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
