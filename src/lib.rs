//! Generate AutoGrid grid parameter files (GPF) for molecular docking.
//!
//! A GPF tells AutoGrid which receptor to map, which atom types it contains,
//! and where the map grid sits. `gpf-forge` derives those values from the
//! inputs a docking run already has:
//!
//! - **Receptor atom types** are read from columns 77-79 of the receptor
//!   PDBQT, deduplicated, sorted, and filtered against the types AutoGrid
//!   supports.
//! - **The grid box** comes either from an explicit Vina-style box description
//!   or from a padded bounding box around a ligand.
//! - **The GPF** is a fixed template with those values substituted in.
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use gpf_forge::io::{gpf, pdbqt};
//! use gpf_forge::{GpfFields, get_default_parameters, ligand_box, DEFAULT_SPACING};
//!
//! let receptor = "\
//! ATOM      1  N   ILE A  16      -8.453  14.163  26.437  1.00 10.69    -0.061 N \n\
//! ATOM      2  HN  ILE A  16      -8.912  13.371  26.031  1.00  0.00     0.275 HD\n";
//! let ligand = "\
//! HETATM    1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00     0.000 C \n\
//! HETATM    2  C2  LIG A   1      10.000   0.000   0.000  1.00  0.00     0.000 C \n";
//!
//! let params = get_default_parameters();
//! let types = pdbqt::read_receptor_types(Cursor::new(receptor), &params.receptor.supported_types)?;
//! let coords = pdbqt::read_coordinates(Cursor::new(ligand))?;
//! let grid = ligand_box(&coords, params.ligand_box.padding, DEFAULT_SPACING)?;
//!
//! assert_eq!(types.to_string(), "HD N");
//! assert_eq!(grid.center, [5.0, 0.0, 0.0]);
//! assert_eq!(grid.npts, [70, 43, 43]);
//!
//! let text = gpf::render(&GpfFields {
//!     prefix: "rec",
//!     receptor: "rec.pdbqt",
//!     receptor_types: &types,
//!     grid: &grid,
//! });
//! assert!(text.starts_with("npts 70 43 43\n"));
//! # Ok::<(), gpf_forge::GridError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] – PDBQT, Vina config, and GPF readers/writers
//! - [`explicit_box`] / [`ligand_box`] – Grid box derivation
//! - [`GridParams`] – Receptor type whitelist and padding defaults (TOML)

mod grid;
mod model;

pub mod io;

pub use model::grid::{BoundingBox, BoxSpec, GridBox};
pub use model::types::{ReceptorTypes, SUPPORTED_RECEPTOR_TYPES};

pub use grid::{
    DEFAULT_PADDING, DEFAULT_SPACING, EXPLICIT_BOX_DIVISOR, GridParams, LigandBoxParams,
    ReceptorParams, explicit_box, get_default_parameters, ligand_box, load_parameters,
};

pub use grid::Error as GridError;
pub use io::gpf::GpfFields;
