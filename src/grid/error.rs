//! Error types for grid box computation and grid parameter loading.

use thiserror::Error;

/// Errors that can occur while deriving a [`GridBox`](crate::GridBox).
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse a grid parameters TOML document.
    #[error("failed to parse grid parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),

    /// Grid parameters parsed but hold unusable values.
    #[error("invalid grid parameters: {0}")]
    InvalidParameter(String),

    /// The ligand contained no `ATOM`/`HETATM` records to build a box around.
    #[error("no atoms found in ligand; cannot compute a bounding box")]
    NoAtoms,

    /// A box dimension does not convert to a usable grid point count.
    #[error("cannot place {points} grid points along {axis}")]
    InvalidBox { axis: char, points: f64 },

    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] crate::io::Error),
}
