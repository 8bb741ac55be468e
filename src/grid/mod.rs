//! Grid box derivation.
//!
//! A [`GridBox`] comes from one of two mutually exclusive sources:
//!
//! - [`explicit_box`] converts a Vina-style [`BoxSpec`] (center and edge
//!   lengths) into grid point counts with `npts = 2 * trunc(size / 0.75)`.
//! - [`ligand_box`] encloses a set of ligand coordinates in an axis-aligned
//!   bounding box, pads it on every side, and converts the padded extent with
//!   `npts = ceil((2 * padding + extent) / spacing)`.
//!
//! The two conversions intentionally use different constants; see
//! [`EXPLICIT_BOX_DIVISOR`].

mod error;
mod params;

pub use error::Error;
pub use params::{
    GridParams, LigandBoxParams, ReceptorParams, get_default_parameters, load_parameters,
};

use crate::model::grid::{BoundingBox, BoxSpec, GridBox};

/// Grid spacing written to every GPF (Å).
pub const DEFAULT_SPACING: f64 = 0.375;

/// Default margin around a ligand bounding box (Å).
pub const DEFAULT_PADDING: f64 = 8.0;

/// Divisor in the explicit-box conversion `npts = 2 * trunc(size / 0.75)`.
///
/// Equivalent to `size / 0.375` rounded down to an even count, so explicit
/// boxes always get an even number of points per axis.
pub const EXPLICIT_BOX_DIVISOR: f64 = 0.75;

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Converts an explicit box description into a grid box.
///
/// Centers pass through unchanged. Negative sizes are not rejected and yield
/// a negative count.
///
/// # Errors
///
/// Returns [`Error::InvalidBox`] when a size is not finite or its point count
/// does not fit in an `i64`.
pub fn explicit_box(spec: &BoxSpec) -> Result<GridBox, Error> {
    let mut npts = [0; 3];
    for (axis, &size) in spec.size.iter().enumerate() {
        let half = (size / EXPLICIT_BOX_DIVISOR).trunc();
        npts[axis] = to_count(half)
            .and_then(|n| n.checked_mul(2))
            .ok_or(Error::InvalidBox {
                axis: AXES[axis],
                points: 2.0 * half,
            })?;
    }
    Ok(GridBox::new(spec.center, npts))
}

/// Builds a padded grid box around `coords`.
///
/// # Errors
///
/// Returns [`Error::NoAtoms`] when `coords` is empty, and
/// [`Error::InvalidBox`] when a padded extent does not convert to a finite
/// point count (for example with a zero spacing).
pub fn ligand_box(coords: &[[f64; 3]], padding: f64, spacing: f64) -> Result<GridBox, Error> {
    let bounds = BoundingBox::from_points(coords.iter().copied()).ok_or(Error::NoAtoms)?;
    let mut npts = [0; 3];
    for (axis, &extent) in bounds.extent().iter().enumerate() {
        let points = ((2.0 * padding + extent) / spacing).ceil();
        npts[axis] = to_count(points).ok_or(Error::InvalidBox {
            axis: AXES[axis],
            points,
        })?;
    }
    Ok(GridBox::new(bounds.center(), npts))
}

/// Converts an already rounded point count, rejecting values `as` would
/// saturate or zero out.
fn to_count(points: f64) -> Option<i64> {
    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63.
    let in_range = points >= i64::MIN as f64 && points < i64::MAX as f64;
    in_range.then_some(points as i64)
}
