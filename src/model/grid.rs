/// A docking grid: its center in Cartesian space and the number of grid
/// points along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBox {
    pub center: [f64; 3],
    pub npts: [i64; 3],
}

impl GridBox {
    pub fn new(center: [f64; 3], npts: [i64; 3]) -> Self {
        Self { center, npts }
    }
}

/// An explicit box as written in a Vina-style config: a center and an edge
/// length per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpec {
    pub center: [f64; 3],
    pub size: [f64; 3],
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBox {
    /// Returns `None` when `points` yields nothing.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            for axis in 0..3 {
                bounds.min[axis] = bounds.min[axis].min(p[axis]);
                bounds.max[axis] = bounds.max[axis].max(p[axis]);
            }
        }
        Some(bounds)
    }

    pub fn center(&self) -> [f64; 3] {
        std::array::from_fn(|axis| (self.min[axis] + self.max[axis]) / 2.0)
    }

    pub fn extent(&self) -> [f64; 3] {
        std::array::from_fn(|axis| self.max[axis] - self.min[axis])
    }
}
