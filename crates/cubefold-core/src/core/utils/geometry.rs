use nalgebra::{Matrix3, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A site of the cubic lattice.
pub type Site = Point3<i32>;

/// A displacement between two lattice sites, e.g. a bond vector.
pub type Displacement = Vector3<i32>;

/// Rotation axis of a quarter-turn lattice rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Integer matrix of the 90° rotation about this axis.
    ///
    /// Maps `(x, y, z)` to `(x, -z, y)`, `(z, y, -x)` and `(-y, x, z)` for the
    /// X, Y and Z axis respectively.
    pub fn quarter_turn(self) -> Matrix3<i32> {
        match self {
            Axis::X => Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0),
            Axis::Y => Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0),
            Axis::Z => Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        write!(f, "{}", name)
    }
}

/// Rotates a displacement vector by a quarter turn about `axis`.
///
/// Only relative vectors are ever rotated, which keeps every lattice rotation independent of
/// the absolute origin.
#[inline]
pub fn rotate(vector: &Displacement, axis: Axis) -> Displacement {
    axis.quarter_turn() * vector
}

/// Manhattan distance between two lattice sites.
#[inline]
pub fn manhattan_distance(a: &Site, b: &Site) -> i32 {
    let d = *a - *b;
    d.x.abs() + d.y.abs() + d.z.abs()
}

/// Returns `true` if the two sites share a face.
#[inline]
pub fn are_adjacent(a: &Site, b: &Site) -> bool {
    manhattan_distance(a, b) == 1
}

/// The six face-adjacent sites in the fixed order +x, -x, +y, -y, +z, -z.
pub fn face_neighbours(site: &Site) -> [Site; 6] {
    [
        Site::new(site.x + 1, site.y, site.z),
        Site::new(site.x - 1, site.y, site.z),
        Site::new(site.x, site.y + 1, site.z),
        Site::new(site.x, site.y - 1, site.z),
        Site::new(site.x, site.y, site.z + 1),
        Site::new(site.x, site.y, site.z - 1),
    ]
}
