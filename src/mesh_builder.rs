/*!
Structs and traits used to customize mesh generation
*/

use crate::traits::Coordinate;
use crate::traits::Density;

/// A world space position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position<C: Coordinate> {
    /// X
    pub x: C,
    /// Y
    pub y: C,
    /// Z
    pub z: C,
}

impl<C: Coordinate> Position<C> {
    /// Shorthand constructor
    pub fn new(x: C, y: C, z: C) -> Self {
        Position { x, y, z }
    }

    /// Interpolate between this `self` position and `other`, by the given `factor` (0 giving self, 1 giving other)
    pub fn interp_toward(&self, other: &Position<C>, factor: C) -> Position<C> {
        Position {
            x: self.x + factor * (other.x - self.x),
            y: self.y + factor * (other.y - self.y),
            z: self.z + factor * (other.z - self.z),
        }
    }

    /// Sum of the squared per-axis differences
    pub fn distance_squared(&self, other: &Position<C>) -> C {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Whether all 3 coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// As a `[x, y, z]` array
    pub fn to_array(&self) -> [C; 3] {
        [self.x, self.y, self.z]
    }
}

impl<C: Coordinate> From<[C; 3]> for Position<C> {
    fn from(xyz: [C; 3]) -> Self {
        Position::new(xyz[0], xyz[1], xyz[2])
    }
}

/// A lattice point of the sampling grid. A pair of these will be passed to the mesh builder,
/// when creating vertices
#[derive(Debug, Clone, Copy)]
pub struct GridPoint<F: Density> {
    /// World location of the grid point
    pub position: Position<F>,
    /// Field value sampled at the grid point
    pub value: F,
}

/// An index in the vertex buffer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VertexIndex(pub usize);

/// Trait you need to implement to build a mesh
pub trait MeshBuilder<F: Density> {
    /// Called by the triangulators when a new vertex it to be created between 2 grid points.
    ///
    /// Must return the index in the vertex buffer of the created vertex, as this will potentially get reused
    /// by other triangles of the same cell.
    /// `interp_toward_b` indicates where the vertex is to be placed within the AB segment: near 0 means near A, near 1 means near B.
    fn add_vertex_between(
        &mut self,
        point_a: GridPoint<F>,
        point_b: GridPoint<F>,
        interp_toward_b: F,
    ) -> VertexIndex;

    /// Called by the triangulators when a triangle is to be created, using 3 pre-created vertices.
    /// Vertices come in counter-clockwise order seen from outside (lower field values).
    fn add_triangle(
        &mut self,
        vertex_1_index: VertexIndex,
        vertex_2_index: VertexIndex,
        vertex_3_index: VertexIndex,
    );
}
