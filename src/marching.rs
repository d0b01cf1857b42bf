/*!
Cell triangulation strategies
*/

use crate::config::MarchingMode;
use crate::grid::GridCell;
use crate::mesh_builder::{MeshBuilder, VertexIndex};
use crate::traits::Density;

pub use crate::implementation::cubes::MarchingCubes;
pub use crate::implementation::tetrahedra::MarchingTetrahedra;

/**
Turns one sampled cell into triangles.

Implementations classify corners with [Density::inside] (strictly above the threshold is inside),
place vertices on crossed edges with [Density::interp], and emit triangles wound counter-clockwise
seen from outside.
*/
pub trait Triangulator<F: Density> {
    /// Append the triangles of `cell` (zero or more) to `builder`
    fn march<M: MeshBuilder<F>>(&self, cell: &GridCell<F>, threshold: F, builder: &mut M);
}

impl<F: Density> Triangulator<F> for MarchingMode {
    fn march<M: MeshBuilder<F>>(&self, cell: &GridCell<F>, threshold: F, builder: &mut M) {
        match self {
            MarchingMode::Cubes => MarchingCubes.march(cell, threshold, builder),
            MarchingMode::Tetrahedra => MarchingTetrahedra.march(cell, threshold, builder),
        }
    }
}

/// Triangulator implementation for references
impl<F: Density, T: Triangulator<F>> Triangulator<F> for &T {
    fn march<M: MeshBuilder<F>>(&self, cell: &GridCell<F>, threshold: F, builder: &mut M) {
        (**self).march(cell, threshold, builder)
    }
}

// Creates a new vertex where the threshold is crossed on the edge between 2 corners of the cell
pub(crate) fn vertex_on_edge<F, M>(
    cell: &GridCell<F>,
    corner_a: usize,
    corner_b: usize,
    threshold: F,
    builder: &mut M,
) -> VertexIndex
where
    F: Density,
    M: MeshBuilder<F>,
{
    let point_a = cell.grid_point(corner_a);
    let point_b = cell.grid_point(corner_b);
    let interp_toward_b = F::interp(point_a.value, point_b.value, threshold);
    builder.add_vertex_between(point_a, point_b, interp_toward_b)
}
