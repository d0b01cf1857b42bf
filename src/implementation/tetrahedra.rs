/*!
Marching tetrahedra: each cell is split into the 6 tetrahedra of [CUBE_TETRAHEDRA], and each
tetrahedron is triangulated on its own with a 16-case table.
No case is ambiguous, at the cost of more, smaller triangles than marching cubes.
*/

use super::aux_tables::*;
use crate::grid::GridCell;
use crate::marching::{vertex_on_edge, Triangulator};
use crate::mesh_builder::{MeshBuilder, VertexIndex};
use crate::traits::Density;

/// 6 tetrahedra per cell, one 16-case lookup each
#[derive(Debug, Clone, Copy, Default)]
pub struct MarchingTetrahedra;

impl<F: Density> Triangulator<F> for MarchingTetrahedra {
    fn march<M: MeshBuilder<F>>(&self, cell: &GridCell<F>, threshold: F, builder: &mut M) {
        for tetrahedron in CUBE_TETRAHEDRA.iter() {
            march_tetrahedron(cell, tetrahedron, threshold, builder);
        }
    }
}

/// Bit `i` is set when tetrahedron corner `i` is inside
pub(crate) fn tetrahedron_case<F: Density>(
    cell: &GridCell<F>,
    tetrahedron: &[usize; 4],
    threshold: F,
) -> usize {
    let mut case: usize = 0;
    for (i, corner) in tetrahedron.iter().enumerate() {
        if cell.values[*corner].inside(&threshold) {
            case |= 1 << i;
        }
    }
    case
}

pub(crate) fn march_tetrahedron<F, M>(
    cell: &GridCell<F>,
    tetrahedron: &[usize; 4],
    threshold: F,
    builder: &mut M,
) where
    F: Density,
    M: MeshBuilder<F>,
{
    let triangles = TETRAHEDRON_TRIANGLES[tetrahedron_case(cell, tetrahedron, threshold)];
    if triangles.is_empty() {
        return;
    }
    // The 2 triangles of a quad share 2 edges: create each edge vertex once
    let mut edge_vertices: [Option<VertexIndex>; 6] = [None; 6];
    let mut vertex_for_edge = |edge: usize, builder: &mut M| -> VertexIndex {
        if let Some(index) = edge_vertices[edge] {
            return index;
        }
        let (a, b) = TETRAHEDRON_EDGES[edge];
        let index = vertex_on_edge(cell, tetrahedron[a.0], tetrahedron[b.0], threshold, builder);
        edge_vertices[edge] = Some(index);
        index
    };
    for triangle in triangles.chunks_exact(3) {
        let v1 = vertex_for_edge(triangle[0], builder);
        let v2 = vertex_for_edge(triangle[1], builder);
        let v3 = vertex_for_edge(triangle[2], builder);
        builder.add_triangle(v1, v2, v3);
    }
}
