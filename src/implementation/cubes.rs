/*!
Marching cubes over the regular cell tables of the Transvoxel algorithm.

The case number has bit `i` set when corner `i` is inside. The tables map it to an equivalence class
(triangle layout) and to the list of edges carrying a vertex, each edge given by its 2 corner numbers.
Corner numbering of the tables is the same as `CELL_CORNERS`.
*/

use super::tables_wrapper::RegularVertexData;
use crate::grid::GridCell;
use crate::marching::{vertex_on_edge, Triangulator};
use crate::mesh_builder::{MeshBuilder, VertexIndex};
use crate::traits::Density;

/// One 256-case lookup per cell
#[derive(Debug, Clone, Copy, Default)]
pub struct MarchingCubes;

impl<F: Density> Triangulator<F> for MarchingCubes {
    fn march<M: MeshBuilder<F>>(&self, cell: &GridCell<F>, threshold: F, builder: &mut M) {
        let case_number = cell.case_number(threshold);
        let cell_class: u8 = transvoxel_data::regular_cell_data::REGULAR_CELL_CLASS[case_number];
        if cell_class == 0 {
            return;
        }
        let triangulation_info =
            transvoxel_data::regular_cell_data::REGULAR_CELL_DATA[cell_class as usize];
        let vertices_data = transvoxel_data::regular_cell_data::REGULAR_VERTEX_DATA[case_number];
        let vertex_count = triangulation_info.get_vertex_count() as usize;
        let mut cell_vertices_indices = [VertexIndex::default(); 12];
        for (i, vd) in vertices_data.iter().take(vertex_count).enumerate() {
            let vd = RegularVertexData(*vd);
            cell_vertices_indices[i] = vertex_on_edge(
                cell,
                vd.corner_a_index().0,
                vd.corner_b_index().0,
                threshold,
                builder,
            );
        }
        for t in 0..triangulation_info.get_triangle_count() as usize {
            let v1_index_in_cell = triangulation_info.vertex_index[3 * t] as usize;
            let v2_index_in_cell = triangulation_info.vertex_index[3 * t + 1] as usize;
            let v3_index_in_cell = triangulation_info.vertex_index[3 * t + 2] as usize;
            builder.add_triangle(
                cell_vertices_indices[v1_index_in_cell],
                cell_vertices_indices[v2_index_in_cell],
                cell_vertices_indices[v3_index_in_cell],
            );
        }
    }
}
