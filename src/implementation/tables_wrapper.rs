/// Index of a corner within a cell, in `CELL_CORNERS` numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCornerIndex(pub usize);

/// The low byte contains the indices for the two endpoints of the edge on which the vertex lies.
/// The high byte contains vertex reuse data for neighbour cells, which we do not use:
/// vertices are only shared between triangles of the same cell.
pub struct RegularVertexData(pub u16);

impl RegularVertexData {
    pub fn corner_a_index(&self) -> CellCornerIndex {
        let edge_location = self.0 & 0xFF;
        CellCornerIndex(((edge_location & 0xF0) >> 4) as usize)
    }
    pub fn corner_b_index(&self) -> CellCornerIndex {
        let edge_location = self.0 & 0xFF;
        CellCornerIndex((edge_location & 0xF) as usize)
    }
}
