// Tables for the marching tetrahedra triangulator.
//
// Tetrahedra are listed with positive orientation: det(v1 - v0, v2 - v0, v3 - v0) > 0.
// For such a tetrahedron, the faces seen counter-clockwise from outside are
// (v1, v2, v3), (v0, v3, v2), (v0, v1, v3) and (v0, v2, v1). Every triangle below
// is derived from these so that its normal goes from inside vertices to outside ones.

#[derive(Clone, Copy)]
pub struct TetrahedronCornerIndex(pub usize);

// Cube corners (CELL_CORNERS numbering) of the 6 tetrahedra around the 0-7 diagonal.
// Every cell uses the same diagonal, so faces match between neighbour cells.
#[rustfmt::skip]
pub const CUBE_TETRAHEDRA: [[usize; 4]; 6] = [
    [0, 1, 3, 7],
    [0, 1, 7, 5],
    [0, 3, 2, 7],
    [0, 2, 6, 7],
    [0, 4, 5, 7],
    [0, 6, 4, 7],
];

// Tetrahedron edges, as pairs of tetrahedron corner indices
#[rustfmt::skip]
pub const TETRAHEDRON_EDGES: [(TetrahedronCornerIndex, TetrahedronCornerIndex); 6] = [
    (TetrahedronCornerIndex(0), TetrahedronCornerIndex(1)),
    (TetrahedronCornerIndex(1), TetrahedronCornerIndex(2)),
    (TetrahedronCornerIndex(0), TetrahedronCornerIndex(2)),
    (TetrahedronCornerIndex(0), TetrahedronCornerIndex(3)),
    (TetrahedronCornerIndex(1), TetrahedronCornerIndex(3)),
    (TetrahedronCornerIndex(2), TetrahedronCornerIndex(3)),
];

// Indexed by case (bit i set when tetrahedron corner i is inside).
// Each consecutive 3 edge indices make one triangle
#[rustfmt::skip]
pub const TETRAHEDRON_TRIANGLES: [&[usize]; 16] = [
    &[],
    &[0, 2, 3],
    &[0, 4, 1],
    &[2, 3, 4, 2, 4, 1],
    &[2, 1, 5],
    &[0, 1, 5, 0, 5, 3],
    &[0, 4, 5, 0, 5, 2],
    &[3, 4, 5],
    &[3, 5, 4],
    &[0, 5, 4, 0, 2, 5],
    &[0, 5, 1, 0, 3, 5],
    &[2, 5, 1],
    &[2, 4, 3, 2, 1, 4],
    &[0, 1, 4],
    &[0, 3, 2],
    &[],
];
