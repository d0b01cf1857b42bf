/*!
Structs for addressing grid cells and their corners, and sampling a cell

 If you subdivide a volume with a grid, "lattice points" are the intersection points of the grid lines.
 The cubes between them are called "cells".

The 8 corners of a cell are always numbered with [CELL_CORNERS]: corner `i` is offset by
`(i & 1, (i >> 1) & 1, (i >> 2) & 1)` cells from the cell origin. The sampler, the cache and both
triangulators rely on this single numbering.
*/
use std::ops::Add;

use crate::bounds::GridBounds;
use crate::density::ScalarField;
use crate::error::Result;
use crate::mesh_builder::{GridPoint, Position};
use crate::traits::Density;

/// Coordinates of a cell within the grid. Go from 0 to `resolution` - 1 on each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    /// X. From 0 to `resolution[0]` - 1 (included)
    pub x: usize,
    /// Y. From 0 to `resolution[1]` - 1 (included)
    pub y: usize,
    /// Z. From 0 to `resolution[2]` - 1 (included)
    pub z: usize,
}

impl CellIndex {
    /// Shorthand constructor
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        CellIndex { x, y, z }
    }
}

/// XYZ offset of a lattice point relative to the base of a cell. 1 unit is 1 cell's size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerDelta {
    /// X
    pub x: usize,
    /// Y
    pub y: usize,
    /// Z
    pub z: usize,
}

/// Lattice point index (can be one past the last cell on each axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeIndex {
    /// X. From 0 to `resolution[0]` (included)
    pub x: usize,
    /// Y. From 0 to `resolution[1]` (included)
    pub y: usize,
    /// Z. From 0 to `resolution[2]` (included)
    pub z: usize,
}

impl Add<&CornerDelta> for &CellIndex {
    type Output = LatticeIndex;

    fn add(self, rhs: &CornerDelta) -> Self::Output {
        LatticeIndex {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Offsets of the 8 corners of a cell, by corner number
#[rustfmt::skip]
pub const CELL_CORNERS: [CornerDelta; 8] = [
    CornerDelta { x: 0, y: 0, z: 0 }, // Corner 0 is the cell "origin" [with the lowest x, y, and z]
    CornerDelta { x: 1, y: 0, z: 0 }, // Corner 1 == 1 toward X
    CornerDelta { x: 0, y: 1, z: 0 }, // Corner 2 == 1 toward Y
    CornerDelta { x: 1, y: 1, z: 0 },
    CornerDelta { x: 0, y: 0, z: 1 }, // Corner 4 == 1 toward Z
    CornerDelta { x: 1, y: 0, z: 1 },
    CornerDelta { x: 0, y: 1, z: 1 },
    CornerDelta { x: 1, y: 1, z: 1 },
];

/// Corner number (index in [CELL_CORNERS]) for a given offset
pub const fn corner_number(dx: usize, dy: usize, dz: usize) -> usize {
    dx | (dy << 1) | (dz << 2)
}

/**
One sampled cell: where its 8 corners are, and the field value at each of them, in [CELL_CORNERS] order
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell<F: Density> {
    /// Which cell
    pub index: CellIndex,
    /// Side of the cell
    pub size: F,
    /// World positions of the corners
    pub corners: [Position<F>; 8],
    /// Field values at the corners
    pub values: [F; 8],
}

impl<F: Density> GridCell<F> {
    /// Build a cell from already-known corner values
    pub fn from_values(bounds: &GridBounds<F>, index: CellIndex, values: [F; 8]) -> Self {
        let mut corners = [Position::default(); 8];
        for (corner, delta) in corners.iter_mut().zip(CELL_CORNERS.iter()) {
            let lattice = &index + delta;
            *corner = bounds.lattice_point(lattice.x, lattice.y, lattice.z);
        }
        GridCell {
            index,
            size: bounds.cell_size,
            corners,
            values,
        }
    }

    /// Bit `i` is set when corner `i` is inside
    pub fn case_number(&self, threshold: F) -> usize {
        let mut case: usize = 0;
        for (i, value) in self.values.iter().enumerate() {
            if value.inside(&threshold) {
                case |= 1 << i;
            }
        }
        case
    }

    /// Position and value of one corner
    pub fn grid_point(&self, corner: usize) -> GridPoint<F> {
        GridPoint {
            position: self.corners[corner],
            value: self.values[corner],
        }
    }
}

/**
Evaluate the field at the 8 corners of the cell at `index`.
Corner `i` is at `corner + cell_size * (index + CELL_CORNERS[i])`
*/
pub fn sample_cell<F, FIELD>(
    bounds: &GridBounds<F>,
    index: CellIndex,
    field: &FIELD,
) -> Result<GridCell<F>>
where
    F: Density,
    FIELD: ScalarField<F> + ?Sized,
{
    let mut values = [F::ZERO; 8];
    for (value, delta) in values.iter_mut().zip(CELL_CORNERS.iter()) {
        let lattice = &index + delta;
        *value = field.value_at(&bounds.lattice_point(lattice.x, lattice.y, lattice.z))?;
    }
    Ok(GridCell::from_values(bounds, index, values))
}
