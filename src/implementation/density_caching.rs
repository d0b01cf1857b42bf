use std::mem;

use crate::bounds::GridBounds;
use crate::density::ScalarField;
use crate::error::Result;
use crate::grid::{CellIndex, GridCell, CELL_CORNERS};
use crate::traits::Density;

/**
Keeps the field values of 2 consecutive YZ lattice planes (x and x + 1), so that every lattice point
of a slab of cells is evaluated once instead of up to 8 times.
Cells read from here are identical to the ones from `grid::sample_cell`.
*/
pub struct SlabCachingSampler<'a, F: Density, FIELD: ?Sized> {
    field: &'a FIELD,
    bounds: &'a GridBounds<F>,
    loaded_slab: Option<usize>,
    low_plane: Vec<F>,
    high_plane: Vec<F>,
}

impl<'a, F, FIELD> SlabCachingSampler<'a, F, FIELD>
where
    F: Density,
    FIELD: ScalarField<F> + ?Sized,
{
    pub fn new(field: &'a FIELD, bounds: &'a GridBounds<F>) -> Self {
        Self {
            field,
            bounds,
            loaded_slab: None,
            low_plane: Vec::new(),
            high_plane: Vec::new(),
        }
    }

    fn plane_index(&self, y: usize, z: usize) -> usize {
        (self.bounds.resolution[2] + 1) * y + z
    }

    fn load_plane(&self, x: usize, plane: &mut Vec<F>) -> Result<()> {
        let ry = self.bounds.resolution[1];
        let rz = self.bounds.resolution[2];
        plane.clear();
        plane.reserve((ry + 1) * (rz + 1));
        for y in 0..=ry {
            for z in 0..=rz {
                plane.push(self.field.value_at(&self.bounds.lattice_point(x, y, z))?);
            }
        }
        Ok(())
    }

    /// Make cells with index `x` readable. Moving to the next slab only evaluates one new plane
    pub fn load_slab(&mut self, x: usize) -> Result<()> {
        if self.loaded_slab == Some(x) {
            return Ok(());
        }
        let mut low_plane = mem::take(&mut self.low_plane);
        let mut high_plane = mem::take(&mut self.high_plane);
        let result = if x > 0 && self.loaded_slab == Some(x - 1) {
            mem::swap(&mut low_plane, &mut high_plane);
            self.load_plane(x + 1, &mut high_plane)
        } else {
            self.load_plane(x, &mut low_plane)
                .and_then(|_| self.load_plane(x + 1, &mut high_plane))
        };
        self.low_plane = low_plane;
        self.high_plane = high_plane;
        self.loaded_slab = match result {
            Ok(()) => Some(x),
            Err(_) => None,
        };
        result
    }

    /// A cell of the loaded slab
    pub fn cell(&self, index: CellIndex) -> GridCell<F> {
        debug_assert!(self.loaded_slab == Some(index.x));
        let mut values = [F::ZERO; 8];
        for (value, delta) in values.iter_mut().zip(CELL_CORNERS.iter()) {
            let plane = if delta.x == 0 {
                &self.low_plane
            } else {
                &self.high_plane
            };
            *value = plane[self.plane_index(index.y + delta.y, index.z + delta.z)];
        }
        GridCell::from_values(self.bounds, index, values)
    }
}
