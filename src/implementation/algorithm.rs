/*!
This is the main extraction loop.

At its heart it's simply: for each cell of the grid, sample its 8 corners and hand it to the triangulator.

Some details:
 - cells are visited x outer, y middle, z inner, and their triangles are appended in that order
 - corner values are read from a cache of 2 lattice planes, so each lattice point is evaluated once per slab
 - the cancellation flag is polled once per row of cells (one x, y pair)
 - the first field error aborts the whole extraction: callers never see a partial mesh
 - with the `parallel` feature, slabs (one x each) are extracted independently into their own mesh,
   then appended in x order. This gives the same triangles in the same order as the serial loop,
   but vertex buffers are not shared between slabs anyway
*/

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use super::density_caching::SlabCachingSampler;
use crate::bounds::GridBounds;
use crate::density::ScalarField;
use crate::error::{MeshError, Result};
use crate::grid::CellIndex;
use crate::marching::Triangulator;
use crate::mesh_builder::MeshBuilder;
use crate::traits::Density;

#[cfg(feature = "parallel")]
use crate::generic_mesh::{GenericMeshBuilder, Mesh};

pub struct Extractor<'a, F, FIELD, T>
where
    F: Density,
    FIELD: ?Sized,
{
    field: &'a FIELD,
    bounds: &'a GridBounds<F>,
    threshold: F,
    triangulator: T,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, F, FIELD, T> Extractor<'a, F, FIELD, T>
where
    F: Density,
    FIELD: ScalarField<F> + ?Sized,
    T: Triangulator<F>,
{
    pub fn new(field: &'a FIELD, bounds: &'a GridBounds<F>, threshold: F, triangulator: T) -> Self {
        Extractor {
            field,
            bounds,
            threshold,
            triangulator,
            cancel: None,
        }
    }

    /// Abort with [MeshError::Cancelled] once `flag` is set
    pub fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Serial extraction of every cell into `builder`
    pub fn extract_into<M: MeshBuilder<F>>(&self, builder: &mut M) -> Result<()> {
        self.extract_slabs(0..self.bounds.resolution[0], builder)
    }

    fn check_cancelled(&self) -> Result<()> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(MeshError::Cancelled),
            _ => Ok(()),
        }
    }

    fn extract_slabs<M: MeshBuilder<F>>(&self, xs: Range<usize>, builder: &mut M) -> Result<()> {
        let mut sampler = SlabCachingSampler::new(self.field, self.bounds);
        let [_, ry, rz] = self.bounds.resolution;
        for x in xs {
            self.check_cancelled()?;
            sampler.load_slab(x)?;
            for y in 0..ry {
                self.check_cancelled()?;
                for z in 0..rz {
                    let cell = sampler.cell(CellIndex::new(x, y, z));
                    self.triangulator.march(&cell, self.threshold, builder);
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "parallel")]
impl<'a, F, FIELD, T> Extractor<'a, F, FIELD, T>
where
    F: Density,
    FIELD: ScalarField<F> + Sync + ?Sized,
    T: Triangulator<F> + Sync,
{
    /// Extract each slab on the rayon pool, then concatenate them in x order
    pub fn extract_parallel(&self) -> Result<Mesh<F>> {
        use rayon::prelude::*;

        let slabs: Vec<Mesh<F>> = (0..self.bounds.resolution[0])
            .into_par_iter()
            .map(|x| -> Result<Mesh<F>> {
                let mut builder = GenericMeshBuilder::new();
                self.extract_slabs(x..x + 1, &mut builder)?;
                Ok(builder.build())
            })
            .collect::<Result<Vec<_>>>()?;
        let mut mesh = Mesh::new();
        for slab in slabs {
            mesh.append(slab);
        }
        Ok(mesh)
    }
}
