/*!
Main mesh extraction methods
*/
use std::sync::atomic::AtomicBool;

use crate::bounds::{compute_bounds, GridBounds};
use crate::config::MeshConfig;
use crate::density::{BlobField, ScalarField, ScalarFieldForFn};
use crate::error::Result;
use crate::generic_mesh::{GenericMeshBuilder, Mesh};
use crate::implementation::algorithm::Extractor;
use crate::marching::Triangulator;
use crate::mesh_builder::MeshBuilder;
use crate::source::InfluenceSource;
use crate::traits::{Density, MaybeSync};

/**
Rebuilds the iso-surface [Mesh] of a set of blobs, from scratch.

Arguments:
 * `sources`: the blobs, read in their current state
 * `config`: cell size, threshold, triangulation and policies

No blob gives an empty mesh, whatever the configuration.
On error, nothing is returned but the error: there is no partial mesh.
```
# use metaball_mesh::prelude::*;
let blobs = [Metaball::new(Position::new(0.0f32, 0.0, 0.0), 2.0)];
let mesh = rebuild_mesh(&blobs, &MeshConfig::new(0.25, 2.0)).unwrap();
assert!(mesh.num_tris() > 0);
```
*/
pub fn rebuild_mesh<F, S>(sources: &[S], config: &MeshConfig<F>) -> Result<Mesh<F>>
where
    F: Density,
    S: InfluenceSource<F> + MaybeSync,
{
    rebuild(sources, config, None)
}

/**
Same as [rebuild_mesh], but gives up with [crate::error::MeshError::Cancelled]
soon after `cancel` gets set (it is checked between rows of cells)
*/
pub fn rebuild_mesh_cancellable<F, S>(
    sources: &[S],
    config: &MeshConfig<F>,
    cancel: &AtomicBool,
) -> Result<Mesh<F>>
where
    F: Density,
    S: InfluenceSource<F> + MaybeSync,
{
    rebuild(sources, config, Some(cancel))
}

fn rebuild<F, S>(
    sources: &[S],
    config: &MeshConfig<F>,
    cancel: Option<&AtomicBool>,
) -> Result<Mesh<F>>
where
    F: Density,
    S: InfluenceSource<F> + MaybeSync,
{
    log::debug!(
        "rebuilding mesh for {} blobs ({:?}, cell size {}, threshold {})",
        sources.len(),
        config.mode,
        config.cell_size.report(),
        config.threshold.report()
    );
    let bounds = match compute_bounds(sources, config)? {
        Some(bounds) => bounds,
        None => {
            log::debug!("no blob, empty mesh");
            return Ok(Mesh::new());
        }
    };
    log::debug!(
        "sampling {:?} cells from {:?} to {:?}",
        bounds.resolution,
        bounds.corner,
        bounds.far_corner()
    );
    let field = BlobField::new(sources, config.degenerate_policy);
    let mut extractor = Extractor::new(&field, &bounds, config.threshold, config.mode);
    if let Some(flag) = cancel {
        extractor = extractor.with_cancel(flag);
    }
    let mesh = run(&extractor)?;
    log::debug!(
        "mesh rebuilt: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_tris()
    );
    Ok(mesh)
}

#[cfg(not(feature = "parallel"))]
fn run<F, FIELD, T>(extractor: &Extractor<F, FIELD, T>) -> Result<Mesh<F>>
where
    F: Density,
    FIELD: ScalarField<F> + ?Sized,
    T: Triangulator<F>,
{
    let mut builder = GenericMeshBuilder::new();
    extractor.extract_into(&mut builder)?;
    Ok(builder.build())
}

#[cfg(feature = "parallel")]
fn run<F, FIELD, T>(extractor: &Extractor<F, FIELD, T>) -> Result<Mesh<F>>
where
    F: Density,
    FIELD: ScalarField<F> + Sync + ?Sized,
    T: Triangulator<F> + Sync,
{
    extractor.extract_parallel()
}

/**
Extracts the iso-surface of any [ScalarField] over `bounds`, into a custom [MeshBuilder]

Arguments:
 * `field`: the field values
 * `bounds`: the world zone to sample, and its cells
 * `threshold`: field value defining the iso-surface
 * `triangulator`: how each cell is turned into triangles (a [crate::config::MarchingMode] works)
 * `builder`: receives vertices and triangles
*/
pub fn extract_from_field<F, FIELD, T, M>(
    field: &FIELD,
    bounds: &GridBounds<F>,
    threshold: F,
    triangulator: T,
    builder: &mut M,
) -> Result<()>
where
    F: Density,
    FIELD: ScalarField<F> + ?Sized,
    T: Triangulator<F>,
    M: MeshBuilder<F>,
{
    Extractor::new(field, bounds, threshold, triangulator).extract_into(builder)
}

/**
Extracts an iso-surface [Mesh] for a closure giving field values at world x, y, z
```
# use metaball_mesh::prelude::*;
let bounds = GridBounds::from(Position::new(-2.0f32, -2.0, -2.0), [8, 8, 8], 0.5);
let sphere = |x: f32, y: f32, z: f32| 1.0 - (x * x + y * y + z * z).sqrt();
let mesh = extract_from_fn(sphere, &bounds, 0.0, MarchingMode::Tetrahedra).unwrap();
assert!(mesh.num_tris() > 0);
```
*/
pub fn extract_from_fn<F, FUN, T>(
    f: FUN,
    bounds: &GridBounds<F>,
    threshold: F,
    triangulator: T,
) -> Result<Mesh<F>>
where
    F: Density,
    FUN: Fn(F, F, F) -> F,
    T: Triangulator<F>,
{
    let field = ScalarFieldForFn(f);
    let mut builder = GenericMeshBuilder::new();
    extract_from_field(&field, bounds, threshold, triangulator, &mut builder)?;
    Ok(builder.build())
}
