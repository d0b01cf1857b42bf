/*!
   Common convenient re-exports
*/

pub use crate::assembler::MeshAssembler;
pub use crate::bounds::GridBounds;
pub use crate::config::{DegeneratePolicy, ExtentRule, MarchingMode, MeshConfig};
pub use crate::density::{BlobField, ScalarField, ScalarFieldForFn};
pub use crate::error::MeshError;
pub use crate::extraction::{
    extract_from_field, extract_from_fn, rebuild_mesh, rebuild_mesh_cancellable,
};
pub use crate::generic_mesh::Mesh;
pub use crate::marching::{MarchingCubes, MarchingTetrahedra, Triangulator};
pub use crate::mesh_builder::Position;
pub use crate::source::{InfluenceSource, Metaball};
pub use crate::traits::MaybeSync;
