/*!
Meshing of metaball fields.

A set of blobs (a center and a squared radius each) defines a scalar field: the sum of
`radius_param / squared_distance` over all blobs. This crate samples that field on a regular grid
of cubic cells around the blobs, and extracts the surface where the field crosses a threshold,
with either marching cubes or marching tetrahedra.

```
use metaball_mesh::prelude::*;

let blobs = [
    Metaball::new(Position::new(-0.75f32, 0.0, 0.0), 1.0),
    Metaball::new(Position::new(0.75f32, 0.0, 0.0), 1.0),
];
let config = MeshConfig::new(0.1, 1.0).with_mode(MarchingMode::Tetrahedra);
let mesh = rebuild_mesh(&blobs, &config).unwrap();
println!("{} vertices, {} triangles", mesh.num_vertices(), mesh.num_tris());
```

Blob types of your own can be used by implementing [source::InfluenceSource].
Any other field can be meshed with [extraction::extract_from_field] or [extraction::extract_from_fn],
and output to your own structures by implementing [mesh_builder::MeshBuilder].

The `parallel` feature spreads slabs of cells over the rayon thread pool.
The default `serde` feature derives serialization for the configuration, blobs and meshes.
*/

#![warn(missing_docs)]

pub mod assembler;
pub mod bounds;
pub mod changes;
pub mod config;
pub mod density;
pub mod error;
pub mod extraction;
pub mod generic_mesh;
pub mod grid;
pub mod implementation;
pub mod marching;
pub mod mesh_builder;
pub mod prelude;
pub mod source;
pub mod traits;

#[cfg(test)]
mod unit_tests;
