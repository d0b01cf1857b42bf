use std::f64::consts::PI;

use crate::bounds::compute_bounds;
use crate::config::*;
use crate::density::*;
use crate::extraction::rebuild_mesh;
use crate::mesh_builder::Position;
use crate::source::*;
use crate::traits::Density;
use crate::unit_tests::test_utils::*;
use hamcrest::prelude::*;
use hamcrest::*;
use rand::prelude::*;

// radius_param 2 and threshold 2: the surface is the unit sphere
fn unit_sphere_blob() -> [Metaball<f64>; 1] {
    [Metaball::new(Position::new(0.0, 0.0, 0.0), 2.0)]
}

#[test]
fn single_blob_vertices_are_near_the_unit_sphere() {
    let blobs = unit_sphere_blob();
    for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra].iter() {
        let config = MeshConfig::new(0.1, 2.0).with_mode(*mode);
        let mesh = rebuild_mesh(&blobs, &config).unwrap();
        assert_that!(mesh.num_tris(), greater_than(100));
        for v in mesh.vertices() {
            let radius = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert_that!(radius, close_to(1.0, config.cell_size));
        }
    }
}

#[test]
fn single_blob_encloses_the_unit_ball() {
    let blobs = unit_sphere_blob();
    let expected = 4.0 / 3.0 * PI;
    for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra].iter() {
        let mesh = rebuild_mesh(&blobs, &MeshConfig::new(0.1, 2.0).with_mode(*mode)).unwrap();
        assert_that!(mesh.enclosed_volume(), close_to(expected, 0.05 * expected));
    }
}

#[test]
fn single_blob_triangles_face_outward() {
    let blobs = unit_sphere_blob();
    for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra].iter() {
        let mesh = rebuild_mesh(&blobs, &MeshConfig::new(0.1, 2.0).with_mode(*mode)).unwrap();
        assert_that!(outward_ratio(&mesh, [0.0, 0.0, 0.0]), greater_than(0.99));
    }
}

#[test]
fn off_center_blob() {
    let center = [3.3f64, -1.2, 0.45];
    let blobs = [Metaball::new(Position::from(center), 2.0)];
    let mesh = rebuild_mesh(&blobs, &MeshConfig::new(0.1, 2.0)).unwrap();
    for v in mesh.vertices() {
        let d = Position::from(v).distance_squared(&Position::from(center)).sqrt();
        assert_that!(d, close_to(1.0, 0.1));
    }
    assert_that!(outward_ratio(&mesh, center), greater_than(0.99));
}

#[test]
fn rebuild_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let blobs = random_blobs(&mut rng, 4);
        for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra].iter() {
            let config = MeshConfig::new(0.15, 1.0).with_mode(*mode);
            let first = rebuild_mesh(&blobs, &config).unwrap();
            let second = rebuild_mesh(&blobs, &config).unwrap();
            assert_that!(first, equal_to(second));
        }
    }
}

#[test]
fn every_index_is_valid() {
    let mut rng = StdRng::seed_from_u64(42);
    for count in 1..6 {
        let blobs = random_blobs(&mut rng, count);
        for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra].iter() {
            let config = MeshConfig::new(0.2, 1.5).with_mode(*mode);
            let mesh = rebuild_mesh(&blobs, &config).unwrap();
            assert!(mesh.has_valid_indices());
            assert_that!(mesh.positions.len(), equal_to(3 * mesh.num_vertices()));
            assert_that!(mesh.triangle_indices.len(), equal_to(3 * mesh.num_tris()));
        }
    }
}

#[test]
fn halving_the_cell_size() {
    let blobs = unit_sphere_blob();
    let coarse_config = MeshConfig::new(0.2, 2.0);
    let fine_config = MeshConfig::new(0.1, 2.0);
    let coarse_bounds = compute_bounds(&blobs, &coarse_config).unwrap().unwrap();
    let fine_bounds = compute_bounds(&blobs, &fine_config).unwrap().unwrap();
    let ratio = fine_bounds.cell_count() as f64 / coarse_bounds.cell_count() as f64;
    assert_that!(ratio, close_to(8.0, 1.0));
    let coarse = rebuild_mesh(&blobs, &coarse_config).unwrap();
    let fine = rebuild_mesh(&blobs, &fine_config).unwrap();
    assert_that!(fine.num_tris(), greater_than(coarse.num_tris()));
}

fn inside_samples(blobs: &[Metaball<f64>], config: &MeshConfig<f64>) -> usize {
    let bounds = compute_bounds(blobs, config).unwrap().unwrap();
    let field = BlobField::new(blobs, config.degenerate_policy);
    let [rx, ry, rz] = bounds.resolution;
    let mut inside = 0;
    for x in 0..=rx {
        for y in 0..=ry {
            for z in 0..=rz {
                let value = field.value_at(&bounds.lattice_point(x, y, z)).unwrap();
                if value.inside(&config.threshold) {
                    inside += 1;
                }
            }
        }
    }
    inside
}

#[test]
fn raising_the_threshold_shrinks_the_inside() {
    let mut rng = StdRng::seed_from_u64(3);
    let blobs = random_blobs(&mut rng, 3);
    let mut previous = usize::MAX;
    for step in 1..20 {
        let config = MeshConfig::new(0.2, 0.25 * step as f64);
        let inside = inside_samples(&blobs, &config);
        assert!(inside <= previous, "{} inside samples after {}", inside, previous);
        previous = inside;
    }
}

#[test]
fn threshold_above_every_sample_gives_nothing() {
    let mut rng = StdRng::seed_from_u64(11);
    let blobs = random_blobs(&mut rng, 3);
    let config = MeshConfig::new(0.2, 1.0);
    let bounds = compute_bounds(&blobs, &config).unwrap().unwrap();
    let field = BlobField::new(&blobs, config.degenerate_policy);
    let [rx, ry, rz] = bounds.resolution;
    let mut highest = 0.0f64;
    for x in 0..=rx {
        for y in 0..=ry {
            for z in 0..=rz {
                highest = highest.max(field.value_at(&bounds.lattice_point(x, y, z)).unwrap());
            }
        }
    }
    // Equal to the threshold is outside, so the highest sample itself is enough
    for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra].iter() {
        let config = MeshConfig::new(0.2, highest).with_mode(*mode);
        let mesh = rebuild_mesh(&blobs, &config).unwrap();
        assert_that!(mesh.num_tris(), equal_to(0));
    }
}

#[test]
fn cubes_and_tetrahedra_enclose_the_same_volume() {
    let blobs = [
        Metaball::new(Position::new(-0.45, 0.02, 0.01), 1.0),
        Metaball::new(Position::new(0.47, -0.03, 0.02), 1.2),
        Metaball::new(Position::new(0.01, 0.61, -0.04), 0.8),
    ];
    let config = MeshConfig::new(0.08, 1.5).with_extent_rule(ExtentRule::IsoRadius);
    let cubes = rebuild_mesh(&blobs, &config).unwrap();
    let tetrahedra = rebuild_mesh(&blobs, &config.with_mode(MarchingMode::Tetrahedra)).unwrap();
    let cubes_volume = cubes.enclosed_volume();
    assert_that!(cubes_volume, greater_than(0.0));
    assert_that!(
        tetrahedra.enclosed_volume(),
        close_to(cubes_volume, 0.05 * cubes_volume)
    );
    assert_that!(tetrahedra.num_tris(), greater_than(cubes.num_tris()));
}

// radius_param 0.5 and threshold 0.5: the surface is the unit sphere again
fn small_radius_blob() -> [Metaball<f64>; 1] {
    [Metaball::new(Position::new(0.0, 0.0, 0.0), 0.5)]
}

#[test]
fn radius_param_extents_clip_small_blobs() {
    // Half-extents of 0.5 leave the whole box inside the unit sphere: every sample is inside
    let blobs = small_radius_blob();
    let config = MeshConfig::new(0.1, 0.5);
    let bounds = compute_bounds(&blobs, &config).unwrap().unwrap();
    assert_that!(bounds.far_corner().x, close_to(0.5, 1e-12));
    let mesh = rebuild_mesh(&blobs, &config).unwrap();
    assert_that!(mesh.num_tris(), equal_to(0));
}

#[test]
fn iso_radius_extents_contain_small_blobs() {
    let blobs = small_radius_blob();
    for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra].iter() {
        let config = MeshConfig::new(0.1, 0.5)
            .with_mode(*mode)
            .with_extent_rule(ExtentRule::IsoRadius);
        let mesh = rebuild_mesh(&blobs, &config).unwrap();
        assert_that!(mesh.num_tris(), greater_than(100));
        for v in mesh.vertices() {
            let radius = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert_that!(radius, close_to(1.0, config.cell_size));
        }
        assert_that!(outward_ratio(&mesh, [0.0, 0.0, 0.0]), greater_than(0.99));
    }
}
