use std::sync::atomic::AtomicBool;

use metaball_mesh::prelude::*;

fn main() -> Result<(), MeshError> {
    // RUST_LOG=debug to see the rebuild steps
    env_logger::init();

    let mut blobs = vec![
        Metaball::new(Position::new(-0.6f32, 0.0, 0.0), 1.0),
        Metaball::new(Position::new(0.6f32, 0.1, 0.0), 1.0),
        Metaball::new(Position::new(0.0f32, 0.9, 0.2), 0.5),
    ];

    for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra].iter() {
        let config = MeshConfig::new(0.05, 1.0)
            .with_mode(*mode)
            .with_extent_rule(ExtentRule::IsoRadius);
        let mesh = rebuild_mesh(&blobs, &config)?;
        println!(
            "{:?}: {} vertices, {} triangles, volume {:.3}",
            mode,
            mesh.num_vertices(),
            mesh.num_tris(),
            mesh.enclosed_volume()
        );
    }

    let mut assembler = MeshAssembler::new(MeshConfig::new(0.1, 1.0));
    for step in 0..5 {
        blobs[0].position.x = -0.6 - 0.1 * step as f32;
        assembler.mark_sources_changed();
        assembler.refresh(&blobs)?;
        println!("step {}: {} triangles", step, assembler.mesh().num_tris());
    }

    let cancel = AtomicBool::new(true);
    match rebuild_mesh_cancellable(&blobs, assembler.config(), &cancel) {
        Err(e) => println!("{}", e),
        Ok(_) => println!("not cancelled?"),
    }
    Ok(())
}
