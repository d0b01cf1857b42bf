/*!
A mesh that remembers what it was built from, and rebuilds only when told something changed
*/

use crate::changes::{all_changes, no_change, Change, Changes};
use crate::config::{MarchingMode, MeshConfig};
use crate::error::Result;
use crate::extraction::rebuild_mesh;
use crate::generic_mesh::Mesh;
use crate::source::InfluenceSource;
use crate::traits::{Density, MaybeSync};

/**
Owns a configuration and the last mesh built with it.

The blobs are not owned: the caller passes them to [MeshAssembler::refresh] and calls
[MeshAssembler::mark_sources_changed] whenever one of them moves or changes radius.
```
# use metaball_mesh::prelude::*;
let mut blobs = vec![Metaball::new(Position::new(0.0f32, 0.0, 0.0), 2.0)];
let mut assembler = MeshAssembler::new(MeshConfig::new(0.25, 2.0));
assert!(assembler.refresh(&blobs).unwrap());
assert!(!assembler.refresh(&blobs).unwrap());

blobs[0].position.x = 0.5;
assembler.mark_sources_changed();
assert!(assembler.refresh(&blobs).unwrap());
```
*/
#[derive(Debug, Clone)]
pub struct MeshAssembler<F: Density> {
    config: MeshConfig<F>,
    mesh: Mesh<F>,
    pending: Changes,
}

impl<F: Density> MeshAssembler<F> {
    /// Nothing built yet: every change is pending
    pub fn new(config: MeshConfig<F>) -> Self {
        MeshAssembler {
            config,
            mesh: Mesh::new(),
            pending: all_changes(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &MeshConfig<F> {
        &self.config
    }

    /// Replace the configuration, raising a change for every field that differs
    pub fn set_config(&mut self, config: MeshConfig<F>) {
        let old = self.config;
        if old.cell_size != config.cell_size || old.max_cells != config.max_cells {
            self.pending |= Change::CellSize;
        }
        if old.threshold != config.threshold || old.extent_rule != config.extent_rule {
            self.pending |= Change::Threshold;
        }
        if old.mode != config.mode {
            self.pending |= Change::Mode;
        }
        if old.degenerate_policy != config.degenerate_policy {
            self.pending |= Change::Policy;
        }
        self.config = config;
    }

    /// Shorthand for [MeshAssembler::set_config]
    pub fn set_cell_size(&mut self, cell_size: F) {
        self.set_config(MeshConfig {
            cell_size,
            ..self.config
        });
    }

    /// Shorthand for [MeshAssembler::set_config]
    pub fn set_threshold(&mut self, threshold: F) {
        self.set_config(MeshConfig {
            threshold,
            ..self.config
        });
    }

    /// Shorthand for [MeshAssembler::set_config]
    pub fn set_mode(&mut self, mode: MarchingMode) {
        self.set_config(MeshConfig { mode, ..self.config });
    }

    /// Some blob moved, appeared, disappeared or changed radius
    pub fn mark_sources_changed(&mut self) {
        self.pending |= Change::Sources;
    }

    /// Whether the current mesh may be out of date
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    /// What changed since the last successful build
    pub fn pending_changes(&self) -> Changes {
        self.pending
    }

    /// Last successfully built mesh (empty before the first build)
    pub fn mesh(&self) -> &Mesh<F> {
        &self.mesh
    }

    /// Rebuild if anything changed. Returns whether a rebuild happened
    pub fn refresh<S>(&mut self, sources: &[S]) -> Result<bool>
    where
        S: InfluenceSource<F> + MaybeSync,
    {
        if !self.is_dirty() {
            return Ok(false);
        }
        self.rebuild(sources)?;
        Ok(true)
    }

    /**
    Rebuild unconditionally.
    On failure the previous mesh stays available and the pending changes stay raised
    */
    pub fn rebuild<S>(&mut self, sources: &[S]) -> Result<&Mesh<F>>
    where
        S: InfluenceSource<F> + MaybeSync,
    {
        log::debug!("assembler rebuild, pending {:?}", self.pending);
        match rebuild_mesh(sources, &self.config) {
            Ok(mesh) => {
                self.mesh = mesh;
                self.pending = no_change();
                Ok(&self.mesh)
            }
            Err(error) => {
                log::warn!("mesh rebuild failed, keeping the previous mesh: {}", error);
                Err(error)
            }
        }
    }
}
