/*!
Rebuild configuration
*/

use crate::error::{MeshError, Result};
use crate::traits::Density;

/**
Which cell triangulation to use
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarchingMode {
    /// One 256-case lookup per cube
    Cubes,
    /// 6 tetrahedra per cube, one 16-case lookup each. More, smaller triangles
    Tetrahedra,
}

impl Default for MarchingMode {
    fn default() -> Self {
        MarchingMode::Cubes
    }
}

/**
What to do when a sample point is exactly on a blob center (zero squared distance)
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegeneratePolicy {
    /// Use [Density::SATURATED] as the sample value: the point is maximally inside
    Saturate,
    /// Fail the rebuild with [MeshError::DegenerateSample]
    Reject,
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        DegeneratePolicy::Saturate
    }
}

/**
How far around its center a blob is considered for the sampling box
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtentRule {
    /// The radius parameter itself, used as a linear half-extent. Coarse: it can clip the surface
    RadiusParam,
    /// `sqrt(n * radius_param / threshold)` for n blobs. Always contains the whole inside region.
    /// Needs a positive threshold
    IsoRadius,
}

impl Default for ExtentRule {
    fn default() -> Self {
        ExtentRule::RadiusParam
    }
}

/// Default limit on the number of cells of a grid (512 per axis on a cube)
pub const DEFAULT_MAX_CELLS: usize = 1 << 27;

/**
Everything a rebuild needs besides the blobs themselves
```
# use metaball_mesh::config::*;
let config = MeshConfig::new(0.25, 1.0)
    .with_mode(MarchingMode::Tetrahedra)
    .with_max_cells(1_000_000);
assert!(config.validate().is_ok());
assert!(MeshConfig::new(0.0, 1.0).validate().is_err());
```
*/
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshConfig<F: Density> {
    /// Side of one grid cell. Must be > 0
    pub cell_size: F,
    /// Field value defining the iso-surface
    pub threshold: F,
    /// Triangulation
    pub mode: MarchingMode,
    /// Zero-distance sample handling
    pub degenerate_policy: DegeneratePolicy,
    /// Sampling box computation
    pub extent_rule: ExtentRule,
    /// Refuse grids with more cells than this. None for no limit
    pub max_cells: Option<usize>,
}

impl<F: Density> MeshConfig<F> {
    /// Cubes, saturation at blob centers, radius parameter extents, at most [DEFAULT_MAX_CELLS] cells
    pub fn new(cell_size: F, threshold: F) -> Self {
        MeshConfig {
            cell_size,
            threshold,
            mode: MarchingMode::default(),
            degenerate_policy: DegeneratePolicy::default(),
            extent_rule: ExtentRule::default(),
            max_cells: Some(DEFAULT_MAX_CELLS),
        }
    }

    /// Same config with another triangulation
    pub fn with_mode(mut self, mode: MarchingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Same config with another zero-distance policy
    pub fn with_degenerate_policy(mut self, degenerate_policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = degenerate_policy;
        self
    }

    /// Same config with another extent rule
    pub fn with_extent_rule(mut self, extent_rule: ExtentRule) -> Self {
        self.extent_rule = extent_rule;
        self
    }

    /// Same config with a cell count limit
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    /// Same config without any cell count limit
    pub fn without_cell_limit(mut self) -> Self {
        self.max_cells = None;
        self
    }

    /// Check the values that do not depend on the blobs
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= F::ZERO {
            return Err(MeshError::InvalidConfiguration(format!(
                "cell size must be finite and > 0, got {}",
                self.cell_size.report()
            )));
        }
        if !self.threshold.is_finite() {
            return Err(MeshError::InvalidConfiguration(format!(
                "threshold must be finite, got {}",
                self.threshold.report()
            )));
        }
        if self.extent_rule == ExtentRule::IsoRadius && self.threshold <= F::ZERO {
            return Err(MeshError::InvalidConfiguration(format!(
                "iso-radius extents need a threshold > 0, got {}",
                self.threshold.report()
            )));
        }
        Ok(())
    }
}
