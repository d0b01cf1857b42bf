/*!
Influence sources ("blobs"): the points whose falloffs make up the field
*/

use crate::error::{MeshError, Result};
use crate::mesh_builder::Position;
use crate::traits::Density;

/**
Anything that can act as a blob. The state is read every time a sample is taken,
so a host type can implement this over its own live transform data.
*/
pub trait InfluenceSource<F: Density> {
    /// Current center of the blob
    fn position(&self) -> Position<F>;

    /// Squared maximum effective radius. Must be finite and >= 0
    fn radius_param(&self) -> F;

    /// Squared distance between the center and `point`
    fn squared_distance(&self, point: &Position<F>) -> F {
        self.position().distance_squared(point)
    }

    /**
    Raw (unclamped) field contribution at `point`: `radius_param / squared_distance`.
    Not defined when `point` is exactly the center: the field evaluator handles that case before calling this
    */
    fn contribution(&self, point: &Position<F>) -> F {
        self.radius_param() / self.squared_distance(point)
    }
}

/**
InfluenceSource implementation for references
*/
impl<F, S> InfluenceSource<F> for &S
where
    F: Density,
    S: InfluenceSource<F> + ?Sized,
{
    fn position(&self) -> Position<F> {
        (**self).position()
    }

    fn radius_param(&self) -> F {
        (**self).radius_param()
    }
}

/**
A plain blob record
```
# use metaball_mesh::source::*;
# use metaball_mesh::mesh_builder::Position;
let blob = Metaball::new(Position::new(0.0, 0.0, 0.0), 4.0);
assert_eq!(blob.contribution(&Position::new(2.0, 0.0, 0.0)), 1.0);
```
*/
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metaball<F: Density> {
    /// Center
    pub position: Position<F>,
    /// Squared maximum effective radius
    pub radius_param: F,
}

impl<F: Density> Metaball<F> {
    /// Shorthand constructor
    pub fn new(position: Position<F>, radius_param: F) -> Self {
        Metaball {
            position,
            radius_param,
        }
    }
}

impl<F: Density> InfluenceSource<F> for Metaball<F> {
    fn position(&self) -> Position<F> {
        self.position
    }

    fn radius_param(&self) -> F {
        self.radius_param
    }
}

/// Check that every blob has a finite center and a finite, non-negative radius parameter
pub fn validate_sources<F, S>(sources: &[S]) -> Result<()>
where
    F: Density,
    S: InfluenceSource<F>,
{
    for (index, source) in sources.iter().enumerate() {
        let position = source.position();
        if !position.is_finite() {
            return Err(MeshError::InvalidSource {
                index,
                reason: format!(
                    "center ({}, {}, {}) is not finite",
                    position.x.report(),
                    position.y.report(),
                    position.z.report()
                ),
            });
        }
        let radius_param = source.radius_param();
        if !radius_param.is_finite() || radius_param < F::ZERO {
            return Err(MeshError::InvalidSource {
                index,
                reason: format!(
                    "radius parameter {} is not a finite non-negative value",
                    radius_param.report()
                ),
            });
        }
    }
    Ok(())
}
