/*!
    Scalar fields, and the metaball field evaluator
*/

use crate::config::DegeneratePolicy;
use crate::error::{MeshError, Result};
use crate::mesh_builder::Position;
use crate::source::InfluenceSource;
use crate::traits::Density;

/**
A source of "world" field values (gives a value for any world x,y,z coordinates)
*/
pub trait ScalarField<F: Density> {
    /**
    Obtain the field value at the given point in space
    */
    fn value_at(&self, point: &Position<F>) -> Result<F>;
}

/**
ScalarField implementation for references
*/
impl<F, S> ScalarField<F> for &S
where
    F: Density,
    S: ScalarField<F> + ?Sized,
{
    fn value_at(&self, point: &Position<F>) -> Result<F> {
        (**self).value_at(point)
    }
}

/**
Wrapper for using closures as [ScalarField]
We need the newtype wrapping because we implement ScalarField for &ScalarField too, and that would conflict without the wrapping
*/
pub struct ScalarFieldForFn<FUN>(pub FUN);

/**
ScalarField implementation for closures
 */
impl<F, FUN> ScalarField<F> for ScalarFieldForFn<FUN>
where
    F: Density,
    FUN: Fn(F, F, F) -> F,
{
    fn value_at(&self, point: &Position<F>) -> Result<F> {
        Ok(self.0(point.x, point.y, point.z))
    }
}

/**
The field made by a set of blobs: at any point, the sum of every blob contribution clamped to >= 0.

```
# use metaball_mesh::prelude::*;
let blobs = [
    Metaball::new(Position::new(-1.0, 0.0, 0.0), 1.0),
    Metaball::new(Position::new(1.0, 0.0, 0.0), 1.0),
];
let field = BlobField::new(&blobs, DegeneratePolicy::Saturate);
assert_eq!(field.value_at(&Position::new(0.0, 0.0, 0.0)).unwrap(), 2.0);
```
*/
pub struct BlobField<'s, S> {
    sources: &'s [S],
    policy: DegeneratePolicy,
}

impl<'s, S> BlobField<'s, S> {
    /// Field over the current state of `sources`
    pub fn new(sources: &'s [S], policy: DegeneratePolicy) -> Self {
        BlobField { sources, policy }
    }
}

impl<'s, F, S> ScalarField<F> for BlobField<'s, S>
where
    F: Density,
    S: InfluenceSource<F>,
{
    fn value_at(&self, point: &Position<F>) -> Result<F> {
        let mut total = F::ZERO;
        for source in self.sources {
            if source.squared_distance(point) == F::ZERO {
                match self.policy {
                    DegeneratePolicy::Saturate => {
                        log::trace!(
                            "sample at ({}, {}, {}) is on a blob center, saturating",
                            point.x.report(),
                            point.y.report(),
                            point.z.report()
                        );
                        return Ok(F::SATURATED);
                    }
                    DegeneratePolicy::Reject => {
                        return Err(MeshError::DegenerateSample {
                            point: [point.x.report(), point.y.report(), point.z.report()],
                        });
                    }
                }
            }
            let contribution = source.contribution(point);
            // Also skips NaN
            if contribution > F::ZERO {
                total = total.saturating_add(contribution);
            }
        }
        Ok(total)
    }
}
