/*!
The sampling box: the smallest axis-aligned box around every blob, cut into cubic cells
*/

use crate::config::{ExtentRule, MeshConfig};
use crate::error::{MeshError, Result};
use crate::grid::CellIndex;
use crate::mesh_builder::Position;
use crate::source::{validate_sources, InfluenceSource};
use crate::traits::Density;

/**
A grid of `resolution[0] * resolution[1] * resolution[2]` cubic cells of side `cell_size`,
starting at `corner` (its lowest x, y, z point).
```
# use metaball_mesh::bounds::GridBounds;
# use metaball_mesh::grid::CellIndex;
# use metaball_mesh::mesh_builder::Position;
let bounds = GridBounds::from(Position::new(-1.0, -1.0, -1.0), [4, 4, 4], 0.5);
assert_eq!(bounds.cell_count(), 64);
assert_eq!(bounds.cell_origin(&CellIndex::new(1, 2, 3)), Position::new(-0.5, 0.0, 0.5));
```
*/
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds<F: Density> {
    /// Lowest x,y,z point
    pub corner: Position<F>,
    /// How many cells along x, y and z
    pub resolution: [usize; 3],
    /// Side of one cell
    pub cell_size: F,
}

impl<F: Density> GridBounds<F> {
    /// Shortcut constructor
    pub fn from(corner: Position<F>, resolution: [usize; 3], cell_size: F) -> Self {
        GridBounds {
            corner,
            resolution,
            cell_size,
        }
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.resolution[0] * self.resolution[1] * self.resolution[2]
    }

    /// Whether there is no cell at all
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /**
    World position of the grid lattice point `(i, j, k)`: `corner + cell_size * (i, j, k)`.
    Computed the same way for every cell so that shared corners are bit-identical
    */
    pub fn lattice_point(&self, i: usize, j: usize, k: usize) -> Position<F> {
        Position {
            x: self.corner.x + self.cell_size * F::from_index(i),
            y: self.corner.y + self.cell_size * F::from_index(j),
            z: self.corner.z + self.cell_size * F::from_index(k),
        }
    }

    /// Lowest corner of a cell
    pub fn cell_origin(&self, index: &CellIndex) -> Position<F> {
        self.lattice_point(index.x, index.y, index.z)
    }

    /// Highest x,y,z point of the last cell
    pub fn far_corner(&self) -> Position<F> {
        self.lattice_point(self.resolution[0], self.resolution[1], self.resolution[2])
    }

    /// All cell indices, x outer, y middle, z inner
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        let [rx, ry, rz] = self.resolution;
        (0..rx).flat_map(move |x| {
            (0..ry).flat_map(move |y| (0..rz).map(move |z| CellIndex { x, y, z }))
        })
    }
}

/**
Lowest and highest corners of the union of all blob boxes, or None without blobs.
Each blob box extends on each axis by the half-extent given by `rule` (see [ExtentRule]).
*/
pub fn compute_extents<F, S>(
    sources: &[S],
    rule: ExtentRule,
    threshold: F,
) -> Result<Option<(Position<F>, Position<F>)>>
where
    F: Density,
    S: InfluenceSource<F>,
{
    if sources.is_empty() {
        return Ok(None);
    }
    validate_sources(sources)?;
    let count = F::from_index(sources.len());
    let mut extents: Option<(Position<F>, Position<F>)> = None;
    for source in sources {
        let center = source.position();
        let half_extent = match rule {
            ExtentRule::RadiusParam => source.radius_param(),
            ExtentRule::IsoRadius => {
                if threshold <= F::ZERO {
                    return Err(MeshError::InvalidConfiguration(format!(
                        "iso-radius extents need a threshold > 0, got {}",
                        threshold.report()
                    )));
                }
                (count * source.radius_param() / threshold).sqrt()
            }
        };
        let low = Position::new(
            center.x - half_extent,
            center.y - half_extent,
            center.z - half_extent,
        );
        let high = Position::new(
            center.x + half_extent,
            center.y + half_extent,
            center.z + half_extent,
        );
        extents = Some(match extents {
            None => (low, high),
            Some((min, max)) => (
                Position::new(min.x.min(low.x), min.y.min(low.y), min.z.min(low.z)),
                Position::new(max.x.max(high.x), max.y.max(high.y), max.z.max(high.z)),
            ),
        });
    }
    Ok(extents)
}

/**
The sampling grid for `sources`: corner at the lowest extents, and `ceil((max - min) / cell_size)` cells per axis.
None without blobs (checked before anything else).
*/
pub fn compute_bounds<F, S>(sources: &[S], config: &MeshConfig<F>) -> Result<Option<GridBounds<F>>>
where
    F: Density,
    S: InfluenceSource<F>,
{
    if sources.is_empty() {
        return Ok(None);
    }
    config.validate()?;
    let (min, max) = match compute_extents(sources, config.extent_rule, config.threshold)? {
        Some(extents) => extents,
        None => return Ok(None),
    };
    let resolution = [
        axis_resolution(min.x, max.x, config.cell_size, "x")?,
        axis_resolution(min.y, max.y, config.cell_size, "y")?,
        axis_resolution(min.z, max.z, config.cell_size, "z")?,
    ];
    let cell_count = resolution[0]
        .checked_mul(resolution[1])
        .and_then(|xy| xy.checked_mul(resolution[2]))
        .ok_or_else(|| {
            MeshError::InvalidConfiguration(format!(
                "grid of {:?} cells is too large",
                resolution
            ))
        })?;
    if let Some(max_cells) = config.max_cells {
        if cell_count > max_cells {
            return Err(MeshError::InvalidConfiguration(format!(
                "grid of {:?} cells ({} total) exceeds the limit of {}",
                resolution, cell_count, max_cells
            )));
        }
    }
    Ok(Some(GridBounds::from(min, resolution, config.cell_size)))
}

fn axis_resolution<F: Density>(min: F, max: F, cell_size: F, axis: &str) -> Result<usize> {
    ((max - min) / cell_size).ceil().to_usize().ok_or_else(|| {
        MeshError::InvalidConfiguration(format!(
            "cannot fit [{}, {}] along {} with cells of {}",
            min.report(),
            max.report(),
            axis,
            cell_size.report()
        ))
    })
}
