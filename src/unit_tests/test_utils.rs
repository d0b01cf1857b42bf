use crate::bounds::GridBounds;
use crate::density::ScalarField;
use crate::error::Result;
use crate::extraction::extract_from_field;
use crate::generic_mesh::{GenericMeshBuilder, Mesh, Triangle, Vertex};
use crate::marching::Triangulator;
use crate::mesh_builder::Position;
use crate::source::Metaball;
use crate::traits::Density;
use hamcrest::core::*;
use ndarray::Array3;
use rand::prelude::*;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub struct TriMatcher {
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
    x3: f32,
    y3: f32,
    z3: f32,
}

impl Display for TriMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Triangle like:")?;
        writeln!(f, "    + Pos [{:?}, {:?}, {:?}]", self.x1, self.y1, self.z1)?;
        writeln!(f, "    + Pos [{:?}, {:?}, {:?}]", self.x2, self.y2, self.z2)?;
        writeln!(f, "    + Pos [{:?}, {:?}, {:?}]", self.x3, self.y3, self.z3)?;
        Ok(())
    }
}

// Same vertices in the same circular order: winding matters, the starting vertex does not
impl Matcher<Triangle<f32>> for TriMatcher {
    fn matches(&self, actual: Triangle<f32>) -> MatchResult {
        #[rustfmt::skip]
        let base_tri = make_tri(
            self.x1, self.y1, self.z1, self.x2, self.y2, self.z2, self.x3, self.y3, self.z3,
        );
        let rotated_1 = rotate(base_tri);
        let rotated_2 = rotate(rotated_1);
        let same = same_pos(actual, base_tri)
            || same_pos(actual, rotated_1)
            || same_pos(actual, rotated_2);
        if same {
            success()
        } else {
            Err(format!("{:?} not the same tri as {:?}", &actual, &self))
        }
    }
}

fn rotate(t: Triangle<f32>) -> Triangle<f32> {
    Triangle {
        vertices: [t.vertices[1], t.vertices[2], t.vertices[0]],
    }
}

fn same_pos(t1: Triangle<f32>, t2: Triangle<f32>) -> bool {
    (t1.vertices[0].position == t2.vertices[0].position)
        && (t1.vertices[1].position == t2.vertices[1].position)
        && (t1.vertices[2].position == t2.vertices[2].position)
}

#[allow(clippy::too_many_arguments)]
pub fn tri_matcher(
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
    x3: f32,
    y3: f32,
    z3: f32,
) -> TriMatcher {
    TriMatcher {
        x1,
        y1,
        z1,
        x2,
        y2,
        z2,
        x3,
        y3,
        z3,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn make_tri(
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
    x3: f32,
    y3: f32,
    z3: f32,
) -> Triangle<f32> {
    Triangle {
        vertices: [
            Vertex {
                position: [x1, y1, z1],
            },
            Vertex {
                position: [x2, y2, z2],
            },
            Vertex {
                position: [x3, y3, z3],
            },
        ],
    }
}

#[derive(Debug)]
pub struct TrianglesMatcher {
    pub items: Vec<TriMatcher>,
}

impl Display for TrianglesMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Triangles: ")?;
        for item in self.items.iter() {
            writeln!(f, " - {}", item)?;
        }
        Ok(())
    }
}

impl Matcher<Vec<Triangle<f32>>> for TrianglesMatcher {
    fn matches(&self, actual: Vec<Triangle<f32>>) -> MatchResult {
        let mut rem = actual.clone();

        for item in self.items.iter() {
            match rem.iter().position(|a| item.matches(*a) == Ok(())) {
                Some(idx) => {
                    rem.remove(idx);
                }
                None => {
                    let formatted_actual = format_list(actual);
                    return Err(format!("was:\n{}", &formatted_actual));
                }
            }
        }

        if !rem.is_empty() {
            let formatted_remaining = format_list(rem);
            return Err(format!("also had {}\n", formatted_remaining));
        }

        success()
    }
}

fn format_list<T: Display>(list: Vec<T>) -> String {
    let mut res = String::from("");
    for item in list.iter() {
        res += " - ";
        res += &format!("{}", item);
    }
    res
}

macro_rules! tris {
    () => (
        $crate::unit_tests::test_utils::TrianglesMatcher {items: vec!()}
    );
    ($($x:expr),*) => (
        $crate::unit_tests::test_utils::TrianglesMatcher {items: vec!($($x),*)}
    );
}

/**
Field values stored for each lattice point of a grid of `size` cells per axis, with 1 unit cells starting at `origin`.
Sampling anywhere else than on a lattice point is a test bug
*/
pub struct DensityArray<F: Density> {
    data: Array3<F>,
    pub bounds: GridBounds<F>,
}

impl<F: Density> DensityArray<F> {
    pub fn new(size: usize) -> Self {
        Self::at(Position::default(), size)
    }

    pub fn at(origin: Position<F>, size: usize) -> Self {
        DensityArray {
            data: Array3::<F>::default((size + 1, size + 1, size + 1)),
            bounds: GridBounds::from(origin, [size, size, size], F::one()),
        }
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: F) {
        self.data[[x, y, z]] = value;
    }

    fn lattice_index(&self, coordinate: F, origin: F) -> usize {
        let index = ((coordinate - origin) / self.bounds.cell_size).round();
        index.to_usize().expect("sampled outside of the lattice")
    }
}

impl<F: Density> ScalarField<F> for DensityArray<F> {
    fn value_at(&self, point: &Position<F>) -> Result<F> {
        let corner = self.bounds.corner;
        Ok(self.data[[
            self.lattice_index(point.x, corner.x),
            self.lattice_index(point.y, corner.y),
            self.lattice_index(point.z, corner.z),
        ]])
    }
}

pub fn extract_from_grid<F, T>(field: &DensityArray<F>, threshold: F, triangulator: T) -> Mesh<F>
where
    F: Density,
    T: Triangulator<F>,
{
    let mut builder = GenericMeshBuilder::new();
    extract_from_field(field, &field.bounds, threshold, triangulator, &mut builder)
        .expect("array fields never fail");
    builder.build()
}

/// Blobs with centers in [-1, 1]^3 and radius parameters in [0.2, 1]
pub fn random_blobs(rng: &mut StdRng, count: usize) -> Vec<Metaball<f64>> {
    (0..count)
        .map(|_| {
            let position = Position::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            Metaball::new(position, rng.gen_range(0.2..1.0))
        })
        .collect()
}

/// Share of the (non degenerate) triangles whose normal points away from `center`
pub fn outward_ratio(mesh: &Mesh<f64>, center: [f64; 3]) -> f64 {
    let mut total = 0usize;
    let mut outward = 0usize;
    for tri in mesh.tris() {
        if tri.area() < 1e-12 {
            continue;
        }
        let n = tri.normal();
        let c = tri.centroid();
        let radial = [c[0] - center[0], c[1] - center[1], c[2] - center[2]];
        total += 1;
        if n[0] * radial[0] + n[1] * radial[1] + n[2] * radial[2] > 0.0 {
            outward += 1;
        }
    }
    outward as f64 / total.max(1) as f64
}
