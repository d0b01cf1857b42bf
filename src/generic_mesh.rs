/*!
A generic (engine independent) implementation of a Mesh, and an associated MeshBuilder
*/

use std::fmt::Debug;
use std::fmt::Display;

use num::Float;

use crate::mesh_builder::GridPoint;
use crate::mesh_builder::MeshBuilder;
use crate::mesh_builder::VertexIndex;
use crate::traits::Density;

/**
Mesh
*/
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh<F>
where
    F: Float,
{
    /// Flat vector of the vertex positions. Each consecutive three floats define x,y,z for one vertex
    pub positions: Vec<F>,
    /**
    Flat vector of the triangle indices. Each consecutive i,j,k define one triangle by 3 indices.
    Indices are referring to the `positions` "triples", so each index is in 0..positions.len() / 3
    */
    pub triangle_indices: Vec<usize>,
}

/// A MeshBuilder that builds Mesh
pub struct GenericMeshBuilder<F>
where
    F: Float,
{
    positions: Vec<F>,
    triangle_indices: Vec<usize>,
    vertices: usize,
}

#[allow(clippy::new_without_default)]
impl<F> GenericMeshBuilder<F>
where
    F: Float,
{
    /// Create a fresh builder
    pub fn new() -> Self {
        Self {
            positions: vec![],
            triangle_indices: vec![],
            vertices: 0,
        }
    }
    /// Output the Mesh
    pub fn build(self) -> Mesh<F> {
        Mesh {
            positions: self.positions,
            triangle_indices: self.triangle_indices,
        }
    }
}

impl<F> Mesh<F>
where
    F: Float,
{
    /// An empty mesh
    pub fn new() -> Self {
        Mesh {
            positions: vec![],
            triangle_indices: vec![],
        }
    }
    /// No vertex and no triangle
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.triangle_indices.is_empty()
    }
    /// Shorthand to get the vertices count
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }
    /// Shorthand to get the triangles count
    pub fn num_tris(&self) -> usize {
        self.triangle_indices.len() / 3
    }
    /// Position of the vertex at `index`
    pub fn vertex(&self, index: usize) -> [F; 3] {
        [
            self.positions[3 * index],
            self.positions[3 * index + 1],
            self.positions[3 * index + 2],
        ]
    }
    /// Vertex positions grouped by 3
    pub fn vertices(&self) -> Vec<[F; 3]> {
        self.positions
            .chunks_exact(3)
            .map(|xyz| [xyz[0], xyz[1], xyz[2]])
            .collect()
    }
    /// Triangle indices grouped by 3
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        self.triangle_indices
            .chunks_exact(3)
            .map(|ijk| [ijk[0], ijk[1], ijk[2]])
            .collect()
    }
    /// Outputs a copy of triangles in a structured format
    pub fn tris(&self) -> Vec<Triangle<F>> {
        self.triangles()
            .iter()
            .map(|[i1, i2, i3]| Triangle {
                vertices: [
                    Vertex {
                        position: self.vertex(*i1),
                    },
                    Vertex {
                        position: self.vertex(*i2),
                    },
                    Vertex {
                        position: self.vertex(*i3),
                    },
                ],
            })
            .collect()
    }
    /// Whether the buffers are well formed: whole triples, and every index refers to an existing vertex
    pub fn has_valid_indices(&self) -> bool {
        let vertices = self.num_vertices();
        self.positions.len() % 3 == 0
            && self.triangle_indices.len() % 3 == 0
            && self.triangle_indices.iter().all(|i| *i < vertices)
    }
    /**
    Volume enclosed by the triangles, from the divergence theorem.
    Only meaningful for a closed surface. Positive when triangles are wound counter-clockwise seen from outside.
    */
    pub fn enclosed_volume(&self) -> F {
        let six = F::from(6.0).unwrap_or_else(F::one);
        let sum = self.tris().iter().fold(F::zero(), |acc, tri| {
            let [a, b, c] = [
                tri.vertices[0].position,
                tri.vertices[1].position,
                tri.vertices[2].position,
            ];
            acc + dot(&a, &cross(&b, &c))
        });
        sum / six
    }
    /// Append another mesh after this one, shifting its indices
    pub fn append(&mut self, other: Mesh<F>) {
        let offset = self.num_vertices();
        self.positions.extend(other.positions);
        self.triangle_indices
            .extend(other.triangle_indices.into_iter().map(|i| i + offset));
    }
}

fn cross<F: Float>(a: &[F; 3], b: &[F; 3]) -> [F; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot<F: Float>(a: &[F; 3], b: &[F; 3]) -> F {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// A triangle, mostly for debugging or test purposes
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Triangle<F>
where
    F: Float,
{
    /// Vertices
    pub vertices: [Vertex<F>; 3],
}

impl<F> Triangle<F>
where
    F: Float,
{
    /// Right-hand (non normalized) normal: its length is twice the area
    pub fn normal(&self) -> [F; 3] {
        let [a, b, c] = [
            self.vertices[0].position,
            self.vertices[1].position,
            self.vertices[2].position,
        ];
        let ab = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let ac = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        cross(&ab, &ac)
    }
    /// Area
    pub fn area(&self) -> F {
        let n = self.normal();
        let half = F::from(0.5).unwrap_or_else(F::one);
        dot(&n, &n).sqrt() * half
    }
    /// Average of the 3 vertices
    pub fn centroid(&self) -> [F; 3] {
        let three = F::from(3.0).unwrap_or_else(F::one);
        let mut c = [F::zero(); 3];
        for v in self.vertices.iter() {
            for (axis, coordinate) in c.iter_mut().enumerate() {
                *coordinate = *coordinate + v.position[axis];
            }
        }
        [c[0] / three, c[1] / three, c[2] / three]
    }
}

/// A vertex, mostly for debugging or test purposes
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Vertex<F>
where
    F: Float,
{
    /// XYZ
    pub position: [F; 3],
}

impl<F> Display for Triangle<F>
where
    F: Float + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Triangle:")?;
        let [v1, v2, v3] = self.vertices;
        writeln!(f, "    + Pos {:?}", v1.position)?;
        writeln!(f, "    + Pos {:?}", v2.position)?;
        writeln!(f, "    + Pos {:?}", v3.position)?;
        Ok(())
    }
}

impl<F: Density> MeshBuilder<F> for GenericMeshBuilder<F> {
    fn add_vertex_between(
        &mut self,
        point_a: GridPoint<F>,
        point_b: GridPoint<F>,
        interp_toward_b: F,
    ) -> VertexIndex {
        let position = point_a
            .position
            .interp_toward(&point_b.position, interp_toward_b);
        self.positions.push(position.x);
        self.positions.push(position.y);
        self.positions.push(position.z);
        let index = self.vertices;
        self.vertices += 1;
        VertexIndex(index)
    }

    fn add_triangle(
        &mut self,
        vertex_1_index: VertexIndex,
        vertex_2_index: VertexIndex,
        vertex_3_index: VertexIndex,
    ) {
        self.triangle_indices.push(vertex_1_index.0);
        self.triangle_indices.push(vertex_2_index.0);
        self.triangle_indices.push(vertex_3_index.0);
    }
}
