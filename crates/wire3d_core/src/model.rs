//! Wireframe model: points and the edges connecting them
//!
//! A [`WireModel`] owns an ordered point collection and an edge table.
//! Points are mutated in place by [`WireModel::transform`]; the edge
//! table is fixed after construction.

use serde::{Serialize, Deserialize};
use wire3d_math::{mat4, Mat4, Vec3};

/// An edge between two points of a [`WireModel`]
///
/// Edges are index pairs into the owning model's point collection. They
/// carry no geometry of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Index of the first endpoint
    pub a: usize,
    /// Index of the second endpoint
    pub b: usize,
}

impl Edge {
    /// Create a new edge between two point indices
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Get the endpoints as a sorted pair (canonical form)
    ///
    /// Useful for deduplication and comparison.
    pub fn canonical(&self) -> (usize, usize) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// Whether both endpoints name the same point
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// A 3D wireframe model
///
/// The point collection is ordered and mutable in place under
/// [`transform`](WireModel::transform); the edge collection is immutable
/// after construction. Both are supplied by the caller - the model bakes
/// in no data of its own.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WireModel {
    points: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl WireModel {
    /// Create a model from caller-supplied points and edges
    pub fn new(points: Vec<Vec3>, edges: Vec<Edge>) -> Self {
        Self { points, edges }
    }

    /// Get the current points as a slice
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Get the edges as a slice
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get the number of points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get the number of edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Apply a homogeneous transform to every point, in place
    ///
    /// Points are transformed in index order. Returns the matrix that was
    /// applied so the caller can log it or compose it with later
    /// transforms via [`mat4::mul`].
    pub fn transform(&mut self, matrix: Mat4) -> Mat4 {
        for p in &mut self.points {
            *p = mat4::transform_point(matrix, *p);
        }
        matrix
    }
}
