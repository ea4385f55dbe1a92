//! Axis-aligned orthographic projections
//!
//! Flattens a 3D point set onto one of the three coordinate planes by
//! dropping a single axis - no perspective, no camera. The edge walk
//! treats an out-of-bounds point index as a recoverable per-edge failure:
//! the edge is skipped with a warning and the sweep continues.

use serde::{Serialize, Deserialize};
use wire3d_math::Vec3;

use crate::Edge;

/// One of the three axis-aligned projection planes
///
/// Each variant names the plane that survives the projection; the third
/// axis is dropped. A closed enum: there is no way to request an invalid
/// axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionPlane {
    /// Project onto the YZ plane (drop X)
    Yz,
    /// Project onto the XZ plane (drop Y)
    Xz,
    /// Project onto the XY plane (drop Z)
    Xy,
}

impl ProjectionPlane {
    /// All three planes in static multi-view order
    pub const ALL: [ProjectionPlane; 3] =
        [ProjectionPlane::Xy, ProjectionPlane::Xz, ProjectionPlane::Yz];

    /// Flatten a point into this plane by zeroing the dropped axis
    ///
    /// The result stays 3D; only the presentation is planar.
    #[inline]
    pub fn flatten(self, p: Vec3) -> Vec3 {
        match self {
            ProjectionPlane::Yz => Vec3::new(0.0, p.y, p.z),
            ProjectionPlane::Xz => Vec3::new(p.x, 0.0, p.z),
            ProjectionPlane::Xy => Vec3::new(p.x, p.y, 0.0),
        }
    }

    /// Project a point to the 2D coordinates of this plane
    ///
    /// The surviving axes keep their order: Yz -> (y, z), Xz -> (x, z),
    /// Xy -> (x, y).
    #[inline]
    pub fn project(self, p: Vec3) -> [f32; 2] {
        match self {
            ProjectionPlane::Yz => [p.y, p.z],
            ProjectionPlane::Xz => [p.x, p.z],
            ProjectionPlane::Xy => [p.x, p.y],
        }
    }

    /// Labels of the two surviving axes, horizontal then vertical
    pub fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            ProjectionPlane::Yz => ("Y", "Z"),
            ProjectionPlane::Xz => ("X", "Z"),
            ProjectionPlane::Xy => ("X", "Y"),
        }
    }
}

impl std::fmt::Display for ProjectionPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionPlane::Yz => write!(f, "Oyz"),
            ProjectionPlane::Xz => write!(f, "Oxz"),
            ProjectionPlane::Xy => write!(f, "Oxy"),
        }
    }
}

/// A 2D line segment produced by projecting an edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub start: [f32; 2],
    pub end: [f32; 2],
}

impl Segment2 {
    #[inline]
    pub fn new(start: [f32; 2], end: [f32; 2]) -> Self {
        Self { start, end }
    }
}

/// Lazily project edges onto a plane
///
/// Yields one [`Segment2`] per edge whose endpoints both resolve. Edges
/// with an out-of-bounds index are silently skipped here; use
/// [`PlaneProjection::from_points`] when the skipped edges need to be
/// reported. The iterator borrows its inputs, so it can be restarted by
/// calling this function again.
pub fn edge_segments<'a>(
    points: &'a [Vec3],
    edges: &'a [Edge],
    plane: ProjectionPlane,
) -> impl Iterator<Item = Segment2> + 'a {
    edges.iter().filter_map(move |edge| {
        let start = points.get(edge.a)?;
        let end = points.get(edge.b)?;
        Some(Segment2::new(plane.project(*start), plane.project(*end)))
    })
}

/// A point set and its edges flattened onto one plane
///
/// The eager counterpart of [`edge_segments`]: holds the projected point
/// sequence (for vertex markers), the segment list, and every edge that
/// had to be skipped. Each skipped edge is reported exactly once through
/// `log::warn!` and appears exactly once in `skipped`.
#[derive(Clone, Debug)]
pub struct PlaneProjection {
    /// The plane this view was projected onto
    pub plane: ProjectionPlane,
    /// All points projected to plane coordinates
    pub points: Vec<[f32; 2]>,
    /// One segment per resolvable edge, in edge order
    pub segments: Vec<Segment2>,
    /// Edges whose endpoints fell outside the point collection
    pub skipped: Vec<Edge>,
}

impl PlaneProjection {
    /// Project a point set and edge table onto a plane
    pub fn from_points(points: &[Vec3], edges: &[Edge], plane: ProjectionPlane) -> Self {
        let projected: Vec<[f32; 2]> = points.iter().map(|p| plane.project(*p)).collect();

        let mut segments = Vec::with_capacity(edges.len());
        let mut skipped = Vec::new();

        for &edge in edges {
            match (points.get(edge.a), points.get(edge.b)) {
                (Some(start), Some(end)) => {
                    segments.push(Segment2::new(plane.project(*start), plane.project(*end)));
                }
                _ => {
                    log::warn!(
                        "Skipping edge ({}, {}): index out of bounds for {} points",
                        edge.a,
                        edge.b,
                        points.len()
                    );
                    skipped.push(edge);
                }
            }
        }

        Self { plane, points: projected, segments, skipped }
    }
}

/// Project a model onto all three planes for the static multi-view
pub fn all_views(points: &[Vec3], edges: &[Edge]) -> [PlaneProjection; 3] {
    ProjectionPlane::ALL.map(|plane| PlaneProjection::from_points(points, edges, plane))
}
