//! Builder for the demo letter wireframe
//!
//! A block letter "P" drawn in the XY plane and extruded slightly along
//! Z, so all three projections have something to show.

use wire3d_core::{Edge, WireModel};
use wire3d_math::Vec3;

/// Thickness of the extruded letter along Z
const DEPTH: f32 = 0.1;

/// Build the letter-"P" demo model: 20 vertices, 30 edges
///
/// Vertices 0-9 form the front face (outline then counter hole), 10-19
/// the back face at `z = DEPTH`. Edges trace both faces and connect them
/// front to back.
pub fn letter_p() -> WireModel {
    let front = [
        // Outline, counter-clockwise from the bottom-left corner
        [0.0, 0.0], // 0
        [0.0, 5.0], // 1
        [3.0, 5.0], // 2
        [3.0, 2.0], // 3
        [1.0, 2.0], // 4
        [1.0, 0.0], // 5
        // Inner counter of the bowl
        [1.0, 3.0], // 6
        [1.0, 4.0], // 7
        [2.0, 4.0], // 8
        [2.0, 3.0], // 9
    ];

    let mut points = Vec::with_capacity(front.len() * 2);
    for &[x, y] in &front {
        points.push(Vec3::new(x, y, 0.0));
    }
    for &[x, y] in &front {
        points.push(Vec3::new(x, y, DEPTH));
    }

    let mut edges = Vec::with_capacity(30);
    // Front outline and counter
    edges.extend(ring(&[0, 1, 2, 3, 4, 5]));
    edges.extend(ring(&[6, 7, 8, 9]));
    // Laterals connecting the two faces
    for i in 0..front.len() {
        edges.push(Edge::new(i, i + front.len()));
    }
    // Back outline and counter
    edges.extend(ring(&[10, 11, 12, 13, 14, 15]));
    edges.extend(ring(&[16, 17, 18, 19]));

    WireModel::new(points, edges)
}

/// Connect consecutive indices into a closed loop
fn ring(indices: &[usize]) -> Vec<Edge> {
    (0..indices.len())
        .map(|i| Edge::new(indices[i], indices[(i + 1) % indices.len()]))
        .collect()
}
