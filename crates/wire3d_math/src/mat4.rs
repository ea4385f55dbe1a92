//! 4x4 homogeneous matrix utilities
//!
//! All affine transforms of the viewer (scale, translate, rotate) are
//! expressed as 4x4 matrices acting on points lifted to homogeneous
//! coordinates (x, y, z, 1). Matrices are column-major: `m[col][row]`,
//! with the translation components living in column 3.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a scale matrix with independent factors per axis.
pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = sx;
    m[1][1] = sy;
    m[2][2] = sz;
    m
}

/// Create a translation matrix.
pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = tx;
    m[3][1] = ty;
    m[3][2] = tz;
    m
}

/// Create a right-handed rotation about the X axis.
///
/// `angle` is in radians. Rotates Y toward Z for positive angles.
pub fn rotation_x(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[1][1] = cs;
    m[2][1] = -sn;
    m[1][2] = sn;
    m[2][2] = cs;
    m
}

/// Create a right-handed rotation about the Y axis.
///
/// `angle` is in radians. Rotates Z toward X for positive angles; note
/// the sine placement is swapped relative to [`rotation_x`] and
/// [`rotation_z`] because of the cyclic axis convention.
pub fn rotation_y(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[0][0] = cs;
    m[2][0] = sn;
    m[0][2] = -sn;
    m[2][2] = cs;
    m
}

/// Create a right-handed rotation about the Z axis.
///
/// `angle` is in radians. Rotates X toward Y for positive angles.
pub fn rotation_z(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[0][0] = cs;
    m[1][0] = -sn;
    m[0][1] = sn;
    m[1][1] = cs;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Transform a 3D point by a homogeneous matrix.
///
/// The point is lifted to (x, y, z, 1), multiplied as a column vector,
/// and the first three components are returned. Affine matrices keep the
/// homogeneous coordinate at 1, so no divide is performed.
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}
