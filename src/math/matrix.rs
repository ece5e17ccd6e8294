use std::fmt::Write as _;

use super::vector::{Vector3, Vector4};

/// 4x4 matrix indexed as `m[col][row]`.
///
/// This is the column-major layout the GPU expects, so a `Matrix4` can be
/// cast straight into a uniform buffer.
pub type Matrix4 = [[f32; 4]; 4];

pub const IDENTITY: Matrix4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

pub fn identity(out: &mut Matrix4) {
    for (col, column) in out.iter_mut().enumerate() {
        for (row, value) in column.iter_mut().enumerate() {
            *value = if col == row { 1.0 } else { 0.0 };
        }
    }
}

/// Symmetric-frustum perspective projection, left handed with +z into the screen.
///
/// `z_far == z_near` yields non-finite entries; only debug builds check for it.
pub fn perspective(out: &mut Matrix4, fovy: f32, aspect: f32, z_near: f32, z_far: f32) {
    debug_assert!(z_far != z_near, "perspective: z_far must differ from z_near");

    let tan_half_fovy = (fovy / 2.0).tan();

    *out = [[0.0; 4]; 4];
    out[0][0] = 1.0 / (aspect * tan_half_fovy);
    out[1][1] = 1.0 / tan_half_fovy;
    out[2][2] = z_far / (z_far - z_near);
    out[2][3] = 1.0;
    out[3][2] = -(z_far * z_near) / (z_far - z_near);
}

/// `out = a * b`
pub fn multiply(out: &mut Matrix4, a: &Matrix4, b: &Matrix4) {
    for col in 0..4 {
        for row in 0..4 {
            out[col][row] = (0..4).map(|k| a[k][row] * b[col][k]).sum();
        }
    }
}

/// Identity with a translation in the last column
pub fn translation(out: &mut Matrix4, offset: &Vector3) {
    identity(out);
    out[3][0] = offset[0];
    out[3][1] = offset[1];
    out[3][2] = offset[2];
}

/// `out = m * v`
pub fn transform(out: &mut Vector4, m: &Matrix4, v: &Vector4) {
    for (row, value) in out.iter_mut().enumerate() {
        *value = (0..4).map(|col| m[col][row] * v[col]).sum();
    }
}

/// Rotation about the x axis, composed on the left: `m = Rx * m`
pub fn rotate_x(m: &mut Matrix4, angle: f32) {
    let (s, c) = angle.sin_cos();
    let r = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    compose_left(m, &r);
}

/// Rotation about the y axis, composed on the left: `m = Ry * m`
pub fn rotate_y(m: &mut Matrix4, angle: f32) {
    let (s, c) = angle.sin_cos();
    let r = [
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    compose_left(m, &r);
}

/// Rotation about the z axis, composed on the left: `m = Rz * m`
pub fn rotate_z(m: &mut Matrix4, angle: f32) {
    let (s, c) = angle.sin_cos();
    let r = [
        [c, s, 0.0, 0.0],
        [-s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    compose_left(m, &r);
}

fn compose_left(m: &mut Matrix4, r: &Matrix4) {
    let current = *m;
    multiply(m, r, &current);
}

/// One line per column, two decimals per entry
pub fn format_matrix(m: &Matrix4) -> String {
    let mut text = String::with_capacity(4 * 4 * 8);
    for column in m {
        for value in column {
            let _ = write!(text, "{:.2} ", value);
        }
        text.push('\n');
    }
    text
}
