mod matrix;
mod vector;

pub use matrix::{
    format_matrix, identity, multiply, perspective, rotate_x, rotate_y, rotate_z, transform,
    translation, Matrix4, IDENTITY,
};
pub use vector::{
    add, cross, dot, length, normalize, scale, sub, Vector3, Vector4, WORLD_UP, ZERO,
};
