/// Three component vector (x, y, z)
pub type Vector3 = [f32; 3];

/// Four component vector, used as a matrix column or a homogeneous point
pub type Vector4 = [f32; 4];

pub const ZERO: Vector3 = [0.0, 0.0, 0.0];
pub const WORLD_UP: Vector3 = [0.0, 1.0, 0.0];

pub fn dot(a: &Vector3, b: &Vector3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(out: &mut Vector3, a: &Vector3, b: &Vector3) {
    out[0] = a[1] * b[2] - a[2] * b[1];
    out[1] = a[2] * b[0] - a[0] * b[2];
    out[2] = a[0] * b[1] - a[1] * b[0];
}

/// Normalize in place. A vector with squared length of exactly zero is left untouched.
pub fn normalize(v: &mut Vector3) {
    let length_squared = dot(v, v);
    if length_squared == 0.0 {
        return;
    }

    let inv_length = 1.0 / length_squared.sqrt();
    v[0] *= inv_length;
    v[1] *= inv_length;
    v[2] *= inv_length;
}

pub fn scale(out: &mut Vector3, a: &Vector3, s: f32) {
    out[0] = a[0] * s;
    out[1] = a[1] * s;
    out[2] = a[2] * s;
}

pub fn add(out: &mut Vector3, a: &Vector3, b: &Vector3) {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
    out[2] = a[2] + b[2];
}

pub fn sub(out: &mut Vector3, a: &Vector3, b: &Vector3) {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
    out[2] = a[2] - b[2];
}

pub fn length(v: &Vector3) -> f32 {
    dot(v, v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_orthogonal() {
        assert_eq!(dot(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), 0.0);
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }

    #[test]
    fn test_cross_basis() {
        let mut out = ZERO;
        cross(&mut out, &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert_eq!(out, [0.0, 0.0, 1.0]);

        cross(&mut out, &WORLD_UP, &[0.0, 0.0, 1.0]);
        assert_eq!(out, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize_unit_length() {
        let mut v = [3.0, 0.0, 4.0];
        normalize(&mut v);
        assert!((length(&v) - 1.0).abs() < 1e-6);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[2] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = ZERO;
        normalize(&mut v);
        assert_eq!(v, ZERO);
    }

    #[test]
    fn test_normalize_tiny_vector_not_guarded() {
        // Only an exact zero is skipped
        let mut v = [1e-10, 0.0, 0.0];
        normalize(&mut v);
        assert!((v[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_add_sub() {
        let mut out = ZERO;
        scale(&mut out, &[1.0, -2.0, 3.0], 2.0);
        assert_eq!(out, [2.0, -4.0, 6.0]);

        let scaled = out;
        add(&mut out, &scaled, &[1.0, 1.0, 1.0]);
        assert_eq!(out, [3.0, -3.0, 7.0]);

        let summed = out;
        sub(&mut out, &summed, &[3.0, -3.0, 7.0]);
        assert_eq!(out, ZERO);
    }
}
