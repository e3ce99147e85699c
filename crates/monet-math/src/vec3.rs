//! 3D vector type for color triplets.
//!
//! [`Vec3`] holds linear RGB, XYZ or CAM16 cone responses in `f64`.
//!
//! # Usage
//!
//! ```rust
//! use monet_math::Vec3;
//!
//! let rgb = Vec3::new(100.0, 50.0, 25.0);
//! let y = rgb.dot(Vec3::new(0.2126, 0.7152, 0.0722));
//! assert!(y > 0.0);
//! ```

use std::ops::Index;

/// A 3D vector for color triplets (RGB, XYZ, cone responses).
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Component-wise product.
    #[inline]
    pub fn mul_elem(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Component-wise quotient.
    #[inline]
    pub fn div_elem(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Linear interpolation toward `other`.
    ///
    /// `t` outside [0, 1] extrapolates along the segment.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Smallest component.
    #[inline]
    pub fn min_element(self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Largest component.
    #[inline]
    pub fn max_element(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_dot() {
        let rgb = Vec3::new(100.0, 100.0, 100.0);
        let y = rgb.dot(Vec3::new(0.2126, 0.7152, 0.0722));
        assert_relative_eq!(y, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vec3_lerp() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 20.0, 30.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 10.0, 15.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_vec3_elementwise() {
        let v = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(v.mul_elem(Vec3::splat(0.5)), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(v.div_elem(Vec3::splat(2.0)), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(v.map(f64::sqrt).x, 2.0_f64.sqrt());
        assert_eq!(v.min_element(), 2.0);
        assert_eq!(v.max_element(), 8.0);
    }

    #[test]
    fn test_vec3_index() {
        let v = Vec3::new(1.0, 5.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 5.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(0.25, 0.5, 0.75);
        assert_eq!(Vec3::from_glam(v.to_glam()), v);
    }
}
