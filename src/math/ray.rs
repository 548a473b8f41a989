use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// A half-line `origin + t * direction` with `t >= 0`.
///
/// The direction is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if `direction` is zero-length or not finite.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if !len.is_finite() || len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Creates a ray from `from` through `through`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn through(from: Point3, through: Point3) -> Result<Self> {
        Self::new(from, through - from)
    }

    /// Start point of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Unit direction of the ray.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Intersects the ray with the plane through `plane_origin` with normal
    /// `normal`.
    ///
    /// Returns the ray parameter and the hit point, or `None` when the ray is
    /// parallel to the plane or the plane lies behind the origin.
    #[must_use]
    pub fn intersect_plane(&self, plane_origin: &Point3, normal: &Vector3) -> Option<(f64, Point3)> {
        let denom = normal.dot(&self.direction);
        if denom.abs() < TOLERANCE {
            return None;
        }
        let t = normal.dot(&(plane_origin - self.origin)) / denom;
        if t < 0.0 {
            return None;
        }
        Some((t, self.at(t)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(p(0.0, 0.0, 0.0), v(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(ray.direction().norm(), 1.0);
        assert_relative_eq!(ray.at(5.0), p(0.0, 3.0, 4.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_direction_fails() {
        assert!(Ray::new(p(1.0, 1.0, 1.0), v(0.0, 0.0, 0.0)).is_err());
        assert!(Ray::through(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn plane_hit_in_front() {
        let ray = Ray::new(p(0.0, 0.0, 10.0), v(0.0, 0.0, -1.0)).unwrap();
        let (t, hit) = ray.intersect_plane(&p(0.0, 0.0, 2.0), &v(0.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(t, 8.0);
        assert_relative_eq!(hit, p(0.0, 0.0, 2.0));
    }

    #[test]
    fn plane_behind_or_parallel_misses() {
        let ray = Ray::new(p(0.0, 0.0, 10.0), v(0.0, 0.0, 1.0)).unwrap();
        assert!(ray.intersect_plane(&p(0.0, 0.0, 2.0), &v(0.0, 0.0, 1.0)).is_none());
        let ray = Ray::new(p(0.0, 0.0, 10.0), v(1.0, 0.0, 0.0)).unwrap();
        assert!(ray.intersect_plane(&p(0.0, 0.0, 2.0), &v(0.0, 0.0, 1.0)).is_none());
    }
}
