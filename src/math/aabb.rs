use super::{Axis, Point3, Ray, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// Where a ray first meets the surface of an [`Aabb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AabbHit {
    /// Ray parameter of the hit.
    pub t: f64,
    /// Hit point on the box surface.
    pub point: Point3,
    /// Axis of the slab the hit face belongs to.
    pub axis: Axis,
    /// `true` for the face on the positive side of `axis`.
    pub positive: bool,
}

impl Aabb {
    /// Creates a box from its minimum and maximum corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Box of the given full extents centered on `center`.
    #[must_use]
    pub fn centered(center: Point3, extents: Vector3) -> Self {
        let half = extents * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Size along each axis.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Whether `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Finds the first surface point hit by `ray`.
    ///
    /// When the ray starts inside the box the face it leaves through is
    /// reported, so a box seen from inside can still be picked.
    #[must_use]
    pub fn ray_hit(&self, ray: &Ray) -> Option<AabbHit> {
        let origin = ray.origin();
        let dir = ray.direction();

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        let mut entry = (Axis::X, false);
        let mut exit = (Axis::X, true);

        for axis in Axis::ALL {
            let i = axis.index();
            if dir[i] == 0.0 {
                if origin[i] < self.min[i] || origin[i] > self.max[i] {
                    return None;
                }
                continue;
            }

            let recip = dir[i].recip();
            let t_lo = (self.min[i] - origin[i]) * recip;
            let t_hi = (self.max[i] - origin[i]) * recip;
            // Entering through the max face when travelling in the negative direction.
            let (t_entry, t_exit, entry_positive) = if t_lo < t_hi {
                (t_lo, t_hi, false)
            } else {
                (t_hi, t_lo, true)
            };

            if t_entry > t_min {
                t_min = t_entry;
                entry = (axis, entry_positive);
            }
            if t_exit < t_max {
                t_max = t_exit;
                exit = (axis, !entry_positive);
            }
            if t_max < t_min {
                return None;
            }
        }

        if t_max < 0.0 {
            return None;
        }

        let (t, (axis, positive)) = if t_min >= 0.0 {
            (t_min, entry)
        } else {
            (t_max, exit)
        };

        Some(AabbHit {
            t,
            point: ray.at(t),
            axis,
            positive,
        })
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

    fn unit_box() -> Aabb {
        Aabb::centered(p(0.0, 0.0, 0.0), v(2.0, 2.0, 2.0))
    }

    #[test]
    fn centered_extents() {
        let aabb = Aabb::centered(p(1.0, 0.0, 0.0), v(4.0, 2.0, 6.0));
        assert_relative_eq!(aabb.min, p(-1.0, -1.0, -3.0));
        assert_relative_eq!(aabb.extents(), v(4.0, 2.0, 6.0));
        assert_relative_eq!(aabb.center(), p(1.0, 0.0, 0.0));
    }

    #[test]
    fn hit_from_positive_z() {
        let ray = Ray::new(p(0.2, 0.1, 10.0), v(0.0, 0.0, -1.0)).unwrap();
        let hit = unit_box().ray_hit(&ray).unwrap();
        assert_eq!(hit.axis, Axis::Z);
        assert!(hit.positive);
        assert_relative_eq!(hit.t, 9.0);
        assert_relative_eq!(hit.point, p(0.2, 0.1, 1.0));
    }

    #[test]
    fn hit_from_negative_x() {
        let ray = Ray::new(p(-5.0, 0.0, 0.0), v(1.0, 0.0, 0.0)).unwrap();
        let hit = unit_box().ray_hit(&ray).unwrap();
        assert_eq!(hit.axis, Axis::X);
        assert!(!hit.positive);
    }

    #[test]
    fn diagonal_hit_reports_last_entered_slab() {
        let ray = Ray::through(p(5.0, 4.0, 5.0), p(0.0, 0.9, 0.0)).unwrap();
        let hit = unit_box().ray_hit(&ray).unwrap();
        assert_eq!(hit.axis, Axis::Y);
        assert!(hit.positive);
    }

    #[test]
    fn miss_and_behind() {
        let ray = Ray::new(p(0.0, 5.0, 10.0), v(0.0, 0.0, -1.0)).unwrap();
        assert!(unit_box().ray_hit(&ray).is_none());
        let ray = Ray::new(p(0.0, 0.0, 10.0), v(0.0, 0.0, 1.0)).unwrap();
        assert!(unit_box().ray_hit(&ray).is_none());
    }

    #[test]
    fn inside_reports_exit_face() {
        let ray = Ray::new(p(0.0, 0.0, 0.0), v(0.0, -1.0, 0.0)).unwrap();
        let hit = unit_box().ray_hit(&ray).unwrap();
        assert_eq!(hit.axis, Axis::Y);
        assert!(!hit.positive);
        assert_relative_eq!(hit.t, 1.0);
    }
}
