use crate::config::Viewport;
use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, Point2, Point3, Ray, Vector2, Vector3};

/// Closest the orbit may bring the camera to either pole, in radians.
const POLE_MARGIN: f64 = 1e-3;

/// A perspective camera looking at a target point.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3,
    pub target: Point3,
    pub up: Vector3,
    /// Vertical field of view in radians.
    pub fov_y: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    /// Creates a camera at `(0, 0, 5)` looking at the origin.
    #[must_use]
    pub fn perspective(fov_degrees: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 5.0),
            target: Point3::origin(),
            up: Vector3::y(),
            fov_y: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Places the camera on the main diagonal at `factor * max_dimension`
    /// along each axis, looking at the origin.
    pub fn frame(&mut self, max_dimension: f64, factor: f64) {
        let d = max_dimension * factor;
        self.position = Point3::new(d, d, d);
        self.target = Point3::origin();
    }

    /// Unit vector from the camera toward its target.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        (self.target - self.position).normalize()
    }

    /// World-to-camera matrix.
    #[must_use]
    pub fn view(&self) -> Matrix4 {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Camera-to-clip perspective matrix.
    #[must_use]
    pub fn projection(&self) -> Matrix4 {
        nalgebra::Perspective3::new(self.aspect, self.fov_y, self.near, self.far).to_homogeneous()
    }

    /// World-to-clip matrix.
    #[must_use]
    pub fn view_projection(&self) -> Matrix4 {
        self.projection() * self.view()
    }

    /// Projects a world point to normalized device coordinates.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let p = self.view_projection().transform_point(point);
        Point2::new(p.x, p.y)
    }

    /// Builds the picking ray through `ndc` (x and y in `-1..=1`, y up).
    ///
    /// # Errors
    ///
    /// Returns an error if the camera matrices are singular.
    pub fn ray_from_ndc(&self, ndc: &Point2) -> Result<Ray> {
        let inverse = self
            .view_projection()
            .try_inverse()
            .ok_or_else(|| GeometryError::Degenerate("singular camera matrix".into()))?;
        let near = inverse.transform_point(&Point3::new(ndc.x, ndc.y, -1.0));
        let far = inverse.transform_point(&Point3::new(ndc.x, ndc.y, 1.0));
        Ray::through(near, far)
    }
}

/// Converts a pixel position within `viewport` to normalized device
/// coordinates.
#[must_use]
pub fn ndc_from_pixels(x: f64, y: f64, viewport: Viewport) -> Point2 {
    let width = f64::from(viewport.width.max(1));
    let height = f64::from(viewport.height.max(1));
    Point2::new(x / width * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Rotates a camera around its target in response to pointer motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub enabled: bool,
    /// Radians per unit of NDC travel.
    pub speed: f64,
}

impl OrbitControls {
    /// Enabled controls turning `speed` radians per NDC unit.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self {
            enabled: true,
            speed,
        }
    }

    /// Orbits `camera` by a pointer delta in NDC units, keeping its distance
    /// to the target. Returns `false` without moving anything while disabled.
    pub fn rotate(&self, camera: &mut Camera, delta: &Vector2) -> bool {
        if !self.enabled {
            return false;
        }
        let offset = camera.position - camera.target;
        let radius = offset.norm();
        if radius == 0.0 {
            return false;
        }

        let theta = offset.x.atan2(offset.z) - delta.x * self.speed;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + delta.y * self.speed)
            .clamp(POLE_MARGIN, std::f64::consts::PI - POLE_MARGIN);

        camera.position = camera.target
            + Vector3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::perspective(75.0, 16.0 / 9.0, 0.1, 1000.0)
    }

    #[test]
    fn frame_places_camera_on_diagonal() {
        let mut cam = camera();
        cam.frame(10.0, 2.0);
        assert_relative_eq!(cam.position, Point3::new(20.0, 20.0, 20.0));
        assert_relative_eq!(cam.target, Point3::origin());
    }

    #[test]
    fn center_ray_points_at_target() {
        let mut cam = camera();
        cam.frame(3.0, 2.0);
        let ray = cam.ray_from_ndc(&Point2::origin()).unwrap();
        assert_relative_eq!(*ray.direction(), cam.forward(), epsilon = 1e-9);
    }

    #[test]
    fn projection_round_trips_through_ray() {
        let mut cam = camera();
        cam.frame(2.0, 2.0);
        let point = Point3::new(0.5, -0.25, 1.0);
        let ndc = cam.project(&point);
        let ray = cam.ray_from_ndc(&ndc).unwrap();
        let to_point = (point - ray.origin()).normalize();
        assert_relative_eq!(to_point, *ray.direction(), epsilon = 1e-6);
    }

    #[test]
    fn pixel_to_ndc() {
        let vp = Viewport::new(200, 100);
        assert_relative_eq!(ndc_from_pixels(100.0, 50.0, vp), Point2::new(0.0, 0.0));
        assert_relative_eq!(ndc_from_pixels(0.0, 0.0, vp), Point2::new(-1.0, 1.0));
        assert_relative_eq!(ndc_from_pixels(200.0, 100.0, vp), Point2::new(1.0, -1.0));
    }

    #[test]
    fn orbit_keeps_distance() {
        let mut cam = camera();
        cam.frame(1.0, 2.0);
        let before = (cam.position - cam.target).norm();
        let orbit = OrbitControls::new(std::f64::consts::PI);
        assert!(orbit.rotate(&mut cam, &Vector2::new(0.2, -0.1)));
        assert_relative_eq!((cam.position - cam.target).norm(), before, epsilon = 1e-9);
        assert!((cam.position - Point3::new(2.0, 2.0, 2.0)).norm() > 1e-3);
    }

    #[test]
    fn disabled_orbit_does_nothing() {
        let mut cam = camera();
        let mut orbit = OrbitControls::new(1.0);
        orbit.enabled = false;
        let before = cam.position;
        assert!(!orbit.rotate(&mut cam, &Vector2::new(0.5, 0.5)));
        assert_eq!(cam.position, before);
    }

    #[test]
    fn orbit_stops_short_of_pole() {
        let mut cam = camera();
        let orbit = OrbitControls::new(1.0);
        orbit.rotate(&mut cam, &Vector2::new(0.0, -10.0));
        assert!(cam.position.y < 5.0);
        assert!(cam.position.x.abs() + cam.position.z.abs() > 0.0);
    }
}
