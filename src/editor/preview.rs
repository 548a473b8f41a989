use crate::config::EditorConfig;
use crate::math::{Aabb, Point2, Point3, Vector3};
use crate::model::Color;
use crate::scene::{Camera, Material};

const FEET_TO_METERS: f64 = 0.3048;

/// The small representative box shown in the hierarchy viewport.
///
/// It can be dragged around its own viewport but is never tied to the
/// edited box.
#[derive(Debug, Clone)]
pub struct PreviewBox {
    camera: Camera,
    extents: Vector3,
    position: Point3,
    material: Material,
    /// Offset from the grab point to the box center while dragging.
    grab: Option<Vector3>,
}

impl PreviewBox {
    /// Creates the preview box at the origin with its own camera.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            camera: Camera::perspective(
                config.camera_fov_degrees,
                config.preview_viewport.aspect(),
                config.camera_near,
                config.camera_far,
            ),
            extents: Vector3::new(3.0, 4.0, 1.0) * FEET_TO_METERS,
            position: Point3::origin(),
            material: Material::basic(Color::GREEN),
            grab: None,
        }
    }

    /// Camera of the hierarchy viewport.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Full `(x, y, z)` extents of the preview box.
    #[must_use]
    pub fn extents(&self) -> &Vector3 {
        &self.extents
    }

    /// World position of the preview box center.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Material the preview box is drawn with.
    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Whether the preview box is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    fn bounds(&self) -> Aabb {
        Aabb::centered(self.position, self.extents)
    }

    /// Point on the plane facing the camera through the box center.
    fn drag_point(&self, ndc: &Point2) -> Option<Point3> {
        let ray = self.camera.ray_from_ndc(ndc).ok()?;
        let normal = -self.camera.forward();
        ray.intersect_plane(&self.position, &normal).map(|(_, p)| p)
    }

    /// Starts a drag if `ndc` is over the box. Returns whether it grabbed.
    pub fn begin_drag(&mut self, ndc: &Point2) -> bool {
        let Ok(ray) = self.camera.ray_from_ndc(ndc) else {
            return false;
        };
        if self.bounds().ray_hit(&ray).is_none() {
            return false;
        }
        let Some(grab_point) = self.drag_point(ndc) else {
            return false;
        };
        self.grab = Some(self.position - grab_point);
        true
    }

    /// Moves the box so the grabbed point follows `ndc`.
    pub fn drag_to(&mut self, ndc: &Point2) -> bool {
        let Some(offset) = self.grab else {
            return false;
        };
        let Some(point) = self.drag_point(ndc) else {
            return false;
        };
        self.position = point + offset;
        true
    }

    /// Releases the preview box. Returns whether it was being dragged.
    pub fn end_drag(&mut self) -> bool {
        self.grab.take().is_some()
    }
}
