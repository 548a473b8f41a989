use tracing::debug;

use crate::error::Result;
use crate::math::{Aabb, Point2, Point3, Ray, Vector3};
use crate::scene::ndc_from_pixels;

use super::{BoxEditor, Outcome};

/// Pointer travel, in NDC units, below which a press-release is a click.
const CLICK_SLOP: f64 = 0.01;

/// What the pointer is currently doing on the main viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerGesture {
    #[default]
    Idle,
    /// Dragging a handle across the plane through it that faces the camera.
    Handle {
        handle: usize,
        plane_origin: Point3,
        plane_normal: Vector3,
        /// Offset from the grab point to the handle center.
        offset: Vector3,
    },
    /// Orbiting the camera, or a click if the pointer never moved.
    Orbit { last: Point2, moved: bool },
}

impl BoxEditor {
    /// Current pointer gesture on the main viewport.
    #[must_use]
    pub fn pointer_gesture(&self) -> PointerGesture {
        self.gesture
    }

    /// Converts a pixel position on the main viewport (origin top-left) to
    /// normalized device coordinates.
    #[must_use]
    pub fn viewport_ndc(&self, x: f64, y: f64) -> Point2 {
        ndc_from_pixels(x, y, self.config.viewport)
    }

    /// [`Self::pointer_down`] at a pixel position on the main viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera is degenerate.
    pub fn pointer_down_at(&mut self, x: f64, y: f64) -> Result<Option<Outcome>> {
        let ndc = self.viewport_ndc(x, y);
        self.pointer_down(&ndc)
    }

    /// [`Self::pointer_move`] at a pixel position on the main viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera is degenerate or the scene arena is
    /// inconsistent.
    pub fn pointer_move_at(&mut self, x: f64, y: f64) -> Result<Option<Outcome>> {
        let ndc = self.viewport_ndc(x, y);
        self.pointer_move(&ndc)
    }

    /// [`Self::pointer_up`] at a pixel position on the main viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera is degenerate or the scene arena is
    /// inconsistent.
    pub fn pointer_up_at(&mut self, x: f64, y: f64) -> Result<Option<Outcome>> {
        let ndc = self.viewport_ndc(x, y);
        self.pointer_up(&ndc)
    }

    /// Nearest handle under `ray`.
    fn pick_handle(&self, ray: &Ray) -> Option<(usize, Point3)> {
        let handles = self.handles()?;
        let size = self.config.handle_size;
        let extents = Vector3::new(size, size, size);

        handles
            .positions()
            .iter()
            .enumerate()
            .filter_map(|(i, p)| Aabb::centered(*p, extents).ray_hit(ray).map(|hit| (i, *p, hit.t)))
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(i, p, _)| (i, p))
    }

    /// Pointer pressed on the main viewport.
    ///
    /// Over a handle this starts a resize drag; anywhere else it starts an
    /// orbit that turns into a face click if released without moving.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera is degenerate.
    pub fn pointer_down(&mut self, ndc: &Point2) -> Result<Option<Outcome>> {
        let ray = self.camera.ray_from_ndc(ndc)?;
        if let Some((handle, center)) = self.pick_handle(&ray) {
            let plane_normal = -self.camera.forward();
            let grab = ray
                .intersect_plane(&center, &plane_normal)
                .map_or(center, |(_, p)| p);
            self.gesture = PointerGesture::Handle {
                handle,
                plane_origin: center,
                plane_normal,
                offset: center - grab,
            };
            return Ok(Some(self.begin_drag(handle)));
        }
        self.gesture = PointerGesture::Orbit {
            last: *ndc,
            moved: false,
        };
        Ok(None)
    }

    /// Pointer moved on the main viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera is degenerate or the scene arena is
    /// inconsistent.
    pub fn pointer_move(&mut self, ndc: &Point2) -> Result<Option<Outcome>> {
        match self.gesture {
            PointerGesture::Idle => Ok(None),
            PointerGesture::Handle {
                handle,
                plane_origin,
                plane_normal,
                offset,
            } => {
                let ray = self.camera.ray_from_ndc(ndc)?;
                let Some((_, point)) = ray.intersect_plane(&plane_origin, &plane_normal) else {
                    return Ok(None);
                };
                self.drag_to(handle, &(point + offset)).map(Some)
            }
            PointerGesture::Orbit { last, moved } => {
                let delta = ndc - last;
                let moved = moved || delta.norm() > CLICK_SLOP;
                if !self.orbit.rotate(&mut self.camera, &delta) {
                    debug!("orbit ignored: controls disabled");
                }
                self.gesture = PointerGesture::Orbit { last: *ndc, moved };
                Ok(None)
            }
        }
    }

    /// Pointer released on the main viewport.
    ///
    /// Ends a handle drag without producing a click; a press-release that
    /// did not move removes the face under the pointer.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera is degenerate or the scene arena is
    /// inconsistent.
    pub fn pointer_up(&mut self, ndc: &Point2) -> Result<Option<Outcome>> {
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            PointerGesture::Idle => Ok(None),
            PointerGesture::Handle { .. } => Ok(Some(self.end_drag())),
            PointerGesture::Orbit { moved: true, .. } => Ok(None),
            PointerGesture::Orbit { moved: false, .. } => self.click(ndc).map(Some),
        }
    }

    /// Pointer pressed on the hierarchy viewport. Grabbing the preview box
    /// locks the main camera orbit until release.
    pub fn preview_pointer_down(&mut self, ndc: &Point2) -> bool {
        let grabbed = self.preview.begin_drag(ndc);
        if grabbed {
            self.orbit.enabled = false;
        }
        grabbed
    }

    /// Pointer moved on the hierarchy viewport. Returns whether the preview
    /// box moved.
    pub fn preview_pointer_move(&mut self, ndc: &Point2) -> bool {
        self.preview.drag_to(ndc)
    }

    /// Pointer released on the hierarchy viewport.
    pub fn preview_pointer_up(&mut self) -> bool {
        let released = self.preview.end_drag();
        if released && !self.drag.is_dragging() {
            self.orbit.enabled = true;
        }
        released
    }
}
