use std::f64::consts::PI;

/// Size of a render surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, falling back to 1 for a degenerate surface.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }
}

/// Parameters controlling the editor session.
///
/// All lengths are expressed in feet.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Wall thickness subtracted from each side of the outer box (9 inches).
    pub wall_thickness: f64,
    /// Floor applied to every dimension after an edit.
    pub min_dimension: f64,
    /// Largest accepted outer dimension. Creation rejects anything above it
    /// and drags clamp to it, so the camera placement stays finite.
    pub max_dimension: f64,
    /// Opacity of the translucent outer box faces.
    pub outer_opacity: f32,
    /// Camera is placed at `factor * max_dimension` along each axis.
    pub camera_distance_factor: f64,
    /// Edge length of a resize handle cube.
    pub handle_size: f64,
    /// Main render surface.
    pub viewport: Viewport,
    /// Hierarchy preview render surface.
    pub preview_viewport: Viewport,
    /// Vertical field of view of both cameras.
    pub camera_fov_degrees: f64,
    /// Near clipping plane distance.
    pub camera_near: f64,
    /// Far clipping plane distance.
    pub camera_far: f64,
    /// Orbit rotation in radians per unit of NDC pointer travel.
    pub orbit_speed: f64,
    /// Unit suffix shown in the dimensions readout.
    pub unit_label: &'static str,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 9.0 / 12.0,
            min_dimension: 0.1,
            max_dimension: 1.0e6,
            outer_opacity: 0.3,
            camera_distance_factor: 2.0,
            handle_size: 0.1,
            viewport: Viewport::new(1280, 720),
            preview_viewport: Viewport::new(200, 150),
            camera_fov_degrees: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            orbit_speed: PI,
            unit_label: "ft",
        }
    }
}
