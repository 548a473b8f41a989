use crate::math::{Axis, Point3, Vector3};

use super::BoxDimensions;

/// Number of corner handles on a box.
pub const HANDLE_COUNT: usize = 8;

/// Sign of each handle's `(x, y, z)` position relative to the box center.
///
/// Handles 0 and 6 sit on opposite ends of a main diagonal.
pub const CORNER_SIGNS: [[f64; 3]; HANDLE_COUNT] = [
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
];

const DIAGONAL: (usize, usize) = (0, 6);

/// Corner positions of a box with the given dimensions, centered at the origin.
#[must_use]
pub fn corner_positions(dims: &BoxDimensions) -> [Point3; HANDLE_COUNT] {
    let half = dims.extents() * 0.5;
    CORNER_SIGNS.map(|[sx, sy, sz]| Point3::new(sx * half.x, sy * half.y, sz * half.z))
}

/// Outcome of moving a handle during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleResize {
    /// Axis whose dimension changed.
    pub axis: Axis,
    /// New dimensions, already clamped to the floor.
    pub dimensions: BoxDimensions,
}

/// The eight corner handles and their pre-drag baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleSet {
    positions: [Point3; HANDLE_COUNT],
    baseline: [Point3; HANDLE_COUNT],
}

impl HandleSet {
    /// Places handles on the corners of `dims`; the baseline matches.
    #[must_use]
    pub fn from_dimensions(dims: &BoxDimensions) -> Self {
        let positions = corner_positions(dims);
        Self {
            positions,
            baseline: positions,
        }
    }

    /// Current handle positions.
    #[must_use]
    pub fn positions(&self) -> &[Point3; HANDLE_COUNT] {
        &self.positions
    }

    /// Position of handle `index`, if it exists.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<&Point3> {
        self.positions.get(index)
    }

    /// Handle positions at the start of the current drag.
    #[must_use]
    pub fn baseline(&self) -> &[Point3; HANDLE_COUNT] {
        &self.baseline
    }

    /// Dimensions spanned by the current handle positions.
    #[must_use]
    pub fn dimensions(&self) -> BoxDimensions {
        span(&self.positions)
    }

    /// Dimensions spanned by the baseline positions.
    #[must_use]
    pub fn baseline_dimensions(&self) -> BoxDimensions {
        span(&self.baseline)
    }

    /// Moves every handle onto the corners of `dims`, keeping the baseline.
    pub fn reposition(&mut self, dims: &BoxDimensions) {
        self.positions = corner_positions(dims);
    }

    /// Makes the current positions the baseline of the next drag.
    pub fn commit_baseline(&mut self) {
        self.baseline = self.positions;
    }

    /// Computes the resize produced by dragging handle `index` to `target`.
    ///
    /// The dominant axis of the displacement from the baseline is resized by
    /// twice the signed displacement along it, whichever corner is dragged.
    /// The result is clamped to `floor..=ceiling`. Returns `None` for an
    /// out-of-range index.
    #[must_use]
    pub fn resize_for(
        &self,
        index: usize,
        target: &Point3,
        floor: f64,
        ceiling: f64,
    ) -> Option<HandleResize> {
        let start = self.baseline.get(index)?;

        let displacement: Vector3 = target - start;
        let axis = Axis::dominant(&displacement);
        let i = axis.index();

        let mut extents = self.baseline_dimensions().extents();
        extents[i] += 2.0 * displacement[i];

        Some(HandleResize {
            axis,
            dimensions: BoxDimensions::from_extents(&extents).clamped(floor, ceiling),
        })
    }
}

fn span(points: &[Point3; HANDLE_COUNT]) -> BoxDimensions {
    let (a, b) = DIAGONAL;
    BoxDimensions::from_extents(&(points[a] - points[b]).abs())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dims(l: f64, b: f64, h: f64) -> BoxDimensions {
        BoxDimensions::new(l, b, h).unwrap()
    }

    #[test]
    fn corners_follow_sign_pattern() {
        let handles = HandleSet::from_dimensions(&dims(4.0, 2.0, 6.0));
        assert_relative_eq!(handles.positions()[0], Point3::new(2.0, 3.0, 1.0));
        assert_relative_eq!(handles.positions()[6], Point3::new(-2.0, -3.0, -1.0));
        assert_relative_eq!(handles.positions()[5], Point3::new(2.0, -3.0, -1.0));
    }

    #[test]
    fn every_corner_is_distinct() {
        let handles = HandleSet::from_dimensions(&dims(1.0, 2.0, 3.0));
        for i in 0..HANDLE_COUNT {
            for j in (i + 1)..HANDLE_COUNT {
                assert!((handles.positions()[i] - handles.positions()[j]).norm() > 0.1);
            }
        }
    }

    #[test]
    fn span_recovers_dimensions() {
        let handles = HandleSet::from_dimensions(&dims(10.0, 8.0, 6.0));
        assert_eq!(handles.dimensions(), dims(10.0, 8.0, 6.0));
    }

    #[test]
    fn single_axis_drag_doubles_displacement() {
        let handles = HandleSet::from_dimensions(&dims(4.0, 2.0, 6.0));
        let target = handles.positions()[0] + Vector3::new(0.0, 0.5, 0.0);
        let resize = handles.resize_for(0, &target, 0.1, 1e6).unwrap();
        assert_eq!(resize.axis, Axis::Y);
        assert_relative_eq!(resize.dimensions.height, 7.0);
        assert_relative_eq!(resize.dimensions.length, 4.0);
        assert_relative_eq!(resize.dimensions.breadth, 2.0);
    }

    #[test]
    fn negative_side_corner_follows_signed_displacement() {
        let handles = HandleSet::from_dimensions(&dims(4.0, 2.0, 6.0));
        assert!(handles.positions()[1].z < 0.0);
        let target = handles.positions()[1] + Vector3::new(0.0, 0.0, 0.5);
        let resize = handles.resize_for(1, &target, 0.1, 1e6).unwrap();
        assert_eq!(resize.axis, Axis::Z);
        assert_relative_eq!(resize.dimensions.breadth, 3.0);

        let target = handles.positions()[6] + Vector3::new(-1.0, 0.2, 0.0);
        let resize = handles.resize_for(6, &target, 0.1, 1e6).unwrap();
        assert_eq!(resize.axis, Axis::X);
        assert_relative_eq!(resize.dimensions.length, 2.0);
    }

    #[test]
    fn resize_clamps_to_ceiling() {
        let handles = HandleSet::from_dimensions(&dims(4.0, 2.0, 6.0));
        let target = handles.positions()[0] + Vector3::new(f64::MAX, 0.0, 0.0);
        let resize = handles.resize_for(0, &target, 0.1, 100.0).unwrap();
        assert_relative_eq!(resize.dimensions.length, 100.0);
        assert!(resize.dimensions.extents().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn resize_is_relative_to_baseline() {
        let mut handles = HandleSet::from_dimensions(&dims(4.0, 2.0, 6.0));
        let start = handles.positions()[1];
        let first = handles
            .resize_for(1, &(start + Vector3::new(0.3, 0.0, 0.0)), 0.1, 1e6)
            .unwrap();
        handles.reposition(&first.dimensions);
        let second = handles
            .resize_for(1, &(start + Vector3::new(0.5, 0.0, 0.0)), 0.1, 1e6)
            .unwrap();
        assert_relative_eq!(second.dimensions.length, 5.0);

        handles.reposition(&second.dimensions);
        handles.commit_baseline();
        assert_relative_eq!(handles.baseline_dimensions().length, 5.0);
    }

    #[test]
    fn resize_clamps_to_floor() {
        let handles = HandleSet::from_dimensions(&dims(1.0, 1.0, 1.0));
        let target = handles.positions()[0] - Vector3::new(0.0, 0.0, 3.0);
        let resize = handles.resize_for(0, &target, 0.1, 1e6).unwrap();
        assert_eq!(resize.axis, Axis::Z);
        assert_relative_eq!(resize.dimensions.breadth, 0.1);
    }

    #[test]
    fn unknown_handle() {
        let handles = HandleSet::from_dimensions(&dims(1.0, 1.0, 1.0));
        assert!(handles.resize_for(8, &Point3::origin(), 0.1, 1e6).is_none());
    }
}
