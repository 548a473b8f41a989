use crate::error::InputError;
use crate::math::{Axis, Vector3};

/// Outer dimensions of the box.
///
/// Length runs along X, height along Y and breadth along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
}

impl BoxDimensions {
    /// Validates and creates a set of outer dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is not a positive finite number.
    pub fn new(length: f64, breadth: f64, height: f64) -> Result<Self, InputError> {
        Ok(Self {
            length: check_positive("length", length)?,
            breadth: check_positive("breadth", breadth)?,
            height: check_positive("height", height)?,
        })
    }

    /// Builds dimensions from an `(x, y, z)` extents vector.
    #[must_use]
    pub fn from_extents(extents: &Vector3) -> Self {
        Self {
            length: extents.x,
            breadth: extents.z,
            height: extents.y,
        }
    }

    /// Extents as an `(x, y, z)` vector, i.e. `(length, height, breadth)`.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        Vector3::new(self.length, self.height, self.breadth)
    }

    /// Dimension measured along `axis`.
    #[must_use]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.length,
            Axis::Y => self.height,
            Axis::Z => self.breadth,
        }
    }

    /// Largest of the three dimensions.
    #[must_use]
    pub fn max_dimension(&self) -> f64 {
        self.length.max(self.height).max(self.breadth)
    }

    /// Every dimension clamped to `floor..=ceiling`.
    #[must_use]
    pub fn clamped(&self, floor: f64, ceiling: f64) -> Self {
        Self {
            length: self.length.clamp(floor, ceiling),
            breadth: self.breadth.clamp(floor, ceiling),
            height: self.height.clamp(floor, ceiling),
        }
    }

    /// Checks that no dimension exceeds `max`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooLarge`] for the first dimension above `max`.
    pub fn check_max(&self, max: f64) -> Result<(), InputError> {
        for (field, value) in [
            ("length", self.length),
            ("breadth", self.breadth),
            ("height", self.height),
        ] {
            if value > max {
                return Err(InputError::TooLarge { field, value, max });
            }
        }
        Ok(())
    }

    /// Inner cavity dimensions: each side loses `wall` twice, never dropping
    /// below `floor`.
    #[must_use]
    pub fn inner(&self, wall: f64, floor: f64) -> Self {
        Self {
            length: self.length - 2.0 * wall,
            breadth: self.breadth - 2.0 * wall,
            height: self.height - 2.0 * wall,
        }
        .clamped(floor, f64::MAX)
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_nan() || value.is_infinite() {
        return Err(InputError::NotNumeric {
            field,
            value: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}

/// Raw contents of the dimension form.
#[derive(Debug, Clone, Default)]
pub struct DimensionInput {
    pub length: Option<String>,
    pub breadth: Option<String>,
    pub height: Option<String>,
}

impl DimensionInput {
    /// Convenience constructor for a fully filled-in form.
    #[must_use]
    pub fn new(length: &str, breadth: &str, height: &str) -> Self {
        Self {
            length: Some(length.to_owned()),
            breadth: Some(breadth.to_owned()),
            height: Some(height.to_owned()),
        }
    }

    /// Parses the form, reporting the first field that fails validation.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is empty, not a finite number, or not
    /// strictly positive.
    pub fn parse(&self) -> Result<BoxDimensions, InputError> {
        let length = parse_field("length", self.length.as_deref())?;
        let breadth = parse_field("breadth", self.breadth.as_deref())?;
        let height = parse_field("height", self.height.as_deref())?;
        BoxDimensions::new(length, breadth, height)
    }
}

fn parse_field(field: &'static str, raw: Option<&str>) -> Result<f64, InputError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(InputError::Missing { field });
    };
    let value: f64 = raw.parse().map_err(|_| InputError::NotNumeric {
        field,
        value: raw.to_owned(),
    })?;
    check_positive(field, value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inner_subtracts_wall_on_both_sides() {
        let outer = BoxDimensions::new(10.0, 8.0, 6.0).unwrap();
        let inner = outer.inner(0.75, 0.1);
        assert_relative_eq!(inner.length, 8.5);
        assert_relative_eq!(inner.breadth, 6.5);
        assert_relative_eq!(inner.height, 4.5);
    }

    #[test]
    fn inner_never_drops_below_floor() {
        let outer = BoxDimensions::new(1.0, 0.5, 2.0).unwrap();
        let inner = outer.inner(0.75, 0.1);
        assert_relative_eq!(inner.length, 0.1);
        assert_relative_eq!(inner.breadth, 0.1);
        assert_relative_eq!(inner.height, 0.5);
    }

    #[test]
    fn extents_axis_mapping() {
        let dims = BoxDimensions::new(3.0, 2.0, 1.0).unwrap();
        assert_relative_eq!(dims.extents(), Vector3::new(3.0, 1.0, 2.0));
        assert_relative_eq!(dims.along(Axis::Z), 2.0);
        assert_eq!(BoxDimensions::from_extents(&dims.extents()), dims);
        assert_relative_eq!(dims.max_dimension(), 3.0);
    }

    #[test]
    fn clamp_and_max_check() {
        let dims = BoxDimensions {
            length: f64::INFINITY,
            breadth: 0.01,
            height: 5.0,
        };
        let clamped = dims.clamped(0.1, 10.0);
        assert_relative_eq!(clamped.length, 10.0);
        assert_relative_eq!(clamped.breadth, 0.1);
        assert_relative_eq!(clamped.height, 5.0);

        let big = BoxDimensions::new(1.0, 1e308, 1.0).unwrap();
        assert!(matches!(
            big.check_max(1e6),
            Err(InputError::TooLarge { field: "breadth", .. })
        ));
        assert_eq!(clamped.check_max(10.0), Ok(()));
    }

    #[test]
    fn parse_valid_form() {
        let dims = DimensionInput::new(" 10 ", "8.5", "6").parse().unwrap();
        assert_eq!(dims, BoxDimensions::new(10.0, 8.5, 6.0).unwrap());
    }

    #[test]
    fn parse_rejects_missing() {
        let input = DimensionInput {
            length: Some("1".into()),
            breadth: Some("   ".into()),
            height: None,
        };
        assert_eq!(input.parse(), Err(InputError::Missing { field: "breadth" }));
    }

    #[test]
    fn parse_rejects_non_numeric_and_non_positive() {
        let err = DimensionInput::new("abc", "1", "1").parse().unwrap_err();
        assert_eq!(err.field(), "length");
        assert!(matches!(err, InputError::NotNumeric { .. }));

        let err = DimensionInput::new("1", "1", "0").parse().unwrap_err();
        assert!(matches!(err, InputError::NotPositive { field: "height", .. }));

        let err = DimensionInput::new("1", "-2", "1").parse().unwrap_err();
        assert!(matches!(err, InputError::NotPositive { field: "breadth", .. }));

        let err = DimensionInput::new("inf", "1", "1").parse().unwrap_err();
        assert!(matches!(err, InputError::NotNumeric { .. }));
    }
}
