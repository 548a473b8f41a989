pub mod aabb;
pub mod ray;

pub use aabb::{Aabb, AabbHit};
pub use ray::Ray;

/// 2D point type, used for normalized device coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type, used for pointer deltas.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// One of the three world axes.
///
/// X carries the box length, Y the height and Z the breadth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis in a point or vector.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit vector along the positive direction of this axis.
    #[must_use]
    pub fn unit(self) -> Vector3 {
        let mut v = Vector3::zeros();
        v[self.index()] = 1.0;
        v
    }

    /// Axis along which `v` has the largest magnitude.
    ///
    /// Ties go to X over Y and Z, then to Y over Z.
    #[must_use]
    pub fn dominant(v: &Vector3) -> Self {
        let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
        if ax >= ay.max(az) {
            Self::X
        } else if ay >= az {
            Self::Y
        } else {
            Self::Z
        }
    }
}
