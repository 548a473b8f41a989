use std::fmt;

use crate::math::{Axis, Vector3};

/// 24-bit RGB color, stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xff_ffff);
    pub const RED: Self = Self(0xff_0000);
    pub const GREEN: Self = Self(0x00_ff00);
    pub const BLUE: Self = Self(0x00_00ff);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// One of the six faces of the box, in material-group order.
///
/// Opposite faces share a color: Front/Back are red, Top/Bottom green and
/// Left/Right blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// +X
    Front,
    /// -X
    Back,
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z
    Left,
    /// -Z
    Right,
}

impl Face {
    /// All faces in index order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Material-group index of this face.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face with material-group index `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The face lying on the `positive` or negative side of `axis`.
    #[must_use]
    pub fn from_axis(axis: Axis, positive: bool) -> Self {
        match (axis, positive) {
            (Axis::X, true) => Self::Front,
            (Axis::X, false) => Self::Back,
            (Axis::Y, true) => Self::Top,
            (Axis::Y, false) => Self::Bottom,
            (Axis::Z, true) => Self::Left,
            (Axis::Z, false) => Self::Right,
        }
    }

    /// Axis this face is perpendicular to.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Front | Self::Back => Axis::X,
            Self::Top | Self::Bottom => Axis::Y,
            Self::Left | Self::Right => Axis::Z,
        }
    }

    /// Whether the face lies on the positive side of its axis.
    #[must_use]
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Front | Self::Top | Self::Left)
    }

    /// Outward unit normal.
    #[must_use]
    pub fn normal(self) -> Vector3 {
        let n = self.axis().unit();
        if self.is_positive() {
            n
        } else {
            -n
        }
    }

    /// Color assigned to this face by the fixed face-color table.
    #[must_use]
    pub fn color(self) -> Color {
        match self.axis() {
            Axis::X => Color::RED,
            Axis::Y => Color::GREEN,
            Axis::Z => Color::BLUE,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
