pub mod dimensions;
pub mod face;
pub mod handles;
pub mod removal;

pub use dimensions::{BoxDimensions, DimensionInput};
pub use face::{Color, Face};
pub use handles::{corner_positions, HandleResize, HandleSet, CORNER_SIGNS, HANDLE_COUNT};
pub use removal::{RemovedFace, RemovedFaceStack};
