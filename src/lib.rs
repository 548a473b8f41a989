pub mod config;
pub mod editor;
pub mod error;
pub mod math;
pub mod model;
pub mod scene;

pub use config::EditorConfig;
pub use editor::{BoxEditor, EditorCommand, Outcome};
pub use error::{BoxwrightError, Result};
