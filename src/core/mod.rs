pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, ScreenSize};
pub use error::{OverlapError, Result};
pub use types::{PlayerState, Point, Role, RotationSlot};
