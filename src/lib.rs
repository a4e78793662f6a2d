//! column-chart: grouped column chart rendering and interaction engine.
//!
//! The engine owns chart state (series, category window, active set, hover),
//! derives scales from it and reconciles a retained scene graph supplied by
//! the host through the [`render::SceneGraph`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartInput};
pub use error::{ChartError, ChartResult};
