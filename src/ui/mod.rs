//! Terminal dashboard: controller state, live refresh task, and rendering.
pub mod controller;
pub mod live;
pub mod model;
pub mod render;


pub use render::{UiSettings, run_ui};
