mod dashboard;
mod frame;
mod lifecycle;
mod theme;

pub use dashboard::{Ui, UiActions};
pub use frame::{Regions, draw_frame, layout_regions};
#[cfg(test)]
pub(crate) use frame::{custom_result_lines, live_lines};
pub use lifecycle::{UiSettings, run_ui};
