pub mod app;
pub mod input_panel;
pub mod mode_selector;
pub mod progress;
pub mod results;
pub mod theme_toggle;
