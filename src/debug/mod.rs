pub mod ui;

pub use ui::viewer_info_ui_system;
