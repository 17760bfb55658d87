//! UI-Komponenten: Menü, Arm-Panel, Status-Bar, Options-Dialog, Input-Handling.

pub mod controls;
pub mod input;
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use controls::render_controls_panel;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
