pub mod app;
pub mod camera_controls;
pub mod controls_panel;
pub mod hud;
pub mod inspect_panel;
pub mod legend;
pub mod legend_panel;
pub mod list_panel;
pub mod map_view;
pub mod stats_panel;
