// Compile-time viewer settings.

pub const MAP_URL: &str = "/maps/latest.json";

pub const BACKGROUND_COLOR: &str = "#0e1116";
pub const GRID_COLOR: &str = "#1c2128";
/// World units between background grid lines.
pub const GRID_SIZE: f64 = 20.0;
pub const PATH_COLOR: &str = "#58a6ff";
pub const PATH_WIDTH: f64 = 2.0;
pub const RESOURCE_COLOR: &str = "#2ea043";
pub const OBSTACLE_COLOR: &str = "#8b5a2b";
pub const RESOURCE_HOVER_COLOR: &str = "#7ee787";
pub const OBSTACLE_HOVER_COLOR: &str = "#f0883e";
pub const HOVER_RING_PAD: f64 = 3.0;
pub const HOVER_RING_WIDTH: f64 = 2.0;

pub const ROVER_COLOR: &str = "#f85149";
pub const ROVER_RADIUS: f64 = 10.0;
pub const HEADING_COLOR: &str = "#f85149";
pub const MAST_COLOR: &str = "#1f6feb";
pub const VECTOR_LENGTH: f64 = 30.0;
pub const VECTOR_WIDTH: f64 = 2.0;

pub const FLASH_COLOR: &str = "#d4af37";
pub const FLASH_PAD: f64 = 6.0;
pub const FLASH_MS: u32 = 1500;

/// Pixels moved per arrow key press or pan button click.
pub const PAN_STEP: f64 = 40.0;

pub const FALLBACK_WIDTH: f64 = 800.0;
pub const FALLBACK_HEIGHT: f64 = 600.0;
