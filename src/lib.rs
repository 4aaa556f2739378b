//! Blastgrid - a top-down click-to-fire arcade sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, movement, projectiles, particles)
//! - `renderer`: Frame composition into 2D drawing primitives

pub mod renderer;
pub mod sim;

pub use sim::{GameState, InputState};

/// Game configuration constants
pub mod consts {
    /// Player body size (square)
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Movement speed in canvas units per frame
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    pub const PLAYER_COLOR: &str = "#4ecca3";
    pub const PLAYER_DETAIL_COLOR: &str = "#355c7d";
    /// Inset of the detail rectangle from the body edge
    pub const PLAYER_DETAIL_INSET: f32 = 5.0;

    /// Facing indicator dot
    pub const FACING_DOT_COLOR: &str = "#f8b500";
    pub const FACING_DOT_RADIUS: f32 = 5.0;
    /// Distance of the dot past the body edge
    pub const FACING_DOT_OFFSET: f32 = 5.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 8.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Lifetime in frames
    pub const PROJECTILE_LIFE: i32 = 100;
    pub const PROJECTILE_COLOR: &str = "#ff9a3c";
    pub const PROJECTILE_TRAIL_COLOR: &str = "rgba(255, 154, 60, 0.5)";
    /// Trail circle size relative to the body
    pub const PROJECTILE_TRAIL_SCALE: f32 = 0.7;

    /// Particles spawned per fire action
    pub const PARTICLE_BURST_COUNT: usize = 5;
    /// Multiplicative radius decay per frame
    pub const PARTICLE_SHRINK: f32 = 0.97;
    /// Cone half-angle around the fire direction (radians)
    pub const PARTICLE_ANGLE_JITTER: f32 = 0.25;
    pub const PARTICLE_SPEED_MIN: f32 = 2.0;
    pub const PARTICLE_SPEED_MAX: f32 = 5.0;
    pub const PARTICLE_RADIUS_MIN: f32 = 2.0;
    pub const PARTICLE_RADIUS_MAX: f32 = 5.0;
    /// Accent hue range for `hsl(h, 100%, 60%)` spark colors
    pub const PARTICLE_HUE_MIN: f32 = 30.0;
    pub const PARTICLE_HUE_MAX: f32 = 40.0;
    /// Lifetime range in frames
    pub const PARTICLE_LIFE_MIN: i32 = 20;
    pub const PARTICLE_LIFE_MAX: i32 = 30;

    /// Logical key for the reserved special ability
    pub const SPECIAL_KEY: &str = " ";

    /// Backdrop and grid
    pub const BACKGROUND_COLOR: &str = "#16213e";
    pub const GRID_SPACING: f32 = 50.0;
    pub const GRID_LINE_COLOR: &str = "rgba(255, 255, 255, 0.05)";

    /// Vertical bob while moving: `sin(time_ms / BOB_PERIOD_MS) * BOB_AMPLITUDE`
    pub const BOB_AMPLITUDE: f32 = 3.0;
    pub const BOB_PERIOD_MS: f64 = 100.0;

    /// Health bar HUD
    pub const HEALTH_BAR_X: f32 = 20.0;
    pub const HEALTH_BAR_Y: f32 = 20.0;
    pub const HEALTH_BAR_WIDTH: f32 = 200.0;
    pub const HEALTH_BAR_HEIGHT: f32 = 20.0;
    pub const HEALTH_COLOR_HIGH: &str = "#4ecca3";
    pub const HEALTH_COLOR_MID: &str = "#ff9a3c";
    pub const HEALTH_COLOR_LOW: &str = "#ff6b6b";
}
