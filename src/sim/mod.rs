//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod input;
pub mod state;
pub mod tick;

pub use input::InputState;
pub use state::{GameState, Particle, Player, Projectile};
pub use tick::{fire_at, tick};
