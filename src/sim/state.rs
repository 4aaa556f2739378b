//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::input::InputState;
use crate::consts::*;

/// The player-controlled entity. Created once at startup, never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Movement speed in canvas units per frame
    pub speed: f32,
    pub health: u32,
    pub max_health: u32,
    /// True while any direction key is held this frame
    pub moving: bool,
    /// This frame's intended displacement direction (diagonal-normalized)
    pub move_dir: Vec2,
    /// Most recently pressed axis-aligned direction; persists across frames
    /// with no directional input. Drives the facing indicator.
    pub last_dir: Vec2,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            moving: false,
            move_dir: Vec2::ZERO,
            last_dir: Vec2::X,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Pull the player back inside a `width` x `height` canvas.
    ///
    /// min-after-max ordering keeps this total even when the canvas is
    /// smaller than the player body.
    pub fn clamp_to_bounds(&mut self, width: f32, height: f32) {
        self.pos.x = self.pos.x.min(width - self.half_width()).max(self.half_width());
        self.pos.y = self.pos.y.min(height - self.half_height()).max(self.half_height());
    }
}

/// A fired projectile. Travels in a straight line until its life expires or
/// it leaves the canvas.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    /// Per-frame displacement; magnitude is the projectile speed
    pub vel: Vec2,
    pub radius: f32,
    pub color: &'static str,
    /// Remaining frames before expiry
    pub life: i32,
}

impl Projectile {
    /// True while the projectile should stay in the store: life remaining and
    /// position within the canvas expanded by its radius on every side.
    pub fn alive(&self, width: f32, height: f32) -> bool {
        self.life > 0
            && self.pos.x >= -self.radius
            && self.pos.x <= width + self.radius
            && self.pos.y >= -self.radius
            && self.pos.y <= height + self.radius
    }
}

/// A decorative spark spawned alongside a projectile. Not gameplay-affecting.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Shrinks multiplicatively every frame
    pub radius: f32,
    /// HSL hue for rendering; saturation and lightness are fixed
    pub hue: f32,
    /// Remaining frames before expiry
    pub life: i32,
}

/// Complete simulation state, owned by the frame driver and advanced once per
/// display refresh.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Canvas bounds in local units; pointer clicks arrive in this space
    pub width: f32,
    pub height: f32,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,
    pub input: InputState,
    /// Frames simulated since start
    pub frame: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed, player centered.
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            player: Player::new(Vec2::new(width / 2.0, height / 2.0)),
            projectiles: Vec::new(),
            particles: Vec::new(),
            input: InputState::new(),
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Viewport resize: adopt the new bounds and pull the player back inside
    /// immediately, without waiting for movement input.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.player.clamp_to_bounds(width, height);
    }

    /// External seam: push a projectile built outside the core.
    pub fn add_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// External seam: push a batch of particles built outside the core.
    pub fn add_particles(&mut self, particles: Vec<Particle>) {
        self.particles.extend(particles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centers_player() {
        let state = GameState::new(1, 800.0, 600.0);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.player.health, state.player.max_health);
        assert_eq!(state.player.last_dir, Vec2::X);
        assert!(state.projectiles.is_empty());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_resize_reclamps_player() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.player.pos = Vec2::new(780.0, 580.0);

        state.resize(400.0, 300.0);
        assert_eq!(state.player.pos, Vec2::new(380.0, 280.0));
    }

    #[test]
    fn test_clamp_survives_canvas_smaller_than_player() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.clamp_to_bounds(10.0, 10.0);
        assert_eq!(player.pos, Vec2::new(player.half_width(), player.half_height()));
    }

    #[test]
    fn test_external_mutator_seams() {
        let mut state = GameState::new(1, 800.0, 600.0);

        state.add_projectile(Projectile {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(crate::consts::PROJECTILE_SPEED, 0.0),
            radius: crate::consts::PROJECTILE_RADIUS,
            color: crate::consts::PROJECTILE_COLOR,
            life: crate::consts::PROJECTILE_LIFE,
        });
        state.add_particles(vec![
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::X,
                radius: 3.0,
                hue: 32.0,
                life: 25,
            },
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::Y,
                radius: 2.0,
                hue: 38.0,
                life: 22,
            },
        ]);

        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.particles.len(), 2);
    }

    #[test]
    fn test_projectile_alive_bounds_include_radius_margin() {
        let p = Projectile {
            pos: Vec2::new(804.0, 300.0),
            vel: Vec2::X,
            radius: 5.0,
            color: PROJECTILE_COLOR,
            life: 50,
        };
        // Inside the expanded bound (800 + 5)
        assert!(p.alive(800.0, 600.0));

        let mut outside = p.clone();
        outside.pos.x = 806.0;
        assert!(!outside.alive(800.0, 600.0));
    }
}
