//! Per-frame simulation step and the fire action.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle, Projectile};
use crate::consts::*;

/// Direction-key bindings, evaluated in this exact order every frame. Each
/// held binding overwrites `last_dir` with its axis, so the last one checked
/// wins: horizontal keys take priority over vertical for the facing
/// indicator when both are held.
const DIRECTION_KEYS: [(&str, &str, Vec2); 4] = [
    ("w", "arrowup", Vec2::NEG_Y),
    ("s", "arrowdown", Vec2::Y),
    ("a", "arrowleft", Vec2::NEG_X),
    ("d", "arrowright", Vec2::X),
];

/// Advance the simulation by one frame.
pub fn tick(state: &mut GameState) {
    state.frame += 1;

    // Movement intent from held keys. Opposing keys cancel by summation.
    let mut intent = Vec2::ZERO;
    let mut moving = false;
    for (key, alias, axis) in DIRECTION_KEYS {
        if state.input.is_pressed(key) || state.input.is_pressed(alias) {
            intent += axis;
            state.player.last_dir = axis;
            moving = true;
        }
    }
    // Diagonals move at the same speed as axis-aligned input
    if intent.x != 0.0 && intent.y != 0.0 {
        intent *= FRAC_1_SQRT_2;
    }
    state.player.moving = moving;
    state.player.move_dir = intent;

    state.player.pos += intent * state.player.speed;
    state.player.clamp_to_bounds(state.width, state.height);

    // Advance projectiles, pruning in place (O(n), iteration-stable)
    let (width, height) = (state.width, state.height);
    for p in &mut state.projectiles {
        p.pos += p.vel;
        p.life -= 1;
    }
    state.projectiles.retain(|p| p.alive(width, height));

    // Advance particles
    for p in &mut state.particles {
        p.pos += p.vel;
        p.life -= 1;
        p.radius *= PARTICLE_SHRINK;
    }
    state.particles.retain(|p| p.life > 0);

    if state.input.is_pressed(SPECIAL_KEY) {
        special_ability(state);
    }
}

/// Extension hook for the space-bar ability. Intentionally does nothing yet.
fn special_ability(_state: &mut GameState) {}

/// Fire a projectile from the player toward `target` (canvas-local
/// coordinates), plus a burst of muzzle sparks around the fire direction.
/// A target on the player's exact position is ignored.
pub fn fire_at(state: &mut GameState, target: Vec2) {
    let delta = target - state.player.pos;
    let dist = delta.length();
    if dist == 0.0 {
        return;
    }
    let dir = delta / dist;

    state.projectiles.push(Projectile {
        pos: state.player.pos,
        vel: dir * PROJECTILE_SPEED,
        radius: PROJECTILE_RADIUS,
        color: PROJECTILE_COLOR,
        life: PROJECTILE_LIFE,
    });

    spawn_fire_burst(state, dir);
}

/// Spawn the fixed-size spark burst for a fire in direction `dir`.
fn spawn_fire_burst(state: &mut GameState, dir: Vec2) {
    let base_angle = dir.y.atan2(dir.x);
    let origin = state.player.pos;

    for _ in 0..PARTICLE_BURST_COUNT {
        let angle =
            base_angle + state.rng.random_range(-PARTICLE_ANGLE_JITTER..PARTICLE_ANGLE_JITTER);
        let speed = state.rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);

        state.particles.push(Particle {
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            radius: state.rng.random_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
            hue: state.rng.random_range(PARTICLE_HUE_MIN..PARTICLE_HUE_MAX),
            life: state.rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
        });
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn player_never_leaves_bounds(
            x in -1000.0f32..2000.0,
            y in -1000.0f32..2000.0,
            held_mask in 0u8..16,
            steps in 1usize..60,
        ) {
            let mut state = GameState::new(1, 800.0, 600.0);
            state.player.pos = Vec2::new(x, y);
            for (i, key) in ["w", "s", "a", "d"].iter().enumerate() {
                if held_mask & (1 << i) != 0 {
                    state.input.key_down(key);
                }
            }

            for _ in 0..steps {
                tick(&mut state);
                let hw = state.player.half_width();
                let hh = state.player.half_height();
                prop_assert!(state.player.pos.x >= hw && state.player.pos.x <= 800.0 - hw);
                prop_assert!(state.player.pos.y >= hh && state.player.pos.y <= 600.0 - hh);
            }
        }

        #[test]
        fn projectile_speed_is_constant_regardless_of_target(
            dx in -500.0f32..500.0,
            dy in -500.0f32..500.0,
        ) {
            prop_assume!(dx != 0.0 || dy != 0.0);
            let mut state = GameState::new(2, 800.0, 600.0);
            let target = state.player.pos + Vec2::new(dx, dy);
            fire_at(&mut state, target);

            prop_assert_eq!(state.projectiles.len(), 1);
            let speed = state.projectiles[0].vel.length();
            prop_assert!((speed - PROJECTILE_SPEED).abs() < 1e-3);
        }
    }
}
