//! Player movement, jumping and sprite frame selection

use glam::Vec2;

use super::collision::{Aabb, Physics};
use super::state::{Facing, Player};
use super::tick::TickInput;
use crate::consts::*;

/// The static ground slab the dino walks on
pub fn ground_bounds() -> Aabb {
    Aabb::from_center(
        Vec2::new(GROUND_X, GROUND_Y),
        Vec2::new(GROUND_WIDTH, GROUND_HEIGHT),
    )
}

/// Advance the player by one tick
pub fn update<P: Physics + ?Sized>(player: &mut Player, input: &TickInput, physics: &P, dt: f32) {
    let mut is_moving = false;

    // The edge check happens before the step, so one step of overshoot is possible
    if input.right && player.pos.x <= SCREEN_WIDTH {
        player.pos.x += PLAYER_SPEED;
        is_moving = true;
        player.facing = Facing::Right;
    }
    if input.left && player.pos.x >= 0.0 {
        player.pos.x -= PLAYER_SPEED;
        is_moving = true;
        player.facing = Facing::Left;
    }

    let ground = ground_bounds();
    let jump_pressed = input.jump && !player.jump_held;
    player.jump_held = input.jump;

    player.vertical_velocity += GRAVITY;
    if physics.overlaps(&player.bounds(), &ground) {
        player.vertical_velocity = 0.0;
        player.pos = physics.resolve(&player.bounds(), &ground).center;
        if jump_pressed {
            player.vertical_velocity = JUMP_IMPULSE;
        }
    } else {
        is_moving = true;
    }
    player.pos.y += player.vertical_velocity;

    player.animation_frame = if !is_moving {
        player.walk_phase = 0.0;
        IDLE_FRAME
    } else if physics.overlaps(&player.bounds(), &ground) {
        player.walk_phase += WALK_FPS * dt;
        if player.walk_phase >= WALK_FRAMES {
            player.walk_phase = 0.0;
        }
        player.walk_phase as usize
    } else {
        JUMP_FRAME
    };
}
