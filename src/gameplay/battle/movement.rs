//! Player movement: applies the input vector on the ground plane,
//! scaled by the weather, clamped to the arena, facing the opponent.

use bevy::prelude::*;

use crate::gameplay::fighter::Fighter;
use crate::gameplay::weather::Weather;
use crate::gameplay::{ARENA_HALF_EXTENT, Side};
use crate::{GameSet, battle_running};

use super::input::MoveInput;

/// Player movement speed in units per second
/// (0.1 units per tick at the 60 Hz reference).
pub const MOVE_SPEED: f32 = 6.0;

/// Steps the player fighter by the current input vector and turns it
/// to face the opponent whenever it moved.
fn move_player(
    time: Res<Time>,
    input: Res<MoveInput>,
    weather: Res<Weather>,
    mut fighters: Query<(&Side, &mut Transform), With<Fighter>>,
) {
    let axis = input.0;
    if axis.length_squared() < f32::EPSILON {
        return;
    }

    let opponent_pos = fighters
        .iter()
        .find(|(side, _)| **side == Side::Opponent)
        .map(|(_, transform)| transform.translation);

    let step = MOVE_SPEED * weather.effects().movement * time.delta_secs();

    for (side, mut transform) in &mut fighters {
        if *side != Side::Player {
            continue;
        }
        transform.translation.x = axis
            .x
            .mul_add(step, transform.translation.x)
            .clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
        transform.translation.z = axis
            .y
            .mul_add(step, transform.translation.z)
            .clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);

        if let Some(opponent) = opponent_pos {
            let focus = Vec3::new(opponent.x, transform.translation.y, opponent.z);
            transform.look_at(focus, Vec3::Y);
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        move_player.in_set(GameSet::Movement).run_if(battle_running),
    );
}
