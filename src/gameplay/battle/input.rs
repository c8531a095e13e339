//! Keyboard wiring for the player fighter.
//!
//! Translates keys into the same movement-vector + command stream the
//! AI uses, so the combat core never knows which device is driving.

use bevy::prelude::*;

use crate::gameplay::fighter::{Charge, CommandKind, Fighter, FighterCommand};
use crate::gameplay::Side;
use crate::{GameSet, battle_running};

/// Movement intent for the player fighter, per axis in `[-1, 1]`.
/// `x` is left/right across the arena, `y` is depth (toward/away from
/// the camera).
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct MoveInput(pub Vec2);

/// Key map: WASD moves, J/K/L/U attack, G guards, Space jumps.
/// Holding the heavy key banks charge.
fn read_battle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut move_input: ResMut<MoveInput>,
    mut fighters: Query<(Entity, &Side, &mut Charge), With<Fighter>>,
    mut outbox: MessageWriter<FighterCommand>,
) {
    let mut axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        axis.y += 1.0;
    }
    move_input.0 = axis;

    for (entity, side, mut charge) in &mut fighters {
        if *side != Side::Player {
            continue;
        }
        charge.charging = keyboard.pressed(KeyCode::KeyK);

        for (key, kind) in [
            (KeyCode::KeyJ, CommandKind::Light),
            (KeyCode::KeyK, CommandKind::Heavy),
            (KeyCode::KeyL, CommandKind::Combo),
            (KeyCode::KeyU, CommandKind::Super),
            (KeyCode::KeyG, CommandKind::Guard),
            (KeyCode::Space, CommandKind::Jump),
        ] {
            if keyboard.just_pressed(key) {
                outbox.write(FighterCommand {
                    fighter: entity,
                    kind,
                });
            }
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<MoveInput>().init_resource::<MoveInput>();

    app.add_systems(
        Update,
        read_battle_input
            .in_set(GameSet::Input)
            .run_if(battle_running),
    );
}
