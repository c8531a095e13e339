//! Fighter command stream: discrete action intents from any controller.
//!
//! Both the keyboard input layer and the AI write [`FighterCommand`]
//! messages; the fighter state machine applies them under one set of
//! rules, so the core never cares who is driving.

use bevy::prelude::*;

use crate::gameplay::combat::SlowMotion;

use super::{
    Action, Airborne, AttackKind, Fighter, JUMP_VELOCITY, MAX_AIR_ACTIONS, SuperMeter, Velocity,
};

/// A discrete action intent for one fighter.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FighterCommand {
    pub fighter: Entity,
    pub kind: CommandKind,
}

/// The command vocabulary shared by keyboard and AI controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Light,
    Heavy,
    Combo,
    Super,
    Guard,
    Jump,
}

/// Applies queued commands to fighter state.
///
/// Invalid commands are silent no-ops: attacks while attacking or
/// stunned, supers below a full meter, jumps past the air-action cap.
/// Responsiveness over feedback — the caller never learns a command
/// was dropped.
pub(super) fn apply_commands(
    mut inbox: MessageReader<FighterCommand>,
    mut fighters: Query<
        (
            &mut Action,
            &mut SuperMeter,
            &mut Velocity,
            Option<&mut Airborne>,
        ),
        With<Fighter>,
    >,
    mut slow_motion: ResMut<SlowMotion>,
    mut commands: Commands,
) {
    for command in inbox.read() {
        let Ok((mut action, mut meter, mut velocity, airborne)) =
            fighters.get_mut(command.fighter)
        else {
            continue;
        };

        match command.kind {
            CommandKind::Light | CommandKind::Heavy | CommandKind::Combo => {
                if action.is_attacking() || action.is_stunned() {
                    continue;
                }
                let kind = match command.kind {
                    CommandKind::Light => AttackKind::Light,
                    CommandKind::Heavy => AttackKind::Heavy,
                    _ => AttackKind::Combo,
                };
                *action = Action::attack(kind);
            }
            CommandKind::Super => {
                if action.is_attacking() || action.is_stunned() || !meter.is_full() {
                    continue;
                }
                // The full bar is consumed up front, even though the
                // strike itself lands at the end of the windup.
                meter.value = 0.0;
                slow_motion.0 = true;
                *action = Action::attack(AttackKind::Super);
            }
            CommandKind::Guard => {
                if action.is_attacking() || action.is_stunned() {
                    continue;
                }
                // Re-raising restarts the window (and the perfect-guard timing).
                *action = Action::guard();
            }
            CommandKind::Jump => match airborne {
                Some(mut airborne) => {
                    if airborne.air_actions >= MAX_AIR_ACTIONS {
                        continue;
                    }
                    airborne.air_actions += 1;
                    velocity.0.y = JUMP_VELOCITY;
                }
                None => {
                    commands
                        .entity(command.fighter)
                        .insert(Airborne { air_actions: 0 });
                    velocity.0.y = JUMP_VELOCITY;
                }
            },
        }
    }
}
