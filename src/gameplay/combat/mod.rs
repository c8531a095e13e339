//! Combat resolution: action timers, strike scheduling, and hit rules.

mod resolve;
mod strike;

use bevy::prelude::*;

use crate::gameplay::fighter::AttackKind;
use crate::screens::Screen;
use crate::{GameSet, battle_running};

/// A strike fired at the end of an attack windup. Resolved against the
/// attacker's opponent in the same frame, re-reading both fighters'
/// state at resolution time.
#[derive(Message, Debug, Clone, Copy)]
pub struct Strike {
    pub attacker: Entity,
    pub kind: AttackKind,
}

/// One-frame pulses for the UI collaborator. Not combat state; HUD
/// flashes and nothing else hang off these.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPulse {
    PerfectGuard,
    SuperFlash,
}

/// Camera-shake impulse forwarded to the rendering collaborator.
#[derive(Message, Debug, Clone, Copy)]
pub struct CameraImpulse(pub f32);

/// Raised while a super move is winding up. Read by the renderer for
/// the slow-motion presentation; the combat clock itself is unaffected.
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct SlowMotion(pub bool);

// === Systems ===

/// A battle abandoned mid-super must not leak its slow-motion flag
/// into the next one.
fn reset_slow_motion(mut slow_motion: ResMut<SlowMotion>) {
    slow_motion.0 = false;
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<SlowMotion>().init_resource::<SlowMotion>();

    app.add_message::<Strike>()
        .add_message::<CombatPulse>()
        .add_message::<CameraImpulse>();

    app.add_systems(OnEnter(Screen::Battle), reset_slow_motion);

    // Timers advance first, then any strike they fired resolves in the
    // same frame.
    app.add_systems(
        Update,
        (strike::advance_actions, resolve::resolve_strikes)
            .chain()
            .in_set(GameSet::Combat)
            .run_if(battle_running),
    );
}
