//! Hit resolution: range, charge multiplier, guard rules, damage, and
//! the session counters that hang off a landed hit.

use bevy::prelude::*;

use crate::gameplay::battle::BattleSession;
use crate::gameplay::fighter::{Action, AttackKind, Charge, Fighter, SuperMeter};
use crate::gameplay::{Health, MELEE_RANGE, Side};

use super::{CameraImpulse, CombatPulse, Strike};

// === Constants ===

/// Damage factor through a normal (non-perfect) guard.
pub const GUARD_DAMAGE_FACTOR: f32 = 0.3;

/// The perfect-guard window after raising guard (8 ticks at 60 Hz).
pub const PERFECT_GUARD_WINDOW_SECS: f32 = 8.0 / 60.0;

/// Health returned to the defender by a perfect guard.
pub const PERFECT_GUARD_HEAL: f32 = 5.0;

/// Super meter returned to the defender by a perfect guard.
pub const PERFECT_GUARD_METER: f32 = 15.0;

/// Damage above this triggers a camera impulse.
const SHAKE_DAMAGE_THRESHOLD: f32 = 20.0;

/// Camera impulse magnitude on heavy hits.
const SHAKE_MAGNITUDE: f32 = 0.2;

/// Resolves every strike fired this frame against the attacker's opponent.
///
/// Out-of-range strikes whiff silently. Damage scales with the
/// attacker's banked charge; guards cut it to 30%, and a guard raised
/// within the perfect window nullifies it outright and refunds health
/// and meter. Whatever happens, the attacker's charge is spent.
pub(super) fn resolve_strikes(
    mut strikes: MessageReader<Strike>,
    mut fighters: Query<
        (
            Entity,
            &Side,
            &Transform,
            &mut Health,
            &mut SuperMeter,
            &mut Charge,
            &mut Action,
        ),
        With<Fighter>,
    >,
    mut session: ResMut<BattleSession>,
    mut impulses: MessageWriter<CameraImpulse>,
    mut pulses: MessageWriter<CombatPulse>,
) {
    for strike in strikes.read() {
        let Ok((_, &attacker_side, attacker_transform, _, _, attacker_charge, _)) =
            fighters.get(strike.attacker)
        else {
            continue;
        };
        let attacker_pos = attacker_transform.translation;
        let multiplier = attacker_charge.multiplier();

        let defender = fighters
            .iter()
            .find(|(_, side, ..)| **side == attacker_side.opposing())
            .map(|(entity, _, transform, ..)| (entity, transform.translation));

        // Damage actually dealt by this strike (0 on whiff or perfect guard).
        let mut damage = 0.0;

        let in_range = defender
            .filter(|(_, defender_pos)| attacker_pos.distance(*defender_pos) <= MELEE_RANGE);
        if let Some((defender_entity, _)) = in_range {
            if let Ok((_, &defender_side, _, mut health, mut meter, _, mut action)) =
                fighters.get_mut(defender_entity)
            {
                damage = strike.kind.base_damage() * multiplier;

                if let Action::Guarding { window } = &*action {
                    if window.elapsed_secs() <= PERFECT_GUARD_WINDOW_SECS {
                        damage = 0.0;
                        health.heal(PERFECT_GUARD_HEAL);
                        meter.gain(PERFECT_GUARD_METER);
                        session.perfect_guards += 1;
                        pulses.write(CombatPulse::PerfectGuard);
                    } else {
                        damage *= GUARD_DAMAGE_FACTOR;
                    }
                }

                if damage > 0.0 {
                    health.take_damage(damage);
                    // Hit stun replaces whatever the defender was doing,
                    // cancelling any windup still in flight.
                    *action = Action::stun();
                    if defender_side == Side::Player {
                        session.combo = 0;
                    }
                }
            }
        }

        if attacker_side == Side::Player && damage > 0.0 {
            session.combo += 1;
            session.max_combo = session.max_combo.max(session.combo);
            session.total_damage += damage;
        }

        if damage > SHAKE_DAMAGE_THRESHOLD {
            impulses.write(CameraImpulse(SHAKE_MAGNITUDE));
        }

        if strike.kind == AttackKind::Super && damage > 0.0 {
            pulses.write(CombatPulse::SuperFlash);
        }

        // Charge is spent by the resolution itself — hit, guard, or whiff.
        if let Ok((.., mut charge, _)) = fighters.get_mut(strike.attacker) {
            charge.reset();
        }
    }
}
