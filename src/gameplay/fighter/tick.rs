//! Per-frame fighter housekeeping: charge accrual, super meter regen,
//! airborne physics, and the arena bounds clamp.

use bevy::prelude::*;

use crate::gameplay::{ARENA_HALF_EXTENT, FLOOR_Y};

use super::{
    Airborne, CHARGE_MAX, CHARGE_RATE, Charge, Fighter, GRAVITY, SUPER_METER_REGEN, SuperMeter,
    Velocity,
};

/// Advances every fighter's continuous state by one frame.
///
/// - Charge builds while the charge input is held (it only ever resets
///   through an attack resolution, never here).
/// - The super meter regenerates passively.
/// - Airborne fighters fall under gravity and land when they reach the
///   floor, clearing vertical velocity and the airborne flag.
/// - Horizontal position is clamped to the arena.
pub(super) fn fighter_tick(
    time: Res<Time>,
    mut fighters: Query<
        (
            Entity,
            &mut Transform,
            &mut Velocity,
            &mut Charge,
            &mut SuperMeter,
            Option<&mut Airborne>,
        ),
        With<Fighter>,
    >,
    mut commands: Commands,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut velocity, mut charge, mut meter, airborne) in &mut fighters {
        if charge.charging {
            charge.points = CHARGE_RATE.mul_add(dt, charge.points).min(CHARGE_MAX);
        }

        meter.gain(SUPER_METER_REGEN * dt);

        if airborne.is_some() {
            velocity.0.y = GRAVITY.mul_add(-dt, velocity.0.y);
            transform.translation.y = velocity.0.y.mul_add(dt, transform.translation.y);

            if transform.translation.y <= FLOOR_Y {
                transform.translation.y = FLOOR_Y;
                velocity.0.y = 0.0;
                commands.entity(entity).remove::<Airborne>();
            }
        }

        transform.translation.x = transform
            .translation
            .x
            .clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
        transform.translation.z = transform
            .translation
            .z
            .clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
    }
}
