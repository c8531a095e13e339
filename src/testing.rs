//! Testing utilities for headless Bevy apps.

#![cfg(test)]

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::gameplay::fighter::{Action, Charge, Fighter, MAX_HEALTH, SuperMeter, Velocity};
use crate::gameplay::{FLOOR_Y, Health, Side};

/// Make every `app.update()` advance the clock by a fixed step instead
/// of wall time, so timer-driven assertions are deterministic.
pub fn step_time(app: &mut App, step: Duration) {
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
}

/// Advance the app by the given number of frames.
pub fn tick_app(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Spawn a fighter with the full combat archetype (no visuals) standing
/// on the floor at the given x.
pub fn spawn_test_fighter(world: &mut World, side: Side, x: f32) -> Entity {
    world
        .spawn((
            Fighter,
            side,
            Health::new(MAX_HEALTH),
            SuperMeter::default(),
            Charge::default(),
            Action::default(),
            Velocity::default(),
            Transform::from_xyz(x, FLOOR_Y, 0.0),
        ))
        .id()
}

/// Assert how many entities match the filter.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let count = app
        .world_mut()
        .query_filtered::<Entity, F>()
        .iter(app.world())
        .count();
    assert_eq!(
        count, expected,
        "expected {expected} matching entities, found {count}"
    );
}
