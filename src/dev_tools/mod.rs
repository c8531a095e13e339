//! Development tools — only included with `cargo run --features dev`.
//!
//! World inspector plus battle debug keybindings. Stripped from
//! release builds.

use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::battle_running;
use crate::gameplay::fighter::{CHARGE_MAX, Charge, Fighter, SUPER_METER_MAX, SuperMeter};
use crate::gameplay::{Health, Side};

pub fn plugin(app: &mut App) {
    app.add_plugins(WorldInspectorPlugin::new());

    app.add_systems(Update, debug_battle_keys.run_if(battle_running));
}

/// F9 drops the challenger (to test the victory flow), F10 fills the
/// player's super meter, F11 banks max charge.
fn debug_battle_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut fighters: Query<(&Side, &mut Health, &mut SuperMeter, &mut Charge), With<Fighter>>,
) {
    for (side, mut health, mut meter, mut charge) in &mut fighters {
        match side {
            Side::Opponent => {
                if keyboard.just_pressed(KeyCode::F9) {
                    health.current = 0.0;
                }
            }
            Side::Player => {
                if keyboard.just_pressed(KeyCode::F10) {
                    meter.value = SUPER_METER_MAX;
                }
                if keyboard.just_pressed(KeyCode::F11) {
                    charge.points = CHARGE_MAX;
                }
            }
        }
    }
}
