//! In-battle HUD: health/meter/charge bars, combo counter, battle
//! timer, weather badge, and combat event flashes.

mod bars;
mod status;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((bars::plugin, status::plugin));
}
