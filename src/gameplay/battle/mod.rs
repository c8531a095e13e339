//! Battle flow: the live session, input, player movement, victory
//! detection, and camera effects.

pub mod camera;
pub mod input;
pub mod movement;

use bevy::prelude::*;

use crate::menus::Menu;
use crate::screens::Screen;
use crate::{GameSet, battle_running};

use super::fighter::Fighter;
use super::{Health, Side};

// === Resources ===

/// Live state of one battle, from the opening bell to victory or defeat.
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct BattleSession {
    /// Consecutive damaging hits by the player; reset when the player is hit.
    pub combo: u32,
    /// Best combo of the battle, for the victory stats.
    pub max_combo: u32,
    pub perfect_guards: u32,
    /// Damage dealt by the player over the whole battle.
    pub total_damage: f32,
    /// Virtual-clock timestamp of the opening bell.
    pub started_at: f32,
}

// === Systems ===

/// Start a fresh session at the opening bell.
fn reset_session(time: Res<Time<Virtual>>, mut session: ResMut<BattleSession>) {
    *session = BattleSession {
        started_at: time.elapsed_secs(),
        ..default()
    };
}

/// Ends the battle once either corner is out of health by opening the
/// matching overlay. Defeat wins a double knockout.
fn check_victory(
    fighters: Query<(&Side, &Health), With<Fighter>>,
    mut next_menu: ResMut<NextState<Menu>>,
) {
    let mut player_down = false;
    let mut opponent_down = false;
    for (side, health) in &fighters {
        if health.is_depleted() {
            match side {
                Side::Player => player_down = true,
                Side::Opponent => opponent_down = true,
            }
        }
    }

    if player_down {
        next_menu.set(Menu::Defeat);
    } else if opponent_down {
        next_menu.set(Menu::Victory);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<BattleSession>()
        .init_resource::<BattleSession>();

    app.add_systems(OnEnter(Screen::Battle), reset_session);

    app.add_systems(
        Update,
        check_victory
            .in_set(GameSet::Victory)
            .run_if(battle_running),
    );

    input::plugin(app);
    movement::plugin(app);
    camera::plugin(app);
}
