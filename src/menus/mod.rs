//! Menu overlays that appear on top of the battle screen.
//!
//! The `Menu` state is orthogonal to `Screen` — overlays sit on top of
//! whatever screen is active. Opening any overlay pauses virtual time,
//! which freezes every combat timer (windups, guards, stun, AI plans)
//! in one place.

mod championship;
mod endgame;
mod pause;

use bevy::prelude::*;

/// Menu overlay states. Orthogonal to `Screen`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum Menu {
    /// No overlay is active.
    #[default]
    None,
    /// Pause overlay (battle only).
    Pause,
    /// The opponent is down; shows the battle stats.
    Victory,
    /// The player is down.
    Defeat,
    /// Every ladder opponent is beaten.
    Championship,
}

pub fn plugin(app: &mut App) {
    app.init_state::<Menu>();
    app.add_plugins((pause::plugin, endgame::plugin, championship::plugin));

    // Pause/unpause virtual time when any overlay opens/closes. All
    // combat timing reads the virtual clock, so this freezes the battle
    // wholesale — no stale windup can fire into an ended session.
    app.add_systems(OnExit(Menu::None), pause_virtual_time);
    app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn unpause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_menu_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<Menu>();
        app.add_systems(OnExit(Menu::None), pause_virtual_time);
        app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
        app.update();
        app
    }

    #[test]
    fn virtual_time_pauses_when_an_overlay_opens() {
        let mut app = create_menu_test_app();

        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::Victory);
        app.update();

        let time = app.world().resource::<Time<Virtual>>();
        assert!(
            time.is_paused(),
            "Time<Virtual> should be paused while an overlay is open"
        );
    }

    #[test]
    fn virtual_time_resumes_when_the_overlay_closes() {
        let mut app = create_menu_test_app();

        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::Pause);
        app.update();

        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::None);
        app.update();

        let time = app.world().resource::<Time<Virtual>>();
        assert!(
            !time.is_paused(),
            "Time<Virtual> should resume when the overlay closes"
        );
    }
}
