//! Blocken Championship game library.

pub mod gameplay;
pub mod menus;
pub mod screens;
pub mod theme;

#[cfg(feature = "dev")]
pub mod dev_tools;
#[cfg(test)]
pub mod testing;

use bevy::prelude::*;

use menus::Menu;
use screens::Screen;

/// System sets for the per-frame battle tick. Configured as a chain,
/// so each set completes before the next one starts.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Read input intents and translate them into fighter commands.
    Input,
    /// Player movement and facing.
    Movement,
    /// AI decision tick and pending-action execution.
    Ai,
    /// Per-fighter housekeeping: command application, charge, meter, gravity, bounds.
    Tick,
    /// Action timers and strike resolution.
    Combat,
    /// Victory/defeat detection.
    Victory,
    /// Weather particles and camera effects.
    Effects,
    /// HUD refresh.
    Ui,
}

/// Run condition: the battle screen is active and no menu overlay is open.
pub fn battle_running(screen: Res<State<Screen>>, menu: Res<State<Menu>>) -> bool {
    *screen.get() == Screen::Battle && *menu.get() == Menu::None
}

/// Root plugin: system set ordering plus all domain plugins.
/// Runs headless under `MinimalPlugins`; dev tooling (inspector,
/// debug keys) is attached separately by `main.rs`.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Movement,
            GameSet::Ai,
            GameSet::Tick,
            GameSet::Combat,
            GameSet::Victory,
            GameSet::Effects,
            GameSet::Ui,
        )
            .chain(),
    );

    app.add_plugins((
        screens::plugin,
        menus::plugin,
        gameplay::plugin,
        theme::plugin,
    ));
}
