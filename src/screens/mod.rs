//! Screen plugins for each game state.

mod battle;
mod bracket;
mod character_select;
mod difficulty;
mod loading;
mod title;

use bevy::prelude::*;

/// Primary screens, in the order a championship run visits them.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum Screen {
    /// Boot splash with the fake-work progress bar.
    #[default]
    Loading,
    /// Mode select: tournament, quick fight, training.
    Title,
    /// Difficulty cards.
    DifficultySelect,
    /// Championship ladder overview, tournament mode only.
    TournamentBracket,
    /// Roster cards plus the weather roll for the next battle.
    CharacterSelect,
    /// The fight itself.
    Battle,
}

pub fn plugin(app: &mut App) {
    app.init_state::<Screen>();

    app.add_systems(Startup, setup_camera);

    app.add_plugins((
        loading::plugin,
        title::plugin,
        difficulty::plugin,
        bracket::plugin,
        character_select::plugin,
        battle::plugin,
    ));
}

/// Spawns the global 3D camera. Persists across all states (do NOT add
/// `DespawnOnExit`); the battle camera system repositions it each frame.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Main Camera"),
        Camera3d::default(),
        Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::new(0.0, 2.0, 0.0), Vec3::Y),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn screens_are_distinct() {
        assert_ne!(Screen::Loading, Screen::Title);
        assert_ne!(Screen::Title, Screen::DifficultySelect);
        assert_ne!(Screen::CharacterSelect, Screen::Battle);
    }
}
