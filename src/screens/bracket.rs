//! Tournament bracket screen: the ladder overview shown before a
//! championship run begins.

use bevy::prelude::*;

use crate::gameplay::tournament::{TOTAL_ROUNDS, TournamentState};
use crate::theme::{palette, widget};

use super::Screen;

const PROGRESS_BAR_WIDTH: f32 = 400.0;

fn spawn_bracket_screen(mut commands: Commands, tournament: Res<TournamentState>) {
    let round_label = format!("Round {} of {TOTAL_ROUNDS}", tournament.current_round);
    let challenger = tournament
        .current_opponent()
        .map_or("Champion AI".to_string(), |opponent| {
            format!("{} — {}", opponent.display_name(), opponent.title())
        });
    let progress_percent = tournament.progress() * 100.0;

    commands.spawn((
        widget::ui_root("Tournament Bracket Screen"),
        DespawnOnExit(Screen::TournamentBracket),
        children![
            (
                Name::new("Bracket Panel"),
                Node {
                    width: Val::Px(560.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(20.0),
                    padding: UiRect::all(Val::Px(40.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(palette::PANEL_BACKGROUND),
                BorderColor::all(palette::PANEL_BORDER),
                children![
                    widget::header("Championship Bracket"),
                    widget::label(round_label),
                    widget::label(format!("Next challenger: {challenger}")),
                    (
                        Name::new("Bracket Progress"),
                        Node {
                            width: Val::Px(PROGRESS_BAR_WIDTH),
                            height: Val::Px(10.0),
                            ..default()
                        },
                        BackgroundColor(palette::STAT_BAR_BG),
                        children![(
                            Name::new("Bracket Progress Fill"),
                            Node {
                                width: Val::Percent(progress_percent),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(palette::LOADING_BAR_FILL),
                        )],
                    ),
                    // Starting the run resets the ladder; merely viewing
                    // the bracket (or backing out) does not.
                    widget::button(
                        "Begin Championship",
                        |_: On<Pointer<Click>>,
                         mut tournament: ResMut<TournamentState>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            *tournament = TournamentState::default();
                            next_screen.set(Screen::CharacterSelect);
                        },
                    ),
                    widget::button(
                        "Back",
                        |_: On<Pointer<Click>>, mut next_screen: ResMut<NextState<Screen>>| {
                            next_screen.set(Screen::DifficultySelect);
                        },
                    ),
                ],
            ),
        ],
    ));
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::TournamentBracket), spawn_bracket_screen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_entity_count;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn bracket_screen_spawns_begin_and_back() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_state::<Screen>();
        app.init_resource::<TournamentState>();
        app.add_plugins(plugin);

        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::TournamentBracket);
        app.update();
        app.update(); // Apply deferred

        assert_entity_count::<With<Button>>(&mut app, 2);
    }
}
