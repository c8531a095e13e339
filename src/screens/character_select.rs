//! Character select: roster cards plus the weather rolled for the
//! upcoming battle.

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::fighter::{CharacterId, Specialty};
use crate::gameplay::tournament::TournamentState;
use crate::gameplay::weather::Weather;
use crate::gameplay::{FightSetup, GameMode};
use crate::theme::{palette, widget};

use super::Screen;

fn spawn_character_select(
    mut commands: Commands,
    weather: Res<Weather>,
    setup: Res<FightSetup>,
    tournament: Res<TournamentState>,
) {
    let weather_line = format!("Tonight's arena: {}", weather.kind.display_name());
    let opponent_line = match setup.mode {
        GameMode::Tournament => tournament
            .current_opponent()
            .map(|opponent| format!("Next challenger: {}", opponent.display_name())),
        _ => None,
    };

    commands
        .spawn((
            widget::ui_root("Character Select Screen"),
            DespawnOnExit(Screen::CharacterSelect),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("Character Panel"),
                    Node {
                        width: Val::Px(640.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(14.0),
                        padding: UiRect::all(Val::Px(40.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(palette::PANEL_BACKGROUND),
                    BorderColor::all(palette::PANEL_BORDER),
                ))
                .with_children(|parent| {
                    parent.spawn(widget::header("Choose Your Fighter"));
                    parent.spawn(widget::label(weather_line));
                    if let Some(opponent_line) = opponent_line {
                        parent.spawn(widget::label(opponent_line));
                    }

                    for &character in CharacterId::ALL {
                        let style = match character.specialty() {
                            Specialty::Punches => "punches",
                            Specialty::Kicks => "kicks",
                        };
                        let card = format!(
                            "{} — {} ({style})",
                            character.display_name(),
                            character.title()
                        );
                        parent.spawn(widget::button(
                            card,
                            move |_: On<Pointer<Click>>, mut setup: ResMut<FightSetup>| {
                                setup.character = character;
                            },
                        ));
                    }

                    parent.spawn(widget::button("Fight!", confirm_fight));

                    parent.spawn(widget::button(
                        "Back",
                        |_: On<Pointer<Click>>,
                         setup: Res<FightSetup>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            next_screen.set(if setup.mode == GameMode::Tournament {
                                Screen::TournamentBracket
                            } else {
                                Screen::DifficultySelect
                            });
                        },
                    ));
                });
        });
}

/// Locks in the matchup and starts the battle. Tournament mode fights
/// the next ladder opponent; other modes draw a random challenger.
fn confirm_fight(
    _: On<Pointer<Click>>,
    tournament: Res<TournamentState>,
    mut setup: ResMut<FightSetup>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    setup.opponent = match setup.mode {
        GameMode::Tournament => tournament.current_opponent().unwrap_or_default(),
        GameMode::Quick | GameMode::Training => {
            let index = rand::rng().random_range(0..CharacterId::ALL.len());
            CharacterId::ALL[index]
        }
    };
    next_screen.set(Screen::Battle);
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::CharacterSelect), spawn_character_select);
}
