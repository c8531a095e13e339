//! Difficulty select: one card per AI tier.

use bevy::prelude::*;

use crate::gameplay::ai::Difficulty;
use crate::gameplay::{FightSetup, GameMode};
use crate::theme::{palette, widget};

use super::Screen;

fn spawn_difficulty_screen(mut commands: Commands) {
    commands
        .spawn((
            widget::ui_root("Difficulty Select Screen"),
            DespawnOnExit(Screen::DifficultySelect),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("Difficulty Panel"),
                    Node {
                        width: Val::Px(560.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(16.0),
                        padding: UiRect::all(Val::Px(40.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(palette::PANEL_BACKGROUND),
                    BorderColor::all(palette::PANEL_BORDER),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Text::new("Select Difficulty"),
                        TextFont::from_font_size(palette::FONT_SIZE_HEADER),
                        TextColor(palette::HEADER_TEXT),
                    ));

                    for &difficulty in Difficulty::ALL {
                        parent.spawn(widget::button(
                            difficulty.display_name(),
                            move |_: On<Pointer<Click>>,
                                  mut setup: ResMut<FightSetup>,
                                  mut next_screen: ResMut<NextState<Screen>>| {
                                setup.difficulty = difficulty;
                                // Tournament runs go through the bracket first.
                                next_screen.set(if setup.mode == GameMode::Tournament {
                                    Screen::TournamentBracket
                                } else {
                                    Screen::CharacterSelect
                                });
                            },
                        ));
                    }

                    parent.spawn(widget::button(
                        "Back",
                        |_: On<Pointer<Click>>, mut next_screen: ResMut<NextState<Screen>>| {
                            next_screen.set(Screen::Title);
                        },
                    ));
                });
        });
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::DifficultySelect), spawn_difficulty_screen);
}
