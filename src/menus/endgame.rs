//! Victory and defeat overlays with the battle stats panel.

use bevy::prelude::*;

use crate::gameplay::battle::BattleSession;
use crate::gameplay::tournament::TournamentState;
use crate::gameplay::{FightSetup, GameMode};
use crate::screens::Screen;
use crate::theme::{palette, widget};

use super::Menu;

fn spawn_victory_overlay(
    mut commands: Commands,
    session: Res<BattleSession>,
    setup: Res<FightSetup>,
    time: Res<Time<Virtual>>,
) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let battle_secs = (time.elapsed_secs() - session.started_at).max(0.0) as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_damage = session.total_damage.round() as u32;

    commands.spawn((
        widget::ui_root("Victory Overlay"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Menu::Victory),
        children![
            (
                Name::new("Victory Panel"),
                Node {
                    width: Val::Px(560.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(14.0),
                    padding: UiRect::all(Val::Px(40.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(palette::PANEL_BACKGROUND),
                BorderColor::all(palette::PANEL_BORDER),
                children![
                    (
                        Text::new("VICTORY!"),
                        TextFont::from_font_size(palette::FONT_SIZE_HEADER),
                        TextColor(palette::VICTORY_TEXT),
                    ),
                    widget::label(format!(
                        "{} takes the round",
                        setup.character.display_name()
                    )),
                    widget::label(format!("Total damage: {total_damage}")),
                    widget::label(format!("Best combo: {}", session.max_combo)),
                    widget::label(format!("Perfect guards: {}", session.perfect_guards)),
                    widget::label(format!("Battle time: {battle_secs}s")),
                    widget::button("Continue", continue_after_victory),
                    widget::button(
                        "Main Menu",
                        |_: On<Pointer<Click>>,
                         mut next_menu: ResMut<NextState<Menu>>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            next_menu.set(Menu::None);
                            next_screen.set(Screen::Title);
                        },
                    ),
                ],
            ),
        ],
    ));
}

/// Tournament mode climbs the ladder: next opponent, or the
/// championship overlay once the ladder is exhausted. Other modes head
/// back to the title screen.
fn continue_after_victory(
    _: On<Pointer<Click>>,
    setup: Res<FightSetup>,
    mut tournament: ResMut<TournamentState>,
    mut next_menu: ResMut<NextState<Menu>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if setup.mode == GameMode::Tournament {
        if tournament.advance() {
            next_menu.set(Menu::None);
            next_screen.set(Screen::CharacterSelect);
        } else {
            next_menu.set(Menu::Championship);
        }
    } else {
        next_menu.set(Menu::None);
        next_screen.set(Screen::Title);
    }
}

fn spawn_defeat_overlay(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Defeat Overlay"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Menu::Defeat),
        children![
            (
                Name::new("Defeat Panel"),
                Node {
                    width: Val::Px(560.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(14.0),
                    padding: UiRect::all(Val::Px(40.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(palette::PANEL_BACKGROUND),
                BorderColor::all(palette::PANEL_BORDER),
                children![
                    (
                        Text::new("DEFEAT"),
                        TextFont::from_font_size(palette::FONT_SIZE_HEADER),
                        TextColor(palette::DEFEAT_TEXT),
                    ),
                    widget::button(
                        "Retry",
                        |_: On<Pointer<Click>>,
                         mut next_menu: ResMut<NextState<Menu>>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            next_menu.set(Menu::None);
                            next_screen.set(Screen::CharacterSelect);
                        },
                    ),
                    widget::button(
                        "Main Menu",
                        |_: On<Pointer<Click>>,
                         mut next_menu: ResMut<NextState<Menu>>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            next_menu.set(Menu::None);
                            next_screen.set(Screen::Title);
                        },
                    ),
                ],
            ),
        ],
    ));
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Victory), spawn_victory_overlay);
    app.add_systems(OnEnter(Menu::Defeat), spawn_defeat_overlay);
}
