//! Title screen: pick a game mode.

use bevy::prelude::*;

use crate::gameplay::ai::Difficulty;
use crate::gameplay::{FightSetup, GameMode};
use crate::theme::{palette, widget};

use super::Screen;

fn spawn_title_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Title Screen"),
        DespawnOnExit(Screen::Title),
        children![
            (
                Name::new("Title Panel"),
                Node {
                    width: Val::Px(560.0),
                    min_height: Val::Px(480.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::SpaceBetween,
                    padding: UiRect::all(Val::Px(40.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(palette::PANEL_BACKGROUND),
                BorderColor::all(palette::PANEL_BORDER),
                children![
                    (
                        Text::new("Blocken Championship"),
                        TextFont::from_font_size(palette::FONT_SIZE_TITLE),
                        TextColor(palette::HEADER_TEXT),
                    ),
                    widget::button(
                        "Tournament",
                        |_: On<Pointer<Click>>,
                         mut setup: ResMut<FightSetup>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            setup.mode = GameMode::Tournament;
                            next_screen.set(Screen::DifficultySelect);
                        },
                    ),
                    widget::button(
                        "Quick Fight",
                        |_: On<Pointer<Click>>,
                         mut setup: ResMut<FightSetup>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            setup.mode = GameMode::Quick;
                            next_screen.set(Screen::DifficultySelect);
                        },
                    ),
                    // Training skips difficulty select and always fights easy.
                    widget::button(
                        "Training",
                        |_: On<Pointer<Click>>,
                         mut setup: ResMut<FightSetup>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            setup.mode = GameMode::Training;
                            setup.difficulty = Difficulty::Easy;
                            next_screen.set(Screen::CharacterSelect);
                        },
                    ),
                ],
            ),
        ],
    ));
}

/// A fresh visit to the title screen clears every previous selection.
fn reset_fight_setup(mut setup: ResMut<FightSetup>) {
    *setup = FightSetup::default();
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(Screen::Title),
        (reset_fight_setup, spawn_title_screen),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_entity_count;
    use bevy::state::app::StatesPlugin;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_screen_spawns_three_mode_buttons() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_state::<Screen>();
        app.init_resource::<FightSetup>();
        app.add_plugins(plugin);

        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::Title);
        app.update();
        app.update(); // Apply deferred

        assert_entity_count::<With<Button>>(&mut app, 3);
    }

    #[test]
    fn entering_title_resets_the_setup() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_state::<Screen>();
        app.insert_resource(FightSetup {
            mode: GameMode::Tournament,
            difficulty: Difficulty::Expert,
            ..default()
        });
        app.add_plugins(plugin);

        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::Title);
        app.update();

        let setup = app.world().resource::<FightSetup>();
        assert_eq!(setup.mode, GameMode::Quick);
        assert_eq!(setup.difficulty, Difficulty::Medium);
    }
}
