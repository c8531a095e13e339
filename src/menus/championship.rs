//! Championship overlay: the ladder is beaten.

use bevy::prelude::*;

use crate::gameplay::FightSetup;
use crate::screens::Screen;
use crate::theme::{palette, widget};

use super::Menu;

fn spawn_championship_overlay(mut commands: Commands, setup: Res<FightSetup>) {
    commands.spawn((
        widget::ui_root("Championship Overlay"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Menu::Championship),
        children![
            (
                Name::new("Championship Panel"),
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
                        Text::new("CHAMPION"),
                        TextFont::from_font_size(palette::FONT_SIZE_HEADER),
                        TextColor(palette::VICTORY_TEXT),
                    ),
                    widget::label(format!(
                        "{} — {} rules the arena",
                        setup.character.display_name(),
                        setup.character.title()
                    )),
                    widget::button(
                        "New Tournament",
                        |_: On<Pointer<Click>>,
                         mut next_menu: ResMut<NextState<Menu>>,
                         mut next_screen: ResMut<NextState<Screen>>| {
                            next_menu.set(Menu::None);
                            next_screen.set(Screen::TournamentBracket);
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
    app.add_systems(OnEnter(Menu::Championship), spawn_championship_overlay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_entity_count;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn championship_overlay_offers_two_paths() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_state::<Screen>();
        app.init_state::<Menu>();
        app.init_resource::<FightSetup>();
        app.add_plugins(plugin);

        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::Championship);
        app.update();
        app.update(); // Apply deferred

        assert_entity_count::<With<Button>>(&mut app, 2);
    }
}
