//! Pause overlay: Esc toggles it during a battle.

use bevy::prelude::*;

use crate::screens::Screen;
use crate::theme::{palette, widget};

use super::Menu;

fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    current: Res<State<Menu>>,
    mut next_menu: ResMut<NextState<Menu>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match current.get() {
        Menu::None => next_menu.set(Menu::Pause),
        Menu::Pause => next_menu.set(Menu::None),
        // Esc does nothing over the endgame overlays.
        _ => {}
    }
}

fn spawn_pause_overlay(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Pause Overlay"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Menu::Pause),
        children![
            (
                Text::new("PAUSED"),
                TextFont::from_font_size(palette::FONT_SIZE_HEADER),
                TextColor(palette::HEADER_TEXT),
            ),
            widget::button(
                "Resume",
                |_: On<Pointer<Click>>, mut next_menu: ResMut<NextState<Menu>>| {
                    next_menu.set(Menu::None);
                },
            ),
            widget::button(
                "Quit to Title",
                |_: On<Pointer<Click>>,
                 mut next_menu: ResMut<NextState<Menu>>,
                 mut next_screen: ResMut<NextState<Screen>>| {
                    next_menu.set(Menu::None);
                    next_screen.set(Screen::Title);
                },
            ),
        ],
    ));
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Pause), spawn_pause_overlay);
    app.add_systems(
        Update,
        toggle_pause.run_if(in_state(Screen::Battle)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_pause_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<Menu>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, toggle_pause);
        app
    }

    fn press_escape(app: &mut App) {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        // Release first so a repeated press registers as just_pressed again.
        keyboard.release(KeyCode::Escape);
        keyboard.clear();
        keyboard.press(KeyCode::Escape);
        app.update();
        app.update(); // Apply the state transition
    }

    #[test]
    fn escape_toggles_the_pause_overlay() {
        let mut app = create_pause_test_app();

        press_escape(&mut app);
        assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::Pause);

        press_escape(&mut app);
        assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::None);
    }

    #[test]
    fn escape_ignores_the_endgame_overlays() {
        let mut app = create_pause_test_app();
        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::Victory);
        app.update();

        press_escape(&mut app);
        assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::Victory);
    }
}
