//! Loading screen: steps a progress bar through the boot captions,
//! then hands off to the title screen.

use bevy::prelude::*;

use crate::theme::{palette, widget};

use super::Screen;

/// Captions shown while the bar fills, in order.
const LOADING_STEPS: &[&str] = &[
    "Initializing combat engine...",
    "Loading AI personalities...",
    "Generating weather systems...",
    "Setting up tournament brackets...",
    "Optimizing visual effects...",
    "Ready for championship!",
];

/// Seconds per caption step.
const STEP_SECS: f32 = 0.3;

const BAR_WIDTH: f32 = 400.0;
const BAR_HEIGHT: f32 = 12.0;

// === Resources ===

/// Tracks how far through the boot captions we are.
#[derive(Resource, Debug)]
struct LoadingProgress {
    timer: Timer,
    step: usize,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(STEP_SECS, TimerMode::Repeating),
            step: 0,
        }
    }
}

// === Components ===

/// Marker for the caption text under the bar.
#[derive(Component, Debug, Clone, Copy)]
struct LoadingCaption;

/// Marker for the bar's fill node.
#[derive(Component, Debug, Clone, Copy)]
struct LoadingBarFill;

// === Systems ===

fn setup_loading_screen(mut commands: Commands) {
    commands.insert_resource(LoadingProgress::default());

    commands.spawn((
        widget::ui_root("Loading Screen"),
        DespawnOnExit(Screen::Loading),
        children![
            widget::header("Blocken Championship"),
            (
                Name::new("Loading Bar"),
                Node {
                    width: Val::Px(BAR_WIDTH),
                    height: Val::Px(BAR_HEIGHT),
                    ..default()
                },
                BackgroundColor(palette::STAT_BAR_BG),
                children![(
                    Name::new("Loading Bar Fill"),
                    Node {
                        width: Val::Percent(0.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(palette::LOADING_BAR_FILL),
                    LoadingBarFill,
                )],
            ),
            (
                widget::label(LOADING_STEPS[0]),
                LoadingCaption,
            ),
        ],
    ));
}

/// Advance the fake boot work; when the last caption has been shown,
/// move on to the title screen.
fn advance_loading(
    time: Res<Time>,
    mut progress: ResMut<LoadingProgress>,
    mut caption: Single<&mut Text, With<LoadingCaption>>,
    mut fill: Single<&mut Node, With<LoadingBarFill>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    progress.timer.tick(time.delta());
    if !progress.timer.just_finished() {
        return;
    }

    progress.step += 1;
    #[allow(clippy::cast_precision_loss)]
    let percent = progress.step as f32 / LOADING_STEPS.len() as f32 * 100.0;
    fill.width = Val::Percent(percent.min(100.0));

    if progress.step >= LOADING_STEPS.len() {
        next_screen.set(Screen::Title);
        return;
    }
    **caption = Text::new(LOADING_STEPS[progress.step]);
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Loading), setup_loading_screen)
        .add_systems(
            Update,
            advance_loading.run_if(in_state(Screen::Loading)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::assertions_on_constants)]
    #[test]
    fn boot_choreography_is_about_two_seconds() {
        #[allow(clippy::cast_precision_loss)]
        let total = LOADING_STEPS.len() as f32 * STEP_SECS;
        assert!(total > 1.0 && total < 3.0, "got {total}");
    }
}
