//! Top-of-screen stat bars: health for both corners, plus the player's
//! super meter and charge.

use bevy::prelude::*;

use crate::gameplay::fighter::{
    CHARGE_MAX, Charge, Fighter, SUPER_METER_MAX, SuperMeter,
};
use crate::gameplay::{FightSetup, Health, Side};
use crate::screens::Screen;
use crate::theme::palette;
use crate::{GameSet, battle_running};

// === Layout Constants ===

const BAR_WIDTH: f32 = 420.0;
const BAR_HEIGHT: f32 = 22.0;
const SUB_BAR_HEIGHT: f32 = 10.0;
const HUD_PADDING: f32 = 16.0;

// === Components ===

/// Which stat a bar's fill node tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Stat {
    PlayerHealth,
    OpponentHealth,
    SuperMeter,
    Charge,
}

/// Marker on the inner fill node of a stat bar; its width follows the
/// stat's percentage.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct StatBarFill(pub Stat);

// === Systems ===

/// A fixed-width bar whose fill node is resized each frame.
fn stat_bar(height: f32, fill_color: Color, stat: Stat) -> impl Bundle {
    (
        Name::new("Stat Bar"),
        Node {
            width: Val::Px(BAR_WIDTH),
            height: Val::Px(height),
            ..default()
        },
        BackgroundColor(palette::STAT_BAR_BG),
        children![(
            Name::new("Stat Bar Fill"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(fill_color),
            StatBarFill(stat),
        )],
    )
}

/// Spawns the HUD frame: player panel on the left, opponent panel on
/// the right.
fn spawn_stat_bars(mut commands: Commands, setup: Res<FightSetup>) {
    commands.spawn((
        Name::new("Battle HUD Bars"),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding: UiRect::all(Val::Px(HUD_PADDING)),
            ..default()
        },
        DespawnOnExit(Screen::Battle),
        children![
            // === Player corner ===
            (
                Name::new("Player Panel"),
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
                children![
                    (
                        Text::new(format!(
                            "{} — {}",
                            setup.character.display_name(),
                            setup.character.title()
                        )),
                        TextFont::from_font_size(palette::FONT_SIZE_HUD),
                        TextColor(palette::HEADER_TEXT),
                    ),
                    stat_bar(BAR_HEIGHT, palette::HEALTH_BAR_FILL, Stat::PlayerHealth),
                    stat_bar(SUB_BAR_HEIGHT, palette::SUPER_METER_FILL, Stat::SuperMeter),
                    stat_bar(SUB_BAR_HEIGHT, palette::CHARGE_FILL, Stat::Charge),
                ],
            ),
            // === Opponent corner ===
            (
                Name::new("Opponent Panel"),
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::FlexEnd,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
                children![
                    (
                        Text::new(setup.opponent.display_name()),
                        TextFont::from_font_size(palette::FONT_SIZE_HUD),
                        TextColor(palette::HEADER_TEXT),
                    ),
                    stat_bar(BAR_HEIGHT, palette::HEALTH_BAR_FILL, Stat::OpponentHealth),
                ],
            ),
        ],
    ));
}

/// Resizes every fill node to its stat's current percentage.
fn update_stat_bars(
    fighters: Query<(&Side, &Health, &SuperMeter, &Charge), With<Fighter>>,
    mut fills: Query<(&StatBarFill, &mut Node)>,
) {
    for (fill, mut node) in &mut fills {
        let percent = fighters
            .iter()
            .find_map(|(side, health, meter, charge)| {
                let value = match fill.0 {
                    Stat::PlayerHealth if *side == Side::Player => {
                        health.current / health.max
                    }
                    Stat::OpponentHealth if *side == Side::Opponent => {
                        health.current / health.max
                    }
                    Stat::SuperMeter if *side == Side::Player => {
                        meter.value / SUPER_METER_MAX
                    }
                    Stat::Charge if *side == Side::Player => charge.points / CHARGE_MAX,
                    _ => return None,
                };
                Some(value.clamp(0.0, 1.0) * 100.0)
            });

        if let Some(percent) = percent {
            node.width = Val::Percent(percent);
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<StatBarFill>();

    app.add_systems(OnEnter(Screen::Battle), spawn_stat_bars);

    app.add_systems(
        Update,
        update_stat_bars.in_set(GameSet::Ui).run_if(battle_running),
    );
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::testing::{assert_entity_count, spawn_test_fighter};
    use pretty_assertions::assert_eq;

    fn create_bars_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<FightSetup>();
        app.add_systems(Update, update_stat_bars);
        app
    }

    fn spawn_fill(app: &mut App, stat: Stat) -> Entity {
        app.world_mut()
            .spawn((
                Node {
                    width: Val::Percent(100.0),
                    ..default()
                },
                StatBarFill(stat),
            ))
            .id()
    }

    fn width_of(app: &App, fill: Entity) -> Val {
        app.world().get::<Node>(fill).unwrap().width
    }

    #[test]
    fn health_fill_follows_damage() {
        let mut app = create_bars_test_app();
        let player = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        let fill = spawn_fill(&mut app, Stat::PlayerHealth);

        app.world_mut().get_mut::<Health>(player).unwrap().current = 25.0;
        app.update();

        assert_eq!(width_of(&app, fill), Val::Percent(25.0));
    }

    #[test]
    fn opponent_fill_reads_the_other_corner() {
        let mut app = create_bars_test_app();
        let player = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        let opponent = spawn_test_fighter(app.world_mut(), Side::Opponent, 3.0);
        let fill = spawn_fill(&mut app, Stat::OpponentHealth);

        app.world_mut().get_mut::<Health>(player).unwrap().current = 10.0;
        app.world_mut().get_mut::<Health>(opponent).unwrap().current = 60.0;
        app.update();

        assert_eq!(width_of(&app, fill), Val::Percent(60.0));
    }

    #[test]
    fn charge_fill_tracks_banked_points() {
        let mut app = create_bars_test_app();
        let player = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        let fill = spawn_fill(&mut app, Stat::Charge);

        app.world_mut().get_mut::<Charge>(player).unwrap().points = 90.0;
        app.update();

        assert_eq!(width_of(&app, fill), Val::Percent(50.0));
    }

    #[test]
    fn hud_frame_spawns_four_bars() {
        use bevy::state::app::StatesPlugin;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_state::<Screen>();
        app.init_resource::<FightSetup>();
        app.add_systems(OnEnter(Screen::Battle), spawn_stat_bars);

        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::Battle);
        app.update();
        app.update(); // Apply deferred children

        assert_entity_count::<With<StatBarFill>>(&mut app, 4);
    }
}
