//! Battle screen setup: arena geometry, lighting, weather fog, and the
//! two fighters.
//!
//! Everything here is presentation or spawning; the per-frame combat
//! systems live under `gameplay` and run headless without any of it.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use crate::gameplay::ai::AiController;
use crate::gameplay::fighter::{CharacterId, spawn_fighter};
use crate::gameplay::weather::Weather;
use crate::gameplay::{FLOOR_Y, FightSetup, Side};
use crate::theme::palette;

use super::Screen;

// === Constants ===

/// Arena floor edge length.
const ARENA_SIZE: f32 = 20.0;

/// Side walls sit just outside the playable clamp.
const WALL_X: f32 = 10.0;

/// Fighters open the round three units either side of center.
const OPENING_OFFSET: f32 = 3.0;

/// Fog runs from this distance out to `FOG_END / visibility`.
const FOG_START: f32 = 10.0;
const FOG_END: f32 = 100.0;

// === Systems ===

/// Spawns both corners: the player's pick on the left, the chosen
/// challenger (AI-driven) on the right, facing each other.
fn spawn_fighters(mut commands: Commands, setup: Res<FightSetup>) {
    let left = Vec3::new(-OPENING_OFFSET, FLOOR_Y, 0.0);
    let right = Vec3::new(OPENING_OFFSET, FLOOR_Y, 0.0);

    let player = spawn_fighter(&mut commands, setup.character, Side::Player, left);
    commands
        .entity(player)
        .insert(Transform::from_translation(left).looking_at(right, Vec3::Y));

    let opponent = spawn_fighter(&mut commands, setup.opponent, Side::Opponent, right);
    commands.entity(opponent).insert((
        AiController::new(setup.difficulty),
        Transform::from_translation(right).looking_at(left, Vec3::Y),
    ));
}

/// Attaches block meshes to the fighters and builds the arena.
/// Skipped entirely in headless runs where the asset stores are absent.
fn setup_arena_visuals(
    fighters: Query<(Entity, &CharacterId, &Side)>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    mut commands: Commands,
) {
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };

    // Fighters are the classic 1×2×1 blocks in their signature color;
    // the challenger is always tinted red.
    let block = meshes.add(Cuboid::new(1.0, 2.0, 1.0));
    for (entity, character, side) in &fighters {
        let color = match side {
            Side::Player => character.color(),
            Side::Opponent => palette::OPPONENT_BLOCK,
        };
        commands.entity(entity).insert((
            Mesh3d(block.clone()),
            MeshMaterial3d(materials.add(color)),
        ));
    }

    commands.spawn((
        Name::new("Arena Floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ARENA_SIZE, ARENA_SIZE))),
        MeshMaterial3d(materials.add(palette::ARENA_FLOOR)),
        Transform::default(),
        DespawnOnExit(Screen::Battle),
    ));

    let wall = meshes.add(Cuboid::new(0.5, 2.0, ARENA_SIZE));
    let wall_material = materials.add(palette::ARENA_WALL);
    for x in [-WALL_X, WALL_X] {
        commands.spawn((
            Name::new("Arena Wall"),
            Mesh3d(wall.clone()),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_xyz(x, 1.0, 0.0),
            DespawnOnExit(Screen::Battle),
        ));
    }

    commands.spawn((
        Name::new("Key Light"),
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(Screen::Battle),
    ));
}

/// Thickens the air to the rolled weather's visibility factor.
fn apply_weather_fog(
    weather: Res<Weather>,
    camera: Single<Entity, With<Camera3d>>,
    mut commands: Commands,
) {
    commands.entity(*camera).insert(DistanceFog {
        color: palette::SKY,
        falloff: FogFalloff::Linear {
            start: FOG_START,
            end: FOG_END / weather.effects().visibility,
        },
        ..default()
    });
}

fn clear_weather_fog(camera: Single<Entity, With<Camera3d>>, mut commands: Commands) {
    commands.entity(*camera).remove::<DistanceFog>();
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(Screen::Battle),
        (spawn_fighters, setup_arena_visuals, apply_weather_fog).chain(),
    );
    app.add_systems(OnExit(Screen::Battle), clear_weather_fog);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::fighter::Fighter;
    use crate::gameplay::tournament::TournamentState;
    use crate::testing::assert_entity_count;
    use bevy::state::app::StatesPlugin;
    use pretty_assertions::assert_eq;

    fn create_battle_screen_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_state::<Screen>();
        app.init_resource::<Weather>();
        app.init_resource::<TournamentState>();
        app.init_resource::<FightSetup>();
        app.add_systems(OnEnter(Screen::Battle), spawn_fighters);
        app
    }

    #[test]
    fn entering_battle_spawns_both_corners() {
        let mut app = create_battle_screen_app();

        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::Battle);
        app.update();
        app.update(); // Apply deferred

        assert_entity_count::<With<Fighter>>(&mut app, 2);
        assert_entity_count::<With<AiController>>(&mut app, 1);
    }

    #[test]
    fn fighters_open_at_their_corners() {
        let mut app = create_battle_screen_app();

        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::Battle);
        app.update();
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<(&Side, &Transform), With<Fighter>>();
        for (side, transform) in query.iter(app.world()) {
            let expected = match side {
                Side::Player => -OPENING_OFFSET,
                Side::Opponent => OPENING_OFFSET,
            };
            assert_eq!(transform.translation.x, expected);
            assert_eq!(transform.translation.y, FLOOR_Y);
        }
    }

    #[test]
    fn leaving_battle_despawns_the_fighters() {
        let mut app = create_battle_screen_app();

        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::Battle);
        app.update();
        app.update();
        assert_entity_count::<With<Fighter>>(&mut app, 2);

        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::Title);
        app.update();
        app.update();

        assert_entity_count::<With<Fighter>>(&mut app, 0);
    }
}
