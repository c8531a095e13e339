//! Dynamic weather: the five arena conditions, their numeric effects,
//! and the falling particle field.

use bevy::prelude::*;
use rand::Rng;

use crate::screens::Screen;
use crate::{GameSet, battle_running};

// === Constants ===

/// Most particles ever spawned, regardless of the weather's density.
pub const PARTICLE_CAP: u32 = 5000;

/// Particle fall speed (0.1 units per tick at the 60 Hz reference).
pub const PARTICLE_FALL_SPEED: f32 = 6.0;

/// Horizontal spread of the particle volume (±this on x and z).
const VOLUME_HALF_EXTENT: f32 = 20.0;

/// Height particles recycle to after falling below the floor.
const VOLUME_TOP: f32 = 20.0;

// === Weather table ===

/// Numeric effects a weather applies to the battle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherEffects {
    /// Fog density scale for the renderer; 1.0 is a clear sky.
    pub visibility: f32,
    /// Multiplier on player movement speed.
    pub movement: f32,
    /// Nominal particle count before [`PARTICLE_CAP`] applies.
    pub particle_density: u32,
}

/// Arena weather conditions, one rolled per battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum WeatherKind {
    #[default]
    Clear,
    Rain,
    Storm,
    Snow,
    Fog,
}

impl WeatherKind {
    /// All conditions, for the roll.
    pub const ALL: &[Self] = &[Self::Clear, Self::Rain, Self::Storm, Self::Snow, Self::Fog];

    /// Arena billing name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Clear => "Clear Championship",
            Self::Rain => "Storm Arena",
            Self::Storm => "Thunder Dome",
            Self::Snow => "Winter Tournament",
            Self::Fog => "Mystic Arena",
        }
    }

    /// Numeric effects for this condition.
    #[must_use]
    pub const fn effects(self) -> WeatherEffects {
        match self {
            Self::Clear => WeatherEffects {
                visibility: 1.0,
                movement: 1.0,
                particle_density: 0,
            },
            Self::Rain => WeatherEffects {
                visibility: 0.8,
                movement: 0.92,
                particle_density: 8000,
            },
            Self::Storm => WeatherEffects {
                visibility: 0.7,
                movement: 0.85,
                particle_density: 12000,
            },
            Self::Snow => WeatherEffects {
                visibility: 0.9,
                movement: 0.8,
                particle_density: 6000,
            },
            Self::Fog => WeatherEffects {
                visibility: 0.6,
                movement: 1.0,
                particle_density: 4000,
            },
        }
    }

    /// Particle tint for the renderer.
    #[must_use]
    pub const fn particle_color(self) -> Color {
        match self {
            Self::Rain => Color::srgb(0.53, 0.81, 0.92),
            Self::Storm => Color::srgb(0.27, 0.51, 0.71),
            Self::Snow | Self::Clear => Color::WHITE,
            Self::Fog => Color::srgb(0.75, 0.75, 0.75),
        }
    }

    /// Particle radius for the renderer.
    #[must_use]
    pub const fn particle_size(self) -> f32 {
        match self {
            Self::Clear | Self::Rain => 0.1,
            Self::Storm => 0.15,
            Self::Snow => 0.2,
            Self::Fog => 0.3,
        }
    }
}

// === Resources ===

/// The weather selected for the upcoming (or running) battle.
/// Re-rolled every time the character select screen is shown.
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct Weather {
    pub kind: WeatherKind,
}

impl Weather {
    #[must_use]
    pub const fn effects(&self) -> WeatherEffects {
        self.kind.effects()
    }
}

// === Components ===

/// One falling particle of the active weather.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct WeatherParticle {
    pub fall_speed: f32,
}

// === Systems ===

/// Roll a fresh condition for the next battle.
fn roll_weather(mut weather: ResMut<Weather>) {
    let index = rand::rng().random_range(0..WeatherKind::ALL.len());
    weather.kind = WeatherKind::ALL[index];
}

/// Spawns the particle field for the rolled weather.
///
/// Mesh/material assets are attached only when the render asset stores
/// exist, so the field also spawns (as bare transforms) in headless runs.
fn spawn_particles(
    weather: Res<Weather>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    mut commands: Commands,
) {
    let count = weather.effects().particle_density.min(PARTICLE_CAP);
    if count == 0 {
        return;
    }

    let visual = match (meshes, materials) {
        (Some(mut meshes), Some(mut materials)) => {
            let mesh = meshes.add(Sphere::new(weather.kind.particle_size()));
            let material = materials.add(StandardMaterial {
                base_color: weather.kind.particle_color().with_alpha(0.6),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            });
            Some((mesh, material))
        }
        _ => None,
    };

    let mut rng = rand::rng();
    for _ in 0..count {
        let position = Vec3::new(
            rng.random_range(-VOLUME_HALF_EXTENT..VOLUME_HALF_EXTENT),
            rng.random_range(10.0..30.0),
            rng.random_range(-VOLUME_HALF_EXTENT..VOLUME_HALF_EXTENT),
        );
        let mut particle = commands.spawn((
            WeatherParticle {
                fall_speed: PARTICLE_FALL_SPEED,
            },
            Transform::from_translation(position),
            DespawnOnExit(Screen::Battle),
        ));
        if let Some((mesh, material)) = &visual {
            particle.insert((Mesh3d(mesh.clone()), MeshMaterial3d(material.clone())));
        }
    }
}

/// Advances the particle field, recycling anything below the floor back
/// to the top of the volume.
fn advance_particles(time: Res<Time>, mut particles: Query<(&WeatherParticle, &mut Transform)>) {
    for (particle, mut transform) in &mut particles {
        transform.translation.y = particle
            .fall_speed
            .mul_add(-time.delta_secs(), transform.translation.y);
        if transform.translation.y < 0.0 {
            transform.translation.y = VOLUME_TOP;
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Weather>()
        .register_type::<WeatherParticle>()
        .init_resource::<Weather>();

    app.add_systems(OnEnter(Screen::CharacterSelect), roll_weather);
    app.add_systems(OnEnter(Screen::Battle), spawn_particles);

    app.add_systems(
        Update,
        advance_particles
            .in_set(GameSet::Effects)
            .run_if(battle_running),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clear_weather_has_no_particles() {
        let effects = WeatherKind::Clear.effects();
        assert_eq!(effects.particle_density, 0);
        assert!((effects.movement - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn effects_table_matches_the_weather_board() {
        assert_eq!(WeatherKind::Rain.effects().particle_density, 8000);
        assert_eq!(WeatherKind::Storm.effects().particle_density, 12_000);
        assert_eq!(WeatherKind::Snow.effects().particle_density, 6000);
        assert_eq!(WeatherKind::Fog.effects().particle_density, 4000);
        assert!((WeatherKind::Fog.effects().visibility - 0.6).abs() < f32::EPSILON);
        assert!((WeatherKind::Snow.effects().movement - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn every_weather_slows_or_keeps_movement() {
        for kind in WeatherKind::ALL {
            let movement = kind.effects().movement;
            assert!(movement > 0.0 && movement <= 1.0, "{kind:?}: {movement}");
        }
    }
}
