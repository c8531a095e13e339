//! Battle camera: follows the fighters' midpoint and shakes on big hits.

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::combat::{CameraImpulse, SlowMotion};
use crate::gameplay::fighter::Fighter;
use crate::screens::Screen;
use crate::{GameSet, battle_running};

// === Constants ===

/// Per-frame decay of the shake magnitude.
const SHAKE_DECAY: f32 = 0.9;

/// Shake below this is treated as settled.
const SHAKE_EPSILON: f32 = 1e-3;

/// Camera offset from the fighters' midpoint.
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Offset scale while a super winds up (closer is more dramatic).
const SUPER_ZOOM: f32 = 0.8;

// === Resources ===

/// Current camera shake magnitude. Impulses raise it, and it decays
/// every frame; it is presentation state, not combat state.
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct CameraShake(pub f32);

// === Systems ===

/// Absorb impulses fired by combat this frame. A stronger impulse
/// overrides a weaker running shake; they do not stack.
fn collect_impulses(mut impulses: MessageReader<CameraImpulse>, mut shake: ResMut<CameraShake>) {
    for impulse in impulses.read() {
        shake.0 = shake.0.max(impulse.0);
    }
}

/// Place the camera behind the fighters' midpoint, jittered by the
/// current shake. While a super is winding up the camera pulls in for
/// the slow-motion presentation.
fn follow_fighters(
    shake: Res<CameraShake>,
    slow_motion: Res<SlowMotion>,
    fighters: Query<&Transform, (With<Fighter>, Without<Camera3d>)>,
    mut camera: Single<&mut Transform, With<Camera3d>>,
) {
    let mut midpoint = Vec3::ZERO;
    let mut count = 0_u32;
    for transform in &fighters {
        midpoint += transform.translation;
        count += 1;
    }
    if count == 0 {
        return;
    }
    #[allow(clippy::cast_precision_loss)]
    let midpoint = midpoint / count as f32;

    let jitter = if shake.0 > SHAKE_EPSILON {
        let mut rng = rand::rng();
        Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        ) * shake.0
    } else {
        Vec3::ZERO
    };

    let offset = if slow_motion.0 {
        CAMERA_OFFSET * SUPER_ZOOM
    } else {
        CAMERA_OFFSET
    };
    camera.translation = midpoint + offset + jitter;
    camera.look_at(midpoint, Vec3::Y);
}

/// Let the shake ring down.
fn decay_shake(mut shake: ResMut<CameraShake>) {
    shake.0 *= SHAKE_DECAY;
    if shake.0 < SHAKE_EPSILON {
        shake.0 = 0.0;
    }
}

fn reset_shake(mut shake: ResMut<CameraShake>) {
    shake.0 = 0.0;
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<CameraShake>()
        .init_resource::<CameraShake>();

    app.add_systems(OnEnter(Screen::Battle), reset_shake);

    app.add_systems(
        Update,
        (collect_impulses, follow_fighters, decay_shake)
            .chain()
            .in_set(GameSet::Effects)
            .run_if(battle_running),
    );
}
