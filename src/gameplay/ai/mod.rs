//! Opponent AI: distance-banded weighted decisions with a reaction delay.
//!
//! The controller ticks on a fixed one-second cadence, independent of
//! frame rate. Each tick it may draw an action from a weighted table
//! keyed by the distance band to the player; the chosen action executes
//! after the difficulty's reaction latency and re-validates the
//! fighter's state at fire time. Band selection and the tables are pure
//! functions over a pre-drawn roll, so they test without an RNG.

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::fighter::{Action, CommandKind, Fighter, FighterCommand, SuperMeter};
use crate::gameplay::{ARENA_HALF_EXTENT, MELEE_RANGE};
use crate::{GameSet, battle_running};

// === Constants ===

/// Seconds between AI decision ticks.
pub const DECISION_PERIOD_SECS: f32 = 1.0;

/// Outer edge of the mid band; beyond this the AI bides its time.
pub const MID_BAND_RANGE: f32 = 6.0;

/// Step toward the player when advancing.
pub const ADVANCE_STEP: f32 = 0.05;

/// Step away from the player when retreating.
pub const RETREAT_STEP: f32 = 0.08;

// === Difficulty ===

/// Opponent difficulty tier. Scales reaction latency and aggression,
/// never the decision tables themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

/// Tuning knobs for one difficulty tier.
#[derive(Debug, Clone, Copy)]
pub struct AiProfile {
    /// Delay between choosing an action and executing it.
    pub reaction_secs: f32,
    /// Chance per decision tick that the AI acts at all.
    pub aggression: f32,
}

impl Difficulty {
    /// All tiers, for the selection screen.
    pub const ALL: &[Self] = &[Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    /// Look up the tuning profile for a tier.
    #[must_use]
    pub const fn profile(self) -> AiProfile {
        match self {
            Self::Easy => AiProfile {
                reaction_secs: 0.8,
                aggression: 0.3,
            },
            Self::Medium => AiProfile {
                reaction_secs: 0.5,
                aggression: 0.6,
            },
            Self::Hard => AiProfile {
                reaction_secs: 0.3,
                aggression: 0.8,
            },
            Self::Expert => AiProfile {
                reaction_secs: 0.15,
                aggression: 0.9,
            },
        }
    }
}

// === Decision tables ===

/// Distance bands the weighted tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceBand {
    Melee,
    Mid,
    Far,
}

impl DistanceBand {
    /// Classify a center-to-center distance.
    #[must_use]
    pub fn for_distance(distance: f32) -> Self {
        if distance < MELEE_RANGE {
            Self::Melee
        } else if distance < MID_BAND_RANGE {
            Self::Mid
        } else {
            Self::Far
        }
    }
}

/// Everything the AI can decide to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AiChoice {
    Light,
    Heavy,
    Combo,
    Super,
    Guard,
    Advance,
    Retreat,
}

impl AiChoice {
    /// The fighter command this choice maps to, if any. Advance and
    /// retreat are positional and handled by the controller directly.
    #[must_use]
    pub const fn command(self) -> Option<CommandKind> {
        match self {
            Self::Light => Some(CommandKind::Light),
            Self::Heavy => Some(CommandKind::Heavy),
            Self::Combo => Some(CommandKind::Combo),
            Self::Super => Some(CommandKind::Super),
            Self::Guard => Some(CommandKind::Guard),
            Self::Advance | Self::Retreat => None,
        }
    }
}

/// Draw a choice from the band's weighted table using a roll in `[0, 1)`.
///
/// Melee: light 0.3, heavy 0.2, guard 0.1, retreat 0.4.
/// Mid: advance 0.4, combo 0.2, super 0.2 (only with a full meter —
/// that slot is otherwise a no-op, not a re-roll), idle 0.2.
/// Far: never acts.
#[must_use]
pub fn choose(band: DistanceBand, roll: f32, super_ready: bool) -> Option<AiChoice> {
    match band {
        DistanceBand::Melee => {
            if roll < 0.3 {
                Some(AiChoice::Light)
            } else if roll < 0.5 {
                Some(AiChoice::Heavy)
            } else if roll < 0.6 {
                Some(AiChoice::Guard)
            } else {
                Some(AiChoice::Retreat)
            }
        }
        DistanceBand::Mid => {
            if roll < 0.4 {
                Some(AiChoice::Advance)
            } else if roll < 0.6 {
                Some(AiChoice::Combo)
            } else if roll < 0.8 {
                super_ready.then_some(AiChoice::Super)
            } else {
                None
            }
        }
        DistanceBand::Far => None,
    }
}

// === Components ===

/// Drives one fighter. Holds the decision cadence and at most one
/// pending action waiting out its reaction latency.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct AiController {
    pub difficulty: Difficulty,
    pub decision: Timer,
    pub pending: Option<PendingAction>,
}

/// A chosen action waiting for the reaction delay to elapse.
#[derive(Debug, Clone, Reflect)]
pub struct PendingAction {
    pub choice: AiChoice,
    pub delay: Timer,
}

impl AiController {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            decision: Timer::from_seconds(DECISION_PERIOD_SECS, TimerMode::Repeating),
            pending: None,
        }
    }
}

// === Systems ===

/// Decision tick: maybe queue a pending action based on the distance band.
fn ai_decide(
    time: Res<Time>,
    mut controllers: Query<(&Transform, &Action, &SuperMeter, &mut AiController), With<Fighter>>,
    target: Query<&Transform, (With<Fighter>, Without<AiController>)>,
) {
    for (transform, action, meter, mut ai) in &mut controllers {
        ai.decision.tick(time.delta());
        if !ai.decision.just_finished() || action.is_stunned() {
            continue;
        }
        let Ok(target_transform) = target.single() else {
            continue;
        };

        let profile = ai.difficulty.profile();
        let mut rng = rand::rng();
        if rng.random::<f32>() >= profile.aggression {
            continue;
        }

        let distance = transform.translation.distance(target_transform.translation);
        let band = DistanceBand::for_distance(distance);
        if let Some(choice) = choose(band, rng.random::<f32>(), meter.is_full()) {
            // A fresh decision replaces any plan still waiting.
            ai.pending = Some(PendingAction {
                choice,
                delay: Timer::from_seconds(profile.reaction_secs, TimerMode::Once),
            });
        }
    }
}

/// Executes a pending action once its reaction delay has elapsed,
/// re-checking the fighter's state — a plan made before getting hit
/// is dropped, not replayed.
fn ai_execute(
    time: Res<Time>,
    mut controllers: Query<(Entity, &mut Transform, &Action, &mut AiController), With<Fighter>>,
    target: Query<&Transform, (With<Fighter>, Without<AiController>)>,
    mut outbox: MessageWriter<FighterCommand>,
) {
    for (entity, mut transform, action, mut ai) in &mut controllers {
        let Some(pending) = ai.pending.as_mut() else {
            continue;
        };
        pending.delay.tick(time.delta());
        if !pending.delay.is_finished() {
            continue;
        }
        let choice = pending.choice;
        ai.pending = None;

        if action.is_stunned() {
            continue;
        }

        if let Some(kind) = choice.command() {
            outbox.write(FighterCommand {
                fighter: entity,
                kind,
            });
            continue;
        }

        // Positional choices step directly, on the ground plane.
        let Ok(target_transform) = target.single() else {
            continue;
        };
        let mut toward = target_transform.translation - transform.translation;
        toward.y = 0.0;
        let Some(toward) = toward.try_normalize() else {
            continue;
        };
        let step = if choice == AiChoice::Advance {
            toward * ADVANCE_STEP
        } else {
            -toward * RETREAT_STEP
        };
        transform.translation += step;
        transform.translation.x = transform
            .translation
            .x
            .clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
        transform.translation.z = transform
            .translation
            .z
            .clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<AiController>();

    app.add_systems(
        Update,
        (ai_decide, ai_execute)
            .chain()
            .in_set(GameSet::Ai)
            .run_if(battle_running),
    );
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::gameplay::Side;
    use crate::testing::{spawn_test_fighter, step_time, tick_app};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn create_ai_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_message::<FighterCommand>();
        app.add_systems(Update, (ai_decide, ai_execute).chain());
        step_time(&mut app, Duration::from_millis(50));
        app.update(); // Initialize time (first frame delta=0)
        app
    }

    fn spawn_ai_fighter(app: &mut App, x: f32, difficulty: Difficulty) -> Entity {
        let entity = spawn_test_fighter(app.world_mut(), Side::Opponent, x);
        app.world_mut()
            .entity_mut(entity)
            .insert(AiController::new(difficulty));
        entity
    }

    fn set_pending(app: &mut App, entity: Entity, choice: AiChoice) {
        app.world_mut()
            .get_mut::<AiController>(entity)
            .unwrap()
            .pending = Some(PendingAction {
            choice,
            delay: Timer::from_seconds(0.01, TimerMode::Once),
        });
    }

    fn drain_commands(app: &mut App) -> Vec<FighterCommand> {
        app.world_mut()
            .resource_mut::<Messages<FighterCommand>>()
            .drain()
            .collect()
    }

    #[test]
    fn far_opponent_never_queues_an_action() {
        let mut app = create_ai_test_app();
        let _player = spawn_test_fighter(app.world_mut(), Side::Player, -9.0);
        let ai = spawn_ai_fighter(&mut app, 9.0, Difficulty::Expert);

        // Several full decision periods.
        tick_app(&mut app, 60);

        let controller = app.world().get::<AiController>(ai).unwrap();
        assert!(controller.pending.is_none());
        assert!(drain_commands(&mut app).is_empty());
    }

    #[test]
    fn stunned_opponent_skips_its_decision_tick() {
        let mut app = create_ai_test_app();
        let _player = spawn_test_fighter(app.world_mut(), Side::Player, -1.0);
        let ai = spawn_ai_fighter(&mut app, 1.0, Difficulty::Expert);
        // Keep the fighter stunned across every decision tick.
        for _ in 0..40 {
            *app.world_mut().get_mut::<Action>(ai).unwrap() = Action::stun();
            app.update();
        }

        let controller = app.world().get::<AiController>(ai).unwrap();
        assert!(controller.pending.is_none());
    }

    #[test]
    fn pending_attack_becomes_a_fighter_command() {
        let mut app = create_ai_test_app();
        let _player = spawn_test_fighter(app.world_mut(), Side::Player, -1.0);
        let ai = spawn_ai_fighter(&mut app, 1.0, Difficulty::Medium);
        set_pending(&mut app, ai, AiChoice::Light);

        app.update();

        let commands = drain_commands(&mut app);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].fighter, ai);
        assert_eq!(commands[0].kind, CommandKind::Light);
        let controller = app.world().get::<AiController>(ai).unwrap();
        assert!(controller.pending.is_none());
    }

    #[test]
    fn stale_pending_action_is_dropped_when_stunned() {
        let mut app = create_ai_test_app();
        let _player = spawn_test_fighter(app.world_mut(), Side::Player, -1.0);
        let ai = spawn_ai_fighter(&mut app, 1.0, Difficulty::Medium);
        set_pending(&mut app, ai, AiChoice::Heavy);
        *app.world_mut().get_mut::<Action>(ai).unwrap() = Action::stun();

        app.update();

        assert!(drain_commands(&mut app).is_empty());
        let controller = app.world().get::<AiController>(ai).unwrap();
        assert!(controller.pending.is_none(), "stale plan must be discarded");
    }

    #[test]
    fn advance_steps_toward_the_player() {
        let mut app = create_ai_test_app();
        let _player = spawn_test_fighter(app.world_mut(), Side::Player, -4.0);
        let ai = spawn_ai_fighter(&mut app, 4.0, Difficulty::Medium);
        set_pending(&mut app, ai, AiChoice::Advance);

        app.update();

        let transform = app.world().get::<Transform>(ai).unwrap();
        assert!(
            (transform.translation.x - (4.0 - ADVANCE_STEP)).abs() < 1e-4,
            "expected step toward player, x = {}",
            transform.translation.x
        );
    }

    #[test]
    fn retreat_steps_away_and_clamps_to_the_arena() {
        let mut app = create_ai_test_app();
        let _player = spawn_test_fighter(app.world_mut(), Side::Player, -4.0);
        let ai = spawn_ai_fighter(&mut app, ARENA_HALF_EXTENT, Difficulty::Medium);
        set_pending(&mut app, ai, AiChoice::Retreat);

        app.update();

        let transform = app.world().get::<Transform>(ai).unwrap();
        assert_eq!(transform.translation.x, ARENA_HALF_EXTENT);
    }
}
