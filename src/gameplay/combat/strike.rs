//! Advances fighter action timers and fires strikes when windups elapse.
//!
//! This is the timed-state-machine half of combat: every deferred
//! transition (strike, guard expiry, stun recovery) lives in the
//! fighter's [`Action`] and is applied here, so nothing fires into a
//! paused or ended battle — the system simply does not run then.

use bevy::prelude::*;

use crate::gameplay::fighter::{Action, AttackKind, Fighter};

use super::{SlowMotion, Strike};

/// Ticks every fighter's action timer and applies due transitions.
///
/// - Attack windups fire a [`Strike`]; multi-hit strings re-arm the
///   timer until the string is exhausted, then return to idle. A super
///   clears the global slow-motion flag as its strike fires.
/// - Guard windows and stun recoveries simply expire back to idle.
pub(super) fn advance_actions(
    time: Res<Time>,
    mut fighters: Query<(Entity, &mut Action), With<Fighter>>,
    mut strikes: MessageWriter<Strike>,
    mut slow_motion: ResMut<SlowMotion>,
) {
    for (entity, mut action) in &mut fighters {
        let next = match &mut *action {
            Action::Attacking {
                kind,
                strike,
                strikes_left,
            } => {
                strike.tick(time.delta());
                if strike.just_finished() {
                    let kind = *kind;
                    strikes.write(Strike {
                        attacker: entity,
                        kind,
                    });
                    *strikes_left -= 1;
                    if *strikes_left == 0 {
                        if kind == AttackKind::Super {
                            slow_motion.0 = false;
                        }
                        Some(Action::Idle)
                    } else {
                        *strike = Timer::from_seconds(kind.followup_secs(), TimerMode::Once);
                        None
                    }
                } else {
                    None
                }
            }
            Action::Guarding { window } => {
                window.tick(time.delta());
                window.is_finished().then_some(Action::Idle)
            }
            Action::Stunned { recover } => {
                recover.tick(time.delta());
                recover.is_finished().then_some(Action::Idle)
            }
            Action::Idle => None,
        };

        if let Some(next) = next {
            *action = next;
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::gameplay::Side;
    use crate::testing::{spawn_test_fighter, step_time, tick_app};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn create_action_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<SlowMotion>();
        app.add_message::<Strike>();
        app.add_systems(Update, advance_actions);
        step_time(&mut app, Duration::from_millis(50));
        app.update(); // Initialize time (first frame delta=0)
        app
    }

    fn drain_strikes(app: &mut App) -> Vec<Strike> {
        app.world_mut()
            .resource_mut::<Messages<Strike>>()
            .drain()
            .collect()
    }

    #[test]
    fn light_windup_fires_one_strike_then_idles() {
        let mut app = create_action_test_app();
        let fighter = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        *app.world_mut().get_mut::<Action>(fighter).unwrap() =
            Action::attack(AttackKind::Light);

        // 200 ms windup at 50 ms per frame.
        tick_app(&mut app, 4);

        let strikes = drain_strikes(&mut app);
        assert_eq!(strikes.len(), 1);
        assert_eq!(strikes[0].kind, AttackKind::Light);
        let action = app.world().get::<Action>(fighter).unwrap();
        assert!(matches!(action, Action::Idle));
    }

    #[test]
    fn windup_does_not_fire_early() {
        let mut app = create_action_test_app();
        let fighter = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        *app.world_mut().get_mut::<Action>(fighter).unwrap() =
            Action::attack(AttackKind::Heavy);

        // 150 ms elapsed of a 400 ms windup.
        tick_app(&mut app, 3);

        assert!(drain_strikes(&mut app).is_empty());
        let action = app.world().get::<Action>(fighter).unwrap();
        assert!(action.is_attacking());
    }

    #[test]
    fn combo_string_fires_three_strikes_on_cadence() {
        let mut app = create_action_test_app();
        let fighter = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        *app.world_mut().get_mut::<Action>(fighter).unwrap() =
            Action::attack(AttackKind::Combo);

        // Strikes land at 150/300/450 ms; run out to 600 ms.
        tick_app(&mut app, 12);

        let strikes = drain_strikes(&mut app);
        assert_eq!(strikes.len(), 3);
        assert!(strikes.iter().all(|s| s.kind == AttackKind::Combo));
        let action = app.world().get::<Action>(fighter).unwrap();
        assert!(matches!(action, Action::Idle));
    }

    #[test]
    fn super_strike_clears_slow_motion() {
        let mut app = create_action_test_app();
        let fighter = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        app.world_mut().resource_mut::<SlowMotion>().0 = true;
        *app.world_mut().get_mut::<Action>(fighter).unwrap() =
            Action::attack(AttackKind::Super);

        // 1200 ms windup.
        tick_app(&mut app, 24);

        let strikes = drain_strikes(&mut app);
        assert_eq!(strikes.len(), 1);
        assert_eq!(strikes[0].kind, AttackKind::Super);
        assert!(!app.world().resource::<SlowMotion>().0);
    }

    #[test]
    fn guard_window_expires_back_to_idle() {
        let mut app = create_action_test_app();
        let fighter = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        *app.world_mut().get_mut::<Action>(fighter).unwrap() = Action::guard();

        // 300 ms window.
        tick_app(&mut app, 7);

        let action = app.world().get::<Action>(fighter).unwrap();
        assert!(matches!(action, Action::Idle));
    }

    #[test]
    fn stun_recovers_back_to_idle() {
        let mut app = create_action_test_app();
        let fighter = spawn_test_fighter(app.world_mut(), Side::Player, -3.0);
        *app.world_mut().get_mut::<Action>(fighter).unwrap() = Action::stun();

        // 200 ms recovery.
        tick_app(&mut app, 5);

        let action = app.world().get::<Action>(fighter).unwrap();
        assert!(matches!(action, Action::Idle));
    }
}
