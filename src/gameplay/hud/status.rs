//! HUD status line: combo counter, battle timer, weather badge, and
//! one-shot combat flashes (perfect guard, super).

use bevy::prelude::*;

use crate::gameplay::FightSetup;
use crate::gameplay::battle::BattleSession;
use crate::gameplay::combat::CombatPulse;
use crate::gameplay::weather::Weather;
use crate::screens::Screen;
use crate::theme::palette;
use crate::{GameSet, battle_running};

/// How long a combat flash stays on screen.
const FLASH_SECS: f32 = 0.8;

// === Components ===

/// Marker for the combo counter text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ComboCounterText;

/// Marker for the battle timer text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct BattleTimerText;

/// A transient center-screen flash; despawned when its timer runs out.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct CombatFlash {
    pub timer: Timer,
}

// === Systems ===

fn spawn_status_line(mut commands: Commands, weather: Res<Weather>) {
    commands.spawn((
        Name::new("Battle Status Line"),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(90.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding: UiRect::horizontal(Val::Px(16.0)),
            ..default()
        },
        DespawnOnExit(Screen::Battle),
        children![
            (
                Text::new("0 COMBO"),
                TextFont::from_font_size(palette::FONT_SIZE_HUD),
                TextColor(palette::COMBO_TEXT),
                ComboCounterText,
            ),
            (
                Text::new("00:00"),
                TextFont::from_font_size(palette::FONT_SIZE_HUD),
                TextColor(palette::HEADER_TEXT),
                BattleTimerText,
            ),
            (
                Text::new(weather.kind.display_name()),
                TextFont::from_font_size(palette::FONT_SIZE_HUD),
                TextColor(palette::BODY_TEXT),
            ),
        ],
    ));
}

fn update_combo_text(
    session: Res<BattleSession>,
    mut text: Single<&mut Text, With<ComboCounterText>>,
) {
    **text = Text::new(format!("{} COMBO", session.combo));
}

fn update_battle_timer(
    time: Res<Time<Virtual>>,
    session: Res<BattleSession>,
    mut text: Single<&mut Text, With<BattleTimerText>>,
) {
    let elapsed = time.elapsed_secs() - session.started_at;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_secs = elapsed.max(0.0) as u32;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    **text = Text::new(format!("{minutes:02}:{seconds:02}"));
}

/// Turns combat pulses into center-screen flashes.
fn spawn_combat_flashes(
    mut pulses: MessageReader<CombatPulse>,
    setup: Res<FightSetup>,
    mut commands: Commands,
) {
    for pulse in pulses.read() {
        let (message, color) = match pulse {
            CombatPulse::PerfectGuard => ("PERFECT GUARD", palette::PERFECT_GUARD_TEXT),
            CombatPulse::SuperFlash => {
                (setup.character.super_move_name(), palette::SUPER_FLASH_TEXT)
            }
        };
        commands.spawn((
            Name::new("Combat Flash"),
            Text::new(message),
            TextFont::from_font_size(palette::FONT_SIZE_HEADER),
            TextColor(color),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(50.0),
                top: Val::Percent(35.0),
                ..default()
            },
            CombatFlash {
                timer: Timer::from_seconds(FLASH_SECS, TimerMode::Once),
            },
            DespawnOnExit(Screen::Battle),
        ));
    }
}

fn expire_combat_flashes(
    time: Res<Time>,
    mut flashes: Query<(Entity, &mut CombatFlash)>,
    mut commands: Commands,
) {
    for (entity, mut flash) in &mut flashes {
        flash.timer.tick(time.delta());
        if flash.timer.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ComboCounterText>()
        .register_type::<BattleTimerText>()
        .register_type::<CombatFlash>();

    app.add_systems(OnEnter(Screen::Battle), spawn_status_line);

    app.add_systems(
        Update,
        (
            update_combo_text,
            update_battle_timer,
            spawn_combat_flashes,
            expire_combat_flashes,
        )
            .in_set(GameSet::Ui)
            .run_if(battle_running),
    );
}
