//! Fighter components, the character roster, and the per-fighter state machine.

mod commands;
mod tick;

pub use commands::{CommandKind, FighterCommand};

use bevy::prelude::*;

use crate::screens::Screen;
use crate::{GameSet, battle_running};

use super::Health;
use super::Side;

// === Constants ===

/// Maximum hit points for every fighter.
pub const MAX_HEALTH: f32 = 100.0;

/// Super meter ceiling; a super move requires (and consumes) the full bar.
pub const SUPER_METER_MAX: f32 = 100.0;

/// Passive super meter gain per second (0.1 per tick at the 60 Hz reference).
pub const SUPER_METER_REGEN: f32 = 6.0;

/// Maximum charge points (180 ticks of held input at the 60 Hz reference).
pub const CHARGE_MAX: f32 = 180.0;

/// Charge points accrued per second of held input (1 per tick at 60 Hz).
pub const CHARGE_RATE: f32 = 60.0;

/// Charge points per damage-multiplier tier.
pub const CHARGE_LEVEL_STEP: f32 = 36.0;

/// Damage bonus per charge level: `damage *= 1 + level * 0.4`.
pub const CHARGE_LEVEL_BONUS: f32 = 0.4;

/// Duration of the guard window once raised.
pub const GUARD_WINDOW_SECS: f32 = 0.3;

/// Stun duration after taking a damaging hit.
pub const STUN_SECS: f32 = 0.2;

/// Upward launch velocity on jump (0.3 units per tick at 60 Hz).
pub const JUMP_VELOCITY: f32 = 18.0;

/// Downward acceleration while airborne (0.02 units per tick² at 60 Hz).
pub const GRAVITY: f32 = 72.0;

/// Actions allowed after leaving the ground (double jumps, air dashes).
pub const MAX_AIR_ACTIONS: u8 = 3;

// === Components ===

/// Marker for fighter entities.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Fighter;

/// World-space velocity. Only the vertical component is integrated by
/// the fighter tick; horizontal motion is applied directly by the
/// movement and AI systems.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec3);

/// Present while the fighter is off the ground. Orthogonal to [`Action`].
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Airborne {
    /// Air actions spent since leaving the ground, capped at [`MAX_AIR_ACTIONS`].
    pub air_actions: u8,
}

/// Super meter in `[0, SUPER_METER_MAX]`.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct SuperMeter {
    pub value: f32,
}

impl SuperMeter {
    /// Add meter, clamping at the ceiling.
    pub fn gain(&mut self, amount: f32) {
        self.value = (self.value + amount).min(SUPER_METER_MAX);
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.value >= SUPER_METER_MAX
    }
}

/// Accumulated attack charge. Points build while the charge input is
/// held and reset only when an attack resolves — releasing the input
/// keeps whatever was banked.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Charge {
    /// Charge points in `[0, CHARGE_MAX]`.
    pub points: f32,
    /// Whether the charge input is currently held.
    pub charging: bool,
}

impl Charge {
    /// Damage-multiplier tier in `[0, 5]`.
    #[must_use]
    pub fn level(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let level = (self.points / CHARGE_LEVEL_STEP) as u32;
        level.min(5)
    }

    /// Damage multiplier for the current tier.
    #[must_use]
    pub fn multiplier(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let level = self.level() as f32;
        level.mul_add(CHARGE_LEVEL_BONUS, 1.0)
    }

    /// Spent by any attack resolution, hit or miss.
    pub fn reset(&mut self) {
        self.points = 0.0;
    }
}

/// The four attack commands. Each has a fixed windup before its first
/// strike; the combo string fires three strikes on a fixed cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AttackKind {
    Light,
    Heavy,
    Combo,
    Super,
}

impl AttackKind {
    /// Damage of a single strike before the charge multiplier.
    #[must_use]
    pub const fn base_damage(self) -> f32 {
        match self {
            Self::Light => 15.0,
            Self::Heavy => 25.0,
            Self::Combo => 12.0,
            Self::Super => 50.0,
        }
    }

    /// Delay from command to the first strike.
    #[must_use]
    pub const fn windup_secs(self) -> f32 {
        match self {
            Self::Light => 0.2,
            Self::Heavy => 0.4,
            Self::Combo => 0.15,
            Self::Super => 1.2,
        }
    }

    /// Strikes in the string (only the combo throws more than one).
    #[must_use]
    pub const fn strikes(self) -> u8 {
        match self {
            Self::Combo => 3,
            _ => 1,
        }
    }

    /// Interval between follow-up strikes of a multi-hit string.
    #[must_use]
    pub const fn followup_secs(self) -> f32 {
        0.15
    }
}

/// Primary fighter state. Exactly one variant is active at a time;
/// being airborne is tracked separately by [`Airborne`].
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub enum Action {
    #[default]
    Idle,
    /// Winding up (and, for the combo string, cycling through) strikes.
    Attacking {
        kind: AttackKind,
        strike: Timer,
        strikes_left: u8,
    },
    /// Guard raised. The timer's elapsed time doubles as the distance
    /// from guard start, which decides perfect guards.
    Guarding { window: Timer },
    /// Reeling from a hit; ignores attack commands until recovered.
    Stunned { recover: Timer },
}

impl Action {
    /// Start an attack windup.
    #[must_use]
    pub fn attack(kind: AttackKind) -> Self {
        Self::Attacking {
            kind,
            strike: Timer::from_seconds(kind.windup_secs(), TimerMode::Once),
            strikes_left: kind.strikes(),
        }
    }

    /// Raise guard, recording the start of the window.
    #[must_use]
    pub fn guard() -> Self {
        Self::Guarding {
            window: Timer::from_seconds(GUARD_WINDOW_SECS, TimerMode::Once),
        }
    }

    /// Enter hit stun.
    #[must_use]
    pub fn stun() -> Self {
        Self::Stunned {
            recover: Timer::from_seconds(STUN_SECS, TimerMode::Once),
        }
    }

    #[must_use]
    pub const fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking { .. })
    }

    #[must_use]
    pub const fn is_guarding(&self) -> bool {
        matches!(self, Self::Guarding { .. })
    }

    #[must_use]
    pub const fn is_stunned(&self) -> bool {
        matches!(self, Self::Stunned { .. })
    }
}

// === Character Roster ===

/// Favored limb; drives animation selection in the renderer, not damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Specialty {
    Punches,
    Kicks,
}

/// The playable roster. Doubles as the tournament opponent pool.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[reflect(Component)]
pub enum CharacterId {
    #[default]
    Yukito,
    Yuka,
    Chao,
    Chaoli,
}

impl CharacterId {
    /// All characters, for iteration.
    pub const ALL: &[Self] = &[Self::Yukito, Self::Yuka, Self::Chao, Self::Chaoli];

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Yukito => "Yukito",
            Self::Yuka => "Yuka",
            Self::Chao => "Chao",
            Self::Chaoli => "Chaoli",
        }
    }

    /// Ring-announcer epithet.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Yukito => "The Iron Fist",
            Self::Yuka => "The Rose Warrior",
            Self::Chao => "The Dragon Master",
            Self::Chaoli => "The Phoenix Dancer",
        }
    }

    /// Signature block color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Yukito => Color::srgb(0.29, 0.565, 0.886),
            Self::Yuka => Color::srgb(0.886, 0.29, 0.565),
            Self::Chao => Color::srgb(0.29, 0.886, 0.565),
            Self::Chaoli => Color::srgb(0.604, 0.29, 0.886),
        }
    }

    #[must_use]
    pub const fn specialty(self) -> Specialty {
        match self {
            Self::Yukito | Self::Chao => Specialty::Punches,
            Self::Yuka | Self::Chaoli => Specialty::Kicks,
        }
    }

    /// Name of the character's super move, shown on the super flash.
    #[must_use]
    pub const fn super_move_name(self) -> &'static str {
        match self {
            Self::Yukito => "Iron Fist Barrage",
            Self::Yuka => "Thousand Petal Storm",
            Self::Chao => "Rising Dragon Fury",
            Self::Chaoli => "Phoenix Wing Tempest",
        }
    }
}

/// Spawn a fighter entity with the full combat archetype.
/// Single source of truth for what a fighter is made of; visuals are
/// attached separately by the battle screen.
pub fn spawn_fighter(
    commands: &mut Commands,
    character: CharacterId,
    side: Side,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Name::new(format!("{side:?} {}", character.display_name())),
            Fighter,
            character,
            side,
            Health::new(MAX_HEALTH),
            SuperMeter::default(),
            Charge::default(),
            Action::default(),
            Velocity::default(),
            Transform::from_translation(position),
            DespawnOnExit(Screen::Battle),
        ))
        .id()
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Fighter>()
        .register_type::<Velocity>()
        .register_type::<Airborne>()
        .register_type::<SuperMeter>()
        .register_type::<Charge>()
        .register_type::<Action>()
        .register_type::<CharacterId>();

    app.add_message::<FighterCommand>();

    // Commands land first so the same-frame tick sees the new state.
    app.add_systems(
        Update,
        (commands::apply_commands, tick::fighter_tick)
            .chain()
            .in_set(GameSet::Tick)
            .run_if(battle_running),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn charge_levels_step_every_36_points() {
        let mut charge = Charge::default();
        assert_eq!(charge.level(), 0);
        charge.points = 35.9;
        assert_eq!(charge.level(), 0);
        charge.points = 36.0;
        assert_eq!(charge.level(), 1);
        charge.points = CHARGE_MAX;
        assert_eq!(charge.level(), 5);
    }

    #[test]
    fn charge_multiplier_scales_with_level() {
        let mut charge = Charge::default();
        assert!((charge.multiplier() - 1.0).abs() < f32::EPSILON);
        charge.points = CHARGE_MAX;
        assert!((charge.multiplier() - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn super_meter_caps_at_max() {
        let mut meter = SuperMeter::default();
        meter.gain(250.0);
        assert_eq!(meter.value, SUPER_METER_MAX);
        assert!(meter.is_full());
    }

    #[test]
    fn attack_kinds_carry_their_base_damage() {
        assert_eq!(AttackKind::Light.base_damage(), 15.0);
        assert_eq!(AttackKind::Heavy.base_damage(), 25.0);
        assert_eq!(AttackKind::Combo.base_damage(), 12.0);
        assert_eq!(AttackKind::Super.base_damage(), 50.0);
    }

    #[test]
    fn combo_string_throws_three_strikes() {
        assert_eq!(AttackKind::Combo.strikes(), 3);
        assert_eq!(AttackKind::Light.strikes(), 1);
    }

    #[test]
    fn action_default_is_idle() {
        assert!(matches!(Action::default(), Action::Idle));
    }

    #[test]
    fn roster_has_four_characters() {
        assert_eq!(CharacterId::ALL.len(), 4);
    }

    #[test]
    fn roster_splits_specialties_evenly() {
        let punchers = CharacterId::ALL
            .iter()
            .filter(|c| c.specialty() == Specialty::Punches)
            .count();
        assert_eq!(punchers, 2);
    }
}
