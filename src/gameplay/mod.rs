//! Gameplay domain plugins: fighters, combat, AI, weather, battle flow,
//! tournament progression, and the in-battle HUD.

pub mod ai;
pub mod battle;
pub mod combat;
pub mod fighter;
pub mod hud;
pub mod tournament;
pub mod weather;

use bevy::prelude::*;

use ai::Difficulty;
use fighter::CharacterId;

// === Constants ===

/// Arena half-extent: fighter positions are clamped to ±this on x and z.
pub const ARENA_HALF_EXTENT: f32 = 9.0;

/// Resting height of a fighter's center above the floor plane.
pub const FLOOR_Y: f32 = 1.0;

/// Melee reach: strikes whiff beyond this center-to-center distance.
pub const MELEE_RANGE: f32 = 3.0;

// === Components ===

/// Which corner a fighter fights from. The player side is human-controlled;
/// the opponent side is driven by [`ai::AiController`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other corner.
    #[must_use]
    pub const fn opposing(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Hit points. Never negative, never above `max`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    /// Full health at the given maximum.
    #[must_use]
    pub const fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage, clamping at zero.
    pub fn take_damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Restore health, clamping at `max`.
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

// === Resources ===

/// How the next battle was entered from the title screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum GameMode {
    #[default]
    Quick,
    Training,
    Tournament,
}

/// Selections carried from the menu screens into the battle.
/// Reset whenever the title screen is shown.
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct FightSetup {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub character: CharacterId,
    /// Decided when the battle is confirmed: the next ladder opponent
    /// in tournament mode, a random challenger otherwise.
    pub opponent: CharacterId,
}

// === Plugin ===

pub fn plugin(app: &mut App) {
    app.register_type::<Side>()
        .register_type::<Health>()
        .register_type::<FightSetup>()
        .init_resource::<FightSetup>();

    app.add_plugins((
        fighter::plugin,
        combat::plugin,
        ai::plugin,
        weather::plugin,
        battle::plugin,
        tournament::plugin,
        hud::plugin,
    ));
}
