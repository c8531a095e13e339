//! Tournament progression: the opponent ladder and round bookkeeping
//! carried across battles.

use bevy::prelude::*;

use super::fighter::CharacterId;

/// Nominal number of bracket rounds shown on the progress bar.
pub const TOTAL_ROUNDS: u32 = 3;

/// Progress through a championship run. One opponent per battle win;
/// the round counter advances every second opponent, which yields the
/// round sequence 1, 1, 2, 2 over the four-fighter ladder.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct TournamentState {
    pub current_round: u32,
    pub opponents: Vec<CharacterId>,
    pub current_opponent_index: usize,
}

impl Default for TournamentState {
    fn default() -> Self {
        Self {
            current_round: 1,
            opponents: CharacterId::ALL.to_vec(),
            current_opponent_index: 0,
        }
    }
}

impl TournamentState {
    /// The next fighter on the ladder, or `None` once the run is complete.
    #[must_use]
    pub fn current_opponent(&self) -> Option<CharacterId> {
        self.opponents.get(self.current_opponent_index).copied()
    }

    /// Record a battle win and move down the ladder.
    ///
    /// Returns `false` once every opponent has been beaten — the
    /// championship is complete. The round increments whenever the new
    /// opponent index is even.
    pub fn advance(&mut self) -> bool {
        self.current_opponent_index += 1;

        if self.current_opponent_index >= self.opponents.len() {
            return false;
        }

        if self.current_opponent_index % 2 == 0 {
            self.current_round += 1;
        }

        true
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_opponent_index >= self.opponents.len()
    }

    /// Bracket progress in `[0, 1]` for the progress bar.
    #[must_use]
    pub fn progress(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let completed = (self.current_round - 1) as f32;
        #[allow(clippy::cast_precision_loss)]
        let total = TOTAL_ROUNDS as f32;
        completed / total
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<TournamentState>()
        .init_resource::<TournamentState>();
}
