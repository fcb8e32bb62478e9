// File: crates/t99-stats/src/summary.rs
// Summary: Headline numbers for a filtered game series.

use std::fmt;

use crate::games::{GameRecord, BEST_PLACE};

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub wins: usize,
    pub best_place: Option<u32>,
    pub mean_place: Option<f64>,
    pub total_kos: u64,
}

impl Summary {
    pub fn from_games(games: &[GameRecord]) -> Self {
        let n = games.len();
        let place_sum: u64 = games.iter().map(|g| g.rank as u64).sum();
        Self {
            games: n,
            wins: games.iter().filter(|g| g.rank == BEST_PLACE).count(),
            best_place: games.iter().map(|g| g.rank).min(),
            mean_place: (n > 0).then(|| place_sum as f64 / n as f64),
            total_kos: games.iter().map(|g| g.kos as u64).sum(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} games, {} wins, {} K.O.", self.games, self.wins, self.total_kos)?;
        if let (Some(best), Some(mean)) = (self.best_place, self.mean_place) {
            write!(f, ", best #{best}, mean place {mean:.1}")?;
        }
        Ok(())
    }
}
