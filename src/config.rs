//! Engine configuration
//!
//! Search limits and scoring weights are plain values handed to the engine
//! at construction, so different settings can coexist in one process.
//!
//! # Example
//!
//! ```
//! use caro::{DepthSchedule, EngineConfig};
//!
//! let config = EngineConfig::default()
//!     .with_neighbor_radius(3)
//!     .with_depth(DepthSchedule::fixed(2))
//!     .with_defense_weight(3);
//! assert!(config.validate().is_ok());
//! ```

use thiserror::Error;

use crate::eval::ScoreTable;

/// Errors reported by [`EngineConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("neighbor radius must be at least 1")]
    ZeroRadius,

    #[error("search depth of the {band} band must be at least 1")]
    ZeroDepth { band: &'static str },

    #[error("depth schedule must not increase as the board fills (early {early}, middle {middle}, late {late})")]
    IncreasingDepth { early: u8, middle: u8, late: u8 },

    #[error("depth band thresholds out of order: middle starts at {middle_from}, late at {late_from}")]
    UnorderedBands { middle_from: usize, late_from: usize },

    #[error("defense weight {weight} must be at least 1")]
    InvalidDefenseWeight { weight: i32 },

    #[error("score table must increase with run length and open ends, with five on top")]
    ScoreOrdering,

    #[error("win score {win_base} does not stay positive after decaying by {win_decay} over {plies} plies")]
    WinScoreTooSmall { win_base: i32, win_decay: i32, plies: u8 },
}

/// Search depth as a step function of stones already on the board.
///
/// Fewer than `middle_from` stones search `early` plies, fewer than
/// `late_from` search `middle`, anything later searches `late`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthSchedule {
    pub early: u8,
    pub middle: u8,
    pub late: u8,
    pub middle_from: usize,
    pub late_from: usize,
}

impl DepthSchedule {
    /// Same depth for the whole game
    pub const fn fixed(depth: u8) -> Self {
        Self {
            early: depth,
            middle: depth,
            late: depth,
            middle_from: usize::MAX,
            late_from: usize::MAX,
        }
    }

    /// Depth limit for a position with `ply_count` stones placed
    #[inline]
    pub fn depth_for(&self, ply_count: usize) -> u8 {
        if ply_count < self.middle_from {
            self.early
        } else if ply_count < self.late_from {
            self.middle
        } else {
            self.late
        }
    }

    /// Deepest limit the schedule can produce
    #[inline]
    pub fn deepest(&self) -> u8 {
        self.early.max(self.middle).max(self.late)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (band, depth) in [("early", self.early), ("middle", self.middle), ("late", self.late)] {
            if depth == 0 {
                return Err(ConfigError::ZeroDepth { band });
            }
        }
        if self.middle > self.early || self.late > self.middle {
            return Err(ConfigError::IncreasingDepth {
                early: self.early,
                middle: self.middle,
                late: self.late,
            });
        }
        if self.middle_from > self.late_from {
            return Err(ConfigError::UnorderedBands {
                middle_from: self.middle_from,
                late_from: self.late_from,
            });
        }
        Ok(())
    }
}

impl Default for DepthSchedule {
    fn default() -> Self {
        Self {
            early: 3,
            middle: 2,
            late: 1,
            middle_from: 20,
            late_from: 40,
        }
    }
}

/// Configuration for [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Candidate moves lie within this Chebyshev distance of a stone
    pub neighbor_radius: u8,
    /// Adaptive depth bands
    pub depth: DepthSchedule,
    /// Run score table for the static evaluation
    pub scores: ScoreTable,
    /// Multiplier on the opponent's run total
    pub defense_weight: i32,
    /// Score of a won position before depth decay
    pub win_base: i32,
    /// Score lost per ply before the win
    pub win_decay: i32,
}

impl EngineConfig {
    /// Set the candidate neighborhood radius.
    pub fn with_neighbor_radius(mut self, radius: u8) -> Self {
        self.neighbor_radius = radius;
        self
    }

    /// Set the adaptive depth schedule.
    pub fn with_depth(mut self, depth: DepthSchedule) -> Self {
        self.depth = depth;
        self
    }

    /// Set the run score table.
    pub fn with_scores(mut self, scores: ScoreTable) -> Self {
        self.scores = scores;
        self
    }

    /// Set the opponent weight.
    pub fn with_defense_weight(mut self, weight: i32) -> Self {
        self.defense_weight = weight;
        self
    }

    /// Set the terminal win score and its per-ply decay.
    pub fn with_win_score(mut self, base: i32, decay: i32) -> Self {
        self.win_base = base;
        self.win_decay = decay;
        self
    }

    /// Largest magnitude a static evaluation may take inside the search.
    ///
    /// Strictly below the smallest terminal score (`win_base` decayed over
    /// `deepest + 1` plies), so a heuristic position never outranks a real
    /// win or loss. Zero when the win score does not validate.
    pub fn eval_bound(&self) -> i32 {
        let plies = i64::from(self.depth.deepest()) + 1;
        let bound = i64::from(self.win_base) - i64::from(self.win_decay) * plies - 1;
        bound.clamp(0, i64::from(i32::MAX)) as i32
    }

    /// Check the configuration for values that would break the search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neighbor_radius == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        self.depth.validate()?;
        if self.defense_weight < 1 {
            return Err(ConfigError::InvalidDefenseWeight {
                weight: self.defense_weight,
            });
        }
        if !self.scores.is_well_ordered() {
            return Err(ConfigError::ScoreOrdering);
        }

        // Terminal checks run at most one ply past the deepest limit
        let plies = self.depth.deepest().saturating_add(1);
        let decayed = i64::from(self.win_base) - i64::from(self.win_decay) * i64::from(plies);
        if self.win_decay < 0 || decayed <= 0 {
            return Err(ConfigError::WinScoreTooSmall {
                win_base: self.win_base,
                win_decay: self.win_decay,
                plies,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neighbor_radius: 2,
            depth: DepthSchedule::default(),
            scores: ScoreTable::default(),
            defense_weight: 5,
            win_base: 1_000_000,
            win_decay: 1_000,
        }
    }
}
