//! Run scores for Caro evaluation
//!
//! A run is scored by its length (1-4) and by how many of its two ends are
//! open, meaning the next cell is on the board and empty. Runs of five or
//! more are already wins and get the flat `five` score.

/// Score table indexed by open ends and run length.
///
/// `runs[open_ends][len - 1]` for `open_ends` in 0..=2 and `len` in 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    pub runs: [[i32; 4]; 3],
    /// Five or more in a row
    pub five: i32,
}

impl ScoreTable {
    /// Reference magnitudes: each extra stone and each extra open end is
    /// worth ten times more.
    pub const REFERENCE: ScoreTable = ScoreTable {
        runs: [
            [1, 10, 100, 1_000],         // both ends blocked
            [10, 100, 1_000, 10_000],    // one end open
            [100, 1_000, 10_000, 100_000], // both ends open
        ],
        five: 1_000_000,
    };

    /// Score of a single run
    #[inline]
    pub fn score(&self, len: usize, open_ends: u8) -> i32 {
        match len {
            0 => 0,
            1..=4 => self.runs[usize::from(open_ends.min(2))][len - 1],
            _ => self.five,
        }
    }

    /// Whether the table keeps the orderings the evaluator relies on:
    /// strictly increasing with length inside each tier, strictly increasing
    /// with open ends for equal length, five above everything, no negatives.
    pub fn is_well_ordered(&self) -> bool {
        let lengths_increase = self
            .runs
            .iter()
            .all(|tier| tier[0] >= 0 && tier.windows(2).all(|w| w[0] < w[1]));
        let ends_increase =
            (0..4).all(|len| self.runs[0][len] < self.runs[1][len] && self.runs[1][len] < self.runs[2][len]);
        lengths_increase && ends_increase && self.five > self.runs[2][3]
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_hierarchy() {
        let t = ScoreTable::REFERENCE;
        assert!(t.is_well_ordered());
        assert_eq!(t.score(4, 2), 100_000);
        assert_eq!(t.score(3, 1), 1_000);
        assert_eq!(t.score(1, 0), 1);
        assert!(t.score(4, 2) > t.score(4, 1));
        assert!(t.score(4, 1) > t.score(4, 0));
        assert!(t.score(3, 2) > t.score(2, 2));
    }

    #[test]
    fn test_five_and_longer() {
        let t = ScoreTable::default();
        assert_eq!(t.score(5, 0), t.five);
        assert_eq!(t.score(7, 2), t.five);
        assert_eq!(t.score(0, 2), 0);
    }

    #[test]
    fn test_rescaled_table_still_valid() {
        let mut t = ScoreTable::REFERENCE;
        for tier in &mut t.runs {
            for v in tier.iter_mut() {
                *v *= 2;
            }
        }
        t.five *= 2;
        assert!(t.is_well_ordered());
    }

    #[test]
    fn test_detects_broken_ordering() {
        let mut t = ScoreTable::REFERENCE;
        t.runs[1][2] = t.runs[2][2]; // one-open three equals open three
        assert!(!t.is_well_ordered());

        let mut t = ScoreTable::REFERENCE;
        t.runs[0] = [5, 4, 100, 1_000];
        assert!(!t.is_well_ordered());

        let mut t = ScoreTable::REFERENCE;
        t.five = 50_000;
        assert!(!t.is_well_ordered());
    }
}
