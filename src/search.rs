//! Exhaustive backtracking over grid preference profiles.
//!
//! Cells are filled in row-major order, each with every permutation of the
//! candidates in lexicographic order. Voter (0, 0) is pinned to the identity
//! ranking. Any node whose partial profile cannot be single-crossing is
//! abandoned; every complete profile reached is tested against the selected
//! hypothesis, and the first violation stops the whole search.

use std::iter;
use std::ops::ControlFlow;
use std::str::FromStr;

use itertools::{Either, Itertools};
use tracing::info;

use crate::checks::{admits_split_line, has_fast_cross, has_isolated_dominance_region, is_monodominated, is_single_crossing_feasible};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::pref::identity;

const PROGRESS_INTERVAL: u64 = 100;
const MAX_CANDIDATES: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Hypothesis {
    /// Every optimal tiling is sliceable.
    Sliceable,
    /// Every rectangle of an optimal tiling touches a side of the grid.
    BorderTouching,
    /// Enumerate profiles only.
    Enumerate,
}
impl FromStr for Hypothesis {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "1" | "sliceable" | "slice" => Hypothesis::Sliceable,
            "2" | "border" | "border-touching" | "borders" => Hypothesis::BorderTouching,
            "none" | "enumerate" => Hypothesis::Enumerate,
            _ => return Err(format!("unknown hypothesis: '{}'", s)),
        })
    }
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub rows: usize,
    pub cols: usize,
    pub candidates: usize,
    pub hypothesis: Hypothesis,
    /// Only visit profiles where grid neighbors differ in at most one candidate pair.
    pub no_fast_cross: bool,
    /// Print every complete profile visited.
    pub show: bool,
    /// Pin voter (0, 0) to the identity ranking.
    pub symmetry_breaking: bool,
}
impl SearchConfig {
    pub fn new(rows: usize, cols: usize, candidates: usize, hypothesis: Hypothesis) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidConfig(format!("grid must be non-empty, got {}x{}", rows, cols)));
        }
        if candidates == 0 || candidates > MAX_CANDIDATES {
            return Err(Error::InvalidConfig(format!("candidate count must be in 1..={}, got {}", MAX_CANDIDATES, candidates)));
        }
        Ok(SearchConfig { rows, cols, candidates, hypothesis, no_fast_cross: false, show: false, symmetry_breaking: true })
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Stats {
    /// Preference lists written into cells.
    pub assignments: u64,
    /// Complete feasible profiles reached.
    pub leaves: u64,
    /// Nodes abandoned by the feasibility or fast-cross check.
    pub pruned: u64,
}

#[derive(Debug)]
pub enum Outcome {
    Exhausted(Stats),
    Counterexample { grid: Grid, stats: Stats },
}

/// Does a complete profile contradict the hypothesis?
pub fn violates(g: &Grid, candidates: usize, hypothesis: Hypothesis) -> bool {
    match hypothesis {
        Hypothesis::Sliceable => !admits_split_line(g, candidates) && !is_monodominated(g),
        Hypothesis::BorderTouching => has_isolated_dominance_region(g, candidates),
        Hypothesis::Enumerate => false,
    }
}

pub struct Search {
    config: SearchConfig,
    grid: Grid,
    stats: Stats,
}
impl Search {
    pub fn new(config: SearchConfig) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        Search { config, grid, stats: Stats::default() }
    }

    pub fn run(mut self) -> Outcome {
        match self.backtrack(0, 0) {
            ControlFlow::Continue(()) => Outcome::Exhausted(self.stats),
            ControlFlow::Break(grid) => Outcome::Counterexample { grid, stats: self.stats },
        }
    }

    fn backtrack(&mut self, r: usize, c: usize) -> ControlFlow<Grid> {
        let n = self.config.candidates;
        if self.config.no_fast_cross && has_fast_cross(&self.grid, n) {
            self.stats.pruned += 1;
            return ControlFlow::Continue(());
        }
        if !is_single_crossing_feasible(&self.grid, n) {
            self.stats.pruned += 1;
            return ControlFlow::Continue(());
        }
        if r == self.config.rows {
            return self.leaf();
        }
        if c == self.config.cols {
            return self.backtrack(r + 1, 0);
        }

        let choices = if self.config.symmetry_breaking && r == 0 && c == 0 {
            Either::Left(iter::once(identity(n)))
        } else {
            Either::Right((0..n).permutations(n))
        };
        for p in choices {
            self.grid.set(r, c, p);
            self.stats.assignments += 1;
            self.backtrack(r, c + 1)?;
        }
        self.grid.clear(r, c);
        ControlFlow::Continue(())
    }

    fn leaf(&mut self) -> ControlFlow<Grid> {
        self.stats.leaves += 1;
        if self.stats.leaves % PROGRESS_INTERVAL == 0 {
            info!("Processed {} grid profiles.", self.stats.leaves);
        }
        if self.config.show {
            println!("{}", self.grid);
        }
        if violates(&self.grid, self.config.candidates, self.config.hypothesis) {
            return ControlFlow::Break(self.grid.clone());
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::parse_grid;

    fn run(rows: usize, cols: usize, candidates: usize, hypothesis: Hypothesis) -> Outcome {
        Search::new(SearchConfig::new(rows, cols, candidates, hypothesis).unwrap()).run()
    }
    fn exhausted(outcome: Outcome) -> Stats {
        match outcome {
            Outcome::Exhausted(stats) => stats,
            Outcome::Counterexample { grid, .. } => panic!("unexpected counterexample:\n{}", grid),
        }
    }

    #[test]
    fn test_single_cell_is_pinned() {
        let stats = exhausted(run(1, 1, 3, Hypothesis::Sliceable));
        assert_eq!(stats.assignments, 1);
        assert_eq!(stats.leaves, 1);
    }
    #[test]
    fn test_free_cell_tries_every_permutation() {
        for (candidates, count) in [(1, 1), (3, 6), (4, 24)] {
            let mut config = SearchConfig::new(1, 1, candidates, Hypothesis::Enumerate).unwrap();
            config.symmetry_breaking = false;
            let stats = exhausted(Search::new(config).run());
            assert_eq!(stats.assignments, count);
            assert_eq!(stats.leaves, count);
        }
    }
    #[test]
    fn test_two_by_two_two_candidates() {
        let stats = exhausted(run(2, 2, 2, Hypothesis::Sliceable));
        assert_eq!(stats.leaves, 3);
        assert!(stats.pruned > 0);
    }
    #[test]
    fn test_small_grids_hold() {
        assert_eq!(exhausted(run(2, 2, 3, Hypothesis::Sliceable)).leaves, 15);
        assert_eq!(exhausted(run(2, 2, 3, Hypothesis::BorderTouching)).leaves, 15);
        assert_eq!(exhausted(run(2, 3, 3, Hypothesis::Sliceable)).leaves, 30);
        assert_eq!(exhausted(run(1, 3, 3, Hypothesis::Enumerate)).leaves, 17);
    }
    #[test]
    fn test_fast_cross_restriction() {
        let mut config = SearchConfig::new(2, 2, 3, Hypothesis::Enumerate).unwrap();
        config.no_fast_cross = true;
        assert_eq!(exhausted(Search::new(config).run()).leaves, 5);
    }
    #[test]
    fn test_counterexample_stops_search() {
        // Without the pinned first voter, "10" is neither sliceable nor monodominated.
        let mut config = SearchConfig::new(1, 1, 2, Hypothesis::Sliceable).unwrap();
        config.symmetry_breaking = false;
        match Search::new(config).run() {
            Outcome::Counterexample { grid, stats } => {
                assert_eq!(grid, parse_grid(&["10"]));
                assert_eq!(stats.leaves, 2);
            }
            Outcome::Exhausted(_) => panic!("expected counterexample"),
        }
    }
    #[test]
    fn test_violates() {
        let isolated = parse_grid(&["01234 02134 03214", "12304 21304 32104", "41230 42130 43210"]);
        assert!(violates(&isolated, 5, Hypothesis::BorderTouching));
        assert!(!violates(&isolated, 5, Hypothesis::Sliceable));
        let unsliceable = parse_grid(&["0123 0123 1023", "2013 3012 1302", "2103 3210 3201"]);
        assert!(violates(&unsliceable, 4, Hypothesis::Sliceable));
        assert!(!violates(&unsliceable, 4, Hypothesis::Enumerate));
        assert!(!violates(&parse_grid(&["012"]), 3, Hypothesis::Sliceable));
    }
    #[test]
    fn test_config_validation() {
        assert!(SearchConfig::new(0, 3, 3, Hypothesis::Sliceable).is_err());
        assert!(SearchConfig::new(3, 3, 0, Hypothesis::Sliceable).is_err());
        assert!(SearchConfig::new(3, 3, 11, Hypothesis::Sliceable).is_err());
        assert!(SearchConfig::new(3, 3, 10, Hypothesis::Sliceable).is_ok());
    }
    #[test]
    fn test_parse_hypothesis() {
        assert_eq!("Sliceable".parse::<Hypothesis>(), Ok(Hypothesis::Sliceable));
        assert_eq!(" border ".parse::<Hypothesis>(), Ok(Hypothesis::BorderTouching));
        assert_eq!("none".parse::<Hypothesis>(), Ok(Hypothesis::Enumerate));
        assert!("tiles".parse::<Hypothesis>().is_err());
    }
}
