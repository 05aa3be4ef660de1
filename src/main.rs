use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod checks;
mod error;
mod grid;
mod lp;
mod pref;
mod rect;
mod search;

use crate::lp::LpOutcome;
use crate::pref::format_pref;
use crate::search::{Hypothesis, Outcome, Search, SearchConfig};

#[derive(Parser)]
enum Mode {
    /// Exhaustively test a tiling hypothesis on all single-crossing grid profiles
    Grid {
        #[clap(default_value = "4")]
        rows: NonZeroUsize,
        #[clap(default_value = "5")]
        cols: NonZeroUsize,
        #[clap(default_value = "5")]
        candidates: NonZeroUsize,
        /// sliceable, border or enumerate
        #[clap(long, default_value = "sliceable")]
        hypothesis: Hypothesis,
        /// Skip profiles where neighboring voters differ in more than one candidate pair
        #[clap(long)]
        no_fast_cross: bool,
        /// Print every complete profile visited
        #[clap(long)]
        show: bool,
    },
    /// Check that every linear system of the three-voter lemma is unsatisfiable
    Lp,
}

fn run_grid(config: SearchConfig) -> ExitCode {
    info!("checking {:?} on {}x{} grid with {} candidates", config.hypothesis, config.rows, config.cols, config.candidates);
    match Search::new(config).run() {
        Outcome::Exhausted(stats) => {
            info!("hypothesis holds: {} profiles, {} assignments, {} pruned", stats.leaves, stats.assignments, stats.pruned);
            ExitCode::SUCCESS
        }
        Outcome::Counterexample { grid, stats } => {
            println!("{}", grid);
            info!("counterexample after {} profiles", stats.leaves);
            ExitCode::from(1)
        }
    }
}

fn run_lp() -> ExitCode {
    match lp::run_lp() {
        Ok(LpOutcome::AllUnsat(report)) => {
            info!("all {} systems over {} profiles are unsat", report.systems, report.profiles);
            ExitCode::SUCCESS
        }
        Ok(LpOutcome::Satisfiable { sigma1, sigma2, alternative, model }) => {
            println!("sigma1 = {}, sigma2 = {}, c2 = {}", format_pref(&sigma1), format_pref(&sigma2), alternative);
            println!("{}", model);
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match Mode::parse() {
        Mode::Grid { rows, cols, candidates, hypothesis, no_fast_cross, show } => {
            match SearchConfig::new(rows.get(), cols.get(), candidates.get(), hypothesis) {
                Ok(config) => run_grid(SearchConfig { no_fast_cross, show, ..config }),
                Err(e) => {
                    error!("{}", e);
                    ExitCode::from(2)
                }
            }
        }
        Mode::Lp => run_lp(),
    }
}
