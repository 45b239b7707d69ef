//! Batch evaluation of the solver on seeded random boards.
//!
//! Randomly placed full boards are usually not solvable, so this is mostly
//! a stress run for the pruning: the interesting numbers are how fast the
//! unsolvable boards die and how many boards stay undecided within the
//! node budget.

use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sigmar_solver::engine::Board;
use sigmar_solver::solver::{solve_with_budget, Outcome};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of boards to generate and attempt
    #[clap(short, long, default_value_t = 20)]
    count: u64,

    /// Seed of the first board; board i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Node budget per board (0 = search without a limit)
    #[clap(short, long, default_value_t = 2_000_000)]
    budget: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let budget = if args.budget == 0 {
        None
    } else {
        Some(args.budget)
    };

    let mut solved = 0u64;
    let mut unsolvable = 0u64;
    let mut undecided = 0u64;

    println!(
        "Attempting {} random boards starting at seed {}...",
        args.count, args.seed
    );
    let start = Instant::now();
    for i in 0..args.count {
        let seed = args.seed + i;
        let mut board = Board::new_random_with_seed(seed);
        let board_start = Instant::now();
        let verdict = match solve_with_budget(&mut board, budget) {
            Outcome::Solved(solution) => {
                solved += 1;
                format!("solved in {} moves", solution.groups.len())
            }
            Outcome::Unsolvable => {
                unsolvable += 1;
                "unsolvable".to_string()
            }
            Outcome::BudgetExhausted => {
                undecided += 1;
                "undecided (budget exhausted)".to_string()
            }
        };
        println!(
            "  seed {:<6} {:<32} [{:.2?}]",
            seed,
            verdict,
            board_start.elapsed()
        );
    }

    println!("\n--- Summary ---");
    println!("Boards:      {}", args.count);
    println!("Solved:      {}", solved);
    println!("Unsolvable:  {}", unsolvable);
    println!("Undecided:   {}", undecided);
    println!("Total time:  {:.2?}", start.elapsed());
}
