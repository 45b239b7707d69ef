use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sigmar_solver::detect;
use sigmar_solver::engine::Board;
use sigmar_solver::solver::{solve_with_budget, Outcome};
use sigmar_solver::utils::board_from_str_rows;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Parse the input as symbol-detector JSON instead of a text grid
    #[clap(long)]
    json: bool,

    /// Give up after this many search nodes (0 = search without a limit)
    #[clap(short, long, default_value_t = 0)]
    budget: u64,

    /// Path to the board file
    board_file: PathBuf,
}

fn load_board(args: &Args) -> Result<Board, String> {
    let content = fs::read_to_string(&args.board_file)
        .map_err(|e| format!("failed to read {}: {}", args.board_file.display(), e))?;
    if args.json {
        detect::board_from_json(&content).map_err(|e| format!("invalid detection data: {}", e))
    } else {
        // trailing whitespace is irrelevant, leading whitespace is not:
        // the column position encodes the q coordinate
        let mut rows: Vec<&str> = content.lines().map(|line| line.trim_end()).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        board_from_str_rows(&rows).map_err(|e| format!("invalid board: {}", e))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut board = load_board(&args).unwrap_or_else(|message| {
        eprintln!("{}", message);
        process::exit(1);
    });
    println!(
        "Loaded board with {} marbles:\n{}\n",
        board.remaining(),
        board
    );

    let budget = if args.budget == 0 {
        None
    } else {
        Some(args.budget)
    };
    match solve_with_budget(&mut board, budget) {
        Outcome::Solved(solution) => {
            println!("Solution found ({} moves):", solution.groups.len());
            for (i, group) in solution.groups.iter().enumerate() {
                let step = group
                    .iter()
                    .map(|removal| {
                        format!(
                            "{} ({}, {})",
                            removal.element, removal.coord.0, removal.coord.1
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" + ");
                println!("  {:2}. {}", i + 1, step);
            }
        }
        Outcome::Unsolvable => println!("No solution exists for this board."),
        Outcome::BudgetExhausted => {
            println!("Gave up after {} nodes without a verdict.", args.budget)
        }
    }
}
