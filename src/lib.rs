//! # Hex marble puzzle solver
//!
//! Board model and backtracking solver for the hexagonal marble-matching
//! puzzle: a radius-5 hex board of elemental marbles, cleared by removing
//! matching pairs (identical basic elements, salt wildcards, life with
//! death, mercury with the next metal in the lead-to-gold order), a final
//! standalone gold, and five-way essence combos. The solver either finds
//! an ordered sequence of removals that empties the board or proves that
//! none exists.
//!
//! The library is used by two binaries:
//! - `solve`: reads a board (text grid or symbol-detector JSON) and prints
//!   a full-clear move sequence.
//! - `random_boards`: batch-solves seeded random boards to gauge solver
//!   behaviour and pruning effectiveness.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), marble symbols
//!   (`Element`) and the incremental neighbour-mask bookkeeping behind the
//!   "clearable" flag.
//! - `solver`: the `MetalStack` ordering constraint and the backtracking
//!   `solve`/`solve_with_budget` entry points.
//! - `detect`: turns symbol-detection JSON into a `Board`.
//! - `utils`: text-grid board parsing for tests and the CLI.
//! - `error`: the crate-wide error type.

pub mod detect;
pub mod engine;
pub mod error;
pub mod solver;
pub mod utils;
