//! Gomoku-MCTS: a five-in-a-row engine built on Monte Carlo Tree Search.
//!
//! The search is guided by a chain of tactical rules (complete or block
//! fours, extend or block open threes) that also serves as the rollout
//! policy. A small session layer, a text console, and an HTTP API sit on top.
//!
//! ## Modules
//!
//! - [`constants`] - Board defaults and search parameters
//! - [`board`] - Board state, move execution, win/draw detection
//! - [`proximity`] - Candidate moves near existing stones
//! - [`rules`] - Rule chain for forced moves and rollouts
//! - [`mcts`] - Monte Carlo Tree Search with UCB1
//! - [`session`] - Game sessions shared by the adapters
//! - [`console`] - Text command loop
//! - [`web`] - HTTP API
//!
//! ## Example
//!
//! ```
//! use gomoku_mcts::board::Board;
//! use gomoku_mcts::mcts::{SearchConfig, choose_ai_move};
//!
//! // Create a new game and play a move
//! let mut board = Board::new(10);
//! board.apply_move((4, 4)).unwrap();
//!
//! // Run MCTS to find the best response
//! let config = SearchConfig::default().with_simulations(50).with_proximity(2);
//! let (player, (row, col)) = choose_ai_move(&board, &config).unwrap();
//! println!("Player {player} plays {row},{col}");
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod mcts;
pub mod proximity;
pub mod rules;
pub mod session;
pub mod web;

pub use board::{Board, Coord, GameStatus, MoveError, Player};
pub use mcts::{SearchConfig, SearchError, choose_ai_move};
pub use rules::decide_rule_move;

/// Create an empty board of the given size.
pub fn new_board(size: usize) -> Board {
    Board::new(size)
}

/// Apply a move to `board`, returning the resulting status.
pub fn apply_move(board: &mut Board, coord: Coord) -> Result<GameStatus, MoveError> {
    board.apply_move(coord)
}
