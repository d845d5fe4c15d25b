//! Constants for board dimensions, search budgets, and credit values.
//!
//! These are the defaults used when no runtime configuration overrides them.
//! The web adapter, the console loop, and `SearchConfig::default()` all start
//! from the values here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_SIZE: usize = 10;

/// Number of stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// The four distinct line directions: horizontal, vertical, diagonal, anti-diagonal.
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Offsets to the eight neighbouring cells.
pub const NEIGHBOR_DELTA: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// MCTS Parameters
// =============================================================================

/// Default number of simulation cycles per AI move.
///
/// A 10x10 board without the proximity filter needs roughly this many
/// simulations before play starts to look sensible.
pub const N_SIMS: usize = 500;

/// Default maximum number of plies in one rollout.
pub const SIMULATION_DEPTH: usize = 1000;

/// Default proximity radius for nearby-only expansion.
///
/// Radius 1 admits cells at most two king steps from a stone, a 5x5 square
/// around an isolated stone.
pub const PROXIMITY_RADIUS: usize = 1;

/// Exploration coefficient for UCB1 (ln 2).
pub const UCB_C: f64 = std::f64::consts::LN_2;

/// Score given to unvisited children so they are explored first.
pub const UNVISITED_URGENCY: f64 = f64::INFINITY;

/// Win-score credit for a rollout won by the root player.
pub const WIN_CREDIT: f64 = 1.0;

/// Win-score credit for a drawn or unfinished rollout.
pub const DRAW_CREDIT: f64 = 0.1;

// =============================================================================
// Adapter Defaults
// =============================================================================

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Session id used when a request does not name one.
pub const DEFAULT_SESSION: &str = "default";
