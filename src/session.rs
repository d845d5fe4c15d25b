//! Game session management
//!
//! Wraps a [`Board`] and the AI's [`SearchConfig`] into the unit the
//! adapters work with: one human player, one AI player, a status message, and
//! optionally a search tree kept across turns.
//!
//! [`GameStateView`] is the JSON sent to the front end. Its `last_move` is
//! flat, `{"player": 2, "x": 3, "y": 4}`, rather than nesting the coordinate
//! under an `action` object.
//!
//! Sessions are not synchronized themselves. [`SessionStore`] hands out one
//! lock per session id and callers hold it for a whole request.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::board::{Board, Coord, GameStatus, MoveError, Player};
use crate::constants::DEFAULT_SIZE;
use crate::mcts::{GameTree, SearchConfig, SearchError, SearchOutcome, TreeNode, tree_search};

/// The human always plays as player one.
pub const HUMAN: Player = Player::One;

/// The AI always plays as player two.
pub const AI: Player = Player::Two;

/// Errors surfaced by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("it is not the human player's turn")]
    NotHumanTurn,
    #[error("it is not the AI player's turn")]
    NotAiTurn,
}

/// Optional changes to a session's settings. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub simulation_times: Option<usize>,
    pub simulation_depth: Option<usize>,
    pub only_nearby: Option<bool>,
    pub proximity_radius: Option<usize>,
    pub player_first: Option<bool>,
    pub rule_shortcut: Option<bool>,
}

/// Last move as sent to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMoveView {
    pub player: u8,
    pub x: usize,
    pub y: usize,
}

/// Current game state as sent to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub size: usize,
    /// Board rows: 0=empty, 1=human, 2=AI
    pub board: Vec<Vec<u8>>,
    pub current_player: u8,
    pub last_move: Option<LastMoveView>,
    pub game_over: bool,
    pub winner: Option<u8>,
    pub message: String,
}

/// Settings a new session starts from.
#[derive(Debug, Clone)]
pub struct SessionDefaults {
    pub size: usize,
    pub config: SearchConfig,
    pub player_first: bool,
    pub reuse_tree: bool,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            config: SearchConfig::default(),
            player_first: true,
            reuse_tree: false,
        }
    }
}

/// A game between the human and the AI.
pub struct GameSession {
    board: Board,
    size: usize,
    config: SearchConfig,
    player_first: bool,
    reuse_tree: bool,
    tree: Option<GameTree>,
    message: String,
}

impl GameSession {
    /// Create a session from defaults and start a game.
    pub fn new(defaults: &SessionDefaults) -> Self {
        let mut session = Self {
            board: Board::new(defaults.size),
            size: defaults.size,
            config: defaults.config.clone(),
            player_first: defaults.player_first,
            reuse_tree: defaults.reuse_tree,
            tree: None,
            message: String::new(),
        };
        session.reset();
        session
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn player_first(&self) -> bool {
        self.player_first
    }

    /// The tree kept across turns, if tree reuse is enabled and a search ran.
    pub fn tree_root(&self) -> Option<&TreeNode> {
        self.tree.as_ref().map(GameTree::root)
    }

    #[inline]
    pub fn is_ai_turn(&self) -> bool {
        !self.board.is_over() && self.board.current_player() == AI
    }

    /// Start a new game, keeping the current settings.
    pub fn reset(&mut self) {
        let first = if self.player_first { HUMAN } else { AI };
        self.board = Board::with_first_player(self.size, first);
        self.tree = None;
        self.message = if self.player_first {
            format!("Game initialised, human player ({HUMAN}) to move")
        } else {
            format!("Game initialised, AI player ({AI}) to move")
        };
        debug!(size = self.size, player_first = self.player_first, "game reset");
    }

    /// Play the human's move.
    pub fn submit_move(&mut self, coord: Coord) -> Result<GameStatus, SessionError> {
        let result = self.try_submit(coord);
        match &result {
            Ok(status) => self.message = self.status_message(*status, HUMAN, coord, None),
            Err(err) => self.message = self.error_message(err),
        }
        result
    }

    fn try_submit(&mut self, coord: Coord) -> Result<GameStatus, SessionError> {
        if self.board.is_over() {
            return Err(MoveError::GameAlreadyOver.into());
        }
        if self.board.current_player() != HUMAN {
            return Err(SessionError::NotHumanTurn);
        }
        Ok(self.board.apply_move(coord)?)
    }

    /// Let the AI pick and play its move.
    pub fn request_ai_move(&mut self) -> Result<SearchOutcome, SessionError> {
        let result = self.try_ai_move();
        if let Err(err) = &result {
            self.message = self.error_message(err);
        }
        result
    }

    fn try_ai_move(&mut self) -> Result<SearchOutcome, SessionError> {
        if self.board.is_over() {
            return Err(SearchError::NoLegalMoves.into());
        }
        if self.board.current_player() != AI {
            return Err(SessionError::NotAiTurn);
        }

        let start = Instant::now();
        let outcome = if self.reuse_tree {
            let tree = self
                .tree
                .get_or_insert_with(|| GameTree::new(&self.board, &self.config));
            tree.sync(&self.board);
            tree.search(&self.config)?
        } else {
            let mut rng = self.config.rng();
            let mut root = TreeNode::new(self.board.clone());
            tree_search(&mut root, &self.config, &mut rng)?
        };
        let elapsed = start.elapsed().as_secs_f64();

        let status = self.board.apply_move(outcome.coord)?;
        info!(
            x = outcome.coord.0,
            y = outcome.coord.1,
            simulations = outcome.simulations,
            source = ?outcome.source,
            elapsed_secs = elapsed,
            "AI move"
        );
        self.message = self.status_message(status, AI, outcome.coord, Some(elapsed));
        Ok(outcome)
    }

    /// Apply a settings update. The kept tree is dropped since its
    /// statistics were gathered under the old settings.
    pub fn update_settings(&mut self, update: &SettingsUpdate) {
        if let Some(n) = update.simulation_times {
            self.config.simulation_count = n;
        }
        if let Some(depth) = update.simulation_depth {
            self.config.simulation_depth_cap = depth;
        }
        if let Some(nearby) = update.only_nearby {
            self.config.proximity_only = nearby;
        }
        if let Some(radius) = update.proximity_radius {
            self.config.proximity_radius = radius;
        }
        if let Some(first) = update.player_first {
            self.player_first = first;
        }
        if let Some(shortcut) = update.rule_shortcut {
            self.config.rule_shortcut = shortcut;
        }
        self.tree = None;
        debug!(config = ?self.config, player_first = self.player_first, "settings updated");
    }

    fn status_message(
        &self,
        status: GameStatus,
        player: Player,
        (x, y): Coord,
        think_secs: Option<f64>,
    ) -> String {
        match status {
            GameStatus::Won(winner) => format!("Game over! Player {winner} wins!"),
            GameStatus::Draw => "Game over! It's a draw.".to_string(),
            GameStatus::Ongoing => match think_secs {
                Some(secs) => format!("AI player played ({x}, {y}), thinking took {secs:.2}s"),
                None if player == HUMAN => format!("Human player played ({x}, {y})"),
                None => format!("Player {player} played ({x}, {y})"),
            },
        }
    }

    fn error_message(&self, err: &SessionError) -> String {
        match (err, self.board.status()) {
            (SessionError::Move(MoveError::GameAlreadyOver), GameStatus::Won(p)) => {
                format!("Game is over, player {p} won!")
            }
            _ => err.to_string(),
        }
    }

    /// Snapshot of the game for the front end.
    pub fn view(&self) -> GameStateView {
        let n = self.board.size();
        let board = (0..n)
            .map(|r| {
                (0..n)
                    .map(|c| self.board.cell((r, c)).map_or(0, Player::id))
                    .collect()
            })
            .collect();
        GameStateView {
            size: n,
            board,
            current_player: self.board.current_player().id(),
            last_move: self
                .board
                .last_move()
                .map(|(player, (x, y))| LastMoveView {
                    player: player.id(),
                    x,
                    y,
                }),
            game_over: self.board.is_over(),
            winner: self.board.winner().map(Player::id),
            message: self.message.clone(),
        }
    }
}

/// Sessions keyed by id, each behind its own lock.
#[derive(Default)]
pub struct SessionStore {
    defaults: SessionDefaults,
    sessions: std::sync::Mutex<HashMap<String, Arc<Mutex<GameSession>>>>,
}

impl SessionStore {
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            defaults,
            sessions: std::sync::Mutex::new(HashMap::new()),
        }
    }

    /// The session for `id`, created from the defaults on first use.
    pub fn get_or_create(&self, id: &str) -> Arc<Mutex<GameSession>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let session = sessions.entry(id.to_string()).or_insert_with(|| {
            info!(session = id, "creating session");
            Arc::new(Mutex::new(GameSession::new(&self.defaults)))
        });
        Arc::clone(session)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
