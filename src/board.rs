//! Gomoku board representation and move execution.
//!
//! The board is a square grid of cells, each either empty or holding a stone
//! of one of the two players. Player one always moves first unless the board
//! is created with [`Board::with_first_player`].
//!
//! A move is placed with [`Board::apply_move`], which evaluates the
//! five-in-a-row condition through the placed stone, then the draw condition
//! (board full), and only then hands the turn to the other player. Invalid
//! moves are reported through [`MoveError`] and leave the board untouched.

use std::fmt;

use thiserror::Error;

use crate::constants::{LINE_DIRECTIONS, WIN_LENGTH};

/// A cell coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric id used on the wire (1 or 2).
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Terminal status of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }
}

/// Reasons a move can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move: {0:?} is outside the board")]
    OutOfBounds(Coord),
    #[error("illegal move: {0:?} is already occupied")]
    CellOccupied(Coord),
    #[error("illegal move: the game is already over")]
    GameAlreadyOver,
}

/// A Gomoku position.
///
/// Cloning produces an independent deep copy; search nodes rely on this to
/// explore continuations without touching the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    current: Player,
    status: GameStatus,
    last_move: Option<(Player, Coord)>,
    stones: usize,
}

impl Board {
    /// Create an empty board with player one to move.
    pub fn new(size: usize) -> Self {
        Self::with_first_player(size, Player::One)
    }

    /// Create an empty board with the given player to move.
    pub fn with_first_player(size: usize, first: Player) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            current: first,
            status: GameStatus::Ongoing,
            last_move: None,
            stones: 0,
        }
    }

    #[inline]
    fn idx(&self, (row, col): Coord) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The player to move. Once the game is over this stays on the player who
    /// made the final move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    #[inline]
    pub fn last_move(&self) -> Option<(Player, Coord)> {
        self.last_move
    }

    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.stones
    }

    /// The content of a cell, `None` if empty or out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Player> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        self.cells[self.idx(coord)]
    }

    #[inline]
    pub fn is_in_bounds(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    /// True if the coordinate is on the board and holds no stone.
    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord) && self.cells[self.idx(coord)].is_none()
    }

    /// Step one cell from `coord` along `(dr, dc)`, `None` when leaving the board.
    #[inline]
    pub fn step(&self, (row, col): Coord, (dr, dc): (isize, isize)) -> Option<Coord> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.is_in_bounds((r, c)).then_some((r, c))
    }

    /// All empty coordinates in row-major order.
    pub fn valid_moves(&self) -> Vec<Coord> {
        (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .filter(|&pt| self.cells[self.idx(pt)].is_none())
            .collect()
    }

    /// All coordinates holding a stone of `player`, in row-major order.
    pub fn stones_of(&self, player: Player) -> Vec<Coord> {
        (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .filter(|&pt| self.cells[self.idx(pt)] == Some(player))
            .collect()
    }

    /// Place the current player's stone at `coord`.
    ///
    /// On success the win condition is evaluated through the placed stone,
    /// then the draw condition, and if the game continues the turn passes to
    /// the opponent.
    pub fn apply_move(&mut self, coord: Coord) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.is_in_bounds(coord) {
            return Err(MoveError::OutOfBounds(coord));
        }
        let idx = self.idx(coord);
        if self.cells[idx].is_some() {
            return Err(MoveError::CellOccupied(coord));
        }

        let player = self.current;
        self.cells[idx] = Some(player);
        self.stones += 1;
        self.last_move = Some((player, coord));

        if self.check_win(coord) {
            self.status = GameStatus::Won(player);
        } else if self.stones == self.cells.len() {
            self.status = GameStatus::Draw;
        } else {
            self.current = player.opponent();
        }
        Ok(self.status)
    }

    /// True if the stone at `coord` is part of a run of at least five.
    fn check_win(&self, coord: Coord) -> bool {
        LINE_DIRECTIONS
            .iter()
            .map(|&dir| self.check_line(coord, dir).0)
            .max()
            .unwrap_or(0)
            >= WIN_LENGTH
    }

    /// Count the contiguous same-player run through `coord` along `dir`.
    ///
    /// Returns `(length, start, end)` where `start` is the last stone of the
    /// run in the negative direction and `end` the last in the positive one.
    /// An empty cell yields a run of length 0.
    pub fn check_line(&self, coord: Coord, dir: (isize, isize)) -> (usize, Coord, Coord) {
        let Some(player) = self.cell(coord) else {
            return (0, coord, coord);
        };
        let back = (-dir.0, -dir.1);
        let mut count = 1;

        let mut end = coord;
        while let Some(next) = self.step(end, dir).filter(|&n| self.cell(n) == Some(player)) {
            end = next;
            count += 1;
        }

        let mut start = coord;
        while let Some(next) = self.step(start, back).filter(|&n| self.cell(n) == Some(player)) {
            start = next;
            count += 1;
        }

        (count, start, end)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{c:>2}")?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{r:>2} ")?;
            for c in 0..self.size {
                let ch = self.cells[self.idx((r, c))].map_or('.', Player::symbol);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
