//! Rule-based move selection.
//!
//! A prioritized chain of tactical pattern detectors used both as the rollout
//! policy inside the tree search and as a cheap "obvious move" check before a
//! search is started:
//!
//! 1. Extend an own run of four with at least one open end.
//! 2. Block a rival run of four with at least one open end.
//! 3. Extend an own run of three open at both ends.
//! 4. Block a rival run of three open at both ends.
//! 5. Pick an empty cell at random, weighted towards the centre.
//! 6. Pick an empty cell uniformly at random (rollout fallback only).
//!
//! When the two ends of a run offer the same room, rules 1, 2 and 4 play the
//! end in the negative direction of the scan (the `before` end); rule 3 picks
//! one of the two ends at random.

use fastrand::Rng;

use crate::board::{Board, Coord, Player};
use crate::constants::LINE_DIRECTIONS;

/// A contiguous run of same-player stones along one line direction.
///
/// Only lives for the duration of one rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPattern {
    pub owner: Player,
    pub len: usize,
    pub dir: (isize, isize),
    /// First stone of the run (negative end of `dir`).
    pub start: Coord,
    /// Last stone of the run (positive end of `dir`).
    pub end: Coord,
    /// Contiguous empty cells extending the run before `start`, nearest first.
    pub before: Vec<Coord>,
    /// Contiguous empty cells extending the run after `end`, nearest first.
    pub after: Vec<Coord>,
}

impl RunPattern {
    #[inline]
    pub fn open_before(&self) -> usize {
        self.before.len()
    }

    #[inline]
    pub fn open_after(&self) -> usize {
        self.after.len()
    }

    /// The end with more room, `before` on ties. `None` if both ends are closed.
    fn roomier_end(&self) -> Option<Coord> {
        if self.open_after() > self.open_before() {
            self.after.first().copied()
        } else {
            self.before.first().copied()
        }
    }

    #[inline]
    fn open_both_ends(&self) -> bool {
        self.open_before() > 0 && self.open_after() > 0
    }
}

/// Identifies which rule of the chain produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    ExtendFour,
    BlockFour,
    ExtendOpenThree,
    BlockOpenThree,
    WeightedRandom,
    UniformRandom,
}

const FORCED_CHAIN: [Rule; 4] = [
    Rule::ExtendFour,
    Rule::BlockFour,
    Rule::ExtendOpenThree,
    Rule::BlockOpenThree,
];

const DECISION_CHAIN: [Rule; 5] = [
    Rule::ExtendFour,
    Rule::BlockFour,
    Rule::ExtendOpenThree,
    Rule::BlockOpenThree,
    Rule::WeightedRandom,
];

/// Rule chain evaluated from the perspective of the side to move.
pub struct RuleStrategy<'a> {
    board: &'a Board,
    player: Player,
    rival: Player,
}

impl<'a> RuleStrategy<'a> {
    pub fn new(board: &'a Board) -> Self {
        let player = board.current_player();
        Self {
            board,
            player,
            rival: player.opponent(),
        }
    }

    /// Find every run of exactly `n` stones owned by `owner`.
    ///
    /// Each run is reported once, scanned from its first stone.
    pub fn find_pattern(&self, owner: Player, n: usize) -> Vec<RunPattern> {
        let board = self.board;
        let mut patterns = Vec::new();

        for pt in board.stones_of(owner) {
            for &dir in &LINE_DIRECTIONS {
                let back = (-dir.0, -dir.1);
                if board.step(pt, back).and_then(|p| board.cell(p)) == Some(owner) {
                    continue; // not the first stone of its run
                }
                let (len, start, end) = board.check_line(pt, dir);
                if len != n {
                    continue;
                }
                patterns.push(RunPattern {
                    owner,
                    len,
                    dir,
                    start,
                    end,
                    before: self.empty_run(start, back),
                    after: self.empty_run(end, dir),
                });
            }
        }

        patterns
    }

    fn empty_run(&self, from: Coord, dir: (isize, isize)) -> Vec<Coord> {
        let mut cells = Vec::new();
        let mut cur = from;
        while let Some(next) = self.board.step(cur, dir).filter(|&p| self.board.is_empty(p)) {
            cells.push(next);
            cur = next;
        }
        cells
    }

    /// Rule 1: extend an own four.
    pub fn rule1(&self) -> Option<Coord> {
        self.find_pattern(self.player, 4)
            .iter()
            .find_map(RunPattern::roomier_end)
    }

    /// Rule 2: block a rival four.
    pub fn rule2(&self) -> Option<Coord> {
        self.find_pattern(self.rival, 4)
            .iter()
            .find_map(RunPattern::roomier_end)
    }

    /// Rule 3: extend an own three that is open at both ends.
    pub fn rule3(&self, rng: &mut Rng) -> Option<Coord> {
        let patterns = self.find_pattern(self.player, 3);
        let pat = patterns.iter().find(|p| p.open_both_ends())?;
        let (before, after) = (pat.before[0], pat.after[0]);
        Some(match pat.open_before().cmp(&pat.open_after()) {
            std::cmp::Ordering::Greater => before,
            std::cmp::Ordering::Less => after,
            std::cmp::Ordering::Equal => {
                if rng.bool() {
                    before
                } else {
                    after
                }
            }
        })
    }

    /// Rule 4: block a rival three that is open at both ends.
    pub fn rule4(&self) -> Option<Coord> {
        self.find_pattern(self.rival, 3)
            .iter()
            .filter(|p| p.open_both_ends())
            .find_map(RunPattern::roomier_end)
    }

    /// Rule 5: random empty cell, weighted by `1 / (manhattan distance to centre + 1)`.
    pub fn rule5(&self, rng: &mut Rng) -> Option<Coord> {
        let empties = self.board.valid_moves();
        if empties.is_empty() {
            return None;
        }

        let center = self.board.size() / 2;
        let weights: Vec<f64> = empties
            .iter()
            .map(|&(r, c)| 1.0 / ((r.abs_diff(center) + c.abs_diff(center)) as f64 + 1.0))
            .collect();
        let total: f64 = weights.iter().sum();

        let mut x = rng.f64();
        for (&pt, w) in empties.iter().zip(&weights) {
            let p = w / total;
            if x < p {
                return Some(pt);
            }
            x -= p;
        }
        // Rounding left a sliver of probability mass past the last cell.
        empties.last().copied()
    }

    /// Rule 6: uniformly random empty cell.
    pub fn rule6(&self, rng: &mut Rng) -> Option<Coord> {
        let empties = self.board.valid_moves();
        if empties.is_empty() {
            return None;
        }
        Some(empties[rng.usize(..empties.len())])
    }

    /// Evaluate a single rule.
    pub fn apply(&self, rule: Rule, rng: &mut Rng) -> Option<Coord> {
        match rule {
            Rule::ExtendFour => self.rule1(),
            Rule::BlockFour => self.rule2(),
            Rule::ExtendOpenThree => self.rule3(rng),
            Rule::BlockOpenThree => self.rule4(),
            Rule::WeightedRandom => self.rule5(rng),
            Rule::UniformRandom => self.rule6(rng),
        }
    }

    fn first_valid(&self, chain: &[Rule], rng: &mut Rng) -> Option<(Rule, Coord)> {
        if self.board.is_over() {
            return None;
        }
        for &rule in chain {
            if let Some(pt) = self.apply(rule, rng).filter(|&pt| self.board.is_empty(pt)) {
                return Some((rule, pt));
            }
        }
        None
    }

    /// Evaluate rules 1-4 only; `Some` means a tactical move is forced.
    pub fn forced_move(&self, rng: &mut Rng) -> Option<(Rule, Coord)> {
        self.first_valid(&FORCED_CHAIN, rng)
    }

    /// Evaluate rules 1-5 and report which rule fired.
    pub fn decide_with_rule(&self, rng: &mut Rng) -> Option<(Rule, Coord)> {
        self.first_valid(&DECISION_CHAIN, rng)
    }

    /// Evaluate rules 1-5 in order and return the first valid move.
    pub fn decide_move(&self, rng: &mut Rng) -> Option<Coord> {
        self.decide_with_rule(rng).map(|(_, pt)| pt)
    }

    /// Rollout policy: the decision chain, falling back to rule 6.
    pub fn rollout_move(&self, rng: &mut Rng) -> Option<Coord> {
        self.decide_move(rng).or_else(|| {
            if self.board.is_over() {
                None
            } else {
                self.rule6(rng)
            }
        })
    }
}

/// Rule-chain move for the side to move, `None` if the game is over.
pub fn decide_rule_move(board: &Board, rng: &mut Rng) -> Option<Coord> {
    RuleStrategy::new(board).decide_move(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board from rows of `X` (player one), `O` (player two) and `.`,
    /// alternating placements starting with player one.
    fn board_from(rows: &[&str], to_move: Player) -> Board {
        let xs = cells_of(rows, 'X');
        let os = cells_of(rows, 'O');
        let mut board = Board::new(rows.len());
        let mut xi = xs.iter();
        let mut oi = os.iter();
        loop {
            let next = match board.current_player() {
                Player::One => xi.next(),
                Player::Two => oi.next(),
            };
            let Some(&pt) = next else { break };
            board.apply_move(pt).unwrap();
        }
        assert!(xi.next().is_none() && oi.next().is_none(), "unbalanced stone counts");
        assert_eq!(board.current_player(), to_move, "side to move mismatch");
        board
    }

    fn cells_of(rows: &[&str], ch: char) -> Vec<Coord> {
        rows.iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.chars()
                    .enumerate()
                    .filter(move |&(_, c)| c == ch)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    #[test]
    fn test_find_pattern_reports_each_run_once() {
        let board = board_from(
            &[
                "......",
                ".XXX..",
                "......",
                "OO....",
                "...O..",
                "......",
            ],
            Player::One,
        );
        let strategy = RuleStrategy::new(&board);
        let threes = strategy.find_pattern(Player::One, 3);
        assert_eq!(threes.len(), 1);
        let run = &threes[0];
        assert_eq!(run.start, (1, 1));
        assert_eq!(run.end, (1, 3));
        assert_eq!(run.open_before(), 1);
        assert_eq!(run.open_after(), 2);
        assert_eq!(run.before, vec![(1, 0)]);
        assert_eq!(run.after, vec![(1, 4), (1, 5)]);
    }

    #[test]
    fn test_rule2_blocks_rival_four_at_before_end() {
        let board = board_from(
            &[
                "......",
                ".XXXX.",
                "......",
                "......",
                "OOO...",
                "......",
            ],
            Player::Two,
        );
        // Player two sees player one's four as the rival four.
        // Equal room at both ends: the before end is played.
        let strategy = RuleStrategy::new(&board);
        assert_eq!(strategy.rule1(), None);
        assert_eq!(strategy.rule2(), Some((1, 0)));
    }

    #[test]
    fn test_rule1_for_side_to_move() {
        let board = board_from(
            &[
                "......",
                ".XXXX.",
                "......",
                "O.O...",
                "...O..",
                "O.....",
            ],
            Player::One,
        );
        let mut rng = Rng::with_seed(1);
        for _ in 0..10 {
            assert_eq!(decide_rule_move(&board, &mut rng), Some((1, 0)));
        }
    }

    #[test]
    fn test_rule1_prefers_roomier_end() {
        let board = board_from(
            &[
                "........",
                "O.XXXX..",
                "........",
                "........",
                "..O.....",
                ".....O..",
                "........",
                "O.......",
            ],
            Player::One,
        );
        let strategy = RuleStrategy::new(&board);
        assert_eq!(strategy.rule1(), Some((1, 6)));
    }

    #[test]
    fn test_rule4_requires_both_ends_open() {
        // _ O O O X : only one open end, so no open-three block.
        let board = board_from(
            &[
                "......",
                ".OOOX.",
                "......",
                "X.....",
                "...X..",
                "......",
            ],
            Player::One,
        );
        let strategy = RuleStrategy::new(&board);
        assert_eq!(strategy.rule4(), None);
        assert_eq!(strategy.rule2(), None);
    }

    #[test]
    fn test_rule4_blocks_open_three() {
        let board = board_from(
            &[
                ".......",
                ".OOO...",
                ".......",
                "X......",
                "...X...",
                ".......",
                "......X",
            ],
            Player::One,
        );
        let mut rng = Rng::with_seed(9);
        let (rule, mv) = RuleStrategy::new(&board).decide_with_rule(&mut rng).unwrap();
        assert_eq!(rule, Rule::BlockOpenThree);
        assert_eq!(mv, (1, 4));
    }

    #[test]
    fn test_rule3_extends_own_open_three() {
        let board = board_from(
            &[
                ".......",
                "..XXX..",
                ".......",
                "O......",
                "......O",
                ".......",
                "...O...",
            ],
            Player::One,
        );
        let mut rng = Rng::with_seed(11);
        let strategy = RuleStrategy::new(&board);
        for _ in 0..10 {
            let mv = strategy.rule3(&mut rng).unwrap();
            assert!(mv == (1, 1) || mv == (1, 5));
        }
    }

    #[test]
    fn test_rule3_prefers_end_with_more_room() {
        let board = board_from(
            &[
                ".......",
                ".XXX...",
                ".......",
                "O......",
                "......O",
                ".......",
                "...O...",
            ],
            Player::One,
        );
        let mut rng = Rng::with_seed(23);
        let strategy = RuleStrategy::new(&board);
        for _ in 0..10 {
            assert_eq!(strategy.rule3(&mut rng), Some((1, 4)));
        }
    }

    #[test]
    fn test_rule5_only_returns_empty_cells() {
        let mut board = Board::new(5);
        for mv in [(2, 2), (0, 0), (4, 4)] {
            board.apply_move(mv).unwrap();
        }
        let strategy = RuleStrategy::new(&board);
        let mut rng = Rng::with_seed(13);
        for _ in 0..200 {
            let mv = strategy.rule5(&mut rng).unwrap();
            assert!(board.is_empty(mv));
        }
    }

    #[test]
    fn test_rule5_favours_center() {
        let board = Board::new(9);
        let strategy = RuleStrategy::new(&board);
        let mut rng = Rng::with_seed(17);
        let mut center = 0;
        let mut corner = 0;
        for _ in 0..20_000 {
            match strategy.rule5(&mut rng).unwrap() {
                (4, 4) => center += 1,
                (0, 0) => corner += 1,
                _ => {}
            }
        }
        assert!(center > corner * 3, "center={center} corner={corner}");
    }

    #[test]
    fn test_rules_silent_on_finished_game() {
        let mut board = Board::new(3);
        for r in 0..3 {
            for c in 0..3 {
                board.apply_move((r, c)).unwrap();
            }
        }
        assert!(board.is_over());
        let mut rng = Rng::with_seed(19);
        let strategy = RuleStrategy::new(&board);
        assert_eq!(strategy.decide_move(&mut rng), None);
        assert_eq!(strategy.rollout_move(&mut rng), None);
    }
}
