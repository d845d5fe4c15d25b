//! Monte Carlo Tree Search (MCTS) guided by the rule chain.
//!
//! Each decision runs a fixed number of simulation cycles:
//! - Selection: descend by UCB1 until a node without children
//! - Expansion: create one child per candidate move (all empty cells, or only
//!   those near existing stones) and pick one of them at random
//! - Simulation: play out the position with the rule chain as policy
//! - Backpropagation: credit every node on the path from the perspective of
//!   the player to move at the root
//!
//! Nodes own their children directly. The way back to the root is the path of
//! child indices recorded during selection, so a node never holds an owning
//! pointer to its parent.

use std::time::{Duration, Instant};

use fastrand::Rng;
use thiserror::Error;

use crate::board::{Board, Coord, Player};
use crate::constants::{
    DRAW_CREDIT, N_SIMS, PROXIMITY_RADIUS, SIMULATION_DEPTH, UCB_C, UNVISITED_URGENCY, WIN_CREDIT,
};
use crate::proximity::nearby_empty_cells;
use crate::rules::{Rule, RuleStrategy, decide_rule_move};

/// Configuration for one AI decision.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Number of selection/expansion/simulation/backpropagation cycles.
    pub simulation_count: usize,
    /// Maximum plies played in one rollout.
    pub simulation_depth_cap: usize,
    /// Expand only cells close to existing stones.
    pub proximity_only: bool,
    /// Radius used when `proximity_only` is set.
    pub proximity_radius: usize,
    /// UCB1 exploration coefficient.
    pub exploration: f64,
    /// Play a forced tactical move (rules 1-4) without searching.
    pub rule_shortcut: bool,
    /// Wall-clock cap; when exceeded the best move so far is returned.
    pub time_limit: Option<Duration>,
    /// Seed for the search RNG. `None` seeds from the system.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            simulation_count: N_SIMS,
            simulation_depth_cap: SIMULATION_DEPTH,
            proximity_only: false,
            proximity_radius: PROXIMITY_RADIUS,
            exploration: UCB_C,
            rule_shortcut: false,
            time_limit: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Builder pattern: set number of simulations.
    pub fn with_simulations(mut self, n: usize) -> Self {
        self.simulation_count = n;
        self
    }

    /// Builder pattern: set rollout depth cap.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.simulation_depth_cap = depth;
        self
    }

    /// Builder pattern: restrict expansion to cells within `radius` of a stone.
    pub fn with_proximity(mut self, radius: usize) -> Self {
        self.proximity_only = true;
        self.proximity_radius = radius;
        self
    }

    /// Builder pattern: expand every empty cell.
    pub fn with_full_expansion(mut self) -> Self {
        self.proximity_only = false;
        self
    }

    pub fn with_rule_shortcut(mut self, enabled: bool) -> Self {
        self.rule_shortcut = enabled;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create the RNG for a search run with this configuration.
    pub fn rng(&self) -> Rng {
        self.seed.map_or_else(Rng::new, Rng::with_seed)
    }
}

/// Errors a search can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no legal moves: the game is over")]
    NoLegalMoves,
}

/// How a move was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Best child after the simulation budget ran out.
    Search,
    /// Forced tactical move found before searching.
    Rule(Rule),
    /// Only one empty cell was left.
    OnlyMove,
    /// No child was visited (zero budget or time limit); the rule chain chose.
    Fallback,
}

/// Result of one tree search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub player: Player,
    pub coord: Coord,
    pub source: MoveSource,
    /// Simulation cycles actually run.
    pub simulations: usize,
    /// Exploitation value of the chosen child, if it was visited.
    pub win_rate: Option<f64>,
}

/// A node in the MCTS search tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// The position at this node
    pub board: Board,
    /// The move that produced this position, `None` at a fresh root
    pub mv: Option<(Player, Coord)>,
    /// Number of visits
    pub visits: u32,
    /// Accumulated win credit for the root player (winrate = wins/visits)
    pub wins: f64,
    /// Winner cached from a decisive rollout; such a node is not simulated again
    pub winner: Option<Player>,
    /// Child nodes, empty until expanded
    pub children: Vec<TreeNode>,
}

/// Visit statistics of one root child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildStats {
    pub coord: Coord,
    pub visits: u32,
    pub wins: f64,
}

impl TreeNode {
    /// Create a root node for the given position.
    pub fn new(board: Board) -> Self {
        let mv = board.last_move();
        Self::with_move(board, mv)
    }

    fn with_move(board: Board, mv: Option<(Player, Coord)>) -> Self {
        Self {
            board,
            mv,
            visits: 0,
            wins: 0.0,
            winner: None,
            children: Vec::new(),
        }
    }

    /// Calculate the winrate for this node.
    #[inline]
    pub fn winrate(&self) -> f64 {
        if self.visits > 0 {
            self.wins / self.visits as f64
        } else {
            -0.1 // Indicate unvisited
        }
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Statistics of every child, in expansion order.
    pub fn child_stats(&self) -> Vec<ChildStats> {
        self.children
            .iter()
            .filter_map(|c| {
                c.mv.map(|(_, coord)| ChildStats {
                    coord,
                    visits: c.visits,
                    wins: c.wins,
                })
            })
            .collect()
    }

    /// Total number of nodes in this subtree.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::subtree_size).sum::<usize>()
    }
}

/// UCB1 score of a child given its parent's visit count.
///
/// Unvisited children score [`UNVISITED_URGENCY`] so they are tried first.
#[inline]
pub fn ucb1(child: &TreeNode, parent_visits: u32, c: f64) -> f64 {
    if child.visits == 0 {
        return UNVISITED_URGENCY;
    }
    let n = child.visits as f64;
    let exploration = if c == 0.0 {
        0.0
    } else {
        c * (2.0 * (parent_visits.max(1) as f64).ln() / n).sqrt()
    };
    child.wins / n + exploration
}

/// Select the child with the highest UCB1 score, first one on ties.
fn most_urgent(node: &TreeNode, c: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, child) in node.children.iter().enumerate() {
        let value = ucb1(child, node.visits, c);
        if best.is_none_or(|(_, b)| value > b) {
            best = Some((i, value));
        }
    }
    best.map(|(i, _)| i)
}

/// Descend through the tree to a node without children, recording the path.
fn tree_descend(root: &TreeNode, c: f64) -> Vec<usize> {
    let mut path = Vec::new();
    let mut node = root;
    while let Some(idx) = most_urgent(node, c) {
        path.push(idx);
        node = &node.children[idx];
    }
    path
}

fn node_at_mut<'a>(root: &'a mut TreeNode, path: &[usize]) -> &'a mut TreeNode {
    path.iter().fold(root, |node, &idx| &mut node.children[idx])
}

/// Expand a leaf by creating one child per candidate move.
///
/// Returns the index of a uniformly chosen new child, or `None` when the node
/// is already expanded, has a cached winner, or has no candidate moves.
pub fn expand(node: &mut TreeNode, config: &SearchConfig, rng: &mut Rng) -> Option<usize> {
    if node.is_expanded() || node.winner.is_some() || node.board.is_over() {
        return None;
    }

    let actions = if config.proximity_only {
        nearby_empty_cells(&node.board, config.proximity_radius)
    } else {
        node.board.valid_moves()
    };

    let player = node.board.current_player();
    for coord in actions {
        let mut child_board = node.board.clone();
        if child_board.apply_move(coord).is_ok() {
            node.children
                .push(TreeNode::with_move(child_board, Some((player, coord))));
        } else {
            debug_assert!(false, "candidate move {coord:?} rejected");
        }
    }

    if node.children.is_empty() {
        None
    } else {
        Some(rng.usize(..node.children.len()))
    }
}

/// Play out the node's position with the rule chain.
///
/// A decisive result is cached on the node. Returns `None` for a draw or when
/// the depth cap is reached first.
pub fn simulate(node: &mut TreeNode, depth_cap: usize, rng: &mut Rng) -> Option<Player> {
    if let Some(winner) = node.winner {
        return Some(winner);
    }

    let mut board = node.board.clone();
    let mut plies = 0;
    while !board.is_over() && plies < depth_cap {
        let Some(mv) = RuleStrategy::new(&board).rollout_move(rng) else {
            break;
        };
        if board.apply_move(mv).is_err() {
            debug_assert!(false, "rollout produced invalid move {mv:?}");
            break;
        }
        plies += 1;
    }

    let winner = board.winner();
    if winner.is_some() {
        node.winner = winner;
    }
    winner
}

/// Credit earned by a rollout result from the root player's perspective.
#[inline]
fn credit(result: Option<Player>, root_player: Player) -> f64 {
    match result {
        Some(p) if p == root_player => WIN_CREDIT,
        Some(_) => 0.0,
        None => DRAW_CREDIT,
    }
}

/// Add one visit and the result's credit to every node on the path.
fn tree_update(root: &mut TreeNode, path: &[usize], result: Option<Player>) {
    let score = credit(result, root.board.current_player());
    root.visits += 1;
    root.wins += score;

    let mut node = root;
    for &idx in path {
        node = &mut node.children[idx];
        node.visits += 1;
        node.wins += score;
        debug_assert!(node.wins <= node.visits as f64 + 1e-9);
    }
}

/// Run one selection/expansion/simulation/backpropagation cycle.
pub fn run_simulation(root: &mut TreeNode, config: &SearchConfig, rng: &mut Rng) {
    let mut path = tree_descend(root, config.exploration);

    let leaf = node_at_mut(root, &path);
    let node = match expand(leaf, config, rng) {
        Some(idx) => {
            path.push(idx);
            &mut leaf.children[idx]
        }
        None => leaf,
    };

    let result = simulate(node, config.simulation_depth_cap, rng);
    tree_update(root, &path, result);
}

/// Index of the visited root child with the best win rate, first one on ties.
pub fn best_child(root: &TreeNode) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, child) in root.children.iter().enumerate() {
        if child.visits == 0 {
            continue;
        }
        let value = ucb1(child, root.visits, 0.0);
        if best.is_none_or(|(_, b)| value > b) {
            best = Some((i, value));
        }
    }
    best.map(|(i, _)| i)
}

/// Run MCTS from the given root and return the chosen move.
///
/// Short-circuits when only one cell is empty, or when `rule_shortcut` is set
/// and the rule chain finds a forced move. Otherwise runs
/// `simulation_count` cycles (or until `time_limit` expires) and picks the
/// visited child with the highest win rate.
pub fn tree_search(
    root: &mut TreeNode,
    config: &SearchConfig,
    rng: &mut Rng,
) -> Result<SearchOutcome, SearchError> {
    let board = &root.board;
    if board.is_over() || board.empty_count() == 0 {
        return Err(SearchError::NoLegalMoves);
    }
    let player = board.current_player();

    if board.empty_count() == 1 {
        let coord = board.valid_moves()[0];
        return Ok(SearchOutcome {
            player,
            coord,
            source: MoveSource::OnlyMove,
            simulations: 0,
            win_rate: None,
        });
    }

    if config.rule_shortcut {
        if let Some((rule, coord)) = RuleStrategy::new(board).forced_move(rng) {
            return Ok(SearchOutcome {
                player,
                coord,
                source: MoveSource::Rule(rule),
                simulations: 0,
                win_rate: None,
            });
        }
    }

    // A cached rollout winner only cuts leaves short; the root must expand.
    root.winner = None;

    let start = Instant::now();
    let mut simulations = 0;
    for _ in 0..config.simulation_count {
        if config.time_limit.is_some_and(|limit| start.elapsed() >= limit) {
            break;
        }
        run_simulation(root, config, rng);
        simulations += 1;
    }

    if let Some(idx) = best_child(root) {
        let child = &root.children[idx];
        if let Some((_, coord)) = child.mv {
            return Ok(SearchOutcome {
                player,
                coord,
                source: MoveSource::Search,
                simulations,
                win_rate: Some(child.winrate()),
            });
        }
    }

    let coord = decide_rule_move(&root.board, rng)
        .or_else(|| root.board.valid_moves().first().copied())
        .ok_or(SearchError::NoLegalMoves)?;
    Ok(SearchOutcome {
        player,
        coord,
        source: MoveSource::Fallback,
        simulations,
        win_rate: None,
    })
}

/// Choose the AI move for the side to move on `board` with a fresh tree.
pub fn choose_ai_move(board: &Board, config: &SearchConfig) -> Result<(Player, Coord), SearchError> {
    let mut rng = config.rng();
    let mut root = TreeNode::new(board.clone());
    let outcome = tree_search(&mut root, config, &mut rng)?;
    Ok((outcome.player, outcome.coord))
}

/// A search tree kept across the turns of one game.
///
/// After a move is played on the real board, [`GameTree::sync`] promotes the
/// matching child to be the new root so its statistics carry over.
pub struct GameTree {
    root: TreeNode,
    rng: Rng,
}

impl GameTree {
    pub fn new(board: &Board, config: &SearchConfig) -> Self {
        Self {
            root: TreeNode::new(board.clone()),
            rng: config.rng(),
        }
    }

    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Bring the root in line with `board`.
    ///
    /// Looks for `board` among the root's children and grandchildren so that
    /// both the AI's move and the opponent's reply can be followed. Anything
    /// else rebuilds the tree from scratch.
    pub fn sync(&mut self, board: &Board) {
        if self.root.board == *board {
            return;
        }
        if let Some(i) = self.root.children.iter().position(|c| c.board == *board) {
            let node = self.root.children.swap_remove(i);
            self.promote(node);
            return;
        }
        for i in 0..self.root.children.len() {
            if let Some(j) = self.root.children[i]
                .children
                .iter()
                .position(|c| c.board == *board)
            {
                let node = self.root.children[i].children.swap_remove(j);
                self.promote(node);
                return;
            }
        }
        self.root = TreeNode::new(board.clone());
    }

    fn promote(&mut self, mut node: TreeNode) {
        if !node.board.is_over() {
            node.winner = None;
        }
        self.root = node;
    }

    /// Search from the current root and promote the chosen child.
    pub fn search(&mut self, config: &SearchConfig) -> Result<SearchOutcome, SearchError> {
        let outcome = tree_search(&mut self.root, config, &mut self.rng)?;
        let mut next = self.root.board.clone();
        if next.apply_move(outcome.coord).is_ok() {
            self.sync(&next);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_stats(node: &TreeNode) {
        assert!(node.wins >= 0.0, "negative win score");
        assert!(
            node.wins <= node.visits as f64 + 1e-9,
            "wins {} exceed visits {}",
            node.wins,
            node.visits
        );
        for child in &node.children {
            check_stats(child);
        }
    }

    fn opening(size: usize, moves: &[Coord]) -> Board {
        let mut board = Board::new(size);
        for &mv in moves {
            board.apply_move(mv).unwrap();
        }
        board
    }

    #[test]
    fn test_ucb1_unvisited_is_infinite() {
        let node = TreeNode::new(Board::new(5));
        assert_eq!(ucb1(&node, 10, UCB_C), f64::INFINITY);
    }

    #[test]
    fn test_ucb1_formula() {
        let mut node = TreeNode::new(Board::new(5));
        node.visits = 4;
        node.wins = 1.0;
        let expected = 0.25 + 0.5 * (2.0 * (16.0f64).ln() / 4.0).sqrt();
        assert!((ucb1(&node, 16, 0.5) - expected).abs() < 1e-12);
        assert!((ucb1(&node, 16, 0.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_expand_full_and_nearby() {
        let board = opening(7, &[(3, 3)]);
        let config = SearchConfig::default();
        let mut rng = Rng::with_seed(1);

        let mut full = TreeNode::new(board.clone());
        assert!(expand(&mut full, &config, &mut rng).is_some());
        assert_eq!(full.children.len(), 48);
        assert!(full.children.iter().all(|c| c.mv.unwrap().0 == Player::Two));

        let mut near = TreeNode::new(board);
        let config = config.with_proximity(0);
        let idx = expand(&mut near, &config, &mut rng).unwrap();
        assert_eq!(near.children.len(), 8);
        assert!(idx < 8);

        // Second expansion is a no-op.
        assert_eq!(expand(&mut near, &config, &mut rng), None);
        assert_eq!(near.children.len(), 8);
    }

    #[test]
    fn test_simulate_caches_decisive_winner() {
        let board = opening(
            7,
            &[(0, 0), (6, 0), (0, 1), (6, 2), (0, 2), (6, 4), (0, 3), (5, 6)],
        );
        let mut node = TreeNode::new(board);
        let mut rng = Rng::with_seed(2);
        // Player one completes the open four immediately.
        assert_eq!(simulate(&mut node, 10, &mut rng), Some(Player::One));
        assert_eq!(node.winner, Some(Player::One));
        assert_eq!(simulate(&mut node, 0, &mut rng), Some(Player::One));
    }

    #[test]
    fn test_simulate_depth_cap_gives_no_result() {
        let mut node = TreeNode::new(Board::new(9));
        let mut rng = Rng::with_seed(3);
        assert_eq!(simulate(&mut node, 0, &mut rng), None);
        assert_eq!(node.winner, None);
    }

    #[test]
    fn test_backprop_credit() {
        assert_eq!(credit(Some(Player::One), Player::One), WIN_CREDIT);
        assert_eq!(credit(Some(Player::Two), Player::One), 0.0);
        assert_eq!(credit(None, Player::One), DRAW_CREDIT);
    }

    #[test]
    fn test_statistics_stay_bounded() {
        let board = opening(7, &[(3, 3), (3, 4), (2, 2)]);
        for config in [
            SearchConfig::default().with_simulations(150).with_depth(40),
            SearchConfig::default()
                .with_simulations(150)
                .with_depth(40)
                .with_proximity(1),
        ] {
            let mut rng = Rng::with_seed(4);
            let mut root = TreeNode::new(board.clone());
            let outcome = tree_search(&mut root, &config, &mut rng).unwrap();
            assert_eq!(outcome.simulations, 150);
            assert_eq!(root.visits, 150);
            check_stats(&root);
            assert!(board.is_empty(outcome.coord));
        }
    }

    #[test]
    fn test_root_visits_match_children_after_full_expansion() {
        let board = opening(5, &[(2, 2)]);
        let config = SearchConfig::default().with_simulations(60).with_depth(30);
        let mut rng = Rng::with_seed(5);
        let mut root = TreeNode::new(board);
        tree_search(&mut root, &config, &mut rng).unwrap();
        let child_visits: u32 = root.children.iter().map(|c| c.visits).sum();
        assert_eq!(child_visits, root.visits);
        assert_eq!(root.child_stats().len(), 24);
    }

    #[test]
    fn test_only_move_returned_directly() {
        let mut board = Board::new(3);
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0)];
        for mv in moves {
            board.apply_move(mv).unwrap();
        }
        for sims in [0, 1, 100] {
            let config = SearchConfig::default().with_simulations(sims);
            assert_eq!(choose_ai_move(&board, &config), Ok((Player::One, (2, 2))));
        }
    }

    #[test]
    fn test_finished_game_has_no_moves() {
        let mut board = Board::new(3);
        for r in 0..3 {
            for c in 0..3 {
                board.apply_move((r, c)).unwrap();
            }
        }
        let config = SearchConfig::default();
        assert_eq!(choose_ai_move(&board, &config), Err(SearchError::NoLegalMoves));
    }

    #[test]
    fn test_zero_budget_falls_back_to_rules() {
        let board = opening(7, &[(3, 3)]);
        let config = SearchConfig::default().with_simulations(0).with_seed(6);
        let mut rng = config.rng();
        let mut root = TreeNode::new(board.clone());
        let outcome = tree_search(&mut root, &config, &mut rng).unwrap();
        assert_eq!(outcome.source, MoveSource::Fallback);
        assert!(board.is_empty(outcome.coord));
    }

    #[test]
    fn test_rule_shortcut_blocks_four() {
        let board = opening(
            8,
            &[(1, 1), (7, 7), (1, 2), (7, 5), (1, 3), (5, 7), (1, 4)],
        );
        let config = SearchConfig::default()
            .with_simulations(1000)
            .with_rule_shortcut(true)
            .with_seed(7);
        let mut rng = config.rng();
        let mut root = TreeNode::new(board);
        let outcome = tree_search(&mut root, &config, &mut rng).unwrap();
        assert_eq!(outcome.source, MoveSource::Rule(Rule::BlockFour));
        assert_eq!(outcome.simulations, 0);
        assert_eq!(outcome.coord, (1, 5));
    }

    #[test]
    fn test_time_limit_stops_early() {
        let board = opening(9, &[(4, 4)]);
        let config = SearchConfig::default()
            .with_simulations(1_000_000)
            .with_time_limit(Duration::from_millis(30))
            .with_seed(8);
        let mut rng = config.rng();
        let mut root = TreeNode::new(board.clone());
        let outcome = tree_search(&mut root, &config, &mut rng).unwrap();
        assert!(outcome.simulations < 1_000_000);
        assert!(board.is_empty(outcome.coord));
    }

    #[test]
    fn test_game_tree_promotes_chosen_child() {
        let board = opening(6, &[(2, 2)]);
        let config = SearchConfig::default()
            .with_simulations(80)
            .with_depth(30)
            .with_seed(9);
        let mut tree = GameTree::new(&board, &config);
        let outcome = tree.search(&config).unwrap();

        let mut next = board.clone();
        next.apply_move(outcome.coord).unwrap();
        assert_eq!(tree.root().board, next);
        assert_eq!(tree.root().mv, Some((Player::Two, outcome.coord)));

        // An unrelated position rebuilds the tree.
        let other = opening(6, &[(0, 0)]);
        tree.sync(&other);
        assert_eq!(tree.root().board, other);
        assert_eq!(tree.root().visits, 0);
    }

    #[test]
    fn test_root_with_cached_winner_is_still_searched() {
        let board = opening(7, &[(3, 3), (3, 4)]);
        let config = SearchConfig::default()
            .with_simulations(50)
            .with_depth(20)
            .with_proximity(1)
            .with_seed(6);
        let mut rng = config.rng();
        let mut root = TreeNode::new(board);
        root.winner = Some(Player::One);
        let outcome = tree_search(&mut root, &config, &mut rng).unwrap();
        assert_eq!(outcome.source, MoveSource::Search);
        assert!(root.is_expanded());
    }

    #[test]
    fn test_sync_onto_cached_winner_grandchild() {
        let board = opening(7, &[(3, 3)]);
        let config = SearchConfig::default()
            .with_simulations(60)
            .with_depth(20)
            .with_proximity(1)
            .with_seed(4);
        let mut rng = config.rng();
        let mut tree = GameTree::new(&board, &config);
        expand(&mut tree.root, &config, &mut rng).unwrap();
        expand(&mut tree.root.children[0], &config, &mut rng).unwrap();
        let grandchild = &mut tree.root.children[0].children[0];
        grandchild.winner = Some(Player::One);
        grandchild.visits = 1;
        grandchild.wins = 1.0;
        let target = grandchild.board.clone();
        assert!(!target.is_over());

        tree.sync(&target);
        assert_eq!(tree.root().board, target);
        assert_eq!(tree.root().winner, None);
        assert_eq!(tree.root().visits, 1);

        let outcome = tree.search(&config).unwrap();
        assert_eq!(outcome.source, MoveSource::Search);
        assert_eq!(outcome.simulations, 60);
    }
}
