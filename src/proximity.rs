//! Proximity filter for candidate moves.
//!
//! Restricts the branching factor of the search to empty cells close to the
//! stones already on the board. Distances are measured with a multi-source
//! breadth-first search over 8-directional adjacency, seeded from every stone.
//!
//! The radius counts the empty cells that may separate a candidate from its
//! nearest stone: radius 0 keeps only cells touching a stone, radius 1 keeps
//! cells up to two king steps away.

use std::collections::VecDeque;

use crate::board::{Board, Coord};
use crate::constants::NEIGHBOR_DELTA;

/// Return the empty cells within `max_distance` empty cells of a stone.
///
/// Cells are returned in breadth-first discovery order, so closer cells come
/// first; the order among cells at the same distance is unspecified.
///
/// An empty board yields the single centre cell. If stones exist but no empty
/// cell is close enough, every empty cell is returned.
pub fn nearby_empty_cells(board: &Board, max_distance: usize) -> Vec<Coord> {
    let n = board.size();
    let mut dist = vec![usize::MAX; n * n];
    let mut queue = VecDeque::with_capacity(n * n);

    for r in 0..n {
        for c in 0..n {
            if board.cell((r, c)).is_some() {
                dist[r * n + c] = 0;
                queue.push_back((r, c));
            }
        }
    }

    if queue.is_empty() {
        return vec![(n / 2, n / 2)];
    }

    let max_steps = max_distance + 1;
    let mut found = Vec::new();

    while let Some(pt) = queue.pop_front() {
        let d = dist[pt.0 * n + pt.1];
        if d >= max_steps {
            continue;
        }
        for &delta in &NEIGHBOR_DELTA {
            let Some(next) = board.step(pt, delta) else {
                continue;
            };
            let i = next.0 * n + next.1;
            if board.is_empty(next) && dist[i] > d + 1 {
                dist[i] = d + 1;
                found.push(next);
                queue.push_back(next);
            }
        }
    }

    if found.is_empty() {
        return board.valid_moves();
    }
    found
}
