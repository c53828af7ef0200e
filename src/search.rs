//! The three maze searches and their recorded exploration.
//!
//! Each search runs to completion synchronously and records a [`Step`] log describing the order
//! in which cells were pulled from the frontier, settled, and finally traced back along the
//! reconstructed path. The animation player replays that log later; nothing here touches the
//! terminal.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap, HashSet, VecDeque},
};

use color_eyre::eyre::{OptionExt as _, Result};

use crate::grid::{Grid, Pos};

/// The search strategies the user can trigger from the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Algorithm {
    /// Depth-first search over an explicit stack.
    Dfs,
    /// Breadth-first search over a queue; the reconstructed path is a shortest path.
    Bfs,
    /// A* over a binary-heap open list with uniform step cost and a Euclidean heuristic.
    AStar,
}

impl Algorithm {
    /// Returns the human-readable name shown in the status line.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Dfs => "depth-first search",
            Self::Bfs => "breadth-first search",
            Self::AStar => "A* search",
        }
    }
}

/// One frame of the recorded exploration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// A cell was pulled from the frontier and is being examined.
    Visit(Pos),
    /// The cell's neighbors have been expanded; it is settled.
    Settle(Pos),
    /// The end cell was reached; the search stops here.
    Goal(Pos),
    /// A cell of the reconstructed path, walked backward from the end.
    Trace(Pos),
}

/// The complete record of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Outcome {
    /// The exploration log, in replay order.
    pub steps: Vec<Step>,
    /// The reconstructed path, start to end inclusive; empty when the end is unreachable.
    pub path: Vec<Pos>,
    /// Number of cells pulled from the frontier and processed, the goal included.
    pub visited: usize,
}

/// Runs the chosen search over the board.
///
/// # Errors
///
/// Fails when the board has no start or no end cell.
pub(crate) fn run(grid: &Grid, algorithm: Algorithm) -> Result<Outcome> {
    let start = grid.start().ok_or_eyre("no start cell on the board")?;
    let end = grid.end().ok_or_eyre("no end cell on the board")?;

    Ok(match algorithm {
        Algorithm::Dfs => dfs(grid, start, end),
        Algorithm::Bfs => bfs(grid, start, end),
        Algorithm::AStar => astar(grid, start, end),
    })
}

/// Depth-first search with the visited check at pop time.
///
/// A cell may sit on the stack more than once; the later push wins the predecessor slot, which
/// always points at an earlier-settled cell, so the backward walk terminates at the start.
fn dfs(grid: &Grid, start: Pos, end: Pos) -> Outcome {
    let mut steps = Vec::new();
    let mut prev: HashMap<Pos, Pos> = HashMap::new();
    let mut visited: HashSet<Pos> = HashSet::new();
    let mut stack = vec![start];
    let mut expanded = 0;
    let mut found = false;

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        expanded += 1;

        if current == end {
            steps.push(Step::Goal(current));
            found = true;
            break;
        }

        steps.push(Step::Visit(current));
        steps.push(Step::Settle(current));

        for neighbor in grid.neighbors(current) {
            if !visited.contains(&neighbor) {
                let _ = prev.insert(neighbor, current);
                stack.push(neighbor);
            }
        }
    }

    finish(steps, &prev, start, end, expanded, found)
}

/// Breadth-first search, marking cells discovered at enqueue time.
///
/// Each cell enters the queue once, so the predecessor map describes a shortest path in steps.
fn bfs(grid: &Grid, start: Pos, end: Pos) -> Outcome {
    let mut steps = Vec::new();
    let mut prev: HashMap<Pos, Pos> = HashMap::new();
    let mut discovered = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut expanded = 0;
    let mut found = false;

    while let Some(current) = queue.pop_front() {
        expanded += 1;

        if current == end {
            steps.push(Step::Goal(current));
            found = true;
            break;
        }

        steps.push(Step::Visit(current));
        steps.push(Step::Settle(current));

        for neighbor in grid.neighbors(current) {
            if discovered.insert(neighbor) {
                let _ = prev.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    finish(steps, &prev, start, end, expanded, found)
}

/// Entry in the A* open list, ordered so the binary heap pops the lowest estimate first.
#[derive(Debug)]
struct OpenEntry {
    /// Estimated total cost through this cell, `cost` plus the heuristic.
    estimate: f64,
    /// Steps taken from the start to reach this cell.
    cost: u32,
    /// The cell itself.
    pos: Pos,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on the estimate so the max-heap behaves as a min-heap; ties prefer the entry
        // deeper into the maze.
        match other.estimate.total_cmp(&self.estimate) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            ordering => ordering,
        }
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Straight-line distance between two cells, the A* heuristic.
fn heuristic(from: Pos, to: Pos) -> f64 {
    let dcol = f64::from(u32::try_from(from.0.abs_diff(to.0)).unwrap_or(u32::MAX));
    let drow = f64::from(u32::try_from(from.1.abs_diff(to.1)).unwrap_or(u32::MAX));
    dcol.hypot(drow)
}

/// A* with uniform step cost.
///
/// Stale heap entries are skipped when popped; a neighbor is pushed whenever the tentative cost
/// beats the best known one, taking over the predecessor slot.
fn astar(grid: &Grid, start: Pos, end: Pos) -> Outcome {
    let mut steps = Vec::new();
    let mut prev: HashMap<Pos, Pos> = HashMap::new();
    let mut best: HashMap<Pos, u32> = HashMap::from([(start, 0)]);
    let mut settled: HashSet<Pos> = HashSet::new();
    let mut open = BinaryHeap::from([OpenEntry {
        estimate: heuristic(start, end),
        cost: 0,
        pos: start,
    }]);
    let mut expanded = 0;
    let mut found = false;

    while let Some(entry) = open.pop() {
        if !settled.insert(entry.pos) {
            continue;
        }
        expanded += 1;

        if entry.pos == end {
            steps.push(Step::Goal(entry.pos));
            found = true;
            break;
        }

        steps.push(Step::Visit(entry.pos));
        steps.push(Step::Settle(entry.pos));

        for neighbor in grid.neighbors(entry.pos) {
            if settled.contains(&neighbor) {
                continue;
            }
            let tentative = entry.cost + 1;
            if best
                .get(&neighbor)
                .copied()
                .is_none_or(|known| tentative < known)
            {
                let _ = best.insert(neighbor, tentative);
                let _ = prev.insert(neighbor, entry.pos);
                open.push(OpenEntry {
                    estimate: f64::from(tentative) + heuristic(neighbor, end),
                    cost: tentative,
                    pos: neighbor,
                });
            }
        }
    }

    finish(steps, &prev, start, end, expanded, found)
}

/// Walks the predecessor map backward from the end to the start.
///
/// Returns the path in start-to-end order, or an empty vector when the chain is broken.
fn reconstruct(prev: &HashMap<Pos, Pos>, start: Pos, end: Pos) -> Vec<Pos> {
    let mut path = vec![end];
    let mut cursor = end;

    while cursor != start {
        let Some(&previous) = prev.get(&cursor) else {
            return Vec::new();
        };
        path.push(previous);
        cursor = previous;
    }

    path.reverse();
    path
}

/// Reconstructs the path and appends its trace frames to the step log.
///
/// Trace frames run end to start, the order the backward walk discovers them in.
fn finish(
    mut steps: Vec<Step>,
    prev: &HashMap<Pos, Pos>,
    start: Pos,
    end: Pos,
    visited: usize,
    found: bool,
) -> Outcome {
    let path = if found {
        reconstruct(prev, start, end)
    } else {
        Vec::new()
    };

    for &waypoint in path.iter().rev() {
        steps.push(Step::Trace(waypoint));
    }

    Outcome {
        steps,
        path,
        visited,
    }
}
