use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use log::{info, warn};
use thiserror::Error;
use crate::config::SolverConfig;
use crate::core::{step, GameChangeType, GameState, GameUpdate, Maze, SharedGameState, UserAction};
use crate::solver::deadlock::is_deadlock;
use crate::solver::heuristics::estimate_cost;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no player found in maze")]
    NoPlayer,
    #[error("maze holds {count} players")]
    MultiplePlayers { count: usize },
    #[error("maze holds {boxes} boxes but no goals")]
    NoGoals { boxes: usize },
    #[error("maze holds {boxes} boxes for {goals} goals")]
    BoxGoalMismatch { boxes: usize, goals: usize },
    #[error("initial configuration is deadlocked")]
    Deadlocked,
    #[error("no solution within {iterations} iterations")]
    IterationLimit { iterations: usize },
    #[error("search space exhausted after {iterations} iterations")]
    SearchExhausted { iterations: usize },
}

impl SolveError {
    /// The single failure value older consumers expect.
    pub fn legacy_code(&self) -> i64 {
        -1
    }
}

/// Best plan found. `moves` is an upper bound on the optimum, not a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub moves: usize,
    pub pushes: usize,
    pub iterations: usize,
}

struct SearchNode {
    state: GameState,
    moves: usize,
    pushes: usize,
    priority: f64,
    sequence: u64,
}

// BinaryHeap pops the greatest element: lower priority wins, then earlier insertion.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

pub struct PuzzleSolver<'a> {
    config: &'a SolverConfig,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(config: &'a SolverConfig) -> Self {
        PuzzleSolver { config }
    }

    pub fn solve(&self, maze: &Maze) -> Result<Solution, SolveError> {
        let (shared, boxes, players) = SharedGameState::from_maze(maze);
        let player = match players.as_slice() {
            [] => {
                warn!("no player found in maze");
                return Err(SolveError::NoPlayer);
            }
            [player] => *player,
            _ => return Err(SolveError::MultiplePlayers { count: players.len() }),
        };
        if boxes.is_empty() {
            warn!("no boxes found in maze");
            return Ok(Solution { moves: 0, pushes: 0, iterations: 0 });
        }
        if shared.goals.is_empty() {
            warn!("no goals found in maze");
            return Err(SolveError::NoGoals { boxes: boxes.len() });
        }
        if boxes.len() != shared.goals.len() {
            warn!("number of boxes does not match number of goals");
            return Err(SolveError::BoxGoalMismatch {
                boxes: boxes.len(),
                goals: shared.goals.len(),
            });
        }
        if is_deadlock(&shared, &boxes) {
            warn!("initial state is in deadlock");
            return Err(SolveError::Deadlocked);
        }

        self.search(&shared, GameState::new(player, boxes))
    }

    /// Greedy best-first search from `initial`. Keeps going after the first
    /// win, looking for a shorter one until the frontier or the budget runs out.
    pub fn search(&self, shared: &SharedGameState, initial: GameState) -> Result<Solution, SolveError> {
        if shared.is_won(&initial) {
            return Ok(Solution { moves: 0, pushes: 0, iterations: 0 });
        }

        let mut open = BinaryHeap::new();
        let mut closed: HashSet<GameState> = HashSet::new();
        let mut best: Option<(usize, usize)> = None;
        let mut sequence = 0u64;

        open.push(SearchNode {
            priority: estimate_cost(shared, &initial.boxes, self.config.wall_penalty),
            state: initial,
            moves: 0,
            pushes: 0,
            sequence,
        });

        let mut iterations = 0;
        while iterations < self.config.max_iterations {
            let Some(current) = open.pop() else {
                break;
            };
            iterations += 1;

            if !closed.insert(current.state.clone()) {
                continue;
            }

            if shared.is_won(&current.state) {
                if best.is_none_or(|(moves, _)| current.moves < moves) {
                    best = Some((current.moves, current.pushes));
                }
                continue;
            }

            if best.is_some_and(|(moves, _)| current.moves >= moves) {
                continue;
            }

            if is_deadlock(shared, &current.state.boxes) {
                continue;
            }

            for action in UserAction::all_actions() {
                let GameUpdate::NextState(next, change) = step(shared, &current.state, action) else {
                    continue;
                };
                if closed.contains(&next) {
                    continue;
                }
                let pushes = current.pushes + usize::from(change == GameChangeType::PlayerAndBoxMove);
                let priority = estimate_cost(shared, &next.boxes, self.config.wall_penalty)
                    + pushes as f64 * self.config.push_weight;
                sequence += 1;
                open.push(SearchNode {
                    state: next,
                    moves: current.moves + 1,
                    pushes,
                    priority,
                    sequence,
                });
            }

            if open.len() > self.config.open_set_cap {
                open = trim_open_set(open, self.config.open_set_trim_to);
            }
        }

        match best {
            Some((moves, pushes)) => {
                info!("solved in {} moves ({} pushes) after {} iterations", moves, pushes, iterations);
                Ok(Solution { moves, pushes, iterations })
            }
            None if open.is_empty() => Err(SolveError::SearchExhausted { iterations }),
            None => Err(SolveError::IterationLimit { iterations }),
        }
    }
}

/// Keeps the `keep` most promising nodes.
fn trim_open_set(open: BinaryHeap<SearchNode>, keep: usize) -> BinaryHeap<SearchNode> {
    // ascending order puts the least promising nodes first
    let mut nodes = open.into_sorted_vec();
    let excess = nodes.len().saturating_sub(keep);
    nodes.drain(..excess);
    BinaryHeap::from(nodes)
}
