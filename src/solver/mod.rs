mod deadlock;
mod heuristics;
mod search;

pub use deadlock::{is_advanced_deadlock, is_deadlock, is_simple_deadlock, BlockedSides};
pub use heuristics::{blocked_box_sides, estimate_cost, greedy_goal_distance};
pub use search::{PuzzleSolver, Solution, SolveError};

use crate::config::SolverConfig;
use crate::core::Maze;

pub fn solve(maze: &Maze, config: &SolverConfig) -> Result<Solution, SolveError> {
    PuzzleSolver::new(config).solve(maze)
}
