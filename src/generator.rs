use std::time::Duration;
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use crate::config::GeneratorConfig;
use crate::core::Maze;
use crate::maze::{reduce_maze, BuildError, MazeBuilder, TemplateCatalog};
use crate::puzzle::{FillError, PuzzleFiller};
use crate::solver::{PuzzleSolver, SolveError};

pub const DEFAULT_TIME_TO_SOLVE: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("minimum of {min} moves is above the maximum of {max}")]
    InvalidWindow { min: usize, max: usize },
    #[error("no puzzle in the move window after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Why a single attempt did not produce a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Fill(#[from] FillError),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("solution of {moves} moves is outside {min}..={max}")]
    OutOfWindow { moves: usize, min: usize, max: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub maze: Maze,
    /// Solver estimate, an upper bound on the optimal move count.
    pub moves: usize,
}

/// Wire form of a puzzle: `[time_to_solve_ms, [[cell, ...], ...]]`.
#[derive(Serialize)]
pub struct Payload<'a>(pub u64, pub &'a Maze);

impl GeneratedPuzzle {
    pub fn payload(&self, time_to_solve: Duration) -> Payload<'_> {
        Payload(u64::try_from(time_to_solve.as_millis()).unwrap_or(u64::MAX), &self.maze)
    }

    pub fn payload_json(&self, time_to_solve: Duration) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.payload(time_to_solve))
    }
}

pub struct PuzzleGenerator {
    config: GeneratorConfig,
    catalog: TemplateCatalog,
}

impl PuzzleGenerator {
    pub fn new(config: GeneratorConfig, catalog: TemplateCatalog) -> Self {
        PuzzleGenerator { config, catalog }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// One pass of build, reduce, fill and solve.
    pub fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedPuzzle, Rejection> {
        let maze = MazeBuilder::new(&self.catalog, &self.config.builder).build(rng)?;
        let mut maze = reduce_maze(maze);
        PuzzleFiller::new(&self.config.filler).fill(&mut maze, rng)?;
        let solution = PuzzleSolver::new(&self.config.solver).solve(&maze)?;

        let (min, max) = (self.config.min_moves, self.config.max_moves);
        if solution.moves < min || solution.moves > max {
            return Err(Rejection::OutOfWindow { moves: solution.moves, min, max });
        }
        Ok(GeneratedPuzzle { maze, moves: solution.moves })
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedPuzzle, GenerateError> {
        self.check_window()?;
        for attempt in 1..=self.config.max_attempts {
            match self.attempt(rng) {
                Ok(puzzle) => {
                    info!(
                        "accepted {}x{} puzzle with {} moves after {} attempts",
                        puzzle.maze.height(),
                        puzzle.maze.width(),
                        puzzle.moves,
                        attempt
                    );
                    return Ok(puzzle);
                }
                Err(rejection) => debug!("attempt {} rejected: {}", attempt, rejection),
            }
        }
        Err(GenerateError::AttemptsExhausted { attempts: self.config.max_attempts })
    }

    /// Spreads attempts over `jobs` worker threads, each drawing from its own
    /// OS seeded generator. Returns whichever accepted puzzle turns up first.
    pub fn generate_parallel(&self, jobs: usize) -> Result<GeneratedPuzzle, GenerateError> {
        self.check_window()?;
        let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
        let found = pool.install(|| {
            (0..self.config.max_attempts)
                .into_par_iter()
                .find_map_any(|attempt| match self.attempt(&mut rand::rng()) {
                    Ok(puzzle) => Some(puzzle),
                    Err(rejection) => {
                        debug!("attempt {} rejected: {}", attempt, rejection);
                        None
                    }
                })
        });
        match found {
            Some(puzzle) => {
                info!("accepted puzzle with {} moves", puzzle.moves);
                Ok(puzzle)
            }
            None => Err(GenerateError::AttemptsExhausted { attempts: self.config.max_attempts }),
        }
    }

    fn check_window(&self) -> Result<(), GenerateError> {
        let (min, max) = (self.config.min_moves, self.config.max_moves);
        if min > max {
            return Err(GenerateError::InvalidWindow { min, max });
        }
        Ok(())
    }
}

/// Generates a puzzle whose solution length falls in `min_moves..=max_moves`,
/// using the default configuration and built-in templates.
pub fn generate(min_moves: Option<usize>, max_moves: Option<usize>) -> Result<GeneratedPuzzle, GenerateError> {
    let mut config = GeneratorConfig::default();
    if let Some(min) = min_moves {
        config.min_moves = min;
    }
    if let Some(max) = max_moves {
        config.max_moves = max;
    }
    PuzzleGenerator::new(config, TemplateCatalog::builtin()).generate(&mut rand::rng())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::SolverConfig;
    use crate::core::{BoundedGrid, Cell};

    #[test]
    fn payload_is_time_then_rows() {
        let maze = BoundedGrid::from_rows(vec![
            vec![Cell::WALL, Cell::WALL],
            vec![Cell::FLOOR, Cell::GOAL],
        ])
        .unwrap();
        let puzzle = GeneratedPuzzle { maze, moves: 42 };
        assert_eq!(
            puzzle.payload_json(DEFAULT_TIME_TO_SOLVE).unwrap(),
            "[120000,[[1,1],[2,3]]]"
        );
    }

    #[test]
    fn payload_time_saturates() {
        let maze = BoundedGrid::from_rows(vec![vec![Cell::WALL]]).unwrap();
        let puzzle = GeneratedPuzzle { maze, moves: 0 };
        assert_eq!(puzzle.payload(Duration::MAX).0, u64::MAX);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let config = GeneratorConfig { min_moves: 10, max_moves: 5, ..Default::default() };
        let generator = PuzzleGenerator::new(config, TemplateCatalog::builtin());
        let mut rng = rand::rng();
        assert!(matches!(
            generator.generate(&mut rng),
            Err(GenerateError::InvalidWindow { min: 10, max: 5 })
        ));
        assert!(matches!(
            generator.generate_parallel(2),
            Err(GenerateError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn impossible_window_exhausts_attempts() {
        let config = GeneratorConfig {
            min_moves: 100_000,
            max_moves: 100_000,
            max_attempts: 3,
            solver: SolverConfig { max_iterations: 2_000, ..Default::default() },
            ..Default::default()
        };
        let generator = PuzzleGenerator::new(config, TemplateCatalog::builtin());
        assert!(matches!(
            generator.generate(&mut rand::rng()),
            Err(GenerateError::AttemptsExhausted { attempts: 3 })
        ));
    }
}
