use log::debug;
use rand::Rng;
use thiserror::Error;
use crate::config::FillerConfig;
use crate::core::{count_walkable, free_neighbours, Cell, Element, Maze, Tile, Vec2};
use crate::puzzle::scramble::{scramble, PlayerVector};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    #[error("maze has no walkable cells")]
    NoWalkableCells,
    #[error("{walkable} walkable cells cannot hold {boxes} boxes and a player")]
    TooFewWalkableCells { walkable: usize, boxes: usize },
    #[error("no box has a free neighbour for the player")]
    NoRoomForPlayer,
    #[error("maze already holds boxes or a player")]
    AlreadyFilled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillReport {
    pub walkable: usize,
    pub boxes: usize,
    pub batches: usize,
    pub steps: usize,
    pub goals_cleared: bool,
}

pub struct PuzzleFiller<'a> {
    config: &'a FillerConfig,
}

impl<'a> PuzzleFiller<'a> {
    pub fn new(config: &'a FillerConfig) -> Self {
        PuzzleFiller { config }
    }

    pub fn box_count(&self, walkable: usize) -> usize {
        1 + walkable / self.config.walkable_per_box.max(1)
    }

    /// Places a solved puzzle into `maze`, then scrambles it with reverse moves.
    pub fn fill<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R) -> Result<FillReport, FillError> {
        let walkable = count_walkable(maze);
        let (player, goals) = self.place_elements(maze, rng)?;
        let (_, scrambled) = scramble(maze, player, &goals, self.config, rng);
        let report = FillReport {
            walkable,
            boxes: goals.len(),
            batches: scrambled.batches,
            steps: scrambled.steps,
            goals_cleared: scrambled.goals_cleared,
        };
        debug!("filled maze: {:?}", report);
        Ok(report)
    }

    /// Claims distinct random walkable cells as goals holding their box, then
    /// puts the player next to one of them, facing it.
    pub fn place_elements<R: Rng + ?Sized>(
        &self,
        maze: &mut Maze,
        rng: &mut R,
    ) -> Result<(PlayerVector, Vec<Vec2>), FillError> {
        if maze.iter().any(|(_, cell)| cell.get_element() != Element::None) {
            return Err(FillError::AlreadyFilled);
        }
        let mut candidates: Vec<Vec2> = maze
            .iter()
            .filter(|(_, cell)| cell.is_walkable())
            .map(|(pos, _)| pos)
            .collect();
        let walkable = candidates.len();
        if walkable == 0 {
            return Err(FillError::NoWalkableCells);
        }
        let boxes = self.box_count(walkable);
        if boxes >= walkable {
            return Err(FillError::TooFewWalkableCells { walkable, boxes });
        }

        let mut goals = Vec::with_capacity(boxes);
        for _ in 0..boxes {
            let index = rng.random_range(0..candidates.len());
            let pos = candidates.swap_remove(index);
            maze[pos] = Cell::new(Tile::Goal, Element::Box);
            goals.push(pos);
        }

        let anchors: Vec<Vec2> = goals
            .iter()
            .copied()
            .filter(|goal| !free_neighbours(maze, goal).is_empty())
            .collect();
        if anchors.is_empty() {
            return Err(FillError::NoRoomForPlayer);
        }
        let anchor = anchors[rng.random_range(0..anchors.len())];
        let spots = free_neighbours(maze, &anchor);
        let position = spots[rng.random_range(0..spots.len())];
        maze[position] = Cell::new(Tile::Floor, Element::Player);

        Ok((
            PlayerVector {
                position,
                facing: position.direction_to(&anchor),
            },
            goals,
        ))
    }
}
