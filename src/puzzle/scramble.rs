use rand::Rng;
use crate::config::FillerConfig;
use crate::core::{free_neighbours, has_box_at, Maze, Vec2};

/// Player position and the direction it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerVector {
    pub position: Vec2,
    pub facing: Vec2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrambleReport {
    pub batches: usize,
    pub steps: usize,
    /// Every goal ended up without a box.
    pub goals_cleared: bool,
}

/// Moves the element of `a` to `b` and the other way round, tiles stay put.
pub fn swap_element(maze: &mut Maze, a: &Vec2, b: &Vec2) {
    let element_a = maze[a].get_element();
    let element_b = maze[b].get_element();
    maze[a] = maze[a].with_element(element_b);
    maze[b] = maze[b].with_element(element_a);
}

pub fn player_can_walk(maze: &Maze, position: &Vec2) -> bool {
    !free_neighbours(maze, position).is_empty()
}

/// Undoes one hypothetical forward move. The player steps back to a random
/// free neighbour; a box lying ahead of its old position in the direction of
/// that forward move gets dragged along, unless that would leave the player
/// with nowhere to go. Returns `None` when the player has no free neighbour.
pub fn reverse_step<R: Rng + ?Sized>(maze: &mut Maze, player: PlayerVector, rng: &mut R) -> Option<PlayerVector> {
    let position = player.position;
    let candidates = free_neighbours(maze, &position);
    if candidates.is_empty() {
        return None;
    }
    let previous = candidates[rng.random_range(0..candidates.len())];
    let direction = previous.direction_to(&position);
    let previous_player = PlayerVector {
        position: previous,
        facing: direction,
    };

    swap_element(maze, &position, &previous);

    let possible_box = position + direction;
    if has_box_at(maze, &possible_box) {
        swap_element(maze, &possible_box, &position);
        if !player_can_walk(maze, &previous) {
            swap_element(maze, &position, &possible_box);
        }
    }
    Some(previous_player)
}

pub fn all_goals_cleared(maze: &Maze, goals: &[Vec2]) -> bool {
    goals.iter().all(|goal| !has_box_at(maze, goal))
}

/// Runs batches of reverse steps until no goal holds a box or the batch
/// budget runs out. Every intermediate state can be walked forward back to
/// the solved one, so the result is solvable whatever the batch count.
pub fn scramble<R: Rng + ?Sized>(
    maze: &mut Maze,
    player: PlayerVector,
    goals: &[Vec2],
    config: &FillerConfig,
    rng: &mut R,
) -> (PlayerVector, ScrambleReport) {
    let mut player = player;
    let mut report = ScrambleReport::default();

    'batches: while report.batches < config.max_batches && !report.goals_cleared {
        report.batches += 1;
        let movements = if config.batch_max > config.batch_min {
            rng.random_range(config.batch_min..config.batch_max)
        } else {
            config.batch_min
        };
        for _ in 0..movements {
            let Some(previous) = reverse_step(maze, player, rng) else {
                report.goals_cleared = all_goals_cleared(maze, goals);
                break 'batches;
            };
            player = previous;
            report.steps += 1;
        }
        report.goals_cleared = all_goals_cleared(maze, goals);
    }

    (player, report)
}
