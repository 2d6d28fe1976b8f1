use std::ops::{Add, Sub};
use crate::core::consts::{DIRECTION_DOWN, DIRECTION_LEFT, DIRECTION_RIGHT, DIRECTION_UP};
use crate::core::models::{
    Cell, Direction, Element, GameState, Maze, SharedGameState, Tile, UserAction, Vec2,
};

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i - rhs.i, j: self.j - rhs.j }
    }
}

impl Vec2 {
    pub fn manhattan(&self, other: &Vec2) -> u32 {
        self.i.abs_diff(other.i) + self.j.abs_diff(other.j)
    }

    pub fn chebyshev(&self, other: &Vec2) -> u32 {
        self.i.abs_diff(other.i).max(self.j.abs_diff(other.j))
    }

    /// Unit step pointing from `self` towards `to`, one sign per axis.
    pub fn direction_to(&self, to: &Vec2) -> Vec2 {
        Vec2 {
            i: (to.i - self.i).signum(),
            j: (to.j - self.j).signum(),
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn to_vec(self) -> Vec2 {
        match self {
            Direction::Up => DIRECTION_UP,
            Direction::Down => DIRECTION_DOWN,
            Direction::Left => DIRECTION_LEFT,
            Direction::Right => DIRECTION_RIGHT,
        }
    }

    pub fn from_vec(v: Vec2) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.to_vec() == v)
    }
}

impl UserAction {
    pub fn all_actions() -> [UserAction; 4] {
        Direction::ALL.map(UserAction::Move)
    }
}

impl SharedGameState {
    /// Splits a packed maze into its static terrain and its movable state.
    /// Returns the player positions found so callers can decide how to treat
    /// a missing or duplicated player.
    pub fn from_maze(maze: &Maze) -> (SharedGameState, Vec<Vec2>, Vec<Vec2>) {
        let tiles = maze.map(|cell| cell.get_tile());
        let mut goals = Vec::new();
        let mut boxes = Vec::new();
        let mut players = Vec::new();
        for (pos, cell) in maze.iter() {
            if cell.get_tile() == Tile::Goal {
                goals.push(pos);
            }
            match cell.get_element() {
                Element::Box => boxes.push(pos),
                Element::Player => players.push(pos),
                Element::None => {}
            }
        }
        (SharedGameState { tiles, goals }, boxes, players)
    }

    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    pub fn width(&self) -> i32 {
        self.tiles.width()
    }

    pub fn total_targets(&self) -> usize {
        self.goals.len()
    }

    /// Terrain walkability only; out of bounds is never walkable.
    pub fn is_walkable(&self, pos: &Vec2) -> bool {
        self.tiles.get(pos).is_some_and(|tile| tile.is_walkable())
    }

    pub fn is_goal(&self, pos: &Vec2) -> bool {
        self.tiles.get(pos) == Some(&Tile::Goal)
    }

    pub fn is_won(&self, game: &GameState) -> bool {
        game.boxes.len() == self.goals.len() && game.boxes.iter().all(|b| self.is_goal(b))
    }

    pub fn count_boxes_on_goals(&self, boxes: &[Vec2]) -> usize {
        boxes.iter().filter(|b| self.is_goal(b)).count()
    }

    /// Recombines terrain and state into a packed maze.
    pub fn to_maze(&self, game: &GameState) -> Maze {
        let mut maze = self.tiles.map(|&tile| Cell::tile(tile));
        for b in &game.boxes {
            maze[b] = maze[b].with_element(Element::Box);
        }
        maze[game.player] = maze[game.player].with_element(Element::Player);
        maze
    }
}

impl GameState {
    pub fn new(player: Vec2, mut boxes: Vec<Vec2>) -> GameState {
        boxes.sort_unstable();
        GameState { boxes, player }
    }

    pub fn has_box_at(&self, position: &Vec2) -> bool {
        self.boxes.binary_search(position).is_ok()
    }

    pub fn index_of_box_at(&self, position: &Vec2) -> Option<usize> {
        self.boxes.binary_search(position).ok()
    }
}

pub fn count_walkable(maze: &Maze) -> usize {
    maze.iter().filter(|(_, cell)| cell.is_walkable()).count()
}

/// Walkable cell with no element on it, treating out of bounds as blocked.
pub fn is_free_at(maze: &Maze, pos: &Vec2) -> bool {
    maze.get(pos).is_some_and(|cell| cell.is_free())
}

pub fn has_box_at(maze: &Maze, pos: &Vec2) -> bool {
    maze.get(pos).is_some_and(|cell| cell.is_walkable() && cell.has_box())
}

pub fn free_neighbours(maze: &Maze, pos: &Vec2) -> Vec<Vec2> {
    Direction::ALL
        .iter()
        .map(|d| *pos + d.to_vec())
        .filter(|p| is_free_at(maze, p))
        .collect()
}

/// Locations of every element of the given kind, row by row.
pub fn find_elements(maze: &Maze, element: Element) -> Vec<Vec2> {
    maze.iter()
        .filter(|(_, cell)| cell.get_element() == element)
        .map(|(pos, _)| pos)
        .collect()
}
