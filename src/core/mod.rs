mod model_helpers;
mod models;
mod update;
mod bounded_grid;
mod consts;
mod bounds;

pub use models::{
    Cell, CellDecodeError, Direction, Element, GameChangeType, GameState, GameUpdate, Maze,
    MoveError, SharedGameState, Tile, UserAction, Vec2,
};
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use model_helpers::{count_walkable, find_elements, free_neighbours, has_box_at, is_free_at};
pub use update::step;
