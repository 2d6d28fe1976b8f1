use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::consts::{ELEMENT_BIT_MASK, TILE_BIT_MASK};
use crate::core::bounded_grid::BoundedGrid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Void = 0x00,
    Wall = 0x01,
    Floor = 0x02,
    Goal = 0x03,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Element {
    #[default]
    None = 0x00,
    Player = 0x10,
    Box = 0x20,
}

/// A tile and the element standing on it, packed into one byte.
/// The low nibble holds the tile, the high nibble the element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Cell(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellDecodeError {
    #[error("unknown tile bits {0:#04x}")]
    UnknownTile(u8),
    #[error("unknown element bits {0:#04x}")]
    UnknownElement(u8),
    #[error("element on a non walkable tile in cell {0:#04x}")]
    ElementOnBlockedTile(u8),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Default)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
}

pub type Maze = BoundedGrid<Cell>;

/// The parts of a puzzle that never change while playing: terrain and goals.
#[derive(Clone, Debug)]
pub struct SharedGameState {
    pub tiles: BoundedGrid<Tile>,
    pub goals: Vec<Vec2>,
}

/// Player position plus box positions. Boxes are kept sorted so that two
/// states with the same layout compare and hash equal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub boxes: Vec<Vec2>,
    pub player: Vec2,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Error(MoveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cannot move out of bounds")]
    OutOfBounds,
    #[error("cannot walk into a wall")]
    Wall,
    #[error("cannot push box")]
    BoxBlocked,
}

impl Tile {
    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Goal)
    }

    fn from_bits(bits: u8) -> Option<Tile> {
        match bits {
            0x00 => Some(Tile::Void),
            0x01 => Some(Tile::Wall),
            0x02 => Some(Tile::Floor),
            0x03 => Some(Tile::Goal),
            _ => None,
        }
    }
}

impl Element {
    fn from_bits(bits: u8) -> Option<Element> {
        match bits {
            0x00 => Some(Element::None),
            0x10 => Some(Element::Player),
            0x20 => Some(Element::Box),
            _ => None,
        }
    }
}

impl Cell {
    pub const VOID: Cell = Cell::tile(Tile::Void);
    pub const WALL: Cell = Cell::tile(Tile::Wall);
    pub const FLOOR: Cell = Cell::tile(Tile::Floor);
    pub const GOAL: Cell = Cell::tile(Tile::Goal);

    pub const fn tile(tile: Tile) -> Cell {
        Cell(tile as u8)
    }

    pub fn new(tile: Tile, element: Element) -> Cell {
        debug_assert!(
            element == Element::None || tile.is_walkable(),
            "{:?} cannot stand on {:?}",
            element,
            tile
        );
        Cell(tile as u8 | element as u8)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn get_tile(self) -> Tile {
        // bits are validated on construction
        Tile::from_bits(self.0 & TILE_BIT_MASK).unwrap_or_default()
    }

    pub fn get_element(self) -> Element {
        Element::from_bits(self.0 & ELEMENT_BIT_MASK).unwrap_or_default()
    }

    pub fn with_element(self, element: Element) -> Cell {
        Cell::new(self.get_tile(), element)
    }

    pub fn is_walkable(self) -> bool {
        self.get_tile().is_walkable()
    }

    /// Walkable and nothing standing on it.
    pub fn is_free(self) -> bool {
        self.is_walkable() && self.get_element() == Element::None
    }

    pub fn has_box(self) -> bool {
        self.get_element() == Element::Box
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl TryFrom<u8> for Cell {
    type Error = CellDecodeError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        let tile = Tile::from_bits(bits & TILE_BIT_MASK)
            .ok_or(CellDecodeError::UnknownTile(bits & TILE_BIT_MASK))?;
        let element = Element::from_bits(bits & ELEMENT_BIT_MASK)
            .ok_or(CellDecodeError::UnknownElement(bits & ELEMENT_BIT_MASK))?;
        if element != Element::None && !tile.is_walkable() {
            return Err(CellDecodeError::ElementOnBlockedTile(bits));
        }
        Ok(Cell(bits))
    }
}

impl From<Tile> for Cell {
    fn from(tile: Tile) -> Self {
        Cell::tile(tile)
    }
}
