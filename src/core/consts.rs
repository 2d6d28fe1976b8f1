use crate::core::models::Vec2;

pub const TILE_BIT_MASK: u8 = 0x0F;
pub const ELEMENT_BIT_MASK: u8 = 0xF0;

pub const DIRECTION_UP: Vec2 = Vec2 { i: -1, j: 0 };
pub const DIRECTION_DOWN: Vec2 = Vec2 { i: 1, j: 0 };
pub const DIRECTION_LEFT: Vec2 = Vec2 { i: 0, j: -1 };
pub const DIRECTION_RIGHT: Vec2 = Vec2 { i: 0, j: 1 };

