pub mod config;
pub mod console_interface;
pub mod core;
pub mod generator;
pub mod maze;
pub mod models;
pub mod puzzle;
pub mod solver;

#[cfg(test)]
mod test;

pub use generator::{generate, GenerateError, GeneratedPuzzle, PuzzleGenerator};
