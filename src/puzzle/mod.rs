mod filler;
mod scramble;

pub use filler::{FillError, FillReport, PuzzleFiller};
pub use scramble::{
    all_goals_cleared, player_can_walk, reverse_step, scramble, swap_element, PlayerVector,
    ScrambleReport,
};
