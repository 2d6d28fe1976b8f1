pub mod test_util;
mod test_moves;
mod test_deadlock;
