use crate::solver::{is_advanced_deadlock, is_deadlock, is_simple_deadlock, BlockedSides};
use crate::core::Vec2;
use crate::test::test_util::GameTestState;

fn assert_deadlock(expected_simple: bool, expected_advanced: bool, level: &str) {
    let game = GameTestState::new(level);
    let boxes = &game.game_state.boxes;
    assert_eq!(
        expected_simple,
        is_simple_deadlock(&game.shared, boxes),
        "simple deadlock mismatch for level: {}",
        level
    );
    assert_eq!(
        expected_advanced,
        is_advanced_deadlock(&game.shared, boxes),
        "advanced deadlock mismatch for level: {}",
        level
    );
    assert_eq!(expected_simple || expected_advanced, is_deadlock(&game.shared, boxes));
}

#[test]
fn box_in_corner_is_deadlocked() {
    assert_deadlock(true, false, r#"
####
#@$#
#. #
####
"#);
}

#[test]
fn box_on_goal_in_corner_is_fine() {
    assert_deadlock(false, false, r#"
####
#@*#
#  #
####
"#);
}

#[test]
fn box_in_corridor_leading_to_goal_is_fine() {
    assert_deadlock(false, false, r#"
#######
#@ $ .#
#######
"#);
}

#[test]
fn box_walled_above_and_below_needs_goal_in_its_row() {
    assert_deadlock(true, false, r#"
#######
#  #  #
#  $  #
#  #  #
#@   .#
#######
"#);
    assert_deadlock(false, false, r#"
#######
#  #  #
#. $  #
#  #  #
#@    #
#######
"#);
}

#[test]
fn box_walled_left_and_right_needs_goal_in_its_column() {
    assert_deadlock(true, false, r#"
#####
#.  #
##$##
#   #
#@  #
#####
"#);
    assert_deadlock(false, false, r#"
#####
# . #
##$##
#   #
#@  #
#####
"#);
}

#[test]
fn touching_boxes_with_too_few_goals_are_deadlocked() {
    assert_deadlock(false, true, r#"
######
#.$$ #
#@ . #
######
"#);
    assert_deadlock(false, true, r#"
######
#    #
# $  #
#  $ #
#.. @#
######
"#);
}

#[test]
fn touching_boxes_on_goals_are_fine() {
    assert_deadlock(false, false, r#"
#####
# @ #
# **#
#   #
#####
"#);
}

#[test]
fn blocked_sides_ignore_boxes() {
    let game = GameTestState::new(r#"
#####
#@$$#
#   #
#####
"#);
    let sides = BlockedSides::around(&game.shared, Vec2 { i: 1, j: 2 });
    assert_eq!(sides, BlockedSides { up: true, down: false, left: false, right: false });
    assert_eq!(sides.count(), 1);
    assert!(!sides.is_corner());
}
