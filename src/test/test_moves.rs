use Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

#[test]
fn when_move_right_observes_move_right() {
    let level = r#"
#@ #
"#;
    let mut game = GameTestState::new(level);
    let update = game.assert_step(UserAction::Move(Right));
    assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::PlayerMove)));

    let expected_level = r#"
# @#
"#;
    game.assert_matches(expected_level);
}

#[test]
fn when_push_pushes() {
    let level = r#"
#@$ #
"#;
    let mut game = GameTestState::new(level);
    let update = game.assert_step(UserAction::Move(Right));
    assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::PlayerAndBoxMove)));

    let expected_level = r#"
# @$#
"#;
    game.assert_matches(expected_level);
}

#[test]
fn when_block_pushed_into_block_remains_two_blocks() {
    let level = r#"
#@$$ #
"#;
    let mut game = GameTestState::new(level);
    let update = game.try_step(UserAction::Move(Right));
    assert!(matches!(update, GameUpdate::Error(MoveError::BoxBlocked)));

    let expected_level = r#"
#@$$ #
"#;
    game.assert_matches(expected_level);
}

#[test]
fn when_walking_into_wall_or_void_nothing_moves() {
    let mut game = GameTestState::new(r#"
####
#@ _
####
"#);
    assert!(matches!(game.try_step(UserAction::Move(Left)), GameUpdate::Error(MoveError::Wall)));
    game.assert_move(Right);
    assert!(matches!(game.try_step(UserAction::Move(Right)), GameUpdate::Error(MoveError::Wall)));
    game.assert_matches(r#"
####
# @_
####
"#);
}

#[test]
fn when_leaving_the_grid_move_is_out_of_bounds() {
    let mut game = GameTestState::new(r#"
@ 
"#);
    assert!(matches!(game.try_step(UserAction::Move(Up)), GameUpdate::Error(MoveError::OutOfBounds)));
    assert!(matches!(game.try_step(UserAction::Move(Left)), GameUpdate::Error(MoveError::OutOfBounds)));
}

#[test]
fn when_box_pushed_onto_goal_game_is_won() {
    let mut game = GameTestState::new(r#"
#####
#@$.#
#####
"#);
    assert!(!game.shared.is_won(&game.game_state));
    game.assert_move(Right);
    game.assert_matches(r#"
#####
# @*#
#####
"#);
    assert!(game.shared.is_won(&game.game_state));
}

#[test]
fn when_block_moves_game_is_inequal() {
    let level = r#"
#@$ #
"#;
    let mut game = GameTestState::new(level);
    let original_state = game.game_state.clone();
    game.assert_move(Right);
    let new_state = game.game_state.clone();

    let expected_level = r#"
# @$#
"#;
    game.assert_matches(expected_level);
    assert_ne!(original_state, new_state);
}

#[test]
fn when_player_moves_back_game_is_equal() {
    let level = r#"
#@ $#
"#;
    let mut game = GameTestState::new(level);
    let original_state = game.game_state.clone();
    game.assert_move(Right);
    game.assert_move(Left);
    let new_state = game.game_state.clone();

    let expected_level = r#"
#@ $#
"#;
    game.assert_matches(expected_level);
    assert_eq!(original_state, new_state);
}

#[test]
fn when_blocks_swap_game_remains_equal() {
    let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
    let mut game = GameTestState::new(level);
    let original_state = game.game_state.clone();
    game.assert_moves(&[
        Right, Left,
        Down, Down,
        Right, Up,
        Right, Right, Up, Up,
        Left, Down, Right, Down, Left,]);
    game.assert_matches(r#"
#    #
# $  #
# $@ #
#    #
"#);
    game.assert_moves(&[
        Down, Left, Left, Up, Up,]);
    let new_state = game.game_state.clone();

    let expected_level = r#"
#    #
#@$  #
# $  #
#    #
"#;
    game.assert_matches(expected_level);

    assert_eq!(original_state, new_state);
}
