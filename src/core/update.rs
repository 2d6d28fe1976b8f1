use crate::core::models::{GameChangeType, GameState, GameUpdate, MoveError, SharedGameState, UserAction};

pub fn step(shared: &SharedGameState, game: &GameState, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d.to_vec(),
    };

    let next = game.player + dir;
    if !shared.tiles.contains(&next) {
        return GameUpdate::Error(MoveError::OutOfBounds);
    }
    if !shared.is_walkable(&next) {
        return GameUpdate::Error(MoveError::Wall);
    }

    let Some(box_index) = game.index_of_box_at(&next) else {
        return GameUpdate::NextState(
            GameState {
                boxes: game.boxes.clone(),
                player: next,
            },
            GameChangeType::PlayerMove,
        );
    };

    let beyond = next + dir;
    if !shared.is_walkable(&beyond) || game.has_box_at(&beyond) {
        return GameUpdate::Error(MoveError::BoxBlocked);
    }

    let mut boxes = game.boxes.clone();
    boxes[box_index] = beyond;
    GameUpdate::NextState(
        GameState::new(next, boxes),
        GameChangeType::PlayerAndBoxMove,
    )
}
