use crate::core::{GameChangeType, GameState};

pub struct GameRenderState {
    pub game: GameState,
    pub won: bool,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
    pub moves: usize,
    /// Move count the solver needed, shown for comparison.
    pub par: Option<usize>,
}

impl GameRenderState {
    pub fn new(game: GameState, par: Option<usize>) -> Self {
        GameRenderState {
            game,
            won: false,
            error: None,
            last_change: None,
            moves: 0,
            par,
        }
    }
}
