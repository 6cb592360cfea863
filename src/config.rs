use crate::{DEFAULT_UNIQUE_TILE_COPIED_COUNT, INITIAL_BOARD_LEN};
use serde::{Deserialize, Serialize};

/// The parameters a match is [created](crate::GameState::new) with.
///
/// # See Also
///
/// * [NewError](crate::NewError)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// The number of players in the match, within [MIN_PLAYERS](crate::MIN_PLAYERS) to
    /// [MAX_PLAYERS](crate::MAX_PLAYERS) inclusive.
    pub players: usize,
    /// The number of copies of each unique [tile](crate::Tile) in the bag.
    pub unique_tile_copied_count: usize,
    /// The number of rows and columns of the empty board.
    pub initial_board_len: usize,
}

impl GameConfig {
    /// A config for `players` with [DEFAULT_UNIQUE_TILE_COPIED_COUNT] copies of each
    /// [tile](crate::Tile) and an [INITIAL_BOARD_LEN] square board.
    pub fn new(players: usize) -> GameConfig {
        GameConfig {
            players,
            unique_tile_copied_count: DEFAULT_UNIQUE_TILE_COPIED_COUNT,
            initial_board_len: INITIAL_BOARD_LEN,
        }
    }
}
