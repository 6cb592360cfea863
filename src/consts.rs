use crate::{Color, Shape};
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of [tiles](crate::Tile) in a complete line, which is the largest line the rules
/// allow. Equal to both the [number of colors](Color::COLORS_LEN) and the
/// [number of shapes](Shape::SHAPES_LEN).
///
/// # See Also
///
/// * [line_points](crate::line_points)
pub const QWIRKLE_LEN: usize = Color::COLORS_LEN;
const _: () = assert!(Color::COLORS_LEN == Shape::SHAPES_LEN);
/// The total amount of points for a complete line of [QWIRKLE_LEN] [tiles](crate::Tile).
/// `12` points in total, not `12` on top of the line length.
///
/// # See Also
///
/// * [line_points](crate::line_points)
pub const QWIRKLE_POINTS: usize = 12;
/// The amount of extra points given to a player whose hand is empty and cannot be refilled
/// because the bag is exhausted. `6` additional points.
///
/// # See Also
///
/// * [GameState::end_turn](crate::GameState::end_turn)
pub const LAST_PLAY_BONUS: usize = 6;
/// The number of slots in every hand. `6` slots.
///
/// # See Also
///
/// * [Hand](crate::Hand)
pub const HAND_CAPACITY: usize = 6;
/// The default number of times a unique [tile](crate::Tile) is copied in the bag.
/// `3` copies of each [tile](crate::Tile), `108` [tiles](crate::Tile) in total.
///
/// # See Also
///
/// * [GameConfig](crate::GameConfig)
pub const DEFAULT_UNIQUE_TILE_COPIED_COUNT: usize = 3;
/// The fewest players allowed in a match.
pub const MIN_PLAYERS: usize = 2;
/// The most players allowed in a match.
pub const MAX_PLAYERS: usize = 4;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. If the environment
/// variable named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to
/// [MAX_PLAYERS].
///
/// # See Also
///
/// * [GameState](crate::GameState)
/// * [PlayerView](crate::PlayerView)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    MAX_PLAYERS
);
/// The default number of rows and columns of the board before any [tile](crate::Tile) is
/// placed. If the environment variable named `INITIAL_BOARD_LEN` is present at compile time
/// and is able to be parsed into a `usize`, set to the value of the environment variable.
/// Otherwise, it is set to `5`.
///
/// # Panics
///
/// * When the given value is `0`
///
/// # See Also
///
/// * [Board::new](crate::Board::new)
/// * [GameConfig](crate::GameConfig)
pub const INITIAL_BOARD_LEN: usize = option::unwrap_or!(
    option::and_then!(option_env!("INITIAL_BOARD_LEN"), |str| result::ok!(
        parse_usize(str)
    )),
    5
);
const _: () = assert!(INITIAL_BOARD_LEN > 0);
