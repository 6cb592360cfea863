use crate::{Player, Position, Tile, HAND_CAPACITY, PLAYER_CAPACITY, QWIRKLE_LEN};
use smallvec::SmallVec;

/// A fixed number of positional slots for one player, where each slot either holds
/// a [tile](Tile) or is empty. Slots are addressed by index because duplicate
/// [tiles](Tile) may be held at the same time.
///
/// # See Also
///
/// * [HAND_CAPACITY]
/// * [Player]
/// * [GameState::place_tile](crate::GameState::place_tile)
/// * [GameState::select_tile_to_swap](crate::GameState::select_tile_to_swap)
pub type Hand = [Option<Tile>; HAND_CAPACITY];
/// An ordered list of [positions](Position) on the board, in the order the
/// [tiles](Tile) were placed.
///
/// # See Also
///
/// * [GameState::turn_placements](crate::GameState::turn_placements)
/// * [score_turn](crate::score_turn)
pub type Placements = SmallVec<[Position; HAND_CAPACITY]>;
/// A list of [tiles](Tile) taken out of a hand and staged to be returned to the bag.
///
/// # See Also
///
/// * [Player::staged_for_swap]
pub type Staged = SmallVec<[Tile; HAND_CAPACITY]>;
/// A contiguous run of [tiles](Tile) along a row or a column.
///
/// # See Also
///
/// * [Board::line_through](crate::Board::line_through)
/// * [tiles_are_compatible](crate::tiles_are_compatible)
pub type Line = SmallVec<[Tile; QWIRKLE_LEN]>;
/// A vector of points for each player.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [PlayerView](crate::PlayerView)
pub type Points = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of the number of occupied slots in each player's hand.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [PlayerView](crate::PlayerView)
pub type HandLens = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of every player in seat order.
///
/// # See Also
///
/// * [Player]
/// * [GameState](crate::GameState)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// A vector of each player's [placements](Placements) from their most recent turn.
///
/// # See Also
///
/// * [GameState::previous_placements](crate::GameState::previous_placements)
pub type PlacementHistory = SmallVec<[Placements; PLAYER_CAPACITY]>;
