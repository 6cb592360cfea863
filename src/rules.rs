//! Pure predicates deciding whether a command is legal in the current state. Nothing here
//! mutates the [game state](GameState); callers apply a command only after it passes.

use crate::{Axis, GameState, Hand, Line, Position, Tile, HAND_CAPACITY};
use itertools::Itertools;
use std::collections::BTreeSet;
use thiserror::Error;

/// Describes the reason why a command was rejected. Rejections are ordinary and
/// side-effect-free: the state is untouched and the player may try another move.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum Rejection {
    /// Attempting a command after the game has ended.
    #[error("the game has ended")]
    GameOver,
    /// Attempting a command after a protocol violation aborted the match.
    #[error("the match was aborted")]
    MatchAborted,
    /// Attempting a command while it is another player's turn.
    #[error("player {player} cannot act during player {current_player}'s turn")]
    NotCurrentPlayer {
        /// The player attempting the command.
        player: usize,
        /// The index of the player whose turn it is.
        current_player: usize,
    },
    /// Attempting to use a slot past the end of the hand.
    #[error("hand index {hand_index} is out of bounds")]
    HandIndexOutOfBounds {
        /// The requested slot.
        hand_index: usize,
    },
    /// Attempting to use an empty slot.
    #[error("hand slot {hand_index} is empty")]
    EmptySlot {
        /// The requested slot.
        hand_index: usize,
    },
    /// Attempting to place outside the grid.
    #[error("position {position:?} is outside the board")]
    OutOfBounds {
        /// The requested cell.
        position: Position,
    },
    /// Attempting to place on an occupied cell.
    #[error("position {position:?} is already occupied")]
    Occupied {
        /// The requested cell.
        position: Position,
    },
    /// Attempting to place after staging [tiles](Tile) for swap this turn.
    #[error("tiles are staged for swap this turn")]
    StagedForSwap,
    /// Attempting to place a [tile](Tile) that would form a line mixing attributes or
    /// repeating a [tile](Tile).
    #[error("the {axis:?} line {line:?} would not be compatible")]
    IncompatibleLine {
        /// The axis of the offending line.
        axis: Axis,
        /// The line including the candidate [tile](Tile).
        line: Line,
    },
    /// Attempting to place a [tile](Tile) touching nothing after the opening turn.
    #[error("position {position:?} does not touch any tile")]
    NotConnected {
        /// The requested cell.
        position: Position,
    },
    /// Attempting to place a [tile](Tile) outside the line formed by this turn's placements.
    #[error("position {position:?} is not continuous with {placed:?} placed this turn")]
    NotContinuous {
        /// The requested cell.
        position: Position,
        /// A cell placed earlier this turn.
        placed: Position,
    },
    /// Attempting to place a [tile](Tile) on the opening turn which, together with the
    /// [tiles](Tile) placed before it, fits in no largest compatible subset of the opening
    /// hand.
    #[error("hand slot {hand_index} does not extend a largest compatible subset")]
    OutsideMaxCompatible {
        /// The requested slot.
        hand_index: usize,
    },
    /// Attempting to swap during the opening turn.
    #[error("tiles cannot be swapped on the opening turn")]
    OpeningTurn,
    /// Attempting to swap after placing [tiles](Tile) this turn.
    #[error("tiles were already placed this turn")]
    AlreadyPlaced,
    /// Attempting to swap when the bag has no undrawn [tiles](Tile).
    #[error("the bag is empty")]
    BagExhausted,
    /// Attempting to end the opening turn without placing a largest compatible subset of
    /// the opening hand.
    #[error("opening turn placed {placed} tiles but {max} compatible tiles were available")]
    NotMaxCompatible {
        /// The number of [tiles](Tile) placed this turn.
        placed: usize,
        /// The size of the largest compatible subset of the opening hand.
        max: usize,
    },
}

/// # Returns
///
/// Whether every pair of `tiles` is compatible: either all shapes are equal and all colors
/// are distinct, or all colors are equal and all shapes are distinct. Empty and single
/// [tile](Tile) sets are compatible.
pub fn tiles_are_compatible(tiles: &[Tile]) -> bool {
    if tiles.len() <= 1 {
        return true;
    }
    let colors = tiles.iter().map(|&(color, _)| color).unique().count();
    let shapes = tiles.iter().map(|&(_, shape)| shape).unique().count();

    (shapes == 1 && colors == tiles.len()) || (colors == 1 && shapes == tiles.len())
}

/// Finds every largest set of occupied slots in `hand` whose [tiles](Tile) are compatible
/// by enumerating all subsets of the hand. Ties are all kept.
///
/// # Returns
///
/// The largest compatible subsets as sets of slot indexes, or an empty set if `hand` is
/// empty.
pub fn max_compatible_subsets(hand: &Hand) -> BTreeSet<BTreeSet<usize>> {
    let occupied = hand
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.map(|tile| (index, tile)))
        .collect_vec();

    (1..=occupied.len())
        .rev()
        .map(|k| {
            occupied
                .iter()
                .copied()
                .combinations(k)
                .filter(|combination| {
                    let tiles = combination.iter().map(|&(_, tile)| tile).collect_vec();
                    tiles_are_compatible(&tiles)
                })
                .map(|combination| combination.into_iter().map(|(index, _)| index).collect())
                .collect::<BTreeSet<BTreeSet<usize>>>()
        })
        .find(|subsets| !subsets.is_empty())
        .unwrap_or_default()
}

/// # Returns
///
/// The size of the largest compatible subset of `hand`.
pub fn max_compatible_len(hand: &Hand) -> usize {
    max_compatible_subsets(hand)
        .iter()
        .next()
        .map_or(0, BTreeSet::len)
}

/// Checks whether `player` may place the [tile](Tile) in slot `hand_index` at `position`.
///
/// Rules, in order:
///
/// 1. The slot must exist and hold a [tile](Tile).
/// 2. The cell must lie inside the grid and be empty.
/// 3. Nothing may be staged for swap this turn.
/// 4. The row line and the column line through `position`, including the candidate, must
/// each be [compatible](tiles_are_compatible).
/// 5. Only during the opening turn may the candidate touch no [tile](Tile).
/// 6. During the opening turn, the slots placed so far and `hand_index` must all belong to
/// one largest compatible subset of the hand held when the turn started, so the opening can
/// always be completed and pass [check_end_turn].
/// 7. The candidate must be [continuous](crate::Board::is_continuous) with every position
/// placed earlier this turn.
///
/// # Errors
///
/// The first [rejection](Rejection) found.
pub fn check_placement(
    state: &GameState,
    player: usize,
    position: Position,
    hand_index: usize,
) -> Result<(), Rejection> {
    check_turn(state, player)?;
    let tile = check_slot(state, player, hand_index)?;

    let board = state.board();
    if !board.contains(position) {
        return Err(Rejection::OutOfBounds { position });
    }
    if board.tile_at(position).is_some() {
        return Err(Rejection::Occupied { position });
    }
    if !state.players()[player].staged_for_swap().is_empty() {
        return Err(Rejection::StagedForSwap);
    }

    let mut touches_tile = false;
    for axis in [Axis::Row, Axis::Column] {
        let line = board.line_through(position, axis, tile);
        if line.len() > 1 {
            touches_tile = true;
            if !tiles_are_compatible(&line) {
                return Err(Rejection::IncompatibleLine { axis, line });
            }
        }
    }
    if state.is_opening_turn() {
        check_opening_slot(state, player, hand_index)?;
    } else if !touches_tile {
        return Err(Rejection::NotConnected { position });
    }

    if let Some(&placed) = state
        .turn_placements()
        .iter()
        .find(|&&placed| !board.is_continuous(placed, position))
    {
        return Err(Rejection::NotContinuous { position, placed });
    }

    Ok(())
}

/// # Returns
///
/// Whether [check_placement] passes.
#[inline]
pub fn is_legal_placement(
    state: &GameState,
    player: usize,
    position: Position,
    hand_index: usize,
) -> bool {
    check_placement(state, player, position, hand_index).is_ok()
}

/// Checks whether `player` may stage the [tile](Tile) in slot `hand_index` for swap: it is
/// not the opening turn, nothing was placed this turn, the bag has an undrawn [tile](Tile),
/// and the slot holds a [tile](Tile).
///
/// # Errors
///
/// The first [rejection](Rejection) found.
pub fn check_swap_selection(
    state: &GameState,
    player: usize,
    hand_index: usize,
) -> Result<(), Rejection> {
    check_turn(state, player)?;
    if state.is_opening_turn() {
        return Err(Rejection::OpeningTurn);
    }
    if !state.turn_placements().is_empty() {
        return Err(Rejection::AlreadyPlaced);
    }
    if state.bag_len() == 0 {
        return Err(Rejection::BagExhausted);
    }
    check_slot(state, player, hand_index)?;
    Ok(())
}

/// # Returns
///
/// Whether [check_swap_selection] passes.
#[inline]
pub fn is_legal_swap_selection(state: &GameState, player: usize, hand_index: usize) -> bool {
    check_swap_selection(state, player, hand_index).is_ok()
}

/// Checks whether `player` may end the turn. On the opening turn nothing may be staged for
/// swap and the number of placed [tiles](Tile) must equal the size of the largest compatible
/// subset of the hand held when the turn started. Any largest subset qualifies.
///
/// # Errors
///
/// The first [rejection](Rejection) found.
pub fn check_end_turn(state: &GameState, player: usize) -> Result<(), Rejection> {
    check_turn(state, player)?;
    if !state.is_opening_turn() {
        return Ok(());
    }
    if !state.players()[player].staged_for_swap().is_empty() {
        return Err(Rejection::OpeningTurn);
    }

    let placed = state.turn_placements().len();
    let max = max_compatible_len(state.turn_start_hand());
    if placed != max {
        return Err(Rejection::NotMaxCompatible { placed, max });
    }
    Ok(())
}

/// Checks that the match is in progress and that it is `player`'s turn.
fn check_turn(state: &GameState, player: usize) -> Result<(), Rejection> {
    state.status().check_in_progress()?;
    let current_player = state.current_player();
    if player != current_player {
        return Err(Rejection::NotCurrentPlayer {
            player,
            current_player,
        });
    }
    Ok(())
}

/// Checks that the slots emptied since the opening turn began, plus `hand_index`, are
/// contained in some largest compatible subset of the opening hand.
fn check_opening_slot(
    state: &GameState,
    player: usize,
    hand_index: usize,
) -> Result<(), Rejection> {
    let start_hand = state.turn_start_hand();
    let hand = state.players()[player].hand();
    // nothing is drawn or staged during the opening turn, so emptied slots were placed
    let mut slots = start_hand
        .iter()
        .zip(hand)
        .positions(|(start, now)| start.is_some() && now.is_none())
        .collect::<BTreeSet<usize>>();
    slots.insert(hand_index);

    if max_compatible_subsets(start_hand)
        .iter()
        .any(|subset| subset.is_superset(&slots))
    {
        Ok(())
    } else {
        Err(Rejection::OutsideMaxCompatible { hand_index })
    }
}

/// Checks that slot `hand_index` of `player`'s hand holds a [tile](Tile).
fn check_slot(state: &GameState, player: usize, hand_index: usize) -> Result<Tile, Rejection> {
    if hand_index >= HAND_CAPACITY {
        return Err(Rejection::HandIndexOutOfBounds { hand_index });
    }
    state.players()[player]
        .tile_at(hand_index)
        .ok_or(Rejection::EmptySlot { hand_index })
}
