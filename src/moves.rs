use crate::{is_legal_placement, is_legal_swap_selection, CommandError, GameState, Position};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One action a player can take. Each variant maps to one [GameState] command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(tag = "move", rename_all = "snake_case")]
pub enum Move {
    /// [Place](GameState::place_tile) the [tile](crate::Tile) in slot `hand_index` at
    /// `position`.
    Place {
        /// The target cell.
        position: Position,
        /// The slot holding the [tile](crate::Tile).
        hand_index: usize,
    },
    /// [Stage](GameState::select_tile_to_swap) the [tile](crate::Tile) in slot `hand_index`
    /// for swap.
    SelectToSwap {
        /// The slot holding the [tile](crate::Tile).
        hand_index: usize,
    },
    /// [End](GameState::end_turn) the turn.
    EndTurn,
}

/// Lists every move `player` may take next, for a search opponent to explore. Reads `state`
/// only, and the same `state` always yields the same list in the same order.
///
/// The list holds, in order:
///
/// 1. Every legal placement of every occupied slot on every empty cell of the grid, cells in
/// row-major order and then slots in slot order.
/// 2. While nothing is placed or staged this turn, every legal swap selection in slot order.
/// 3. [Move::EndTurn], always, so the list is never empty for the current player. On the
/// opening turn it is only accepted once a largest compatible subset is placed.
///
/// # Returns
///
/// The moves, or an empty list if it is not `player`'s turn or the match has ended.
pub fn enumerate_moves(state: &GameState, player: usize) -> Vec<Move> {
    if state.is_game_over() || player != state.current_player() {
        return Vec::new();
    }
    let Some(current) = state.player(player) else {
        return Vec::new();
    };

    let slots = current.tiles().map(|(hand_index, _)| hand_index).collect_vec();
    let slots = &slots;
    let board = state.board();
    let mut moves = board
        .positions()
        .filter(|&position| board.tile_at(position).is_none())
        .flat_map(|position| {
            slots
                .iter()
                .map(move |&hand_index| (position, hand_index))
        })
        .filter(|&(position, hand_index)| is_legal_placement(state, player, position, hand_index))
        .map(|(position, hand_index)| Move::Place {
            position,
            hand_index,
        })
        .collect_vec();

    if current.staged_for_swap().is_empty() && state.turn_placements().is_empty() {
        moves.extend(
            slots
                .iter()
                .copied()
                .filter(|&hand_index| is_legal_swap_selection(state, player, hand_index))
                .map(|hand_index| Move::SelectToSwap { hand_index }),
        );
    }

    moves.push(Move::EndTurn);
    moves
}

impl GameState {
    /// Same as [enumerate_moves] for this state.
    #[inline]
    pub fn enumerate_moves(&self, player: usize) -> Vec<Move> {
        enumerate_moves(self, player)
    }

    /// Runs the command `mv` stands for on behalf of `player`.
    ///
    /// # Errors
    ///
    /// Same as the command.
    pub fn apply(&mut self, player: usize, mv: Move) -> Result<(), CommandError> {
        match mv {
            Move::Place {
                position,
                hand_index,
            } => self.place_tile(player, position, hand_index),
            Move::SelectToSwap { hand_index } => self.select_tile_to_swap(player, hand_index),
            Move::EndTurn => self.end_turn(player),
        }
    }
}
