use crate::{
    Board, GameState, Hand, HandLens, PlacementHistory, Placements, Player, Points, Staged,
    Status,
};
use serde::Serialize;

/// Immutably borrows the parts of [GameState] one participant may see. Other players' hands
/// and the contents of the bag are replaced by counts.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView<'a> {
    /// The index of the viewing player, or [None] for a spectator.
    pub player: Option<usize>,
    /// The viewing player's own hand.
    pub hand: Option<&'a Hand>,
    /// The [tiles](crate::Tile) the viewing player staged for swap this turn.
    pub staged_for_swap: Option<&'a Staged>,
    /// The grid of placed [tiles](crate::Tile).
    pub board: &'a Board,
    /// The number of undrawn [tiles](crate::Tile).
    pub bag_len: usize,
    /// The number of [tiles](crate::Tile) in each player's hand.
    pub hand_lens: HandLens,
    /// Each player's score.
    pub scores: Points,
    /// Each player's score when the current turn began.
    pub previous_scores: &'a Points,
    /// Each player's placements from their most recent turn.
    pub previous_placements: &'a PlacementHistory,
    /// Positions placed this turn in placement order.
    pub turn_placements: &'a Placements,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// `1` for the opening turn and incremented by every commit.
    pub turn_number: usize,
    /// Whether the match is running, over, or aborted.
    pub status: &'a Status,
}

impl GameState {
    /// # Returns
    ///
    /// A new [PlayerView] for `player` which borrows from [GameState] and reveals only
    /// `player`'s own hand, or [None] if there is no such seat.
    pub fn player_view(&self, player: usize) -> Option<PlayerView<'_>> {
        let own = self.players.get(player)?;
        Some(PlayerView {
            player: Some(player),
            hand: Some(own.hand()),
            staged_for_swap: Some(own.staged_for_swap()),
            ..self.spectator_view()
        })
    }

    /// # Returns
    ///
    /// A new [PlayerView] which borrows from [GameState] and reveals no hand at all.
    pub fn spectator_view(&self) -> PlayerView<'_> {
        PlayerView {
            player: None,
            hand: None,
            staged_for_swap: None,
            board: &self.board,
            bag_len: self.bag.len(),
            hand_lens: self.players.iter().map(Player::hand_len).collect(),
            scores: self.players.iter().map(Player::score).collect(),
            previous_scores: &self.previous_scores,
            previous_placements: &self.previous_placements,
            turn_placements: &self.turn.placements,
            current_player: self.turn.current_player,
            turn_number: self.turn.turn_number,
            status: &self.status,
        }
    }
}
