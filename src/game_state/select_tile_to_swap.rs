use crate::{check_swap_selection, CommandError, GameState, Rejection};
use tracing::{debug, instrument};

impl GameState {
    /// Checks whether `player` may stage the [tile](crate::Tile) in slot `hand_index` with
    /// [check_swap_selection]. Then, moves the [tile](crate::Tile) out of the hand onto the
    /// staging list. Staged [tiles](crate::Tile) go back into the bag when the turn
    /// [ends](GameState::end_turn).
    ///
    /// # Errors
    ///
    /// * [CommandError::Rejected] Attempting an illegal swap selection. Nothing changes.
    /// * [CommandError::Protocol] Attempting to swap as a player without a seat or whose turn
    /// it is not. The match is aborted.
    #[instrument(skip(self), fields(turn_number = self.turn_number()))]
    pub fn select_tile_to_swap(
        &mut self,
        player: usize,
        hand_index: usize,
    ) -> Result<(), CommandError> {
        self.check_actor(player)?;
        if let Err(rejection) = check_swap_selection(self, player, hand_index) {
            debug!(%rejection, "swap selection rejected");
            return Err(rejection.into());
        }

        let tile = self.players[player]
            .stage(hand_index)
            .ok_or(Rejection::EmptySlot { hand_index })?;
        debug!(?tile, "tile staged for swap");

        Ok(())
    }
}
