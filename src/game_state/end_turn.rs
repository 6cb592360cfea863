use crate::{
    check_end_turn, score_turn, CommandError, GameState, Player, ProtocolViolation, Status,
    LAST_PLAY_BONUS,
};
use tracing::{debug, info, instrument};

impl GameState {
    /// Checks whether `player` may end the turn with [check_end_turn]. Then, commits the turn:
    ///
    /// 1. Adds the [points](score_turn) of this turn's placements to `player`.
    /// 2. Returns any staged [tiles](crate::Tile) to the bag and reshuffles the undrawn range.
    /// 3. Refills the hand from the bag in slot order until it is full or the bag is empty.
    /// 4. Adds the [last play bonus](LAST_PLAY_BONUS) if the hand is still empty.
    /// 5. Keeps this turn's placements as `player`'s previous placements.
    ///
    /// Ends the match if some player's hand is empty and the bag is exhausted. Otherwise,
    /// hands the turn to the next seat and snapshots every score as the previous score.
    ///
    /// Ending a turn with nothing placed or staged passes, except on the opening turn.
    ///
    /// # Errors
    ///
    /// * [CommandError::Rejected] Attempting to end another player's turn, or to end the
    /// opening turn without placing a largest compatible subset. Nothing changes.
    /// * [CommandError::Protocol] Attempting to end the turn as a player without a seat, or
    /// with both placements and staged [tiles](crate::Tile). The match is aborted.
    #[instrument(skip(self), fields(turn_number = self.turn_number()))]
    pub fn end_turn(&mut self, player: usize) -> Result<(), CommandError> {
        self.check_seat(player)?;
        if let Err(rejection) = check_end_turn(self, player) {
            debug!(%rejection, "end turn rejected");
            return Err(rejection.into());
        }

        let placed = self.turn.placements.len();
        let staged = self.players[player].staged_for_swap().len();
        if placed > 0 && staged > 0 {
            return Err(self.abort(ProtocolViolation::PlacedAndSwapped { placed, staged }));
        }

        let points = score_turn(&self.board, &self.turn.placements);
        let GameState {
            bag, players, rng, ..
        } = self;
        let current = &mut players[player];
        current.add_points(points);
        let swapped = current.drain_staged();
        if !swapped.is_empty() {
            bag.return_and_reshuffle(swapped, rng);
        }
        let drawn = current.fill_hand(bag);
        if current.is_hand_empty() && bag.is_empty() {
            current.add_points(LAST_PLAY_BONUS);
        }

        self.previous_placements[player] = self.turn.commit();
        info!(
            points,
            swapped = staged,
            drawn,
            score = self.players[player].score(),
            "turn committed"
        );

        if let Some(outcome) = self.detect_game_end() {
            info!(?outcome, "game over");
            self.status = Status::Over(outcome);
            return Ok(());
        }

        let next = (player + 1) % self.players.len();
        self.turn.begin(next, *self.players[next].hand());
        self.previous_scores = self.players.iter().map(Player::score).collect();

        Ok(())
    }
}
