use crate::{check_placement, CommandError, GameState, Position, Rejection};
use tracing::{debug, instrument};

impl GameState {
    /// Checks whether `player` may place the [tile](crate::Tile) in slot `hand_index` at
    /// `position` with [check_placement]. Then, moves the [tile](crate::Tile) from the hand
    /// onto the board, records `position` as placed this turn, and grows the board if
    /// `position` lies on its edge.
    ///
    /// Growing at the top or left edge moves every existing cell, including `position`, by
    /// one row or column. Placements of this turn and of previous turns are moved with it.
    ///
    /// # Errors
    ///
    /// * [CommandError::Rejected] Attempting an illegal placement. Nothing changes.
    /// * [CommandError::Protocol] Attempting to place as a player without a seat or whose turn
    /// it is not. The match is aborted.
    ///
    /// # See Also
    ///
    /// * [GameState::end_turn]
    #[instrument(skip(self), fields(turn_number = self.turn_number()))]
    pub fn place_tile(
        &mut self,
        player: usize,
        position: Position,
        hand_index: usize,
    ) -> Result<(), CommandError> {
        self.check_actor(player)?;
        if let Err(rejection) = check_placement(self, player, position, hand_index) {
            debug!(%rejection, "placement rejected");
            return Err(rejection.into());
        }

        let tile = self.players[player]
            .take(hand_index)
            .ok_or(Rejection::EmptySlot { hand_index })?;
        self.board.place(position, tile);
        self.turn.placements.push(position);

        let shift = self.board.extend_if_at_edge(position);
        self.apply_shift(shift);
        debug!(?tile, position = ?shift.apply(position), "tile placed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Axis, Bag, Color, Move, ProtocolViolation, Shape, Status, Tile, INITIAL_BOARD_LEN,
    };

    const RED_CIRCLE: Tile = (Color::Red, Shape::Circle);
    const BLUE_CIRCLE: Tile = (Color::Blue, Shape::Circle);
    const GREEN_CIRCLE: Tile = (Color::Green, Shape::Circle);
    const RED_SQUARE: Tile = (Color::Red, Shape::Square);
    const BLUE_SQUARE: Tile = (Color::Blue, Shape::Square);

    /// A second turn of player `0` with a red circle at the center of a 5x5 board.
    fn second_turn(hand: &[Tile]) -> GameState {
        let mut game_state = GameState::empty_game_state(2);
        game_state.set_board(&[((2, 2), RED_CIRCLE)]);
        game_state.set_hand(0, hand);
        game_state.set_turn(0, 2);
        *game_state.mut_bag() = Bag::from_tiles([RED_SQUARE; 10]);
        game_state
    }

    #[test]
    fn place_tile_interior() {
        let mut game_state = second_turn(&[BLUE_CIRCLE]);

        game_state.place_tile(0, (2, 3), 0).unwrap();

        assert_eq!(Some(BLUE_CIRCLE), game_state.board().tile_at((2, 3)));
        assert_eq!(None, game_state.players()[0].tile_at(0));
        assert_eq!(&[(2, 3)], game_state.turn_placements().as_slice());
        assert_eq!(
            (INITIAL_BOARD_LEN, INITIAL_BOARD_LEN),
            (game_state.board().rows(), game_state.board().cols())
        );
    }

    #[test]
    fn place_tile_opening_anywhere() {
        let mut game_state = GameState::empty_game_state(2);
        game_state.set_hand(0, &[RED_CIRCLE, BLUE_CIRCLE]);

        game_state.place_tile(0, (2, 2), 1).unwrap();

        assert_eq!(Some(BLUE_CIRCLE), game_state.board().tile_at((2, 2)));
    }

    #[test]
    fn place_tile_opening_outside_max_compatible() {
        let mut game_state = GameState::empty_game_state(2);
        let purple_star = (Color::Purple, Shape::Star);
        game_state.set_hand(0, &[purple_star, RED_CIRCLE, BLUE_CIRCLE, GREEN_CIRCLE]);

        assert_eq!(
            Err(CommandError::Rejected(Rejection::OutsideMaxCompatible {
                hand_index: 0
            })),
            game_state.place_tile(0, (2, 2), 0)
        );
        assert_eq!(None, game_state.board().tile_at((2, 2)));
        assert_eq!(Some(purple_star), game_state.players()[0].tile_at(0));
        assert!(game_state.turn_placements().is_empty());
    }

    #[test]
    fn place_tile_opening_must_stay_in_one_max_compatible() {
        let mut game_state = GameState::empty_game_state(2);
        game_state.set_hand(0, &[RED_CIRCLE, BLUE_CIRCLE, GREEN_CIRCLE, RED_SQUARE]);
        *game_state.mut_bag() = Bag::from_tiles([BLUE_SQUARE; 10]);
        game_state.place_tile(0, (2, 2), 0).unwrap();

        // red square matches the red circle but only the circles are largest
        assert_eq!(
            Err(CommandError::Rejected(Rejection::OutsideMaxCompatible {
                hand_index: 3
            })),
            game_state.place_tile(0, (2, 3), 3)
        );

        game_state.place_tile(0, (2, 3), 1).unwrap();
        game_state.place_tile(0, (2, 1), 2).unwrap();
        game_state.end_turn(0).unwrap();

        assert_eq!(3, game_state.players()[0].score());
        assert!(!game_state.is_opening_turn());
    }

    #[test]
    fn place_tile_opening_enumerated_moves_never_wedge() {
        let mut game_state = GameState::empty_game_state(2);
        let purple_star = (Color::Purple, Shape::Star);
        game_state.set_hand(0, &[purple_star, RED_CIRCLE, BLUE_CIRCLE, GREEN_CIRCLE]);
        *game_state.mut_bag() = Bag::from_tiles([BLUE_SQUARE; 10]);

        while let Some(Move::Place {
            position,
            hand_index,
        }) = game_state.enumerate_moves(0).first().copied()
        {
            assert_ne!(0, hand_index);
            game_state.place_tile(0, position, hand_index).unwrap();
        }

        assert_eq!(3, game_state.turn_placements().len());
        assert_eq!(vec![Move::EndTurn], game_state.enumerate_moves(0));
        game_state.end_turn(0).unwrap();
    }

    #[test]
    fn place_tile_top_left_corner_shifts() {
        let mut game_state = GameState::empty_game_state(2);
        game_state.set_hand(0, &[RED_CIRCLE, BLUE_CIRCLE, GREEN_CIRCLE]);
        game_state.previous_placements[1].push((4, 4));

        game_state.place_tile(0, (0, 1), 0).unwrap();
        // the board grew upward so (0, 1) is now (1, 1)
        game_state.place_tile(0, (1, 0), 1).unwrap();

        assert_eq!(
            (INITIAL_BOARD_LEN + 1, INITIAL_BOARD_LEN + 1),
            (game_state.board().rows(), game_state.board().cols())
        );
        assert_eq!(Some(RED_CIRCLE), game_state.board().tile_at((1, 2)));
        assert_eq!(Some(BLUE_CIRCLE), game_state.board().tile_at((1, 1)));
        assert_eq!(&[(1, 2), (1, 1)], game_state.turn_placements().as_slice());
        assert_eq!(&[(5, 5)], game_state.previous_placements()[1].as_slice());
    }

    #[test]
    fn place_tile_bottom_right_corner_no_shift() {
        let mut game_state = GameState::empty_game_state(2);
        game_state.set_hand(0, &[RED_CIRCLE]);
        let corner = (INITIAL_BOARD_LEN - 1, INITIAL_BOARD_LEN - 1);

        game_state.place_tile(0, corner, 0).unwrap();

        assert_eq!(
            (INITIAL_BOARD_LEN + 1, INITIAL_BOARD_LEN + 1),
            (game_state.board().rows(), game_state.board().cols())
        );
        assert_eq!(Some(RED_CIRCLE), game_state.board().tile_at(corner));
        assert_eq!(&[corner], game_state.turn_placements().as_slice());
    }

    #[test]
    fn place_tile_occupied() {
        let mut game_state = second_turn(&[BLUE_CIRCLE]);
        let before = game_state.clone();

        assert_eq!(
            Err(CommandError::Rejected(Rejection::Occupied { position: (2, 2) })),
            game_state.place_tile(0, (2, 2), 0)
        );
        assert_eq!(before.players(), game_state.players());
        assert_eq!(before.board(), game_state.board());
        assert!(game_state.turn_placements().is_empty());
    }

    #[test]
    fn place_tile_incompatible() {
        let mut game_state = second_turn(&[BLUE_SQUARE]);

        assert!(matches!(
            game_state.place_tile(0, (2, 1), 0),
            Err(CommandError::Rejected(Rejection::IncompatibleLine {
                axis: Axis::Row,
                ..
            }))
        ));
    }

    #[test]
    fn place_tile_not_connected() {
        let mut game_state = second_turn(&[BLUE_CIRCLE]);

        assert_eq!(
            Err(CommandError::Rejected(Rejection::NotConnected { position: (0, 4) })),
            game_state.place_tile(0, (0, 4), 0)
        );
    }

    #[test]
    fn place_tile_not_continuous() {
        let mut game_state = second_turn(&[BLUE_CIRCLE, GREEN_CIRCLE]);
        game_state.place_tile(0, (2, 3), 0).unwrap();

        assert_eq!(
            Err(CommandError::Rejected(Rejection::NotContinuous {
                position: (1, 2),
                placed: (2, 3),
            })),
            game_state.place_tile(0, (1, 2), 1)
        );
    }

    #[test]
    fn place_tile_after_swap_selection() {
        let mut game_state = second_turn(&[BLUE_CIRCLE, GREEN_CIRCLE]);
        game_state.select_tile_to_swap(0, 1).unwrap();

        assert_eq!(
            Err(CommandError::Rejected(Rejection::StagedForSwap)),
            game_state.place_tile(0, (2, 3), 0)
        );
    }

    #[test]
    fn place_tile_empty_slot_and_out_of_range() {
        let mut game_state = second_turn(&[BLUE_CIRCLE]);

        assert_eq!(
            Err(CommandError::Rejected(Rejection::EmptySlot { hand_index: 3 })),
            game_state.place_tile(0, (2, 3), 3)
        );
        assert_eq!(
            Err(CommandError::Rejected(Rejection::HandIndexOutOfBounds {
                hand_index: 6
            })),
            game_state.place_tile(0, (2, 3), 6)
        );
        assert_eq!(
            Err(CommandError::Rejected(Rejection::OutOfBounds {
                position: (2, 40)
            })),
            game_state.place_tile(0, (2, 40), 0)
        );
        assert_eq!(Status::InProgress, *game_state.status());
    }

    #[test]
    fn place_tile_wrong_player_aborts() {
        let mut game_state = second_turn(&[BLUE_CIRCLE]);
        game_state.set_hand(1, &[BLUE_CIRCLE]);

        assert_eq!(
            Err(CommandError::Protocol(ProtocolViolation::NotCurrentPlayer {
                player: 1,
                current_player: 0,
            })),
            game_state.place_tile(1, (2, 3), 0)
        );
        assert!(game_state.is_game_over());
        assert_eq!(
            Err(CommandError::Rejected(Rejection::MatchAborted)),
            game_state.place_tile(0, (2, 3), 0)
        );
    }

    #[test]
    fn place_tile_row_of_three() {
        let mut game_state = second_turn(&[BLUE_CIRCLE, GREEN_CIRCLE]);

        game_state.place_tile(0, (2, 3), 0).unwrap();
        game_state.place_tile(0, (2, 1), 1).unwrap();

        assert_eq!(&[(2, 3), (2, 1)], game_state.turn_placements().as_slice());
        assert_eq!(3, game_state.board().line_len((2, 2), Axis::Row));
    }
}
