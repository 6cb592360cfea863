use crate::{
    Bag, Board, GameState, Placements, Player, Status, Tile, TurnState, HAND_CAPACITY,
    INITIAL_BOARD_LEN,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

impl GameState {
    /// Generates a [GameState] on the opening turn with `players` empty players.
    ///
    /// # Returns
    ///
    /// A [GameState] struct with the properties set to the following:
    /// * `bag`: An empty bag.
    /// * `board`: An empty [INITIAL_BOARD_LEN] square board.
    /// * `players`: `players` players with empty hands and no points.
    /// * `turn`: The opening turn of player `0` with an empty start hand.
    /// * `status`: [Status::InProgress].
    pub fn empty_game_state(players: usize) -> GameState {
        GameState {
            bag: Bag::from_tiles([]),
            board: Board::new(INITIAL_BOARD_LEN, INITIAL_BOARD_LEN),
            players: (0..players).map(|_| Player::new()).collect(),
            turn: TurnState::opening(0, [None; HAND_CAPACITY]),
            previous_scores: (0..players).map(|_| 0).collect(),
            previous_placements: (0..players).map(|_| Placements::new()).collect(),
            status: Status::InProgress,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.status`.
    pub fn mut_status(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Fills `player`'s hand from slot `0` with `tiles` and empties the remaining slots.
    pub fn set_hand(&mut self, player: usize, tiles: &[Tile]) {
        let hand = self.players[player].mut_hand();
        *hand = [None; HAND_CAPACITY];
        for (slot, &tile) in hand.iter_mut().zip(tiles) {
            *slot = Some(tile);
        }
        if player == self.turn.current_player {
            self.turn.start_hand = *hand;
        }
    }

    /// Starts turn `turn_number` of `player` with the hand they hold now.
    pub fn set_turn(&mut self, player: usize, turn_number: usize) {
        self.turn.current_player = player;
        self.turn.turn_number = turn_number;
        self.turn.start_hand = *self.players[player].hand();
    }

    /// Writes `tiles` onto the board as if placed on earlier turns.
    pub fn set_board(&mut self, tiles: &[((usize, usize), Tile)]) {
        for &(position, tile) in tiles {
            self.board.place(position, tile);
        }
    }
}
