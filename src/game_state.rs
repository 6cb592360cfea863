use crate::{
    max_compatible_len, Bag, Board, GameConfig, Hand, PlacementHistory, Placements, Player,
    Players, Points, Rejection, Shift, HAND_CAPACITY, MAX_PLAYERS, MIN_PLAYERS,
    TILES_LEN,
};
use map_macro::hash_set;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::mem;
use thiserror::Error;
use tracing::{error, info, instrument};

pub use view::*;

mod end_turn;
mod place_tile;
mod select_tile_to_swap;
#[cfg(test)]
mod test_setup;
mod view;

/// Owns the authoritative state of one match and implements the commands which advance it.
/// Created from [GameState::new].
///
/// Every command is checked by the [rules](crate::check_placement) before anything is
/// mutated, so a [rejected](Rejection) command leaves the state untouched.
#[derive(Debug, Clone)]
pub struct GameState {
    /// This is a bag of all the [tiles](crate::Tile) that haven't been drawn yet.
    bag: Bag,
    /// The grid of placed [tiles](crate::Tile).
    board: Board,
    /// Every player in seat order.
    players: Players,
    /// The turn in progress.
    turn: TurnState,
    /// Each player's score when the current turn began.
    previous_scores: Points,
    /// Each player's placements from their most recent turn.
    previous_placements: PlacementHistory,
    /// Whether the match is still running.
    status: Status,
    /// Shuffles the bag when [tiles](crate::Tile) are swapped back in.
    rng: ChaCha8Rng,
}

/// Tracks the turn in progress. Placements accumulate here and are only cleared by
/// committing the turn.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TurnState {
    /// Positions placed this turn in placement order.
    placements: Placements,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// `1` for the opening turn and incremented by every commit.
    turn_number: usize,
    /// The current player's hand when the turn began.
    start_hand: Hand,
}

impl TurnState {
    fn opening(current_player: usize, start_hand: Hand) -> TurnState {
        TurnState {
            placements: Placements::new(),
            current_player,
            turn_number: 1,
            start_hand,
        }
    }

    /// Positions placed this turn in placement order.
    #[inline]
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// `1` for the opening turn and incremented by every commit.
    #[inline]
    pub fn turn_number(&self) -> usize {
        self.turn_number
    }

    /// The current player's hand when the turn began.
    #[inline]
    pub fn start_hand(&self) -> &Hand {
        &self.start_hand
    }

    /// Ends the turn in progress.
    ///
    /// # Returns
    ///
    /// The placements of the ended turn.
    fn commit(&mut self) -> Placements {
        mem::take(&mut self.placements)
    }

    /// Hands the turn to `current_player`, who holds `start_hand`.
    fn begin(&mut self, current_player: usize, start_hand: Hand) {
        self.current_player = current_player;
        self.turn_number += 1;
        self.start_hand = start_hand;
    }
}

/// Whether a match is running, ended normally, or was aborted.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Commands are accepted.
    InProgress,
    /// Some player emptied their hand after the bag ran out.
    Over(Outcome),
    /// A [protocol violation](ProtocolViolation) terminated the match.
    Aborted(ProtocolViolation),
}

impl Status {
    /// # Errors
    ///
    /// * [Rejection::GameOver] If the match ended normally.
    /// * [Rejection::MatchAborted] If the match was aborted.
    pub fn check_in_progress(&self) -> Result<(), Rejection> {
        match self {
            Status::InProgress => Ok(()),
            Status::Over(_) => Err(Rejection::GameOver),
            Status::Aborted(_) => Err(Rejection::MatchAborted),
        }
    }
}

/// The result of a finished match.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A single player holds the strictly highest score.
    Winner(usize),
    /// Several players share the highest score.
    Draw(BTreeSet<usize>),
}

impl Outcome {
    /// Finds every player holding the highest of `scores`, indexed by seat.
    ///
    /// # Returns
    ///
    /// [Outcome::Winner] if one player holds it alone, [Outcome::Draw] otherwise.
    pub fn from_scores(scores: impl IntoIterator<Item = usize>) -> Outcome {
        let scores: Points = scores.into_iter().collect();
        let max = scores.iter().copied().max().unwrap_or_default();
        let mut winners: BTreeSet<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == max)
            .map(|(player, _)| player)
            .collect();

        match winners.len() {
            1 => winners.pop_first().map_or(Outcome::Draw(BTreeSet::new()), Outcome::Winner),
            _ => Outcome::Draw(winners),
        }
    }
}

/// Describes a caller and engine desynchronization. A violation aborts the match.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error, Serialize, Deserialize)]
pub enum ProtocolViolation {
    /// A command named a player who has no seat in the match.
    #[error("player {player} has no seat among {players} players")]
    UnknownPlayer {
        /// The player named by the command.
        player: usize,
        /// The number of seats.
        players: usize,
    },
    /// A placement or swap selection was attributed to a player whose turn it is not.
    #[error("player {player} acted during player {current_player}'s turn")]
    NotCurrentPlayer {
        /// The player named by the command.
        player: usize,
        /// The index of the player whose turn it is.
        current_player: usize,
    },
    /// A commit found both placements and [tiles](crate::Tile) staged for swap.
    #[error("{placed} tiles placed and {staged} tiles staged for swap in one turn")]
    PlacedAndSwapped {
        /// The number of positions placed this turn.
        placed: usize,
        /// The number of [tiles](crate::Tile) staged for swap.
        staged: usize,
    },
}

/// Describes why a command failed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum CommandError {
    /// The command broke a rule. Nothing changed and the player may try again.
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),
    /// The command revealed a desynchronization and the match is now
    /// [aborted](Status::Aborted).
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),
}

/// Describes the reason why [GameState] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewError {
    /// Attempting [to start](GameState::new) with fewer than [MIN_PLAYERS].
    #[error("{players} players is too few")]
    TooFewPlayers {
        /// The requested number of players.
        players: usize,
    },
    /// Attempting [to start](GameState::new) with more than [MAX_PLAYERS].
    #[error("{players} players is too many")]
    TooManyPlayers {
        /// The requested number of players.
        players: usize,
    },
    /// Attempting [to start](GameState::new) with an empty bag.
    #[error("the bag is empty")]
    EmptyBag,
    /// Attempting to deal more [tiles](crate::Tile) than [tiles](crate::Tile) in the bag.
    #[error("{requested_tiles} tiles requested for hands but {tiles_in_bag} tiles in the bag")]
    NotEnoughTiles {
        /// The number of [tiles](crate::Tile) requested for hands.
        requested_tiles: usize,
        /// The number of [tiles](crate::Tile) in the bag.
        tiles_in_bag: usize,
    },
    /// Attempting [to start](GameState::new) with a board of no cells.
    #[error("the board is empty")]
    EmptyBoard,
    /// Attempting to select an opener not in `max_matching_players`.
    #[error("player {opener} is not among {max_matching_players:?}")]
    OpenerNotMaxMatchingPlayer {
        /// The selected opener.
        opener: usize,
        /// An ordered set of indexes of players who all hold the largest compatible subset.
        max_matching_players: BTreeSet<usize>,
    },
}

impl GameState {
    /// Checks `config`, creates and shuffles a bag with `rng`, and deals a full hand to each
    /// player in seat order.
    ///
    /// Finds the size of the largest compatible subset of each hand and then every player
    /// holding the largest of those sizes. Then, selects the opener from those players with
    /// `first_player_selector`, which may also draw from `rng`.
    ///
    /// # Errors
    ///
    /// * [NewError::TooFewPlayers] Attempting to start with fewer than [MIN_PLAYERS].
    /// * [NewError::TooManyPlayers] Attempting to start with more than [MAX_PLAYERS].
    /// * [NewError::EmptyBag] Attempting to start with an empty bag.
    /// * [NewError::NotEnoughTiles] Attempting to deal more [tiles](crate::Tile) than
    /// [tiles](crate::Tile) in the bag.
    /// * [NewError::EmptyBoard] Attempting to start with a board of no cells.
    /// * [NewError::OpenerNotMaxMatchingPlayer] Attempting to select an opener not in
    /// `max_matching_players`.
    ///
    /// # See Also
    ///
    /// * [GameState::new_random_opener]
    /// * [GameState::from_seed]
    #[instrument(skip(rng, first_player_selector))]
    pub fn new(
        config: GameConfig,
        mut rng: ChaCha8Rng,
        first_player_selector: impl FnOnce(&BTreeSet<usize>, &mut ChaCha8Rng) -> usize,
    ) -> Result<GameState, HashSet<NewError>> {
        GameState::check(&config)?;

        let mut bag = Bag::new(config.unique_tile_copied_count, &mut rng);
        let mut players: Players = (0..config.players).map(|_| Player::new()).collect();
        for player in &mut players {
            player.fill_hand(&mut bag);
        }

        let max_matching_players = GameState::max_matching_players(&players);
        let opener = first_player_selector(&max_matching_players, &mut rng);
        if !max_matching_players.contains(&opener) {
            return Err(hash_set! { NewError::OpenerNotMaxMatchingPlayer {
                opener,
                max_matching_players,
            }});
        }
        info!(opener, bag_len = bag.len(), "match created");

        Ok(GameState {
            bag,
            board: Board::new(config.initial_board_len, config.initial_board_len),
            turn: TurnState::opening(opener, *players[opener].hand()),
            previous_scores: players.iter().map(Player::score).collect(),
            previous_placements: players.iter().map(|_| Placements::new()).collect(),
            players,
            status: Status::InProgress,
            rng,
        })
    }

    /// Same as [GameState::new] except the opener is picked uniformly at random with `rng`
    /// among the players holding the largest compatible subset.
    ///
    /// # Errors
    ///
    /// Same as [GameState::new] except never [NewError::OpenerNotMaxMatchingPlayer].
    pub fn new_random_opener(
        config: GameConfig,
        rng: ChaCha8Rng,
    ) -> Result<GameState, HashSet<NewError>> {
        GameState::new(config, rng, |max_matching_players, rng| {
            max_matching_players
                .iter()
                .copied()
                .choose(rng)
                .unwrap_or_default()
        })
    }

    /// Same as [GameState::new_random_opener] with a [ChaCha8Rng] seeded from `seed`. Two
    /// matches created from the same `config` and `seed` replay identically.
    ///
    /// # Errors
    ///
    /// Same as [GameState::new_random_opener].
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<GameState, HashSet<NewError>> {
        GameState::new_random_opener(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Collects every violation in `config`.
    fn check(config: &GameConfig) -> Result<(), HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(5);
        let players = config.players;
        if players < MIN_PLAYERS {
            errors.insert(NewError::TooFewPlayers { players });
        }
        if players > MAX_PLAYERS {
            errors.insert(NewError::TooManyPlayers { players });
        }
        if config.unique_tile_copied_count == 0 {
            errors.insert(NewError::EmptyBag);
        }

        let requested_tiles = players * HAND_CAPACITY;
        let tiles_in_bag = TILES_LEN * config.unique_tile_copied_count;
        if requested_tiles > tiles_in_bag {
            errors.insert(NewError::NotEnoughTiles {
                requested_tiles,
                tiles_in_bag,
            });
        }

        if config.initial_board_len == 0 {
            errors.insert(NewError::EmptyBoard);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    /// # Returns
    ///
    /// The indexes of players whose hand has the largest compatible subset of all hands.
    fn max_matching_players(players: &Players) -> BTreeSet<usize> {
        let max_matches: Points = players
            .iter()
            .map(|player| max_compatible_len(player.hand()))
            .collect();
        let max_max_match = max_matches.iter().copied().max().unwrap_or_default();

        max_matches
            .iter()
            .enumerate()
            .filter(|&(_, &max_match)| max_match == max_max_match)
            .map(|(player, _)| player)
            .collect()
    }

    /// Whether the match is running, over, or aborted.
    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the match has ended normally or was aborted. No command is accepted afterwards.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// # Returns
    ///
    /// The winner or the drawn players once the match has ended normally.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.status {
            Status::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The grid of placed [tiles](crate::Tile).
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every player in seat order.
    #[inline]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// # Returns
    ///
    /// The player in seat `player` or [None] if there is no such seat.
    #[inline]
    pub fn player(&self, player: usize) -> Option<&Player> {
        self.players.get(player)
    }

    /// The number of undrawn [tiles](crate::Tile).
    #[inline]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// The turn in progress.
    #[inline]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.turn.current_player
    }

    /// `1` for the opening turn and incremented by every commit.
    #[inline]
    pub fn turn_number(&self) -> usize {
        self.turn.turn_number
    }

    /// Whether this is the first turn of the match, which has no [tile](crate::Tile) to
    /// connect to and must place a largest compatible subset of the opener's hand.
    #[inline]
    pub fn is_opening_turn(&self) -> bool {
        self.turn.turn_number == 1
    }

    /// Positions placed this turn in placement order.
    #[inline]
    pub fn turn_placements(&self) -> &Placements {
        &self.turn.placements
    }

    /// The current player's hand when the turn began.
    #[inline]
    pub fn turn_start_hand(&self) -> &Hand {
        &self.turn.start_hand
    }

    /// Each player's score when the current turn began.
    #[inline]
    pub fn previous_scores(&self) -> &Points {
        &self.previous_scores
    }

    /// # Returns
    ///
    /// The score of `player` when the current turn began, or [None] if there is no such seat.
    #[inline]
    pub fn previous_score(&self, player: usize) -> Option<usize> {
        self.previous_scores.get(player).copied()
    }

    /// Each player's placements from their most recent turn, at their current positions.
    #[inline]
    pub fn previous_placements(&self) -> &PlacementHistory {
        &self.previous_placements
    }

    /// The points `player` earned since the current turn began, which a search opponent
    /// maximizes.
    ///
    /// # Returns
    ///
    /// `score - previous_score` or [None] if there is no such seat.
    pub fn objective(&self, player: usize) -> Option<usize> {
        let score = self.player(player)?.score();
        score.checked_sub(self.previous_score(player)?)
    }

    /// Checks that the match is running and that `player` has a seat. An unknown seat aborts
    /// the match.
    ///
    /// # Errors
    ///
    /// * [CommandError::Rejected] If the match is over or aborted.
    /// * [CommandError::Protocol] If `player` has no seat.
    fn check_seat(&mut self, player: usize) -> Result<(), CommandError> {
        self.status.check_in_progress()?;
        let players = self.players.len();
        if player >= players {
            return Err(self.abort(ProtocolViolation::UnknownPlayer { player, players }));
        }
        Ok(())
    }

    /// Same as [GameState::check_seat] and additionally aborts the match if it is not
    /// `player`'s turn.
    fn check_actor(&mut self, player: usize) -> Result<(), CommandError> {
        self.check_seat(player)?;
        let current_player = self.turn.current_player;
        if player != current_player {
            return Err(self.abort(ProtocolViolation::NotCurrentPlayer {
                player,
                current_player,
            }));
        }
        Ok(())
    }

    /// Terminates the match.
    ///
    /// # Returns
    ///
    /// The error to report to the caller.
    fn abort(&mut self, violation: ProtocolViolation) -> CommandError {
        error!(%violation, turn_number = self.turn.turn_number, "match aborted");
        self.status = Status::Aborted(violation.clone());
        CommandError::Protocol(violation)
    }

    /// Moves every kept position after the board grew at its top or left edge.
    fn apply_shift(&mut self, shift: Shift) {
        if shift.is_none() {
            return;
        }
        let history = self.previous_placements.iter_mut().flatten();
        for position in self.turn.placements.iter_mut().chain(history) {
            *position = shift.apply(*position);
        }
    }

    /// # Returns
    ///
    /// The [outcome](Outcome) if some player has an empty hand with nothing staged and the bag
    /// is exhausted.
    fn detect_game_end(&self) -> Option<Outcome> {
        let ended = self.bag.is_empty()
            && self
                .players
                .iter()
                .any(|player| player.is_hand_empty() && player.staged_for_swap().is_empty());
        ended.then(|| Outcome::from_scores(self.players.iter().map(Player::score)))
    }
}
