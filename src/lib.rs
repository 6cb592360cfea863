//! Rule engine for a tile matching game: validation, scoring, turns, and move enumeration.
//!
//! ## Summary
//!
//! Players take turns placing [tiles](Tile) on a growing [board](Board). Every row and column
//! of adjacent [tiles](Tile) must either share one [color](Color) with distinct
//! [shapes](Shape) or share one [shape](Shape) with distinct [colors](Color). Lines earn
//! points, and a complete line of [QWIRKLE_LEN] [tiles](Tile) earns [QWIRKLE_POINTS].
//! [GameState] owns the authoritative state of one match and accepts three commands:
//! [placing](GameState::place_tile) a [tile](Tile),
//! [staging](GameState::select_tile_to_swap) a [tile](Tile) to swap, and
//! [ending](GameState::end_turn) the turn.
//!
//! ## How is the game created?
//!
//! [GameState::new] checks a [GameConfig], shuffles a [bag](Bag) of
//! [DEFAULT_UNIQUE_TILE_COPIED_COUNT] copies of every [tile](Tile) with an injected
//! [ChaCha8Rng](rand_chacha::ChaCha8Rng), and deals [HAND_CAPACITY] [tiles](Tile) to each
//! player in seat order. The opener is chosen among the players whose hand holds the
//! [largest compatible subset](max_compatible_len). [GameState::from_seed] replays
//! identically for the same seed.
//!
//! ## How is a turn played?
//!
//! During a turn the current player either places one or more [tiles](Tile) forming one
//! continuous line, or stages [tiles](Tile) to swap, but never both. Each command is checked
//! by a pure predicate ([check_placement], [check_swap_selection], [check_end_turn]) before
//! anything changes. A [rejected](Rejection) command changes nothing. A command that reveals
//! a desynchronization between caller and engine is a [protocol violation](ProtocolViolation)
//! and aborts the match.
//!
//! The opening turn has no [tile](Tile) to connect to. It must instead place as many
//! [tiles](Tile) as the largest compatible subset of the opener's hand.
//!
//! Ending the turn [scores](score_turn) the placements, returns staged [tiles](Tile) to the
//! bag, refills the hand, and hands the turn to the next seat.
//!
//! ## How is the game ended?
//!
//! The match ends once some player's hand is empty and the bag is exhausted. That player
//! earns the [last play bonus](LAST_PLAY_BONUS). The player with the most points wins and a
//! tie for the most points is a [draw](Outcome::Draw).
//!
//! ## How is the game viewed?
//!
//! [GameState::player_view] and [GameState::spectator_view] borrow the state with other
//! players' hands and the bag replaced by counts. [enumerate_moves] lists every legal
//! [move](Move) for a search opponent, and [GameState::objective] reports the points a player
//! earned since the current turn began.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to build an empty [GameState] and to get
//! mutable references to its properties, and random fixtures for [tiles](Tile) and hands.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use config::*;
pub use consts::*;
pub use game_state::*;
pub use moves::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use rules::*;
pub use scoring::*;
pub use tile::*;
pub use types::*;

mod bag;
mod board;
mod config;
mod consts;
mod game_state;
mod moves;
mod player;
#[cfg(test)]
mod random;
mod rules;
mod scoring;
mod tile;
mod types;
