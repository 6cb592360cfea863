use crate::{Bag, Hand, Staged, Tile, HAND_CAPACITY};
use std::mem;

/// Owns one player's rack of [tiles](Tile), the [tiles](Tile) they have staged to be
/// exchanged this turn, and their cumulative score.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Player {
    /// Positional slots. An index identifies a slot, not a [tile](Tile) value.
    hand: Hand,
    /// [Tiles](Tile) taken out of the hand and waiting to go back into the bag.
    staged_for_swap: Staged,
    /// Points earned so far.
    score: usize,
}

impl Player {
    /// A player with an empty hand and no points.
    pub fn new() -> Player {
        Player::default()
    }

    /// All slots of the hand.
    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// # Returns
    ///
    /// The [tile](Tile) in slot `index`, or [None] if the slot is empty or `index` is not less
    /// than [HAND_CAPACITY].
    #[inline]
    pub fn tile_at(&self, index: usize) -> Option<Tile> {
        self.hand.get(index).copied().flatten()
    }

    /// An [iterator](Iterator) over occupied slots as `(index, tile)` pairs.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, Tile)> + '_ {
        self.hand
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|tile| (index, tile)))
    }

    /// The number of occupied slots.
    pub fn hand_len(&self) -> usize {
        self.hand.iter().flatten().count()
    }

    /// Whether every slot is empty.
    pub fn is_hand_empty(&self) -> bool {
        self.hand.iter().all(Option::is_none)
    }

    /// The [tiles](Tile) staged to be returned to the bag at the end of this turn.
    #[inline]
    pub fn staged_for_swap(&self) -> &Staged {
        &self.staged_for_swap
    }

    /// Points earned so far.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Empties slot `index`.
    ///
    /// # Returns
    ///
    /// The [tile](Tile) that was in the slot.
    pub(crate) fn take(&mut self, index: usize) -> Option<Tile> {
        self.hand.get_mut(index)?.take()
    }

    /// Moves the [tile](Tile) in slot `index` onto the staging list.
    ///
    /// # Returns
    ///
    /// The staged [tile](Tile).
    pub(crate) fn stage(&mut self, index: usize) -> Option<Tile> {
        let tile = self.take(index)?;
        self.staged_for_swap.push(tile);
        Some(tile)
    }

    /// Empties the staging list.
    pub(crate) fn drain_staged(&mut self) -> Staged {
        mem::take(&mut self.staged_for_swap)
    }

    pub(crate) fn add_points(&mut self, points: usize) {
        self.score += points;
    }

    /// Draws from `bag` into each empty slot in slot order until the hand is full or
    /// the bag is exhausted.
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) drawn.
    pub(crate) fn fill_hand(&mut self, bag: &mut Bag) -> usize {
        let mut drawn = 0;
        for slot in self.hand.iter_mut().filter(|slot| slot.is_none()) {
            let Some(tile) = bag.draw() else {
                break;
            };
            *slot = Some(tile);
            drawn += 1;
        }
        drawn
    }
}

#[cfg(test)]
impl Player {
    /// A mutable reference to `self.hand`.
    pub fn mut_hand(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// A mutable reference to `self.score`.
    pub fn mut_score(&mut self) -> &mut usize {
        &mut self.score
    }
}
