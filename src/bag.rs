use crate::{tiles, Tile};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
///
/// Slots below the cursor hold undrawn [tiles](Tile) and slots at or above it are
/// consumed. [Bag::draw] takes the [tile](Tile) just below the cursor, so `bag_index + 1`
/// is always the number of undrawn [tiles](Tile).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bag {
    slots: Vec<Option<Tile>>,
    remaining: usize,
}

impl Bag {
    /// Creates a bag with `unique_tile_copied_count` copies of every [tile](Tile) and shuffles
    /// the whole bag.
    pub fn new<R: Rng + ?Sized>(unique_tile_copied_count: usize, rng: &mut R) -> Bag {
        let slots = (0..unique_tile_copied_count)
            .flat_map(|_| tiles())
            .map(Some)
            .collect_vec()
            .tap_mut(|slots| slots.shuffle(rng));
        let remaining = slots.len();
        Bag { slots, remaining }
    }

    /// Creates an unshuffled bag. The last [tile](Tile) is drawn first.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Bag {
        let slots = tiles.into_iter().map(Some).collect_vec();
        let remaining = slots.len();
        Bag { slots, remaining }
    }

    /// The number of undrawn [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Whether every [tile](Tile) has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// The cursor marking the next drawable slot, or [None] when the bag is exhausted.
    #[inline]
    pub fn bag_index(&self) -> Option<usize> {
        self.remaining.checked_sub(1)
    }

    /// Takes the [tile](Tile) at the cursor and moves the cursor down.
    ///
    /// # Returns
    ///
    /// The drawn [tile](Tile), or [None] when the bag is exhausted. An exhausted bag is
    /// an ordinary state of the game and callers simply stop drawing.
    pub fn draw(&mut self) -> Option<Tile> {
        let index = self.bag_index()?;
        self.remaining = index;
        self.slots[index].take()
    }

    /// Appends `tiles` above the cursor and then shuffles exactly the undrawn slots,
    /// including the returned [tiles](Tile).
    pub fn return_and_reshuffle<R: Rng + ?Sized>(
        &mut self,
        tiles: impl IntoIterator<Item = Tile>,
        rng: &mut R,
    ) {
        for tile in tiles {
            match self.slots.get_mut(self.remaining) {
                Some(slot) => *slot = Some(tile),
                None => self.slots.push(Some(tile)),
            }
            self.remaining += 1;
        }
        self.slots[..self.remaining].shuffle(rng);
    }

    /// An [iterator](Iterator) over the undrawn [tiles](Tile) from the bottom of the bag
    /// to the cursor.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.slots[..self.remaining].iter().flatten().copied()
    }
}
