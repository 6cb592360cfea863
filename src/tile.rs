use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How many distinct [`Tile`]s exist, one per color and shape pair.
pub const TILES_LEN: usize = Color::COLORS_LEN * Shape::SHAPES_LEN;

/// Describes a tile with [`Color`] and [`Shape`] in a game. Two tiles are equal when both
/// their color and shape are equal, so physical copies of a tile are indistinguishable.
pub type Tile = (Color, Shape);

/// Decodes the ordinal of a [`Tile`] in color then shape order.
///
/// # Returns
///
/// The [`Tile`] with the given ordinal or [None] if `ordinal` is not less than [TILES_LEN].
#[inline]
pub fn tile_from_ordinal(ordinal: usize) -> Option<Tile> {
    let color = Color::from_usize(ordinal / Shape::SHAPES_LEN)?;
    let shape = Shape::from_usize(ordinal % Shape::SHAPES_LEN)?;
    Some((color, shape))
}

/// # Returns
///
/// An [iterator](Iterator) of all [`Tile`] variants in color then shape order.
#[inline]
pub fn tiles() -> impl Iterator<Item = Tile> {
    (0..TILES_LEN).filter_map(tile_from_ordinal)
}

/// One of the two attributes of a [`Tile`].
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Red, first in tile order.
    Red,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Purple, last in tile order.
    Purple,
}

impl Color {
    /// How many colors a full line holds.
    pub const COLORS_LEN: usize = 6;

    /// Every [`Color`], indexed by its discriminant.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Red,
            Color::Orange,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Purple,
        ]
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::colors()[rng.gen_range(0..Color::COLORS_LEN)]
    }
}

/// The other attribute of a [`Tile`].
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Circle, first in tile order.
    Circle,
    /// Square.
    Square,
    /// Diamond.
    Diamond,
    /// Star.
    Star,
    /// Flower.
    Flower,
    /// Heart, last in tile order.
    Heart,
}

impl Shape {
    /// How many shapes a full line holds.
    pub const SHAPES_LEN: usize = 6;

    /// Every [`Shape`], indexed by its discriminant.
    #[inline]
    pub fn shapes() -> [Shape; Shape::SHAPES_LEN] {
        [
            Shape::Circle,
            Shape::Square,
            Shape::Diamond,
            Shape::Star,
            Shape::Flower,
            Shape::Heart,
        ]
    }
}

impl Distribution<Shape> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        Shape::shapes()[rng.gen_range(0..Shape::SHAPES_LEN)]
    }
}
