use crate::{Color, Hand, Shape, Tile, HAND_CAPACITY};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A new [tile](Tile) with a random, different [shape](Shape) but the same [color](Color).
pub fn random_different_shape_same_color<R: Rng + ?Sized>(
    rng: &mut R,
    (color, shape): Tile,
) -> Tile {
    let random_index = Uniform::from(0..Shape::SHAPES_LEN - 1).sample(rng);
    // skip the shape's own index
    let random_different_index = random_index + usize::from(random_index >= shape as usize);
    (color, Shape::shapes()[random_different_index])
}

/// A new [tile](Tile) with a random, different [color](Color) but the same [shape](Shape).
pub fn random_different_color_same_shape<R: Rng + ?Sized>(
    rng: &mut R,
    (color, shape): Tile,
) -> Tile {
    let random_index = Uniform::from(0..Color::COLORS_LEN - 1).sample(rng);
    // skip the color's own index
    let random_different_index = random_index + usize::from(random_index >= color as usize);
    (Color::colors()[random_different_index], shape)
}

/// A hand where each slot is randomly either empty or holds a random [tile](Tile).
pub fn random_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let mut hand = [None; HAND_CAPACITY];
    for slot in &mut hand {
        if rng.gen_bool(0.75) {
            *slot = Some(rng.gen());
        }
    }
    hand
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{max_compatible_len, tiles_are_compatible};

    #[test]
    fn random_different_shape_same_color_single_sample() {
        let mut rng = rand::thread_rng();
        let tile = rng.gen();

        let (same_color, different_shape) = random_different_shape_same_color(&mut rng, tile);

        let (color, shape) = tile;
        assert_eq!(color, same_color);
        assert_ne!(shape, different_shape);
    }

    #[test]
    fn random_different_color_same_shape_single_sample() {
        let mut rng = rand::thread_rng();
        let tile = rng.gen();

        let (different_color, same_shape) = random_different_color_same_shape(&mut rng, tile);

        let (color, shape) = tile;
        assert_ne!(color, different_color);
        assert_eq!(shape, same_shape);
    }

    #[test]
    fn random_different_pairs_compatible() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let tile = rng.gen();
            assert!(tiles_are_compatible(&[
                tile,
                random_different_shape_same_color(&mut rng, tile)
            ]));
            assert!(tiles_are_compatible(&[
                tile,
                random_different_color_same_shape(&mut rng, tile)
            ]));
        }
    }

    #[test]
    fn random_hand_max_compatible_bounded() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let hand = random_hand(&mut rng);

            let len = hand.iter().flatten().count();
            let max = max_compatible_len(&hand);
            assert!(max <= len);
            assert_eq!(len > 0, max > 0);
        }
    }
}
