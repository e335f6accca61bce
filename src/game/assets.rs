use rand::seq::SliceRandom;
use rand::Rng;

pub const ANIMALS: [&str; 30] = [
    "bear", "buffalo", "chick", "chicken", "cow", "crocodile", "dog", "duck", "elephant", "frog",
    "giraffe", "goat", "gorilla", "hippo", "horse", "monkey", "moose", "narwhal", "owl", "panda",
    "parrot", "penguin", "pig", "rabbit", "rhino", "sloth", "snake", "walrus", "whale", "zebra",
];

/// Picks `count` distinct animal images to decorate the answer buttons.
pub fn pick_images<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<&'static str> {
    ANIMALS
        .choose_multiple(rng, count.min(ANIMALS.len()))
        .copied()
        .collect()
}
