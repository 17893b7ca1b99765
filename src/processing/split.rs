//! Seeded train/test partitioning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Shuffle `items` with a seeded RNG and split them into `(train, test)`.
///
/// The train partition holds `floor(len * train_fraction)` items; the rest go to test.
/// The same seed always produces the same partitions.
///
/// # Panics
///
/// Panics if `train_fraction` is not within `[0, 1]`.
pub fn train_test_split<T: Clone>(items: &[T], train_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    assert!(
        (0.0..=1.0).contains(&train_fraction),
        "train_fraction must be within [0, 1], got {train_fraction}"
    );

    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let train_len = (items.len() as f64 * train_fraction).floor() as usize;
    let (train_idx, test_idx) = order.split_at(train_len);
    (
        train_idx.iter().map(|&i| items[i].clone()).collect(),
        test_idx.iter().map(|&i| items[i].clone()).collect(),
    )
}
