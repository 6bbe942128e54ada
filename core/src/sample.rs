use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks `amount` distinct positions of `items` uniformly at random, or `None`
/// when there are fewer than `amount` items.
pub fn sample_distinct<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    amount: usize,
    rng: &mut R,
) -> Option<Vec<T>> {
    if items.len() < amount {
        return None;
    }

    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.shuffle(rng);
    indices.truncate(amount);
    Some(indices.into_iter().map(|i| items[i].clone()).collect())
}
