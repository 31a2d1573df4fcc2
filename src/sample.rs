use indexmap::IndexSet;
use rand::Rng;
use tracing::{debug, warn};

/// Draws `sample_size` elements from `data` uniformly, without replacement,
/// using the thread-local RNG.
///
/// See [`sample_with_rng`] for the full contract.
pub fn sample<T: Clone>(data: &[T], sample_size: usize) -> Vec<T> {
    sample_with_rng(data, sample_size, &mut rand::rng())
}

/// Draws `sample_size` elements from `data` uniformly, without replacement,
/// using the caller's RNG.
///
/// A request larger than the population is clamped to the population, so the
/// result length is always `min(sample_size, data.len())` and an empty
/// population yields an empty result. Each returned element comes from a
/// distinct source index, and elements appear in selection order rather than
/// source order.
///
/// Selection is rejection sampling: duplicate index draws are discarded and
/// redrawn. Expected draw counts stay low while the sample is small relative
/// to the population but degrade toward quadratic as it approaches the full
/// population, so very large near-complete samples are better served by a
/// shuffle.
pub fn sample_with_rng<T: Clone, R: Rng + ?Sized>(
    data: &[T],
    sample_size: usize,
    rng: &mut R,
) -> Vec<T> {
    let population = data.len();
    let requested = sample_size;
    // Clamp before the draw loop; clamping inside it would not terminate.
    let sample_size = sample_size.min(population);
    if sample_size < requested {
        debug!(requested, population, "clamping sample size to population");
    }
    if sample_size == 0 {
        return Vec::new();
    }
    if sample_size * 2 > population {
        warn!(
            sample_size,
            population, "rejection-sampling a dense subset; expect repeated draws"
        );
    }

    let mut selected: IndexSet<usize> = IndexSet::with_capacity(sample_size);
    while selected.len() < sample_size {
        // A duplicate draw leaves the set unchanged and the loop redraws.
        selected.insert(rng.random_range(0..population));
    }
    selected.into_iter().map(|index| data[index].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SplitMix64;

    #[test]
    fn zero_sample_size_yields_empty() {
        let mut rng = SplitMix64::new(1);
        assert!(sample_with_rng(&[1, 2, 3], 0, &mut rng).is_empty());
    }

    #[test]
    fn empty_population_yields_empty_for_any_size() {
        let mut rng = SplitMix64::new(1);
        let data: [u8; 0] = [];
        assert!(sample_with_rng(&data, 5, &mut rng).is_empty());
    }

    #[test]
    fn oversized_request_clamps_to_population() {
        let mut rng = SplitMix64::new(9);
        let drawn = sample_with_rng(&[10, 20, 30], 100, &mut rng);
        assert_eq!(drawn.len(), 3);
    }

    #[test]
    fn same_seed_reproduces_the_sample() {
        let data: Vec<u32> = (0..40).collect();
        let first = sample_with_rng(&data, 8, &mut SplitMix64::new(123));
        let second = sample_with_rng(&data, 8, &mut SplitMix64::new(123));
        assert_eq!(first, second);
    }

    #[test]
    fn input_is_left_untouched() {
        let data = vec![5, 6, 7, 8];
        let before = data.clone();
        let _ = sample_with_rng(&data, 2, &mut SplitMix64::new(4));
        assert_eq!(data, before);
    }
}
