//! Random integer helper for sketches.

use rand::Rng;

/// Uniform integer in `[0, range)`. A zero range yields `0`.
pub fn random_int(range: u32) -> u32 {
    random_int_with(&mut rand::thread_rng(), range)
}

/// [`random_int`] with a caller-supplied generator.
pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, range: u32) -> u32 {
    if range == 0 {
        return 0;
    }
    rng.gen_range(0..range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn stays_below_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for range in 1..50 {
            for _ in 0..20 {
                assert!(random_int_with(&mut rng, range) < range);
            }
        }
    }

    #[test]
    fn unit_range_is_always_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!((0..100).all(|_| random_int_with(&mut rng, 1) == 0));
    }

    #[test]
    fn zero_range_is_zero() {
        assert_eq!(random_int(0), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(1);
        let xs: Vec<u32> = (0..10).map(|_| random_int_with(&mut a, 1000)).collect();
        let ys: Vec<u32> = (0..10).map(|_| random_int_with(&mut b, 1000)).collect();
        assert_eq!(xs, ys);
    }
}
