/// Stochastic mechanics: RNG helpers over any `rand_core::RngCore`.
/// Core logic never reaches for an ambient generator; callers pass the
/// session's source (a seeded `bevy_prng::WyRand` by default).
use rand_core::RngCore;

/// Uniform draw in [0, 1) with 53 bits of precision.
#[inline]
pub fn uniform01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Uniform draw in [lo, hi).
#[inline]
pub fn uniform<R: RngCore + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + uniform01(rng) * (hi - lo)
}

/// floor(U · bound) for a fractional `bound`, clamped to `len - 1`.
/// `len` must be non-zero.
#[inline]
pub fn index_below<R: RngCore + ?Sized>(rng: &mut R, bound: f64, len: usize) -> usize {
    let i = (uniform01(rng) * bound.max(0.0)).floor() as usize;
    i.min(len.saturating_sub(1))
}

/// Uniform index in 0..len. `len` must be non-zero.
#[inline]
pub fn pick<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    index_below(rng, len as f64, len)
}

/// Cumulative-weight roulette. Returns the first index whose running total
/// reaches the drawn point, the last weighted index if rounding leaves the
/// draw past the total, and `None` when nothing has positive weight.
pub fn roulette<R: RngCore + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    let point = uniform01(rng) * total;
    let mut acc = 0.0;
    let mut last = None;
    for (i, &w) in weights.iter().enumerate() {
        if w.is_nan() || w <= 0.0 {
            continue;
        }
        acc += w;
        last = Some(i);
        if point <= acc {
            return last;
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_prng::WyRand;
    use rand_core::SeedableRng;

    /// Always returns the same word.
    struct Fixed(u64);
    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }
        fn next_u64(&mut self) -> u64 {
            self.0
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (i, b) in dst.iter_mut().enumerate() {
                *b = self.0.to_le_bytes()[i % 8];
            }
        }
    }

    #[test]
    fn uniform_is_half_open() {
        assert_eq!(uniform01(&mut Fixed(0)), 0.0);
        assert!(uniform01(&mut Fixed(u64::MAX)) < 1.0);
        let mut rng = WyRand::from_seed(7u64.to_le_bytes());
        for _ in 0..1_000 {
            let u = uniform(&mut rng, 0.1, 1.0);
            assert!((0.1..1.0).contains(&u));
        }
    }

    #[test]
    fn index_never_escapes_slice() {
        assert_eq!(index_below(&mut Fixed(u64::MAX), 25.0, 25), 24);
        assert_eq!(index_below(&mut Fixed(u64::MAX), 40.0, 25), 24);
        assert_eq!(pick(&mut Fixed(0), 4), 0);
    }

    #[test]
    fn roulette_takes_first_reaching_bucket() {
        // Draw of 0 lands in the first bucket with positive weight.
        assert_eq!(roulette(&mut Fixed(0), &[0.0, 1.0, 1.0]), Some(1));
        // Draw near the top lands in the last weighted bucket.
        assert_eq!(roulette(&mut Fixed(u64::MAX), &[1.0, 1.0, 1.0]), Some(2));
        assert_eq!(roulette(&mut Fixed(u64::MAX), &[1.0, 1.0, 0.0]), Some(1));
        assert_eq!(roulette(&mut Fixed(0), &[]), None);
        assert_eq!(roulette(&mut Fixed(0), &[0.0, 0.0]), None);
    }
}
