//! RNG module - uniform random piece selection
//!
//! Every spawn is an independent uniform draw over the seven kinds; repeats
//! are allowed and there is no bag. Sessions are reproducible from a seed,
//! which the tests and benches rely on.

use crate::types::PieceKind;

/// xorshift32 generator (Marsaglia 13/17/5).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is a fixed point of xorshift and is mapped to 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Value in `0..max` by multiply-shift, so no modulo bias toward low values.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        let xs: Vec<u32> = (0..64).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..64).map(|_| b.next_u32()).collect();
        assert_eq!(xs, ys);

        let mut c = SimpleRng::new(54321);
        assert_ne!(c.next_u32(), xs[0]);
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), 0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn range_stays_below_max() {
        let mut rng = SimpleRng::new(99);
        assert!((0..1000).all(|_| rng.next_range(7) < 7));
        assert_eq!(rng.next_range(1), 0);
    }

    #[test]
    fn kinds_are_roughly_uniform() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [0u32; 7];
        for _ in 0..7000 {
            seen[rng.next_kind().index()] += 1;
        }
        for (i, &count) in seen.iter().enumerate() {
            assert!((700..1300).contains(&count), "kind {} drawn {} times", i, count);
        }
    }

    #[test]
    fn back_to_back_repeats_happen() {
        let mut rng = SimpleRng::new(1);
        let draws: Vec<PieceKind> = (0..200).map(|_| rng.next_kind()).collect();
        assert!(draws.windows(2).any(|w| w[0] == w[1]));
    }
}
