use serde::{Deserialize, Serialize};

// Simple pseudorandom number generator using xorshift algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoRandom {
    state: u64,
}

impl PseudoRandom {
    pub fn new(seed: u64) -> Self {
        // Ensure we don't start with 0 state as xorshift doesn't work with 0
        let state = if seed == 0 { 0x1234567890abcdef } else { seed };
        PseudoRandom { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        // xorshift64 algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform value in `0..bound` using multiply-shift reduction. `bound` must be non-zero.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PseudoRandom::new(42);
        let mut b = PseudoRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_still_produces_values() {
        let mut rng = PseudoRandom::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn next_below_stays_in_range_and_covers_it() {
        let mut rng = PseudoRandom::new(7);
        let mut seen = [false; 20];
        for _ in 0..2000 {
            let v = rng.next_below(20);
            assert!(v < 20);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
