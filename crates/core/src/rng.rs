//! RNG module - seeded tile spawning
//!
//! New tiles land on a uniformly chosen empty cell and are a 2 with
//! probability 9/10, a 4 otherwise. Everything is driven by a small LCG so a
//! seed fully determines a game.

use crate::types::{SPAWN_FOUR_WEIGHT, SPAWN_WEIGHT_TOTAL};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Picks spawn cells and spawn values for new tiles
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
}

impl TileSpawner {
    /// Create a new spawner with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Choose an index in `[0, empty_count)` uniformly.
    ///
    /// Returns `None` when there is nowhere to spawn.
    pub fn pick_cell(&mut self, empty_count: usize) -> Option<usize> {
        if empty_count == 0 {
            return None;
        }
        Some(self.rng.next_range(empty_count as u32) as usize)
    }

    /// Draw the value of a new tile: 2 or 4.
    pub fn pick_value(&mut self) -> u32 {
        if self.rng.next_range(SPAWN_WEIGHT_TOTAL) < SPAWN_FOUR_WEIGHT {
            4
        } else {
            2
        }
    }

    /// Get the current RNG state (for reproducing the rest of a game)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..=16 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_pick_cell_empty_grid_is_none() {
        let mut spawner = TileSpawner::new(3);
        assert_eq!(spawner.pick_cell(0), None);
        assert_eq!(spawner.pick_cell(1), Some(0));
    }

    #[test]
    fn test_pick_cell_covers_all_indices() {
        let mut spawner = TileSpawner::new(99);
        let mut seen = [false; 16];
        for _ in 0..2000 {
            let i = spawner.pick_cell(16).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "unreached cells: {:?}", seen);
    }

    #[test]
    fn test_pick_value_is_mostly_twos() {
        let mut spawner = TileSpawner::new(2024);
        let mut fours = 0;
        for _ in 0..10_000 {
            match spawner.pick_value() {
                2 => {}
                4 => fours += 1,
                other => panic!("unexpected spawn value {other}"),
            }
        }
        // 10% expected; generous bounds.
        assert!((500..=1500).contains(&fours), "fours = {fours}");
    }
}
