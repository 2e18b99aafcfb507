//! Benchmark profiles and utilities for Tarn.
//!
//! Provides deterministic random grids so benchmark runs are comparable
//! across machines and commits.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tarn_core::{DigitGrid, MAX_DIGIT};

/// Side length of the reference profile grid (100x100 = 10K cells).
pub const REFERENCE_SIDE: usize = 100;

/// Side length of the stress profile grid (316x316 ~ 100K cells).
pub const STRESS_SIDE: usize = 316;

/// Random digit grid with every cell drawn uniformly from `0..=9`.
///
/// Same `seed`, same grid.
///
/// # Panics
///
/// Panics if `rows` or `cols` is 0.
pub fn random_digits(rows: usize, cols: usize, seed: u64) -> DigitGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<u8>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(0..=MAX_DIGIT)).collect())
        .collect();
    DigitGrid::from_rows(rows).expect("benchmark dimensions must be non-zero")
}

/// Random heightmap where roughly `barrier_pct` percent of cells are 9.
///
/// The remaining cells are drawn uniformly from `0..=8`, so basins are
/// bounded by the barrier cells rather than by chance.
///
/// # Panics
///
/// Panics if `rows` or `cols` is 0.
pub fn random_heightmap(rows: usize, cols: usize, barrier_pct: u32, seed: u64) -> DigitGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<u8>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.gen_range(0..100) < barrier_pct {
                        MAX_DIGIT
                    } else {
                        rng.gen_range(0..MAX_DIGIT)
                    }
                })
                .collect()
        })
        .collect();
    DigitGrid::from_rows(rows).expect("benchmark dimensions must be non-zero")
}

/// 10K-cell heightmap with a 25% barrier density.
pub fn reference_heightmap(seed: u64) -> DigitGrid {
    random_heightmap(REFERENCE_SIDE, REFERENCE_SIDE, 25, seed)
}

/// 10K-cell energy grid.
pub fn reference_energies(seed: u64) -> DigitGrid {
    random_digits(REFERENCE_SIDE, REFERENCE_SIDE, seed)
}

/// ~100K-cell energy grid.
pub fn stress_energies(seed: u64) -> DigitGrid {
    random_digits(STRESS_SIDE, STRESS_SIDE, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_digits_deterministic() {
        assert_eq!(random_digits(20, 30, 42), random_digits(20, 30, 42));
        assert_ne!(random_digits(20, 30, 42), random_digits(20, 30, 43));
    }

    #[test]
    fn random_digits_shape_and_range() {
        let g = random_digits(7, 11, 1);
        assert_eq!((g.rows(), g.cols()), (7, 11));
        assert!(g.iter().all(|&d| d <= MAX_DIGIT));
    }

    #[test]
    fn heightmap_barrier_density_extremes() {
        assert!(random_heightmap(10, 10, 100, 5).iter().all(|&h| h == 9));
        assert!(random_heightmap(10, 10, 0, 5).iter().all(|&h| h < 9));
    }

    #[test]
    fn reference_profiles_have_expected_size() {
        assert_eq!(reference_heightmap(42).cell_count(), 10_000);
        assert_eq!(reference_energies(42).cell_count(), 10_000);
        assert_eq!(stress_energies(42).cell_count(), STRESS_SIDE * STRESS_SIDE);
    }
}
