//! Basin size ranking.

use crate::basin::BasinExtractor;
use crate::low_points::low_points;
use tarn_core::DigitGrid;

/// Size of every basin, one per low point, in low-point discovery order.
pub fn basin_sizes(grid: &DigitGrid) -> Vec<usize> {
    let extractor = BasinExtractor::new();
    low_points(grid)
        .map(|lp| extractor.extract(grid, lp).len())
        .collect()
}

/// The `n` largest basin sizes in descending order.
///
/// Returns fewer than `n` entries when the grid has fewer basins.
pub fn top_basin_sizes(grid: &DigitGrid, n: usize) -> Vec<usize> {
    let mut sizes = basin_sizes(grid);
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.truncate(n);
    log::debug!("top {n} basin sizes: {sizes:?}");
    sizes
}

/// Product of the `n` largest values in `sizes`.
///
/// Missing slots (fewer than `n` values) contribute 1, so an empty input
/// yields 1.
pub fn top_n_product(sizes: &[usize], n: usize) -> u64 {
    let mut sorted = sizes.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.iter().take(n).map(|&s| s as u64).product()
}

/// Product of the three largest basin sizes of `grid`.
///
/// A grid with fewer than three basins multiplies only the basins it has;
/// a grid with none yields 1.
pub fn top_three_basin_product(grid: &DigitGrid) -> u64 {
    top_n_product(&basin_sizes(grid), 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarn_test_utils::{
        grid, grid_from_rows, uniform, SAMPLE_BASIN_PRODUCT, SAMPLE_BASIN_SIZES,
        SAMPLE_HEIGHTMAP, SMALL_HEIGHTMAP,
    };

    #[test]
    fn sample_sizes_in_discovery_order() {
        let g = grid(SAMPLE_HEIGHTMAP);
        assert_eq!(basin_sizes(&g), SAMPLE_BASIN_SIZES.to_vec());
    }

    #[test]
    fn sample_top_three() {
        let g = grid(SAMPLE_HEIGHTMAP);
        assert_eq!(top_basin_sizes(&g, 3), vec![14, 9, 9]);
        assert_eq!(top_three_basin_product(&g), SAMPLE_BASIN_PRODUCT);
    }

    #[test]
    fn small_grid_product() {
        let g = grid(SMALL_HEIGHTMAP);
        assert_eq!(top_basin_sizes(&g, 3), vec![7, 3, 3]);
        assert_eq!(top_three_basin_product(&g), 63);
    }

    #[test]
    fn fewer_than_three_basins_use_identity() {
        // One low point at (0,0) whose basin covers the whole grid.
        let one = grid_from_rows(vec![vec![0, 1], vec![1, 2]]);
        assert_eq!(basin_sizes(&one), vec![4]);
        assert_eq!(top_three_basin_product(&one), 4);

        // Two basins separated by a barrier column.
        let two = grid_from_rows(vec![vec![0, 1, 9, 0], vec![1, 2, 9, 1]]);
        assert_eq!(top_basin_sizes(&two, 3), vec![4, 2]);
        assert_eq!(top_three_basin_product(&two), 8);
    }

    #[test]
    fn no_basins_yield_one() {
        let flat = uniform(3, 3, 4);
        assert!(basin_sizes(&flat).is_empty());
        assert_eq!(top_three_basin_product(&flat), 1);
    }

    #[test]
    fn top_n_product_ignores_order_and_extras() {
        assert_eq!(top_n_product(&[2, 10, 3, 7], 3), 210);
        assert_eq!(top_n_product(&[5], 3), 5);
        assert_eq!(top_n_product(&[], 3), 1);
        assert_eq!(top_n_product(&[4, 4], 0), 1);
    }
}
