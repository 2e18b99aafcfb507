//! Canonical grids with known answers.
//!
//! - [`SAMPLE_HEIGHTMAP`]: 10x5 heightmap, four basins.
//! - [`SMALL_HEIGHTMAP`]: 5x5 heightmap, three basins, one shared cell.
//! - [`SAMPLE_OCTOPUS`]: 10x10 energy grid, synchronizes on step 195.
//! - [`SMALL_OCTOPUS`]: 5x5 energy grid with a single step-one cascade.

use tarn_core::Coord;

/// 10x5 heightmap with four low points and basins of 3, 9, 14 and 9.
pub const SAMPLE_HEIGHTMAP: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";

/// Low points of [`SAMPLE_HEIGHTMAP`] in row-major order.
pub const SAMPLE_LOW_POINTS: [Coord; 4] = [
    Coord::new(0, 1),
    Coord::new(0, 9),
    Coord::new(2, 2),
    Coord::new(4, 6),
];

/// Basin sizes of [`SAMPLE_HEIGHTMAP`], one per entry of [`SAMPLE_LOW_POINTS`].
pub const SAMPLE_BASIN_SIZES: [usize; 4] = [3, 9, 14, 9];

/// Sum of `height + 1` over the low points of [`SAMPLE_HEIGHTMAP`].
pub const SAMPLE_RISK_LEVEL: u64 = 15;

/// Product of the three largest basins of [`SAMPLE_HEIGHTMAP`].
pub const SAMPLE_BASIN_PRODUCT: u64 = 1134;

/// 5x5 heightmap whose middle basin overlaps the basin to its right at
/// (1, 2). Answers enumerated by hand.
pub const SMALL_HEIGHTMAP: &str = "\
21999
39878
98599
87679
99999
";

/// 10x10 energy grid used for cascade runs.
pub const SAMPLE_OCTOPUS: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

/// Total flashes after 10 steps of [`SAMPLE_OCTOPUS`].
pub const SAMPLE_FLASHES_AFTER_10: u64 = 204;

/// Total flashes after 100 steps of [`SAMPLE_OCTOPUS`].
pub const SAMPLE_FLASHES_AFTER_100: u64 = 1656;

/// First step on which every cell of [`SAMPLE_OCTOPUS`] flashes.
pub const SAMPLE_SYNC_STEP: u64 = 195;

/// [`SAMPLE_OCTOPUS`] after its second step.
pub const SAMPLE_OCTOPUS_AFTER_2: &str = "\
8807476555
5089087054
8597889608
8485769600
8700908800
6600088989
6800005943
0000007456
9000000876
8700006848
";

/// 5x5 energy grid: the ring of nines flashes on step one.
pub const SMALL_OCTOPUS: &str = "\
11111
19991
19191
19991
11111
";

/// [`SMALL_OCTOPUS`] after one step (nine flashes).
pub const SMALL_OCTOPUS_AFTER_1: &str = "\
34543
40004
50005
40004
34543
";

/// [`SMALL_OCTOPUS`] after two steps (no flashes on the second).
pub const SMALL_OCTOPUS_AFTER_2: &str = "\
45654
51115
61116
51115
45654
";
