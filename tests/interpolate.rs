mod common;

use common::fixtures::{rows, seeded_corners, CORNERS_3X3, CORNERS_5X5, REFERENCE_5X5};
use diamond_square::diagnostics::AccessRecorder;
use diamond_square::refine::NoopObserver;
use diamond_square::{interpolate, Corners, GridError, HeightGrid, Interpolator};

#[test]
fn valid_and_invalid_sizes() {
    assert!(HeightGrid::new(3).is_ok());
    assert!(HeightGrid::new(17).is_ok());
    assert_eq!(HeightGrid::new(8), Err(GridError::InvalidSize { size: 8 }));
    assert_eq!(
        HeightGrid::with_corners(16, CORNERS_3X3),
        Err(GridError::InvalidSize { size: 16 })
    );
}

#[test]
fn three_by_three_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut grid = HeightGrid::with_corners(3, CORNERS_3X3).unwrap();
    interpolate(&mut grid);
    assert_eq!(
        rows(&grid),
        vec![vec![14, 47, 64], vec![47, 63, 79], vec![64, 79, 110]]
    );
}

#[test]
fn five_by_five_matches_reference() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut grid = HeightGrid::with_corners(5, CORNERS_5X5).unwrap();
    Interpolator::new().interpolate(&mut grid);

    let expected: Vec<Vec<u8>> = REFERENCE_5X5.iter().map(|r| r.to_vec()).collect();
    assert_eq!(rows(&grid), expected);
    assert_eq!(rows(&grid)[0], vec![14, 46, 58, 66, 64]);
    assert_eq!(rows(&grid)[4], vec![204, 159, 137, 118, 110]);
}

#[test]
fn uniform_seeds_are_a_fixed_point() {
    let mut grid = HeightGrid::with_corners(9, Corners::uniform(1)).unwrap();
    interpolate(&mut grid);
    assert!(
        grid.as_slice().iter().all(|&v| v == 1),
        "expected a uniform field, got {:?}",
        rows(&grid)
    );
}

#[test]
fn corners_survive_and_values_stay_within_seed_range() {
    for (i, size) in [3usize, 5, 9, 17, 33, 65].into_iter().enumerate() {
        let corners = seeded_corners(i as u32 + 7);
        let mut grid = HeightGrid::with_corners(size, corners).unwrap();
        interpolate(&mut grid);

        assert_eq!(grid.corners(), corners, "size {size}");
        let lo = corners.nw.min(corners.ne).min(corners.sw).min(corners.se);
        let hi = corners.nw.max(corners.ne).max(corners.sw).max(corners.se);
        for (idx, &v) in grid.as_slice().iter().enumerate() {
            assert!(
                (lo..=hi).contains(&v),
                "size {size}: cell {idx} = {v} outside [{lo}, {hi}]"
            );
        }
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let corners = Corners::new(200, 3, 77, 141);
    let mut a = HeightGrid::with_corners(129, corners).unwrap();
    let mut b = a.clone();
    interpolate(&mut a);
    interpolate(&mut b);
    assert_eq!(a, b);
}

#[test]
fn observed_run_matches_plain_run() {
    let corners = seeded_corners(42);
    let mut plain = HeightGrid::with_corners(33, corners).unwrap();
    let mut observed = plain.clone();
    let mut noop = plain.clone();

    let interp = Interpolator::new();
    interp.interpolate(&mut plain);
    let mut recorder = AccessRecorder::new();
    interp.interpolate_observed(&mut observed, &mut recorder);
    interp.interpolate_observed(&mut noop, NoopObserver);

    assert_eq!(plain, observed);
    assert_eq!(plain, noop);
    assert_eq!(recorder.passes(), vec![32, 16, 8, 4, 2]);
}

#[test]
fn full_scale_seeds_saturate_cleanly() {
    let mut grid = HeightGrid::with_corners(17, Corners::uniform(255)).unwrap();
    interpolate(&mut grid);
    assert!(grid.as_slice().iter().all(|&v| v == 255));
}

#[test]
fn report_matches_grid() {
    let mut grid = HeightGrid::with_corners(5, CORNERS_5X5).unwrap();
    let report = Interpolator::new().interpolate_with_report(&mut grid);
    assert_eq!(report.size, 5);
    assert_eq!(report.total_writes(), 21);
    assert_eq!(report.stats.min, 14);
    assert_eq!(report.stats.max, 204);
    let expected: Vec<Vec<u8>> = REFERENCE_5X5.iter().map(|r| r.to_vec()).collect();
    assert_eq!(rows(&grid), expected);
}
