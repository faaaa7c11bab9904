// Host-side tests for the moving-average filters.

use fsr_core::{HullMovingAverage, Tilt, WeightedMovingAverage, FORCE_MAX, tilt_for_pointer};
use glam::Vec2;

#[test]
fn wma_matches_direct_weighted_mean() {
    let input = [3.0, 8.0, 1.0, 9.0, 4.0, 7.0, 2.0];
    let width = 3;
    let mut wma = WeightedMovingAverage::new(width);
    let mut window = vec![0.0f32; width];
    for v in input {
        window.remove(0);
        window.push(v);
        let expected: f32 = window
            .iter()
            .enumerate()
            .map(|(i, x)| (i + 1) as f32 * x)
            .sum::<f32>()
            / 6.0;
        let got = wma.next(v);
        assert!((got - expected).abs() < 1e-4, "{got} vs {expected}");
    }
}

#[test]
fn wma_width_is_clamped() {
    assert_eq!(WeightedMovingAverage::new(0).width(), 1);
    assert_eq!(WeightedMovingAverage::new(500).width(), 50);
}

#[test]
fn wma_settles_on_constant_input() {
    let mut wma = WeightedMovingAverage::new(5);
    let mut last = 0.0;
    for _ in 0..20 {
        last = wma.next(100.0);
    }
    assert!((last - 100.0).abs() < 1e-3);
}

#[test]
fn hma_settles_and_clamps() {
    let mut hma = HullMovingAverage::new(16);
    let mut last = 0.0;
    for _ in 0..100 {
        last = hma.next(600.0);
    }
    assert!((last - 600.0).abs() < 1e-2);

    let mut hot = HullMovingAverage::new(16);
    for _ in 0..100 {
        assert!(hot.next(5000.0) <= FORCE_MAX);
    }
    let mut cold = HullMovingAverage::new(16);
    for v in [1000.0, 0.0, 0.0, 0.0, 0.0, 0.0] {
        assert!(cold.next(v) >= 0.0);
    }
}

#[test]
fn hma_reset_restarts_from_zero() {
    let mut hma = HullMovingAverage::new(9);
    for _ in 0..50 {
        hma.next(800.0);
    }
    hma.reset();
    assert!(hma.next(0.0).abs() < 1e-6);
}

#[test]
fn tilt_is_zero_at_center_and_outside() {
    let size = Vec2::new(200.0, 100.0);
    assert_eq!(tilt_for_pointer(Vec2::new(100.0, 50.0), size, 6.0), Tilt::default());
    assert_eq!(tilt_for_pointer(Vec2::new(-5.0, 50.0), size, 6.0), Tilt::default());
    assert_eq!(tilt_for_pointer(Vec2::ZERO, Vec2::ZERO, 6.0), Tilt::default());
}

#[test]
fn tilt_leans_toward_pointer() {
    let size = Vec2::new(200.0, 100.0);
    let t = tilt_for_pointer(Vec2::new(200.0, 0.0), size, 6.0);
    assert_eq!(t.rotate_y_deg, 6.0);
    assert_eq!(t.rotate_x_deg, 6.0);
    assert!(t.to_css().contains("rotateY(6.00deg)"));
}
