use std::f64::consts::FRAC_PI_4;

use approx::assert_abs_diff_eq;

use crv_geometry::{Circle, Curve, CurveShape, Ellipse, Helix};
use crv_math::Point3;
use crv_pipeline::{run_pipeline, select_circles, write_report, PipelineConfig};
use crv_random::CurveGenerator;

fn fixed_curves() -> Vec<CurveShape> {
    vec![
        Circle::new(Point3::ORIGIN, 5.0).into(),
        Ellipse::new(Point3::ORIGIN, 3.0, 4.0).into(),
        Helix::new(Point3::ORIGIN, 2.0, 1.5).into(),
    ]
}

#[test]
fn test_fixed_curve_set_selects_single_circle() {
    let curves = fixed_curves();
    let mut buf = Vec::new();
    let selection = write_report(&curves, FRAC_PI_4, &mut buf).unwrap();

    assert_eq!(selection.len(), 1);
    assert_eq!(selection.radius_sum(), 5.0);

    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("Circle P{ "));
    assert!(text.contains("\nEllipse P{ "));
    assert!(text.contains("\nHelix P{ "));
    assert!(text.ends_with("5\nsum = 5\n"));
}

#[test]
fn test_fixed_curve_values_at_quarter_turn() {
    let s = FRAC_PI_4.sin();
    let c = FRAC_PI_4.cos();
    let curves = fixed_curves();

    assert_abs_diff_eq!(curves[0].curve_point(FRAC_PI_4), Point3::new(5.0 * c, 5.0 * s, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(curves[1].curve_point(FRAC_PI_4), Point3::new(3.0 * c, 4.0 * s, 0.0), epsilon = 1e-12);
    let helix = curves[2].curve_point(FRAC_PI_4);
    assert_abs_diff_eq!(helix.z, 1.5 * FRAC_PI_4, epsilon = 1e-12);
}

#[test]
fn test_circle_sum_is_independent_of_sorting() {
    let curves: Vec<CurveShape> = [2.5, 0.5, 7.0, 0.5]
        .iter()
        .map(|&r| Circle::new(Point3::ORIGIN, r).into())
        .chain(fixed_curves().into_iter().skip(1))
        .collect();
    let mut selection = select_circles(&curves);
    let before = selection.radius_sum();
    selection.sort_by_radius();
    assert_eq!(selection.radii(), vec![0.5, 0.5, 2.5, 7.0]);
    assert_eq!(selection.radius_sum(), before);
    assert_eq!(before, 10.5);
}

#[test]
fn test_entropy_seeded_run() {
    let config = PipelineConfig::default();
    let mut generator = CurveGenerator::new();
    let mut buf = Vec::new();
    let report = run_pipeline(&config, &mut generator, &mut buf).unwrap();

    assert_eq!(report.curve_count, config.curve_count);
    assert!(report.sorted_radii.len() <= config.curve_count);
    assert!(report.sorted_radii.iter().all(|&r| r > 1e-6 && r <= 10.0));
    assert!(report.radius_sum >= 0.0);

    let text = String::from_utf8(buf).unwrap();
    let last = text.lines().last().unwrap();
    assert!(last.starts_with("sum = "));
}

#[test]
fn test_custom_config_count() {
    let config = PipelineConfig::new(25, 0.0, -3.0, 3.0);
    let mut generator = CurveGenerator::new();
    let mut buf = Vec::new();
    let report = run_pipeline(&config, &mut generator, &mut buf).unwrap();
    assert_eq!(report.curve_count, 25);
    assert_eq!(generator.range(), (-3.0, 3.0));
    assert!(report.sorted_radii.iter().all(|&r| r <= 3.0));
}
