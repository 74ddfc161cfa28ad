//! Tests for the pure model and gesture layers.

use arcthrow::gesture::{
    build_spin_and_throw_path, PathSegment, Playback, PlaybackId, SpinTiming,
};
use arcthrow::model::constants::*;
use arcthrow::model::{
    bounding_box, point_on_ellipse, ChoreographyConfig, Circle, Point, ScreenMetrics, TargetPoint,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Geometry ===

#[test]
fn ellipse_point_is_periodic() {
    let circles = [
        (540.0, 1800.0, 500.0, 300.0),
        (0.0, 0.0, 1.0, 1.0),
        (12.5, -3.0, 0.0, 40.0),
    ];
    for (cx, cy, rx, ry) in circles {
        let mut angle = -720.0;
        while angle <= 720.0 {
            let a = point_on_ellipse(cx, cy, rx, ry, angle);
            let b = point_on_ellipse(cx, cy, rx, ry, angle + 360.0);
            assert!(approx_eq(a.x, b.x) && approx_eq(a.y, b.y), "angle {}", angle);
            angle += 17.5;
        }
    }
}

#[test]
fn bounding_box_contains_center() {
    let circles = [
        (540.0, 1800.0, 500.0, 300.0),
        (0.0, 0.0, 0.0, 0.0),
        (-10.0, 20.0, 3.0, 1000.0),
    ];
    for (cx, cy, rx, ry) in circles {
        let b = bounding_box(cx, cy, rx, ry);
        assert!(b.left <= cx && cx <= b.right);
        assert!(b.top <= cy && cy <= b.bottom);
    }
}

#[test]
fn default_circle_on_tall_screen() {
    let metrics = ScreenMetrics::new(1080, 2400).unwrap();
    let circle = Circle::on_screen(
        &metrics,
        DEFAULT_CENTER_X_RATIO,
        DEFAULT_CENTER_Y_RATIO,
        DEFAULT_RADIUS_X,
        DEFAULT_RADIUS_Y,
    );
    assert_eq!(circle, Circle::new(540.0, 1800.0, 500.0, 300.0));
}

// === Path Builder ===

#[test]
fn spin_path_shape_and_duration_for_various_sweeps() {
    let circle = Circle::new(540.0, 1800.0, 500.0, 300.0);
    for (speed, sweep) in [(500.0, 280.0), (1000.0, 90.0), (360.0, 720.0)] {
        let path = build_spin_and_throw_path(
            &circle,
            Point::new(360.0, 480.0),
            260.0,
            sweep,
            SpinTiming::new(speed, sweep, DEFAULT_THROW_DURATION_MS),
        );
        let arcs = path
            .segments()
            .iter()
            .filter(|s| matches!(s, PathSegment::Arc { .. }))
            .count();
        assert_eq!(arcs, 1);
        assert!(matches!(path.segments()[0], PathSegment::Arc { .. }));
        assert!(matches!(path.segments()[1], PathSegment::Line { .. }));
        assert_eq!(path.segments().len(), 2);
        assert!(approx_eq(path.total_duration_ms(), speed * (sweep / 360.0) + 100.0));
    }
}

// === Timing ===

#[test]
fn progress_monotonic_and_exact_at_end() {
    let timing = SpinTiming::new(500.0, 280.0, 100.0);
    let start = 250.0;
    let mut playback = Playback::start(PlaybackId(1), start, timing.total_ms());
    let mut last = 0.0;
    let mut now = start;
    while now < start + timing.total_ms() {
        let p = playback.sample(now);
        assert!(p >= last);
        assert!(p < 1.0);
        last = p;
        now += 16.0;
    }
    assert_eq!(playback.sample(start + timing.total_ms()), 1.0);
}

// === Target Model ===

#[test]
fn control_extremes_for_any_height() {
    for h in [1.0, 480.0, 2400.0, 10_000.0] {
        let mut target = TargetPoint::default();
        target.set_from_control_value(0.0, h, h);
        assert_eq!(target.y, h);
        target.set_from_control_value(h, h, h);
        assert_eq!(target.y, 0.0);
    }
}

#[test]
fn control_maps_to_expected_y() {
    let mut target = TargetPoint::default();
    target.set_from_control_value(1920.0, 2400.0, 2400.0);
    assert_eq!(target.y, 480.0);
}

// === Config ===

#[test]
fn config_defaults_match_constants() {
    let config = ChoreographyConfig::default();
    assert_eq!(config.radius_x, DEFAULT_RADIUS_X);
    assert_eq!(config.radius_y, DEFAULT_RADIUS_Y);
    assert_eq!(config.hold_duration_ms, DEFAULT_HOLD_DURATION_MS);
    assert!(approx_eq(config.release_x_ratio, 1.0 / 3.0));
}

#[test]
fn config_style_from_json() {
    let config = ChoreographyConfig::from_json_str(
        r##"{ "style": { "outline_color": "#0000FF", "stroke_width": 4 } }"##,
    )
    .unwrap();
    assert_eq!(config.style.outline_color, "#0000FF");
    assert_eq!(config.style.stroke_width, 4.0);
    assert_eq!(config.style.marker_radius, DEFAULT_MARKER_RADIUS);
}
