//! Gesture path construction.
//!
//! Builds the immutable strokes handed to the gesture sink: a hold stroke
//! anchored at one point and a spin-and-throw stroke (one arc, one line).

use super::timing::SpinTiming;
use crate::model::{BoundingBox, Circle, Point};

/// One drawable/dispatchable piece of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Full ellipse outline.
    Oval { bbox: BoundingBox },
    /// Elliptic arc; positive `sweep_deg` runs clockwise.
    Arc {
        bbox: BoundingBox,
        start_deg: f64,
        sweep_deg: f64,
    },
    /// Straight segment.
    Line { from: Point, to: Point },
}

impl PathSegment {
    /// Where the stroke leaves this segment, if it has a defined end.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathSegment::Oval { .. } => None,
            PathSegment::Arc {
                bbox,
                start_deg,
                sweep_deg,
            } => Some(arc_point(&bbox, start_deg + sweep_deg)),
            PathSegment::Line { to, .. } => Some(to),
        }
    }

    pub fn start_point(&self) -> Option<Point> {
        match *self {
            PathSegment::Oval { .. } => None,
            PathSegment::Arc { bbox, start_deg, .. } => Some(arc_point(&bbox, start_deg)),
            PathSegment::Line { from, .. } => Some(from),
        }
    }
}

fn arc_point(bbox: &BoundingBox, angle_deg: f64) -> Point {
    let rx = bbox.width() / 2.0;
    let ry = bbox.height() / 2.0;
    Circle::new(bbox.left + rx, bbox.top + ry, rx, ry).point_at(angle_deg)
}

/// Ordered stroke plus its total duration. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GesturePath {
    segments: Vec<PathSegment>,
    total_duration_ms: f64,
}

impl GesturePath {
    fn new(segments: Vec<PathSegment>, total_duration_ms: f64) -> Self {
        Self {
            segments,
            // Injection rejects zero-length strokes in time as well as space.
            total_duration_ms: total_duration_ms.max(1.0),
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn total_duration_ms(&self) -> f64 {
        self.total_duration_ms
    }

    pub fn start_point(&self) -> Option<Point> {
        self.segments.first().and_then(PathSegment::start_point)
    }

    pub fn end_point(&self) -> Option<Point> {
        self.segments.last().and_then(PathSegment::end_point)
    }
}

/// A hold gesture: the outline shown on the overlay and the stroke to inject.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldPlan {
    pub outline: PathSegment,
    pub stroke: GesturePath,
}

/// Outline of `circle` for display, plus a practically stationary stroke at
/// `anchor` lasting `hold_ms`.
///
/// `nudge_px` gives the stroke a tiny vertical extent for injectors that
/// refuse zero-length paths; 0 yields a true stationary hold.
pub fn build_hold_path(circle: &Circle, anchor: Point, hold_ms: f64, nudge_px: f64) -> HoldPlan {
    let to = Point::new(anchor.x, anchor.y + nudge_px);
    HoldPlan {
        outline: PathSegment::Oval {
            bbox: circle.bounding_box(),
        },
        stroke: GesturePath::new(vec![PathSegment::Line { from: anchor, to }], hold_ms),
    }
}

/// Arc from `start_deg` sweeping `sweep_deg` clockwise around `circle`,
/// then a straight release to `release`.
pub fn build_spin_and_throw_path(
    circle: &Circle,
    release: Point,
    start_deg: f64,
    sweep_deg: f64,
    timing: SpinTiming,
) -> GesturePath {
    let arc = PathSegment::Arc {
        bbox: circle.bounding_box(),
        start_deg,
        sweep_deg,
    };
    let arc_end = circle.point_at(start_deg + sweep_deg);
    let throw = PathSegment::Line {
        from: arc_end,
        to: release,
    };
    GesturePath::new(vec![arc, throw], timing.total_ms())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn circle() -> Circle {
        Circle::new(540.0, 1800.0, 500.0, 300.0)
    }

    #[test]
    fn test_spin_path_is_arc_then_line() {
        let path = build_spin_and_throw_path(
            &circle(),
            Point::new(360.0, 480.0),
            260.0,
            280.0,
            SpinTiming::new(500.0, 280.0, 100.0),
        );
        assert_eq!(path.segments().len(), 2);
        assert!(matches!(path.segments()[0], PathSegment::Arc { .. }));
        assert!(matches!(path.segments()[1], PathSegment::Line { .. }));
        assert!(approx_eq(path.total_duration_ms(), 500.0 * 280.0 / 360.0 + 100.0));
    }

    #[test]
    fn test_throw_starts_at_leftmost_point() {
        let path = build_spin_and_throw_path(
            &circle(),
            Point::new(360.0, 480.0),
            260.0,
            280.0,
            SpinTiming::new(500.0, 280.0, 100.0),
        );
        let PathSegment::Line { from, to } = path.segments()[1] else {
            panic!("second segment must be a line");
        };
        // 260 + 280 = 540 ≡ 180°, the leftmost point.
        assert!(approx_eq(from.x, 40.0));
        assert!(approx_eq(from.y, 1800.0));
        assert_eq!(to, Point::new(360.0, 480.0));

        let arc_end = path.segments()[0].end_point().unwrap();
        assert!(approx_eq(arc_end.x, from.x) && approx_eq(arc_end.y, from.y));
        assert_eq!(path.end_point(), Some(to));
    }

    #[test]
    fn test_hold_path_is_nearly_stationary() {
        let c = circle();
        let plan = build_hold_path(&c, c.center(), 60_000.0, 1.0);
        assert_eq!(plan.outline, PathSegment::Oval { bbox: c.bounding_box() });
        assert_eq!(plan.stroke.total_duration_ms(), 60_000.0);
        assert_eq!(plan.stroke.segments().len(), 1);
        assert_eq!(
            plan.stroke.segments()[0],
            PathSegment::Line {
                from: Point::new(540.0, 1800.0),
                to: Point::new(540.0, 1801.0),
            }
        );
    }

    #[test]
    fn test_hold_without_nudge_is_stationary() {
        let c = circle();
        let plan = build_hold_path(&c, Point::new(10.0, 20.0), 5_000.0, 0.0);
        assert_eq!(plan.stroke.start_point(), plan.stroke.end_point());
    }
}
