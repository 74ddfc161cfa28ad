//! The choreography state machine.
//!
//! Sequences Idle → Armed → Gesturing → Idle, owns the render state and
//! status board, and hands finished strokes to the gesture sink.
//!
//! Every operation takes the host's monotonic time in milliseconds.
//! Geometry is re-derived from live screen metrics before each transition.

use super::state::ChoreographyState;
use crate::events::TriggerEvent;
use crate::gesture::{
    build_hold_path, build_spin_and_throw_path, GesturePath, PathSegment, Playback, PlaybackId,
    SpinTiming,
};
use crate::model::constants::*;
use crate::model::{
    ChoreographyConfig, Circle, OverlayStyle, Point, RenderState, ScreenMetrics, TargetPoint,
};
use crate::platform::{GestureSink, MetricsProvider, Renderer};
use crate::status::{StatusBoard, StatusMessage};
use crate::clamp;

pub struct ChoreographyEngine<M, R, S> {
    config: ChoreographyConfig,
    metrics_provider: M,
    renderer: R,
    sink: S,
    state: ChoreographyState,
    metrics: Option<ScreenMetrics>,
    render: RenderState,
    status: StatusBoard,
    target: Option<TargetPoint>,
    playback: Option<Playback>,
    next_playback: u64,
    current_path: Option<GesturePath>,
    holding: bool,
}

impl<M, R, S> ChoreographyEngine<M, R, S>
where
    M: MetricsProvider,
    R: Renderer,
    S: GestureSink,
{
    pub fn new(config: ChoreographyConfig, metrics_provider: M, renderer: R, sink: S) -> Self {
        let mut config = config;
        config.validate();
        let style = OverlayStyle::from_config(&config.style);
        let status = StatusBoard::new(config.status_duration_ms);
        Self {
            config,
            metrics_provider,
            renderer,
            sink,
            state: ChoreographyState::Idle,
            metrics: None,
            render: RenderState::new(style),
            status,
            target: None,
            playback: None,
            next_playback: 0,
            current_path: None,
            holding: false,
        }
    }

    // === Queries ===

    pub fn state(&self) -> ChoreographyState {
        self.state
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.current()
    }

    pub fn target(&self) -> Option<TargetPoint> {
        self.target
    }

    pub fn metrics(&self) -> Option<ScreenMetrics> {
        self.metrics
    }

    /// The stroke most recently handed to the sink, while it is live.
    pub fn current_path(&self) -> Option<&GesturePath> {
        self.current_path.as_ref()
    }

    pub fn current_playback(&self) -> Option<PlaybackId> {
        self.playback.as_ref().map(Playback::id)
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn metrics_provider_mut(&mut self) -> &mut M {
        &mut self.metrics_provider
    }

    // === Events ===

    /// Applies one event.
    pub fn handle(&mut self, event: TriggerEvent, now_ms: f64) {
        match event {
            TriggerEvent::Arm => self.arm(now_ms),
            TriggerEvent::Throw => self.throw(now_ms),
            TriggerEvent::Cancel => self.cancel(now_ms),
            TriggerEvent::HoldAt(point) => self.hold_at(point, now_ms),
            TriggerEvent::HoldAtCenter => self.hold_at_center(now_ms),
            TriggerEvent::ReleaseHold => self.release_hold(now_ms),
            TriggerEvent::TargetControl { value, max } => {
                self.set_target_control(value, max, now_ms)
            }
            TriggerEvent::Tick => self.tick(now_ms),
        }
    }

    /// Idle/Armed/Gesturing → Armed. Shows the circle and target.
    ///
    /// Re-arming while a spin plays abandons that spin.
    pub fn arm(&mut self, now_ms: f64) {
        let Some(metrics) = self.refresh_metrics(now_ms) else {
            return;
        };
        self.stop_playback();

        let circle = self.circle_for(&metrics);
        let target = self.target_for(&metrics);

        self.render.end_spin();
        self.render.show_circle(circle);
        self.render.show_target(target);
        self.set_state(ChoreographyState::Armed);
        self.status.post(STATUS_ARMED, now_ms);
        self.draw();
    }

    /// Armed → Gesturing. Builds and dispatches the spin-and-throw stroke.
    pub fn throw(&mut self, now_ms: f64) {
        match self.state {
            ChoreographyState::Gesturing => {
                log::debug!("Throw ignored: a gesture is already in flight");
                self.status.post(STATUS_SPINNING, now_ms);
                self.draw();
                return;
            }
            ChoreographyState::Idle => {
                log::debug!("Throw ignored: not armed");
                self.status.post(STATUS_NOT_ARMED, now_ms);
                self.draw();
                return;
            }
            ChoreographyState::Armed => {}
        }

        let Some(metrics) = self.refresh_metrics(now_ms) else {
            return;
        };
        let circle = self.circle_for(&metrics);
        let target = self.target_for(&metrics);
        let release = Point::new(metrics.width() * self.config.release_x_ratio, target.y);

        let timing = SpinTiming::new(
            self.config.speed_ms_per_revolution,
            self.config.sweep_deg,
            self.config.throw_duration_ms,
        );
        let path = build_spin_and_throw_path(
            &circle,
            release,
            self.config.start_angle_deg,
            self.config.sweep_deg,
            timing,
        );

        let id = self.next_playback_id();
        self.playback = Some(Playback::start(id, now_ms, path.total_duration_ms()));
        log::info!(
            "Spin #{}: {:.1} ms spin + {:.1} ms throw to ({:.0}, {:.0})",
            id.0,
            timing.spin_ms,
            timing.throw_ms,
            release.x,
            release.y
        );

        if self.holding {
            log::info!("Hold superseded by spin #{}", id.0);
            self.holding = false;
        }

        self.render.show_circle(circle);
        self.render.show_target(target);
        self.render.start_spin(self.config.start_angle_deg);
        self.set_state(ChoreographyState::Gesturing);
        self.status.post(STATUS_SPINNING, now_ms);
        self.draw();

        self.current_path = Some(path.clone());
        self.sink.dispatch(path);
    }

    /// Armed/Gesturing → Idle immediately. Also ends any hold.
    pub fn cancel(&mut self, now_ms: f64) {
        if self.state.is_idle() && !self.holding {
            log::debug!("Cancel ignored: already idle");
            return;
        }
        self.stop_playback();
        self.holding = false;
        self.render.clear();
        self.set_state(ChoreographyState::Idle);
        self.status.post(STATUS_DISABLED, now_ms);
        self.draw();
    }

    /// Long, near-stationary touch at `point` (clamped to the screen).
    ///
    /// Does not change state; ends only through `release_hold` or `cancel`.
    pub fn hold_at(&mut self, point: Point, now_ms: f64) {
        self.start_hold(Some(point), now_ms);
    }

    /// Hold at the circle centre.
    pub fn hold_at_center(&mut self, now_ms: f64) {
        self.start_hold(None, now_ms);
    }

    /// The host ended the hold stroke.
    pub fn release_hold(&mut self, now_ms: f64) {
        if !self.holding {
            return;
        }
        self.holding = false;
        if !self.state.is_gesturing() {
            self.current_path = None;
        }
        log::info!("Hold released");
        self.status.post(STATUS_RELEASED, now_ms);
        self.draw();
    }

    /// Target slider moved. Accepted in every state; a stroke already in
    /// flight keeps the target it was built with.
    ///
    /// `value` is measured against the current screen height.
    pub fn set_target_control(&mut self, value: f64, max: f64, now_ms: f64) {
        let Some(metrics) = self.refresh_metrics(now_ms) else {
            return;
        };
        let mut target = self.target_for(&metrics);
        target.set_from_control_value(value, max, metrics.height());
        self.target = Some(target);
        log::debug!("Target y = {:.0}", target.y);

        self.render.show_target(target);
        self.draw();
    }

    /// Periodic sample: advances spin progress and status expiry.
    pub fn tick(&mut self, now_ms: f64) {
        let mut dirty = self.status.tick(now_ms);

        if let Some(playback) = self.playback.as_mut() {
            let progress = playback.sample(now_ms);
            let complete = playback.is_complete(now_ms);
            if progress > self.render.progress {
                self.render.advance_progress(progress);
                dirty = true;
            }
            if complete {
                // Paint the full arc before tearing it down.
                self.draw();
                self.finish_spin(now_ms);
                return;
            }
        }

        if dirty {
            self.draw();
        }
    }

    // === Internals ===

    fn start_hold(&mut self, anchor: Option<Point>, now_ms: f64) {
        if !self.state.accepts_hold() {
            log::debug!("Hold ignored while {}", self.state.description());
            return;
        }
        let Some(metrics) = self.refresh_metrics(now_ms) else {
            return;
        };
        let circle = self.circle_for(&metrics);
        let anchor = anchor
            .map(|p| {
                Point::new(
                    clamp(p.x, 0.0, metrics.width()),
                    clamp(p.y, 0.0, metrics.height()),
                )
            })
            .unwrap_or_else(|| circle.center());

        let plan = build_hold_path(
            &circle,
            anchor,
            self.config.hold_duration_ms,
            self.config.hold_nudge_px,
        );
        log::info!(
            "Hold at ({:.0}, {:.0}) for {:.0} ms",
            anchor.x,
            anchor.y,
            plan.stroke.total_duration_ms()
        );

        self.holding = true;
        let outline = match plan.outline {
            PathSegment::Oval { bbox } => Circle::inscribed_in(&bbox),
            _ => circle,
        };
        self.render.show_circle(outline);
        self.status.post(STATUS_HOLDING, now_ms);
        self.draw();

        self.current_path = Some(plan.stroke.clone());
        self.sink.dispatch(plan.stroke);
    }

    fn finish_spin(&mut self, now_ms: f64) {
        if let Some(playback) = self.playback.take() {
            log::info!("Spin #{} complete", playback.id().0);
        }
        self.current_path = None;
        self.render.end_spin();
        self.set_state(ChoreographyState::Idle);
        self.status.post(STATUS_IDLE, now_ms);
        self.draw();
    }

    /// Drops the live playback so no later tick can touch it.
    fn stop_playback(&mut self) {
        if let Some(playback) = self.playback.take() {
            log::info!("Spin #{} abandoned", playback.id().0);
            self.current_path = None;
        }
    }

    fn next_playback_id(&mut self) -> PlaybackId {
        self.next_playback += 1;
        PlaybackId(self.next_playback)
    }

    /// Queries the host. On bad metrics: keeps the previous render state,
    /// posts a status and returns `None`.
    fn refresh_metrics(&mut self, now_ms: f64) -> Option<ScreenMetrics> {
        let (width, height) = self.metrics_provider.screen_metrics();
        match ScreenMetrics::new(width, height) {
            Ok(metrics) => {
                if self.metrics != Some(metrics) {
                    log::debug!("Screen metrics {}x{}", width, height);
                }
                self.metrics = Some(metrics);
                Some(metrics)
            }
            Err(e) => {
                log::warn!("Skipping transition: {}", e);
                self.status.post(STATUS_INVALID_METRICS, now_ms);
                self.draw();
                None
            }
        }
    }

    fn circle_for(&self, metrics: &ScreenMetrics) -> Circle {
        Circle::on_screen(
            metrics,
            self.config.center_x_ratio,
            self.config.center_y_ratio,
            self.config.radius_x,
            self.config.radius_y,
        )
    }

    /// Current target clamped to `metrics`, or the default on first use.
    fn target_for(&mut self, metrics: &ScreenMetrics) -> TargetPoint {
        let target = match self.target {
            Some(mut t) => {
                t.x = metrics.width() * self.config.target_x_ratio;
                t.clamp_to(metrics.width(), metrics.height());
                t
            }
            None => TargetPoint::default_for(
                metrics,
                self.config.target_x_ratio,
                self.config.default_target_ratio,
            ),
        };
        self.target = Some(target);
        target
    }

    fn set_state(&mut self, next: ChoreographyState) {
        if self.state != next {
            log::info!("{} -> {}", self.state.description(), next.description());
            self.state = next;
        }
    }

    fn draw(&mut self) {
        self.renderer.draw(&self.render, self.status.current());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{FixedMetrics, RecordingRenderer, RecordingSink};

    type TestEngine = ChoreographyEngine<FixedMetrics, RecordingRenderer, RecordingSink>;

    fn engine(width: i64, height: i64) -> TestEngine {
        ChoreographyEngine::new(
            ChoreographyConfig::default(),
            FixedMetrics::new(width, height),
            RecordingRenderer::new(),
            RecordingSink::new(),
        )
    }

    #[test]
    fn test_starts_idle_and_hidden() {
        let e = engine(1080, 2400);
        assert_eq!(e.state(), ChoreographyState::Idle);
        assert!(!e.render_state().circle_visible);
        assert!(e.status().is_none());
        assert!(e.current_playback().is_none());
    }

    #[test]
    fn test_playback_ids_increase() {
        let mut e = engine(1080, 2400);
        e.arm(0.0);
        e.throw(0.0);
        let first = e.current_playback().unwrap();
        e.arm(10.0);
        assert!(e.current_playback().is_none());
        e.throw(10.0);
        let second = e.current_playback().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_rearm_mid_spin_returns_to_armed() {
        let mut e = engine(1080, 2400);
        e.arm(0.0);
        e.throw(0.0);
        e.tick(100.0);
        e.arm(150.0);
        assert_eq!(e.state(), ChoreographyState::Armed);
        assert_eq!(e.render_state().progress, 0.0);
        assert!(!e.render_state().spin_active);
        // A late tick from the abandoned spin changes nothing.
        e.tick(1_000.0);
        assert_eq!(e.state(), ChoreographyState::Armed);
        assert_eq!(e.render_state().progress, 0.0);
    }

    #[test]
    fn test_target_follows_width_change() {
        let mut e = engine(1080, 2400);
        e.arm(0.0);
        e.metrics_provider_mut().set(2400, 1080);
        e.arm(5.0);
        let t = e.target().unwrap();
        assert_eq!(t.x, 1200.0);
        assert_eq!(t.y, 480.0);
    }
}
