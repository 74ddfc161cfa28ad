//! Headless demo host.
//!
//! Runs one scripted session on a simulated 1080x2400 display at the
//! configured tick rate, logging every frame and dispatched stroke:
//! arm → move target → throw → (spin completes) → hold → release → cancel.
//!
//! Usage: `arcthrow [config.json]`. Set `RUST_LOG=debug` for stroke detail.

use std::process::ExitCode;

use arcthrow::handlers::run_frame;
use arcthrow::platform::headless::{FixedMetrics, LogRenderer, LogSink};
use arcthrow::{ChoreographyConfig, ChoreographyEngine, EventBus, TriggerEvent};

const SCREEN_WIDTH: i64 = 1080;
const SCREEN_HEIGHT: i64 = 2400;

/// Upper bound on simulated time so a bad config cannot spin forever.
const MAX_SESSION_MS: f64 = 120_000.0;

type DemoEngine = ChoreographyEngine<FixedMetrics, LogRenderer, LogSink>;

/// Simulated host loop: one event (optional) and one tick per frame.
struct Session {
    bus: EventBus,
    now_ms: f64,
    tick_ms: f64,
}

impl Session {
    fn step(&mut self, engine: &mut DemoEngine, event: Option<TriggerEvent>) {
        if let Some(event) = event {
            self.bus.publisher().publish(event);
        }
        run_frame(engine, &self.bus, self.now_ms);
        self.now_ms += self.tick_ms;
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ChoreographyConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ChoreographyConfig::default(),
    };
    let tick_ms = config.tick_interval_ms;

    let mut engine: DemoEngine = ChoreographyEngine::new(
        config,
        FixedMetrics::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        LogRenderer::default(),
        LogSink,
    );
    let mut session = Session {
        bus: EventBus::new(),
        now_ms: 0.0,
        tick_ms,
    };

    session.step(&mut engine, Some(TriggerEvent::Arm));
    session.step(
        &mut engine,
        Some(TriggerEvent::TargetControl {
            value: 1920.0,
            max: SCREEN_HEIGHT as f64,
        }),
    );
    session.step(&mut engine, Some(TriggerEvent::Throw));
    while engine.state().is_gesturing() && session.now_ms < MAX_SESSION_MS {
        session.step(&mut engine, None);
    }

    session.step(&mut engine, Some(TriggerEvent::HoldAtCenter));
    for _ in 0..10 {
        session.step(&mut engine, None);
    }
    session.step(&mut engine, Some(TriggerEvent::ReleaseHold));
    session.step(&mut engine, Some(TriggerEvent::Arm));
    session.step(&mut engine, Some(TriggerEvent::Cancel));

    // Let the last status expire.
    while engine.status().is_some() && session.now_ms < MAX_SESSION_MS {
        session.step(&mut engine, None);
    }

    log::info!(
        "Session finished at {:.0} ms ({})",
        session.now_ms,
        engine.state().description()
    );
    ExitCode::SUCCESS
}
