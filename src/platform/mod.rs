//! Host collaborators.
//!
//! The engine never draws, injects touches, or measures the display
//! itself. A host supplies implementations of:
//! - [`Renderer`]: paints the overlay from a `RenderState`
//! - [`GestureSink`]: injects a finished `GesturePath`
//! - [`MetricsProvider`]: reports the current screen size
//!
//! [`headless`] has in-memory implementations for tests and the demo binary.

pub mod headless;

use crate::gesture::GesturePath;
use crate::model::RenderState;
use crate::status::StatusMessage;

/// Draws the overlay. Called after every engine mutation.
///
/// Contract: outline ellipse when `circle_visible`, an arc from
/// `progress_start_deg` sweeping `360 × progress` when `spin_active`, a
/// filled marker at `target` when `target_visible`.
pub trait Renderer {
    fn draw(&mut self, state: &RenderState, status: Option<&StatusMessage>);
}

/// Performs touch injection. Fire-and-forget.
pub trait GestureSink {
    fn dispatch(&mut self, path: GesturePath);
}

/// Pull-based screen size source, queried before every transition.
pub trait MetricsProvider {
    /// Raw `(width, height)` in pixels; may be non-positive while the
    /// display is reconfiguring.
    fn screen_metrics(&mut self) -> (i64, i64);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw(&mut self, state: &RenderState, status: Option<&StatusMessage>) {
        (**self).draw(state, status)
    }
}

impl<S: GestureSink + ?Sized> GestureSink for Box<S> {
    fn dispatch(&mut self, path: GesturePath) {
        (**self).dispatch(path)
    }
}

impl<M: MetricsProvider + ?Sized> MetricsProvider for Box<M> {
    fn screen_metrics(&mut self) -> (i64, i64) {
        (**self).screen_metrics()
    }
}
