//! `setInterval`-backed tick source for [`RefreshDriver`](lib_core::refresh::RefreshDriver).

use gloo_timers::callback::Interval;
use lib_core::refresh::TickSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalSource;

impl TickSource for IntervalSource {
    type Handle = Interval;

    fn schedule(&self, period_ms: u32, mut on_tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || on_tick())
    }

    fn cancel(&self, handle: Interval) {
        // dropping an Interval calls clearInterval
        drop(handle);
    }
}
