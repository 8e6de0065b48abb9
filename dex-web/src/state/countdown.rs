//! Countdown that re-reads the clock once a second while its owner is mounted.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use lib_core::countdown::{time_left, TimeLeft};
use lib_core::refresh::{RefreshDriver, TickSource};

use crate::services::ticker::IntervalSource;

/// Time left until `end_time`, refreshed every second.
///
/// The interval is registered when this is called and cancelled when the calling
/// component's owner is cleaned up. Without an end time the sentinel is shown.
pub fn use_countdown(end_time: Signal<Option<DateTime<Utc>>>) -> Signal<TimeLeft> {
    use_countdown_with(IntervalSource, end_time)
}

/// [`use_countdown`] driven by any tick source.
pub fn use_countdown_with<S>(source: S, end_time: Signal<Option<DateTime<Utc>>>) -> Signal<TimeLeft>
where
    S: TickSource + 'static,
    S::Handle: 'static,
{
    let now = RwSignal::new(Utc::now());

    let mut driver = RefreshDriver::new(source);
    driver.activate(move || now.set(Utc::now()));

    let driver = StoredValue::new_local(Some(driver));
    on_cleanup(move || {
        if let Some(Some(mut driver)) = driver.try_update_value(Option::take) {
            driver.deactivate();
        }
    });

    Signal::derive(move || match end_time.get() {
        Some(end) => time_left(end, now.get()),
        None => TimeLeft::elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ticks {
        listeners: Vec<Option<Box<dyn FnMut()>>>,
        fired: usize,
        cancelled: usize,
    }

    /// Tick source the test advances by hand.
    #[derive(Clone, Default)]
    struct ManualTicks(Rc<RefCell<Ticks>>);

    impl ManualTicks {
        fn advance(&self, ticks: usize) {
            for _ in 0..ticks {
                let mut listeners = std::mem::take(&mut self.0.borrow_mut().listeners);
                let mut fired = 0;
                for on_tick in listeners.iter_mut().flatten() {
                    on_tick();
                    fired += 1;
                }
                let mut state = self.0.borrow_mut();
                state.fired += fired;
                state.listeners = listeners;
            }
        }

        fn fired(&self) -> usize {
            self.0.borrow().fired
        }

        fn cancelled(&self) -> usize {
            self.0.borrow().cancelled
        }
    }

    impl TickSource for ManualTicks {
        type Handle = usize;

        fn schedule(&self, _period_ms: u32, on_tick: Box<dyn FnMut()>) -> usize {
            let mut state = self.0.borrow_mut();
            state.listeners.push(Some(on_tick));
            state.listeners.len() - 1
        }

        fn cancel(&self, handle: usize) {
            let mut state = self.0.borrow_mut();
            state.cancelled += 1;
            state.listeners[handle] = None;
        }
    }

    #[test]
    fn test_cleanup_cancels_ticks_once() {
        let ticks = ManualTicks::default();
        let owner = Owner::new();

        let end = Utc::now() + Duration::days(2);
        let time_left = owner.with(|| use_countdown_with(ticks.clone(), Signal::derive(move || Some(end))));

        ticks.advance(3);
        assert_eq!(ticks.fired(), 3);
        assert_eq!(ticks.cancelled(), 0);
        assert!(!time_left.get_untracked().is_elapsed());

        owner.cleanup();
        assert_eq!(ticks.cancelled(), 1);

        ticks.advance(5);
        assert_eq!(ticks.fired(), 3);

        owner.cleanup();
        assert_eq!(ticks.cancelled(), 1);
    }

    #[test]
    fn test_missing_end_time_shows_sentinel() {
        let ticks = ManualTicks::default();
        let owner = Owner::new();

        let time_left = owner.with(|| use_countdown_with(ticks.clone(), Signal::derive(|| None)));
        ticks.advance(1);

        assert_eq!(time_left.get_untracked(), TimeLeft::elapsed());
        owner.cleanup();
        assert_eq!(ticks.cancelled(), 1);
    }
}
