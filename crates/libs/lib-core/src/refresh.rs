//! # Periodic Refresh
//!
//! A display that shows a value derived from wall-clock time registers a tick listener
//! while it is mounted and unregisters it on teardown. [`RefreshDriver`] owns that
//! registration: the timer is cancelled exactly once, whether through
//! [`RefreshDriver::deactivate`] or by dropping the driver.
//!
//! The timer itself comes from a [`TickSource`]. The browser build backs it with
//! `gloo_timers::callback::Interval`; tests use a manual source.

/// Tick period of the reward countdown.
pub const REFRESH_PERIOD_MS: u32 = 1_000;

/// Something that can call a listener on a fixed period until told to stop.
pub trait TickSource {
    type Handle;

    fn schedule(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

pub struct RefreshDriver<S: TickSource> {
    source: S,
    period_ms: u32,
    active: Option<S::Handle>,
}

impl<S: TickSource> RefreshDriver<S> {
    pub fn new(source: S) -> Self {
        Self::with_period(source, REFRESH_PERIOD_MS)
    }

    pub fn with_period(source: S, period_ms: u32) -> Self {
        Self {
            source,
            period_ms,
            active: None,
        }
    }

    /// Start calling `on_tick` every period. An earlier registration is cancelled first.
    pub fn activate(&mut self, on_tick: impl FnMut() + 'static) {
        self.deactivate();
        log::debug!("refresh driver activated ({} ms)", self.period_ms);
        self.active = Some(self.source.schedule(self.period_ms, Box::new(on_tick)));
    }

    /// Stop further ticks. Does nothing when already inactive.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.active.take() {
            self.source.cancel(handle);
            log::debug!("refresh driver cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl<S: TickSource> Drop for RefreshDriver<S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct ManualState {
        next_id: usize,
        listeners: Vec<(usize, Box<dyn FnMut()>)>,
        scheduled: usize,
        cancelled: usize,
    }

    /// Fires listeners only when the test advances time.
    #[derive(Clone, Default)]
    struct ManualTicks(Rc<RefCell<ManualState>>);

    impl ManualTicks {
        fn advance(&self, ticks: usize) {
            for _ in 0..ticks {
                let mut listeners = std::mem::take(&mut self.0.borrow_mut().listeners);
                for (_, on_tick) in listeners.iter_mut() {
                    on_tick();
                }
                let mut state = self.0.borrow_mut();
                listeners.append(&mut state.listeners);
                state.listeners = listeners;
            }
        }

        fn scheduled(&self) -> usize {
            self.0.borrow().scheduled
        }

        fn cancelled(&self) -> usize {
            self.0.borrow().cancelled
        }

        fn live(&self) -> usize {
            self.0.borrow().listeners.len()
        }
    }

    impl TickSource for ManualTicks {
        type Handle = usize;

        fn schedule(&self, _period_ms: u32, on_tick: Box<dyn FnMut()>) -> usize {
            let mut state = self.0.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.scheduled += 1;
            state.listeners.push((id, on_tick));
            id
        }

        fn cancel(&self, handle: usize) {
            let mut state = self.0.borrow_mut();
            state.cancelled += 1;
            state.listeners.retain(|(id, _)| *id != handle);
        }
    }

    fn counting_listener() -> (Rc<Cell<usize>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        (count, move || counter.set(counter.get() + 1))
    }

    #[test]
    fn test_ticks_until_deactivated() {
        let ticks = ManualTicks::default();
        let mut driver = RefreshDriver::new(ticks.clone());
        let (count, listener) = counting_listener();

        driver.activate(listener);
        ticks.advance(5);
        assert_eq!(count.get(), 5);

        driver.deactivate();
        ticks.advance(10);
        assert_eq!(count.get(), 5);
        assert_eq!(ticks.cancelled(), 1);
        assert!(!driver.is_active());
    }

    #[test]
    fn test_cancel_once_on_repeated_deactivate_and_drop() {
        let ticks = ManualTicks::default();
        let mut driver = RefreshDriver::new(ticks.clone());
        let (_, listener) = counting_listener();

        driver.activate(listener);
        ticks.advance(3);
        driver.deactivate();
        driver.deactivate();
        drop(driver);

        assert_eq!(ticks.cancelled(), 1);
        assert_eq!(ticks.live(), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let ticks = ManualTicks::default();
        let (count, listener) = counting_listener();
        {
            let mut driver = RefreshDriver::new(ticks.clone());
            driver.activate(listener);
            ticks.advance(2);
        }

        ticks.advance(4);
        assert_eq!(count.get(), 2);
        assert_eq!(ticks.cancelled(), 1);
    }

    #[test]
    fn test_drop_without_activation_never_cancels() {
        let ticks = ManualTicks::default();
        drop(RefreshDriver::new(ticks.clone()));
        assert_eq!(ticks.cancelled(), 0);
    }

    #[test]
    fn test_reactivate_replaces_listener() {
        let ticks = ManualTicks::default();
        let mut driver = RefreshDriver::with_period(ticks.clone(), 250);
        let (first, first_listener) = counting_listener();
        let (second, second_listener) = counting_listener();

        driver.activate(first_listener);
        ticks.advance(1);
        driver.activate(second_listener);
        ticks.advance(3);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 3);
        assert_eq!(ticks.scheduled(), 2);
        assert_eq!(ticks.cancelled(), 1);
        assert_eq!(ticks.live(), 1);
        assert_eq!(driver.period_ms(), 250);
    }
}
