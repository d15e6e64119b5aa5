use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

/// Source of one-shot and repeating callbacks. Dropping a handle cancels it.
pub trait TimerDriver: Clone + 'static {
    type Handle: 'static;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// `setTimeout` / `setInterval` through gloo.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

pub enum BrowserTimer {
    Timeout(Timeout),
    Interval(Interval),
}

impl TimerDriver for BrowserTimers {
    type Handle = BrowserTimer;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis, callback))
    }

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis, callback))
    }
}

/// A repeating timer that only starts after an initial delay.
///
/// The interval is created from inside the delay callback, so it is kept in a
/// shared slot; stopping clears both the pending delay and the slot.
pub struct StaggeredTimer<H: 'static> {
    delay: Option<H>,
    repeating: Rc<RefCell<Option<H>>>,
}

impl<H: 'static> StaggeredTimer<H> {
    pub fn start<D, F>(driver: &D, delay_ms: u32, period_ms: u32, on_tick: F) -> Self
    where
        D: TimerDriver<Handle = H>,
        F: FnMut() + 'static,
    {
        let repeating = Rc::new(RefCell::new(None));
        let slot = repeating.clone();
        let interval_driver = driver.clone();
        let delay = driver.timeout(
            delay_ms,
            Box::new(move || {
                let handle = interval_driver.interval(period_ms, Box::new(on_tick));
                *slot.borrow_mut() = Some(handle);
            }),
        );
        Self {
            delay: Some(delay),
            repeating,
        }
    }

    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        let delay = self.delay.take();
        let repeating = self.repeating.borrow_mut().take();
        drop(delay);
        drop(repeating);
    }
}

impl<H: 'static> Drop for StaggeredTimer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Plain interval with an explicit stop.
pub struct RepeatingTimer<H: 'static> {
    handle: Option<H>,
}

impl<H: 'static> RepeatingTimer<H> {
    pub fn start<D, F>(driver: &D, period_ms: u32, on_tick: F) -> Self
    where
        D: TimerDriver<Handle = H>,
        F: FnMut() + 'static,
    {
        Self {
            handle: Some(driver.interval(period_ms, Box::new(on_tick))),
        }
    }

    pub fn stop(mut self) {
        self.handle.take();
    }
}

impl<H: 'static> Drop for RepeatingTimer<H> {
    fn drop(&mut self) {
        self.handle.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::VirtualTimers;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let ticks = count.clone();
        (count, move || ticks.set(ticks.get() + 1))
    }

    #[test]
    fn staggered_timer_waits_for_its_delay() {
        let timers = VirtualTimers::default();
        let (count, on_tick) = counter();
        let _timer = StaggeredTimer::start(&timers, 300, 1000, on_tick);

        timers.advance(1299);
        assert_eq!(count.get(), 0);
        timers.advance(1);
        assert_eq!(count.get(), 1);
        timers.advance(3000);
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn stopping_before_the_delay_cancels_everything() {
        let timers = VirtualTimers::default();
        let (count, on_tick) = counter();
        let timer = StaggeredTimer::start(&timers, 500, 1000, on_tick);
        timers.advance(200);
        timer.stop();

        timers.advance(10_000);
        assert_eq!(count.get(), 0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn dropping_a_running_timer_cancels_the_interval() {
        let timers = VirtualTimers::default();
        let (count, on_tick) = counter();
        let timer = StaggeredTimer::start(&timers, 0, 1000, on_tick);
        timers.advance(2500);
        assert_eq!(count.get(), 2);

        drop(timer);
        timers.advance(10_000);
        assert_eq!(count.get(), 2);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn repeating_timer_stops() {
        let timers = VirtualTimers::default();
        let (count, on_tick) = counter();
        let timer = RepeatingTimer::start(&timers, 100, on_tick);
        timers.advance(1000);
        assert_eq!(count.get(), 10);

        timer.stop();
        timers.advance(1000);
        assert_eq!(count.get(), 10);
        assert_eq!(timers.pending(), 0);
    }
}
