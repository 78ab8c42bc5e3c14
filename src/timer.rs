use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::{create_rw_signal, RwSignal, SignalUpdate};

const TICK_MS: u32 = 1_000;

/// One-shot chronometer for the screen. Idle until every set is complete,
/// then ticks once per second. Elapsed time is a signal so the clock text
/// updates in place without rebuilding the screen.
#[derive(Clone)]
pub struct ScreenTimer {
    elapsed: RwSignal<i64>,
    ticker: Rc<RefCell<Option<Interval>>>,
}

impl ScreenTimer {
    pub fn new() -> Self {
        Self {
            elapsed: create_rw_signal(0),
            ticker: Rc::new(RefCell::new(None)),
        }
    }

    pub fn elapsed(&self) -> RwSignal<i64> {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.ticker.borrow().is_some()
    }

    /// Installs the tick source, dropping any previous one first so at most
    /// one interval is ever alive. Elapsed time is not reset: restarting
    /// keeps accumulating from the current value.
    pub fn start(&self) {
        self.ticker.borrow_mut().take();
        let elapsed = self.elapsed;
        let handle = Interval::new(TICK_MS, move || {
            elapsed.update(|secs| *secs += 1);
        });
        *self.ticker.borrow_mut() = Some(handle);
    }

    pub fn stop(&self) {
        self.ticker.borrow_mut().take();
    }
}

impl Default for ScreenTimer {
    fn default() -> Self {
        Self::new()
    }
}
