#[cfg(test)]
use std::{cell::Cell, rc::Rc};

/// Milliseconds since some fixed origin. Only differences are meaningful.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock of the page, `Date.now()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        web_sys::js_sys::Date::now()
    }
}

/// Virtual clock that only moves when told to. Clones share the same time.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get() + f64::from(ms));
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_the_same_time() {
        let clock = ManualClock::default();
        let handle = clock.clone();
        handle.advance(1500);
        assert_eq!(clock.now_ms(), 1500.0);
    }
}
