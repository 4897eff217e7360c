// ===============================
// src/clock.rs
// ===============================
use chrono::{DateTime, Utc};

/// Time source used to stamp trades and to age them against the window.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> { Utc::now() }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::Clock;

    /// Clock that only moves when told to. Clones share the same instant.
    #[derive(Debug, Clone)]
    pub struct ManualClock(Rc<Cell<DateTime<Utc>>>);

    impl ManualClock {
        pub fn new() -> Self {
            let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
            Self(Rc::new(Cell::new(start)))
        }
        pub fn advance(&self, by: Duration) { self.0.set(self.0.get() + by); }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> { self.0.get() }
    }
}
