use chrono::{Local, NaiveDate};
use std::cell::Cell;

/// Source of "today" and creation timestamps for the record store.
pub trait Clock {
    fn today(&self) -> NaiveDate;
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall clock in the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

/// Clock pinned to a given day. Each timestamp reading advances by one
/// millisecond so successive entries keep a strict creation order.
pub struct FixedClock {
    today: NaiveDate,
    millis: Cell<i64>,
}

impl FixedClock {
    pub fn new(today: NaiveDate, start_millis: i64) -> Self {
        Self {
            today,
            millis: Cell::new(start_millis),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> i64 {
        let now = self.millis.get();
        self.millis.set(now + 1);
        now
    }
}
