use chrono::{DateTime, Utc};

/// Time source for every tracker. Handlers never call `Utc::now()` directly so
/// tests can drive the clock through a whole working day.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub mod manual;
