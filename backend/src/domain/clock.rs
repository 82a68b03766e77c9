use chrono::{Local, NaiveDate};

/// Source of the current date and of timestamps used for plant IDs
pub trait Clock {
    fn today(&self) -> NaiveDate;
    fn now_millis(&self) -> u64;
}

/// Clock backed by the local system time (the browser clock under WASM)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> u64 {
        u64::try_from(Local::now().timestamp_millis()).unwrap_or_default()
    }
}

/// Clock frozen at a given date, for tests and previews
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    pub today: NaiveDate,
    pub millis: u64,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        let millis = today
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .and_then(|ms| u64::try_from(ms).ok())
            .unwrap_or_default();
        Self { today, millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> u64 {
        self.millis
    }
}
