//! Time providers for the greeting function.
//!
//! The handler is a pure function of the current instant, so the instant is
//! injected through the [`Clock`] trait instead of being read from a global.
//! Production code uses [`SystemClock`]; tests pin a [`FixedClock`] to drive
//! the handler deterministically.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone, Utc};

use crate::error::GreetingError;

/// A source of the current instant.
///
/// Implementations must be `Send + Sync` so one service value can be shared
/// across invocations.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now_utc(&self) -> Result<DateTime<Utc>, GreetingError>;
}

/// Clock backed by the host system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> Result<DateTime<Utc>, GreetingError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| GreetingError::clock_unavailable(e.to_string()))?;

        Utc.timestamp_opt(elapsed.as_secs() as i64, elapsed.subsec_nanos())
            .single()
            .ok_or_else(|| GreetingError::clock_unavailable("system time out of range"))
    }
}

/// Clock that always returns a pinned instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use greeting_lambda::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2024, 3, 10, 2, 30, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now_utc().unwrap(), instant);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> Result<DateTime<Utc>, GreetingError> {
        Ok(self.instant)
    }
}
