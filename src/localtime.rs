//! Singapore civil-time projection.
//!
//! `Asia/Singapore` is a fixed UTC+8 zone with no daylight-saving
//! transitions, so projecting an instant is a pure offset conversion with no
//! dependency on process-wide timezone state.

use chrono::{DateTime, FixedOffset, Timelike, Utc};

/// Offset of Singapore civil time from UTC, in seconds.
const SINGAPORE_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Display format for response timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An instant rendered into Singapore civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedTime {
    local: DateTime<FixedOffset>,
}

impl LocalizedTime {
    /// Projects a UTC instant into Singapore civil time.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        let offset = FixedOffset::east_opt(SINGAPORE_UTC_OFFSET_SECS)
            .expect("+08:00 is a valid offset");

        Self {
            local: instant.with_timezone(&offset),
        }
    }

    /// The local hour of day, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    /// Formats the local date and time as `YYYY-MM-DD HH:mm:ss`.
    pub fn display(&self) -> String {
        self.local.format(TIMESTAMP_FORMAT).to_string()
    }
}
