//! # Singapore Greeting Lambda
//!
//! A single AWS Lambda function that answers HTTP GET requests, routed
//! through API Gateway, with a time-of-day greeting for Singapore local
//! time.
//!
//! ## Overview
//!
//! The function is a stateless mapping from the current instant to a
//! response payload. Each invocation:
//!
//! 1. Reads the current instant from an injected [`Clock`].
//! 2. Projects it into Singapore civil time (fixed UTC+8, no DST).
//! 3. Classifies the local hour into a [`GreetingBucket`]:
//!    `[0, 12)` morning, `[12, 18)` afternoon, `[18, 24)` evening.
//! 4. Returns `{ "greetingText": "...", "timestamp": "YYYY-MM-DD HH:mm:ss" }`.
//!
//! The clock is injected so tests can pin deterministic instants and invoke
//! the handler directly, without a live gateway or mutation of process-wide
//! timezone state.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{TimeZone, Utc};
//! use greeting_lambda::{FixedClock, GreetingService};
//!
//! let instant = Utc.with_ymd_and_hms(2024, 3, 10, 2, 30, 0).unwrap();
//! let service = GreetingService::new(Arc::new(FixedClock::new(instant)));
//!
//! let response = service.handle().unwrap();
//! assert_eq!(response.greeting_text, "Good morning");
//! assert_eq!(response.timestamp, "2024-03-10 10:30:00");
//! ```

pub mod clock;
pub mod error;
pub mod greeting;
pub mod lambda;
pub mod localtime;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::GreetingError;
pub use greeting::GreetingBucket;
pub use lambda::ResponseBody;
pub use localtime::LocalizedTime;
pub use service::GreetingService;
