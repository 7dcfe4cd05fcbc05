//! The greeting service.
//!
//! [`GreetingService`] owns the injected clock and computes the response for
//! one invocation: project the current instant into Singapore civil time,
//! classify the hour, format the timestamp. Each invocation is independent
//! and shares no mutable state with any other.

use std::sync::Arc;

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};

use crate::clock::Clock;
use crate::error::GreetingError;
use crate::greeting::GreetingBucket;
use crate::lambda::ResponseBody;
use crate::localtime::LocalizedTime;

/// Stateless greeting computation over an injected clock.
#[derive(Clone)]
pub struct GreetingService {
    clock: Arc<dyn Clock>,
}

impl GreetingService {
    /// Creates a service over the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Computes the greeting for the current instant.
    ///
    /// Total for any readable clock: every instant produces exactly one
    /// response, and a fixed instant always produces the same response.
    pub fn handle(&self) -> Result<ResponseBody, GreetingError> {
        let instant = self.clock.now_utc()?;
        let local = LocalizedTime::from_instant(instant);
        let bucket = GreetingBucket::from_hour(local.hour());

        Ok(ResponseBody {
            greeting_text: bucket.text().to_string(),
            timestamp: local.display(),
        })
    }

    /// Handles one API Gateway invocation.
    ///
    /// The request carries no required fields; it is logged and otherwise
    /// ignored.
    pub fn handle_request(
        &self,
        request: &ApiGatewayProxyRequest,
    ) -> Result<ApiGatewayProxyResponse, GreetingError> {
        tracing::info!(
            method = %request.http_method,
            path = request.path.as_deref().unwrap_or("/"),
            "Handling greeting request"
        );

        self.handle()?.into_proxy_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{DateTime, TimeZone, Utc};

    struct UnreadableClock;

    impl Clock for UnreadableClock {
        fn now_utc(&self) -> Result<DateTime<Utc>, GreetingError> {
            Err(GreetingError::clock_unavailable("host clock offline"))
        }
    }

    fn service_at(instant: DateTime<Utc>) -> GreetingService {
        GreetingService::new(Arc::new(FixedClock::new(instant)))
    }

    #[test]
    fn test_handle_morning_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 2, 30, 0).unwrap();
        let response = service_at(instant).handle().unwrap();

        assert_eq!(response.greeting_text, "Good morning");
        assert_eq!(response.timestamp, "2024-03-10 10:30:00");
    }

    #[test]
    fn test_handle_is_idempotent_for_fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap();
        let service = service_at(instant);

        assert_eq!(service.handle().unwrap(), service.handle().unwrap());
    }

    #[test]
    fn test_clock_failure_propagates() {
        let service = GreetingService::new(Arc::new(UnreadableClock));
        let err = service.handle().unwrap_err();

        assert!(matches!(err, GreetingError::ClockUnavailable { .. }));
    }

    #[test]
    fn test_handle_request_ignores_request_shape() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap();
        let service = service_at(instant);
        let request = ApiGatewayProxyRequest::default();

        let response = service.handle_request(&request).unwrap();
        assert_eq!(response.status_code, 200);
    }
}
