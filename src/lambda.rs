//! Lambda integration types for the greeting function.
//!
//! This module defines the payload returned from an invocation and the API
//! Gateway proxy response shaping used by the runtime entry point.

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::http::{header, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::GreetingError;

/// Response payload for one greeting invocation.
///
/// Serialized as the JSON body of the HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// The time-of-day greeting
    #[serde(rename = "greetingText")]
    pub greeting_text: String,

    /// Singapore local date and time, `YYYY-MM-DD HH:mm:ss`
    pub timestamp: String,
}

impl ResponseBody {
    /// Wraps the payload in an API Gateway proxy response with status 200.
    pub fn into_proxy_response(self) -> Result<ApiGatewayProxyResponse, GreetingError> {
        let body = serde_json::to_string(&self)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Ok(ApiGatewayProxyResponse {
            status_code: 200,
            headers,
            multi_value_headers: HeaderMap::new(),
            body: Some(Body::Text(body)),
            is_base64_encoded: false,
        })
    }
}
