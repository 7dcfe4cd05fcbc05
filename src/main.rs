//! Lambda runtime entry point for the greeting function.
//!
//! The deployment tool maps this binary to the managed function resource and
//! its HTTP GET route; the handler name and signature stay stable for that
//! contract.

use std::sync::Arc;

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use greeting_lambda::{GreetingService, SystemClock};

async fn function_handler(
    service: GreetingService,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    Ok(service.handle_request(&event.payload)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for structured logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    // One service per execution environment; invocations share only the
    // read-only clock.
    let service = GreetingService::new(Arc::new(SystemClock));

    run(service_fn(move |event| {
        let service = service.clone();
        async move { function_handler(service, event).await }
    }))
    .await
}
