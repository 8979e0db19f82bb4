// Lambda bootstrap entry point for the gateway function.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use hippo_gateway::api::{Gateway, handler};
use hippo_gateway::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    hippo_gateway::setup_logging();

    let config = AppConfig::from_env().map_err(Error::from)?;
    let gateway = Arc::new(Gateway::new(config));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let gateway = Arc::clone(&gateway);
        async move { handler::function_handler(event, &gateway).await }
    }))
    .await
}
