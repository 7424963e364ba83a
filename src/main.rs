use lambda_redirect::config::RedirectConfig;
use lambda_redirect::handler::function_handler;
use lambda_runtime::{Error, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let config = &RedirectConfig::from_env();
    lambda_runtime::run(service_fn(move |event| function_handler(config, event))).await
}
