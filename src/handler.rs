use lambda_runtime::tracing::{debug, info};
use lambda_runtime::{Error, LambdaEvent};
use std::fmt;

use crate::config::{MetadataSource, RedirectConfig};
use crate::models::{RedirectRequest, RedirectResponse};

/// Fixed destination reported by every redirect response. Never derived
/// from the event.
pub const REDIRECT_TARGET: &str = "https://aws.amazon.com";

/// Caller metadata pulled from the inbound event for diagnostics.
///
/// Fields absent from the event are carried as empty strings. `Display`
/// renders the exact line written to the log stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    pub ip: String,
    pub agent: String,
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ip: {} - agent: {}", self.ip, self.agent)
    }
}

/// Extracts caller metadata from the configured source.
///
/// Header names are matched case-insensitively. A missing header map,
/// request context, or individual field yields an empty string rather than
/// failing the invocation.
#[must_use]
pub fn extract_caller(request: &RedirectRequest, source: MetadataSource) -> CallerInfo {
    match source {
        MetadataSource::Headers => CallerInfo {
            ip: request
                .header("x-forwarded-for")
                .unwrap_or_default()
                .to_string(),
            agent: request.header("user-agent").unwrap_or_default().to_string(),
        },
        MetadataSource::RequestContext => {
            let identity = request
                .request_context
                .as_ref()
                .and_then(|context| context.identity.as_ref());
            CallerInfo {
                ip: identity
                    .and_then(|identity| identity.source_ip.clone())
                    .unwrap_or_default(),
                agent: identity
                    .and_then(|identity| identity.user_agent.clone())
                    .unwrap_or_default(),
            }
        }
    }
}

/// Lambda event handler. Logs caller metadata and returns the fixed
/// redirect response. Logs the full event when `RUST_LOG=debug/trace`,
/// stays quiet in production.
///
/// # Errors
///
/// Never returns an error: missing diagnostic fields degrade to empty
/// values instead of failing the invocation. The `Result` is required by
/// the `lambda_runtime` service contract.
pub async fn function_handler(
    config: &RedirectConfig,
    event: LambdaEvent<RedirectRequest>,
) -> Result<RedirectResponse, Error> {
    let (request, context) = event.into_parts();

    debug!(request_id = %context.request_id, payload = ?request, "Handling redirect request");

    let caller = extract_caller(&request, config.metadata_source);
    info!("{caller}");

    Ok(RedirectResponse::found(config.redirect_mode, REDIRECT_TARGET))
}
