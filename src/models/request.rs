use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Proxy-integration event as delivered by the platform.
///
/// Only the fields this function reads are modeled; anything else in the
/// event is ignored. Every field is optional so a degenerate event, down to
/// an empty JSON object, still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RedirectRequest {
    pub headers: Option<HashMap<String, String>>,
    pub request_context: Option<RequestContext>,
}

impl RedirectRequest {
    /// Looks up a request header by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }
}

/// Integration context attached to the event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    pub identity: Option<RequestIdentity>,
}

/// Caller identity as reported by the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestIdentity {
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
}
