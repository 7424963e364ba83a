use crate::config::RedirectMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// Status returned for every invocation.
const FOUND: u16 = 302;

/// Response header carrying the redirect target in header mode.
const LOCATION_HEADER: &str = "location";

/// Proxy-integration response, serialized back to the platform which turns
/// it into the transport-level HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
}

impl RedirectResponse {
    /// Builds the `302 Found` response, conveying `target` in the shape
    /// `mode` selects.
    #[must_use]
    pub fn found(mode: RedirectMode, target: &str) -> Self {
        match mode {
            RedirectMode::Header => Self {
                status_code: FOUND,
                headers: HashMap::from([(LOCATION_HEADER.to_string(), target.to_string())]),
                body: None,
                is_base64_encoded: None,
            },
            RedirectMode::Body => Self {
                status_code: FOUND,
                headers: HashMap::new(),
                body: Some(json!({ "location": target }).to_string()),
                is_base64_encoded: Some(false),
            },
        }
    }
}
