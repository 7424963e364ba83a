//! Deployment-time configuration for the redirect function.
//!
//! Depending on the integration mode, the platform exposes caller metadata
//! either as forwarded request headers or under `requestContext.identity`,
//! and expects the redirect target either as a `location` response header or
//! as a JSON body. Both choices are explicit flags here, read once at
//! startup, rather than shapes the handler guesses per event.

use lambda_runtime::tracing::warn;
use std::env;

/// Environment variable selecting how the redirect target is conveyed.
pub const REDIRECT_MODE_VAR: &str = "REDIRECT_MODE";

/// Environment variable selecting where caller metadata is read from.
pub const METADATA_SOURCE_VAR: &str = "CALLER_METADATA_SOURCE";

/// How the redirect target is conveyed back to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectMode {
    /// `location` response header, no body.
    #[default]
    Header,
    /// JSON body `{"location": ...}`, empty header map.
    Body,
}

impl RedirectMode {
    /// Parses a configuration value (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "header" => Some(Self::Header),
            "body" => Some(Self::Body),
            _ => None,
        }
    }
}

/// Where caller metadata (IP address and user agent) is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataSource {
    /// `X-Forwarded-For` / `User-Agent` request headers.
    #[default]
    Headers,
    /// `requestContext.identity.sourceIp` / `.userAgent`.
    RequestContext,
}

impl MetadataSource {
    /// Parses a configuration value (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "headers" => Some(Self::Headers),
            "request-context" => Some(Self::RequestContext),
            _ => None,
        }
    }
}

/// Resolved configuration, read once at startup and shared with every
/// invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedirectConfig {
    pub redirect_mode: RedirectMode,
    pub metadata_source: MetadataSource,
}

impl RedirectConfig {
    /// Reads configuration from the environment.
    ///
    /// Unset variables use the defaults. Unrecognized values are logged and
    /// fall back to the defaults so a misconfigured deployment still serves
    /// redirects.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            redirect_mode: env_setting(REDIRECT_MODE_VAR, RedirectMode::parse),
            metadata_source: env_setting(METADATA_SOURCE_VAR, MetadataSource::parse),
        }
    }
}

fn env_setting<T: Default>(var: &str, parse: impl Fn(&str) -> Option<T>) -> T {
    env::var(var).map_or_else(
        |_| T::default(),
        |raw| {
            parse(&raw).unwrap_or_else(|| {
                warn!(variable = %var, value = %raw, "Unrecognized setting, using default");
                T::default()
            })
        },
    )
}
