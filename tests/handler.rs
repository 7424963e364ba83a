// Handler tests
#![allow(clippy::unwrap_used)]

use lambda_redirect::config::{MetadataSource, RedirectConfig, RedirectMode};
use lambda_redirect::handler::{REDIRECT_TARGET, extract_caller, function_handler};
use lambda_redirect::models::RedirectRequest;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;

fn request_from(payload: serde_json::Value) -> RedirectRequest {
    serde_json::from_value(payload).unwrap()
}

fn create_test_lambda_event(request: RedirectRequest) -> LambdaEvent<RedirectRequest> {
    LambdaEvent::new(request, Context::default())
}

#[tokio::test]
async fn test_redirect_via_location_header() {
    let request = request_from(json!({
        "headers": {
            "X-Forwarded-For": "1.2.3.4",
            "User-Agent": "test-agent"
        }
    }));

    let config = RedirectConfig::default();
    let response = function_handler(&config, create_test_lambda_event(request))
        .await
        .unwrap();

    assert_eq!(response.status_code, 302);
    assert_eq!(
        response.headers.get("location").map(String::as_str),
        Some(REDIRECT_TARGET)
    );
    assert!(response.body.is_none(), "header mode should not carry a body");
    assert!(response.is_base64_encoded.is_none());
}

#[tokio::test]
async fn test_redirect_via_json_body() {
    let config = RedirectConfig {
        redirect_mode: RedirectMode::Body,
        ..RedirectConfig::default()
    };

    let response = function_handler(&config, create_test_lambda_event(RedirectRequest::default()))
        .await
        .unwrap();

    assert_eq!(response.status_code, 302);
    assert!(response.headers.is_empty());
    let body: serde_json::Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "location": REDIRECT_TARGET }));
    assert_eq!(response.is_base64_encoded, Some(false));
}

#[tokio::test]
async fn test_event_without_headers_still_redirects() {
    // Regression test: events without a headers member used to crash the
    // function with an unguarded lookup.
    let request = request_from(json!({}));

    let config = RedirectConfig::default();
    let result = function_handler(&config, create_test_lambda_event(request)).await;

    let response = result.unwrap();
    assert_eq!(response.status_code, 302);
    assert_eq!(
        response.headers.get("location").map(String::as_str),
        Some(REDIRECT_TARGET)
    );
}

#[tokio::test]
async fn test_target_is_never_derived_from_the_event() {
    let request = request_from(json!({
        "headers": {
            "Location": "https://elsewhere.example",
            "Host": "elsewhere.example"
        },
        "path": "/elsewhere"
    }));

    let config = RedirectConfig::default();
    let response = function_handler(&config, create_test_lambda_event(request))
        .await
        .unwrap();

    assert_eq!(
        response.headers.get("location").map(String::as_str),
        Some(REDIRECT_TARGET)
    );
}

#[test]
fn test_identical_events_yield_identical_responses() {
    let config = RedirectConfig::default();
    let request = request_from(json!({
        "headers": {
            "X-Forwarded-For": "1.2.3.4",
            "User-Agent": "test-agent"
        }
    }));

    let first = tokio_test::block_on(function_handler(
        &config,
        create_test_lambda_event(request.clone()),
    ))
    .unwrap();
    let second =
        tokio_test::block_on(function_handler(&config, create_test_lambda_event(request))).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_caller_line_from_forwarded_headers() {
    let request = request_from(json!({
        "headers": {
            "X-Forwarded-For": "1.2.3.4",
            "User-Agent": "test-agent"
        }
    }));

    let caller = extract_caller(&request, MetadataSource::Headers);
    assert_eq!(caller.to_string(), "ip: 1.2.3.4 - agent: test-agent");
}

#[test]
fn test_caller_header_names_are_case_insensitive() {
    let request = request_from(json!({
        "headers": {
            "x-forwarded-for": "10.0.0.1",
            "user-agent": "curl/8.0"
        }
    }));

    let caller = extract_caller(&request, MetadataSource::Headers);
    assert_eq!(caller.ip, "10.0.0.1");
    assert_eq!(caller.agent, "curl/8.0");
}

#[test]
fn test_caller_from_request_context_identity() {
    let request = request_from(json!({
        "requestContext": {
            "identity": {
                "sourceIp": "5.6.7.8",
                "userAgent": "integration-test"
            }
        }
    }));

    let caller = extract_caller(&request, MetadataSource::RequestContext);
    assert_eq!(caller.to_string(), "ip: 5.6.7.8 - agent: integration-test");
}

#[test]
fn test_missing_caller_fields_fall_back_to_empty() {
    let caller = extract_caller(&RedirectRequest::default(), MetadataSource::Headers);
    assert_eq!(caller.ip, "");
    assert_eq!(caller.agent, "");

    let caller = extract_caller(&RedirectRequest::default(), MetadataSource::RequestContext);
    assert_eq!(caller.to_string(), "ip:  - agent: ");
}
