//! Schema generator for the Lambda invocation contract.
//!
//! This binary generates `handler_schema.json` describing the event and
//! response shapes of the redirect handler, for wiring up the gateway
//! integration. Not part of the deployed function.

use anyhow::Result;
use lambda_redirect::models::{RedirectRequest, RedirectResponse};
use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};
use std::fs;

fn main() -> Result<()> {
    let contract = json!({
        "eventSchema": contract_schema::<RedirectRequest>()?,
        "responseSchema": contract_schema::<RedirectResponse>()?,
    });

    fs::write("handler_schema.json", serde_json::to_string_pretty(&contract)?)?;
    println!("✅ Generated handler_schema.json");
    Ok(())
}

// Generates a schema for the given type with generator noise removed
fn contract_schema<T: JsonSchema>() -> Result<Value> {
    let mut schema = serde_json::to_value(schema_for!(T))?;

    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
    }

    Ok(schema)
}
