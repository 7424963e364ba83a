//! AWS Lambda function that answers every invocation with a fixed redirect
//! to `https://aws.amazon.com`, logging caller metadata along the way.

pub mod config;
pub mod handler;
pub mod models;
