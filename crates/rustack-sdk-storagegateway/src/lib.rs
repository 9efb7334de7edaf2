//! AWS Storage Gateway client.
//!
//! Storage Gateway speaks the AWS JSON 1.1 protocol: every request is a
//! `POST /` whose `X-Amz-Target` header names the operation, and both the
//! input and the output are plain JSON objects.

mod client;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{METADATA, StorageGatewayBlockingClient, StorageGatewayClient};
pub use error::{StorageGatewayError, StorageGatewayFault};
