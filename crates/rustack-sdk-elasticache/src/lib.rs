//! Amazon ElastiCache client.
//!
//! ElastiCache speaks the AWS query protocol: requests are form-encoded
//! `Action`/`Version` parameter lists and responses are XML documents of
//! the form `<OpResponse><OpResult>...</OpResult><ResponseMetadata/></OpResponse>`.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//!
//! use rustack_sdk_auth::StaticCredentialsProvider;
//! use rustack_sdk_core::{ClientConfig, Credentials};
//! use rustack_sdk_elasticache::ElastiCacheClient;
//! use rustack_sdk_elasticache::input::DescribeCacheClustersRequest;
//!
//! let credentials = StaticCredentialsProvider::new(Credentials::new("AKID", "SECRET"));
//! let client = ElastiCacheClient::new(ClientConfig::from_env(), Arc::new(credentials))?;
//! let clusters = client
//!     .describe_cache_clusters(&DescribeCacheClustersRequest::default().with_show_cache_node_info(true))
//!     .await?;
//! for cluster in clusters.result().cache_clusters() {
//!     println!("{} {}", cluster.cache_cluster_id(), cluster.cache_cluster_status());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{ElastiCacheBlockingClient, ElastiCacheClient, METADATA};
pub use error::{ElastiCacheError, ElastiCacheFault};
