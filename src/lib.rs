//! Client for the InEngine.NET scheduler HTTP API.
//!
//! Exposes the scheduler's CRUD resources (cron triggers, simple triggers,
//! job types, time zones, health status) behind typed async operations.
//! The API returns Pascal-case field names on the wire; every response is
//! normalized to camelCase before it reaches the caller.
//!
//! The base URL and the per-resource endpoint segments are configured
//! before the client is built and snapshotted at construction:
//!
//! ```no_run
//! use inengine_api::{ClientConfig, InEngineClient};
//!
//! # async fn run() -> inengine_api::Result<()> {
//! let mut config = ClientConfig::new();
//! config.set_api_url("http://scheduler:9001/api");
//! let client = InEngineClient::new(config)?;
//!
//! for trigger in client.list_cron_triggers().await? {
//!     println!("{} -> {}", trigger["id"], trigger["cronExpression"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! This layer is deliberately thin: no authentication, no retries, no
//! caching, no timeouts. Transport failures and non-2xx statuses are
//! returned to the caller unmodified.

pub mod client;
pub mod config;
pub mod error;
pub mod resource;

pub use client::InEngineClient;
pub use config::{ClientConfig, EndpointNames, Resource, DEFAULT_API_URL};
pub use error::{Error, Result};
pub use resource::{ActionDescriptor, ActionTable, ResourceHandle, Verb};
