//! Client configuration
//!
//! The host builds a [`ClientConfig`] (base URL, endpoint-name map, action
//! table) and hands it to [`crate::InEngineClient::new`]. The client
//! snapshots the configuration at construction time, so mutating a config
//! afterwards has no effect on handles that were already built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::resource::ActionTable;

/// Default base URL of the InEngine.NET API.
pub const DEFAULT_API_URL: &str = "http://localhost:9001/api";

/// Logical resource names exposed by the scheduler API.
///
/// These are client-side identifiers; the wire path segment each one maps
/// to lives in [`EndpointNames`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    CronTrigger,
    SimpleTrigger,
    JobType,
    TimeZone,
    HealthStatus,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::CronTrigger,
        Resource::SimpleTrigger,
        Resource::JobType,
        Resource::TimeZone,
        Resource::HealthStatus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::CronTrigger => "cronTrigger",
            Resource::SimpleTrigger => "simpleTrigger",
            Resource::JobType => "jobType",
            Resource::TimeZone => "timeZone",
            Resource::HealthStatus => "healthStatus",
        }
    }

    /// Wire path segment the API uses for this resource by default.
    pub fn default_segment(self) -> &'static str {
        match self {
            Resource::CronTrigger => "CronTrigger",
            Resource::SimpleTrigger => "SimpleTrigger",
            Resource::JobType => "JobType",
            Resource::TimeZone => "TimeZone",
            Resource::HealthStatus => "HealthStatus",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map from logical resource name to wire endpoint path segment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EndpointNames(HashMap<Resource, String>);

impl Default for EndpointNames {
    fn default() -> Self {
        Self(
            Resource::ALL
                .iter()
                .map(|r| (*r, r.default_segment().to_string()))
                .collect(),
        )
    }
}

impl EndpointNames {
    pub fn set(&mut self, resource: Resource, segment: impl Into<String>) {
        self.0.insert(resource, segment.into());
    }

    pub fn remove(&mut self, resource: Resource) {
        self.0.remove(&resource);
    }

    pub fn get(&self, resource: Resource) -> Option<&str> {
        self.0.get(&resource).map(String::as_str)
    }

    /// Resolve the segment for a resource, failing on unset or empty entries.
    pub(crate) fn segment(&self, resource: Resource) -> Result<&str> {
        match self.get(resource) {
            Some(segment) if !segment.is_empty() => Ok(segment),
            _ => Err(Error::MissingEndpoint(resource)),
        }
    }
}

/// Configuration snapshot the client is built from.
///
/// The base URL is not validated here; a malformed URL surfaces as a
/// transport failure on the first request, not as a configuration error.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_url: String,
    endpoint_names: EndpointNames,
    actions: ActionTable,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            endpoint_names: EndpointNames::default(),
            actions: ActionTable::default(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_api_url(&mut self, url: impl Into<String>) {
        self.api_url = url.into();
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Replace the endpoint-name map wholesale.
    pub fn set_endpoint_names(&mut self, names: EndpointNames) {
        self.endpoint_names = names;
    }

    pub fn endpoint_names(&self) -> &EndpointNames {
        &self.endpoint_names
    }

    pub fn endpoint_names_mut(&mut self) -> &mut EndpointNames {
        &mut self.endpoint_names
    }

    /// Replace the verb-to-HTTP-method table wholesale.
    pub fn set_actions(&mut self, actions: ActionTable) {
        self.actions = actions;
    }

    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url(), "http://localhost:9001/api");
    }

    #[test]
    fn test_default_endpoint_names() {
        let names = EndpointNames::default();
        assert_eq!(names.get(Resource::CronTrigger), Some("CronTrigger"));
        assert_eq!(names.get(Resource::SimpleTrigger), Some("SimpleTrigger"));
        assert_eq!(names.get(Resource::JobType), Some("JobType"));
        assert_eq!(names.get(Resource::TimeZone), Some("TimeZone"));
        assert_eq!(names.get(Resource::HealthStatus), Some("HealthStatus"));
    }

    #[test]
    fn test_segment_fails_on_removed_entry() {
        let mut names = EndpointNames::default();
        names.remove(Resource::HealthStatus);
        assert!(matches!(
            names.segment(Resource::HealthStatus),
            Err(Error::MissingEndpoint(Resource::HealthStatus))
        ));
    }

    #[test]
    fn test_segment_fails_on_empty_entry() {
        let mut names = EndpointNames::default();
        names.set(Resource::TimeZone, "");
        assert!(matches!(
            names.segment(Resource::TimeZone),
            Err(Error::MissingEndpoint(Resource::TimeZone))
        ));
    }

    #[test]
    fn test_endpoint_names_deserialize() {
        let json = r#"{"cronTrigger": "Triggers/Cron", "healthStatus": "Health"}"#;
        let names: EndpointNames = serde_json::from_str(json).unwrap();
        assert_eq!(names.get(Resource::CronTrigger), Some("Triggers/Cron"));
        assert_eq!(names.get(Resource::HealthStatus), Some("Health"));
        assert_eq!(names.get(Resource::JobType), None);
    }

    #[test]
    fn test_set_api_url() {
        let mut config = ClientConfig::new();
        config.set_api_url("http://scheduler:8080/api");
        assert_eq!(config.api_url(), "http://scheduler:8080/api");
    }
}
