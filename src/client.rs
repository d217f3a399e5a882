//! InEngine API client
//!
//! One resource handle per logical resource, built once from a
//! configuration snapshot. Operations delegate to the handles; every
//! response passes through the key normalizer before it is returned.

use serde_json::Value;

use crate::config::{ClientConfig, Resource};
use crate::error::{Error, Result};
use crate::resource::ResourceHandle;

/// Client for an InEngine.NET scheduler API.
///
/// Construction validates that every logical resource resolves to a
/// non-empty endpoint segment; no network traffic happens until an
/// operation is called. The configuration is snapshotted here, so later
/// changes to the [`ClientConfig`] it was built from are not seen.
pub struct InEngineClient {
    cron_triggers: ResourceHandle,
    simple_triggers: ResourceHandle,
    time_zones: ResourceHandle,
    job_types: ResourceHandle,
    health_status: ResourceHandle,
}

impl InEngineClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::new();
        let bind = |resource: Resource| -> Result<ResourceHandle> {
            let segment = config.endpoint_names().segment(resource)?;
            Ok(ResourceHandle::bind(
                http.clone(),
                config.api_url(),
                segment,
                config.actions().clone(),
            ))
        };

        Ok(Self {
            cron_triggers: bind(Resource::CronTrigger)?,
            simple_triggers: bind(Resource::SimpleTrigger)?,
            time_zones: bind(Resource::TimeZone)?,
            job_types: bind(Resource::JobType)?,
            health_status: bind(Resource::HealthStatus)?,
        })
    }

    /// Query for the list of cron triggers.
    pub async fn list_cron_triggers(&self) -> Result<Vec<Value>> {
        self.cron_triggers.query().await
    }

    /// Query for the list of simple triggers.
    pub async fn list_simple_triggers(&self) -> Result<Vec<Value>> {
        self.simple_triggers.query().await
    }

    /// Query for the list of available time zones.
    pub async fn list_time_zones(&self) -> Result<Vec<Value>> {
        self.time_zones.query().await
    }

    /// Query for the list of available job types.
    pub async fn list_job_types(&self) -> Result<Vec<Value>> {
        self.job_types.query().await
    }

    /// Get the server's health status.
    pub async fn get_health_status(&self) -> Result<Value> {
        self.health_status.get(None).await
    }

    /// Delete a cron trigger, addressed by the record's id.
    pub async fn delete_cron_trigger(&self, trigger: &Value) -> Result<Value> {
        self.cron_triggers.remove(&record_id(trigger)?).await
    }

    /// Delete a simple trigger, addressed by the record's id.
    pub async fn delete_simple_trigger(&self, trigger: &Value) -> Result<Value> {
        self.simple_triggers.remove(&record_id(trigger)?).await
    }

    /// Toggle a cron trigger's paused state.
    ///
    /// This is a raw state flip, not a guarded pause: calling it on an
    /// already-paused trigger resumes it. Callers that need idempotent
    /// pause semantics must track the current state themselves.
    pub async fn pause_cron_trigger(&self, trigger: &Value) -> Result<Value> {
        pause_trigger(&self.cron_triggers, trigger).await
    }

    /// Toggle a simple trigger's paused state. See
    /// [`pause_cron_trigger`](Self::pause_cron_trigger) for the toggle
    /// semantics.
    pub async fn pause_simple_trigger(&self, trigger: &Value) -> Result<Value> {
        pause_trigger(&self.simple_triggers, trigger).await
    }
}

/// Shared toggle: copy the record, flip its state field's truthiness to
/// the opposite value expressed as 0/1, and update by the record's id.
async fn pause_trigger(handle: &ResourceHandle, trigger: &Value) -> Result<Value> {
    let id = record_id(trigger)?;
    let mut request = trigger.clone();
    flip_state(&mut request)?;
    handle.update(&id, &request).await
}

/// Identifier of a record. Responses are normalized to camelCase, so `id`
/// is the expected spelling; the Pascal wire spelling `Id` is accepted for
/// records that have not passed through the normalizer.
fn record_id(record: &Value) -> Result<String> {
    let id = record
        .get("id")
        .or_else(|| record.get("Id"))
        .ok_or(Error::MissingField { field: "id" })?;
    Ok(match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Flip the record's state flag in place, writing the new 0/1 value back
/// under whichever key spelling the record uses.
fn flip_state(record: &mut Value) -> Result<()> {
    let map = record
        .as_object_mut()
        .ok_or(Error::MissingField { field: "stateId" })?;
    let key = ["stateId", "StateId"]
        .into_iter()
        .find(|k| map.contains_key(*k))
        .ok_or(Error::MissingField { field: "stateId" })?;
    let flipped = if truthy(&map[key]) { 0 } else { 1 };
    map.insert(key.to_string(), Value::from(flipped));
    Ok(())
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
