//! Bound REST resource handles
//!
//! A [`ResourceHandle`] is the combination of a base URL, an endpoint path
//! segment and an action table, built once per logical resource and reused
//! for the client's lifetime. Every verb funnels through one dispatch that
//! issues the HTTP request and pipes the decoded body through the
//! normalizer.

use serde_json::Value;
use tracing::{debug, trace, warn};

use super::actions::{ActionTable, Verb};
use super::normalize::{json_type, normalize};
use crate::error::{Error, Result};

/// A resource handle bound to `{base_url}/{segment}`, addressing single
/// entities as `{base_url}/{segment}/{id}`.
///
/// Requests have no retries, no timeout and no cancellation; a call either
/// resolves, errors, or never settles if the transport never responds.
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    http: reqwest::Client,
    url: String,
    actions: ActionTable,
}

impl ResourceHandle {
    /// Bind a handle to one endpoint. This is the factory: the URL template
    /// and action table are fixed here and never re-read from configuration.
    pub fn bind(
        http: reqwest::Client,
        base_url: &str,
        segment: &str,
        actions: ActionTable,
    ) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            http,
            url: format!("{}/{}", base, segment),
            actions,
        }
    }

    /// Fetch a single entity. Some endpoints (health status) are addressed
    /// without an identifier.
    pub async fn get(&self, id: Option<&str>) -> Result<Value> {
        self.call(Verb::Get, id, None).await
    }

    /// Fetch the collection.
    pub async fn query(&self) -> Result<Vec<Value>> {
        match self.call(Verb::Query, None, None).await? {
            Value::Array(items) => Ok(items),
            other => Err(Error::NotAList {
                got: json_type(&other),
            }),
        }
    }

    /// Create an entity.
    pub async fn save(&self, body: &Value) -> Result<Value> {
        self.call(Verb::Save, None, Some(body)).await
    }

    /// Replace the entity addressed by `id`.
    pub async fn update(&self, id: &str, body: &Value) -> Result<Value> {
        self.call(Verb::Update, Some(id), Some(body)).await
    }

    /// Delete the entity addressed by `id`.
    pub async fn remove(&self, id: &str) -> Result<Value> {
        self.call(Verb::Remove, Some(id), None).await
    }

    async fn call(&self, verb: Verb, id: Option<&str>, body: Option<&Value>) -> Result<Value> {
        let action = self
            .actions
            .descriptor(verb)
            .ok_or(Error::MissingAction(verb))?;

        let url = match id {
            Some(id) => format!("{}/{}", self.url, id),
            None => self.url.clone(),
        };
        debug!("{} {}", action.method, url);

        let mut request = match action.method.as_str() {
            "GET" => self.http.get(&url),
            "POST" => self.http.post(&url),
            "PUT" => self.http.put(&url),
            "DELETE" => self.http.delete(&url),
            "PATCH" => self.http.patch(&url),
            other => return Err(Error::UnsupportedMethod(other.to_string())),
        };

        if let Some(body) = body {
            trace!("request body: {}", body);
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("response status: {}", status);
        trace!("response body (truncated): {}", truncate_log(&text, 2000));

        if !status.is_success() {
            warn!(
                "request failed: status={}, body={}",
                status,
                truncate_log(&text, 500)
            );
            return Err(Error::Status { status, body: text });
        }

        let decoded: Value = serde_json::from_str(&text)?;
        let result = normalize(decoded);

        if action.is_list && !result.is_array() {
            return Err(Error::NotAList {
                got: json_type(&result),
            });
        }

        Ok(result)
    }
}

/// Cap a body for logging without cutting inside a multibyte character.
fn truncate_log(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ActionDescriptor;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn handle_for(server: &MockServer, segment: &str) -> ResourceHandle {
        ResourceHandle::bind(
            reqwest::Client::new(),
            &server.uri(),
            segment,
            ActionTable::default(),
        )
    }

    #[tokio::test]
    async fn test_get_normalizes_response_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/CronTrigger/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Id": 5,
                "Name": "Nightly",
                "JobType": {"TypeName": "Backup"}
            })))
            .mount(&server)
            .await;

        let handle = handle_for(&server, "CronTrigger");
        let trigger = handle.get(Some("5")).await.unwrap();
        assert_eq!(
            trigger,
            json!({"id": 5, "name": "Nightly", "jobType": {"typeName": "Backup"}})
        );
    }

    #[tokio::test]
    async fn test_query_returns_items_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/TimeZone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"Id": "UTC"},
                {"Id": "Europe/Berlin"}
            ])))
            .mount(&server)
            .await;

        let handle = handle_for(&server, "TimeZone");
        let zones = handle.query().await.unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0]["id"], "UTC");
        assert_eq!(zones[1]["id"], "Europe/Berlin");
    }

    #[tokio::test]
    async fn test_query_rejects_non_array_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/JobType"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Oops": true})))
            .mount(&server)
            .await;

        let handle = handle_for(&server, "JobType");
        let err = handle.query().await.unwrap_err();
        assert!(matches!(err, Error::NotAList { got: "an object" }));
    }

    #[tokio::test]
    async fn test_save_posts_to_collection_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/CronTrigger"))
            .and(body_json(json!({"name": "Nightly", "cronExpression": "0 2 * * *"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Id": 11,
                "Name": "Nightly",
                "CronExpression": "0 2 * * *"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let handle = handle_for(&server, "CronTrigger");
        let created = handle
            .save(&json!({"name": "Nightly", "cronExpression": "0 2 * * *"}))
            .await
            .unwrap();
        assert_eq!(created["id"], 11);
    }

    #[tokio::test]
    async fn test_update_sends_body_to_id_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/SimpleTrigger/3"))
            .and(body_json(json!({"id": 3, "name": "Renamed"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"Id": 3, "Name": "Renamed"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let handle = handle_for(&server, "SimpleTrigger");
        let updated = handle
            .update("3", &json!({"id": 3, "name": "Renamed"}))
            .await
            .unwrap();
        assert_eq!(updated["name"], "Renamed");
    }

    #[tokio::test]
    async fn test_non_success_status_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/CronTrigger/9"))
            .respond_with(ResponseTemplate::new(500).set_body_string("scheduler down"))
            .mount(&server)
            .await;

        let handle = handle_for(&server, "CronTrigger");
        match handle.remove("9").await.unwrap_err() {
            Error::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "scheduler down");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_truncate_log_respects_char_boundaries() {
        assert_eq!(truncate_log("short", 500), "short");
        assert_eq!(truncate_log("abcdef", 3), "abc");
        // 'é' is two bytes; a cut landing inside it backs up to the boundary
        let body = format!("{}é", "a".repeat(499));
        assert_eq!(truncate_log(&body, 500), "a".repeat(499));
    }

    #[tokio::test]
    async fn test_failure_logging_survives_multibyte_body() {
        // Subscriber active so the warn/trace sites actually format the body
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .finish(),
        );

        let server = MockServer::start().await;
        let body = format!("{}é", "a".repeat(499));
        Mock::given(method("GET"))
            .and(path("/CronTrigger/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string(body.clone()))
            .mount(&server)
            .await;

        let handle = handle_for(&server, "CronTrigger");
        match handle.get(Some("1")).await.unwrap_err() {
            Error::Status { status, body: got } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(got, body);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/HealthStatus"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let handle = handle_for(&server, "HealthStatus");
        let err = handle.get(None).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_unknown_method_in_override_is_rejected() {
        let server = MockServer::start().await;
        let mut actions = ActionTable::default();
        actions.set(Verb::Get, ActionDescriptor::new("TRACE", false));
        let handle =
            ResourceHandle::bind(reqwest::Client::new(), &server.uri(), "CronTrigger", actions);

        let err = handle.get(Some("1")).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(m) if m == "TRACE"));
    }
}
