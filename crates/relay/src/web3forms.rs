//! Web3Forms-compatible relay client.
//!
//! [`Web3FormsRelay`] sends the form fields plus the site's access key as a
//! single JSON object and reads back `{ "success": ..., "message": ... }`.
//!
//! The reply is judged loosely: any truthy `success` (`true`, `1`, `"true"`)
//! counts as accepted. A reply that is not JSON at all, or is JSON `null`,
//! is treated like a failed exchange rather than a rejection.

use std::time::Duration;

use async_trait::async_trait;
use fomo_core::contact::ContactForm;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;

use crate::{ContactRelay, RelayError, RelayReceipt};

/// Default public relay endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Default timeout for a single relay request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Relay endpoint and credentials.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Where submissions are POSTed.
    pub endpoint: String,
    /// Static access key identifying the site to the relay.
    pub access_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl RelayConfig {
    /// Load relay configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                            |
    /// |---------------------------|------------------------------------|
    /// | `FORM_RELAY_URL`          | `https://api.web3forms.com/submit` |
    /// | `FORM_RELAY_ACCESS_KEY`   | empty                              |
    /// | `FORM_RELAY_TIMEOUT_SECS` | `10`                               |
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] with an explicit variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup("FORM_RELAY_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        let access_key = lookup("FORM_RELAY_ACCESS_KEY").unwrap_or_default();

        let timeout_secs: u64 = lookup("FORM_RELAY_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("FORM_RELAY_TIMEOUT_SECS must be a valid u64");

        Self {
            endpoint,
            access_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RelayPayload<'a> {
    #[serde(flatten)]
    form: &'a ContactForm,
    access_key: &'a str,
}

/// Truthiness of the relay's `success` field, as a browser would judge it.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn reply_message(reply: &Value) -> Option<String> {
    reply.get("message").and_then(Value::as_str).map(str::to_string)
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Delivers contact forms to a Web3Forms-style endpoint.
pub struct Web3FormsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl Web3FormsRelay {
    /// Create a relay client with a pre-configured HTTP client.
    pub fn new(config: RelayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl ContactRelay for Web3FormsRelay {
    async fn submit(&self, form: &ContactForm) -> Result<RelayReceipt, RelayError> {
        let payload = RelayPayload {
            form,
            access_key: &self.config.access_key,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // The relay reports its verdict in the body; the HTTP status alone
        // is not trusted either way.
        let reply: Value = serde_json::from_str(&body).map_err(|err| {
            RelayError::Unreadable(format!("HTTP {status} with a non-JSON body: {err}"))
        })?;
        if reply.is_null() {
            return Err(RelayError::Unreadable(format!("HTTP {status} with a null body")));
        }

        if !is_truthy(reply.get("success")) {
            let reason = reply_message(&reply)
                .unwrap_or_else(|| format!("Relay returned HTTP {status} without success"));
            tracing::warn!(%status, reason = %reason, "Form relay rejected submission");
            return Err(RelayError::Rejected(reason));
        }

        tracing::debug!(%status, "Form relay accepted submission");

        Ok(RelayReceipt {
            message: reply_message(&reply),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fomo_core::contact::ServiceKind;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn config_defaults() {
        let config = RelayConfig::from_vars(vars(&[]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.access_key, "");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn config_overrides() {
        let config = RelayConfig::from_vars(vars(&[
            ("FORM_RELAY_URL", "http://127.0.0.1:9000/submit"),
            ("FORM_RELAY_ACCESS_KEY", "key-123"),
            ("FORM_RELAY_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/submit");
        assert_eq!(config.access_key, "key-123");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    #[should_panic(expected = "FORM_RELAY_TIMEOUT_SECS must be a valid u64")]
    fn config_rejects_bad_timeout() {
        RelayConfig::from_vars(vars(&[("FORM_RELAY_TIMEOUT_SECS", "soon")]));
    }

    #[test]
    fn payload_is_flat_json_with_access_key() {
        let form = ContactForm {
            name: "Riya".into(),
            email: "riya@example.com".into(),
            brand: String::new(),
            service: ServiceKind::CameraWork,
            message: "Shoot next week?".into(),
        };
        let payload = RelayPayload {
            form: &form,
            access_key: "key-123",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Riya",
                "email": "riya@example.com",
                "brand": "",
                "service": "Camera Work",
                "message": "Shoot next week?",
                "access_key": "key-123",
            })
        );
    }

    #[test]
    fn success_flag_uses_truthiness() {
        use serde_json::json;

        for truthy in [json!(true), json!(1), json!("true"), json!("false"), json!({})] {
            assert!(is_truthy(Some(&truthy)), "{truthy} should count as success");
        }
        for falsy in [json!(false), json!(0), json!(""), Value::Null] {
            assert!(!is_truthy(Some(&falsy)), "{falsy} should not count as success");
        }
        assert!(!is_truthy(None));
    }

    #[test]
    fn message_only_read_from_strings() {
        use serde_json::json;

        assert_eq!(reply_message(&json!({"message": "hi"})).as_deref(), Some("hi"));
        assert_eq!(reply_message(&json!({"message": 5})), None);
        assert_eq!(reply_message(&json!([1, 2])), None);
    }
}
