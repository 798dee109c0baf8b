#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use fomo_core::contact::ContactForm;
use fomo_relay::{ContactRelay, RelayConfig, RelayError, RelayReceipt};
use fomo_web::config::{LogFormat, ServerConfig};
use fomo_web::router::build_app_router;
use fomo_web::state::AppState;

/// How the stub relay answers every submission.
#[derive(Debug, Clone, Copy)]
pub enum StubOutcome {
    Success,
    Rejected,
    Network,
    Unreadable,
}

/// In-process stand-in for the form relay that records what it was sent.
pub struct StubRelay {
    outcome: StubOutcome,
    received: Mutex<Vec<ContactForm>>,
}

impl StubRelay {
    pub fn new(outcome: StubOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            received: Mutex::new(Vec::new()),
        })
    }

    /// Every form submitted so far, in order.
    pub fn received(&self) -> Vec<ContactForm> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRelay for StubRelay {
    async fn submit(&self, form: &ContactForm) -> Result<RelayReceipt, RelayError> {
        self.received.lock().unwrap().push(form.clone());
        match self.outcome {
            StubOutcome::Success => Ok(RelayReceipt {
                message: Some("Email sent successfully!".into()),
            }),
            StubOutcome::Rejected => Err(RelayError::Rejected("Invalid access key".into())),
            StubOutcome::Network => {
                let err = reqwest::Client::new().get("://unreachable").build().unwrap_err();
                Err(RelayError::Network(err))
            }
            StubOutcome::Unreadable => Err(RelayError::Unreadable(
                "HTTP 502 with a non-JSON body".into(),
            )),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Static files are served from the repository's `static/` directory and
/// the relay settings point nowhere; tests swap in a [`StubRelay`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../static").to_string(),
        log_format: LogFormat::Pretty,
        relay: RelayConfig {
            endpoint: "http://127.0.0.1:9/submit".to_string(),
            access_key: "test-key".to_string(),
            timeout: Duration::from_secs(1),
        },
    }
}

/// Build the full application router, with the given relay, through the
/// same [`build_app_router`] the binary uses.
pub fn build_test_app(relay: Arc<StubRelay>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        relay,
    };
    build_app_router(state, &config)
}

/// App whose relay accepts everything.
pub fn app() -> Router {
    build_test_app(StubRelay::new(StubOutcome::Success))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

/// POST an arbitrary body with the given content type.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
