//! Test doubles for the weather tools: an in-process [`WeatherSource`] and a
//! loopback HTTP server standing in for the upstream API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rmcp::model::{CallToolResult, RawContent};
use tokio::net::TcpListener;

use super::client::{Location, UpstreamWeather, WeatherClient, WeatherSource};
use crate::domains::tools::ToolError;

/// Upstream payload used across scenarios.
pub const TOKYO_BODY: &str = r#"{"coord":{"lon":139.6917,"lat":35.6895},"name":"Tokyo","main":{"temp":15.2,"humidity":60,"pressure":1012},"weather":[{"id":800,"main":"Clear","description":"晴れ"}],"wind":{"speed":3.5,"deg":180},"cod":200}"#;

pub fn sample_weather() -> UpstreamWeather {
    serde_json::from_str(TOKYO_BODY).unwrap()
}

/// Text of the single content item of a tool result.
pub fn result_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}

/// Canned [`WeatherSource`] that records the locations it is asked for.
pub struct FakeSource {
    reply: Option<UpstreamWeather>,
    calls: Mutex<Vec<Location>>,
}

impl FakeSource {
    /// Answers every lookup with `weather`.
    pub fn answering(weather: UpstreamWeather) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(weather),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Fails every lookup with a 500 status.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Location> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherSource for FakeSource {
    async fn current(&self, location: &Location) -> Result<UpstreamWeather, ToolError> {
        self.calls.lock().unwrap().push(location.clone());
        self.reply.clone().ok_or(ToolError::UpstreamStatus(500))
    }
}

/// Upstream payloads each missing exactly one field the tools read, keyed by
/// the path of the dropped field.
pub fn bodies_missing_one_field() -> Vec<(&'static str, String)> {
    let cases: [(&'static str, fn(&mut serde_json::Value)); 5] = [
        ("name", |v| {
            v.as_object_mut().unwrap().remove("name");
        }),
        ("main.temp", |v| {
            v["main"].as_object_mut().unwrap().remove("temp");
        }),
        ("main.humidity", |v| {
            v["main"].as_object_mut().unwrap().remove("humidity");
        }),
        ("weather[0].description", |v| {
            v["weather"][0].as_object_mut().unwrap().remove("description");
        }),
        ("wind.speed", |v| {
            v["wind"].as_object_mut().unwrap().remove("speed");
        }),
    ];

    cases
        .into_iter()
        .map(|(field, remove_field)| {
            let mut body: serde_json::Value = serde_json::from_str(TOKYO_BODY).unwrap();
            remove_field(&mut body);
            (field, body.to_string())
        })
        .collect()
}

/// Loopback HTTP server answering every request the same way.
pub struct StubUpstream {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct StubState {
    reply: Option<(StatusCode, String)>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubUpstream {
    /// Reply to every request with `status` and a JSON `body`.
    pub async fn respond(status: u16, body: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        Self::start(Some((status, body.into()))).await
    }

    /// Accept requests but never answer.
    pub async fn hang() -> Self {
        Self::start(None).await
    }

    /// Request targets (path and query) received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    async fn start(reply: Option<(StatusCode, String)>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            requests: requests.clone(),
        };
        let app = Router::new().fallback(handle_request).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/data/2.5/weather", addr),
            requests,
        }
    }
}

async fn handle_request(State(state): State<StubState>, OriginalUri(uri): OriginalUri) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.requests.lock().unwrap().push(target);

    match state.reply {
        Some((status, body)) => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        None => std::future::pending().await,
    }
}

/// Client pointed at `upstream`, bypassing any system proxy, with a short
/// timeout so hanging upstreams fail fast.
pub fn stub_client(upstream: &StubUpstream) -> WeatherClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();
    WeatherClient::with_http(http, &upstream.url, Some("test-key".to_string())).unwrap()
}
