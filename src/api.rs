//! Backend API access — one shared HTTP layer for every view.
//!
//! The backend is an opaque REST/JSON collaborator. Every call carries
//! `Authorization: Bearer <token>` when a token is present, decodes bodies
//! through the tolerant decoder, and maps failures into a fixed taxonomy:
//! transport, non-2xx status, malformed body, backend-signaled rejection.
//! No call is retried and no timeout is configured — a hung backend call
//! hangs the requesting view until the user abandons it.
//!
//! Views depend on the `ApiClient` trait; `HttpApiClient` is the real
//! implementation and `MockApiClient` serves the tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::decode::{self, DecodeError};

// ═══════════════════════════════════════════════════════════
// Error taxonomy
// ═══════════════════════════════════════════════════════════

/// Failure of a backend call, in the order a request can fail.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("Error del servidor (HTTP {status})")]
    Status { status: u16, body: String },
    /// The body was not JSON even after trailing-comma repair.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The backend answered 2xx but signaled a logical failure
    /// (`esCorrecto: false` or a missing expected field).
    #[error("{0}")]
    Rejected(String),
}

// ═══════════════════════════════════════════════════════════
// Envelope — {esCorrecto, mensaje, valor}
// ═══════════════════════════════════════════════════════════

/// The backend's standard response wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default, rename = "esCorrecto")]
    pub es_correcto: bool,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub valor: Option<Value>,
}

impl Envelope {
    /// Interpret a decoded body as an envelope.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        serde_json::from_value(value)
            .map_err(|e| ApiError::Decode(DecodeError::Shape(e.to_string())))
    }

    /// `valor` as a typed list, requiring `esCorrecto` and an array.
    ///
    /// `missing_msg` is the view's own "no data or invalid response"
    /// message, shown when the backend returns success-without-list.
    pub fn valor_list<T: DeserializeOwned>(self, missing_msg: &str) -> Result<Vec<T>, ApiError> {
        if !self.es_correcto {
            let msg = self.mensaje.unwrap_or_else(|| missing_msg.to_string());
            return Err(ApiError::Rejected(msg));
        }
        match self.valor {
            Some(Value::Array(items)) => serde_json::from_value(Value::Array(items))
                .map_err(|e| ApiError::Decode(DecodeError::Shape(e.to_string()))),
            _ => Err(ApiError::Rejected(missing_msg.to_string())),
        }
    }

    /// `valor` as a typed list if it is an array, else empty.
    ///
    /// Some admin screens render whatever arrived without checking
    /// `esCorrecto`; this mirrors that leniency.
    pub fn valor_or_empty<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiError> {
        match self.valor {
            Some(Value::Array(items)) => serde_json::from_value(Value::Array(items))
                .map_err(|e| ApiError::Decode(DecodeError::Shape(e.to_string()))),
            _ => Ok(Vec::new()),
        }
    }

    /// For mutations: success yields the optional backend message,
    /// rejection carries the backend message or `fallback`.
    pub fn expect_ok(self, fallback: &str) -> Result<Option<String>, ApiError> {
        if self.es_correcto {
            Ok(self.mensaje)
        } else {
            let msg = self.mensaje.unwrap_or_else(|| fallback.to_string());
            Err(ApiError::Rejected(msg))
        }
    }
}

// ═══════════════════════════════════════════════════════════
// ApiClient trait
// ═══════════════════════════════════════════════════════════

/// Minimal HTTP surface the views need.
pub trait ApiClient: Send + Sync {
    fn get(&self, url: &str) -> Result<Value, ApiError>;
    fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
    fn put(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
    /// PUT without a body (password recovery endpoint).
    fn put_empty(&self, url: &str) -> Result<Value, ApiError>;
}

// ═══════════════════════════════════════════════════════════
// HttpApiClient — reqwest implementation
// ═══════════════════════════════════════════════════════════

/// Real client over `reqwest::blocking`.
pub struct HttpApiClient {
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl HttpApiClient {
    /// Build a client that attaches `token` as a bearer header when set.
    pub fn new(token: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self { client, token }
    }

    fn execute(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut request = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                ApiError::Transport(
                    "No se pudo conectar con el servidor. Verifica tu conexión a internet"
                        .to_string(),
                )
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(decode::parse_tolerant(&text)?)
    }
}

impl ApiClient for HttpApiClient {
    fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.execute(reqwest::Method::GET, url, None)
    }

    fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(reqwest::Method::POST, url, Some(body))
    }

    fn put(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(reqwest::Method::PUT, url, Some(body))
    }

    fn put_empty(&self, url: &str) -> Result<Value, ApiError> {
        self.execute(reqwest::Method::PUT, url, None)
    }
}

// ═══════════════════════════════════════════════════════════
// MockApiClient — programmed responses for tests
// ═══════════════════════════════════════════════════════════

/// One programmed outcome for the mock client.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Ok(Value),
    Status(u16, String),
    Transport(String),
}

/// A request the mock client saw, for asserting outgoing bodies.
#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: String,
    pub url: String,
    pub body: Option<Value>,
}

/// Mock client — responses keyed by `"METHOD url"`, consumed FIFO.
#[derive(Default)]
pub struct MockApiClient {
    responses: Mutex<HashMap<String, Vec<MockOutcome>>>,
    requests: Mutex<Vec<MockRequest>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response for `method url`.
    pub fn with_response(self, method: &str, url: &str, value: Value) -> Self {
        self.push(method, url, MockOutcome::Ok(value));
        self
    }

    /// Queue a non-2xx response for `method url`.
    pub fn with_status(self, method: &str, url: &str, status: u16, body: &str) -> Self {
        self.push(method, url, MockOutcome::Status(status, body.to_string()));
        self
    }

    /// Queue a transport failure for `method url`.
    pub fn with_transport_error(self, method: &str, url: &str, message: &str) -> Self {
        self.push(method, url, MockOutcome::Transport(message.to_string()));
        self
    }

    fn push(&self, method: &str, url: &str, outcome: MockOutcome) {
        self.responses
            .lock()
            .expect("mock lock")
            .entry(format!("{method} {url}"))
            .or_default()
            .push(outcome);
    }

    fn dispatch(&self, method: &str, url: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.requests.lock().expect("mock lock").push(MockRequest {
            method: method.to_string(),
            url: url.to_string(),
            body: body.cloned(),
        });

        let key = format!("{method} {url}");
        let outcome = {
            let mut responses = self.responses.lock().expect("mock lock");
            let queue = responses.get_mut(&key);
            match queue {
                Some(queue) if !queue.is_empty() => queue.remove(0),
                _ => return Err(ApiError::Transport(format!("sin respuesta simulada para {key}"))),
            }
        };

        match outcome {
            MockOutcome::Ok(value) => Ok(value),
            MockOutcome::Status(status, body) => Err(ApiError::Status { status, body }),
            MockOutcome::Transport(message) => Err(ApiError::Transport(message)),
        }
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().expect("mock lock").clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<MockRequest> {
        self.requests.lock().expect("mock lock").last().cloned()
    }
}

impl ApiClient for MockApiClient {
    fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.dispatch("GET", url, None)
    }

    fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.dispatch("POST", url, Some(body))
    }

    fn put(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.dispatch("PUT", url, Some(body))
    }

    fn put_empty(&self, url: &str) -> Result<Value, ApiError> {
        self.dispatch("PUT", url, None)
    }
}
