use log::{error, info};
use serde_json::{Map, Value};

use crate::engine::transport::{ApiRequest, Method, RawResponse, Transport};
use crate::error::{ApiResult, RemoteApiError};

pub const DEFAULT_BASE_URL: &str = "https://challenge.crossmint.io/api/";

/// Megaverse API session: every call carries the candidate id and goes
/// through the same response validation.
pub struct MegaverseClient<T> {
    transport: T,
    base_url: String,
    candidate_id: String,
}

impl<T: Transport> MegaverseClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, candidate_id: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            candidate_id: candidate_id.into(),
        }
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    pub fn post(&self, path: &str, data: Map<String, Value>) -> ApiResult<Value> {
        self.dispatch(Method::Post, path, data)
    }

    pub fn get(&self, path: &str, data: Map<String, Value>) -> ApiResult<Value> {
        self.dispatch(Method::Get, path, data)
    }

    pub fn delete(&self, path: &str, data: Map<String, Value>) -> ApiResult<Value> {
        self.dispatch(Method::Delete, path, data)
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn dispatch(&self, method: Method, path: &str, data: Map<String, Value>) -> ApiResult<Value> {
        info!("{} {} with data {}", method, path, Value::Object(data.clone()));

        let mut payload = data;
        payload.insert(
            "candidateId".into(),
            Value::String(self.candidate_id.clone()),
        );

        let request = ApiRequest {
            method,
            url: self.url_for(path),
            payload,
        };

        let response = self.transport.send(&request)?;
        parse_response(response)
    }
}

/// Status must be 2xx and the body must not carry a truthy `error`.
pub fn parse_response(response: RawResponse) -> ApiResult<Value> {
    let success = (200..300).contains(&response.status);

    let body = if response.body.trim().is_empty() {
        Value::Object(Map::new())
    } else {
        match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => body,
            // Error pages are often plain text or HTML; keep them readable.
            Err(_) if !success => Value::String(response.body.clone()),
            Err(source) => {
                return Err(RemoteApiError::Decode {
                    url: response.url,
                    source,
                })
            }
        }
    };

    if !success || body.get("error").is_some_and(is_truthy) {
        error!("{}", "*".repeat(100));
        error!("ERROR RESPONSE from {}: {}", response.url, body);
        error!("{}", "*".repeat(100));
        return Err(RemoteApiError::Rejected {
            status: response.status,
            url: response.url,
            body,
        });
    }

    info!("Response of {}: {}", response.url, body);
    Ok(body)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
