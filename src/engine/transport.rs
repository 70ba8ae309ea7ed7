use std::fmt;
use std::time::Duration;

use log::info;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::{Map, Value};

use crate::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

/// A fully resolved call: absolute URL plus payload (JSON body for
/// POST/DELETE, query string for GET).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub payload: Map<String, Value>,
}

/// Whatever came back, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

impl RawResponse {
    pub fn ok(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: 200,
            url: url.into(),
            body: body.into(),
        }
    }
}

pub trait Transport {
    fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        (**self).send(request)
    }
}

/// Blocking reqwest session shared by every call of a run.
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let builder = match request.method {
            Method::Get => {
                let query: Vec<(&str, String)> = request
                    .payload
                    .iter()
                    .map(|(key, value)| (key.as_str(), query_value(value)))
                    .collect();
                self.http.get(&request.url).query(&query)
            }
            Method::Post => self.http.post(&request.url).json(&request.payload),
            Method::Delete => self.http.delete(&request.url).json(&request.payload),
        };

        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let url = resp.url().to_string();
        let body = resp.text()?;

        Ok(RawResponse { status, url, body })
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Lets reads through, answers writes locally so nothing on the canvas changes.
pub struct DryRun<T> {
    inner: T,
}

impl<T: Transport> DryRun<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Transport> Transport for DryRun<T> {
    fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        if request.method == Method::Get {
            return self.inner.send(request);
        }

        info!(
            "[dry-run] {} {} {}",
            request.method,
            request.url,
            Value::Object(request.payload.clone())
        );
        Ok(RawResponse::ok(request.url.clone(), "{}"))
    }
}
