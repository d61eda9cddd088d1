/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v18::errors::InstagramError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("instagram-rust-client/", env!("CARGO_PKG_VERSION"));

/// Connect/response deadline configured once at construction
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw response handed back by a [`Transport`]
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

/// A request that failed at the transport layer. A non-2xx status carries the
/// response it arrived with so the error payload can still be classified;
/// timeouts and connection errors carry only a message.
#[derive(Debug)]
pub struct TransportFailure {
    pub message: String,
    pub response: Option<TransportResponse>,
}

/// The injectable HTTP capability the client dispatches through.
///
/// The client builds the full URL (query string included) before handing it
/// off, so implementations only execute the round trip.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: &str,
        url: &url::Url,
    ) -> Result<TransportResponse, TransportFailure>;
}

/// Default [`Transport`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    https_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, InstagramError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let https_client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { https_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: &str,
        url: &url::Url,
    ) -> Result<TransportResponse, TransportFailure> {
        let method = reqwest::Method::from_bytes(method.as_bytes()).map_err(|err| {
            TransportFailure {
                message: err.to_string(),
                response: None,
            }
        })?;
        let resp = self
            .https_client
            .request(method, url.clone())
            .send()
            .await
            .map_err(|err| TransportFailure {
                message: err.to_string(),
                response: None,
            })?;

        let status = resp.status();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = resp.text().await.map_err(|err| TransportFailure {
            message: err.to_string(),
            response: None,
        })?;

        let response = TransportResponse {
            status: status.as_u16(),
            body,
            headers,
        };
        if status.is_success() {
            Ok(response)
        } else {
            Err(TransportFailure {
                message: format!("HTTP status {status}"),
                response: Some(response),
            })
        }
    }
}
