/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v18::errors::InstagramError;
use crate::v18::transport::{HttpTransport, Transport, TransportFailure};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Root Instagram Graph API
pub const API_ORIGIN: &str = "https://graph.instagram.com";

/// Graph API version this module targets. Paths are unversioned on this host;
/// the constant documents what the field selections were written against.
pub const API_VERSION: &str = "v18.0";

/// Upstream error code meaning the access token was rejected
const INVALID_TOKEN_CODE: u64 = 190;

/// This can be filter fields as well as other parameters the specific API expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Directly communicates with the API.
///
/// Owns the bearer credential and the injected transport. The credential is a
/// plain replaceable field; callers sharing a client across tasks must
/// serialize [`ApiClient::set_access_token`] against in-flight requests.
#[derive(Clone)]
pub struct ApiClient {
    access_token: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a client instance over the default reqwest-backed transport
    pub fn new(access_token: &str) -> Result<Self, InstagramError> {
        Ok(Self::with_transport(
            access_token,
            Arc::new(HttpTransport::new()?),
        ))
    }

    /// Creates a client instance dispatching through the provided transport
    pub fn with_transport(access_token: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            access_token: access_token.into(),
            transport,
        }
    }

    /// Replaces the held access token wholesale; takes effect on the next call
    pub fn set_access_token(&mut self, access_token: &str) {
        self.access_token = access_token.into();
    }

    /// Returns the currently held access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Performs a get request against the API, appending the access token,
    /// and returns the decoded JSON payload.
    pub async fn get(
        &self,
        path: &str,
        params: &ApiParams<'_>,
    ) -> Result<serde_json::Value, InstagramError> {
        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push(("access_token", self.access_token.as_str()));

        let req_url = url::Url::parse(API_ORIGIN)?.join(path)?;
        let req_url = url::Url::parse_with_params(req_url.as_str(), &query)?;

        log::debug!("GET {}", path);
        match self.transport.send("GET", &req_url).await {
            Ok(resp) => parse_body(&resp.body),
            Err(failure) => Err(classify_failure(failure)),
        }
    }

    /// Performs a get request and decodes the payload into the expected record
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ApiParams<'_>,
    ) -> Result<T, InstagramError> {
        let payload = self.get(path, params).await?;
        Ok(serde_json::from_value(payload)?)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("access_token", &"xxx")
            .finish()
    }
}

// In-band error envelope: `{"error": {"message": ..., "code": ...}}`
#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    message: Option<String>,
    code: Option<u64>,
}

/// Single classification rule shared by the payload-level and transport-level
/// paths. Code 190 or an "access token" message means the credential is bad;
/// anything else is surfaced with the upstream message and code, the code
/// defaulting to `fallback_code` when the payload omits one.
fn classify(envelope: &ErrorEnvelope, fallback_code: u64) -> InstagramError {
    let message = envelope
        .message
        .clone()
        .unwrap_or_else(|| "Unknown error".to_string());
    let code = envelope.code.unwrap_or(fallback_code);

    if code == INVALID_TOKEN_CODE || message.to_lowercase().contains("access token") {
        return InstagramError::InvalidAccessToken;
    }
    InstagramError::Api { message, code }
}

// Decodes a 2xx body. Unparseable JSON and in-band error envelopes both
// surface as errors; anything else is returned verbatim.
fn parse_body(body: &str) -> Result<serde_json::Value, InstagramError> {
    let payload: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(err) => {
            log::debug!("unparseable response body: {:?}", err);
            return Err(InstagramError::Api {
                message: "Invalid JSON response".to_string(),
                code: 0,
            });
        }
    };
    if let Some(envelope) = error_envelope(&payload) {
        return Err(classify(&envelope, 0));
    }
    Ok(payload)
}

// Classifies a transport-level failure. An attached response whose body is an
// API error envelope gets the shared classification rule with the HTTP status
// as the fallback code; everything else is a plain network error.
fn classify_failure(failure: TransportFailure) -> InstagramError {
    if let Some(resp) = &failure.response {
        if let Ok(payload) = serde_json::from_str::<serde_json::Value>(&resp.body) {
            if let Some(envelope) = error_envelope(&payload) {
                return classify(&envelope, resp.status as u64);
            }
        }
    }
    InstagramError::Network(failure.message)
}

fn error_envelope(payload: &serde_json::Value) -> Option<ErrorEnvelope> {
    payload
        .get("error")
        .filter(|e| e.is_object())
        .and_then(|e| serde_json::from_value(e.clone()).ok())
}
