/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use async_trait::async_trait;
use instagram::v18::{Transport, TransportFailure, TransportResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted transport: hands back queued replies in order and records every
/// URL the client dispatched.
#[allow(dead_code)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<TransportResponse, TransportFailure>>>,
    requests: Mutex<Vec<(String, url::Url)>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push_ok(&self, body: &str) {
        self.push_response(200, body);
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse {
                status,
                body: body.to_string(),
                headers: Vec::new(),
            }));
    }

    /// Queues a failed round trip carrying the response it arrived with
    pub fn push_error_response(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TransportFailure {
                message: format!("HTTP status {status}"),
                response: Some(TransportResponse {
                    status,
                    body: body.to_string(),
                    headers: Vec::new(),
                }),
            }));
    }

    /// Queues a failure with no response attached (timeout, refused, ...)
    pub fn push_network_failure(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TransportFailure {
                message: message.to_string(),
                response: None,
            }));
    }

    pub fn last_url(&self) -> url::Url {
        self.requests.lock().unwrap().last().unwrap().1.clone()
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        self.last_url()
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: &str,
        url: &url::Url,
    ) -> Result<TransportResponse, TransportFailure> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), url.clone()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no reply queued for request")
    }
}

#[allow(dead_code)]
pub fn get_live_access_token() -> anyhow::Result<String> {
    Ok(std::env::var("INSTAGRAM_ACCESS_TOKEN")?)
}
