/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum InstagramError {
    /// Upstream rejected the credential (error code 190 or an "access token"
    /// message). Never retried here; callers decide whether to re-authenticate.
    #[error("Invalid or expired access token")]
    InvalidAccessToken,

    /// Any other in-band error envelope from the API. The code is the
    /// upstream error code, or 0/the HTTP status when the payload omits one.
    #[error("Instagram API Error: {message}")]
    Api { message: String, code: u64 },

    /// Transport-level failure with no classifiable error envelope
    #[error("Network Error: {0}")]
    Network(String),

    /// A success payload did not match the expected record shape
    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),
}
