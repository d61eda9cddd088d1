/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v18::parsers::from_id_value;
use serde::Deserialize;

/// Expected response from a token refresh request.
///
/// The refresh extends the token's lifetime remotely but the client does NOT
/// swap its held credential; call
/// [`crate::v18::Client::set_access_token`] with the returned value yourself.
#[derive(Deserialize, Debug, Clone)]
pub struct RefreshedToken {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    /// Seconds until the refreshed token expires
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Expected response from a token metadata request.
///
/// The API is loose about which fields appear here, so everything is optional
/// and anything unrecognized lands in `extra` rather than being dropped.
#[derive(Deserialize, Debug, Clone)]
pub struct TokenInfo {
    #[serde(default, deserialize_with = "from_id_value")]
    pub app_id: Option<String>,

    #[serde(default)]
    pub application: Option<String>,

    /// Unix timestamp the token expires at
    #[serde(default)]
    pub expires_at: Option<i64>,

    /// Seconds until the token expires
    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
