/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v18::ApiClient;
use crate::v18::errors::InstagramError;
use crate::v18::media::{Media, MediaList};
use crate::v18::token::{RefreshedToken, TokenInfo};
use crate::v18::transport::Transport;
use crate::v18::user::UserProfile;
use std::sync::Arc;

// Field selections, one per operation, fixed at compile time
const PROFILE_FIELDS: &str = "id,username,account_type,media_count";
const MEDIA_FIELDS: &str =
    "id,caption,media_type,media_url,permalink,thumbnail_url,timestamp,username";
const MEDIA_DETAIL_FIELDS: &str = "id,caption,media_type,media_url,permalink,thumbnail_url,\
     timestamp,username,children{id,media_type,media_url,thumbnail_url}";

/// Default number of media items requested when the caller does not say
pub const MEDIA_LIMIT_DEFAULT: i64 = 25;

/// Upper bound the API enforces on a media page; larger requests are clamped
pub const MEDIA_LIMIT_MAX: i64 = 200;

/// High level client for the Graph API read endpoints.
///
/// ```rust,no_run
/// use instagram::v18::Client;
///
/// async fn profile(token: &str) -> anyhow::Result<()> {
///     let client = Client::new(token)?;
///     let profile = client.user_profile().await?;
///     println!("{profile}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: ApiClient,
}

impl Client {
    /// Creates a client over the default HTTPS transport
    pub fn new(access_token: &str) -> Result<Self, InstagramError> {
        Ok(Self {
            api_client: ApiClient::new(access_token)?,
        })
    }

    /// Creates a client dispatching through the provided transport
    pub fn with_transport(access_token: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_client: ApiClient::with_transport(access_token, transport),
        }
    }

    /// Returns profile information for the authenticated user
    pub async fn user_profile(&self) -> Result<UserProfile, InstagramError> {
        self.api_client
            .get_as("/me", &[("fields", PROFILE_FIELDS)])
            .await
    }

    /// Returns the most recent media for the authenticated user.
    ///
    /// `limit` defaults to [`MEDIA_LIMIT_DEFAULT`] and is silently clamped to
    /// [`MEDIA_LIMIT_MAX`]; non-positive values are passed through as-is and
    /// left for the API to reject.
    pub async fn user_media(&self, limit: Option<i64>) -> Result<MediaList, InstagramError> {
        let limit = limit.unwrap_or(MEDIA_LIMIT_DEFAULT).min(MEDIA_LIMIT_MAX);
        let limit = limit.to_string();
        self.api_client
            .get_as(
                "/me/media",
                &[("fields", MEDIA_FIELDS), ("limit", limit.as_str())],
            )
            .await
    }

    /// Returns details for the specified media id, including carousel
    /// children when the media is an album
    pub async fn media_details(&self, media_id: &str) -> Result<Media, InstagramError> {
        let path = format!("/{media_id}");
        self.api_client
            .get_as(&path, &[("fields", MEDIA_DETAIL_FIELDS)])
            .await
    }

    /// Extends the lifetime of the held long-lived token on the remote side.
    ///
    /// The held credential is NOT updated; pass the returned token to
    /// [`Client::set_access_token`] if you want subsequent calls to use it.
    pub async fn refresh_access_token(&self) -> Result<RefreshedToken, InstagramError> {
        self.api_client
            .get_as("/refresh_access_token", &[("grant_type", "ig_refresh_token")])
            .await
    }

    /// Returns metadata about the held access token
    pub async fn token_info(&self) -> Result<TokenInfo, InstagramError> {
        self.api_client.get_as("/access_token", &[]).await
    }

    /// Makes a raw request against an endpoint this client does not wrap.
    /// The access token is appended; the decoded JSON is returned verbatim.
    pub async fn get(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, InstagramError> {
        self.api_client.get(path, params).await
    }

    /// Replaces the held access token wholesale; takes effect on the next call
    pub fn set_access_token(&mut self, access_token: &str) {
        self.api_client.set_access_token(access_token);
    }

    /// Returns the currently held access token
    pub fn access_token(&self) -> &str {
        self.api_client.access_token()
    }
}
