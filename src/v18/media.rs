/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v18::parsers::from_media_type;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Media kinds the API reports. Anything unrecognized maps to `Unknown`
/// rather than failing the whole response.
#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[default]
    Unknown,
    Image,
    Video,
    CarouselAlbum,
}

/// Holds information returned from the Media API.
///
/// See [Instagram Platform Docs](https://developers.facebook.com/docs/instagram-platform/reference/instagram-media)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct Media {
    pub id: String,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default, deserialize_with = "from_media_type")]
    pub media_type: MediaType,

    #[serde(default)]
    pub media_url: Option<String>,

    #[serde(default)]
    pub permalink: Option<String>,

    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// ISO-8601 timestamp as the API sent it; parsed lazily by consumers
    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub username: Option<String>,

    /// Present only on carousel albums fetched with the detail field selection
    #[serde(default)]
    pub children: Option<MediaChildren>,
}

impl std::fmt::Display for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "id: {}, type: {}", self.id, self.media_type)
    }
}

/// A sub-item of a carousel album post
#[derive(Deserialize, Debug, Clone)]
pub struct ChildMedia {
    pub id: String,

    #[serde(default, deserialize_with = "from_media_type")]
    pub media_type: MediaType,

    #[serde(default)]
    pub media_url: Option<String>,

    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

// Nested expansion wrapper for carousel children
#[derive(Deserialize, Debug, Clone)]
pub struct MediaChildren {
    pub data: Vec<ChildMedia>,
}

/// Expected response from a user media request
#[derive(Deserialize, Debug, Clone)]
pub struct MediaList {
    pub data: Vec<Media>,

    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Cursor block the API attaches to list responses. Not followed by this
/// client (every call is a single round trip) but kept so callers can page
/// themselves through [`crate::v18::Client::get`].
#[derive(Deserialize, Debug, Clone)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Option<PagingCursors>,

    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub previous: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PagingCursors {
    #[serde(default)]
    pub before: Option<String>,

    #[serde(default)]
    pub after: Option<String>,
}
