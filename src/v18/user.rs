/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v18::parsers::from_account_type;
use serde::Deserialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

#[derive(
    Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Unknown,
    Personal,
    Business,
    MediaCreator,
}

/// Holds information returned from the User API.
///
/// See [Instagram Platform Docs](https://developers.facebook.com/docs/instagram-platform/reference/instagram-user)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct UserProfile {
    pub id: String,

    pub username: String,

    #[serde(default, deserialize_with = "from_account_type")]
    pub account_type: AccountType,

    #[serde(default)]
    pub media_count: u64,
}

impl std::fmt::Display for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "username: {}, id: {}", self.username, self.id)
    }
}
