/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v18::media::MediaType;
use crate::v18::user::AccountType;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::str::FromStr;

// Parses media type
pub fn from_media_type<'de, D>(deserializer: D) -> Result<MediaType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    MediaType::from_str(&s).or(Ok(MediaType::Unknown))
}

// Parses account type
pub fn from_account_type<'de, D>(deserializer: D) -> Result<AccountType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    AccountType::from_str(&s).or(Ok(AccountType::Unknown))
}

// Parses ids the API returns as either a JSON string or a bare number
pub fn from_id_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: serde_json::Value = Deserialize::deserialize(deserializer)?;
    Ok(match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Parses a media timestamp. The API emits `2024-01-15T10:00:00+0000`
/// (no colon in the offset), which is not strict RFC 3339, so both forms
/// are accepted.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}
