/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Instagram
//!
//! This library was created for working with the Instagram Graph API
//! (`graph.instagram.com`) using a long-lived bearer access token.
//!
//! For further details on the Rest API refer to the
//! [Instagram Platform Docs](https://developers.facebook.com/docs/instagram-platform)
//!
//! ## Features
//!
//! - Profile information for the authenticated user (Read only)
//! - Media listing and per-media detail, including carousel children
//! - Access token refresh and token metadata queries
//! - In-memory analytics over a fetched media list (type distribution,
//!   month buckets, caption statistics, recent activity)
//! - Lower level interface for handling the raw communication
//!
//! *Acquiring the long-lived access token is an OAuth exchange left up to the
//! consumer of this library. The client only attaches the token you give it.*
//!
//! *If you want to call an endpoint that is not wrapped yet, [`v18::Client::get`]
//! makes a raw request and hands back the decoded JSON.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! instagram = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use instagram::v18::{analyze, Client};
//!
//! async fn media_report(access_token: &str) -> anyhow::Result<()> {
//!     let client = Client::new(access_token)?;
//!
//!     // Who the token belongs to
//!     let profile = client.user_profile().await?;
//!     println!("@{} has {} posts", profile.username, profile.media_count);
//!
//!     // Most recent media, then summarize it
//!     let media = client.user_media(Some(25)).await?;
//!     let report = analyze(&media.data);
//!     println!("posts last week: {}", report.recent_activity.posts_last_week);
//!     Ok(())
//! }
//! ```
//!
pub mod v18;
