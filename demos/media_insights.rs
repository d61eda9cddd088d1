/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Fetches the authenticated user's profile and recent media, then prints an
//! analytics summary. Needs INSTAGRAM_ACCESS_TOKEN in the environment or a
//! .env file.

use instagram::v18::{Client, analyze};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    dotenvy::dotenv().ok();
    let token = std::env::var("INSTAGRAM_ACCESS_TOKEN")?;

    let client = Client::new(&token)?;

    let profile = client.user_profile().await?;
    println!(
        "@{} ({:?}) with {} posts",
        profile.username, profile.account_type, profile.media_count
    );

    let media = client.user_media(Some(50)).await?;
    for post in media.data.iter().take(5) {
        println!("  {}", post);
    }

    let report = analyze(&media.data);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
