/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod analytics;
pub mod api;
pub mod client;
pub mod errors;
pub mod media;
mod parsers;
pub mod token;
pub mod transport;
pub mod user;

pub use analytics::*;
pub use api::*;
pub use client::*;
pub use errors::*;
pub use media::*;
pub use token::*;
pub use transport::*;
pub use user::*;
