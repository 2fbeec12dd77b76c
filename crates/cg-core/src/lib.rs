/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! # cg-core
//!
//! Shared building blocks for the CoinGecko client crates: the error
//! taxonomy, client configuration and the API constants.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, RawResponse, Result};

/// Base URL for the public CoinGecko v3 API.
///
/// The trailing slash is significant: relative endpoint paths are resolved
/// against it and would otherwise replace the `v3` segment.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3/";

/// Default request timeout applied to HTTP clients built from a [`Config`].
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying an optional demo API key.
pub const DEMO_API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Default `User-Agent` sent by clients built from a [`Config`].
pub const DEFAULT_USER_AGENT: &str = concat!("cg-client/", env!("CARGO_PKG_VERSION"));
