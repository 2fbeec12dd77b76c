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

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for cg-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// A required argument was missing or empty. Raised before any network activity.
  #[error("Validation error: {0}")]
  Validation(String),

  /// The relative endpoint path could not be resolved against the base URL
  #[error("URL parse error: {0}")]
  UrlParse(#[from] url::ParseError),

  /// The request body could not be serialized to JSON
  #[error("Failed to encode request body: {0}")]
  Encode(#[source] serde_json::Error),

  /// The request never produced an interpretable HTTP response
  #[error("HTTP transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// The caller's cancellation token fired while the request was in flight
  #[error("Request cancelled")]
  Cancelled,

  /// The API answered with a status outside 200..=299
  #[error("API error: HTTP {status}; inspect the response body for details")]
  Api {
    /// HTTP status code
    status: u16,
    /// Captured response, kept for diagnostics
    response: Box<RawResponse>,
  },

  /// The response body did not match the expected JSON shape
  #[error("Failed to decode response: {0}")]
  Decode(#[source] serde_json::Error),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),
}

impl Error {
  /// HTTP status of an [`Error::Api`] failure.
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Api { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// The captured response of an [`Error::Api`] failure.
  pub fn raw_response(&self) -> Option<&RawResponse> {
    match self {
      Error::Api { response, .. } => Some(response),
      _ => None,
    }
  }

  /// True for failures where no HTTP response was received, cancellation included.
  pub fn is_transport(&self) -> bool {
    matches!(self, Error::Transport(_) | Error::Cancelled)
  }
}

/// An HTTP response captured in full, body included.
///
/// Returned inside [`Error::Api`] so that callers can read whatever the
/// server put in the body of an error response.
#[derive(Debug, Clone)]
pub struct RawResponse {
  /// Response status
  pub status: StatusCode,
  /// Response headers
  pub headers: HeaderMap,
  /// Final URL of the request, after redirects
  pub url: url::Url,
  /// Body as text (lossy UTF-8)
  pub body: String,
}

/// Result type alias for cg-* crates
pub type Result<T> = std::result::Result<T, Error>;
