//! Decoded API responses with their HTTP metadata

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::ops::Deref;

/// A decoded response body together with the status and headers it came with
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
  /// Decoded body
  pub data: T,
  /// HTTP status, always in 200..=299
  pub status_code: StatusCode,
  /// Response headers
  pub headers: HeaderMap,
}

impl<T> ApiResponse<T> {
  /// Discard the metadata and keep the decoded body
  pub fn into_inner(self) -> T {
    self.data
  }

  /// A response header as text, if present and valid UTF-8
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(name).and_then(|value| value.to_str().ok())
  }
}

impl<T> Deref for ApiResponse<T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.data
  }
}
