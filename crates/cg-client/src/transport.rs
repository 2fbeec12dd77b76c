//! HTTP transport layer for CoinGecko API requests

use crate::response::ApiResponse;
use cg_core::{Config, Error, RawResponse, Result, DEMO_API_KEY_HEADER};
use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Body, Client, Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument, warn};
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully resolved request bound to the cancellation token it was built with
#[derive(Debug)]
pub struct ApiRequest {
  request: Request,
  cancel: CancellationToken,
}

impl ApiRequest {
  /// Absolute URL of the request
  pub fn url(&self) -> &Url {
    self.request.url()
  }

  /// HTTP method of the request
  pub fn method(&self) -> &Method {
    self.request.method()
  }

  /// The underlying reqwest request
  pub fn inner(&self) -> &Request {
    &self.request
  }
}

/// HTTP transport layer for making requests to the CoinGecko API
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct Transport {
  client: Client,
  base_url: Url,
  api_key: Option<HeaderValue>,
}

impl Transport {
  /// Create a transport with an HTTP client built from `config`
  ///
  /// The client gets `config.timeout_secs` as its request timeout and
  /// reqwest's default redirect policy.
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout()?)
      .user_agent(config.user_agent.as_str())
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    Self::with_http_client(client, config)
  }

  /// Create a transport around a caller-supplied HTTP client
  ///
  /// The client is used as is; timeout and user agent from `config` are not applied.
  pub fn with_http_client(client: Client, config: &Config) -> Result<Self> {
    let base_url = config.parsed_base_url()?;

    let api_key = config
      .api_key
      .as_deref()
      .map(HeaderValue::from_str)
      .transpose()
      .map_err(|e| Error::Config(format!("Invalid API key header value: {}", e)))?;

    debug!("Transport ready for {}", base_url);
    Ok(Self { client, base_url, api_key })
  }

  /// Resolve a relative endpoint path against the base URL
  ///
  /// Leading slashes are dropped so that the version segment of the base URL survives.
  pub fn resolve(&self, relative_path: &str) -> Result<Url> {
    let relative = relative_path.trim_start_matches('/');
    Ok(self.base_url.join(relative)?)
  }

  /// Build a request for `relative_path`, optionally carrying `body` as JSON
  ///
  /// The returned request is bound to `cancel`; cancelling the token aborts
  /// it while in flight. No timeout is added here.
  pub fn new_request<B>(
    &self,
    cancel: &CancellationToken,
    method: Method,
    relative_path: &str,
    body: Option<&B>,
  ) -> Result<ApiRequest>
  where
    B: Serialize + ?Sized,
  {
    let url = self.resolve(relative_path)?;
    let mut request = Request::new(method, url);

    if let Some(body) = body {
      let payload = serde_json::to_vec(body).map_err(Error::Encode)?;
      *request.body_mut() = Some(Body::from(payload));
    }

    let headers = request.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
    if let Some(key) = &self.api_key {
      headers.insert(HeaderName::from_static(DEMO_API_KEY_HEADER), key.clone());
    }

    Ok(ApiRequest { request, cancel: cancel.clone() })
  }

  /// Build and execute a bodiless GET for `relative_path`
  pub async fn get<T>(&self, cancel: &CancellationToken, relative_path: &str) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    let request = self.new_request::<()>(cancel, Method::GET, relative_path, None)?;
    self.execute(request).await
  }

  /// Send a request and decode a successful JSON body into `T`
  ///
  /// Exactly one round trip is made. Non-2xx statuses yield [`Error::Api`]
  /// carrying the captured response; nothing is decoded in that case.
  #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
  pub async fn execute<T>(&self, request: ApiRequest) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    let raw = self.round_trip(request).await?;

    match serde_json::from_str::<T>(&raw.body) {
      Ok(data) => Ok(ApiResponse { data, status_code: raw.status, headers: raw.headers }),
      Err(e) => {
        error!("Failed to parse JSON response: {}", e);
        error!("Response text (first 500 chars): {}", preview(&raw.body, 500));
        Err(Error::Decode(e))
      }
    }
  }

  /// Send a request without decoding the body
  #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
  pub async fn execute_raw(&self, request: ApiRequest) -> Result<RawResponse> {
    self.round_trip(request).await
  }

  /// One request/response exchange raced against the request's token.
  /// The body is read to the end, which releases the connection.
  async fn round_trip(&self, request: ApiRequest) -> Result<RawResponse> {
    let ApiRequest { request, cancel } = request;

    let exchange = async {
      let response = self.client.execute(request).await?;
      let status = response.status();
      let headers = response.headers().clone();
      let url = response.url().clone();
      let bytes = response.bytes().await?;
      Ok::<_, Error>(RawResponse {
        status,
        headers,
        url,
        body: String::from_utf8_lossy(&bytes).into_owned(),
      })
    };

    let raw = tokio::select! {
      biased;
      () = cancel.cancelled() => {
        warn!("Request cancelled before a response was received");
        return Err(Error::Cancelled);
      }
      result = exchange => result?,
    };

    debug!("Response status: {}, body length: {} bytes", raw.status, raw.body.len());

    if !raw.status.is_success() {
      warn!("Request failed with status: {}", raw.status);
      return Err(Error::Api { status: raw.status.as_u16(), response: Box::new(raw) });
    }

    Ok(raw)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url.as_str())
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .finish()
  }
}

fn preview(text: &str, max_chars: usize) -> String {
  text.chars().take(max_chars).collect()
}
