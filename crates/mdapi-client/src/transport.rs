/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! HTTP transport for the REST API

use mdapi_core::{Config, Endpoint, Error, PathSegment, Result};
use mdapi_models::{BaseResponse, Params};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Query parameter carrying the API key
const API_KEY_PARAM: &str = "apiKey";

/// Renders parameter objects onto endpoint URLs and decodes the JSON replies
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: String,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("mdapi-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, base_url: config.base_url.clone(), api_key: config.api_key.clone() })
  }

  /// Issue `endpoint` with `params` and decode the body into `T`
  #[instrument(skip(self, params), fields(endpoint = %endpoint))]
  pub async fn get<P, T>(&self, endpoint: &Endpoint, params: &P) -> Result<T>
  where
    P: Params,
    T: DeserializeOwned,
  {
    let url = self.build_url(endpoint, params)?;
    debug!("Making request to: {}", endpoint.path);

    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;
    debug!("Response status {} with {} bytes", status, text.len());

    if !status.is_success() {
      let message = api_error_message(&text).unwrap_or_else(|| status.to_string());
      error!("Request failed with status {}: {}", status, message);
      return Err(Error::Api { status: status.as_u16(), message });
    }

    serde_json::from_str::<T>(&text).map_err(|e| {
      error!("Failed to parse response body: {}", e);
      error!("Response text (first 500 chars): {}", truncate(&text, 500));
      Error::Serde(e)
    })
  }

  /// Full request URL: base, substituted path, query pairs, then the API key
  pub fn build_url<P: Params>(&self, endpoint: &Endpoint, params: &P) -> Result<Url> {
    let mut url = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;

    let path_params = params.path_params();
    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|_| Error::Config(format!("Base URL cannot carry a path: {}", self.base_url)))?;
      segments.pop_if_empty();
      for segment in endpoint.segments() {
        match segment {
          PathSegment::Literal(text) => {
            segments.push(text);
          }
          PathSegment::Placeholder(name) => {
            let value = path_params
              .get(name)
              .filter(|value| !value.is_empty())
              .ok_or_else(|| Error::MissingPathParam(name.to_string()))?;
            // push percent-encodes, including any '/'
            segments.push(value);
          }
        }
      }
    }

    {
      let mut query = url.query_pairs_mut();
      for (key, value) in params.query_pairs() {
        query.append_pair(&key, &value);
      }
      query.append_pair(API_KEY_PARAM, &self.api_key);
    }

    Ok(url)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("api_key", &"***")
      .finish()
  }
}

/// Error text from a failed response's envelope, if it has one
fn api_error_message(body: &str) -> Option<String> {
  let base: BaseResponse = serde_json::from_str(body).ok()?;
  base.error_message.or(base.message).filter(|message| !message.is_empty())
}

fn truncate(text: &str, max_chars: usize) -> &str {
  match text.char_indices().nth(max_chars) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use mdapi_models::{
    Comparator, GetOptionsContractParams, GetTickerDetailsParams, ListTickersParams, Order, Sort,
  };

  fn mock_transport() -> Transport {
    let config =
      Config::default_with_key("test_key".to_string()).with_base_url("https://mock.api.test");
    Transport::new(&config).unwrap()
  }

  #[test]
  fn test_build_url_query() {
    let transport = mock_transport();
    let params = ListTickersParams::default()
      .with_ticker(Comparator::Eq, "AAPL")
      .with_sort(Sort::TickerSymbol)
      .with_order(Order::Asc)
      .with_limit(50);

    let url = transport.build_url(&Endpoint::LIST_TICKERS, &params).unwrap();
    assert_eq!(url.path(), "/v3/reference/tickers");
    assert_eq!(url.query(), Some("ticker=AAPL&sort=ticker&order=asc&limit=50&apiKey=test_key"));
  }

  #[test]
  fn test_build_url_path_param() {
    let transport = mock_transport();
    let params = GetOptionsContractParams::new("O:EVRI240119C00002500");

    let url = transport.build_url(&Endpoint::GET_OPTIONS_CONTRACT, &params).unwrap();
    assert_eq!(url.path(), "/v3/reference/options/contracts/O:EVRI240119C00002500");
    assert_eq!(url.query(), Some("apiKey=test_key"));
  }

  #[test]
  fn test_build_url_encodes_path_param() {
    let transport = mock_transport();
    let params = GetTickerDetailsParams::new("BRK/A");

    let url = transport.build_url(&Endpoint::GET_TICKER_DETAILS, &params).unwrap();
    assert_eq!(url.path(), "/v3/reference/tickers/BRK%2FA");
  }

  #[test]
  fn test_build_url_missing_path_param() {
    let transport = mock_transport();
    let params = GetTickerDetailsParams::new("");

    let result = transport.build_url(&Endpoint::GET_TICKER_DETAILS, &params);
    match result {
      Err(Error::MissingPathParam(name)) => assert_eq!(name, "ticker"),
      other => panic!("Expected MissingPathParam error, got {:?}", other),
    }
  }

  #[test]
  fn test_build_url_invalid_base() {
    let config = Config::default_with_key("k".to_string()).with_base_url("not a url");
    let transport = Transport::new(&config).unwrap();
    let result = transport.build_url(&Endpoint::LIST_TICKERS, &ListTickersParams::default());
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_api_error_message() {
    assert_eq!(
      api_error_message(r#"{"status":"ERROR","request_id":"x","error":"Unknown API Key"}"#),
      Some("Unknown API Key".to_string())
    );
    assert_eq!(
      api_error_message(r#"{"status":"NOT_FOUND","message":"Ticker not found."}"#),
      Some("Ticker not found.".to_string())
    );
    assert_eq!(api_error_message("<html>bad gateway</html>"), None);
  }

  #[test]
  fn test_debug_hides_api_key() {
    let debug = format!("{:?}", mock_transport());
    assert!(!debug.contains("test_key"));
    assert!(debug.contains("mock.api.test"));
  }
}
