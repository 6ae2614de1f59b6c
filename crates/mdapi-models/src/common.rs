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

//! Fields shared by every API response

use serde::{Deserialize, Serialize};

/// Envelope fields present on every response.
///
/// Response structs embed this with `#[serde(flatten)]` next to their
/// `results` payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseResponse {
  /// Request status, e.g. `"OK"`
  pub status: Option<String>,

  /// Server-assigned id of the request
  pub request_id: Option<String>,

  /// Number of results in this page
  pub count: Option<i64>,

  pub message: Option<String>,

  /// Error message for failed requests
  #[serde(rename = "error")]
  pub error_message: Option<String>,

  /// URL of the next page, absent on the last one
  pub next_url: Option<String>,
}

impl BaseResponse {
  /// Whether another page can be fetched
  pub fn has_next_page(&self) -> bool {
    self.next_url.as_deref().is_some_and(|url| !url.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_response_decode() {
    let json = r#"{
      "status": "OK",
      "request_id": "a1b2",
      "count": 2,
      "next_url": "https://api.polygon.io/v3/reference/tickers?cursor=abc"
    }"#;
    let base: BaseResponse = serde_json::from_str(json).unwrap();
    assert_eq!(base.status.as_deref(), Some("OK"));
    assert_eq!(base.request_id.as_deref(), Some("a1b2"));
    assert_eq!(base.count, Some(2));
    assert_eq!(base.error_message, None);
    assert!(base.has_next_page());
  }

  #[test]
  fn test_base_response_error() {
    let json = r#"{"status": "ERROR", "request_id": "x", "error": "Unknown API Key"}"#;
    let base: BaseResponse = serde_json::from_str(json).unwrap();
    assert_eq!(base.error_message.as_deref(), Some("Unknown API Key"));
    assert!(!base.has_next_page());
  }
}
