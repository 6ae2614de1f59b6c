pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

/// HTTP verb of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
  Get,
}

impl std::fmt::Display for Method {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Method::Get => write!(f, "GET"),
    }
  }
}

/// A REST operation: verb plus a path template whose `{name}` segments are
/// filled from the parameter object's path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
  pub method: Method,
  pub path: &'static str,
}

impl Endpoint {
  const fn get(path: &'static str) -> Self {
    Endpoint { method: Method::Get, path }
  }

  // Tickers
  pub const LIST_TICKERS: Endpoint = Endpoint::get("/v3/reference/tickers");
  pub const GET_TICKER_DETAILS: Endpoint = Endpoint::get("/v3/reference/tickers/{ticker}");
  pub const LIST_TICKER_NEWS: Endpoint = Endpoint::get("/v2/reference/news");
  pub const GET_TICKER_RELATED_COMPANIES: Endpoint =
    Endpoint::get("/v1/related-companies/{ticker}");
  pub const GET_TICKER_TYPES: Endpoint = Endpoint::get("/v3/reference/tickers/types");
  pub const GET_TICKER_EVENTS: Endpoint = Endpoint::get("/vX/reference/tickers/{id}/events");

  // Splits
  pub const LIST_SPLITS: Endpoint = Endpoint::get("/v3/reference/splits");

  // Options contracts
  pub const GET_OPTIONS_CONTRACT: Endpoint =
    Endpoint::get("/v3/reference/options/contracts/{ticker}");
  pub const LIST_OPTIONS_CONTRACTS: Endpoint = Endpoint::get("/v3/reference/options/contracts");

  /// Non-empty segments of the path template, in order
  pub fn segments(&self) -> impl Iterator<Item = PathSegment> {
    self.path.split('/').filter(|segment| !segment.is_empty()).map(PathSegment::parse)
  }

  /// Names of the `{placeholder}` segments in the path template
  pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
    self.segments().filter_map(|segment| match segment {
      PathSegment::Placeholder(name) => Some(name),
      PathSegment::Literal(_) => None,
    })
  }
}

/// One `/`-separated piece of an endpoint path template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
  Literal(&'static str),
  /// `{name}`, filled from the parameter object
  Placeholder(&'static str),
}

impl PathSegment {
  fn parse(segment: &'static str) -> Self {
    match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
      Some(name) => PathSegment::Placeholder(name),
      None => PathSegment::Literal(segment),
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} {}", self.method, self.path)
  }
}

/// Base URL for the REST API
pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
