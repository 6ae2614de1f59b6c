//! # mdapi-client
//!
//! Async client for the market-data reference REST API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mdapi_client::MarketDataClient;
//! use mdapi_core::Config;
//! use mdapi_models::{Comparator, ListTickersParams, Order, Sort};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let client = MarketDataClient::new(Config::from_env()?)?;
//!
//!   let params = ListTickersParams::default()
//!     .with_ticker(Comparator::Eq, "AAPL")
//!     .with_sort(Sort::TickerSymbol)
//!     .with_order(Order::Asc)
//!     .with_limit(50);
//!
//!   let page = client.list_tickers(&params).await?;
//!   for ticker in &page.results {
//!     println!("{}: {:?}", ticker.ticker, ticker.name);
//!   }
//!   Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, mdapi_core::Error>`. Non-success responses
//! surface as `Error::Api` with the status code and the server's message.
//! Requests are never retried.

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

pub use client::MarketDataClient;
pub use endpoints::{options::OptionsEndpoints, splits::SplitEndpoints, tickers::TickerEndpoints};
pub use mdapi_core::{Config, Error, Result};
pub use mdapi_models::*;
