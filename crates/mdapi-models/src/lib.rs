//! # mdapi-models
//!
//! Request parameters and response models for the market-data REST API.
//!
//! Each operation has a parameter struct with copy-on-write builder methods
//! and a response struct that deserializes the JSON body.
//!
//! ## Usage
//!
//! ```ignore
//! use mdapi_models::{Comparator, ListTickersParams, Params, Sort};
//!
//! let params = ListTickersParams::default()
//!   .with_ticker(Comparator::Gte, "A")
//!   .with_ticker(Comparator::Lt, "B")
//!   .with_sort(Sort::TickerSymbol)
//!   .with_limit(100);
//!
//! let query = params.query_pairs();
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod options;
pub mod params;
pub mod splits;
pub mod tickers;
pub mod time;

pub use common::*;
pub use options::*;
pub use params::{Params, QueryWriter, RangeFilter};
pub use splits::*;
pub use tickers::*;
pub use time::*;

// Enums used by the parameter builders
pub use mdapi_core::{
  AssetClass, Comparator, ContractType, MarketLocale, MarketType, Order, Sort, Timespan,
};
