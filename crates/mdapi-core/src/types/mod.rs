//! Common types used across mdapi-* crates

pub mod common;
pub mod comparator;

pub use common::{AssetClass, ContractType, MarketLocale, MarketType, Order, Sort, Timespan};
pub use comparator::Comparator;
