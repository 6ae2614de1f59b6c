//! Common types used across the API

use serde::{Deserialize, Serialize};

/// Field the results of a list endpoint are sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
  #[serde(rename = "ticker")]
  TickerSymbol,
  Name,
  Market,
  Locale,
  PrimaryExchange,
  Type,
  CurrencySymbol,
  CurrencyName,
  BaseCurrencySymbol,
  BaseCurrencyName,
  Cik,
  CompositeFigi,
  ShareClassFigi,
  PublishedUtc,
  LastUpdatedUtc,
  DelistedUtc,
  Timestamp,
  StrikePrice,
  ExpirationDate,
  FilingDate,
  PeriodOfReportDate,
  ExecutionDate,
}

impl Sort {
  /// Wire value of the sort field
  pub fn as_str(&self) -> &'static str {
    match self {
      Sort::TickerSymbol => "ticker",
      Sort::Name => "name",
      Sort::Market => "market",
      Sort::Locale => "locale",
      Sort::PrimaryExchange => "primary_exchange",
      Sort::Type => "type",
      Sort::CurrencySymbol => "currency_symbol",
      Sort::CurrencyName => "currency_name",
      Sort::BaseCurrencySymbol => "base_currency_symbol",
      Sort::BaseCurrencyName => "base_currency_name",
      Sort::Cik => "cik",
      Sort::CompositeFigi => "composite_figi",
      Sort::ShareClassFigi => "share_class_figi",
      Sort::PublishedUtc => "published_utc",
      Sort::LastUpdatedUtc => "last_updated_utc",
      Sort::DelistedUtc => "delisted_utc",
      Sort::Timestamp => "timestamp",
      Sort::StrikePrice => "strike_price",
      Sort::ExpirationDate => "expiration_date",
      Sort::FilingDate => "filing_date",
      Sort::PeriodOfReportDate => "period_of_report_date",
      Sort::ExecutionDate => "execution_date",
    }
  }
}

impl std::fmt::Display for Sort {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Sort direction. `asc` returns oldest first, `desc` newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
  Asc,
  Desc,
}

impl std::fmt::Display for Order {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Order::Asc => write!(f, "asc"),
      Order::Desc => write!(f, "desc"),
    }
  }
}

/// Identifier for a group of similar financial instruments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
  Stocks,
  Options,
  Crypto,
  Fx,
  Otc,
  Indices,
}

impl std::fmt::Display for AssetClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      AssetClass::Stocks => write!(f, "stocks"),
      AssetClass::Options => write!(f, "options"),
      AssetClass::Crypto => write!(f, "crypto"),
      AssetClass::Fx => write!(f, "fx"),
      AssetClass::Otc => write!(f, "otc"),
      AssetClass::Indices => write!(f, "indices"),
    }
  }
}

/// Market location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketLocale {
  Us,
  Global,
}

impl std::fmt::Display for MarketLocale {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MarketLocale::Us => write!(f, "us"),
      MarketLocale::Global => write!(f, "global"),
    }
  }
}

/// Type of market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
  Stocks,
  Forex,
  Crypto,
}

impl std::fmt::Display for MarketType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MarketType::Stocks => write!(f, "stocks"),
      MarketType::Forex => write!(f, "forex"),
      MarketType::Crypto => write!(f, "crypto"),
    }
  }
}

/// Type of an options contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
  Call,
  Put,
  Other,
}

impl std::fmt::Display for ContractType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContractType::Call => write!(f, "call"),
      ContractType::Put => write!(f, "put"),
      ContractType::Other => write!(f, "other"),
    }
  }
}

/// Size of an aggregate time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timespan {
  Second,
  Minute,
  Hour,
  Day,
  Week,
  Month,
  Quarter,
  Year,
}

impl std::fmt::Display for Timespan {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Timespan::Second => write!(f, "second"),
      Timespan::Minute => write!(f, "minute"),
      Timespan::Hour => write!(f, "hour"),
      Timespan::Day => write!(f, "day"),
      Timespan::Week => write!(f, "week"),
      Timespan::Month => write!(f, "month"),
      Timespan::Quarter => write!(f, "quarter"),
      Timespan::Year => write!(f, "year"),
    }
  }
}
