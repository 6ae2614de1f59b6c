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

//! Options contract reference data

use crate::common::BaseResponse;
use crate::params::{impl_list_options, Params, QueryWriter, RangeFilter};
use chrono::NaiveDate;
use mdapi_core::{Comparator, ContractType, Order, Sort};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters for the GetOptionsContract operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetOptionsContractParams {
  /// Options ticker, e.g. `O:EVRI240119C00002500` (path)
  pub ticker: String,

  /// Contract as of this date, defaults to today
  pub as_of: Option<NaiveDate>,
}

impl GetOptionsContractParams {
  pub fn new(ticker: impl Into<String>) -> Self {
    Self { ticker: ticker.into(), as_of: None }
  }

  pub fn with_as_of(&self, as_of: NaiveDate) -> Self {
    self.with(|p| p.as_of = Some(as_of))
  }
}

impl Params for GetOptionsContractParams {
  fn write_query(&self, query: &mut QueryWriter) {
    query.opt("as_of", &self.as_of);
  }

  fn path_params(&self) -> BTreeMap<&'static str, String> {
    BTreeMap::from([("ticker", self.ticker.clone())])
  }
}

/// Response of the GetOptionsContract operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetOptionsContractResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  pub results: Option<OptionsContract>,
}

/// Parameters for the ListOptionsContracts operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListOptionsContractsParams {
  /// Ticker of the underlying asset
  pub underlying_ticker: RangeFilter<String>,

  pub contract_type: Option<ContractType>,

  pub expiration_date: RangeFilter<NaiveDate>,

  /// Contracts as of this date, defaults to today
  pub as_of: Option<NaiveDate>,

  pub strike_price: RangeFilter<f64>,

  /// Include expired contracts (server default: false)
  pub expired: Option<bool>,

  pub sort: Option<Sort>,
  pub order: Option<Order>,
  pub limit: Option<u32>,
}

impl ListOptionsContractsParams {
  pub fn with_underlying_ticker(&self, comparator: Comparator, ticker: impl Into<String>) -> Self {
    let ticker = ticker.into();
    self.with(|p| p.underlying_ticker.set(comparator, ticker))
  }

  pub fn with_contract_type(&self, contract_type: ContractType) -> Self {
    self.with(|p| p.contract_type = Some(contract_type))
  }

  pub fn with_expiration_date(&self, comparator: Comparator, date: NaiveDate) -> Self {
    self.with(|p| p.expiration_date.set(comparator, date))
  }

  pub fn with_as_of(&self, as_of: NaiveDate) -> Self {
    self.with(|p| p.as_of = Some(as_of))
  }

  pub fn with_strike_price(&self, comparator: Comparator, strike: f64) -> Self {
    self.with(|p| p.strike_price.set(comparator, strike))
  }

  pub fn with_expired(&self, expired: bool) -> Self {
    self.with(|p| p.expired = Some(expired))
  }
}

impl_list_options!(ListOptionsContractsParams);

impl Params for ListOptionsContractsParams {
  fn write_query(&self, query: &mut QueryWriter) {
    query
      .range("underlying_ticker", &self.underlying_ticker)
      .opt("contract_type", &self.contract_type)
      .range("expiration_date", &self.expiration_date)
      .opt("as_of", &self.as_of)
      .range("strike_price", &self.strike_price)
      .opt("expired", &self.expired)
      .opt("sort", &self.sort)
      .opt("order", &self.order)
      .opt("limit", &self.limit);
  }
}

/// Response of the ListOptionsContracts operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListOptionsContractsResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  #[serde(default)]
  pub results: Vec<OptionsContract>,
}

/// An options contract
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsContract {
  pub additional_underlyings: Vec<AdditionalUnderlying>,
  pub cfi: Option<String>,
  pub contract_type: Option<ContractType>,
  pub correction: Option<i32>,
  pub exercise_style: Option<String>,
  pub expiration_date: Option<NaiveDate>,
  pub primary_exchange: Option<String>,
  pub shares_per_contract: Option<f64>,
  pub strike_price: Option<f64>,
  pub ticker: String,
  pub underlying_ticker: Option<String>,
}

/// Extra deliverable of a contract, e.g. after a corporate action
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalUnderlying {
  pub amount: f64,
  #[serde(rename = "type")]
  pub underlying_type: String,
  pub underlying: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_options_contract_params() {
    let date = NaiveDate::from_ymd_opt(2023, 3, 23).unwrap();
    let expect = GetOptionsContractParams { ticker: "A".to_string(), as_of: Some(date) };
    let actual = GetOptionsContractParams::new("A").with_as_of(date);
    assert_eq!(actual, expect);
    assert_eq!(actual.query_pairs(), vec![("as_of".to_string(), "2023-03-23".to_string())]);
    assert_eq!(actual.path_params().get("ticker").map(String::as_str), Some("A"));
  }

  #[test]
  fn test_list_options_contracts_params() {
    let date = NaiveDate::from_ymd_opt(2023, 3, 23).unwrap();
    let strike = 100.0;
    let ticker = "A";
    let expect = ListOptionsContractsParams {
      underlying_ticker: RangeFilter {
        eq: Some(ticker.to_string()),
        lt: Some(ticker.to_string()),
        lte: Some(ticker.to_string()),
        gt: Some(ticker.to_string()),
        gte: Some(ticker.to_string()),
      },
      contract_type: Some(ContractType::Call),
      expiration_date: RangeFilter {
        eq: Some(date),
        lt: Some(date),
        lte: Some(date),
        gt: Some(date),
        gte: Some(date),
      },
      as_of: Some(date),
      strike_price: RangeFilter {
        eq: Some(strike),
        lt: Some(strike),
        lte: Some(strike),
        gt: Some(strike),
        gte: Some(strike),
      },
      expired: Some(true),
      sort: Some(Sort::TickerSymbol),
      order: Some(Order::Asc),
      limit: Some(100),
    };

    let actual = ListOptionsContractsParams::default()
      .with_contract_type(ContractType::Call)
      .with_underlying_ticker(Comparator::Eq, ticker)
      .with_underlying_ticker(Comparator::Lt, ticker)
      .with_underlying_ticker(Comparator::Lte, ticker)
      .with_underlying_ticker(Comparator::Gt, ticker)
      .with_underlying_ticker(Comparator::Gte, ticker)
      .with_expiration_date(Comparator::Eq, date)
      .with_expiration_date(Comparator::Lt, date)
      .with_expiration_date(Comparator::Lte, date)
      .with_expiration_date(Comparator::Gt, date)
      .with_expiration_date(Comparator::Gte, date)
      .with_strike_price(Comparator::Eq, strike)
      .with_strike_price(Comparator::Lt, strike)
      .with_strike_price(Comparator::Lte, strike)
      .with_strike_price(Comparator::Gt, strike)
      .with_strike_price(Comparator::Gte, strike)
      .with_as_of(date)
      .with_expired(true)
      .with_sort(Sort::TickerSymbol)
      .with_order(Order::Asc)
      .with_limit(100);

    assert_eq!(actual, expect);
  }

  #[test]
  fn test_strike_range_query() {
    let params = ListOptionsContractsParams::default()
      .with_underlying_ticker(Comparator::Eq, "SPY")
      .with_contract_type(ContractType::Put)
      .with_strike_price(Comparator::Gte, 402.5)
      .with_strike_price(Comparator::Lte, 410.0)
      .with_sort(Sort::StrikePrice);

    assert_eq!(
      params.query_pairs(),
      vec![
        ("underlying_ticker".to_string(), "SPY".to_string()),
        ("contract_type".to_string(), "put".to_string()),
        ("strike_price.lte".to_string(), "410".to_string()),
        ("strike_price.gte".to_string(), "402.5".to_string()),
        ("sort".to_string(), "strike_price".to_string()),
      ]
    );
  }

  #[test]
  fn test_decode_options_contract() {
    let json = r#"{
      "status": "OK",
      "request_id": "603902c0-a5a5-406f-bd08-f030f92418fa",
      "results": {
        "additional_underlyings": [{"amount": 44, "type": "equity", "underlying": "VMW"}],
        "cfi": "OCASPS",
        "contract_type": "call",
        "correction": 1,
        "exercise_style": "american",
        "expiration_date": "2024-01-19",
        "primary_exchange": "BATO",
        "shares_per_contract": 100,
        "strike_price": 2.5,
        "ticker": "O:EVRI240119C00002500",
        "underlying_ticker": "EVRI"
      }
    }"#;

    let response: GetOptionsContractResponse = serde_json::from_str(json).unwrap();
    let contract = response.results.unwrap();
    assert_eq!(contract.contract_type, Some(ContractType::Call));
    assert_eq!(contract.expiration_date, NaiveDate::from_ymd_opt(2024, 1, 19));
    assert_eq!(contract.strike_price, Some(2.5));
    assert_eq!(contract.additional_underlyings[0].underlying, "VMW");
    assert_eq!(contract.additional_underlyings[0].amount, 44.0);
  }

  #[test]
  fn test_decode_sparse_contracts() {
    let json = r#"{
      "results": [
        {"underlying_ticker": "SPY", "additional_underlyings": [{"underlying": "VMW"}]},
        {}
      ]
    }"#;

    let response: ListOptionsContractsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.results.len(), 2);
    let first = &response.results[0];
    assert_eq!(first.ticker, "");
    assert_eq!(first.additional_underlyings[0].amount, 0.0);
    assert_eq!(first.additional_underlyings[0].underlying_type, "");
    assert_eq!(response.results[1], OptionsContract::default());
  }
}
