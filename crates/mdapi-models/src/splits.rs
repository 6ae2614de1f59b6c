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

//! Stock split reference data

use crate::common::BaseResponse;
use crate::params::{impl_list_options, Params, QueryWriter, RangeFilter};
use chrono::NaiveDate;
use mdapi_core::{Comparator, Order, Sort};
use serde::{Deserialize, Serialize};

/// Parameters for the ListSplits operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSplitsParams {
  pub ticker: RangeFilter<String>,

  /// Date the split took effect
  pub execution_date: RangeFilter<NaiveDate>,

  /// Reverse splits only (`split_from` > `split_to`) when true
  pub reverse_split: Option<bool>,

  pub sort: Option<Sort>,
  pub order: Option<Order>,
  pub limit: Option<u32>,
}

impl ListSplitsParams {
  pub fn with_ticker(&self, comparator: Comparator, ticker: impl Into<String>) -> Self {
    let ticker = ticker.into();
    self.with(|p| p.ticker.set(comparator, ticker))
  }

  pub fn with_execution_date(&self, comparator: Comparator, date: NaiveDate) -> Self {
    self.with(|p| p.execution_date.set(comparator, date))
  }

  pub fn with_reverse_split(&self, reverse_split: bool) -> Self {
    self.with(|p| p.reverse_split = Some(reverse_split))
  }
}

impl_list_options!(ListSplitsParams);

impl Params for ListSplitsParams {
  fn write_query(&self, query: &mut QueryWriter) {
    query
      .range("ticker", &self.ticker)
      .range("execution_date", &self.execution_date)
      .opt("reverse_split", &self.reverse_split)
      .opt("sort", &self.sort)
      .opt("order", &self.order)
      .opt("limit", &self.limit);
  }
}

/// Response of the ListSplits operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListSplitsResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  #[serde(default)]
  pub results: Vec<Split>,
}

/// A historical stock split
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Split {
  pub id: Option<String>,
  pub execution_date: Option<NaiveDate>,
  pub split_from: f64,
  pub split_to: f64,
  pub ticker: String,
}

impl Split {
  /// Shares held after the split per share held before it
  pub fn ratio(&self) -> f64 {
    if self.split_from == 0.0 {
      0.0
    } else {
      self.split_to / self.split_from
    }
  }

  pub fn is_reverse(&self) -> bool {
    self.split_from > self.split_to
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_list_splits_params() {
    let ticker = "A".to_string();
    let date = NaiveDate::from_ymd_opt(2023, 3, 23).unwrap();
    let expect = ListSplitsParams {
      ticker: RangeFilter {
        eq: Some(ticker.clone()),
        lt: Some(ticker.clone()),
        lte: Some(ticker.clone()),
        gt: Some(ticker.clone()),
        gte: Some(ticker.clone()),
      },
      execution_date: RangeFilter {
        eq: Some(date),
        lt: Some(date),
        lte: Some(date),
        gt: Some(date),
        gte: Some(date),
      },
      reverse_split: Some(true),
      sort: Some(Sort::TickerSymbol),
      order: Some(Order::Asc),
      limit: Some(100),
    };

    let actual = ListSplitsParams::default()
      .with_ticker(Comparator::Eq, &ticker)
      .with_ticker(Comparator::Lt, &ticker)
      .with_ticker(Comparator::Lte, &ticker)
      .with_ticker(Comparator::Gt, &ticker)
      .with_ticker(Comparator::Gte, &ticker)
      .with_execution_date(Comparator::Eq, date)
      .with_execution_date(Comparator::Lt, date)
      .with_execution_date(Comparator::Lte, date)
      .with_execution_date(Comparator::Gt, date)
      .with_execution_date(Comparator::Gte, date)
      .with_reverse_split(true)
      .with_sort(Sort::TickerSymbol)
      .with_order(Order::Asc)
      .with_limit(100);

    assert_eq!(actual, expect);
  }

  #[test]
  fn test_execution_date_range_query() {
    let params = ListSplitsParams::default()
      .with_execution_date(Comparator::Gte, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
      .with_execution_date(Comparator::Lt, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
      .with_reverse_split(false);

    let query = params.query_pairs();
    assert_eq!(
      query,
      vec![
        ("execution_date.lt".to_string(), "2021-01-01".to_string()),
        ("execution_date.gte".to_string(), "2020-01-01".to_string()),
        ("reverse_split".to_string(), "false".to_string()),
      ]
    );
  }

  #[test]
  fn test_decode_splits() {
    let json = r#"{
      "status": "OK",
      "request_id": "2b0f3d",
      "next_url": "https://api.polygon.io/v3/reference/splits?cursor=YXA9",
      "results": [
        {
          "id": "E36416cce743c3964c5da63e1ef1626c0aece30fb47302eea5a49c0055c04e8d0",
          "execution_date": "2020-08-31",
          "split_from": 1,
          "split_to": 4,
          "ticker": "AAPL"
        },
        {"execution_date": "2024-06-10", "split_from": 10, "split_to": 1, "ticker": "XYZ"}
      ]
    }"#;

    let response: ListSplitsResponse = serde_json::from_str(json).unwrap();
    assert!(response.base.has_next_page());
    assert_eq!(response.results.len(), 2);

    let aapl = &response.results[0];
    assert_eq!(aapl.execution_date, NaiveDate::from_ymd_opt(2020, 8, 31));
    assert_eq!(aapl.ratio(), 4.0);
    assert!(!aapl.is_reverse());

    let reverse = &response.results[1];
    assert_eq!(reverse.id, None);
    assert!(reverse.is_reverse());
  }

  #[test]
  fn test_decode_sparse_split() {
    let response: ListSplitsResponse =
      serde_json::from_str(r#"{"results": [{"execution_date": "2020-08-31"}]}"#).unwrap();
    let split = &response.results[0];
    assert_eq!(split.ticker, "");
    assert_eq!(split.split_from, 0.0);
    assert_eq!(split.ratio(), 0.0);
    assert!(!split.is_reverse());
  }
}
