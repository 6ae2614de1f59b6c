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

//! Ticker reference data: listings, details, news, related companies,
//! ticker types and ticker events

use crate::common::BaseResponse;
use crate::params::{impl_list_options, Params, QueryWriter, RangeFilter};
use crate::time::{Millis, Time};
use chrono::NaiveDate;
use mdapi_core::{AssetClass, Comparator, MarketLocale, Order, Sort};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters for the ListTickers operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListTickersParams {
  /// Ticker symbol filter. Unset queries all tickers.
  pub ticker: RangeFilter<String>,

  /// Ticker type, see the ticker types operation for supported values
  pub ticker_type: Option<String>,

  /// Market the ticker trades in
  pub market: Option<AssetClass>,

  /// Primary exchange MIC (ISO 10383)
  pub exchange: Option<String>,

  /// CUSIP of the asset. CUSIPs are never returned in results.
  pub cusip: Option<i64>,

  /// SEC Central Index Key
  pub cik: Option<i64>,

  /// Tickers available on this date, defaults to the most recent date
  pub date: Option<NaiveDate>,

  /// Only actively traded tickers on the queried date (server default: true)
  pub active: Option<bool>,

  /// Terms to search for within the ticker and/or company name.
  /// When present the server ignores `sort` and orders by relevance.
  pub search: Option<String>,

  pub sort: Option<Sort>,
  pub order: Option<Order>,

  /// Page size, server default 100, max 1000
  pub limit: Option<u32>,
}

impl ListTickersParams {
  pub fn with_ticker(&self, comparator: Comparator, ticker: impl Into<String>) -> Self {
    let ticker = ticker.into();
    self.with(|p| p.ticker.set(comparator, ticker))
  }

  pub fn with_type(&self, ticker_type: impl Into<String>) -> Self {
    let ticker_type = ticker_type.into();
    self.with(|p| p.ticker_type = Some(ticker_type))
  }

  pub fn with_market(&self, market: AssetClass) -> Self {
    self.with(|p| p.market = Some(market))
  }

  pub fn with_exchange(&self, exchange: impl Into<String>) -> Self {
    let exchange = exchange.into();
    self.with(|p| p.exchange = Some(exchange))
  }

  pub fn with_cusip(&self, cusip: i64) -> Self {
    self.with(|p| p.cusip = Some(cusip))
  }

  pub fn with_cik(&self, cik: i64) -> Self {
    self.with(|p| p.cik = Some(cik))
  }

  pub fn with_date(&self, date: NaiveDate) -> Self {
    self.with(|p| p.date = Some(date))
  }

  pub fn with_active(&self, active: bool) -> Self {
    self.with(|p| p.active = Some(active))
  }

  pub fn with_search(&self, search: impl Into<String>) -> Self {
    let search = search.into();
    self.with(|p| p.search = Some(search))
  }
}

impl_list_options!(ListTickersParams);

impl Params for ListTickersParams {
  fn write_query(&self, query: &mut QueryWriter) {
    query
      .range("ticker", &self.ticker)
      .opt("type", &self.ticker_type)
      .opt("market", &self.market)
      .opt("exchange", &self.exchange)
      .opt("cusip", &self.cusip)
      .opt("cik", &self.cik)
      .opt("date", &self.date)
      .opt("active", &self.active)
      .opt("search", &self.search)
      .opt("sort", &self.sort)
      .opt("order", &self.order)
      .opt("limit", &self.limit);
  }
}

/// Response of the ListTickers operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListTickersResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  /// Tickers matching the query
  #[serde(default)]
  pub results: Vec<Ticker>,
}

/// Parameters for the GetTickerDetails operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetTickerDetailsParams {
  /// Ticker symbol of the asset (path)
  pub ticker: String,

  /// Details as of this date. SEC filing data is matched against the
  /// filing's period of report date, not its submission date.
  pub date: Option<NaiveDate>,
}

impl GetTickerDetailsParams {
  pub fn new(ticker: impl Into<String>) -> Self {
    Self { ticker: ticker.into(), date: None }
  }

  pub fn with_date(&self, date: NaiveDate) -> Self {
    self.with(|p| p.date = Some(date))
  }
}

impl Params for GetTickerDetailsParams {
  fn write_query(&self, query: &mut QueryWriter) {
    query.opt("date", &self.date);
  }

  fn path_params(&self) -> BTreeMap<&'static str, String> {
    BTreeMap::from([("ticker", self.ticker.clone())])
  }
}

/// Response of the GetTickerDetails operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTickerDetailsResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  pub results: Option<Ticker>,
}

/// Parameters for the ListTickerNews operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListTickerNewsParams {
  /// Articles mentioning this ticker
  pub ticker: RangeFilter<String>,

  /// Articles published on, before or after this instant
  pub published_utc: RangeFilter<Millis>,

  pub sort: Option<Sort>,
  pub order: Option<Order>,

  /// Page size, server default 10, max 1000
  pub limit: Option<u32>,
}

impl ListTickerNewsParams {
  pub fn with_ticker(&self, comparator: Comparator, ticker: impl Into<String>) -> Self {
    let ticker = ticker.into();
    self.with(|p| p.ticker.set(comparator, ticker))
  }

  pub fn with_published_utc(&self, comparator: Comparator, published: Millis) -> Self {
    self.with(|p| p.published_utc.set(comparator, published))
  }
}

impl_list_options!(ListTickerNewsParams);

impl Params for ListTickerNewsParams {
  fn write_query(&self, query: &mut QueryWriter) {
    query
      .range("ticker", &self.ticker)
      .range("published_utc", &self.published_utc)
      .opt("sort", &self.sort)
      .opt("order", &self.order)
      .opt("limit", &self.limit);
  }
}

/// Response of the ListTickerNews operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListTickerNewsResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  #[serde(default)]
  pub results: Vec<TickerNews>,
}

/// Parameters for the GetTickerRelatedCompanies operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetTickerRelatedCompaniesParams {
  /// Ticker symbol of the asset (path)
  pub ticker: String,
}

impl GetTickerRelatedCompaniesParams {
  pub fn new(ticker: impl Into<String>) -> Self {
    Self { ticker: ticker.into() }
  }
}

impl Params for GetTickerRelatedCompaniesParams {
  fn write_query(&self, _query: &mut QueryWriter) {}

  fn path_params(&self) -> BTreeMap<&'static str, String> {
    BTreeMap::from([("ticker", self.ticker.clone())])
  }
}

/// Response of the GetTickerRelatedCompanies operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTickerRelatedCompaniesResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  #[serde(default)]
  pub results: Vec<RelatedCompany>,
}

/// Parameters for the GetTickerTypes operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTickerTypesParams {
  pub asset_class: Option<AssetClass>,
  pub locale: Option<MarketLocale>,
}

impl GetTickerTypesParams {
  pub fn with_asset_class(&self, asset_class: AssetClass) -> Self {
    self.with(|p| p.asset_class = Some(asset_class))
  }

  pub fn with_locale(&self, locale: MarketLocale) -> Self {
    self.with(|p| p.locale = Some(locale))
  }
}

impl Params for GetTickerTypesParams {
  fn write_query(&self, query: &mut QueryWriter) {
    query.opt("asset_class", &self.asset_class).opt("locale", &self.locale);
  }
}

/// Response of the GetTickerTypes operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTickerTypesResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  #[serde(default)]
  pub results: Vec<TickerType>,
}

/// Parameters for the GetTickerEvents operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetTickerEventsParams {
  /// Ticker, CUSIP or composite FIGI (path). A ticker resolves to the entity
  /// currently using it.
  pub id: String,

  /// Comma-separated event types, all supported types when unset
  pub types: Option<String>,
}

impl GetTickerEventsParams {
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into(), types: None }
  }

  /// Event types to include, sent as a single comma-joined value
  pub fn with_types<I, S>(&self, types: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let joined = types.into_iter().map(|t| t.as_ref().to_string()).collect::<Vec<_>>().join(",");
    self.with(|p| p.types = Some(joined))
  }
}

impl Params for GetTickerEventsParams {
  fn write_query(&self, query: &mut QueryWriter) {
    query.opt("types", &self.types);
  }

  fn path_params(&self) -> BTreeMap<&'static str, String> {
    BTreeMap::from([("id", self.id.clone())])
  }
}

/// Response of the GetTickerEvents operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTickerEventsResponse {
  #[serde(flatten)]
  pub base: BaseResponse,

  #[serde(default)]
  pub results: Vec<TickerEventResult>,
}

/// Detailed information on a ticker symbol
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ticker {
  pub active: Option<bool>,
  pub address: Option<CompanyAddress>,
  pub branding: Option<Branding>,
  pub cik: Option<String>,
  pub composite_figi: Option<String>,
  pub currency_name: Option<String>,
  pub currency_symbol: Option<String>,
  pub base_currency_name: Option<String>,
  pub base_currency_symbol: Option<String>,
  pub delisted_utc: Option<Time>,
  pub description: Option<String>,
  pub homepage_url: Option<String>,
  pub last_updated_utc: Option<Time>,
  pub list_date: Option<NaiveDate>,
  pub locale: Option<String>,
  pub market: Option<String>,
  pub market_cap: Option<f64>,
  pub name: Option<String>,
  pub phone_number: Option<String>,
  pub primary_exchange: Option<String>,
  pub share_class_figi: Option<String>,
  pub share_class_shares_outstanding: Option<i64>,
  pub sic_code: Option<String>,
  pub sic_description: Option<String>,
  #[serde(default)]
  pub ticker: String,
  pub ticker_root: Option<String>,
  pub ticker_suffix: Option<String>,
  pub total_employees: Option<i32>,
  #[serde(rename = "type")]
  pub ticker_type: Option<String>,
  pub weighted_shares_outstanding: Option<i64>,
  pub source_feed: Option<String>,
}

/// Physical address of a company
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompanyAddress {
  pub address1: Option<String>,
  pub address2: Option<String>,
  pub city: Option<String>,
  pub postal_code: Option<String>,
  pub state: Option<String>,
}

/// Brand assets of a company
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Branding {
  pub logo_url: Option<String>,
  pub icon_url: Option<String>,
}

/// A news article
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickerNews {
  pub amp_url: Option<String>,
  pub article_url: Option<String>,
  pub author: Option<String>,
  pub description: Option<String>,
  pub id: Option<String>,
  pub image_url: Option<String>,
  #[serde(default)]
  pub insights: Vec<Insight>,
  #[serde(default)]
  pub keywords: Vec<String>,
  pub published_utc: Option<Time>,
  pub publisher: Option<Publisher>,
  #[serde(default)]
  pub tickers: Vec<String>,
  pub title: Option<String>,
}

/// Sentiment for one ticker mentioned in an article
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insight {
  pub ticker: String,
  pub sentiment: String,
  pub sentiment_reasoning: String,
}

/// Publisher of a news article
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Publisher {
  pub favicon_url: Option<String>,
  pub homepage_url: Option<String>,
  pub logo_url: Option<String>,
  pub name: Option<String>,
}

/// Ticker related through news or SEC filings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedCompany {
  pub ticker: String,
}

/// A ticker type code understood by the API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickerType {
  pub asset_class: Option<String>,
  pub code: Option<String>,
  pub description: Option<String>,
  pub locale: Option<String>,
}

/// Events for one entity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerEventResult {
  /// Company name
  pub name: String,
  pub events: Vec<TickerEvent>,
}

/// A single ticker event; the payload field matching `event_type` is set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerEvent {
  pub date: Option<NaiveDate>,
  #[serde(rename = "type")]
  pub event_type: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ticker_change: Option<TickerChangeEvent>,
}

/// Payload of a `ticker_change` event
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerChangeEvent {
  pub ticker: String,
}
