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

use crate::endpoints::{
  options::OptionsEndpoints, splits::SplitEndpoints, tickers::TickerEndpoints,
};
use crate::transport::Transport;
use mdapi_core::{Config, Result};
use mdapi_models::{
  GetOptionsContractParams, GetOptionsContractResponse, GetTickerDetailsParams,
  GetTickerDetailsResponse, GetTickerEventsParams, GetTickerEventsResponse,
  GetTickerRelatedCompaniesParams, GetTickerRelatedCompaniesResponse, GetTickerTypesParams,
  GetTickerTypesResponse, ListOptionsContractsParams, ListOptionsContractsResponse,
  ListSplitsParams, ListSplitsResponse, ListTickerNewsParams, ListTickerNewsResponse,
  ListTickersParams, ListTickersResponse,
};
use std::sync::Arc;
use tracing::info;

/// Main market-data API client
///
/// Every operation is available directly on the client and through the
/// endpoint group it belongs to. The client is cheap to clone and can be
/// shared between tasks.
///
/// # Examples
///
/// ```ignore
/// use mdapi_client::MarketDataClient;
/// use mdapi_core::Config;
/// use mdapi_models::{Comparator, ListOptionsContractsParams, ContractType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///   let client = MarketDataClient::new(Config::from_env()?)?;
///
///   let params = ListOptionsContractsParams::default()
///     .with_underlying_ticker(Comparator::Eq, "SPY")
///     .with_contract_type(ContractType::Call)
///     .with_strike_price(Comparator::Gte, 400.0)
///     .with_strike_price(Comparator::Lt, 420.0);
///
///   let chain = client.list_options_contracts(&params).await?;
///   println!("{} contracts", chain.results.len());
///   Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct MarketDataClient {
  transport: Arc<Transport>,
}

impl MarketDataClient {
  /// Create a new client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    info!("Market-data client targeting {}", transport.base_url());
    Ok(Self { transport })
  }

  /// Ticker, news, related-company, ticker-type and ticker-event endpoints
  pub fn tickers(&self) -> TickerEndpoints {
    TickerEndpoints::new(self.transport.clone())
  }

  /// Stock split endpoints
  pub fn splits(&self) -> SplitEndpoints {
    SplitEndpoints::new(self.transport.clone())
  }

  /// Options contract endpoints
  pub fn options(&self) -> OptionsEndpoints {
    OptionsEndpoints::new(self.transport.clone())
  }

  pub async fn list_tickers(&self, params: &ListTickersParams) -> Result<ListTickersResponse> {
    self.tickers().list_tickers(params).await
  }

  pub async fn get_ticker_details(
    &self,
    params: &GetTickerDetailsParams,
  ) -> Result<GetTickerDetailsResponse> {
    self.tickers().get_ticker_details(params).await
  }

  pub async fn list_ticker_news(
    &self,
    params: &ListTickerNewsParams,
  ) -> Result<ListTickerNewsResponse> {
    self.tickers().list_ticker_news(params).await
  }

  pub async fn get_ticker_related_companies(
    &self,
    params: &GetTickerRelatedCompaniesParams,
  ) -> Result<GetTickerRelatedCompaniesResponse> {
    self.tickers().get_ticker_related_companies(params).await
  }

  pub async fn get_ticker_types(
    &self,
    params: &GetTickerTypesParams,
  ) -> Result<GetTickerTypesResponse> {
    self.tickers().get_ticker_types(params).await
  }

  pub async fn get_ticker_events(
    &self,
    params: &GetTickerEventsParams,
  ) -> Result<GetTickerEventsResponse> {
    self.tickers().get_ticker_events(params).await
  }

  pub async fn list_splits(&self, params: &ListSplitsParams) -> Result<ListSplitsResponse> {
    self.splits().list_splits(params).await
  }

  pub async fn get_options_contract(
    &self,
    params: &GetOptionsContractParams,
  ) -> Result<GetOptionsContractResponse> {
    self.options().get_options_contract(params).await
  }

  pub async fn list_options_contracts(
    &self,
    params: &ListOptionsContractsParams,
  ) -> Result<ListOptionsContractsResponse> {
    self.options().list_options_contracts(params).await
  }
}

impl std::fmt::Debug for MarketDataClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MarketDataClient").field("transport", &self.transport).finish()
  }
}
