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

//! Ticker reference endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use mdapi_core::{Endpoint, Result};
use mdapi_models::{
  GetTickerDetailsParams, GetTickerDetailsResponse, GetTickerEventsParams, GetTickerEventsResponse,
  GetTickerRelatedCompaniesParams, GetTickerRelatedCompaniesResponse, GetTickerTypesParams,
  GetTickerTypesResponse, ListTickerNewsParams, ListTickerNewsResponse, ListTickersParams,
  ListTickersResponse,
};
use std::sync::Arc;
use tracing::instrument;

/// Tickers, ticker details, news, related companies, ticker types and events
pub struct TickerEndpoints {
  transport: Arc<Transport>,
}

impl_endpoint_base!(TickerEndpoints);

impl TickerEndpoints {
  /// One page of tickers matching the filters
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let params = ListTickersParams::default()
  ///   .with_ticker(Comparator::Gte, "A")
  ///   .with_market(AssetClass::Stocks)
  ///   .with_limit(100);
  /// let page = client.tickers().list_tickers(&params).await?;
  /// for ticker in &page.results {
  ///   println!("{} {:?}", ticker.ticker, ticker.name);
  /// }
  /// ```
  #[instrument(skip(self, params))]
  pub async fn list_tickers(&self, params: &ListTickersParams) -> Result<ListTickersResponse> {
    self.transport().get(&Endpoint::LIST_TICKERS, params).await
  }

  /// Details of a single ticker
  #[instrument(skip(self, params), fields(ticker = %params.ticker))]
  pub async fn get_ticker_details(
    &self,
    params: &GetTickerDetailsParams,
  ) -> Result<GetTickerDetailsResponse> {
    self.transport().get(&Endpoint::GET_TICKER_DETAILS, params).await
  }

  /// News articles, optionally filtered by ticker and publish time
  #[instrument(skip(self, params))]
  pub async fn list_ticker_news(
    &self,
    params: &ListTickerNewsParams,
  ) -> Result<ListTickerNewsResponse> {
    self.transport().get(&Endpoint::LIST_TICKER_NEWS, params).await
  }

  #[instrument(skip(self, params), fields(ticker = %params.ticker))]
  pub async fn get_ticker_related_companies(
    &self,
    params: &GetTickerRelatedCompaniesParams,
  ) -> Result<GetTickerRelatedCompaniesResponse> {
    self.transport().get(&Endpoint::GET_TICKER_RELATED_COMPANIES, params).await
  }

  /// Ticker type codes, e.g. `CS` for common stock
  #[instrument(skip(self, params))]
  pub async fn get_ticker_types(
    &self,
    params: &GetTickerTypesParams,
  ) -> Result<GetTickerTypesResponse> {
    self.transport().get(&Endpoint::GET_TICKER_TYPES, params).await
  }

  /// Ticker change history for a ticker, CUSIP or FIGI
  #[instrument(skip(self, params), fields(id = %params.id))]
  pub async fn get_ticker_events(
    &self,
    params: &GetTickerEventsParams,
  ) -> Result<GetTickerEventsResponse> {
    self.transport().get(&Endpoint::GET_TICKER_EVENTS, params).await
  }
}
