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

//! Options contract endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use mdapi_core::{Endpoint, Result};
use mdapi_models::{
  GetOptionsContractParams, GetOptionsContractResponse, ListOptionsContractsParams,
  ListOptionsContractsResponse,
};
use std::sync::Arc;
use tracing::instrument;

pub struct OptionsEndpoints {
  transport: Arc<Transport>,
}

impl_endpoint_base!(OptionsEndpoints);

impl OptionsEndpoints {
  /// A single contract by its options ticker
  #[instrument(skip(self, params), fields(ticker = %params.ticker))]
  pub async fn get_options_contract(
    &self,
    params: &GetOptionsContractParams,
  ) -> Result<GetOptionsContractResponse> {
    self.transport().get(&Endpoint::GET_OPTIONS_CONTRACT, params).await
  }

  /// One page of contracts, e.g. a chain for one underlying
  #[instrument(skip(self, params))]
  pub async fn list_options_contracts(
    &self,
    params: &ListOptionsContractsParams,
  ) -> Result<ListOptionsContractsResponse> {
    self.transport().get(&Endpoint::LIST_OPTIONS_CONTRACTS, params).await
  }
}
