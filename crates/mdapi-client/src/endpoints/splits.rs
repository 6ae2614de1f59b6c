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

//! Stock split endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use mdapi_core::{Endpoint, Result};
use mdapi_models::{ListSplitsParams, ListSplitsResponse};
use std::sync::Arc;
use tracing::instrument;

pub struct SplitEndpoints {
  transport: Arc<Transport>,
}

impl_endpoint_base!(SplitEndpoints);

impl SplitEndpoints {
  /// One page of historical splits
  #[instrument(skip(self, params))]
  pub async fn list_splits(&self, params: &ListSplitsParams) -> Result<ListSplitsResponse> {
    self.transport().get(&Endpoint::LIST_SPLITS, params).await
  }
}
