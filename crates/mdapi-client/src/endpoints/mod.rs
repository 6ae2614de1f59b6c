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

//! Endpoint groups
//!
//! Each group wraps the shared [`Transport`] and exposes one async method per
//! operation, pairing the operation's parameter object with its endpoint
//! descriptor and response type.

pub mod options;
pub mod splits;
pub mod tickers;

use crate::transport::Transport;
use std::sync::Arc;

/// Shared access to the transport for every endpoint group
pub trait EndpointBase {
  fn transport(&self) -> &Arc<Transport>;
}

/// Implements `new` and [`EndpointBase`] for a group holding a `transport` field
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $struct_name {
      /// Create the group over a shared transport
      pub fn new(transport: std::sync::Arc<crate::transport::Transport>) -> Self {
        Self { transport }
      }
    }

    impl crate::endpoints::EndpointBase for $struct_name {
      fn transport(&self) -> &std::sync::Arc<crate::transport::Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::tickers::TickerEndpoints;
  use mdapi_core::Config;

  #[test]
  fn test_groups_share_transport() {
    let config =
      Config::default_with_key("test_key".to_string()).with_base_url("https://mock.api.test");
    let transport = Arc::new(Transport::new(&config).unwrap());

    let tickers = TickerEndpoints::new(transport.clone());

    assert!(Arc::ptr_eq(tickers.transport(), &transport));
    assert_eq!(tickers.transport().base_url(), "https://mock.api.test");
  }
}
