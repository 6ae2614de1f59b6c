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

//! Request parameter building blocks.
//!
//! Every endpoint has a parameter struct implementing [`Params`]. Builder
//! methods never mutate their receiver: each one clones the struct, sets a
//! single field and returns the copy, so a partially built value can be
//! reused as a template.
//!
//! Filterable fields are grouped into a [`RangeFilter`], one slot per
//! [`Comparator`]. A filter on `ticker` renders as `ticker`, `ticker.lt`,
//! `ticker.lte`, `ticker.gt` and `ticker.gte`.

use mdapi_core::Comparator;
use std::collections::BTreeMap;
use std::fmt::Display;

/// One optional value per comparator.
///
/// Several slots may be populated at once, e.g. `gte` and `lt` to query a
/// half-open range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter<T> {
  pub eq: Option<T>,
  pub lt: Option<T>,
  pub lte: Option<T>,
  pub gt: Option<T>,
  pub gte: Option<T>,
}

impl<T> Default for RangeFilter<T> {
  fn default() -> Self {
    Self { eq: None, lt: None, lte: None, gt: None, gte: None }
  }
}

impl<T> RangeFilter<T> {
  /// Store `value` in the slot selected by `comparator`
  pub fn set(&mut self, comparator: Comparator, value: T) {
    *self.slot_mut(comparator) = Some(value);
  }

  pub fn get(&self, comparator: Comparator) -> Option<&T> {
    match comparator {
      Comparator::Eq => self.eq.as_ref(),
      Comparator::Lt => self.lt.as_ref(),
      Comparator::Lte => self.lte.as_ref(),
      Comparator::Gt => self.gt.as_ref(),
      Comparator::Gte => self.gte.as_ref(),
    }
  }

  /// Populated slots in wire-key order
  pub fn iter(&self) -> impl Iterator<Item = (Comparator, &T)> + '_ {
    Comparator::ALL.into_iter().filter_map(move |c| self.get(c).map(|v| (c, v)))
  }

  fn slot_mut(&mut self, comparator: Comparator) -> &mut Option<T> {
    match comparator {
      Comparator::Eq => &mut self.eq,
      Comparator::Lt => &mut self.lt,
      Comparator::Lte => &mut self.lte,
      Comparator::Gt => &mut self.gt,
      Comparator::Gte => &mut self.gte,
    }
  }
}

/// Collects `(key, value)` query pairs in the order they are written.
///
/// Values use their `Display` form: strings verbatim, dates as `YYYY-MM-DD`,
/// numbers and booleans in plain decimal, timestamps in their wire encoding.
#[derive(Debug, Default)]
pub struct QueryWriter {
  pairs: Vec<(String, String)>,
}

impl QueryWriter {
  /// Write `key` if the value is present
  pub fn opt<T: Display>(&mut self, key: &str, value: &Option<T>) -> &mut Self {
    if let Some(value) = value {
      self.pairs.push((key.to_string(), value.to_string()));
    }
    self
  }

  /// Write every populated slot of a range filter
  pub fn range<T: Display>(&mut self, key: &str, filter: &RangeFilter<T>) -> &mut Self {
    for (comparator, value) in filter.iter() {
      let key = match comparator.key_suffix() {
        Some(suffix) => format!("{key}.{suffix}"),
        None => key.to_string(),
      };
      self.pairs.push((key, value.to_string()));
    }
    self
  }

  pub fn into_pairs(self) -> Vec<(String, String)> {
    self.pairs
  }
}

/// A parameter object for one API operation
pub trait Params: Clone {
  /// Copy of `self` with `set` applied; `self` is left untouched
  fn with(&self, set: impl FnOnce(&mut Self)) -> Self {
    let mut next = self.clone();
    set(&mut next);
    next
  }

  /// Write every present query field
  fn write_query(&self, query: &mut QueryWriter);

  /// Values for the `{placeholder}` segments of the endpoint path
  fn path_params(&self) -> BTreeMap<&'static str, String> {
    BTreeMap::new()
  }

  /// Query string pairs, absent fields omitted
  fn query_pairs(&self) -> Vec<(String, String)> {
    let mut query = QueryWriter::default();
    self.write_query(&mut query);
    query.into_pairs()
  }
}

/// Adds `with_sort`, `with_order` and `with_limit` to a list parameter struct
/// with `sort`, `order` and `limit` fields.
macro_rules! impl_list_options {
  ($struct_name:ident) => {
    impl $struct_name {
      /// Field to sort the results on
      pub fn with_sort(&self, sort: mdapi_core::Sort) -> Self {
        self.with(|p| p.sort = Some(sort))
      }

      /// Direction of the sort
      pub fn with_order(&self, order: mdapi_core::Order) -> Self {
        self.with(|p| p.order = Some(order))
      }

      /// Maximum number of results per page
      pub fn with_limit(&self, limit: u32) -> Self {
        self.with(|p| p.limit = Some(limit))
      }
    }
  };
}

pub(crate) use impl_list_options;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_range_filter_set_selects_one_slot() {
    for comparator in Comparator::ALL {
      let mut filter = RangeFilter::default();
      filter.set(comparator, 7);
      let set: Vec<_> = filter.iter().collect();
      assert_eq!(set, vec![(comparator, &7)]);
      for other in Comparator::ALL.into_iter().filter(|c| *c != comparator) {
        assert_eq!(filter.get(other), None);
      }
    }
  }

  #[test]
  fn test_range_filter_keys() {
    let mut filter = RangeFilter::default();
    filter.set(Comparator::Gte, "A");
    filter.set(Comparator::Lt, "B");
    filter.set(Comparator::Eq, "C");

    let mut query = QueryWriter::default();
    query.range("ticker", &filter);
    assert_eq!(
      query.into_pairs(),
      vec![
        ("ticker".to_string(), "C".to_string()),
        ("ticker.lt".to_string(), "B".to_string()),
        ("ticker.gte".to_string(), "A".to_string()),
      ]
    );
  }

  #[test]
  fn test_set_overwrites_slot() {
    let mut filter = RangeFilter::default();
    filter.set(Comparator::Gt, 1.5);
    filter.set(Comparator::Gt, 2.5);
    assert_eq!(filter.gt, Some(2.5));
    assert_eq!(filter.iter().count(), 1);
    assert_eq!(RangeFilter::<f64>::default().iter().count(), 0);
  }

  #[test]
  fn test_opt_skips_absent() {
    let mut query = QueryWriter::default();
    query.opt("active", &Some(true)).opt::<u32>("limit", &None).opt("strike", &Some(100.0));
    assert_eq!(
      query.into_pairs(),
      vec![("active".to_string(), "true".to_string()), ("strike".to_string(), "100".to_string())]
    );
  }
}
