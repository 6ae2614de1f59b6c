//! Comparison operators for range-filterable query parameters

use crate::error::Error;
use std::str::FromStr;

/// Comparison applied to a filterable query parameter.
///
/// Only selects which wire key (`field`, `field.lt`, ...) receives a value;
/// the comparator itself is never sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
  /// Equal to
  Eq,
  /// Less than
  Lt,
  /// Less than or equal to
  Lte,
  /// Greater than
  Gt,
  /// Greater than or equal to
  Gte,
}

impl Comparator {
  /// Every comparator, in wire-key order
  pub const ALL: [Comparator; 5] =
    [Comparator::Eq, Comparator::Lt, Comparator::Lte, Comparator::Gt, Comparator::Gte];

  /// Suffix appended to the field's wire key, `None` for equality
  pub fn key_suffix(&self) -> Option<&'static str> {
    match self {
      Comparator::Eq => None,
      Comparator::Lt => Some("lt"),
      Comparator::Lte => Some("lte"),
      Comparator::Gt => Some("gt"),
      Comparator::Gte => Some("gte"),
    }
  }
}

impl std::fmt::Display for Comparator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Comparator::Eq => write!(f, "eq"),
      Comparator::Lt => write!(f, "lt"),
      Comparator::Lte => write!(f, "lte"),
      Comparator::Gt => write!(f, "gt"),
      Comparator::Gte => write!(f, "gte"),
    }
  }
}

impl FromStr for Comparator {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "eq" => Ok(Comparator::Eq),
      "lt" => Ok(Comparator::Lt),
      "lte" => Ok(Comparator::Lte),
      "gt" => Ok(Comparator::Gt),
      "gte" => Ok(Comparator::Gte),
      other => Err(Error::UnknownComparator(other.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_round_trip() {
    for c in Comparator::ALL {
      assert_eq!(c.to_string().parse::<Comparator>().unwrap(), c);
    }
  }

  #[test]
  fn test_unknown_comparator_fails() {
    let err = "between".parse::<Comparator>().unwrap_err();
    assert!(matches!(err, Error::UnknownComparator(ref s) if s == "between"));
    assert!("EQ".parse::<Comparator>().is_err());
  }

  #[test]
  fn test_key_suffix() {
    assert_eq!(Comparator::Eq.key_suffix(), None);
    assert_eq!(Comparator::Gte.key_suffix(), Some("gte"));
  }
}
