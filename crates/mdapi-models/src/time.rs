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

//! Timestamp wrappers for the time encodings used by the API.
//!
//! All three wrap the same `DateTime<Utc>` instant and differ only on the wire:
//!
//! - [`Time`]: ISO-8601 text, always written as `YYYY-MM-DDTHH:MM:SS.mmmZ`
//! - [`Millis`]: integer milliseconds since the Unix epoch
//! - [`Nanos`]: integer nanoseconds since the Unix epoch

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use mdapi_core::{Error, Result};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Layout written by [`Time`]
pub const CANONICAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A layout accepted when decoding [`Time`]
#[derive(Debug, Clone, Copy)]
enum Layout {
  /// Carries a numeric UTC offset
  Offset(&'static str),
  /// Literal `Z` suffix
  Zulu(&'static str),
}

impl Layout {
  fn parse(&self, text: &str) -> std::result::Result<DateTime<Utc>, ParseError> {
    match self {
      Layout::Offset(fmt) => DateTime::parse_from_str(text, fmt).map(|t| t.with_timezone(&Utc)),
      Layout::Zulu(fmt) => NaiveDateTime::parse_from_str(text, fmt).map(|t| t.and_utc()),
    }
  }
}

/// Tried in order, first match wins.
///
/// The second and fourth layouts take an optional fraction of any length
/// after the seconds; the others need exactly three digits.
const TIME_LAYOUTS: [Layout; 4] = [
  Layout::Offset("%Y-%m-%dT%H:%M:%S%.3f%z"),
  Layout::Offset("%Y-%m-%dT%H:%M:%S%.f%:z"),
  Layout::Zulu("%Y-%m-%dT%H:%M:%S%.3fZ"),
  Layout::Zulu("%Y-%m-%dT%H:%M:%S%.fZ"),
];

/// ISO-8601 timestamp such as `"2023-03-23T00:00:00.000Z"`.
///
/// Decoding accepts a numeric offset with or without fractional seconds as
/// well as the `Z` forms. Encoding always normalizes to UTC with millisecond
/// precision, so the original offset is not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub DateTime<Utc>);

impl Time {
  /// Parse wire text, with or without surrounding double quotes
  pub fn parse(input: &str) -> Result<Self> {
    let text = input.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(input);

    TIME_LAYOUTS[1..]
      .iter()
      .fold(TIME_LAYOUTS[0].parse(text), |parsed, layout| parsed.or_else(|_| layout.parse(text)))
      .map(Time)
      .map_err(|source| Error::TimestampFormat { input: input.to_string(), source })
  }

  /// Canonical wire form
  pub fn format_canonical(&self) -> String {
    self.0.format(CANONICAL_TIME_FORMAT).to_string()
  }

  pub fn into_inner(self) -> DateTime<Utc> {
    self.0
  }
}

impl From<DateTime<Utc>> for Time {
  fn from(value: DateTime<Utc>) -> Self {
    Time(value)
  }
}

impl FromStr for Time {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Time::parse(s)
  }
}

impl fmt::Display for Time {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.format_canonical())
  }
}

impl Serialize for Time {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&self.format_canonical())
  }
}

impl<'de> Deserialize<'de> for Time {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let value = String::deserialize(deserializer)?;
    Time::parse(&value).map_err(de::Error::custom)
  }
}

/// Accepts a bare JSON integer and names the wrapper in its error message
struct EpochVisitor {
  kind: &'static str,
  unit: &'static str,
}

impl<'de> Visitor<'de> for EpochVisitor {
  type Value = i64;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: an integer count of {} since the Unix epoch", self.kind, self.unit)
  }

  fn visit_i64<E>(self, v: i64) -> std::result::Result<i64, E>
  where
    E: de::Error,
  {
    Ok(v)
  }

  fn visit_u64<E>(self, v: u64) -> std::result::Result<i64, E>
  where
    E: de::Error,
  {
    i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
  }
}

fn parse_epoch(kind: &'static str, input: &str) -> Result<i64> {
  input.parse::<i64>().map_err(|_| Error::EpochFormat { kind, input: input.to_string() })
}

/// Unix time in milliseconds.
///
/// Bounded by the `DateTime<Utc>` range (about +/-262,000 years, roughly
/// 8.2e15 ms); counts outside it fail with `Error::EpochFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millis(pub DateTime<Utc>);

impl Millis {
  const KIND: &'static str = "Millis";

  pub fn from_epoch(millis: i64) -> Result<Self> {
    DateTime::from_timestamp_millis(millis)
      .map(Millis)
      .ok_or_else(|| Error::EpochFormat { kind: Self::KIND, input: millis.to_string() })
  }

  /// Parse a bare base-10 integer
  pub fn parse(input: &str) -> Result<Self> {
    Self::from_epoch(parse_epoch(Self::KIND, input)?)
  }

  /// Whole milliseconds since the epoch; sub-millisecond precision is dropped
  pub fn epoch(&self) -> i64 {
    self.0.timestamp_millis()
  }

  pub fn into_inner(self) -> DateTime<Utc> {
    self.0
  }
}

impl From<DateTime<Utc>> for Millis {
  fn from(value: DateTime<Utc>) -> Self {
    Millis(value)
  }
}

impl FromStr for Millis {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Millis::parse(s)
  }
}

impl fmt::Display for Millis {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.epoch())
  }
}

impl Serialize for Millis {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_i64(self.epoch())
  }
}

impl<'de> Deserialize<'de> for Millis {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let millis =
      deserializer.deserialize_i64(EpochVisitor { kind: Millis::KIND, unit: "milliseconds" })?;
    Millis::from_epoch(millis).map_err(de::Error::custom)
  }
}

/// Unix time in nanoseconds.
///
/// Only instants whose nanosecond count fits in an `i64` (roughly years
/// 1677 to 2262) can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nanos(DateTime<Utc>);

impl Nanos {
  const KIND: &'static str = "Nanos";

  pub fn from_epoch(nanos: i64) -> Result<Self> {
    // floor semantics keep the sub-second part non-negative before the epoch
    let secs = nanos.div_euclid(NANOS_PER_SEC);
    let subsec = nanos.rem_euclid(NANOS_PER_SEC) as u32;
    DateTime::from_timestamp(secs, subsec)
      .map(Nanos)
      .ok_or_else(|| Error::EpochFormat { kind: Self::KIND, input: nanos.to_string() })
  }

  /// Parse a bare base-10 integer
  pub fn parse(input: &str) -> Result<Self> {
    Self::from_epoch(parse_epoch(Self::KIND, input)?)
  }

  pub fn epoch(&self) -> i64 {
    let nanos = i128::from(self.0.timestamp()) * i128::from(NANOS_PER_SEC)
      + i128::from(self.0.timestamp_subsec_nanos());
    // in i64 range by construction
    nanos as i64
  }

  pub fn as_datetime(&self) -> &DateTime<Utc> {
    &self.0
  }

  pub fn into_inner(self) -> DateTime<Utc> {
    self.0
  }
}

impl TryFrom<DateTime<Utc>> for Nanos {
  type Error = Error;

  fn try_from(value: DateTime<Utc>) -> Result<Self> {
    match value.timestamp_nanos_opt() {
      Some(nanos) => Nanos::from_epoch(nanos),
      None => Err(Error::EpochFormat { kind: Self::KIND, input: value.to_rfc3339() }),
    }
  }
}

impl FromStr for Nanos {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Nanos::parse(s)
  }
}

impl fmt::Display for Nanos {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.epoch())
  }
}

impl Serialize for Nanos {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_i64(self.epoch())
  }
}

impl<'de> Deserialize<'de> for Nanos {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let nanos =
      deserializer.deserialize_i64(EpochVisitor { kind: Nanos::KIND, unit: "nanoseconds" })?;
    Nanos::from_epoch(nanos).map_err(de::Error::custom)
  }
}
