use thiserror::Error;

/// The main error type for mdapi-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// An ISO-8601 timestamp matched none of the accepted layouts.
  /// `source` is the error of the last layout tried.
  #[error("Time: unrecognized timestamp format {input:?}: {source}")]
  TimestampFormat {
    input: String,
    #[source]
    source: chrono::ParseError,
  },

  /// An epoch timestamp payload was not a representable integer
  #[error("{kind}: invalid epoch value {input:?}")]
  EpochFormat { kind: &'static str, input: String },

  /// Comparator text outside eq/lt/lte/gt/gte
  #[error("Unknown comparator: {0:?}")]
  UnknownComparator(String),

  /// A path placeholder had no value in the parameter object
  #[error("Missing path parameter: {0}")]
  MissingPathParam(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-success response from the API
  #[error("API error ({status}): {message}")]
  Api { status: u16, message: String },
}

/// Result type alias for mdapi-* crates
pub type Result<T> = std::result::Result<T, Error>;
