use thiserror::Error;

/// The main error type for bnb-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Application credentials are missing or unusable
  #[error("Failed to retrieve credentials: {0}")]
  Credentials(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),

  /// One or more required fields were absent from an inbound payload.
  ///
  /// `fields` lists every missing name, not only the first one found.
  #[error("{entity}: missing required field(s): {}", .fields.join(", "))]
  MissingRequiredFields { entity: &'static str, fields: Vec<String> },

  /// A payload value did not have the shape the schema expects
  #[error("Invalid value for `{field}`: expected {expected}")]
  InvalidShape { field: String, expected: &'static str },

  /// The response body did not contain the expected wrapper key
  #[error("Response is missing the `{0}` envelope")]
  MissingEnvelope(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-success status returned by the API
  #[error("API error ({status}): {message}")]
  Api { status: u16, message: String },
}

impl Error {
  /// Whether a retry of the same request could succeed
  pub fn is_retryable(&self) -> bool {
    match self {
      Error::Http(_) => true,
      Error::Api { status, .. } => *status == 429 || *status >= 500,
      _ => false,
    }
  }
}

/// Result type alias for bnb-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_fields_message_lists_every_field() {
    let err = Error::MissingRequiredFields {
      entity: "Listing",
      fields: vec!["name".to_string(), "city".to_string()],
    };
    assert_eq!(err.to_string(), "Listing: missing required field(s): name, city");
  }

  #[test]
  fn test_retryable_statuses() {
    assert!(Error::Api { status: 503, message: String::new() }.is_retryable());
    assert!(Error::Api { status: 429, message: String::new() }.is_retryable());
    assert!(!Error::Api { status: 404, message: String::new() }.is_retryable());
    assert!(Error::Http("connection reset".to_string()).is_retryable());
    assert!(!Error::MissingEnvelope("listing".to_string()).is_retryable());
  }
}
