//! Error types shared by the Pagewise crates.
//!
//! Every fallible operation in the workspace returns [`Result`], so callers
//! only ever need to match on one [`Error`] enum.

use thiserror::Error;

/// Errors raised while configuring pagination or rendering navigation.
///
/// Page requests themselves never fail: non-numeric, negative and
/// out-of-range page numbers are coerced and clamped instead.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
	/// An argument is outside the range the calculation is defined for.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A query string could not be decoded.
	#[error("Invalid query: {0}")]
	InvalidQuery(String),

	/// Settings are individually valid but inconsistent with each other.
	#[error("Improperly configured: {0}")]
	ImproperlyConfigured(String),

	/// A renderer could not produce its output.
	#[error("Render error: {0}")]
	Render(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// TOML deserialization error.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_argument_message() {
		let error = Error::InvalidArgument("per_page must be greater than 0".to_string());
		assert_eq!(
			error.to_string(),
			"Invalid argument: per_page must be greater than 0"
		);
	}

	#[rstest]
	#[case(Error::InvalidQuery("bad".to_string()), "Invalid query: bad")]
	#[case(
		Error::ImproperlyConfigured("page_key is empty".to_string()),
		"Improperly configured: page_key is empty"
	)]
	#[case(Error::Render("boom".to_string()), "Render error: boom")]
	fn test_display(#[case] error: Error, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[rstest]
	fn test_io_error_from() {
		let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
		let error: Error = io_error.into();
		assert!(matches!(error, Error::Io(_)));
	}

	#[rstest]
	fn test_toml_error_from() {
		let toml_error = toml::from_str::<toml::Value>("per_page = ").unwrap_err();
		let error: Error = toml_error.into();
		assert!(matches!(error, Error::Toml(_)));
	}

	#[rstest]
	fn test_json_error_from() {
		let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
		let error: Error = json_error.into();
		assert!(matches!(error, Error::Json(_)));
	}
}
