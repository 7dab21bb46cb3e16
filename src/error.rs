//! Client-level error types shared across URL builders, requests, and transports.

// crates.io
use oauth2::http::{HeaderMap, StatusCode, header::RETRY_AFTER};
use time::format_description::well_known::Rfc2822;
// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller-supplied argument was rejected before any I/O happened.
	#[error(transparent)]
	InvalidArgument(#[from] ArgumentError),
	/// Provider answered with a non-2xx status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Transport failure (DNS, TCP, TLS, timeout) or an unreadable response.
	#[error(transparent)]
	Network(#[from] NetworkError),
}
impl Error {
	/// Returns the offending parameter name for [`Error::InvalidArgument`] values.
	pub fn argument_name(&self) -> Option<&str> {
		match self {
			Self::InvalidArgument(e) => e.name(),
			_ => None,
		}
	}

	/// Returns the HTTP status of the response that caused the failure, when one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api(e) => Some(e.status),
			Self::Network(NetworkError::ResponseParse { status, .. }) => Some(*status),
			_ => None,
		}
	}
}

/// Argument validation failures raised before a request leaves the process.
#[derive(Debug, ThisError)]
pub enum ArgumentError {
	/// Required value was empty or whitespace.
	#[error("'{name}' cannot be empty.")]
	Empty {
		/// Parameter name.
		name: &'static str,
	},
	/// URL builder is missing a required query parameter.
	#[error("Required parameter '{name}' is missing.")]
	MissingParameter {
		/// Query parameter name.
		name: &'static str,
	},
	/// Value could not be parsed into a usable URL.
	#[error("'{name}' is not a valid URL.")]
	InvalidUrl {
		/// Parameter name.
		name: &'static str,
		/// Underlying parsing failure, when one exists.
		#[source]
		source: Option<url::ParseError>,
	},
	/// Value contains characters that cannot be sent on the wire.
	#[error("'{name}' contains characters that are not allowed in an HTTP header.")]
	InvalidValue {
		/// Parameter name.
		name: &'static str,
	},
	/// Header name or value is not valid HTTP.
	#[error("Header '{name}' has an invalid name or value.")]
	InvalidHeader {
		/// Header name as supplied by the caller.
		name: String,
	},
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	InvalidBody {
		/// Encoding failure.
		#[source]
		source: serde_json::Error,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
}
impl ArgumentError {
	/// Returns the parameter name tied to the failure, if any.
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Empty { name }
			| Self::MissingParameter { name }
			| Self::InvalidUrl { name, .. }
			| Self::InvalidValue { name } => Some(*name),
			Self::InvalidHeader { name } => Some(name.as_str()),
			Self::InvalidBody { .. } | Self::HttpRequest(_) => None,
		}
	}
}

/// Rejects empty or whitespace-only values with [`ArgumentError::Empty`].
pub(crate) fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ArgumentError> {
	if value.trim().is_empty() { Err(ArgumentError::Empty { name }) } else { Ok(value) }
}

/// Non-2xx response returned by the Authentication API.
#[derive(Debug, ThisError)]
#[error("Request failed with status code {status}: {}.", self.message())]
pub struct ApiError {
	/// HTTP status code.
	pub status: u16,
	/// Provider error code (`error` or `code` field).
	pub error: Option<String>,
	/// Human-readable description (`error_description` or `description` field).
	pub description: Option<String>,
	/// Decoded JSON body, or the raw text wrapped in a JSON string when it was not JSON.
	pub body: Option<JsonValue>,
	/// Retry-After hint from upstream, if supplied.
	pub retry_after: Option<Duration>,
}
impl ApiError {
	pub(crate) fn from_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Self {
		let body = decode_error_body(body);
		let field = |keys: [&str; 2]| {
			let object = body.as_ref()?.as_object()?;

			keys.iter().find_map(|key| match object.get(*key)? {
				JsonValue::Null => None,
				JsonValue::String(s) => Some(s.clone()),
				other => Some(other.to_string()),
			})
		};
		let error = field(["error", "code"]);
		let description = field(["error_description", "description"])
			.or_else(|| body.as_ref().and_then(JsonValue::as_str).map(ToOwned::to_owned));

		Self {
			status: status.as_u16(),
			error,
			description,
			body,
			retry_after: parse_retry_after(headers),
		}
	}

	/// Returns the most descriptive message available.
	pub fn message(&self) -> &str {
		self.description
			.as_deref()
			.or(self.error.as_deref())
			.unwrap_or("no error description was returned")
	}
}

/// Transport-level failures (network, IO, undecodable payloads).
#[derive(Debug, ThisError)]
pub enum NetworkError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Authentication API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Authentication API.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure without a structured error.
	#[error("HTTP client error occurred while calling the Authentication API: {message}.")]
	Other {
		/// Transport-supplied message.
		message: String,
	},
	/// Successful response carried a body that does not match the expected shape.
	#[error("Authentication API returned a malformed response.")]
	ResponseParse {
		/// Structured parsing failure, including the JSON path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl NetworkError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for NetworkError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

fn decode_error_body(body: &[u8]) -> Option<JsonValue> {
	if body.iter().all(u8::is_ascii_whitespace) {
		return None;
	}

	serde_json::from_slice(body)
		.ok()
		.or_else(|| Some(JsonValue::String(String::from_utf8_lossy(body).trim().to_owned())))
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		// Hints past `i64::MAX` seconds saturate instead of wrapping negative.
		return Some(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
