//! Builder for `/authorize` redirect URLs.

// self
use crate::{_prelude::*, config::AuthApiConfig, error::require, url_builder::UrlBuilder};

const REQUIRED: &[&str] = &["response_type", "client_id", "redirect_uri", "connection"];

/// Builds the URL end-users are redirected to when starting a login.
///
/// The builder starts with `response_type=code` and the configured `client_id`; callers may
/// override the response type and add `state`, `scope`, `audience`, or any other parameter
/// before calling [`build`](Self::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizeUrlBuilder(UrlBuilder);
impl AuthorizeUrlBuilder {
	/// Creates a builder for the given connection and redirect URI.
	pub fn new(config: &AuthApiConfig, connection: &str, redirect_uri: &str) -> Result<Self> {
		let connection = require("connection", connection)?;
		let redirect_uri = require("redirect_uri", redirect_uri)?;
		let builder = UrlBuilder::new(config.endpoint(&["authorize"]), REQUIRED)
			.with_parameter("response_type", "code")
			.with_parameter("client_id", config.client_id())
			.with_parameter("redirect_uri", redirect_uri)
			.with_parameter("connection", connection);

		Ok(Self(builder))
	}

	/// Overrides the `response_type` (defaults to `code`).
	pub fn with_response_type(self, response_type: impl Into<String>) -> Self {
		self.with_parameter("response_type", response_type)
	}

	/// Sets the opaque `state` value echoed back on the redirect.
	pub fn with_state(self, state: impl Into<String>) -> Self {
		self.with_parameter("state", state)
	}

	/// Sets the space-delimited `scope` value.
	pub fn with_scope(self, scope: impl Into<String>) -> Self {
		self.with_parameter("scope", scope)
	}

	/// Sets the API `audience` the issued access token targets.
	pub fn with_audience(self, audience: impl Into<String>) -> Self {
		self.with_parameter("audience", audience)
	}

	/// Sets or overwrites an arbitrary query parameter.
	pub fn with_parameter(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		Self(self.0.with_parameter(name, value))
	}

	/// Validates required parameters and returns the final URL.
	pub fn build_url(self) -> Result<Url> {
		self.0.build_url()
	}

	/// Validates required parameters and returns the final URL as a string.
	pub fn build(self) -> Result<String> {
		self.0.build()
	}
}
