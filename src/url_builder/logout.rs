//! Builder for `/v2/logout` URLs.

// self
use crate::{_prelude::*, config::AuthApiConfig, error::require, url_builder::UrlBuilder};

const REQUIRED: &[&str] = &["returnTo"];

/// Builds the URL end-users are redirected to when ending their session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutUrlBuilder(UrlBuilder);
impl LogoutUrlBuilder {
	/// Creates a builder that returns the user to `return_to_url`.
	///
	/// When `include_client_id` is false the `client_id` parameter is omitted entirely.
	pub fn new(
		config: &AuthApiConfig,
		return_to_url: &str,
		include_client_id: bool,
	) -> Result<Self> {
		let return_to_url = require("return_to_url", return_to_url)?;
		let mut builder = UrlBuilder::new(config.endpoint(&["v2", "logout"]), REQUIRED)
			.with_parameter("returnTo", return_to_url);

		if include_client_id {
			builder = builder.with_parameter("client_id", config.client_id());
		}

		Ok(Self(builder))
	}

	/// Toggles the `federated` flag that also ends the session at the upstream identity provider.
	pub fn use_federated(self, federated: bool) -> Self {
		if federated {
			Self(self.0.with_parameter("federated", ""))
		} else {
			Self(self.0.without_parameter("federated"))
		}
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
