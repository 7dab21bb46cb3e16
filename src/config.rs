//! Validated, immutable client configuration.

// self
use crate::{
	_prelude::*,
	error::{ArgumentError, require},
};

/// Settings shared by every builder and request issued through an [`AuthApi`](crate::api::AuthApi).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthApiConfig {
	base_url: Url,
	client_id: String,
	client_secret: ClientSecret,
}
impl AuthApiConfig {
	/// Validates and normalizes the tenant domain plus client credentials.
	///
	/// `domain` may be a bare host (`tenant.auth0.com`), in which case `https` is assumed, or a
	/// URL with an explicit scheme (`http://localhost:8080`), which is preserved.
	pub fn new(
		domain: impl AsRef<str>,
		client_id: impl AsRef<str>,
		client_secret: impl AsRef<str>,
	) -> Result<Self> {
		let domain = require("domain", domain.as_ref())?;
		let client_id = require("client_id", client_id.as_ref())?;
		let client_secret = require("client_secret", client_secret.as_ref())?;

		Ok(Self {
			base_url: normalize_domain(domain)?,
			client_id: client_id.to_owned(),
			client_secret: ClientSecret::new(client_secret),
		})
	}

	/// Absolute origin every endpoint is resolved against.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// OAuth client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Client secret; callers must avoid logging the exposed value.
	pub fn client_secret(&self) -> &ClientSecret {
		&self.client_secret
	}

	/// Resolves `segments` below the base URL path.
	pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
		let mut url = self.base_url.clone();

		// `normalize_domain` rejects cannot-be-a-base URLs, so the segment list is always available.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}

		url
	}
}

/// Redacted client secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);
impl ClientSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ClientSecret").field(&"<redacted>").finish()
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

fn normalize_domain(domain: &str) -> Result<Url, ArgumentError> {
	let domain = domain.trim();
	let candidate =
		if domain.contains("://") { domain.to_owned() } else { format!("https://{domain}") };
	let url = Url::parse(&candidate)
		.map_err(|source| ArgumentError::InvalidUrl { name: "domain", source: Some(source) })?;

	if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
		return Err(ArgumentError::InvalidUrl { name: "domain", source: None });
	}

	Ok(url)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn config(domain: &str) -> AuthApiConfig {
		AuthApiConfig::new(domain, "clientId", "clientSecret")
			.expect("Configuration fixture should be valid.")
	}

	#[test]
	fn bare_domain_defaults_to_https() {
		let config = config("me.something.com");

		assert_eq!(config.base_url().scheme(), "https");
		assert_eq!(config.base_url().host_str(), Some("me.something.com"));
	}

	#[test]
	fn explicit_scheme_is_preserved() {
		let config = config("http://me.something.com");

		assert_eq!(config.base_url().scheme(), "http");
		assert_eq!(config.base_url().host_str(), Some("me.something.com"));
	}

	#[test]
	fn endpoint_appends_segments_below_base_path() {
		assert_eq!(
			config("domain.auth0.com").endpoint(&["v2", "logout"]).as_str(),
			"https://domain.auth0.com/v2/logout"
		);
		assert_eq!(
			config("https://proxy.example.com/tenant/").endpoint(&["userinfo"]).as_str(),
			"https://proxy.example.com/tenant/userinfo"
		);
		assert_eq!(
			config("http://127.0.0.1:8080").endpoint(&["authorize"]).as_str(),
			"http://127.0.0.1:8080/authorize"
		);
	}

	#[test]
	fn domain_without_host_is_rejected() {
		let err = AuthApiConfig::new("mailto:someone", "clientId", "clientSecret")
			.expect_err("Cannot-be-a-base URLs should be rejected.");

		assert_eq!(err.argument_name(), Some("domain"));

		let err = AuthApiConfig::new("https://", "clientId", "clientSecret")
			.expect_err("URLs without a host should be rejected.");

		assert_eq!(err.argument_name(), Some("domain"));
	}

	#[test]
	fn secret_formatters_redact() {
		let config = config("domain.auth0.com");

		assert_eq!(config.client_secret().expose(), "clientSecret");
		assert_eq!(format!("{:?}", config.client_secret()), "ClientSecret(\"<redacted>\")");
		assert_eq!(format!("{}", config.client_secret()), "<redacted>");
		assert!(!format!("{config:?}").contains("clientSecret\""));
	}
}
