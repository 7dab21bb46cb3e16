#![cfg(all(feature = "test", feature = "reqwest"))]

// self
use auth0_auth_api::{
	_preludet::*,
	api::AuthApi,
	config::AuthApiConfig,
	error::{ArgumentError, Error},
};

const DOMAIN: &str = "domain.auth0.com";

#[test]
fn accepts_domain_with_no_scheme() {
	let api = AuthApi::new("me.something.com", TEST_CLIENT_ID, TEST_CLIENT_SECRET)
		.expect("Bare domains should be accepted.");
	let parsed = Url::parse(api.base_url().as_str()).expect("Base URL should parse.");

	assert_eq!(parsed.host_str(), Some("me.something.com"));
	assert_eq!(parsed.scheme(), "https");
}

#[test]
fn accepts_domain_with_http_scheme() {
	let api = AuthApi::new("http://me.something.com", TEST_CLIENT_ID, TEST_CLIENT_SECRET)
		.expect("Domains with an explicit scheme should be accepted.");

	assert_eq!(api.base_url().host_str(), Some("me.something.com"));
	assert_eq!(api.base_url().scheme(), "http");
}

#[test]
fn rejects_each_missing_setting_by_name() {
	let cases = [
		(("", TEST_CLIENT_ID, TEST_CLIENT_SECRET), "domain"),
		((DOMAIN, "", TEST_CLIENT_SECRET), "client_id"),
		((DOMAIN, TEST_CLIENT_ID, ""), "client_secret"),
	];

	for ((domain, client_id, client_secret), name) in cases {
		let err = AuthApi::new(domain, client_id, client_secret)
			.expect_err("Empty configuration values should be rejected.");

		assert!(
			matches!(&err, Error::InvalidArgument(ArgumentError::Empty { name: n }) if *n == name),
			"Unexpected error for {name}: {err:?}."
		);
		assert_eq!(err.to_string(), format!("'{name}' cannot be empty."));
	}
}

#[test]
fn rejects_unparseable_domains() {
	let err = AuthApiConfig::new("http://exa mple.com", TEST_CLIENT_ID, TEST_CLIENT_SECRET)
		.expect_err("Domains with spaces should be rejected.");

	assert!(matches!(err, Error::InvalidArgument(ArgumentError::InvalidUrl { name: "domain", .. })));
}

#[test]
fn debug_output_hides_the_secret() {
	let api = AuthApi::new(DOMAIN, TEST_CLIENT_ID, TEST_CLIENT_SECRET)
		.expect("Configuration should be valid.");

	assert!(!format!("{api:?}").contains(TEST_CLIENT_SECRET));
	assert!(!format!("{:?}", api.config()).contains(TEST_CLIENT_SECRET));
	assert_eq!(api.config().client_secret().expose(), TEST_CLIENT_SECRET);
}
