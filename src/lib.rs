//! Typed client for the Auth0 Authentication API—validated authorize/logout URL builders and
//! JSON request execution over a pluggable HTTP transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod json;
pub mod obs;
pub mod request;
pub mod url_builder;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{api::AuthApi, config::AuthApiConfig, http::ReqwestHttpClient};

	/// Client identifier shared by integration tests.
	pub const TEST_CLIENT_ID: &str = "clientId";
	/// Client secret shared by integration tests.
	pub const TEST_CLIENT_SECRET: &str = "clientSecret";

	/// API client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestApi = AuthApi<ReqwestHttpClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds a reqwest-backed [`AuthApi`] that targets `base_url` (typically an `httpmock`
	/// server) with the shared test credentials.
	pub fn build_reqwest_test_api(base_url: &str) -> ReqwestTestApi {
		let config = AuthApiConfig::new(base_url, TEST_CLIENT_ID, TEST_CLIENT_SECRET)
			.expect("Failed to build test API configuration.");

		AuthApi::with_http_client(config, test_reqwest_http_client())
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		marker::PhantomData,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use serde_json::{Map as JsonMap, Value as JsonValue};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2::http as http_types;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
