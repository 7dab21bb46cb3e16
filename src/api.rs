//! Entry point exposing the named Authentication API operations.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	config::AuthApiConfig,
	error::{ArgumentError, require},
	http::ApiHttpClient,
	json::{CreatedUser, UserInfo},
	obs::Operation,
	request::{JsonRequest, Request, VoidRequest},
	url_builder::{AuthorizeUrlBuilder, LogoutUrlBuilder},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// API client specialized for the crate's default reqwest transport.
pub type ReqwestAuthApi = AuthApi<ReqwestHttpClient>;

/// Client for a single tenant's Authentication API.
///
/// URL builders are produced without touching the network. Request-producing operations
/// validate their arguments eagerly and return a [`Request`] that performs I/O only when
/// [`Request::execute`] is awaited. Configuration and transport are shared read-only, so the
/// client can be cloned cheaply and used from concurrent tasks.
pub struct AuthApi<C>
where
	C: ApiHttpClient,
{
	config: Arc<AuthApiConfig>,
	http_client: Arc<C>,
}
impl<C> AuthApi<C>
where
	C: ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: AuthApiConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self { config: Arc::new(config), http_client: http_client.into() }
	}

	/// Validated configuration backing this client.
	pub fn config(&self) -> &AuthApiConfig {
		&self.config
	}

	/// Normalized base URL all endpoints are resolved against.
	pub fn base_url(&self) -> &Url {
		self.config.base_url()
	}

	/// Starts an `/authorize` URL for `connection` that redirects back to `redirect_uri`.
	pub fn authorize(&self, connection: &str, redirect_uri: &str) -> Result<AuthorizeUrlBuilder> {
		AuthorizeUrlBuilder::new(&self.config, connection, redirect_uri)
	}

	/// Starts a `/v2/logout` URL that returns the user to `return_to_url`.
	pub fn logout(&self, return_to_url: &str, include_client_id: bool) -> Result<LogoutUrlBuilder> {
		LogoutUrlBuilder::new(&self.config, return_to_url, include_client_id)
	}

	/// Prepares `GET /userinfo` for the given access token.
	pub fn user_info(&self, access_token: &str) -> Result<JsonRequest<C, UserInfo>> {
		let access_token = require("access_token", access_token)?;

		self.request(Method::GET, &["userinfo"], Operation::UserInfo)
			.with_header("Authorization", &format!("Bearer {access_token}"))
			.map_err(|_| ArgumentError::InvalidValue { name: "access_token" })?
			.with_header("Content-Type", "application/json")
	}

	/// Prepares `POST /dbconnections/change_password`, which emails a reset link to the user.
	pub fn reset_password(&self, email: &str, connection: &str) -> Result<VoidRequest<C>> {
		let email = require("email", email)?;
		let connection = require("connection", connection)?;

		Ok(self
			.request(Method::POST, &["dbconnections", "change_password"], Operation::ResetPassword)
			.with_parameter("email", email)
			.with_parameter("connection", connection)
			.with_parameter("client_id", self.config.client_id()))
	}

	/// Prepares `POST /dbconnections/signup` for a database connection.
	///
	/// Optional fields such as `username` or `user_metadata` can be attached with
	/// [`Request::with_parameter`].
	pub fn sign_up(
		&self,
		email: &str,
		password: &str,
		connection: &str,
	) -> Result<JsonRequest<C, CreatedUser>> {
		let email = require("email", email)?;
		let password = require("password", password)?;
		let connection = require("connection", connection)?;

		Ok(self
			.request(Method::POST, &["dbconnections", "signup"], Operation::SignUp)
			.with_parameter("email", email)
			.with_parameter("password", password)
			.with_parameter("connection", connection)
			.with_parameter("client_id", self.config.client_id()))
	}

	fn request<K>(&self, method: Method, segments: &[&str], operation: Operation) -> Request<C, K>
	where
		K: crate::request::ResponseKind,
	{
		Request::new(self.http_client.clone(), method, self.config.endpoint(segments))
			.for_operation(operation)
	}
}
#[cfg(feature = "reqwest")]
impl AuthApi<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	///
	/// Use [`AuthApi::with_http_client`] with
	/// [`ReqwestHttpClient::with_client`] to configure timeouts or proxies.
	pub fn new(
		domain: impl AsRef<str>,
		client_id: impl AsRef<str>,
		client_secret: impl AsRef<str>,
	) -> Result<Self> {
		let config = AuthApiConfig::new(domain, client_id, client_secret)?;

		Ok(Self::with_http_client(config, ReqwestHttpClient::default()))
	}
}
impl<C> Clone for AuthApi<C>
where
	C: ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self { config: self.config.clone(), http_client: self.http_client.clone() }
	}
}
impl<C> Debug for AuthApi<C>
where
	C: ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthApi")
			.field("base_url", &self.config.base_url().as_str())
			.field("client_id", &self.config.client_id())
			.finish()
	}
}
