//! Transport primitives for Authentication API calls.
//!
//! The module exposes [`ApiHttpClient`], the crate's only dependency on an HTTP stack, and
//! [`ReqwestHttpClient`], the default implementation. Requests and responses use the
//! `http` crate vocabulary re-exported by `oauth2` so custom transports never see reqwest
//! types.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
pub use oauth2::{HttpClientError, HttpRequest, HttpResponse};
// self
use crate::{_prelude::*, error::NetworkError};

/// Future returned by [`ApiHttpClient::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing Authentication API requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared behind
/// an `Arc` by every request an [`AuthApi`](crate::api::AuthApi) issues. Pooling, timeouts,
/// proxies, and any retry policy belong to the implementation; the client only sends one
/// request per call and interprets the response status itself, so implementations should
/// return non-2xx responses as `Ok` values.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves once the full response body has been received.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`] (custom timeouts, proxies, TLS roots).
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

/// Converts an [`HttpClientError`] emitted by any transport into a [`NetworkError`].
pub(crate) fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => NetworkError::Network { source: inner }.into(),
		HttpClientError::Http(inner) => crate::error::ArgumentError::from(inner).into(),
		HttpClientError::Io(inner) => NetworkError::Io(inner).into(),
		HttpClientError::Other(message) => NetworkError::Other { message }.into(),
		_ => NetworkError::Other { message: "unrecognized transport failure".into() }.into(),
	}
}
