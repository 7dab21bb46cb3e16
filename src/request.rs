//! Typed request execution shared by every Authentication API operation.
//!
//! A [`Request`] carries the method, URL, headers, and optional JSON body of a single call.
//! The [`ResponseKind`] parameter decides how a successful body is decoded: [`Json`] parses it
//! into a caller-chosen type while [`Void`] discards it. Non-2xx responses always surface as
//! [`Error::Api`] and transport failures as [`Error::Network`].

// crates.io
use oauth2::http::{
	HeaderMap, HeaderName, HeaderValue, Method,
	header::{AUTHORIZATION, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	error::{ApiError, ArgumentError, NetworkError},
	http::{self, ApiHttpClient, HttpRequest},
	obs::{self, Operation, RequestOutcome, RequestSpan},
};

/// Request decoding its success body into `T`.
pub type JsonRequest<C, T> = Request<C, Json<T>>;
/// Request whose success body is ignored.
pub type VoidRequest<C> = Request<C, Void>;

/// Describes how a successful response body is turned into a value.
pub trait ResponseKind {
	/// Value produced for 2xx responses.
	type Output;

	/// Decodes a 2xx response body.
	fn decode(status: u16, body: &[u8]) -> Result<Self::Output, NetworkError>;
}

/// Decodes the response body as JSON into `T`.
#[derive(Debug)]
pub struct Json<T>(PhantomData<fn() -> T>);
impl<T> ResponseKind for Json<T>
where
	T: DeserializeOwned,
{
	type Output = T;

	fn decode(status: u16, body: &[u8]) -> Result<T, NetworkError> {
		let de = &mut serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(de)
			.map_err(|source| NetworkError::ResponseParse { source, status })
	}
}

/// Ignores the response body regardless of its content.
#[derive(Debug)]
pub struct Void;
impl ResponseKind for Void {
	type Output = ();

	fn decode(_: u16, _: &[u8]) -> Result<(), NetworkError> {
		Ok(())
	}
}

/// Single Authentication API call, executed once via [`Request::execute`].
pub struct Request<C, K>
where
	C: ApiHttpClient,
	K: ResponseKind,
{
	http_client: Arc<C>,
	operation: Operation,
	method: Method,
	url: Url,
	headers: HeaderMap,
	body: Option<JsonValue>,
	kind: PhantomData<fn() -> K>,
}
impl<C, K> Request<C, K>
where
	C: ApiHttpClient,
	K: ResponseKind,
{
	/// Creates a request without headers or body.
	pub fn new(http_client: impl Into<Arc<C>>, method: Method, url: Url) -> Self {
		Self {
			http_client: http_client.into(),
			operation: Operation::Custom,
			method,
			url,
			headers: HeaderMap::new(),
			body: None,
			kind: PhantomData,
		}
	}

	pub(crate) fn for_operation(mut self, operation: Operation) -> Self {
		self.operation = operation;

		self
	}

	/// Sets or replaces a header. `Authorization` values are marked sensitive.
	pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
		let invalid = || ArgumentError::InvalidHeader { name: name.to_owned() };
		let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
		let mut header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;

		if header_name == AUTHORIZATION {
			header_value.set_sensitive(true);
		}

		self.headers.insert(header_name, header_value);

		Ok(self)
	}

	/// Sets a top-level field of the JSON body.
	///
	/// A body that is not a JSON object (set through [`with_body`](Self::with_body)) is
	/// replaced by an object holding only this field.
	pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
		let body = self.body.get_or_insert_with(|| JsonValue::Object(JsonMap::new()));

		if !body.is_object() {
			*body = JsonValue::Object(JsonMap::new());
		}
		if let JsonValue::Object(fields) = body {
			fields.insert(name.into(), value.into());
		}

		self
	}

	/// Replaces the JSON body with the serialized form of `body`.
	pub fn with_body<B>(mut self, body: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		let value =
			serde_json::to_value(body).map_err(|source| ArgumentError::InvalidBody { source })?;

		self.body = Some(value);

		Ok(self)
	}

	/// Operation label used for spans and metrics.
	pub fn operation(&self) -> Operation {
		self.operation
	}

	/// HTTP method.
	pub fn method(&self) -> &Method {
		&self.method
	}

	/// Target URL.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Headers set so far.
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// JSON body set so far.
	pub fn body(&self) -> Option<&JsonValue> {
		self.body.as_ref()
	}

	/// Sends the request and decodes the response.
	pub async fn execute(self) -> Result<K::Output> {
		let operation = self.operation;
		let span = RequestSpan::new(operation, self.method.as_str());

		obs::record_request_outcome(operation, RequestOutcome::Attempt);

		let result = span.instrument(self.dispatch()).await;

		match &result {
			Ok(_) => obs::record_request_outcome(operation, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(operation, RequestOutcome::Failure),
		}

		result
	}

	async fn dispatch(self) -> Result<K::Output> {
		let request = self.to_http_request()?;
		let response =
			self.http_client.execute(request).await.map_err(http::map_transport_error)?;
		let status = response.status();

		if !status.is_success() {
			let err = ApiError::from_response(status, response.headers(), response.body());

			obs::record_api_error(&err);

			return Err(err.into());
		}

		Ok(K::decode(status.as_u16(), response.body())?)
	}

	fn to_http_request(&self) -> Result<HttpRequest> {
		let payload = match &self.body {
			Some(body) =>
				serde_json::to_vec(body).map_err(|source| ArgumentError::InvalidBody { source })?,
			None => Vec::new(),
		};
		let mut request = oauth2::http::Request::builder()
			.method(self.method.clone())
			.uri(self.url.as_str())
			.body(payload)
			.map_err(ArgumentError::from)?;

		*request.headers_mut() = self.headers.clone();

		if self.body.is_some() && !request.headers().contains_key(CONTENT_TYPE) {
			request
				.headers_mut()
				.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		}

		Ok(request)
	}
}
impl<C, K> Debug for Request<C, K>
where
	C: ApiHttpClient,
	K: ResponseKind,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Request")
			.field("operation", &self.operation)
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("headers", &self.headers)
			.field("body_set", &self.body.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::http::StatusCode;
	use parking_lot::Mutex;
	use serde_json::json;
	// self
	use super::*;
	use crate::http::{HttpClientError, HttpResponse, TransportFuture};

	#[derive(Debug, ThisError)]
	#[error("Fake transport failure.")]
	struct FakeError;

	#[derive(Default)]
	struct FakeHttpClient {
		status: u16,
		body: &'static str,
		sent: Mutex<Vec<HttpRequest>>,
	}
	impl FakeHttpClient {
		fn respond(status: u16, body: &'static str) -> Arc<Self> {
			Arc::new(Self { status, body, ..Default::default() })
		}
	}
	impl ApiHttpClient for FakeHttpClient {
		type TransportError = FakeError;

		fn execute(&self, request: HttpRequest) -> TransportFuture<'_, FakeError> {
			self.sent.lock().push(request);

			let mut response = HttpResponse::new(self.body.as_bytes().to_vec());

			*response.status_mut() =
				StatusCode::from_u16(self.status).expect("Fake status should be valid.");

			Box::pin(async move { Ok::<_, HttpClientError<FakeError>>(response) })
		}
	}

	fn url() -> Url {
		Url::parse("https://domain.auth0.com/things").expect("URL fixture should parse.")
	}

	#[tokio::test]
	async fn parameters_merge_into_json_body() {
		let client = FakeHttpClient::respond(200, "");
		let request: VoidRequest<FakeHttpClient> = Request::new(client.clone(), Method::POST, url())
			.with_parameter("email", "me@auth0.com")
			.with_parameter("count", 2);

		assert_eq!(request.body(), Some(&json!({ "email": "me@auth0.com", "count": 2 })));

		request.execute().await.expect("Void request should succeed.");

		let sent = client.sent.lock();
		let body: JsonValue =
			serde_json::from_slice(sent[0].body()).expect("Sent body should be JSON.");

		assert_eq!(body, json!({ "email": "me@auth0.com", "count": 2 }));
		assert_eq!(sent[0].headers()[CONTENT_TYPE], "application/json");
		assert_eq!(sent[0].method(), &Method::POST);
		assert_eq!(sent[0].uri().to_string(), "https://domain.auth0.com/things");
	}

	#[tokio::test]
	async fn void_requests_ignore_any_body() {
		let client = FakeHttpClient::respond(200, "We've just sent you an email.");
		let request: VoidRequest<FakeHttpClient> = Request::new(client, Method::POST, url());

		request.execute().await.expect("Void request should ignore non-JSON bodies.");
	}

	#[tokio::test]
	async fn malformed_json_reports_the_failing_path() {
		#[derive(Debug, Deserialize)]
		struct Shape {
			#[allow(dead_code)]
			count: u32,
		}

		let client = FakeHttpClient::respond(200, r#"{"count":"many"}"#);
		let request: JsonRequest<FakeHttpClient, Shape> = Request::new(client, Method::GET, url());
		let err = request.execute().await.expect_err("Mismatched JSON should fail.");

		match err {
			Error::Network(NetworkError::ResponseParse { source, status }) => {
				assert_eq!(status, 200);
				assert_eq!(source.path().to_string(), "count");
			},
			other => panic!("Unexpected error: {other:?}."),
		}
	}

	#[tokio::test]
	async fn error_status_maps_to_api_error() {
		let client = FakeHttpClient::respond(
			403,
			r#"{"error":"unauthorized","error_description":"Forbidden."}"#,
		);
		let request: JsonRequest<FakeHttpClient, JsonValue> = Request::new(client, Method::GET, url());
		let err = request.execute().await.expect_err("Error statuses should fail.");

		assert_eq!(err.status(), Some(403));
		assert!(matches!(
			err,
			Error::Api(ApiError { ref error, .. }) if error.as_deref() == Some("unauthorized")
		));
	}

	#[test]
	fn invalid_headers_are_rejected_and_authorization_is_sensitive() {
		let client = FakeHttpClient::respond(200, "");
		let err = <VoidRequest<FakeHttpClient>>::new(client.clone(), Method::GET, url())
			.with_header("bad header", "value")
			.expect_err("Header names with spaces should be rejected.");

		assert_eq!(err.argument_name(), Some("bad header"));

		let request = <VoidRequest<FakeHttpClient>>::new(client, Method::GET, url())
			.with_header("Authorization", "Bearer secret")
			.expect("Authorization header should be accepted.");

		assert!(request.headers()[AUTHORIZATION].is_sensitive());
		assert!(!format!("{request:?}").contains("secret"));
	}

	#[test]
	fn with_body_replaces_parameters() {
		let client = FakeHttpClient::respond(200, "");
		let request = <VoidRequest<FakeHttpClient>>::new(client, Method::POST, url())
			.with_parameter("a", 1)
			.with_body(&json!(["x"]))
			.expect("Arrays should serialize.")
			.with_parameter("b", true);

		assert_eq!(request.body(), Some(&json!({ "b": true })));
	}
}
