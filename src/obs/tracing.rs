// self
use crate::{_prelude::*, error::ApiError, obs::Operation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span builder used by request execution.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the provided operation + HTTP method.
	pub fn new(operation: Operation, method: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("auth0_api.request", operation = operation.as_str(), method);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, method);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a warning for an error status returned by the API.
pub fn record_api_error(err: &ApiError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			status = err.status,
			error = err.error.as_deref().unwrap_or_default(),
			"Authentication API returned an error status."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = err;
	}
}
