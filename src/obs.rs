//! Optional observability helpers for API requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `auth0_api.request` with the `operation`
//!   and `method` fields, plus a `warn` event whenever the API answers with an error status.
//! - Enable `metrics` to increment the `auth0_api_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// Authentication API operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// `GET /userinfo`.
	UserInfo,
	/// `POST /dbconnections/change_password`.
	ResetPassword,
	/// `POST /dbconnections/signup`.
	SignUp,
	/// Request assembled directly through [`Request::new`](crate::request::Request::new).
	Custom,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::UserInfo => "user_info",
			Operation::ResetPassword => "reset_password",
			Operation::SignUp => "sign_up",
			Operation::Custom => "custom",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Request is about to be dispatched.
	Attempt,
	/// Response decoded successfully.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
