//! Validated URL builders for browser-facing endpoints.
//!
//! [`UrlBuilder`] accumulates query parameters on top of an endpoint URL and refuses to
//! produce a URL until every required parameter carries a non-empty value. The concrete
//! [`AuthorizeUrlBuilder`] and [`LogoutUrlBuilder`] seed the required set for `/authorize`
//! and `/v2/logout` respectively.

pub mod authorize;
pub mod logout;

pub use authorize::*;
pub use logout::*;

// self
use crate::{_prelude::*, error::ArgumentError};

/// Generic query-parameter builder with a fixed set of required names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlBuilder {
	url: Url,
	parameters: Vec<(String, String)>,
	required: &'static [&'static str],
}
impl UrlBuilder {
	/// Creates a builder for `url` that demands every name in `required` before building.
	pub fn new(url: Url, required: &'static [&'static str]) -> Self {
		Self { url, parameters: Vec::new(), required }
	}

	/// Sets or overwrites a query parameter; overwrites keep the original position.
	pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into();
		let value = value.into();

		match self.parameters.iter_mut().find(|(key, _)| *key == name) {
			Some((_, current)) => *current = value,
			None => self.parameters.push((name, value)),
		}

		self
	}

	/// Removes a query parameter entirely.
	pub fn without_parameter(mut self, name: &str) -> Self {
		self.parameters.retain(|(key, _)| key != name);

		self
	}

	/// Returns the current value of a query parameter.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
	}

	/// Validates required parameters and returns the final URL.
	pub fn build_url(self) -> Result<Url> {
		if let Some(missing) = self
			.required
			.iter()
			.find(|name| self.parameter(name).is_none_or(|value| value.trim().is_empty()))
		{
			return Err(ArgumentError::MissingParameter { name: *missing }.into());
		}

		let mut url = self.url;

		if !self.parameters.is_empty() {
			let mut pairs = url.query_pairs_mut();

			for (name, value) in &self.parameters {
				pairs.append_pair(name, value);
			}

			drop(pairs);
		}

		Ok(url)
	}

	/// Validates required parameters and returns the final URL as a string.
	pub fn build(self) -> Result<String> {
		self.build_url().map(String::from)
	}
}
