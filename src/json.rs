//! Response models returned by the Authentication API.

// self
use crate::_prelude::*;

/// Profile returned by `/userinfo`.
///
/// The claim set depends on the connection, requested scopes, and tenant rules, so the
/// payload is kept as an open mapping instead of a fixed record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInfo(JsonMap<String, JsonValue>);
impl UserInfo {
	/// Returns every top-level claim.
	pub fn values(&self) -> &JsonMap<String, JsonValue> {
		&self.0
	}

	/// Consumes the profile and returns the underlying mapping.
	pub fn into_values(self) -> JsonMap<String, JsonValue> {
		self.0
	}

	/// Returns a single claim.
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Returns a claim when it is a JSON string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(JsonValue::as_str)
	}

	/// Subject identifier (`sub`).
	pub fn subject(&self) -> Option<&str> {
		self.get_str("sub")
	}
}
impl From<JsonMap<String, JsonValue>> for UserInfo {
	fn from(values: JsonMap<String, JsonValue>) -> Self {
		Self(values)
	}
}

/// User created by `/dbconnections/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedUser {
	/// Identifier of the new user inside the database connection.
	#[serde(rename = "_id")]
	pub id: String,
	/// Email address registered for the user.
	pub email: String,
	/// Whether the email address has been verified.
	#[serde(default)]
	pub email_verified: bool,
	/// Username, for connections that require one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	/// Any additional fields returned by the tenant.
	#[serde(flatten)]
	pub extra: JsonMap<String, JsonValue>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn user_info_keeps_nested_values() {
		let info: UserInfo = serde_json::from_str(
			r#"{"sub":"auth0|1","email_verified":false,"identities":[{"provider":"auth0","isSocial":false}]}"#,
		)
		.expect("User info fixture should decode.");

		assert_eq!(info.subject(), Some("auth0|1"));
		assert_eq!(info.get("email_verified"), Some(&JsonValue::Bool(false)));
		assert_eq!(
			info.get("identities").and_then(|v| v.pointer("/0/provider")),
			Some(&JsonValue::String("auth0".into()))
		);
		assert_eq!(info.values().len(), 3);
	}

	#[test]
	fn created_user_collects_unknown_fields() {
		let user: CreatedUser = serde_json::from_str(
			r#"{"_id":"58457fe6b27","email":"me@auth0.com","email_verified":false,"given_name":"Me"}"#,
		)
		.expect("Created user fixture should decode.");

		assert_eq!(user.id, "58457fe6b27");
		assert_eq!(user.email, "me@auth0.com");
		assert!(!user.email_verified);
		assert_eq!(user.username, None);
		assert_eq!(user.extra.get("given_name"), Some(&JsonValue::String("Me".into())));
	}
}
