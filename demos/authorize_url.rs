//! Builds the login and logout URLs a web application redirects its users to.

// crates.io
use color_eyre::Result;
// self
use auth0_auth_api::api::AuthApi;

fn main() -> Result<()> {
	color_eyre::install()?;

	let api = AuthApi::new("demo-tenant.auth0.com", "demo-client", "demo-secret")?;
	let login = api
		.authorize("Username-Password-Authentication", "https://app.example.com/callback")?
		.with_scope("openid profile email")
		.with_state("opaque-state-value")
		.build()?;
	let logout = api.logout("https://app.example.com/goodbye", true)?.use_federated(true).build()?;

	println!("Send your user to {login}.");
	println!("Sign them out with {logout}.");

	Ok(())
}
