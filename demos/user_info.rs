//! Fetches the profile behind an access token passed as `AUTH0_ACCESS_TOKEN`.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use auth0_auth_api::{api::AuthApi, error::Error};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let domain = env::var("AUTH0_DOMAIN").unwrap_or_else(|_| "demo-tenant.auth0.com".into());
	let token = env::var("AUTH0_ACCESS_TOKEN")
		.map_err(|_| eyre!("Set AUTH0_ACCESS_TOKEN to a valid access token."))?;
	let api = AuthApi::new(domain, "demo-client", "demo-secret")?;

	match api.user_info(&token)?.execute().await {
		Ok(profile) => {
			for (claim, value) in profile.values() {
				println!("{claim}: {value}");
			}
		},
		Err(Error::Api(err)) => {
			eprintln!("Provider rejected the token ({}): {}.", err.status, err.message());
		},
		Err(err) => return Err(err.into()),
	}

	Ok(())
}
