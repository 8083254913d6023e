//! Route 53 client construction
//!
//! Clients are built from the default AWS configuration chain. Credentials
//! are resolved once during construction so a missing or broken chain fails
//! here rather than on the first API call.

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_route53::Client;
use aws_sdk_route53::error::DisplayErrorContext;

use crate::config::{ClientOptions, DEFAULT_REGION, StaticCredentials};
use crate::error::{Error, Result};

/// Provider name recorded on static credentials
const STATIC_PROVIDER_NAME: &str = "route53-helper-static";

/// Build a client from the default credential chain
pub async fn get_client() -> Result<Client> {
    get_client_with_options(&ClientOptions::default(), None).await
}

/// Build a client from explicit static credentials
///
/// An empty `token` means no session token.
pub async fn get_client_with_credentials(
    access_key_id: &str,
    secret_access_key: &str,
    token: &str,
) -> Result<Client> {
    let credentials = StaticCredentials::new(access_key_id, secret_access_key, token);
    get_client_with_options(&ClientOptions::default(), Some(credentials)).await
}

/// Build a client with option overrides and optional static credentials
///
/// # Errors
///
/// [`Error::Credentials`] when static credentials are empty or when the
/// configured credentials provider cannot produce credentials.
pub async fn get_client_with_options(
    options: &ClientOptions,
    credentials: Option<StaticCredentials>,
) -> Result<Client> {
    if let Some(ref credentials) = credentials {
        credentials.validate()?;
    }

    let config = load_config(options, credentials).await;
    resolve_credentials(&config).await?;

    Ok(Client::new(&config))
}

async fn load_config(options: &ClientOptions, credentials: Option<StaticCredentials>) -> SdkConfig {
    let region = RegionProviderChain::first_try(options.region.clone().map(Region::new))
        .or_default_provider()
        .or_else(DEFAULT_REGION);

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

    if let Some(ref url) = options.endpoint_url {
        tracing::debug!("Using endpoint override: {}", url);
        loader = loader.endpoint_url(url);
    }

    if let Some(ref profile) = options.profile_name {
        loader = loader.profile_name(profile);
    }

    if let Some(credentials) = credentials {
        tracing::debug!("Using static credentials");
        loader = loader.credentials_provider(Credentials::new(
            credentials.access_key_id,
            credentials.secret_access_key,
            credentials.session_token,
            None,
            STATIC_PROVIDER_NAME,
        ));
    }

    loader.load().await
}

async fn resolve_credentials(config: &SdkConfig) -> Result<()> {
    let provider = config
        .credentials_provider()
        .ok_or_else(|| Error::credentials("no credentials provider configured"))?;

    provider
        .provide_credentials()
        .await
        .map_err(|e| Error::credentials(DisplayErrorContext(&e).to_string()))?;

    tracing::debug!("AWS credentials resolved");
    Ok(())
}
