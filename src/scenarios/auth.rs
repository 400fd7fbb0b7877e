//! Scenarios covering the API key endpoint

use super::expect_rejected;
use crate::core::client::PetFriendsClient;
use crate::core::config::Credentials;
use anyhow::{ensure, Result};

/// Valid credentials yield a 200 with a non-empty key
pub async fn api_key_with_valid_credentials(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let api_key = client
        .get_api_key(&account.email, &account.password)
        .await?;
    ensure!(!api_key.key.is_empty(), "service returned an empty key");
    Ok(())
}

/// An unknown email must not yield a key
pub async fn api_key_with_invalid_email(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let email = format!("{}1", account.email);
    expect_rejected(
        client.get_api_key(&email, &account.password).await,
        "api key request with an unknown email",
    )
}

/// A wrong password must not yield a key
pub async fn api_key_with_invalid_password(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let password = format!("{}1", account.password);
    expect_rejected(
        client.get_api_key(&account.email, &password).await,
        "api key request with a wrong password",
    )
}
