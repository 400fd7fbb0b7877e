//! Test scenarios for the PetFriends service
//!
//! Each scenario issues a short sequence of HTTP calls against the service
//! and checks status codes and payload shapes against the documented
//! behavior. Scenarios run sequentially, one request in flight at a time,
//! and share no state beyond the remote account itself.

pub mod auth;
pub mod fixtures;
pub mod pets;

use crate::core::client::{PetApiError, PetFriendsClient};
use crate::core::config::Credentials;
use crate::models::auth::ApiKey;
use anyhow::{bail, Result};
use std::fmt::Debug;
use std::future::Future;
use tracing::{error, info};

/// Outcome of a single scenario run
pub struct ScenarioReport {
    pub name: &'static str,
    pub outcome: Result<()>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Run every scenario in order and collect the outcomes
pub async fn run_all(client: &PetFriendsClient, account: &Credentials) -> Vec<ScenarioReport> {
    let mut reports = Vec::new();

    record(
        &mut reports,
        "api_key_with_valid_credentials",
        auth::api_key_with_valid_credentials(client, account),
    )
    .await;
    record(
        &mut reports,
        "api_key_with_invalid_email",
        auth::api_key_with_invalid_email(client, account),
    )
    .await;
    record(
        &mut reports,
        "api_key_with_invalid_password",
        auth::api_key_with_invalid_password(client, account),
    )
    .await;
    record(
        &mut reports,
        "list_all_pets_with_valid_key",
        pets::list_all_pets_with_valid_key(client, account),
    )
    .await;
    record(
        &mut reports,
        "list_my_pets_with_valid_key",
        pets::list_my_pets_with_valid_key(client, account),
    )
    .await;
    record(
        &mut reports,
        "list_pets_with_invalid_key",
        pets::list_pets_with_invalid_key(client, account),
    )
    .await;
    record(
        &mut reports,
        "add_pet_with_valid_data",
        pets::add_pet_with_valid_data(client, account),
    )
    .await;
    record(
        &mut reports,
        "add_pet_with_invalid_photo_format",
        pets::add_pet_with_invalid_photo_format(client, account),
    )
    .await;
    record(
        &mut reports,
        "add_pet_without_photo",
        pets::add_pet_without_photo(client, account),
    )
    .await;
    record(
        &mut reports,
        "set_photo_on_own_pet",
        pets::set_photo_on_own_pet(client, account),
    )
    .await;
    record(
        &mut reports,
        "update_own_pet_info",
        pets::update_own_pet_info(client, account),
    )
    .await;
    record(
        &mut reports,
        "update_nonexistent_pet",
        pets::update_nonexistent_pet(client, account),
    )
    .await;
    record(
        &mut reports,
        "update_pet_with_invalid_key",
        pets::update_pet_with_invalid_key(client, account),
    )
    .await;
    record(
        &mut reports,
        "delete_own_pet",
        pets::delete_own_pet(client, account),
    )
    .await;
    record(
        &mut reports,
        "delete_nonexistent_pet",
        pets::delete_nonexistent_pet(client, account),
    )
    .await;
    record(
        &mut reports,
        "delete_pet_with_invalid_key",
        pets::delete_pet_with_invalid_key(client, account),
    )
    .await;

    reports
}

/// Run one scenario, log the outcome, and append it to the report list
async fn record(
    reports: &mut Vec<ScenarioReport>,
    name: &'static str,
    scenario: impl Future<Output = Result<()>>,
) {
    let outcome = scenario.await;
    match &outcome {
        Ok(()) => info!("✅ {}", name),
        Err(e) => error!("❌ {}: {:#}", name, e),
    }
    reports.push(ScenarioReport { name, outcome });
}

/// Corrupt a key so the service no longer recognizes it
fn corrupted(auth_key: &ApiKey) -> ApiKey {
    ApiKey::new(format!("{}1", auth_key.key))
}

/// Expect the service to reject the call with any non-success status
///
/// Transport and parse failures still count as scenario failures: the
/// rejection has to come from the service, not from a broken connection.
fn expect_rejected<T: Debug>(result: Result<T, PetApiError>, what: &str) -> Result<()> {
    match result {
        Ok(value) => bail!("{} unexpectedly succeeded: {:?}", what, value),
        Err(err) if err.status().is_some() => Ok(()),
        Err(err) => bail!("{} failed before reaching the service: {}", what, err),
    }
}

/// Expect the service to answer 403 specifically
fn expect_forbidden<T: Debug>(result: Result<T, PetApiError>, what: &str) -> Result<()> {
    match result {
        Ok(value) => bail!("{} unexpectedly succeeded: {:?}", what, value),
        Err(PetApiError::Forbidden(_)) => Ok(()),
        Err(err) => bail!("{} expected a 403, got: {}", what, err),
    }
}
