//! Scenarios covering the pet catalog endpoints
//!
//! Every scenario signs in on its own, the way a fresh test session would,
//! so no scenario depends on a key obtained by another one.

use super::{corrupted, expect_forbidden, expect_rejected, fixtures};
use crate::core::client::PetFriendsClient;
use crate::core::config::Credentials;
use crate::core::constants::filter;
use crate::models::auth::ApiKey;
use crate::models::pet::PetList;
use anyhow::{ensure, Context, Result};

/// Listing the whole catalog returns a non-empty pet list
pub async fn list_all_pets_with_valid_key(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let pets = client.list_pets(&auth_key, filter::ALL_PETS).await?;
    ensure!(!pets.pets.is_empty(), "pet catalog is empty");
    Ok(())
}

/// Listing `my_pets` returns a non-empty list for a seeded account
pub async fn list_my_pets_with_valid_key(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let my_pets = client.list_pets(&auth_key, filter::MY_PETS).await?;
    ensure!(!my_pets.pets.is_empty(), "account owns no pets");
    Ok(())
}

/// A corrupted key is answered with 403
pub async fn list_pets_with_invalid_key(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    expect_forbidden(
        client
            .list_pets(&corrupted(&auth_key), filter::ALL_PETS)
            .await,
        "pet listing with a corrupted key",
    )
}

/// Creating a pet with valid data echoes the submitted name back
pub async fn add_pet_with_valid_data(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let pet = client
        .add_pet(&auth_key, "Oleg", "tabby cat", "2", fixtures::jpeg_photo())
        .await?;
    ensure!(
        pet.name == "Oleg",
        "service echoed name {:?} instead of the submitted one",
        pet.name
    );
    Ok(())
}

/// A non-image photo must be rejected per the documented JPG/JPEG/PNG rule
///
/// The live service is known to accept arbitrary content anyway, so this
/// scenario fails against it. It encodes the documented behavior, not the
/// observed one.
pub async fn add_pet_with_invalid_photo_format(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    expect_rejected(
        client
            .add_pet(&auth_key, "Oleg", "tabby cat", "2", fixtures::pdf_photo())
            .await,
        "pet creation with a PDF photo",
    )
}

/// Creating a pet without a photo leaves the photo field empty
pub async fn add_pet_without_photo(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let pet = client
        .add_pet_without_photo(&auth_key, "Busya", "sphynx", "1")
        .await?;
    ensure!(
        pet.name == "Busya",
        "service echoed name {:?} instead of the submitted one",
        pet.name
    );
    ensure!(
        pet.pet_photo.is_empty(),
        "a pet created without a photo came back with one"
    );
    Ok(())
}

/// Attaching a photo to an own pet fills its photo field
pub async fn set_photo_on_own_pet(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let created = client
        .add_pet_without_photo(&auth_key, "Busya", "sphynx", "1")
        .await?;
    let updated = client
        .set_pet_photo(&auth_key, &created.id, fixtures::jpeg_photo())
        .await?;
    ensure!(!updated.pet_photo.is_empty(), "photo was not attached");
    Ok(())
}

/// Updating the first own pet echoes the new name back
pub async fn update_own_pet_info(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let my_pets = my_pets(client, &auth_key).await?;
    let pet = my_pets
        .pets
        .first()
        .context("account has no pets to update")?;

    let updated = client
        .update_pet(&auth_key, &pet.id, "Oleg", "iguana", "3")
        .await?;
    ensure!(
        updated.name == "Oleg",
        "service echoed name {:?} instead of the updated one",
        updated.name
    );
    Ok(())
}

/// Updating a pet id the service never issued must fail
pub async fn update_nonexistent_pet(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let my_pets = my_pets(client, &auth_key).await?;
    let pet_id = missing_pet_id(&my_pets);

    expect_rejected(
        client
            .update_pet(&auth_key, &pet_id, "Oleg", "iguana", "7")
            .await,
        "update of a nonexistent pet",
    )
}

/// Updating with a corrupted key must fail even for an existing pet
pub async fn update_pet_with_invalid_key(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let my_pets = my_pets(client, &auth_key).await?;
    let pet = my_pets
        .pets
        .first()
        .context("account has no pets to update")?;

    expect_rejected(
        client
            .update_pet(&corrupted(&auth_key), &pet.id, "Oleg", "iguana", "7")
            .await,
        "pet update with a corrupted key",
    )
}

/// Deleting an own pet removes it from the `my_pets` listing
///
/// Seeds a pet first when the account owns none, like the original suite.
pub async fn delete_own_pet(client: &PetFriendsClient, account: &Credentials) -> Result<()> {
    let auth_key = sign_in(client, account).await?;

    let mut list = my_pets(client, &auth_key).await?;
    if list.pets.is_empty() {
        client
            .add_pet(&auth_key, "Zahar", "mantis", "3", fixtures::jpeg_photo())
            .await?;
        list = my_pets(client, &auth_key).await?;
    }

    let pet_id = list
        .pets
        .first()
        .context("account still owns no pets after seeding")?
        .id
        .clone();

    client.delete_pet(&auth_key, &pet_id).await?;

    let remaining = my_pets(client, &auth_key).await?;
    ensure!(
        remaining.pets.iter().all(|pet| pet.id != pet_id),
        "deleted pet {} is still listed",
        pet_id
    );
    Ok(())
}

/// Deleting a pet id the service never issued must fail
pub async fn delete_nonexistent_pet(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let my_pets = my_pets(client, &auth_key).await?;
    let pet_id = missing_pet_id(&my_pets);

    expect_rejected(
        client.delete_pet(&auth_key, &pet_id).await,
        "deletion of a nonexistent pet",
    )
}

/// Deleting with a corrupted key must fail
pub async fn delete_pet_with_invalid_key(
    client: &PetFriendsClient,
    account: &Credentials,
) -> Result<()> {
    let auth_key = sign_in(client, account).await?;
    let my_pets = my_pets(client, &auth_key).await?;
    let pet_id = missing_pet_id(&my_pets);

    expect_rejected(
        client.delete_pet(&corrupted(&auth_key), &pet_id).await,
        "pet deletion with a corrupted key",
    )
}

async fn sign_in(client: &PetFriendsClient, account: &Credentials) -> Result<ApiKey> {
    let api_key = client
        .get_api_key(&account.email, &account.password)
        .await
        .context("could not sign in with the configured account")?;
    Ok(api_key)
}

async fn my_pets(client: &PetFriendsClient, auth_key: &ApiKey) -> Result<PetList> {
    let list = client
        .list_pets(auth_key, filter::MY_PETS)
        .await
        .context("could not list own pets")?;
    Ok(list)
}

/// Derive an id the service has never issued
///
/// The original suite appends a character to a real id; fall back to a fixed
/// bogus id when the account owns nothing.
fn missing_pet_id(my_pets: &PetList) -> String {
    my_pets
        .pets
        .first()
        .map(|pet| format!("{}1", pet.id))
        .unwrap_or_else(|| "00000000-0000-0000-0000-000000000000".to_string())
}
