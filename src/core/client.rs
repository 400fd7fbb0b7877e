//! PetFriends async HTTP client
//!
//! This module provides an async HTTP client for the PetFriends pet-catalog
//! REST API. Each public method maps to exactly one remote endpoint: URL
//! assembly, header construction, and status/JSON pass-through only, no
//! retries or local state.

use crate::core::constants::{form, header};
use crate::models::auth::ApiKey;
use crate::models::pet::{Pet, PetList, PetPhoto};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Error types that can occur during PetFriends API interactions
///
/// Non-success HTTP statuses are mapped to variants carrying the status and
/// the response body text, so callers can assert on the exact status the
/// service returned.
#[derive(Debug, thiserror::Error)]
pub enum PetApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Access forbidden: {0}")]
    Forbidden(String),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PetApiError {
    fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => PetApiError::BadRequest(message),
            403 => PetApiError::Forbidden(message),
            _ => PetApiError::ApiError { status, message },
        }
    }

    /// HTTP status the service answered with, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            PetApiError::BadRequest(_) => Some(400),
            PetApiError::Forbidden(_) => Some(403),
            PetApiError::ApiError { status, .. } => Some(*status),
            PetApiError::Unexpected(_) => None,
        }
    }
}

/// Async client for the PetFriends API
pub struct PetFriendsClient {
    client: Client,
    base_url: String,
}

impl PetFriendsClient {
    /// Create a new PetFriends client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Service base URL, e.g. `https://petfriends.skillfactory.ru`
    /// * `timeout` - Request timeout in seconds
    pub fn new(base_url: impl Into<String>, timeout: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .expect("Failed to create HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Request an API key for an account
    ///
    /// GET `/api/key` with the email and password passed as request headers.
    ///
    /// # Errors
    ///
    /// Returns [`PetApiError::Forbidden`] when the service rejects the
    /// credentials (it answers 403 for unknown accounts).
    pub async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiKey, PetApiError> {
        debug!("Requesting API key for {}", email);

        let request = self
            .client
            .get(self.url("/api/key"))
            .header(header::EMAIL, email)
            .header(header::PASSWORD, password);

        Self::send_json(request).await
    }

    /// List pets visible to the given key
    ///
    /// GET `/api/pets?filter=` where `filter` is empty (the whole catalog)
    /// or `my_pets` (pets owned by the key's account). The service sends the
    /// parameter back as a 400 for anything else.
    pub async fn list_pets(
        &self,
        auth_key: &ApiKey,
        filter: &str,
    ) -> Result<PetList, PetApiError> {
        let request = self
            .client
            .get(self.url("/api/pets"))
            .query(&[("filter", filter)])
            .header(header::AUTH_KEY, &auth_key.key);

        Self::send_json(request).await
    }

    /// Add a new pet with a photo
    ///
    /// POST `/api/pets` as multipart/form-data: text parts for name, animal
    /// type, and age plus the photo file part.
    pub async fn add_pet(
        &self,
        auth_key: &ApiKey,
        name: &str,
        animal_type: &str,
        age: &str,
        photo: PetPhoto,
    ) -> Result<Pet, PetApiError> {
        debug!("Adding pet {} ({})", name, animal_type);

        let form = Form::new()
            .text(form::NAME, name.to_string())
            .text(form::ANIMAL_TYPE, animal_type.to_string())
            .text(form::AGE, age.to_string())
            .part(form::PET_PHOTO, Self::photo_part(photo)?);

        let request = self
            .client
            .post(self.url("/api/pets"))
            .header(header::AUTH_KEY, &auth_key.key)
            .multipart(form);

        Self::send_json(request).await
    }

    /// Add a new pet without a photo
    ///
    /// POST `/api/create_pet_simple` with plain form fields. The photo can
    /// be attached later with [`Self::set_pet_photo`].
    pub async fn add_pet_without_photo(
        &self,
        auth_key: &ApiKey,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<Pet, PetApiError> {
        let request = self
            .client
            .post(self.url("/api/create_pet_simple"))
            .header(header::AUTH_KEY, &auth_key.key)
            .form(&[
                (form::NAME, name),
                (form::ANIMAL_TYPE, animal_type),
                (form::AGE, age),
            ]);

        Self::send_json(request).await
    }

    /// Attach or replace the photo of an existing pet
    ///
    /// POST `/api/pets/set_photo/{pet_id}` with a multipart photo part.
    pub async fn set_pet_photo(
        &self,
        auth_key: &ApiKey,
        pet_id: &str,
        photo: PetPhoto,
    ) -> Result<Pet, PetApiError> {
        let form = Form::new().part(form::PET_PHOTO, Self::photo_part(photo)?);

        let request = self
            .client
            .post(self.url(&format!("/api/pets/set_photo/{}", pet_id)))
            .header(header::AUTH_KEY, &auth_key.key)
            .multipart(form);

        Self::send_json(request).await
    }

    /// Update name, animal type, and age of an existing pet
    ///
    /// PUT `/api/pets/{pet_id}` with plain form fields.
    pub async fn update_pet(
        &self,
        auth_key: &ApiKey,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<Pet, PetApiError> {
        let request = self
            .client
            .put(self.url(&format!("/api/pets/{}", pet_id)))
            .header(header::AUTH_KEY, &auth_key.key)
            .form(&[
                (form::NAME, name),
                (form::ANIMAL_TYPE, animal_type),
                (form::AGE, age),
            ]);

        Self::send_json(request).await
    }

    /// Delete a pet by id
    ///
    /// DELETE `/api/pets/{pet_id}`. The response body is ignored; only the
    /// status matters.
    pub async fn delete_pet(&self, auth_key: &ApiKey, pet_id: &str) -> Result<(), PetApiError> {
        let request = self
            .client
            .delete(self.url(&format!("/api/pets/{}", pet_id)))
            .header(header::AUTH_KEY, &auth_key.key);

        Self::send(request).await.map(|_| ())
    }

    /// Assemble a full URL for an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a photo into a multipart file part
    fn photo_part(photo: PetPhoto) -> Result<Part, PetApiError> {
        Part::bytes(photo.bytes)
            .file_name(photo.file_name)
            .mime_str(&photo.mime_type)
            .map_err(|e| PetApiError::Unexpected(format!("Invalid photo MIME type: {}", e)))
    }

    /// Send a request and parse the JSON body on success
    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, PetApiError> {
        let response = Self::send(request).await?;

        response
            .json()
            .await
            .map_err(|e| PetApiError::Unexpected(format!("Failed to parse response: {}", e)))
    }

    /// Send a request and map non-success statuses to errors carrying
    /// status and body text
    ///
    /// Every request goes through here, so every request announces that it
    /// expects JSON back.
    async fn send(request: RequestBuilder) -> Result<Response, PetApiError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| PetApiError::Unexpected(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PetApiError::from_status(status.as_u16(), error_text));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = PetFriendsClient::new("https://petfriends.example.org/", 5);
        assert_eq!(
            client.url("/api/key"),
            "https://petfriends.example.org/api/key"
        );
    }

    #[test]
    fn test_error_mapping_by_status() {
        assert!(matches!(
            PetApiError::from_status(403, "nope".to_string()),
            PetApiError::Forbidden(_)
        ));
        assert!(matches!(
            PetApiError::from_status(400, "bad".to_string()),
            PetApiError::BadRequest(_)
        ));
        assert!(matches!(
            PetApiError::from_status(500, "boom".to_string()),
            PetApiError::ApiError { status: 500, .. }
        ));
    }

    #[test]
    fn test_error_status_roundtrip() {
        let err = PetApiError::from_status(404, "missing".to_string());
        assert_eq!(err.status(), Some(404));
        assert_eq!(PetApiError::Unexpected("io".to_string()).status(), None);
    }
}
