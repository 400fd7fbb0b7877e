//! Pet catalog data models
//!
//! These structures mirror the JSON the PetFriends service returns. Every
//! field arrives as a string (age included) and the service occasionally
//! omits fields, so everything defaults rather than failing deserialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single pet record as returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub animal_type: String,
    #[serde(default)]
    pub age: String,
    /// Base64-encoded image data URI, empty when no photo was uploaded
    #[serde(default)]
    pub pet_photo: String,
    #[serde(default)]
    pub created_at: String,
}

/// Response shape of the pet listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetList {
    #[serde(default)]
    pub pets: Vec<Pet>,
}

/// Photo payload for multipart uploads
///
/// The service documents JPG, JPEG, and PNG as accepted formats; other
/// content is passed through untouched so callers can probe the service's
/// own validation.
#[derive(Debug, Clone)]
pub struct PetPhoto {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PetPhoto {
    /// Build a photo from in-memory bytes, guessing the MIME type from the
    /// file name extension
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for_file_name(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Read a photo from disk
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or has no file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read photo file {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .context("Photo path has no usable file name")?
            .to_string();

        Ok(Self::from_bytes(file_name, bytes))
    }
}

/// MIME type for a photo file name, by extension
fn mime_for_file_name(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pet_deserializes_service_payload() {
        let json = r#"{
            "age": "2",
            "animal_type": "tabby cat",
            "created_at": "1617280000.0",
            "id": "5fd47b52-9750-4f3c-9f29-746023479fdc",
            "name": "Oleg",
            "pet_photo": "data:image/jpeg;base64,/9j/4AAQ"
        }"#;

        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.name, "Oleg");
        assert_eq!(pet.animal_type, "tabby cat");
        assert_eq!(pet.age, "2");
    }

    #[test]
    fn test_pet_tolerates_missing_fields() {
        let pet: Pet = serde_json::from_str(r#"{"name": "Zahar"}"#).unwrap();
        assert_eq!(pet.name, "Zahar");
        assert!(pet.id.is_empty());
        assert!(pet.pet_photo.is_empty());
    }

    #[test]
    fn test_mime_guessed_from_extension() {
        assert_eq!(PetPhoto::from_bytes("cat.JPG", vec![]).mime_type, "image/jpeg");
        assert_eq!(PetPhoto::from_bytes("cat.png", vec![]).mime_type, "image/png");
        assert_eq!(PetPhoto::from_bytes("cat.pdf", vec![]).mime_type, "application/pdf");
        assert_eq!(
            PetPhoto::from_bytes("cat", vec![]).mime_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_photo_from_path() {
        let mut file = tempfile::Builder::new()
            .prefix("pet")
            .suffix(".jpeg")
            .tempfile()
            .unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xD9]).unwrap();
        file.flush().unwrap();

        let photo = PetPhoto::from_path(file.path()).unwrap();
        assert_eq!(photo.mime_type, "image/jpeg");
        assert_eq!(photo.bytes, vec![0xFF, 0xD8, 0xFF, 0xD9]);
        assert!(photo.file_name.ends_with(".jpeg"));
    }
}
