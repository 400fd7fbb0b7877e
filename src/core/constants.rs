//! Constants for PetFriends request headers, form fields, and filters
//!
//! The PetFriends API is header- and form-driven rather than JSON-driven on
//! the request side; the string constants used to build requests live here
//! so the client and the test scenarios agree on them.

/// Request header names
pub mod header {
    /// Account email header, accepted only by the `/api/key` endpoint
    pub const EMAIL: &str = "email";

    /// Account password header, accepted only by the `/api/key` endpoint
    pub const PASSWORD: &str = "password";

    /// Session key header required by every other endpoint
    pub const AUTH_KEY: &str = "auth_key";
}

/// Values for the `filter` query parameter of the pet listing endpoint
pub mod filter {
    /// List every pet in the catalog
    pub const ALL_PETS: &str = "";

    /// List only pets owned by the authenticated account
    pub const MY_PETS: &str = "my_pets";
}

/// Form field names for pet creation and update
pub mod form {
    /// Pet name field
    pub const NAME: &str = "name";

    /// Animal type field
    pub const ANIMAL_TYPE: &str = "animal_type";

    /// Age field (the service stores it as free text)
    pub const AGE: &str = "age";

    /// Photo file part for multipart uploads
    pub const PET_PHOTO: &str = "pet_photo";
}
