//! Shared mock-service helpers for the integration tests
//!
//! Each test spins up its own wiremock server standing in for the
//! PetFriends service, so tests stay isolated and parallel-safe.

#![allow(dead_code)]

use petfriends_client::core::config::Credentials;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fixture account email the mock service recognizes
pub const EMAIL: &str = "tester@example.com";

/// Fixture account password the mock service recognizes
pub const PASSWORD: &str = "hunter2";

/// Session key the mock service hands out
pub const AUTH_KEY: &str = "0f2ad5b8c4e6d1a97b3f";

pub fn account() -> Credentials {
    Credentials {
        email: EMAIL.to_string(),
        password: PASSWORD.to_string(),
    }
}

/// JSON shape of a pet record as the live service returns it
pub fn pet_json(id: &str, name: &str, animal_type: &str, age: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "animal_type": animal_type,
        "age": age,
        "pet_photo": "",
        "created_at": "1617280000.123456"
    })
}

/// Mount `/api/key`: 200 with the fixture key for the fixture credentials,
/// 403 for anything else (mocks are evaluated in mount order)
pub async fn mount_api_key(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .and(header("email", EMAIL))
        .and(header("password", PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "key": AUTH_KEY })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/key"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string("This user wasn't found in database"),
        )
        .mount(server)
        .await;
}
