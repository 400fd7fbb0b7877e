//! Automated API test client for the PetFriends pet-catalog service
//!
//! This crate wraps the REST API of the third-party PetFriends service
//! (<https://petfriends.skillfactory.ru>) in a thin async HTTP client and
//! encodes the expected behavior of that service as a sequence of runnable
//! test scenarios.

pub mod core;
pub mod models;
pub mod scenarios;
