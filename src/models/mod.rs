//! API data models
//!
//! This module contains the pass-through data structures the PetFriends
//! service returns, plus the photo payload used for uploads.

pub mod auth;
pub mod pet;
