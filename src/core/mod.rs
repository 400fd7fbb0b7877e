//! Core application modules
//!
//! This module contains configuration, constants, logging, and the HTTP
//! client for the PetFriends API.

pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
