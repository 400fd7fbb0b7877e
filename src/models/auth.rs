//! Authentication data models

use serde::{Deserialize, Serialize};

/// Session key issued by `/api/key` and echoed back on every other call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    pub key: String,
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
