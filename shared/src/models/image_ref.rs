//! Image Reference Model

use serde::{Deserialize, Serialize};

/// Reference to an image stored on the CDN
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageRef {
    pub secure_url: String,
    pub public_id: String,
}

impl ImageRef {
    pub fn new(secure_url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            secure_url: secure_url.into(),
            public_id: public_id.into(),
        }
    }
}
