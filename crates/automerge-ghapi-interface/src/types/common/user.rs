use serde::{Deserialize, Serialize};

/// Platform user.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
}

impl From<&str> for GhUser {
    fn from(login: &str) -> Self {
        Self {
            login: login.into(),
        }
    }
}
