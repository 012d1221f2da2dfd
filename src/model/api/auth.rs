use serde::{Deserialize, Serialize};

/// A previously minted token, presented to open a cookie session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionRequest {
    pub token: String,
}
