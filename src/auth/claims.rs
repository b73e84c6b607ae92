use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload: subject plus the display claims clients render without
/// another user lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user ID
    pub name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
    pub iss: String,
    pub aud: String,
}
