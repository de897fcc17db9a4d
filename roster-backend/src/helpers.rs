use roster_store::PlayerId;
use sha2::{Digest, Sha256};

/// Hex SHA-256 digest of a secret, so secrets are never compared as raw strings.
pub fn hash_secret(secret: &str) -> String {
  format!("{:x}", Sha256::digest(secret.as_bytes()))
}

/// Path of a single player resource under the given API version.
pub fn player_location(api_version: &str, id: &PlayerId) -> String {
  format!("/{}/players/{}", api_version, id)
}
