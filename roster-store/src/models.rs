use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque player identifier, assigned by the store at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for PlayerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<String> for PlayerId {
  fn from(id: String) -> Self {
    Self(id)
  }
}

impl From<&str> for PlayerId {
  fn from(id: &str) -> Self {
    Self(id.to_owned())
  }
}

/// Player fields as submitted by a client, before the store assigns an id.
///
/// Unknown fields are ignored on deserialization, so a client-sent `id`
/// never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPlayer {
  pub firstname: String,
  pub lastname: String,
  pub sport: String,
  pub gender: String,
  pub age: i64,
  pub country: String,
}

impl NewPlayer {
  pub(crate) fn with_id(self, id: PlayerId) -> Player {
    Player {
      firstname: self.firstname,
      lastname: self.lastname,
      sport: self.sport,
      gender: self.gender,
      age: self.age,
      country: self.country,
      id,
    }
  }
}

/// A stored player record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
  pub firstname: String,
  pub lastname: String,
  pub sport: String,
  pub gender: String,
  pub age: i64,
  pub country: String,
  pub id: PlayerId,
}
