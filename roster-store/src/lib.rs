//! In-memory player registry.
//!
//! All access goes through one exclusive guard that is held only for the map
//! operation itself. Nothing is persisted; records live until the process
//! exits.

mod error;
mod models;

pub use error::{Result, StoreError};
pub use models::{NewPlayer, Player, PlayerId};

use parking_lot::Mutex;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Handle to the shared player store. Clones share the same records.
#[derive(Clone, Default)]
pub struct PlayerStore {
  inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
  players: HashMap<PlayerId, Player>,
  /// Every issued id, so a uniform pick doesn't need to walk the map.
  ids: Vec<PlayerId>,
  /// Last nanosecond stamp handed out.
  last_stamp: u128,
}

impl Inner {
  /// Next id stamp. Strictly greater than any stamp issued before, even if
  /// the clock stalls or steps backwards.
  fn next_stamp(&mut self) -> u128 {
    let now = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|d| d.as_nanos())
      .unwrap_or_default();
    self.last_stamp = now.max(self.last_stamp + 1);
    self.last_stamp
  }
}

impl PlayerStore {
  /// Create an empty store.
  pub fn new() -> Self {
    Self::default()
  }

  /// Snapshot of every stored player, in no particular order.
  pub fn list_all(&self) -> Vec<Player> {
    self.inner.lock().players.values().cloned().collect()
  }

  /// Look up a single player.
  pub fn get(&self, id: &PlayerId) -> Result<Player> {
    self
      .inner
      .lock()
      .players
      .get(id)
      .cloned()
      .ok_or_else(|| StoreError::NotFound(id.clone()))
  }

  /// Assign a fresh id to `player`, store it and return the id.
  pub fn create(&self, player: NewPlayer) -> PlayerId {
    let mut inner = self.inner.lock();
    let id = PlayerId::from(inner.next_stamp().to_string());
    inner.ids.push(id.clone());
    inner.players.insert(id.clone(), player.with_id(id.clone()));
    id
  }

  /// Uniformly random id among the stored players.
  pub fn pick_random(&self) -> Result<PlayerId> {
    self
      .inner
      .lock()
      .ids
      .choose(&mut rand::rng())
      .cloned()
      .ok_or(StoreError::Empty)
  }

  pub fn len(&self) -> usize {
    self.inner.lock().players.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.lock().players.is_empty()
  }
}
