use thiserror::Error;

use crate::models::PlayerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
  #[error("player not found: {0}")]
  NotFound(PlayerId),

  #[error("store holds no players")]
  Empty,
}

pub type Result<T> = std::result::Result<T, StoreError>;
