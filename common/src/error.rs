//! Errors raised when caller-supplied values fall outside the discovery vocabulary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    #[error("invalid sort order: {0:?} (expected newest, oldest, az, za or popular)")]
    InvalidSortOrder(String),

    #[error("invalid difficulty level: {0:?} (expected beginner, intermediate or advanced)")]
    InvalidDifficulty(String),

    #[error("unknown course badge: {0:?}")]
    UnknownBadge(String),
}
