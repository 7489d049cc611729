use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{RiasecScores, UserId};

/// Stored questionnaire outcome. Only the profile is kept; matches are recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: UserId,
    pub scores: RiasecScores,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn new(user_id: UserId, scores: RiasecScores, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            scores,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Storage abstraction for computed profiles, keyed by user identity.
pub trait ProfileRepository: Send + Sync {
    /// Replace whatever profile the user had before.
    fn save(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError>;
    fn fetch(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("profile not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
