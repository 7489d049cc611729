use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::career::domain::{Answer, Dimension, UserId};
use crate::career::repository::{ProfileRecord, ProfileRepository, RepositoryError};
use crate::career::scoring::MatchingEngine;
use crate::career::{career_router, sample_professions, sample_questions, CareerMatchingService};

pub(super) const MATCH_LIMIT: usize = 5;

pub(super) fn engine() -> MatchingEngine {
    MatchingEngine::new(sample_questions(), sample_professions())
}

/// Answer sheet for the bundled questions: `favored` items strongly liked, the rest strongly disliked.
pub(super) fn answers_favoring(favored: Dimension) -> Vec<Option<Answer>> {
    sample_questions()
        .iter()
        .map(|question| {
            if question.dimension == favored {
                Some(Answer::StrongLike)
            } else {
                Some(Answer::StrongDislike)
            }
        })
        .collect()
}

pub(super) fn build_service() -> (CareerMatchingService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = CareerMatchingService::new(engine(), repository.clone(), MATCH_LIMIT);
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
}

impl ProfileRepository for MemoryRepository {
    fn save(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = match guard.get(&record.user_id) {
            Some(existing) => ProfileRecord {
                created_at: existing.created_at,
                ..record
            },
            None => record,
        };
        guard.insert(record.user_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(user_id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn save(&self, _record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _user_id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: CareerMatchingService<MemoryRepository>) -> axum::Router {
    career_router(Arc::new(service))
}
