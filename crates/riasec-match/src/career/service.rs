use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{Answer, Question, UserId};
use super::repository::{ProfileRecord, ProfileRepository, RepositoryError};
use super::scoring::{Completion, MatchingEngine, ScoringError, ScoringOutcome};
use super::views::MatchingResultsView;

/// Service composing the matching engine with profile storage.
pub struct CareerMatchingService<R> {
    engine: Arc<MatchingEngine>,
    repository: Arc<R>,
    match_limit: usize,
}

impl<R> CareerMatchingService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(engine: MatchingEngine, repository: Arc<R>, match_limit: usize) -> Self {
        Self {
            engine: Arc::new(engine),
            repository,
            match_limit: match_limit.max(1),
        }
    }

    pub fn questions(&self) -> &[Question] {
        self.engine.questions()
    }

    pub fn match_limit(&self) -> usize {
        self.match_limit
    }

    /// Score a complete answer sheet without storing anything.
    pub fn score(
        &self,
        answers: &[Option<Answer>],
    ) -> Result<ScoringOutcome, CareerMatchingServiceError> {
        self.ensure_complete(answers)?;
        Ok(self.engine.score(answers)?)
    }

    /// Score a complete answer sheet and persist the resulting profile for the user.
    pub fn submit(
        &self,
        user_id: UserId,
        answers: &[Option<Answer>],
        limit: Option<usize>,
    ) -> Result<MatchingResultsView, CareerMatchingServiceError> {
        let outcome = self.score(answers)?;
        let record = ProfileRecord::new(user_id, outcome.profile.scores, Utc::now());
        let stored = self.repository.save(record)?;

        info!(
            user_id = %stored.user_id.0,
            holland_code = %outcome.profile.holland_code,
            "stored questionnaire profile"
        );

        Ok(MatchingResultsView::from_outcome(&outcome, self.limit(limit))
            .for_user(stored.user_id, stored.updated_at))
    }

    /// Reload a stored profile and rank it against the current catalog.
    pub fn results(
        &self,
        user_id: &UserId,
        limit: Option<usize>,
    ) -> Result<MatchingResultsView, CareerMatchingServiceError> {
        let record = self
            .repository
            .fetch(user_id)?
            .ok_or(RepositoryError::NotFound)?;
        let outcome = self.engine.rank(record.scores)?;

        debug!(user_id = %record.user_id.0, "recomputed profession matches");

        Ok(MatchingResultsView::from_outcome(&outcome, self.limit(limit))
            .for_user(record.user_id, record.updated_at))
    }

    pub fn limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.match_limit).max(1)
    }

    fn ensure_complete(&self, answers: &[Option<Answer>]) -> Result<(), CareerMatchingServiceError> {
        let questions = self.engine.questions().len();
        if questions == 0 {
            return Err(CareerMatchingServiceError::NoQuestions);
        }
        if answers.len() != questions {
            return Err(ScoringError::InputLengthMismatch {
                answers: answers.len(),
                questions,
            }
            .into());
        }

        if !Completion::of(answers).is_complete() {
            return Err(CareerMatchingServiceError::Incomplete {
                missing: Completion::missing(answers),
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CareerMatchingServiceError {
    #[error("{} question(s) still unanswered", .missing.len())]
    Incomplete { missing: Vec<usize> },
    #[error("no questions available to answer")]
    NoQuestions,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
