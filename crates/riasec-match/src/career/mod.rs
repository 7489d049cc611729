//! RIASEC questionnaire scoring and profession matching.
//!
//! Answers flow through `scoring` (aggregate, normalize, correlate); `questionnaire` drives
//! the answer-collection session and `service`/`router` expose the pipeline over HTTP.

pub mod catalog;
pub mod domain;
pub mod questionnaire;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{
    sample_professions, sample_questions, CatalogError, ProfessionCatalog, QuestionCatalog,
};
pub use domain::{
    Answer, Dimension, Profession, ProfessionId, Question, QuestionId, RiasecScores, UserId,
    EVALUATION_SCORE_MAX,
};
pub use questionnaire::{QuestionnaireError, QuestionnaireSession, SessionState};
pub use repository::{ProfileRecord, ProfileRepository, RepositoryError};
pub use router::{career_router, ScoreRequest};
pub use scoring::{
    Completion, HollandCode, MatchingEngine, ProfessionMatch, Profile, ScoringError,
    ScoringOutcome, DEFAULT_MATCH_LIMIT,
};
pub use service::{CareerMatchingService, CareerMatchingServiceError};
pub use views::{MatchView, MatchingResultsView, QuestionView};
