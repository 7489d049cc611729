mod aggregate;
mod correlate;
mod profile;

pub use aggregate::{aggregate, aggregate_by_question, Completion, RawSums};
pub use correlate::{correlate, ProfessionMatch, DEFAULT_MATCH_LIMIT};
pub use profile::{normalize, HollandCode, Profile, CHART_SCALE_FLOOR, HOLLAND_CODE_LEN};

use serde::Serialize;
use tracing::debug;

use super::domain::{Answer, Dimension, Profession, Question, QuestionId, RiasecScores};

/// Contract violations raised by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("received {answers} answers for {questions} questions")]
    InputLengthMismatch { answers: usize, questions: usize },
    #[error("no professions available to correlate against")]
    EmptyCatalog,
    #[error("answer references unknown question {0}")]
    UnknownQuestion(QuestionId),
}

/// Stateless engine holding the question and profession catalogs for a session.
pub struct MatchingEngine {
    questions: Vec<Question>,
    dimensions: Vec<Dimension>,
    professions: Vec<Profession>,
}

impl MatchingEngine {
    pub fn new(questions: Vec<Question>, professions: Vec<Profession>) -> Self {
        let dimensions = questions.iter().map(|question| question.dimension).collect();
        Self {
            questions,
            dimensions,
            professions,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn professions(&self) -> &[Profession] {
        &self.professions
    }

    /// Aggregate, normalize, and rank a positional answer sheet.
    pub fn score(&self, answers: &[Option<Answer>]) -> Result<ScoringOutcome, ScoringError> {
        let raw = aggregate(answers, &self.dimensions)?;
        let profile = normalize(&raw);
        let matches = correlate(&profile, &self.professions)?;
        let completion = Completion::of(answers);

        debug!(
            answered = completion.answered,
            total = completion.total,
            holland_code = %profile.holland_code,
            matches = matches.len(),
            "scored questionnaire"
        );

        Ok(ScoringOutcome {
            profile,
            completion: Some(completion),
            matches,
        })
    }

    /// Recompute matches for a previously stored profile against the current catalog.
    pub fn rank(&self, scores: RiasecScores) -> Result<ScoringOutcome, ScoringError> {
        let profile = Profile::from_scores(scores);
        let matches = correlate(&profile, &self.professions)?;

        Ok(ScoringOutcome {
            profile,
            completion: None,
            matches,
        })
    }
}

/// Profile plus the complete, ordered match list for one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutcome {
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<Completion>,
    pub matches: Vec<ProfessionMatch>,
}

impl ScoringOutcome {
    pub fn top(&self, limit: usize) -> &[ProfessionMatch] {
        &self.matches[..limit.min(self.matches.len())]
    }
}
