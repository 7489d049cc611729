use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Dimension, ProfessionId, Question, QuestionId, RiasecScores, UserId};
use super::scoring::{Completion, ProfessionMatch, ScoringOutcome};

#[derive(Debug, Clone, Serialize)]
pub struct DimensionScoreView {
    pub dimension: Dimension,
    pub name: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub profession_id: ProfessionId,
    pub name: String,
    pub correlation: f64,
    pub percent: u8,
}

impl From<&ProfessionMatch> for MatchView {
    fn from(value: &ProfessionMatch) -> Self {
        Self {
            profession_id: value.profession_id,
            name: value.name.clone(),
            correlation: value.correlation,
            percent: (value.correlation.clamp(0.0, 1.0) * 100.0).round() as u8,
        }
    }
}

/// Results payload: profile sorted by dominance, Holland code, and the top matches.
#[derive(Debug, Clone, Serialize)]
pub struct MatchingResultsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub holland_code: String,
    pub profile: RiasecScores,
    pub dimensions: Vec<DimensionScoreView>,
    pub chart_ceiling: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<Completion>,
    pub matches: Vec<MatchView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MatchingResultsView {
    pub fn from_outcome(outcome: &ScoringOutcome, limit: usize) -> Self {
        let profile = &outcome.profile;
        let dimensions = profile
            .dominant
            .iter()
            .map(|dimension| DimensionScoreView {
                dimension: *dimension,
                name: dimension.name(),
                score: profile.score(*dimension),
            })
            .collect();

        Self {
            user_id: None,
            holland_code: profile.holland_code.to_string(),
            profile: profile.scores,
            dimensions,
            chart_ceiling: profile.chart_ceiling(),
            completion: outcome.completion,
            matches: outcome.top(limit).iter().map(MatchView::from).collect(),
            updated_at: None,
        }
    }

    pub fn for_user(mut self, user_id: UserId, updated_at: DateTime<Utc>) -> Self {
        self.user_id = Some(user_id);
        self.updated_at = Some(updated_at);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub dimension: Dimension,
    pub dimension_name: &'static str,
}

impl From<&Question> for QuestionView {
    fn from(value: &Question) -> Self {
        Self {
            id: value.id,
            dimension: value.dimension,
            dimension_name: value.dimension.name(),
        }
    }
}
