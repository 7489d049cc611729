//! Question and profession catalogs supplied to the scoring engine.
//!
//! Catalogs are reference data: loaded once (CSV or JSON) and read-only afterwards.

mod normalizer;
mod parser;
mod samples;

pub use samples::{sample_professions, sample_questions};

use crate::career::domain::{
    Dimension, Profession, ProfessionId, Question, QuestionId, EVALUATION_SCORE_MAX,
};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid catalog JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown RIASEC dimension '{0}'")]
    InvalidDimension(String),
    #[error("question {0} appears more than once")]
    DuplicateQuestion(QuestionId),
    #[error("profession {0} appears more than once")]
    DuplicateProfession(ProfessionId),
    #[error("{catalog} catalog has no entries")]
    Empty { catalog: &'static str },
    #[error("profession {profession} scores {score} on {dimension}, above the evaluation maximum")]
    ScoreOutOfRange {
        profession: ProfessionId,
        dimension: Dimension,
        score: u32,
    },
}

pub struct QuestionCatalog;

impl QuestionCatalog {
    /// CSV with `id,dimension` headers; dimensions may be letters or full names.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Question>, CatalogError> {
        let questions = parser::parse_questions(reader)?;
        if questions.is_empty() {
            return Err(CatalogError::Empty {
                catalog: "question",
            });
        }
        Ok(questions)
    }
}

pub struct ProfessionCatalog;

impl ProfessionCatalog {
    /// Loads `.json` files as a profession array and anything else as CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Profession>, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_reader(file)
        } else {
            Self::from_reader(file)
        }
    }

    /// CSV with `id,name,option,description,activity_sector,min_duration,max_duration,R,I,A,S,E,C`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Profession>, CatalogError> {
        validate_professions(parser::parse_professions(reader)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Profession>, CatalogError> {
        validate_professions(serde_json::from_reader(reader)?)
    }
}

/// Checks shared by every profession source: at least one entry, unique ids, and every
/// evaluation within `0..=EVALUATION_SCORE_MAX`.
fn validate_professions(professions: Vec<Profession>) -> Result<Vec<Profession>, CatalogError> {
    if professions.is_empty() {
        return Err(CatalogError::Empty {
            catalog: "profession",
        });
    }

    let mut seen = HashSet::with_capacity(professions.len());
    for profession in &professions {
        if !seen.insert(profession.id) {
            return Err(CatalogError::DuplicateProfession(profession.id));
        }

        let out_of_range = profession
            .riasec_scores
            .iter()
            .flat_map(|scores| scores.iter())
            .find(|(_, score)| *score > EVALUATION_SCORE_MAX);
        if let Some((dimension, score)) = out_of_range {
            return Err(CatalogError::ScoreOutOfRange {
                profession: profession.id,
                dimension,
                score,
            });
        }
    }

    Ok(professions)
}
