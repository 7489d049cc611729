use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::normalizer::{clean_cell, parse_dimension};
use super::CatalogError;
use crate::career::domain::{
    Dimension, Profession, ProfessionId, Question, QuestionId, RiasecScores,
};

pub(crate) fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut questions: Vec<Question> = Vec::new();

    for record in csv_reader.deserialize::<QuestionRow>() {
        let row = record?;
        let id = QuestionId(row.id);
        if questions.iter().any(|question| question.id == id) {
            return Err(CatalogError::DuplicateQuestion(id));
        }
        let dimension = parse_dimension(&row.dimension)
            .ok_or_else(|| CatalogError::InvalidDimension(row.dimension.clone()))?;

        questions.push(Question { id, dimension });
    }

    Ok(questions)
}

pub(crate) fn parse_professions<R: Read>(reader: R) -> Result<Vec<Profession>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut professions = Vec::new();

    for record in csv_reader.deserialize::<ProfessionRow>() {
        professions.push(record?.into_profession());
    }

    Ok(professions)
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: u32,
    dimension: String,
}

#[derive(Debug, Deserialize)]
struct ProfessionRow {
    id: u32,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    option: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    activity_sector: Option<String>,
    #[serde(default)]
    min_duration: Option<u32>,
    #[serde(default)]
    max_duration: Option<u32>,
    #[serde(rename = "R", default)]
    realistic: Option<u32>,
    #[serde(rename = "I", default)]
    investigative: Option<u32>,
    #[serde(rename = "A", default)]
    artistic: Option<u32>,
    #[serde(rename = "S", default)]
    social: Option<u32>,
    #[serde(rename = "E", default)]
    enterprising: Option<u32>,
    #[serde(rename = "C", default)]
    conventional: Option<u32>,
}

impl ProfessionRow {
    fn scores(&self) -> [(Dimension, Option<u32>); 6] {
        [
            (Dimension::Realistic, self.realistic),
            (Dimension::Investigative, self.investigative),
            (Dimension::Artistic, self.artistic),
            (Dimension::Social, self.social),
            (Dimension::Enterprising, self.enterprising),
            (Dimension::Conventional, self.conventional),
        ]
    }

    fn into_profession(self) -> Profession {
        let id = ProfessionId(self.id);
        let cells = self.scores();

        // a row with no score cells at all has not been evaluated yet
        let riasec_scores = if cells.iter().all(|(_, score)| score.is_none()) {
            Vec::new()
        } else {
            let mut scores = RiasecScores::default();
            for (dimension, score) in cells {
                scores.set(dimension, score.unwrap_or(0));
            }
            vec![scores]
        };

        Profession {
            id,
            name: clean_cell(&self.name),
            option: self.option,
            description: self.description,
            activity_sector: self.activity_sector,
            min_duration: self.min_duration,
            max_duration: self.max_duration,
            riasec_scores,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
