use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest score a profession evaluation may carry on any dimension.
pub const EVALUATION_SCORE_MAX: u32 = 40;

/// One of the six RIASEC interest dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl Dimension {
    /// Canonical R, I, A, S, E, C order used for vectors and tie-breaks.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Realistic,
            Self::Investigative,
            Self::Artistic,
            Self::Social,
            Self::Enterprising,
            Self::Conventional,
        ]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Realistic => 'R',
            Self::Investigative => 'I',
            Self::Artistic => 'A',
            Self::Social => 'S',
            Self::Enterprising => 'E',
            Self::Conventional => 'C',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Realistic => 0,
            Self::Investigative => 1,
            Self::Artistic => 2,
            Self::Social => 3,
            Self::Enterprising => 4,
            Self::Conventional => 5,
        }
    }

    /// Accepts either the single letter or the full dimension name, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered().into_iter().find(|dimension| {
            let mut letter = [0u8; 4];
            trimmed.eq_ignore_ascii_case(dimension.letter().encode_utf8(&mut letter))
                || trimmed.eq_ignore_ascii_case(dimension.name())
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownDimension(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown RIASEC dimension '{0}'")]
pub struct UnknownDimension(pub String);

/// Five-level Likert response, encoded 0 (strong dislike) through 4 (strong like).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Answer {
    StrongDislike,
    Dislike,
    Neutral,
    Like,
    StrongLike,
}

impl Answer {
    pub const fn value(self) -> u32 {
        match self {
            Self::StrongDislike => 0,
            Self::Dislike => 1,
            Self::Neutral => 2,
            Self::Like => 3,
            Self::StrongLike => 4,
        }
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::StrongDislike),
            1 => Some(Self::Dislike),
            2 => Some(Self::Neutral),
            3 => Some(Self::Like),
            4 => Some(Self::StrongLike),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongDislike => "Strongly dislike",
            Self::Dislike => "Dislike",
            Self::Neutral => "Neutral",
            Self::Like => "Like",
            Self::StrongLike => "Strongly like",
        }
    }
}

impl TryFrom<u8> for Answer {
    type Error = InvalidAnswer;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(InvalidAnswer(value))
    }
}

impl From<Answer> for u8 {
    fn from(value: Answer) -> Self {
        value.value() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("answer {0} is outside the 0-4 scale")]
pub struct InvalidAnswer(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProfessionId(pub u32);

impl fmt::Display for ProfessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Catalog entry assigning a questionnaire item to the dimension it measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub dimension: Dimension,
}

/// Six-dimension score vector. Every dimension is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiasecScores {
    #[serde(rename = "R", default)]
    pub realistic: u32,
    #[serde(rename = "I", default)]
    pub investigative: u32,
    #[serde(rename = "A", default)]
    pub artistic: u32,
    #[serde(rename = "S", default)]
    pub social: u32,
    #[serde(rename = "E", default)]
    pub enterprising: u32,
    #[serde(rename = "C", default)]
    pub conventional: u32,
}

impl RiasecScores {
    pub const fn new(
        realistic: u32,
        investigative: u32,
        artistic: u32,
        social: u32,
        enterprising: u32,
        conventional: u32,
    ) -> Self {
        Self {
            realistic,
            investigative,
            artistic,
            social,
            enterprising,
            conventional,
        }
    }

    pub const fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Realistic => self.realistic,
            Dimension::Investigative => self.investigative,
            Dimension::Artistic => self.artistic,
            Dimension::Social => self.social,
            Dimension::Enterprising => self.enterprising,
            Dimension::Conventional => self.conventional,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: u32) {
        let slot = match dimension {
            Dimension::Realistic => &mut self.realistic,
            Dimension::Investigative => &mut self.investigative,
            Dimension::Artistic => &mut self.artistic,
            Dimension::Social => &mut self.social,
            Dimension::Enterprising => &mut self.enterprising,
            Dimension::Conventional => &mut self.conventional,
        };
        *slot = value;
    }

    /// Scores paired with their dimension, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u32)> + '_ {
        Dimension::ordered()
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    pub fn as_vector(&self) -> [f64; 6] {
        let mut vector = [0.0; 6];
        for (dimension, score) in self.iter() {
            vector[dimension.index()] = f64::from(score);
        }
        vector
    }

    pub fn max_score(&self) -> u32 {
        self.iter().map(|(_, score)| score).max().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, score)| score == 0)
    }

    pub fn clamped(mut self, max: u32) -> Self {
        for dimension in Dimension::ordered() {
            let value = self.get(dimension).min(max);
            self.set(dimension, value);
        }
        self
    }
}

/// Profession with its reference RIASEC evaluations. The first evaluation is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    pub id: ProfessionId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u32>,
    #[serde(default)]
    pub riasec_scores: Vec<RiasecScores>,
}

impl Profession {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ProfessionId(id),
            name: name.into(),
            option: None,
            description: None,
            activity_sector: None,
            min_duration: None,
            max_duration: None,
            riasec_scores: Vec::new(),
        }
    }

    pub fn with_evaluation(mut self, scores: RiasecScores) -> Self {
        self.set_evaluation(scores);
        self
    }

    /// Replace the authoritative evaluation, clamping each score to the slider maximum.
    pub fn set_evaluation(&mut self, scores: RiasecScores) {
        let scores = scores.clamped(EVALUATION_SCORE_MAX);
        match self.riasec_scores.first_mut() {
            Some(existing) => *existing = scores,
            None => self.riasec_scores.push(scores),
        }
    }

    pub fn is_evaluated(&self) -> bool {
        !self.riasec_scores.is_empty()
    }

    /// Authoritative reference vector; unevaluated professions score zero everywhere.
    pub fn reference_vector(&self) -> RiasecScores {
        self.riasec_scores.first().copied().unwrap_or_default()
    }
}
