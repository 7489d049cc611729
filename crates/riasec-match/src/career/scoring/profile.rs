use serde::{Serialize, Serializer};
use std::fmt;

use super::aggregate::RawSums;
use crate::career::domain::{Dimension, RiasecScores};

/// Number of letters in a full Holland code.
pub const HOLLAND_CODE_LEN: usize = 3;

/// Lower bound of the results chart scale.
pub const CHART_SCALE_FLOOR: u32 = 40;

/// Top dimensions of a profile, or a placeholder when nothing scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HollandCode {
    Undetermined,
    Letters(Vec<Dimension>),
}

impl HollandCode {
    pub const PLACEHOLDER: &'static str = "-";

    /// Build from a dominant ordering, keeping at most three positively scored dimensions.
    pub fn from_ordering(ordering: &[(Dimension, u32)]) -> Self {
        let letters = ordering
            .iter()
            .filter(|(_, score)| *score > 0)
            .take(HOLLAND_CODE_LEN)
            .map(|(dimension, _)| *dimension)
            .collect::<Vec<_>>();

        if letters.is_empty() {
            Self::Undetermined
        } else {
            Self::Letters(letters)
        }
    }

    pub fn letters(&self) -> &[Dimension] {
        match self {
            Self::Undetermined => &[],
            Self::Letters(letters) => letters,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, Self::Undetermined)
    }
}

impl fmt::Display for HollandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undetermined => f.write_str(Self::PLACEHOLDER),
            Self::Letters(letters) => letters
                .iter()
                .try_for_each(|dimension| write!(f, "{}", dimension.letter())),
        }
    }
}

impl Serialize for HollandCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Complete six-dimension profile with its derived ordering and code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub scores: RiasecScores,
    pub holland_code: HollandCode,
    pub dominant: Vec<Dimension>,
}

impl Profile {
    pub fn from_scores(scores: RiasecScores) -> Self {
        let ordering = dominant_ordering(&scores);
        let holland_code = HollandCode::from_ordering(&ordering);
        let dominant = ordering.into_iter().map(|(dimension, _)| dimension).collect();

        Self {
            scores,
            holland_code,
            dominant,
        }
    }

    pub fn score(&self, dimension: Dimension) -> u32 {
        self.scores.get(dimension)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_zero()
    }

    pub fn chart_ceiling(&self) -> u32 {
        self.scores.max_score().max(CHART_SCALE_FLOOR)
    }
}

/// Fill every dimension (absent ones as zero) and derive the Holland code.
pub fn normalize(raw: &RawSums) -> Profile {
    let mut scores = RiasecScores::default();
    for (dimension, sum) in raw.iter() {
        scores.set(dimension, sum);
    }
    Profile::from_scores(scores)
}

fn dominant_ordering(scores: &RiasecScores) -> Vec<(Dimension, u32)> {
    let mut ordering = scores.iter().collect::<Vec<_>>();
    // stable: equal scores keep canonical R, I, A, S, E, C order
    ordering.sort_by(|left, right| right.1.cmp(&left.1));
    ordering
}
