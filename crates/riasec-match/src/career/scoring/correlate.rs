use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::profile::Profile;
use super::ScoringError;
use crate::career::domain::{Profession, ProfessionId, RiasecScores};

/// Number of matches the results view shows.
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// A profession ranked against a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionMatch {
    pub profession_id: ProfessionId,
    pub name: String,
    pub correlation: f64,
}

/// Rank every profession by cosine similarity to the profile.
///
/// Professions whose reference vector is all zeros score `0.0` and always sort after the
/// professions that could be compared. Remaining ties are broken by ascending profession id.
/// The full ranking is returned; truncation is up to the caller.
pub fn correlate(
    profile: &Profile,
    catalog: &[Profession],
) -> Result<Vec<ProfessionMatch>, ScoringError> {
    if catalog.is_empty() {
        return Err(ScoringError::EmptyCatalog);
    }

    let target = profile.scores.as_vector();
    let mut ranked = catalog
        .iter()
        .map(|profession| {
            let reference = profession.reference_vector();
            let correlation = cosine_similarity(&target, &reference.as_vector()).unwrap_or(0.0);
            let alignment = Alignment::between(&profile.scores, &reference);
            let candidate = ProfessionMatch {
                profession_id: profession.id,
                name: profession.name.clone(),
                correlation,
            };
            (reference.is_zero(), alignment, candidate)
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|(left_zero, left_alignment, left), (right_zero, right_alignment, right)| {
        left_zero
            .cmp(right_zero)
            .then_with(|| right_alignment.cmp_similarity(left_alignment))
            .then_with(|| left.profession_id.cmp(&right.profession_id))
    });

    Ok(ranked
        .into_iter()
        .map(|(_, _, candidate)| candidate)
        .collect())
}

/// Integer dot product and squared reference norm against a fixed profile.
///
/// Every candidate shares the profile norm, so similarity orders exactly like
/// `dot / sqrt(norm_sq)`. Comparing `dot_a² · norm_b` with `dot_b² · norm_a` keeps
/// proportional references exactly tied instead of letting float rounding pick an order.
#[derive(Debug, Clone, Copy)]
struct Alignment {
    dot: u128,
    norm_sq: u128,
}

impl Alignment {
    fn between(profile: &RiasecScores, reference: &RiasecScores) -> Self {
        profile.iter().zip(reference.iter()).fold(
            Self { dot: 0, norm_sq: 0 },
            |acc, ((_, left), (_, right))| Self {
                dot: acc.dot + u128::from(left) * u128::from(right),
                norm_sq: acc.norm_sq + u128::from(right) * u128::from(right),
            },
        )
    }

    fn cmp_similarity(&self, other: &Self) -> Ordering {
        let left = self
            .dot
            .checked_mul(self.dot)
            .and_then(|squared| squared.checked_mul(other.norm_sq));
        let right = other
            .dot
            .checked_mul(other.dot)
            .and_then(|squared| squared.checked_mul(self.norm_sq));

        match (left, right) {
            (Some(left), Some(right)) => left.cmp(&right),
            _ => self.approximate().total_cmp(&other.approximate()),
        }
    }

    fn approximate(&self) -> f64 {
        if self.norm_sq == 0 {
            return 0.0;
        }
        self.dot as f64 / (self.norm_sq as f64).sqrt()
    }
}

/// `None` when either vector has zero norm.
fn cosine_similarity(left: &[f64; 6], right: &[f64; 6]) -> Option<f64> {
    let mut dot = 0.0f64;
    let mut norm_left = 0.0f64;
    let mut norm_right = 0.0f64;
    for (x, y) in left.iter().zip(right.iter()) {
        dot += x * y;
        norm_left += x * x;
        norm_right += y * y;
    }

    let denom = norm_left.sqrt() * norm_right.sqrt();
    if denom <= f64::EPSILON {
        return None;
    }
    Some((dot / denom).clamp(-1.0, 1.0))
}
