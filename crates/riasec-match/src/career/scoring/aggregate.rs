use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ScoringError;
use crate::career::domain::{Answer, Dimension, Question, QuestionId};

/// Per-dimension answer totals before normalization. Dimensions nobody answered are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSums(BTreeMap<Dimension, u32>);

impl RawSums {
    pub fn add(&mut self, dimension: Dimension, value: u32) {
        *self.0.entry(dimension).or_insert(0) += value;
    }

    pub fn get(&self, dimension: Dimension) -> Option<u32> {
        self.0.get(&dimension).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u32)> + '_ {
        self.0.iter().map(|(dimension, sum)| (*dimension, *sum))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Dimension, u32)> for RawSums {
    fn from_iter<T: IntoIterator<Item = (Dimension, u32)>>(iter: T) -> Self {
        let mut sums = Self::default();
        for (dimension, value) in iter {
            sums.add(dimension, value);
        }
        sums
    }
}

/// Sum positional answers into their question's dimension. Unanswered entries add nothing.
pub fn aggregate(
    answers: &[Option<Answer>],
    dimensions: &[Dimension],
) -> Result<RawSums, ScoringError> {
    if answers.len() != dimensions.len() {
        return Err(ScoringError::InputLengthMismatch {
            answers: answers.len(),
            questions: dimensions.len(),
        });
    }

    Ok(answers
        .iter()
        .zip(dimensions)
        .filter_map(|(answer, dimension)| answer.map(|answer| (*dimension, answer.value())))
        .collect())
}

/// Aggregate a sparse answer map keyed by question id against the ordered catalog.
pub fn aggregate_by_question(
    answers: &BTreeMap<QuestionId, Answer>,
    questions: &[Question],
) -> Result<RawSums, ScoringError> {
    if let Some(unknown) = answers
        .keys()
        .find(|id| !questions.iter().any(|question| question.id == **id))
    {
        return Err(ScoringError::UnknownQuestion(*unknown));
    }

    let aligned = questions
        .iter()
        .map(|question| answers.get(&question.id).copied())
        .collect::<Vec<_>>();
    let dimensions = questions
        .iter()
        .map(|question| question.dimension)
        .collect::<Vec<_>>();

    aggregate(&aligned, &dimensions)
}

/// Progress through a questionnaire, as shown on the progress border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
    pub percentage: u8,
}

impl Completion {
    pub fn of(answers: &[Option<Answer>]) -> Self {
        let answered = answers.iter().filter(|answer| answer.is_some()).count();
        let total = answers.len();
        let percentage = if total == 0 {
            0
        } else {
            ((answered as f64 / total as f64) * 100.0).round() as u8
        };

        Self {
            answered,
            total,
            percentage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }

    /// Zero-based indexes of unanswered entries.
    pub fn missing(answers: &[Option<Answer>]) -> Vec<usize> {
        answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| answer.is_none())
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_per_dimension() -> Vec<Dimension> {
        Dimension::ordered().to_vec()
    }

    #[test]
    fn aggregate_sums_answers_per_dimension() {
        let dimensions = vec![
            Dimension::Realistic,
            Dimension::Artistic,
            Dimension::Realistic,
            Dimension::Social,
        ];
        let answers = vec![
            Some(Answer::StrongLike),
            Some(Answer::Like),
            Some(Answer::Neutral),
            Some(Answer::StrongDislike),
        ];

        let sums = aggregate(&answers, &dimensions).expect("aligned input");

        assert_eq!(sums.get(Dimension::Realistic), Some(6));
        assert_eq!(sums.get(Dimension::Artistic), Some(3));
        assert_eq!(sums.get(Dimension::Social), Some(0));
        assert_eq!(sums.get(Dimension::Conventional), None);
    }

    #[test]
    fn aggregate_skips_unanswered_entries() {
        let answers = vec![Some(Answer::Like), None, None, None, None, Some(Answer::Dislike)];

        let sums = aggregate(&answers, &one_per_dimension()).expect("aligned input");

        assert_eq!(sums.get(Dimension::Realistic), Some(3));
        assert_eq!(sums.get(Dimension::Investigative), None);
        assert_eq!(sums.get(Dimension::Conventional), Some(1));
    }

    #[test]
    fn aggregate_rejects_misaligned_input() {
        let answers = vec![Some(Answer::Like); 5];

        let error = aggregate(&answers, &one_per_dimension()).expect_err("length mismatch");

        assert_eq!(
            error,
            ScoringError::InputLengthMismatch {
                answers: 5,
                questions: 6
            }
        );
    }

    #[test]
    fn aggregate_by_question_rejects_unknown_ids() {
        let questions = vec![Question {
            id: QuestionId(1),
            dimension: Dimension::Social,
        }];
        let mut answers = BTreeMap::new();
        answers.insert(QuestionId(9), Answer::Like);

        let error = aggregate_by_question(&answers, &questions).expect_err("unknown id");

        assert_eq!(error, ScoringError::UnknownQuestion(QuestionId(9)));
    }

    #[test]
    fn completion_rounds_percentage() {
        let answers = vec![Some(Answer::Like), None, None];
        let completion = Completion::of(&answers);

        assert_eq!(completion.answered, 1);
        assert_eq!(completion.total, 3);
        assert_eq!(completion.percentage, 33);
        assert!(!completion.is_complete());
        assert_eq!(Completion::missing(&answers), vec![1, 2]);

        let empty = Completion::of(&[]);
        assert_eq!(empty.percentage, 0);
        assert!(!empty.is_complete());
    }
}
