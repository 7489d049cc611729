use crate::career::domain::{Dimension, Profession, Question, QuestionId, RiasecScores};

const QUESTIONS_PER_DIMENSION: u32 = 6;

/// Bundled question set: six items per dimension, interleaved R, I, A, S, E, C.
pub fn sample_questions() -> Vec<Question> {
    let dimensions = Dimension::ordered();
    (0..QUESTIONS_PER_DIMENSION * dimensions.len() as u32)
        .map(|index| Question {
            id: QuestionId(index + 1),
            dimension: dimensions[index as usize % dimensions.len()],
        })
        .collect()
}

type SampleProfession = (u32, &'static str, &'static str, Option<[u32; 6]>);

const SAMPLE_PROFESSIONS: &[SampleProfession] = &[
    (1, "Electrician", "Construction", Some([35, 20, 5, 10, 10, 20])),
    (2, "Carpenter", "Construction", Some([38, 10, 20, 8, 10, 12])),
    (3, "Data Scientist", "Technology", Some([8, 38, 12, 8, 12, 28])),
    (4, "Physician", "Health", Some([15, 36, 6, 32, 12, 14])),
    (5, "Graphic Designer", "Media", Some([10, 12, 38, 10, 16, 10])),
    (6, "Musician", "Arts", Some([8, 10, 40, 14, 14, 4])),
    (7, "Teacher", "Education", Some([6, 16, 18, 38, 14, 12])),
    (8, "Nurse", "Health", Some([16, 22, 6, 37, 8, 18])),
    (9, "Sales Manager", "Commerce", Some([6, 8, 10, 22, 38, 18])),
    (10, "Entrepreneur", "Commerce", Some([10, 14, 18, 16, 40, 12])),
    (11, "Accountant", "Finance", Some([4, 18, 4, 10, 14, 38])),
    (12, "Librarian", "Culture", Some([6, 20, 16, 18, 6, 34])),
    (13, "Archivist", "Culture", None),
];

/// Bundled profession catalog used by the demo and when no catalog file is configured.
pub fn sample_professions() -> Vec<Profession> {
    SAMPLE_PROFESSIONS
        .iter()
        .map(|(id, name, sector, scores)| {
            let mut profession = Profession::new(*id, *name);
            profession.activity_sector = Some((*sector).to_string());
            if let Some([r, i, a, s, e, c]) = scores {
                profession.set_evaluation(RiasecScores::new(*r, *i, *a, *s, *e, *c));
            }
            profession
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_questions_cover_each_dimension_equally() {
        let questions = sample_questions();
        assert_eq!(questions.len(), 36);
        for dimension in Dimension::ordered() {
            let count = questions
                .iter()
                .filter(|question| question.dimension == dimension)
                .count();
            assert_eq!(count, QUESTIONS_PER_DIMENSION as usize);
        }
        assert_eq!(questions[0].id, QuestionId(1));
        assert_eq!(questions[7].dimension, Dimension::Investigative);
    }

    #[test]
    fn sample_professions_include_an_unevaluated_entry() {
        let professions = sample_professions();
        assert_eq!(professions.len(), SAMPLE_PROFESSIONS.len());
        assert_eq!(
            professions
                .iter()
                .filter(|profession| !profession.is_evaluated())
                .count(),
            1
        );
    }
}
