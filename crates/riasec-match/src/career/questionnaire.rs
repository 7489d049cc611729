use serde::Serialize;

use super::domain::{Answer, Dimension, Question};
use super::scoring::Completion;

/// Where a respondent is in the questionnaire flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Onboarding,
    Answering { index: usize },
    Reviewing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("no questions available")]
    NoQuestions,
    #[error("cannot {action} while {state:?}")]
    InvalidTransition {
        state: SessionState,
        action: &'static str,
    },
    #[error("question {index} is out of range for {total} questions")]
    OutOfRange { index: usize, total: usize },
    #[error("question {index} has not been reached yet")]
    NotYetVisited { index: usize },
    #[error("{} question(s) still unanswered", .missing.len())]
    Incomplete { missing: Vec<usize> },
}

/// Linear, resumable questionnaire session that produces the positional answer sheet.
///
/// Forward navigation is limited to questions already reached; answering the current
/// question advances automatically. Reviewing never resets answers, and submission is
/// only allowed once every question has an answer.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    questions: Vec<Question>,
    answers: Vec<Option<Answer>>,
    state: SessionState,
    furthest: usize,
    resume_index: usize,
}

impl QuestionnaireSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            state: SessionState::Onboarding,
            furthest: 0,
            resume_index: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &[Option<Answer>] {
        &self.answers
    }

    pub fn dimensions(&self) -> Vec<Dimension> {
        self.questions
            .iter()
            .map(|question| question.dimension)
            .collect()
    }

    pub fn completion(&self) -> Completion {
        Completion::of(&self.answers)
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::Answering { index } => self.questions.get(index),
            _ => None,
        }
    }

    pub fn start(&mut self) -> Result<(), QuestionnaireError> {
        if self.state != SessionState::Onboarding {
            return Err(self.invalid("start"));
        }
        if self.questions.is_empty() {
            return Err(QuestionnaireError::NoQuestions);
        }
        self.state = SessionState::Answering { index: 0 };
        Ok(())
    }

    /// Record an answer for the current question and move on unless it is the last one.
    pub fn answer(&mut self, answer: Answer) -> Result<(), QuestionnaireError> {
        let index = self.answering_index("answer")?;
        self.answers[index] = Some(answer);

        if index + 1 < self.questions.len() {
            self.move_to(index + 1);
        }
        Ok(())
    }

    /// Step forward within already-visited questions. Returns the resulting index.
    pub fn next(&mut self) -> Result<usize, QuestionnaireError> {
        let index = self.answering_index("move forward")?;
        if index < self.furthest {
            self.move_to(index + 1);
            return Ok(index + 1);
        }
        Ok(index)
    }

    pub fn previous(&mut self) -> Result<usize, QuestionnaireError> {
        let index = self.answering_index("move back")?;
        if index > 0 {
            self.move_to(index - 1);
            return Ok(index - 1);
        }
        Ok(index)
    }

    pub fn review(&mut self) -> Result<(), QuestionnaireError> {
        let index = self.answering_index("review")?;
        self.resume_index = index;
        self.state = SessionState::Reviewing;
        Ok(())
    }

    /// Leave review and return to the question that was open before it.
    pub fn resume(&mut self) -> Result<(), QuestionnaireError> {
        if self.state != SessionState::Reviewing {
            return Err(self.invalid("resume"));
        }
        self.state = SessionState::Answering {
            index: self.resume_index,
        };
        Ok(())
    }

    /// Jump to a question. From review any question may be opened; while answering only
    /// questions already reached.
    pub fn go_to(&mut self, index: usize) -> Result<(), QuestionnaireError> {
        let total = self.questions.len();
        if index >= total {
            return Err(QuestionnaireError::OutOfRange { index, total });
        }

        match self.state {
            SessionState::Reviewing => {
                self.move_to(index);
                Ok(())
            }
            SessionState::Answering { .. } if index <= self.furthest => {
                self.move_to(index);
                Ok(())
            }
            SessionState::Answering { .. } => Err(QuestionnaireError::NotYetVisited { index }),
            _ => Err(self.invalid("jump to a question")),
        }
    }

    /// Close the session and hand back the complete answer sheet.
    pub fn submit(&mut self) -> Result<Vec<Option<Answer>>, QuestionnaireError> {
        match self.state {
            SessionState::Answering { .. } | SessionState::Reviewing => {}
            _ => return Err(self.invalid("submit")),
        }

        let missing = Completion::missing(&self.answers);
        if !missing.is_empty() {
            return Err(QuestionnaireError::Incomplete { missing });
        }

        self.state = SessionState::Submitted;
        Ok(self.answers.clone())
    }

    fn answering_index(&self, action: &'static str) -> Result<usize, QuestionnaireError> {
        match self.state {
            SessionState::Answering { index } => Ok(index),
            _ => Err(self.invalid(action)),
        }
    }

    fn move_to(&mut self, index: usize) {
        self.furthest = self.furthest.max(index);
        self.state = SessionState::Answering { index };
    }

    fn invalid(&self, action: &'static str) -> QuestionnaireError {
        QuestionnaireError::InvalidTransition {
            state: self.state,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::domain::QuestionId;

    fn questions(count: u32) -> Vec<Question> {
        (0..count)
            .map(|index| Question {
                id: QuestionId(index + 1),
                dimension: Dimension::ordered()[(index % 6) as usize],
            })
            .collect()
    }

    #[test]
    fn answering_advances_until_last_question() {
        let mut session = QuestionnaireSession::new(questions(3));
        session.start().expect("start");

        session.answer(Answer::Like).expect("answer 0");
        session.answer(Answer::Neutral).expect("answer 1");
        session.answer(Answer::StrongLike).expect("answer 2");

        assert_eq!(session.state(), SessionState::Answering { index: 2 });
        assert!(session.completion().is_complete());
    }

    #[test]
    fn next_is_bounded_by_furthest_visited() {
        let mut session = QuestionnaireSession::new(questions(4));
        session.start().expect("start");
        session.answer(Answer::Like).expect("answer 0");

        assert_eq!(session.previous(), Ok(0));
        assert_eq!(session.previous(), Ok(0));
        assert_eq!(session.next(), Ok(1));
        assert_eq!(session.next(), Ok(1));
        assert_eq!(
            session.go_to(3),
            Err(QuestionnaireError::NotYetVisited { index: 3 })
        );
    }

    #[test]
    fn review_returns_to_selected_question_without_resetting() {
        let mut session = QuestionnaireSession::new(questions(3));
        session.start().expect("start");
        session.answer(Answer::Dislike).expect("answer 0");
        session.answer(Answer::Like).expect("answer 1");

        session.review().expect("review");
        assert_eq!(session.state(), SessionState::Reviewing);
        assert!(session.current_question().is_none());

        session.go_to(0).expect("jump from review");
        assert_eq!(session.state(), SessionState::Answering { index: 0 });
        assert_eq!(session.answers()[1], Some(Answer::Like));

        session.review().expect("review again");
        session.resume().expect("resume");
        assert_eq!(session.state(), SessionState::Answering { index: 0 });
    }

    #[test]
    fn submit_requires_every_answer() {
        let mut session = QuestionnaireSession::new(questions(3));
        session.start().expect("start");
        session.answer(Answer::Like).expect("answer 0");

        assert_eq!(
            session.submit(),
            Err(QuestionnaireError::Incomplete {
                missing: vec![1, 2]
            })
        );

        session.answer(Answer::Like).expect("answer 1");
        session.answer(Answer::Like).expect("answer 2");
        let answers = session.submit().expect("complete");

        assert_eq!(answers.len(), 3);
        assert_eq!(session.state(), SessionState::Submitted);
        assert!(matches!(
            session.answer(Answer::Neutral),
            Err(QuestionnaireError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn empty_catalog_cannot_start() {
        let mut session = QuestionnaireSession::new(Vec::new());
        assert_eq!(session.start(), Err(QuestionnaireError::NoQuestions));
        assert!(matches!(
            session.submit(),
            Err(QuestionnaireError::InvalidTransition {
                state: SessionState::Onboarding,
                ..
            })
        ));
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut session = QuestionnaireSession::new(questions(2));
        session.start().expect("start");
        session.review().expect("review");
        assert_eq!(
            session.go_to(2),
            Err(QuestionnaireError::OutOfRange { index: 2, total: 2 })
        );
    }
}
