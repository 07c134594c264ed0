use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::engine::question::{Question, next_question};
use crate::feedback::FeedbackCue;

/// Where the current round stands. Replaced wholesale, never mutated in
/// place: a fresh question always starts from `Unanswered`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Answered { selected: String },
}

/// One category's practice loop. Owns the resolved item sequences, the
/// current question and answer state, its own rng, and the feedback handle.
/// The loop is unbounded: there is no score and no terminal state.
pub struct QuizSession {
    native_items: Vec<String>,
    target_items: Vec<String>,
    question: Option<Question>,
    answer: AnswerState,
    rng: SmallRng,
    feedback: Box<dyn FeedbackCue>,
}

impl QuizSession {
    pub fn new(
        native_items: Vec<String>,
        target_items: Vec<String>,
        feedback: Box<dyn FeedbackCue>,
    ) -> Self {
        Self::with_rng(native_items, target_items, feedback, SmallRng::from_entropy())
    }

    pub fn with_rng(
        native_items: Vec<String>,
        target_items: Vec<String>,
        feedback: Box<dyn FeedbackCue>,
        rng: SmallRng,
    ) -> Self {
        let mut session = Self {
            native_items,
            target_items,
            question: None,
            answer: AnswerState::Unanswered,
            rng,
            feedback,
        };
        session.next_round();
        session
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn answer(&self) -> &AnswerState {
        &self.answer
    }

    /// False when the category resolved to no items for either language;
    /// the screen shows an explicit empty state instead of a board.
    pub fn has_content(&self) -> bool {
        !self.native_items.is_empty() && !self.target_items.is_empty()
    }

    /// Apply a tap on option `choice`. Before the reveal this records the
    /// pick and fires the success cue on a correct answer; after the reveal
    /// any tap advances to a fresh round, whichever option it lands on.
    pub fn select(&mut self, choice: usize) {
        let Some(question) = self.question.as_ref() else {
            return;
        };
        match self.answer {
            AnswerState::Unanswered => {
                let Some(option) = question.options.get(choice) else {
                    return;
                };
                let selected = option.clone();
                if selected == question.correct {
                    self.feedback.play_success_cue();
                }
                self.answer = AnswerState::Answered { selected };
            }
            AnswerState::Answered { .. } => self.next_round(),
        }
    }

    fn next_round(&mut self) {
        self.question = next_question(&self.native_items, &self.target_items, &mut self.rng);
        self.answer = AnswerState::Unanswered;
    }
}
