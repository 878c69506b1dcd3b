use super::*;
use crate::model::{ANSWERS_PER_QUESTION, Category, Question};

impl QuizApp {
    // Read accessors for the views. The loader guarantees a non-empty,
    // validated bank, so index clamping here cannot underflow.

    pub fn current_category(&self) -> &Category {
        let last = self.bank.categories.len().saturating_sub(1);
        &self.bank.categories[self.session.category_index.min(last)]
    }

    pub fn current_question(&self) -> &Question {
        let cat = self.current_category();
        let last = cat.questions.len().saturating_sub(1);
        &cat.questions[self.session.question_index.min(last)]
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.session.selected.iter().any(|s| s == option)
    }

    /// Whether clicking `option` would do anything right now. Drives the
    /// enabled state of the option buttons.
    pub fn option_enabled(&self, option: &str) -> bool {
        !self.session.show_result
            && !self.session.category_complete
            && (self.is_selected(option) || self.session.selected.len() < ANSWERS_PER_QUESTION)
    }

    pub fn can_confirm(&self) -> bool {
        self.session.phase() == Phase::ReadyToConfirm
    }

    /// `(current 1-based, total)` within the current category.
    pub fn progress_in_category(&self) -> (usize, usize) {
        let cat = self.current_category();
        let last = cat.questions.len().saturating_sub(1);
        (
            self.session.question_index.min(last) + 1,
            cat.questions.len(),
        )
    }
}
