use super::*;
use crate::model::{ANSWERS_PER_QUESTION, Question};

impl SessionState {
    /// Both indices are forced back in range before any action looks at the
    /// bank. Centralised here so no action can observe out-of-range state.
    pub(crate) fn clamp_to(&mut self, bank: &QuestionBank) {
        if self.category_index >= bank.categories.len() {
            self.category_index = 0;
        }
        let len = bank
            .categories
            .get(self.category_index)
            .map_or(0, |c| c.questions.len());
        if self.question_index >= len {
            self.question_index = 0;
        }
    }

    pub(crate) fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        bank.categories
            .get(self.category_index)?
            .questions
            .get(self.question_index)
    }

    /// Picks or unpicks an option of the current question. Unpicking is
    /// always allowed while the result is hidden; picking stops silently at
    /// two. Returns whether the selection changed.
    pub fn toggle_option(&mut self, bank: &QuestionBank, option: &str) -> bool {
        self.clamp_to(bank);
        if self.show_result || self.category_complete {
            return false;
        }
        let Some(question) = self.current_question(bank) else {
            return false;
        };
        if !question.has_option(option) {
            return false;
        }

        if let Some(pos) = self.selected.iter().position(|s| s == option) {
            self.selected.remove(pos);
            true
        } else if self.selected.len() < ANSWERS_PER_QUESTION {
            self.selected.push(option.to_owned());
            true
        } else {
            false
        }
    }

    /// Locks in the current pair and reveals the result. Accepted only with
    /// exactly two options picked and the result still hidden; returns the
    /// correctness verdict, or `None` when rejected. A second confirm before
    /// [`Self::advance`] is rejected.
    pub fn confirm(&mut self, bank: &QuestionBank) -> Option<bool> {
        self.clamp_to(bank);
        if self.show_result
            || self.category_complete
            || self.selected.len() != ANSWERS_PER_QUESTION
        {
            return None;
        }
        let question = self.current_question(bank)?;

        let correct = question.is_correct(&self.selected);
        if correct {
            self.score += 1;
        }
        self.total_answered += 1;
        self.show_result = true;
        Some(correct)
    }

    /// Moves past a revealed result: clears the pick and the result flag,
    /// then either steps to the next question or, at the last question of
    /// the category, enters the terminal completed state with the index left
    /// in place. Returns whether the action was accepted.
    pub fn advance(&mut self, bank: &QuestionBank) -> bool {
        self.clamp_to(bank);
        if !self.show_result || self.category_complete {
            return false;
        }
        self.selected.clear();
        self.show_result = false;

        let len = bank
            .categories
            .get(self.category_index)
            .map_or(0, |c| c.questions.len());
        if self.question_index + 1 < len {
            self.question_index += 1;
        } else {
            self.category_complete = true;
        }
        true
    }

    pub fn phase(&self) -> Phase {
        if self.category_complete {
            Phase::CategoryComplete
        } else if self.show_result {
            Phase::ResultShown
        } else if self.selected.len() == ANSWERS_PER_QUESTION {
            Phase::ReadyToConfirm
        } else {
            Phase::Selecting
        }
    }
}

impl QuizApp {
    pub fn toggle_option(&mut self, option: &str) {
        self.session.toggle_option(&self.bank, option);
    }

    pub fn confirm_answer(&mut self) {
        self.session.confirm(&self.bank);
    }

    pub fn next_question(&mut self) {
        self.session.advance(&self.bank);
    }
}
