use super::*;

impl SessionState {
    /// Jumps to the named category. Accepted in any phase; unknown names do
    /// nothing. The question index resets only when it would be out of range
    /// for the new category. The pick, the result flag and the completion
    /// flag are cleared so the new category starts fresh; score and
    /// answered-total deliberately carry over (see DESIGN.md).
    pub fn change_category(&mut self, bank: &QuestionBank, name: &str) -> bool {
        let Some(idx) = bank.category_position(name) else {
            return false;
        };

        self.category_index = idx;
        let len = bank.categories[idx].questions.len();
        if self.question_index >= len {
            self.question_index = 0;
        }
        self.selected.clear();
        self.show_result = false;
        self.category_complete = false;
        true
    }
}

impl QuizApp {
    pub fn select_category(&mut self, name: &str) {
        self.session.change_category(&self.bank, name);
    }
}
