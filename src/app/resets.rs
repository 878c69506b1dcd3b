use super::*;

impl SessionState {
    /// Back to the very start: first category, first question, empty pick,
    /// zero score. Accepted in every phase.
    pub fn reset(&mut self) {
        *self = SessionState::default();
    }
}

impl QuizApp {
    pub fn reset_game(&mut self) {
        self.session.reset();
        self.confirm_reset = false;
        self.message.clear();
    }

    /// Modal shown before a restart wipes the score.
    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("重新開始")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("確定要重新開始嗎？目前的得分將會歸零！");
                ui.horizontal(|ui| {
                    if ui.button("確定").clicked() {
                        self.reset_game();
                    }
                    if ui.button("取消").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
