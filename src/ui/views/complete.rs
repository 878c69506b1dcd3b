use egui::{Button, Color32, Context, RichText};

use crate::QuizApp;
use crate::ui::layout::centered_panel;

/// Terminal screen after the last question of a category. Restart is offered
/// right here; the side panel stays live, so picking another category is the
/// other way out.
pub fn ui_category_complete(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("🎉 本類別完成！").color(Color32::LIGHT_GREEN));
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!(
                    "總得分：{}/{}",
                    app.session.score, app.session.total_answered
                ))
                .size(20.0),
            );
            ui.add_space(20.0);

            if ui
                .add(Button::new("🔄 重新開始").min_size([180.0, 40.0].into()))
                .clicked()
            {
                app.reset_game();
            }
            ui.add_space(8.0);
            ui.label("也可以在左側選擇其他類別繼續作答");
        });
    });
}
