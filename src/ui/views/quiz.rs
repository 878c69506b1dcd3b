use egui::{Button, Color32, Context, RichText};

use crate::QuizApp;
use crate::ui::layout::{centered_panel, option_button, two_column_grid_width};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 520.0, 650.0, |ui| {
        ui.vertical_centered(|ui| {
            let question = app.current_question();
            let idiom = question.idiom.clone();
            let meaning = question.meaning.clone();
            let options = question.options.clone();

            ui.heading(RichText::new(&idiom).size(28.0));
            ui.add_space(4.0);
            ui.label(&meaning);
            ui.add_space(16.0);

            // ----------- 選項區域 -----------
            // Two columns, alternating by index like the original layout.
            let button_width = two_column_grid_width(ui);
            ui.columns(2, |cols| {
                for (i, option) in options.iter().enumerate() {
                    let col = &mut cols[i % 2];
                    let selected = app.is_selected(option);
                    let enabled = app.option_enabled(option);
                    if option_button(col, option, button_width, selected, enabled) {
                        app.toggle_option(option);
                    }
                    col.add_space(6.0);
                }
            });

            ui.add_space(12.0);

            if !app.session.show_result {
                let confirm = ui.add_enabled(
                    app.can_confirm(),
                    Button::new("確認答案").min_size([160.0, 36.0].into()),
                );
                if confirm.clicked() {
                    app.confirm_answer();
                }
            } else {
                result_panel(app, ui);
            }
        });
    });
}

// ----------- 顯示結果 -----------
fn result_panel(app: &mut QuizApp, ui: &mut egui::Ui) {
    let question = app.current_question();
    let correct = question.is_correct(&app.session.selected);
    let answers = question.answers.join("、");
    let explanation = question.explanation.clone();

    if correct {
        ui.label(
            RichText::new("✅ 答對了！")
                .color(Color32::LIGHT_GREEN)
                .heading(),
        );
    } else {
        ui.label(
            RichText::new("❌ 答錯了！")
                .color(Color32::LIGHT_RED)
                .heading(),
        );
        ui.label(format!("正確答案是：{answers}"));
    }

    ui.add_space(8.0);
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.label(&explanation);
        });
    ui.add_space(8.0);

    if ui
        .add(Button::new("下一題").min_size([160.0, 36.0].into()))
        .clicked()
    {
        app.next_question();
    }
}
