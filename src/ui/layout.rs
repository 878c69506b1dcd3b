use egui::{Button, CentralPanel, Context, Frame, RichText, SidePanel, TopBottomPanel, Ui};

use crate::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("成語配對遊戲");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 重新開始遊戲").clicked() {
                    app.confirm_reset = true;
                }
            });
        });
    });
}

/// Category selector plus the score/progress readout.
pub fn side_panel(app: &mut QuizApp, ctx: &Context) {
    SidePanel::left("category_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("選擇類別");
            ui.add_space(4.0);

            let current = app.current_category().name.clone();
            let names: Vec<String> = app
                .bank
                .category_names()
                .iter()
                .map(|s| s.to_string())
                .collect();
            egui::ComboBox::from_id_salt("category_select")
                .selected_text(&current)
                .width(150.0)
                .show_ui(ui, |ui| {
                    for name in &names {
                        if ui.selectable_label(*name == current, name.as_str()).clicked() {
                            app.select_category(name);
                        }
                    }
                });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            let (current_q, total_q) = app.progress_in_category();
            ui.label(format!(
                "當前得分：{}/{}",
                app.session.score, app.session.total_answered
            ));
            ui.label(format!("當前進度：{current_q}/{total_q}"));

            if !app.message.is_empty() {
                ui.add_space(12.0);
                ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
            }
        });
}

/// Panel centered vertically, with a maximum content width and an inner
/// content block.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Button width for a two-column option grid inside `ui`.
pub fn two_column_grid_width(ui: &Ui) -> f32 {
    ((ui.available_width() - 16.0) / 2.0).clamp(120.0, 300.0)
}

/// Full-width button with the selection fill applied when `selected`.
pub fn option_button(ui: &mut Ui, label: &str, width: f32, selected: bool, enabled: bool) -> bool {
    let mut button = Button::new(RichText::new(label).size(16.0)).min_size([width, 36.0].into());
    if selected {
        button = button.fill(ui.visuals().selection.bg_fill);
    }
    ui.add_enabled(enabled, button).clicked()
}
