mod fonts;
pub mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::app::QuizApp;
use layout::{side_panel, top_panel};

pub use fonts::install_cjk_fonts;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);
        side_panel(self, ctx);

        // Dispatch by phase to the view functions
        if self.session.category_complete {
            views::complete::ui_category_complete(self, ctx);
        } else {
            views::quiz::ui_quiz(self, ctx);
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}
