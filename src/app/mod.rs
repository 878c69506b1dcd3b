use std::path::Path;

use crate::data::load_bank;
use crate::model::QuestionBank;

pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;

/// Where the session currently stands. Derived from [`SessionState`] fields,
/// never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// 0 or 1 options picked, result hidden.
    Selecting,
    /// Exactly 2 options picked, result hidden.
    ReadyToConfirm,
    /// Answer confirmed, result visible.
    ResultShown,
    /// Past the last question of the category. Terminal until a restart or a
    /// category change.
    CategoryComplete,
}

/// One player's progress through the bank. Owns no I/O and no UI types; every
/// mutation goes through the action methods in [`actions`], [`navigation`]
/// and [`resets`], which clamp indices against the bank before acting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub category_index: usize,
    pub question_index: usize,
    /// Currently picked options, in pick order. Never more than 2.
    pub selected: Vec<String>,
    /// Correct confirmations, across the whole session.
    pub score: u32,
    pub total_answered: u32,
    pub show_result: bool,
    pub category_complete: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            category_index: 0,
            question_index: 0,
            selected: Vec::new(),
            score: 0,
            total_answered: 0,
            show_result: false,
            category_complete: false,
        }
    }
}

pub struct QuizApp {
    /// Immutable for the lifetime of the app; reloaded only by restarting the
    /// process with a different bank file.
    pub bank: QuestionBank,
    pub session: SessionState,
    /// User-visible notice line (load warnings and the like).
    pub message: String,
    pub confirm_reset: bool,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_source(None)
    }

    /// Builds the app from an optional external bank file. Load failures end
    /// up in `message`, never in a panic.
    pub fn with_source(bank_path: Option<&Path>) -> Self {
        let (bank, warning) = load_bank(bank_path);
        Self {
            bank,
            session: SessionState::default(),
            message: warning.unwrap_or_default(),
            confirm_reset: false,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
