use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The game is "pick the two idioms that match": every question carries
/// exactly this many answers.
pub const ANSWERS_PER_QUESTION: usize = 2;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub idiom: String,
    pub meaning: String,
    pub options: Vec<String>,
    pub answers: Vec<String>,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub name: String,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionBank {
    pub categories: Vec<Category>,
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("the bank has no categories")]
    EmptyBank,
    #[error("category '{0}' has no questions")]
    EmptyCategory(String),
    #[error("duplicate category name '{0}'")]
    DuplicateCategory(String),
    #[error("question '{id}': expected {expected} answers, found {found}")]
    WrongAnswerCount {
        id: String,
        expected: usize,
        found: usize,
    },
    #[error("question '{id}': answer '{answer}' is not one of the options")]
    AnswerNotInOptions { id: String, answer: String },
    #[error("question '{0}' has no options")]
    NoOptions(String),
}

impl Question {
    /// Correct iff the selection, as a set, equals the answer set. Both are
    /// size 2, so mutual containment reduces to one direction plus a
    /// distinctness check on the selection.
    pub fn is_correct(&self, selection: &[String]) -> bool {
        selection.len() == self.answers.len()
            && selection.iter().all(|s| self.answers.contains(s))
            && selection[1..].iter().all(|s| s != &selection[0])
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    fn validate(&self) -> Result<(), BankError> {
        if self.options.is_empty() {
            return Err(BankError::NoOptions(self.id.clone()));
        }
        if self.answers.len() != ANSWERS_PER_QUESTION {
            return Err(BankError::WrongAnswerCount {
                id: self.id.clone(),
                expected: ANSWERS_PER_QUESTION,
                found: self.answers.len(),
            });
        }
        for answer in &self.answers {
            if !self.has_option(answer) {
                return Err(BankError::AnswerNotInOptions {
                    id: self.id.clone(),
                    answer: answer.clone(),
                });
            }
        }
        Ok(())
    }
}

impl QuestionBank {
    /// Checks every invariant the game logic relies on. A bank that fails
    /// here is treated as a load failure by the loader.
    pub fn validate(&self) -> Result<(), BankError> {
        if self.categories.is_empty() {
            return Err(BankError::EmptyBank);
        }
        for (i, cat) in self.categories.iter().enumerate() {
            if cat.questions.is_empty() {
                return Err(BankError::EmptyCategory(cat.name.clone()));
            }
            if self.categories[..i].iter().any(|c| c.name == cat.name) {
                return Err(BankError::DuplicateCategory(cat.name.clone()));
            }
            for q in &cat.questions {
                q.validate()?;
            }
        }
        Ok(())
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn category_position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], answers: &[&str]) -> Question {
        Question {
            id: "1".into(),
            idiom: "一葉知秋".into(),
            meaning: "從小徵兆可以預見未來的發展".into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            answers: answers.iter().map(|s| s.to_string()).collect(),
            explanation: String::new(),
        }
    }

    fn bank_of(q: Question) -> QuestionBank {
        QuestionBank {
            categories: vec![Category {
                name: "預見類".into(),
                questions: vec![q],
            }],
        }
    }

    #[test]
    fn correctness_is_set_equality() {
        let q = question(&["甲", "乙", "丙", "丁"], &["甲", "丙"]);
        assert!(q.is_correct(&["甲".into(), "丙".into()]));
        assert!(q.is_correct(&["丙".into(), "甲".into()]));
        assert!(!q.is_correct(&["甲".into(), "乙".into()]));
        assert!(!q.is_correct(&["甲".into()]));
        // Same option twice is not a valid pair.
        assert!(!q.is_correct(&["甲".into(), "甲".into()]));
    }

    #[test]
    fn validate_rejects_answer_outside_options() {
        let bank = bank_of(question(&["甲", "乙"], &["甲", "丙"]));
        assert!(matches!(
            bank.validate(),
            Err(BankError::AnswerNotInOptions { .. })
        ));
    }

    #[test]
    fn validate_rejects_optionless_question() {
        let mut q = question(&[], &["甲", "乙"]);
        q.id = "9".into();
        let err = bank_of(q).validate().unwrap_err();
        assert!(matches!(err, BankError::NoOptions(_)));
        assert_eq!(err.to_string(), "question '9' has no options");
    }

    #[test]
    fn validate_rejects_wrong_answer_count() {
        let bank = bank_of(question(&["甲", "乙", "丙"], &["甲"]));
        assert!(matches!(
            bank.validate(),
            Err(BankError::WrongAnswerCount { found: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_bank_and_empty_category() {
        let empty = QuestionBank { categories: vec![] };
        assert!(matches!(empty.validate(), Err(BankError::EmptyBank)));

        let hollow = QuestionBank {
            categories: vec![Category {
                name: "預見類".into(),
                questions: vec![],
            }],
        };
        assert!(matches!(
            hollow.validate(),
            Err(BankError::EmptyCategory(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_category_names() {
        let q = question(&["甲", "乙"], &["甲", "乙"]);
        let bank = QuestionBank {
            categories: vec![
                Category {
                    name: "預見類".into(),
                    questions: vec![q.clone()],
                },
                Category {
                    name: "預見類".into(),
                    questions: vec![q],
                },
            ],
        };
        assert!(matches!(
            bank.validate(),
            Err(BankError::DuplicateCategory(_))
        ));
    }
}
