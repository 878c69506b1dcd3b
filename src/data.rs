// src/data.rs
//
// Question bank loading. Three sources, in order of preference: an external
// CSV file (when the user passes one), the YAML bank embedded in the binary,
// and a hardcoded single-question bank as the last resort. Whatever happens,
// the caller always gets a valid bank back.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::model::{BankError, Category, Question, QuestionBank};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read bank file: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad CSV row: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: expected {expected} columns, found {found}")]
    MissingColumns {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column '{column}': {detail}")]
    BadListLiteral {
        row: usize,
        column: &'static str,
        detail: String,
    },
    #[error("embedded bank is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Invalid(#[from] BankError),
}

/// Columns of an external bank file, in order.
const CSV_COLUMNS: usize = 7;
const COL_ID: usize = 0;
const COL_CATEGORY: usize = 1;
const COL_IDIOM: usize = 2;
const COL_MEANING: usize = 3;
const COL_OPTIONS: usize = 4;
const COL_ANSWERS: usize = 5;
const COL_EXPLANATION: usize = 6;

/// Loads the bank the session will play. Never fails: on any error the next
/// source down is substituted and a user-visible warning is returned along
/// with the bank.
pub fn load_bank(path: Option<&Path>) -> (QuestionBank, Option<String>) {
    if let Some(path) = path {
        match read_bank_from_csv(path) {
            Ok(bank) => return (bank, None),
            Err(e) => {
                log::warn!("failed to load bank from {}: {e}", path.display());
                let warning = format!("⚠ 題庫檔案載入失敗（{e}），改用內建題庫。");
                let (bank, _) = embedded_or_fallback();
                return (bank, Some(warning));
            }
        }
    }
    embedded_or_fallback()
}

/// The YAML bank compiled into the binary.
pub fn read_bank_embedded() -> QuestionBank {
    embedded_or_fallback().0
}

/// The embedded bank, or the hardcoded fallback plus a user-visible warning
/// when the shipped YAML is broken.
fn embedded_or_fallback() -> (QuestionBank, Option<String>) {
    recover_embedded(parse_bank_yaml(include_str!("data/idioms.yaml")))
}

fn parse_bank_yaml(file_content: &str) -> Result<QuestionBank, LoadError> {
    let bank: QuestionBank = serde_yaml::from_str(file_content)?;
    bank.validate()?;
    Ok(bank)
}

fn recover_embedded(parsed: Result<QuestionBank, LoadError>) -> (QuestionBank, Option<String>) {
    match parsed {
        Ok(bank) => (bank, None),
        Err(e) => {
            log::error!("embedded bank is unusable: {e}");
            let warning = format!("⚠ 內建題庫無法使用（{e}），改用備用題庫。");
            (fallback_bank(), Some(warning))
        }
    }
}

/// Minimal hardcoded bank: one category, one question. Last-resort fallback
/// so the game always has something to show.
pub fn fallback_bank() -> QuestionBank {
    QuestionBank {
        categories: vec![Category {
            name: "預見類".to_owned(),
            questions: vec![Question {
                id: "1".to_owned(),
                idiom: "一葉知秋".to_owned(),
                meaning: "從小徵兆可以預見未來的發展".to_owned(),
                options: [
                    "月暈而風",
                    "揮霍無度",
                    "無懈可擊",
                    "撥雲見日",
                    "見微知著",
                    "如魚得水",
                ]
                .map(str::to_owned)
                .to_vec(),
                answers: ["月暈而風", "見微知著"].map(str::to_owned).to_vec(),
                explanation: "「月暈而風」預示天氣變化，「見微知著」是從小察覺大事，都有預見未來之意"
                    .to_owned(),
            }],
        }],
    }
}

/// Reads a bank from a CSV file with columns
/// `id, category, idiom, meaning, options, answers, explanation`, where
/// `options` and `answers` hold quoted list literals.
pub fn read_bank_from_csv(path: &Path) -> Result<QuestionBank, LoadError> {
    let file = std::fs::File::open(path)?;
    read_bank_from_reader(file)
}

pub fn read_bank_from_reader<R: Read>(reader: R) -> Result<QuestionBank, LoadError> {
    // Flexible so short rows reach the column check below and get the
    // row/column diagnostic instead of a generic length error.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut categories: Vec<Category> = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 2; // 1-based, after the header line
        let record = result?;
        if record.len() < CSV_COLUMNS {
            return Err(LoadError::MissingColumns {
                row,
                expected: CSV_COLUMNS,
                found: record.len(),
            });
        }

        let field = |col: usize| record.get(col).unwrap_or_default().to_owned();
        let list = |col: usize, name: &'static str| {
            parse_list_literal(record.get(col).unwrap_or_default()).map_err(|detail| {
                LoadError::BadListLiteral {
                    row,
                    column: name,
                    detail,
                }
            })
        };

        let category_name = field(COL_CATEGORY);
        let question = Question {
            id: field(COL_ID),
            idiom: field(COL_IDIOM),
            meaning: field(COL_MEANING),
            options: list(COL_OPTIONS, "options")?,
            answers: list(COL_ANSWERS, "answers")?,
            explanation: field(COL_EXPLANATION),
        };

        // Categories appear in first-seen order; rows keep file order within.
        match categories.iter_mut().find(|c| c.name == category_name) {
            Some(cat) => cat.questions.push(question),
            None => categories.push(Category {
                name: category_name,
                questions: vec![question],
            }),
        }
    }

    let bank = QuestionBank { categories };
    bank.validate()?;
    Ok(bank)
}

/// Parses a bracketed list of quoted strings, e.g. `["甲", "乙"]` or
/// `['甲', '乙']`. This is a plain character walk over the two accepted quote
/// styles; list cells are data and are never evaluated.
pub fn parse_list_literal(raw: &str) -> Result<Vec<String>, String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| format!("'{trimmed}' is not a bracketed list"))?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();
    loop {
        // Skip whitespace and at most one separating comma per item.
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(&c) = chars.peek() else { break };
        let quote = match c {
            '"' | '\'' => {
                chars.next();
                c
            }
            ',' => return Err("empty list item".to_owned()),
            _ => return Err(format!("expected quoted item, found '{c}'")),
        };

        let mut item = String::new();
        loop {
            match chars.next() {
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
                None => return Err("unterminated quoted item".to_owned()),
            }
        }
        if item.is_empty() {
            return Err("empty list item".to_owned());
        }
        items.push(item);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            Some(',') | None => {}
            Some(c) => return Err(format!("expected ',' between items, found '{c}'")),
        }
    }

    if items.is_empty() {
        return Err("list has no items".to_owned());
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GOOD_CSV: &str = "\
id,category,idiom,meaning,options,answers,explanation
1,預見類,一葉知秋,從小徵兆可以預見未來的發展,\"[\"\"月暈而風\"\", \"\"揮霍無度\"\", \"\"無懈可擊\"\", \"\"撥雲見日\"\", \"\"見微知著\"\", \"\"如魚得水\"\"]\",\"[\"\"月暈而風\"\", \"\"見微知著\"\"]\",預示之意
3,勤奮類,孜孜不倦,形容勤奮不懈的學習態度,\"['廢寢忘食', '得過且過', '安步當車', '按部就班', '夜以繼日', '優柔寡斷']\",\"['廢寢忘食', '夜以繼日']\",勤奮之意
2,預見類,未雨綢繆,事先做好準備,\"['曲突徙薪', '臨渴掘井', '亡羊補牢', '防患未然', '守株待兔', '緣木求魚']\",\"['曲突徙薪', '防患未然']\",防備之意
";

    #[test]
    fn list_literal_accepts_both_quote_styles() {
        assert_eq!(
            parse_list_literal(r#"["月暈而風", "見微知著"]"#).unwrap(),
            vec!["月暈而風", "見微知著"]
        );
        assert_eq!(
            parse_list_literal("['甲','乙','丙']").unwrap(),
            vec!["甲", "乙", "丙"]
        );
        assert_eq!(
            parse_list_literal("  [ '甲' , \"乙\" ]  ").unwrap(),
            vec!["甲", "乙"]
        );
    }

    #[test]
    fn list_literal_rejects_garbage() {
        assert!(parse_list_literal("甲, 乙").is_err());
        assert!(parse_list_literal("[]").is_err());
        assert!(parse_list_literal("['甲', 乙]").is_err());
        assert!(parse_list_literal("['甲', '乙]").is_err());
        assert!(parse_list_literal("['甲' '乙']").is_err());
        assert!(parse_list_literal("['甲',, '乙']").is_err());
        assert!(parse_list_literal("['']").is_err());
    }

    #[test]
    fn csv_rows_group_by_first_seen_category() {
        let bank = read_bank_from_reader(GOOD_CSV.as_bytes()).unwrap();
        assert_eq!(bank.category_names(), vec!["預見類", "勤奮類"]);
        // Row order is kept within a category even when rows interleave.
        let ids: Vec<&str> = bank.categories[0]
            .questions
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(bank.categories[0].questions[0].options.len(), 6);
        bank.validate().unwrap();
    }

    #[test]
    fn csv_with_bad_list_literal_is_an_error() {
        let csv = "\
id,category,idiom,meaning,options,answers,explanation
1,預見類,一葉知秋,意思,\"['甲', '乙'\",\"['甲', '乙']\",解釋
";
        assert!(matches!(
            read_bank_from_reader(csv.as_bytes()),
            Err(LoadError::BadListLiteral {
                column: "options",
                ..
            })
        ));
    }

    #[test]
    fn csv_with_short_row_is_an_error() {
        let csv = "\
id,category,idiom,meaning,options,answers,explanation
1,預見類,一葉知秋,意思
";
        assert!(matches!(
            read_bank_from_reader(csv.as_bytes()),
            Err(LoadError::MissingColumns { row: 2, .. })
        ));
    }

    #[test]
    fn csv_violating_bank_invariants_is_an_error() {
        // Answer not among the options.
        let csv = "\
id,category,idiom,meaning,options,answers,explanation
1,預見類,一葉知秋,意思,\"['甲', '乙']\",\"['甲', '丙']\",解釋
";
        assert!(matches!(
            read_bank_from_reader(csv.as_bytes()),
            Err(LoadError::Invalid(BankError::AnswerNotInOptions { .. }))
        ));

        // No rows at all means no categories.
        let empty = "id,category,idiom,meaning,options,answers,explanation\n";
        assert!(matches!(
            read_bank_from_reader(empty.as_bytes()),
            Err(LoadError::Invalid(BankError::EmptyBank))
        ));
    }

    #[test]
    fn load_bank_falls_back_on_missing_file() {
        let (bank, warning) = load_bank(Some(Path::new("/no/such/bank.csv")));
        assert!(warning.is_some());
        bank.validate().unwrap();
        assert!(!bank.categories.is_empty());
    }

    #[test]
    fn load_bank_falls_back_on_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("this is not a bank\nat all".as_bytes())
            .unwrap();
        let (bank, warning) = load_bank(Some(file.path()));
        assert!(warning.is_some());
        // The session stays usable on the embedded bank.
        bank.validate().unwrap();
    }

    #[test]
    fn load_bank_reads_a_well_formed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GOOD_CSV.as_bytes()).unwrap();
        let (bank, warning) = load_bank(Some(file.path()));
        assert!(warning.is_none());
        assert_eq!(bank.categories.len(), 2);
    }

    #[test]
    fn broken_embedded_bank_surfaces_a_warning() {
        // Invalid YAML and a valid-YAML-but-empty bank both recover to the
        // hardcoded fallback with the warning set, not silently.
        for yaml in ["categories: [", "categories: []"] {
            let (bank, warning) = recover_embedded(parse_bank_yaml(yaml));
            assert!(warning.is_some());
            bank.validate().unwrap();
        }
    }

    #[test]
    fn embedded_bank_parses_and_validates() {
        let bank = read_bank_embedded();
        bank.validate().unwrap();
        assert!(!bank.categories.is_empty());
    }

    #[test]
    fn fallback_bank_is_valid() {
        fallback_bank().validate().unwrap();
    }
}
