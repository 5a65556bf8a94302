//! 採点データの型定義
//!
//! パーサー・採点・レポートで共有される型:
//! - PredictionSheet: 予想シート（列と試合ごとの予想）
//! - ResultSet: 試合結果（確定 / 未確定）
//! - ScoreTable: 採点結果（列ごとの的中数と試合ごとの的中表）
//! - Diagnostic: 行単位の警告（処理は継続）

use std::collections::BTreeMap;
use std::fmt;

/// 試合番号
pub type MatchNumber = u32;

/// 予想シートの列（ヘッダーの数字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column(pub String);

impl Column {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 予想シート
///
/// `predictions` の各行の長さは常に `columns.len()` と一致する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionSheet {
    pub columns: Vec<Column>,
    pub predictions: BTreeMap<MatchNumber, Vec<String>>,
}

impl PredictionSheet {
    /// 試合の予想（列順）
    pub fn row(&self, number: MatchNumber) -> Option<&[String]> {
        self.predictions.get(&number).map(Vec::as_slice)
    }
}

/// 試合結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// 結果確定（記号 or スコア）
    Decided(String),
    /// 未実施・結果不明
    Undetermined,
}

impl MatchOutcome {
    pub fn decided(&self) -> Option<&str> {
        match self {
            MatchOutcome::Decided(value) => Some(value.as_str()),
            MatchOutcome::Undetermined => None,
        }
    }
}

static UNDETERMINED: MatchOutcome = MatchOutcome::Undetermined;

/// 試合番号 → 結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    outcomes: BTreeMap<MatchNumber, MatchOutcome>,
}

impl ResultSet {
    pub fn insert(&mut self, number: MatchNumber, outcome: MatchOutcome) {
        self.outcomes.insert(number, outcome);
    }

    /// 結果フィードにない試合は未確定扱い
    pub fn outcome(&self, number: MatchNumber) -> &MatchOutcome {
        self.outcomes.get(&number).unwrap_or(&UNDETERMINED)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// 採点表の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub match_number: MatchNumber,
    /// 列ごとの的中フラグ（列順）
    pub hits: Vec<bool>,
}

/// 採点結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    pub columns: Vec<Column>,
    /// 列ごとの的中数（列順）
    pub totals: Vec<u32>,
    /// 試合番号の昇順
    pub rows: Vec<ScoreRow>,
}

/// 診断の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Note,
}

/// 行単位の診断メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingLabel { match_number: MatchNumber },
    MissingSharedPrediction { match_number: MatchNumber },
    ShortPredictions { match_number: MatchNumber, found: usize, expected: usize },
    UnrecognizedResultLayout,
    SkippedResultLine { line: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::SkippedResultLine { .. } => Severity::Note,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingLabel { match_number } => {
                write!(f, "Match {} lacks team information.", match_number)
            }
            Diagnostic::MissingSharedPrediction { match_number } => {
                write!(f, "Match {} lacks a prediction.", match_number)
            }
            Diagnostic::ShortPredictions { match_number, found, expected } => write!(
                f,
                "Match {} has {} predictions, expected {}.",
                match_number, found, expected
            ),
            Diagnostic::UnrecognizedResultLayout => write!(
                f,
                "The results format is not fully recognized. Attempting to process available data."
            ),
            Diagnostic::SkippedResultLine { line } => {
                write!(f, "Skipped results line: {}", line)
            }
        }
    }
}

/// パース結果と診断のペア
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }
}
