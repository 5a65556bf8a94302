//! Quiniela Common Library
//!
//! 予想シート・結果フィードのパース、採点、レポート生成。
//! ファイルI/OやCLIは持たず、文字列を受け取って値を返す。

pub mod error;
pub mod grammar;
pub mod predictions;
pub mod report;
pub mod results;
pub mod rules;
pub mod scoring;
pub mod types;

pub use error::{Error, Result};
pub use predictions::parse_predictions;
pub use report::{collect_labels, render_report};
pub use results::{detect_layout, parse_results, ParsedResults, ResultLayout};
pub use rules::{ReportLayout, ScoringRules};
pub use scoring::{score, Comparison};
pub use types::{
    Column, Diagnostic, MatchNumber, MatchOutcome, Parsed, PredictionSheet, ResultSet, ScoreRow,
    ScoreTable, Severity,
};
