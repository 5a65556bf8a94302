//! 採点モジュール
//!
//! 予想と結果を試合番号で突き合わせ、列ごとの的中数と的中表を作る。

use crate::grammar::SCORE_SEPARATOR;
use crate::types::{PredictionSheet, ResultSet, ScoreRow, ScoreTable};

/// 比較の種類
///
/// どちらも大文字小文字を無視した完全一致。
/// 区切り文字の有無は値の意味（スコア or 記号）を示すだけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// スコア（例: `2-1`）
    ExactScore,
    /// 結果記号（1 / X / 2 / M）
    Symbol,
}

impl Comparison {
    pub fn for_outcome(actual: &str) -> Self {
        if actual.contains(SCORE_SEPARATOR) {
            Comparison::ExactScore
        } else {
            Comparison::Symbol
        }
    }

    pub fn is_hit(self, predicted: &str, actual: &str) -> bool {
        if predicted.is_empty() || actual.is_empty() {
            return false;
        }
        match self {
            Comparison::ExactScore | Comparison::Symbol => {
                predicted.to_uppercase() == actual.to_uppercase()
            }
        }
    }
}

/// 採点
///
/// 未確定の試合は全列空欄で、的中数に影響しない。
pub fn score(sheet: &PredictionSheet, results: &ResultSet) -> ScoreTable {
    let column_count = sheet.columns.len();
    let mut totals = vec![0u32; column_count];
    let mut rows = Vec::with_capacity(sheet.predictions.len());

    // BTreeMapなので試合番号の昇順
    for (&match_number, predicted) in &sheet.predictions {
        let mut hits = vec![false; column_count];

        if let Some(actual) = results.outcome(match_number).decided() {
            let comparison = Comparison::for_outcome(actual);
            for (i, value) in predicted.iter().enumerate().take(column_count) {
                if comparison.is_hit(value, actual) {
                    totals[i] += 1;
                    hits[i] = true;
                }
            }
        }

        rows.push(ScoreRow { match_number, hits });
    }

    ScoreTable {
        columns: sheet.columns.clone(),
        totals,
        rows,
    }
}
