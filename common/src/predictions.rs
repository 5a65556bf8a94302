//! 予想シートパーサー
//!
//! 1行目（空行を除く）がヘッダー、以降の各行がタブ区切りの試合行。
//!
//! ```text
//! Quiniela 1 2 3
//! 1.	Betis - Sevilla	1	X	2
//! 15.	Real Madrid - Girona	2-1
//! ```

use crate::error::{Error, Result};
use crate::grammar;
use crate::rules::ScoringRules;
use crate::types::{Column, Diagnostic, Parsed, PredictionSheet};

/// 予想シートの空行を除去し、各行をトリムして返す
pub(crate) fn content_lines(document: &str) -> Vec<&str> {
    document
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// 予想シートをパース
///
/// # Arguments
/// * `document` - 予想シートの全文
/// * `rules` - 採点ルール（スコア予想の試合番号）
///
/// # Returns
/// * `Ok(Parsed<PredictionSheet>)` - 列・予想と行単位の警告
/// * `Err(Error::EmptyPredictions)` - 空行しかない場合
pub fn parse_predictions(document: &str, rules: &ScoringRules) -> Result<Parsed<PredictionSheet>> {
    let lines = content_lines(document);
    let (header, body) = lines.split_first().ok_or(Error::EmptyPredictions)?;

    let columns: Vec<Column> = grammar::header_columns(header)
        .into_iter()
        .map(Column)
        .collect();
    let column_count = columns.len();

    let mut sheet = PredictionSheet {
        columns,
        ..Default::default()
    };
    let mut diagnostics = Vec::new();

    for line in body {
        let fields: Vec<&str> = line.split('\t').collect();

        // 試合行でなければ黙ってスキップ
        let Some(match_number) = grammar::match_number(fields[0]) else {
            continue;
        };

        if fields.len() < 2 {
            diagnostics.push(Diagnostic::MissingLabel { match_number });
            continue;
        }

        if match_number == rules.exact_score_match {
            // スコア予想は全列共通
            let Some(shared) = fields.get(2) else {
                diagnostics.push(Diagnostic::MissingSharedPrediction { match_number });
                continue;
            };
            sheet
                .predictions
                .insert(match_number, vec![shared.trim().to_string(); column_count]);
            continue;
        }

        let mut row: Vec<String> = fields
            .iter()
            .skip(2)
            .take(column_count)
            .map(|value| value.trim().to_string())
            .collect();
        if row.len() < column_count {
            diagnostics.push(Diagnostic::ShortPredictions {
                match_number,
                found: row.len(),
                expected: column_count,
            });
            row.resize(column_count, String::new());
        }
        sheet.predictions.insert(match_number, row);
    }

    Ok(Parsed::new(sheet, diagnostics))
}
