//! 採点パイプライン
//!
//! 予想シート → 結果フィード → 採点 → レポート

use crate::config::Config;
use crate::error::Result;
use crate::input::read_document;
use quiniela_common::{
    parse_predictions, parse_results, render_report, score, Diagnostic, ResultLayout, ScoreTable,
};
use std::path::Path;
use tracing::debug;

/// 採点結果
#[derive(Debug, Clone)]
pub struct Scorecard {
    pub table: ScoreTable,
    pub layout: ResultLayout,
    /// レポート本文（標準出力用）
    pub report: String,
    /// 行単位の警告（発生順）
    pub diagnostics: Vec<Diagnostic>,
}

/// 2つのファイルを読み込んで採点する
pub fn score_files(predictions_path: &Path, results_path: &Path, config: &Config) -> Result<Scorecard> {
    let predictions_doc = read_document(predictions_path)?;
    let results_doc = read_document(results_path)?;
    Ok(score_documents(&predictions_doc, &results_doc, config)?)
}

/// 文字列から採点する
pub fn score_documents(
    predictions_doc: &str,
    results_doc: &str,
    config: &Config,
) -> quiniela_common::Result<Scorecard> {
    let rules = config.rules();

    let predictions = parse_predictions(predictions_doc, &rules)?;
    debug!(
        "予想シート: {}列, {}試合",
        predictions.value.columns.len(),
        predictions.value.predictions.len()
    );

    let results = parse_results(results_doc, &rules);
    debug!(
        "結果フィード: {:?}, {}試合",
        results.value.layout,
        results.value.results.len()
    );

    let table = score(&predictions.value, &results.value.results);
    let report = render_report(&table, predictions_doc, &config.layout());

    let mut diagnostics = predictions.diagnostics;
    diagnostics.extend(results.diagnostics);

    Ok(Scorecard {
        table,
        layout: results.value.layout,
        report,
        diagnostics,
    })
}
