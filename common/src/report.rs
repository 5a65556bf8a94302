//! 採点レポート生成
//!
//! 出力例:
//! ```text
//! Bet 1: 1 hits
//! Bet 2: 0 hits
//!
//! No. Teams            1   2
//! --------------------------
//! 1   Betis - Sevilla  x
//! ```

use crate::grammar;
use crate::predictions::content_lines;
use crate::rules::ReportLayout;
use crate::types::{MatchNumber, ScoreTable};
use std::collections::BTreeMap;
use std::fmt::Write;

/// チーム名が無い試合の表示
pub const UNKNOWN_TEAMS: &str = "Unknown Teams";

const NUMBER_HEADER: &str = "No.";
const LABEL_HEADER: &str = "Teams";

/// 予想シートから試合番号 → チーム名を取得
///
/// 予想が無効でスキップされた試合も含む。
pub fn collect_labels(document: &str) -> BTreeMap<MatchNumber, String> {
    let mut labels = BTreeMap::new();

    for line in content_lines(document).into_iter().skip(1) {
        let mut fields = line.split('\t');
        let Some(match_number) = fields.next().and_then(grammar::match_number) else {
            continue;
        };
        let label = fields
            .next()
            .map(|teams| teams.trim().to_string())
            .unwrap_or_else(|| UNKNOWN_TEAMS.to_string());
        labels.insert(match_number, label);
    }

    labels
}

/// レポート文字列を生成
///
/// # Arguments
/// * `table` - 採点結果
/// * `document` - 予想シートの全文（チーム名の取得用）
/// * `layout` - セル幅・的中マーク
pub fn render_report(table: &ScoreTable, document: &str, layout: &ReportLayout) -> String {
    let labels = collect_labels(document);
    let mut out = String::new();

    for (column, total) in table.columns.iter().zip(&table.totals) {
        let _ = writeln!(out, "Bet {}: {} hits", column, total);
    }
    out.push('\n');

    let number_width = labels
        .keys()
        .map(|n| n.to_string().chars().count())
        .max()
        .unwrap_or(0)
        + 1;
    let label_width = labels
        .values()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    let cell_width = layout.cell_width;

    let column_cells: Vec<String> = table
        .columns
        .iter()
        .map(|column| format!("{:<cell_width$}", column.as_str()))
        .collect();
    let header = format!(
        "{:<number_width$} {:<label_width$} {}",
        NUMBER_HEADER,
        LABEL_HEADER,
        column_cells.join(" ")
    );
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(header.chars().count()));

    for row in &table.rows {
        let label = labels
            .get(&row.match_number)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_TEAMS);
        let cells: Vec<String> = row
            .hits
            .iter()
            .map(|&hit| {
                let mark = if hit { layout.hit_marker.as_str() } else { "" };
                format!("{:<cell_width$}", mark)
            })
            .collect();
        let _ = writeln!(
            out,
            "{:<number_width$} {:<label_width$} {}",
            row.match_number,
            label,
            cells.join(" ")
        );
    }

    out
}
