//! 試合結果パーサー
//!
//! 2種類のレイアウトを先頭行から自動判定する。
//!
//! ## 2行形式（PairedLine）
//! ```text
//! 1. Betis - Sevilla
//! X
//! 2. Valencia - Getafe
//! 21:00
//! ```
//!
//! ## 1行形式（SingleLine）
//! ```text
//! Resultados jornada 12
//! 1.	Barcelona - Young Boys	5 - 0	1
//! ```
//! 1行形式は仕様が固まっていないため、ベストエフォートで処理する。

use crate::grammar;
use crate::predictions::content_lines;
use crate::rules::ScoringRules;
use crate::types::{Diagnostic, MatchOutcome, Parsed, ResultSet};

/// 結果ファイルのレイアウト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLayout {
    /// 試合行と結果行が交互に並ぶ
    PairedLine,
    /// 1行に試合・スコア・記号
    SingleLine,
}

/// レイアウト判定
///
/// 空行以外が2行以上あり、先頭行が試合トークンで始まれば2行形式
pub fn detect_layout(lines: &[&str]) -> ResultLayout {
    match lines {
        [first, _, ..] if grammar::is_match_line(first) => ResultLayout::PairedLine,
        _ => ResultLayout::SingleLine,
    }
}

/// 結果パース出力
#[derive(Debug, Clone)]
pub struct ParsedResults {
    pub layout: ResultLayout,
    pub results: ResultSet,
}

/// 結果ファイルをパース
///
/// 行単位の不備は診断として返し、処理は継続する。
pub fn parse_results(document: &str, rules: &ScoringRules) -> Parsed<ParsedResults> {
    let lines = content_lines(document);
    let layout = detect_layout(&lines);
    let mut diagnostics = Vec::new();

    let results = match layout {
        ResultLayout::PairedLine => parse_paired(&lines, &mut diagnostics),
        ResultLayout::SingleLine => {
            diagnostics.push(Diagnostic::UnrecognizedResultLayout);
            parse_single(&lines, rules, &mut diagnostics)
        }
    };

    Parsed::new(ParsedResults { layout, results }, diagnostics)
}

fn parse_paired(lines: &[&str], diagnostics: &mut Vec<Diagnostic>) -> ResultSet {
    let mut results = ResultSet::default();
    let mut i = 0;

    while i < lines.len() {
        let Some(match_number) = grammar::match_number(lines[i]) else {
            diagnostics.push(Diagnostic::SkippedResultLine { line: lines[i].to_string() });
            i += 1;
            continue;
        };

        match lines.get(i + 1) {
            // 結果行が抜けていて次の試合行が続く場合
            Some(next) if grammar::is_description_line(next) => {
                results.insert(match_number, MatchOutcome::Undetermined);
                i += 1;
            }
            Some(result) => {
                let outcome = if grammar::is_recorded_outcome(result) {
                    MatchOutcome::Decided(result.to_string())
                } else {
                    // 未実施（日時などが書かれている）
                    MatchOutcome::Undetermined
                };
                results.insert(match_number, outcome);
                i += 2;
            }
            None => {
                results.insert(match_number, MatchOutcome::Undetermined);
                i += 1;
            }
        }
    }

    results
}

fn parse_single(
    lines: &[&str],
    rules: &ScoringRules,
    diagnostics: &mut Vec<Diagnostic>,
) -> ResultSet {
    let mut results = ResultSet::default();

    // 先頭行はヘッダー
    for line in lines.iter().skip(1) {
        let Some(parsed) = grammar::single_line_result(line) else {
            diagnostics.push(Diagnostic::SkippedResultLine { line: line.to_string() });
            continue;
        };

        let value = if parsed.match_number == rules.exact_score_match {
            parsed.score
        } else {
            parsed.symbol
        };
        results.insert(parsed.match_number, MatchOutcome::Decided(value));
    }

    results
}
