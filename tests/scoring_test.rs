//! 採点パイプラインの統合テスト
//!
//! 一時ファイルに予想シートと結果を書き出し、ファイル読み込みからレポートまでを検証

use quiniela::config::Config;
use quiniela::pipeline::{score_documents, score_files};
use quiniela_common::{Diagnostic, ResultLayout};
use std::path::PathBuf;
use std::process::Command;
use tempfile::{tempdir, TempDir};

const SHEET: &str = "Quiniela 1 2 3\n\
                     1.\tTeamA - TeamB\t1\tX\t1\n\
                     2.\tBetis - Sevilla\tX\tx\t2\n\
                     7.\tValencia - Getafe\t2\t2\t2\n\
                     15.\tTeamC - TeamD\t2-1\n";

fn write_inputs(dir: &TempDir, sheet: &str, results: &str) -> (PathBuf, PathBuf) {
    let predictions = dir.path().join("input.txt");
    let results_path = dir.path().join("result.txt");
    std::fs::write(&predictions, sheet).expect("予想シート書き込み失敗");
    std::fs::write(&results_path, results).expect("結果ファイル書き込み失敗");
    (predictions, results_path)
}

fn hits_for(card: &quiniela::pipeline::Scorecard, match_number: u32) -> Vec<bool> {
    card.table
        .rows
        .iter()
        .find(|row| row.match_number == match_number)
        .map(|row| row.hits.clone())
        .expect("試合が採点表にない")
}

/// 通常の試合: 予想が結果と一致した列だけ的中
#[test]
fn test_ordinary_match_hits() {
    let card = score_documents(
        "Quiniela 1 2 3\n1.\tTeamA - TeamB\t1\tX\t1\n",
        "1. TeamA - TeamB\n1\n",
        &Config::default(),
    )
    .unwrap();

    assert_eq!(card.layout, ResultLayout::PairedLine);
    assert_eq!(hits_for(&card, 1), vec![true, false, true]);
    assert_eq!(card.table.totals, vec![1, 0, 1]);
    assert!(card.report.starts_with("Bet 1: 1 hits\nBet 2: 0 hits\nBet 3: 1 hits\n\n"));
}

/// スコア予想: 全列共通の予想がスコアと一致
#[test]
fn test_exact_score_match_all_columns() {
    let card = score_documents(SHEET, "15. TeamC - TeamD\n2-1\n", &Config::default()).unwrap();
    assert_eq!(hits_for(&card, 15), vec![true, true, true]);
    assert_eq!(card.table.totals, vec![1, 1, 1]);
}

/// 大文字小文字を区別しない
#[test]
fn test_case_insensitive_comparison() {
    let card = score_documents(SHEET, "2. Betis - Sevilla\nX\n", &Config::default()).unwrap();
    assert_eq!(hits_for(&card, 2), vec![true, true, false]);
}

/// 結果行が欠けた最終試合は未確定（空欄）
#[test]
fn test_missing_result_line_is_undetermined() {
    let results = "1. TeamA - TeamB\n1\n2. Betis - Sevilla\n2\n7. Valencia - Getafe\n";
    let card = score_documents(SHEET, results, &Config::default()).unwrap();

    assert_eq!(hits_for(&card, 7), vec![false, false, false]);
    let row = card.report.lines().find(|l| l.starts_with("7 ")).unwrap();
    assert!(!row.contains('x'));
}

/// 結果フィードにない試合は的中数に影響しない
#[test]
fn test_absent_matches_blank() {
    let card = score_documents(SHEET, "1. TeamA - TeamB\n2\n", &Config::default()).unwrap();

    assert_eq!(card.table.totals, vec![0, 0, 0]);
    assert!(card.table.rows.iter().all(|row| row.hits.iter().all(|hit| !hit)));
    assert_eq!(card.table.rows.len(), 4);
}

/// 1行形式の結果フィード
#[test]
fn test_single_line_results() {
    let results = "Resultados jornada 12\n\
                   1.\tTeamA - TeamB\t3 - 1\t1\n\
                   7.\tValencia - Getafe\tDom 21:00\n\
                   15.\tTeamC - TeamD\t2 - 1\t1\n";
    let card = score_documents(SHEET, results, &Config::default()).unwrap();

    assert_eq!(card.layout, ResultLayout::SingleLine);
    assert!(card.diagnostics.contains(&Diagnostic::UnrecognizedResultLayout));
    assert_eq!(hits_for(&card, 1), vec![true, false, true]);
    assert_eq!(hits_for(&card, 7), vec![false, false, false]);
    assert_eq!(hits_for(&card, 15), vec![true, true, true]);
}

/// 行単位の警告は処理を止めない
#[test]
fn test_warnings_do_not_abort() {
    let sheet = "Quiniela 1 2\n1.\n2.\tA - B\t1\n15.\tC - D\n";
    let card = score_documents(sheet, "2. A - B\n1\n", &Config::default()).unwrap();

    assert_eq!(
        card.diagnostics,
        vec![
            Diagnostic::MissingLabel { match_number: 1 },
            Diagnostic::ShortPredictions { match_number: 2, found: 1, expected: 2 },
            Diagnostic::MissingSharedPrediction { match_number: 15 },
        ]
    );
    assert_eq!(card.table.totals, vec![1, 0]);
}

/// 設定でスコア予想の試合番号を変更
#[test]
fn test_configured_exact_score_match() {
    let config = Config::default().with_exact_score_match(Some(14)).unwrap();
    let sheet = "Quiniela 1 2\n14.\tA - B\t1-0\n";
    let card = score_documents(sheet, "14. A - B\n1-0\n", &config).unwrap();
    assert_eq!(card.table.totals, vec![1, 1]);
}

/// ファイル経由の採点
#[test]
fn test_score_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (predictions, results) = write_inputs(&dir, SHEET, "1. TeamA - TeamB\n1\n");

    let card = score_files(&predictions, &results, &Config::default()).unwrap();
    assert_eq!(card.table.totals, vec![1, 0, 1]);
    assert!(card.report.contains("TeamA - TeamB"));
}

/// 同じ入力なら同じレポート
#[test]
fn test_report_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (predictions, results) = write_inputs(&dir, SHEET, "1. TeamA - TeamB\n1\n2. Betis - Sevilla\nX\n");

    let first = score_files(&predictions, &results, &Config::default()).unwrap();
    let second = score_files(&predictions, &results, &Config::default()).unwrap();
    assert_eq!(first.report, second.report);
}

// =============================================
// バイナリ実行
// =============================================

fn quiniela() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quiniela"))
}

#[test]
fn test_binary_prints_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (predictions, results) = write_inputs(&dir, SHEET, "1. TeamA - TeamB\n1\n");

    let output = quiniela().arg(&predictions).arg(&results).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Bet 1: 1 hits\n"));
    assert!(stdout.contains("No."));
}

#[test]
fn test_binary_output_is_byte_identical() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (predictions, results) = write_inputs(&dir, SHEET, "1. TeamA - TeamB\n1\n15. TeamC - TeamD\n2-1\n");

    let first = quiniela().arg(&predictions).arg(&results).output().unwrap();
    let second = quiniela().arg(&predictions).arg(&results).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_binary_wrong_argument_count() {
    let output = quiniela().arg("only-one.txt").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_binary_empty_predictions() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (predictions, results) = write_inputs(&dir, "\n\n  \n", "1. A - B\n1\n");

    let output = quiniela().arg(&predictions).arg(&results).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (predictions, _) = write_inputs(&dir, SHEET, "");

    let output = quiniela()
        .arg(&predictions)
        .arg(dir.path().join("missing.txt"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
