//! 行パターン定義
//!
//! - ヘッダー行: 数字の連続をそれぞれ1列とする
//! - 試合行の先頭トークン: `P-` 接頭辞（任意）+ 数字 + `.`
//! - 結果記号: `1` `X` `2` `M` `-` の組み合わせ

use crate::types::MatchNumber;
use regex::Regex;

/// スコア区切り文字
pub const SCORE_SEPARATOR: char = '-';

lazy_static::lazy_static! {
    static ref DIGIT_RUN_RE: Regex = Regex::new(r"\d+").unwrap();
    static ref MATCH_TOKEN_RE: Regex = Regex::new(r"^(?:P-)?(\d+)\.").unwrap();
    // "12.00 h" のような時刻は除外
    static ref DESCRIPTION_RE: Regex = Regex::new(r"^(?:P-)?\d+\.(?:\s*$|\s+\D)").unwrap();
    static ref OUTCOME_RE: Regex = Regex::new(r"(?i)^[1X2M\-]+$").unwrap();
    // 例: "1.	Barcelona - Young Boys	5 - 0	1"
    static ref SINGLE_LINE_RE: Regex = Regex::new(
        r"^(?:P-)?(\d+)\.\s+[^\t]+\t+(\d[\d\s:\-]*?)\s*\t+((?i:[1X2M\-]+))"
    ).unwrap();
}

/// ヘッダー行から列IDを抽出（左から順に）
pub fn header_columns(header: &str) -> Vec<String> {
    DIGIT_RUN_RE
        .find_iter(header)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 先頭トークンから試合番号を取得
///
/// パターンに一致しない、または数値が大きすぎる場合は `None`
pub fn match_number(token: &str) -> Option<MatchNumber> {
    MATCH_TOKEN_RE
        .captures(token)
        .and_then(|caps| caps[1].parse().ok())
}

/// 試合行の先頭トークンを持つか
pub fn is_match_line(line: &str) -> bool {
    match_number(line).is_some()
}

/// 試合説明行か（試合トークンの後に空白 + 数字以外が続く）
pub fn is_description_line(line: &str) -> bool {
    DESCRIPTION_RE.is_match(line)
}

/// 結果として記録できる値か（記号列 or スコア）
pub fn is_recorded_outcome(text: &str) -> bool {
    OUTCOME_RE.is_match(text) || text.contains(SCORE_SEPARATOR)
}

/// 1行形式の結果行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleLineResult {
    pub match_number: MatchNumber,
    /// 空白を除去したスコア（例: `2-1`）
    pub score: String,
    pub symbol: String,
}

/// 1行形式の結果行をパース
pub fn single_line_result(line: &str) -> Option<SingleLineResult> {
    let caps = SINGLE_LINE_RE.captures(line)?;
    let match_number = caps[1].parse().ok()?;
    let score = caps[2].chars().filter(|c| !c.is_whitespace()).collect();
    Some(SingleLineResult {
        match_number,
        score,
        symbol: caps[3].to_string(),
    })
}
