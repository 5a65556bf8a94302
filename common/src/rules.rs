//! 採点ルール・レポートレイアウト

use crate::error::{Error, Result};
use crate::types::MatchNumber;
use serde::{Deserialize, Serialize};

/// スコア予想を行う試合番号（デフォルト: 15）
pub const DEFAULT_EXACT_SCORE_MATCH: MatchNumber = 15;

/// 採点ルール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringRules {
    /// この試合だけは記号ではなくスコアを予想する
    pub exact_score_match: MatchNumber,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            exact_score_match: DEFAULT_EXACT_SCORE_MATCH,
        }
    }
}

/// レポートのレイアウト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportLayout {
    /// 列セルの固定幅
    pub cell_width: usize,
    /// 的中セルの表示
    pub hit_marker: String,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            cell_width: 3,
            hit_marker: "x".into(),
        }
    }
}

impl ReportLayout {
    pub fn validate(&self) -> Result<()> {
        if self.cell_width == 0 {
            return Err(Error::Config("cell width must be at least 1".into()));
        }
        if self.hit_marker.trim().is_empty() {
            return Err(Error::Config("hit marker must not be blank".into()));
        }
        Ok(())
    }
}
