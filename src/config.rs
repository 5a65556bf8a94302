use crate::error::{QuinielaError, Result};
use quiniela_common::{ReportLayout, ScoringRules};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub exact_score_match: u32,
    pub hit_marker: String,
    pub cell_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        let rules = ScoringRules::default();
        let layout = ReportLayout::default();
        Self {
            exact_score_match: rules.exact_score_match,
            hit_marker: layout.hit_marker,
            cell_width: layout.cell_width,
        }
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// - `path` 指定時はそのファイル（存在必須）
    /// - 未指定時は `~/.config/quiniela/config.json`（無ければデフォルト）
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(QuinielaError::FileNotFound(path.display().to_string()));
                }
                Self::from_file(path)
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.layout().validate()?;
        Ok(config)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("quiniela").join("config.json"))
    }

    /// CLI引数で上書き
    pub fn with_exact_score_match(mut self, number: Option<u32>) -> Result<Self> {
        if let Some(number) = number {
            if number == 0 {
                return Err(QuinielaError::Config("試合番号は1以上を指定してください".into()));
            }
            self.exact_score_match = number;
        }
        Ok(self)
    }

    pub fn rules(&self) -> ScoringRules {
        ScoringRules {
            exact_score_match: self.exact_score_match,
        }
    }

    pub fn layout(&self) -> ReportLayout {
        ReportLayout {
            cell_width: self.cell_width,
            hit_marker: self.hit_marker.clone(),
        }
    }
}
