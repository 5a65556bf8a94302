//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("The predictions document is empty")]
    EmptyPredictions,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
