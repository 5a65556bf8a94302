use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quiniela")]
#[command(about = "キニエラ予想シートを試合結果で採点", long_about = None)]
pub struct Cli {
    /// 予想シート（タブ区切りテキスト）
    pub predictions: PathBuf,

    /// 試合結果ファイル（2行形式 / 1行形式を自動判定）
    pub results: PathBuf,

    /// スコア予想の試合番号（設定ファイルより優先）
    #[arg(long)]
    pub exact_score_match: Option<u32>,

    /// 設定ファイル（デフォルト: ~/.config/quiniela/config.json）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
