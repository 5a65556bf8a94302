use anyhow::Context;
use clap::Parser;
use quiniela::{cli, config, pipeline};
use quiniela_common::Severity;
use cli::Cli;
use config::Config;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())
        .context("設定の読み込みに失敗しました")?
        .with_exact_score_match(cli.exact_score_match)?;
    debug!("スコア予想の試合番号: {}", config.exact_score_match);

    let scorecard = pipeline::score_files(&cli.predictions, &cli.results, &config)
        .context("採点に失敗しました")?;

    for diagnostic in &scorecard.diagnostics {
        match diagnostic.severity() {
            Severity::Warning => warn!("{}", diagnostic),
            Severity::Note => debug!("{}", diagnostic),
        }
    }

    print!("{}", scorecard.report);
    Ok(())
}

/// ログは標準エラーへ（標準出力はレポートのみ）
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
