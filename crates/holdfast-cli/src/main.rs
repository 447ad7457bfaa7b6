use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use holdfast_core::impls::{
    CtrlCUnload, EnvToken, HttpTransport, ReleaseStrategy, StaticToken, TracingNotifier,
    TracingPrompt,
};
use holdfast_core::ports::TokenSource;
use holdfast_core::{
    ActionContext, HaltReason, KeeperBuilder, KeeperConfig, KeeperError, KeeperPhase, LeaseTarget,
};

const TOKEN_ENV: &str = "HOLDFAST_CSRF_TOKEN";

/// Hold a reservation on a resource until Ctrl-C, then release it.
#[derive(Parser)]
#[command(name = "holdfast", version, about, long_about = None)]
struct Cli {
    /// Reservation endpoint (renewed and released with POST)
    #[arg(required = true)]
    url: String,

    /// Where to look for another resource when reviewers collide
    #[arg(long, default_value = "/")]
    find_new: String,

    /// Why the lease is held: editing (transcribe) or reviewing (review)
    #[arg(long, default_value = "editing")]
    context: ActionContext,

    /// JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seconds between renewals (overrides the config file)
    #[arg(long)]
    interval: Option<u64>,

    /// Anti-forgery token sent with the release (defaults to $HOLDFAST_CSRF_TOKEN)
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, KeeperError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => KeeperConfig::from_path(path)?,
        None => KeeperConfig::default(),
    };
    if let Some(secs) = cli.interval {
        config.renew_interval_secs = secs;
    }

    let token: Arc<dyn TokenSource> = match cli.token {
        Some(token) => Arc::new(StaticToken::new(token)),
        None => Arc::new(EnvToken::new(TOKEN_ENV)),
    };

    let transport = HttpTransport::new(config.request_timeout())?.with_csrf_header(token.clone());
    let strategy = ReleaseStrategy::detect(transport.client().clone());

    let keeper = KeeperBuilder::new()
        .config(config)
        .transport(Arc::new(transport))
        .sender(strategy.sender())
        .notifier(Arc::new(TracingNotifier))
        .prompt(Arc::new(TracingPrompt))
        .unload(Arc::new(CtrlCUnload))
        .token(token)
        .build()?;

    let target = LeaseTarget::new(cli.url, cli.find_new)?;
    let handle = keeper.start(target, cli.context);

    let halted = handle.halted().await;
    // プロセス終了 = ページ終了。まだ release していなければここで送る
    let (last, _payload) = handle.unload_and_wait().await;
    strategy.drain().await;

    info!(renewals = last.renewals, phase = ?halted.phase, "done");
    match halted.phase {
        KeeperPhase::Halted(HaltReason::Unloaded | HaltReason::Stopped) => Ok(ExitCode::SUCCESS),
        KeeperPhase::Halted(reason) => {
            error!(?reason, "reservation could not be kept");
            Ok(ExitCode::FAILURE)
        }
        phase => {
            error!(?phase, "keeper ended without halting");
            Ok(ExitCode::FAILURE)
        }
    }
}
