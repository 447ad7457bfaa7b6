//! Errors - keeper のエラー型
//!
//! renewal の失敗はここに来ません（RenewalOutcome として処理する）。
//! ここにあるのは構築・設定・起動時のエラーだけです。

use thiserror::Error;

/// KeeperError はドメインエラー
#[derive(Debug, Error)]
pub enum KeeperError {
    #[error("missing port: {0}. Supply it to KeeperBuilder before build().")]
    MissingPort(&'static str),

    #[error("invalid lease target: {0}")]
    InvalidTarget(String),

    #[error("unknown action context: {0}")]
    UnknownContext(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
}
