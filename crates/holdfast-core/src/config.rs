//! KeeperConfig - renewal ループの設定
//!
//! JSON で読み込めます。省略したフィールドはデフォルト値になります。
//!
//! ```json
//! { "renew_interval_secs": 60, "on_unknown_failure": "reschedule" }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::KeeperError;

/// 失敗後にループを続けるかどうか
///
/// `Stop` が既存ページと同じ挙動（再スケジュールしない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AfterFailure {
    #[default]
    Stop,
    Reschedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperConfig {
    /// 成功してから次の renewal までの秒数
    pub renew_interval_secs: u64,

    /// HttpTransport のリクエストタイムアウト
    pub request_timeout_secs: u64,

    /// notifier に渡す category（同じ category は UI 側で置き換え）
    pub category: String,

    /// 409 + Reviewing の後
    pub on_review_conflict: AfterFailure,

    /// 409/408 以外の失敗の後
    pub on_unknown_failure: AfterFailure,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            renew_interval_secs: 60,
            request_timeout_secs: 30,
            category: "transcription-reservation".to_string(),
            on_review_conflict: AfterFailure::Stop,
            on_unknown_failure: AfterFailure::Stop,
        }
    }
}

impl KeeperConfig {
    pub fn from_json_str(s: &str) -> Result<Self, KeeperError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KeeperError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), KeeperError> {
        if self.renew_interval_secs == 0 {
            return Err(KeeperError::InvalidConfig(
                "renew_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(KeeperError::InvalidConfig(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(KeeperError::InvalidConfig("category is empty".to_string()));
        }
        Ok(())
    }

    pub fn renew_interval(&self) -> Duration {
        Duration::from_secs(self.renew_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
