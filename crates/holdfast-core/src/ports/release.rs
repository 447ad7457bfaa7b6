//! BestEffortSend port - teardown 時の release 送信
//!
//! 送りっぱなし（fire-and-forget）の送信手段です。結果は観測しません。
//!
//! # 実装
//! - **DetachedSend**: tokio runtime に spawn して keeper の終了後も送信を続ける
//! - **InlineSend**: 呼び出し側で await する（teardown に中断される可能性あり）
//!
//! どちらを使うかは `impls::release::best_effort_sender()` が実行時に選びます。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// release リクエストの本文（application/x-www-form-urlencoded）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePayload {
    pub release: bool,
    pub csrfmiddlewaretoken: String,
}

impl ReleasePayload {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            release: true,
            csrfmiddlewaretoken: token.into(),
        }
    }
}

/// BestEffortSend は失敗を返さない
#[async_trait]
pub trait BestEffortSend: Send + Sync {
    async fn send(&self, url: &str, payload: &ReleasePayload);

    /// ログ用の名前
    fn strategy(&self) -> &'static str;
}
