//! RenewalTransport port - renewal リクエストの送信
//!
//! # 実装
//! - **HttpTransport**: reqwest で POST（本番用）
//! - **ScriptedTransport**: 応答を順番に返す（テスト用）

use async_trait::async_trait;

use crate::domain::RenewalFailure;

/// RenewalTransport は lease を 1 回更新する
///
/// - 2xx なら `Ok(())`
/// - それ以外は status / status text / エラー文字列を `RenewalFailure` に詰める
/// - ネットワーク障害は `status: None`
#[async_trait]
pub trait RenewalTransport: Send + Sync {
    async fn renew(&self, url: &str) -> Result<(), RenewalFailure>;
}
