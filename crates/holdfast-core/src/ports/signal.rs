//! UnloadSignal port - ページ（プロセス）終了の通知

use async_trait::async_trait;

/// UnloadSignal は「終了直前」を 1 回だけ通知する
///
/// keeper は start 時に 1 回だけ購読します。
#[async_trait]
pub trait UnloadSignal: Send + Sync {
    /// 終了直前になったら resolve する
    async fn unloading(&self);
}
