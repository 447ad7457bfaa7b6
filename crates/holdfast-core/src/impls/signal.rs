//! UnloadSignal impls
//!
//! - **CtrlCUnload**: SIGINT / Ctrl-C（本番用）
//! - **ManualUnload**: 任意のタイミングで fire（テスト・組み込み用）

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::warn;

use crate::ports::UnloadSignal;

#[derive(Debug, Clone, Copy, Default)]
pub struct CtrlCUnload;

#[async_trait]
impl UnloadSignal for CtrlCUnload {
    async fn unloading(&self) {
        if let Err(e) = tokio::signal::ctrl_c().await {
            // シグナルを購読できないなら unload は来ない
            warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}

/// ManualUnload は `fire()` で resolve する
///
/// fire 後に `unloading()` を呼んでもすぐ resolve する。
pub struct ManualUnload {
    tx: watch::Sender<bool>,
}

impl ManualUnload {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn fire(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_fired(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for ManualUnload {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UnloadSignal for ManualUnload {
    async fn unloading(&self) {
        let mut rx = self.tx.subscribe();
        // sender は self が持っているので Err にはならない
        let _ = rx.wait_for(|fired| *fired).await;
    }
}
