//! TeardownHook - unload 時の release
//!
//! start 時に 1 回だけ登録され、renewal ループの状態とは独立に動きます。
//! 発火は最大 1 回（発火したらタスクごと終わる）。

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::domain::HaltReason;
use crate::ports::{BestEffortSend, ReleasePayload, TokenSource, UnloadSignal};

pub(crate) struct TeardownHook {
    pub(crate) url: String,
    pub(crate) unload: Arc<dyn UnloadSignal>,
    pub(crate) token: Arc<dyn TokenSource>,
    pub(crate) sender: Arc<dyn BestEffortSend>,
    /// KeeperHandle::unload() からの手動トリガー
    pub(crate) manual: watch::Receiver<bool>,
    pub(crate) shutdown: Arc<watch::Sender<Option<HaltReason>>>,
}

impl TeardownHook {
    pub(crate) async fn run(mut self) -> ReleasePayload {
        tokio::select! {
            _ = self.unload.unloading() => {}
            _ = wait_manual(&mut self.manual) => {}
        }
        self.fire().await
    }

    async fn fire(&self) -> ReleasePayload {
        let token = self.token.token().unwrap_or_else(|| {
            warn!(url = %self.url, "no anti-forgery token available; releasing without one");
            String::new()
        });
        let payload = ReleasePayload::new(token);

        info!(url = %self.url, strategy = self.sender.strategy(), "releasing reservation");
        self.sender.send(&self.url, &payload).await;

        // ページが閉じたので、待機中・送信中の renewal は放棄する
        self.shutdown.send_if_modified(|reason| {
            if reason.is_some() {
                return false;
            }
            *reason = Some(HaltReason::Unloaded);
            true
        });
        payload
    }
}

async fn wait_manual(rx: &mut watch::Receiver<bool>) {
    let fired = rx.wait_for(|fired| *fired).await.is_ok();
    if !fired {
        // handle が drop された: 手動トリガーはもう来ない
        std::future::pending::<()>().await;
    }
}
