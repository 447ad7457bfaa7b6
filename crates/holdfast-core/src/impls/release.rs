//! Release strategies - teardown 時の best-effort 送信
//!
//! DetachedSend は runtime に spawn するので、keeper や呼び出し側の
//! future が drop されても送信が続きます（ブラウザの beacon に相当）。
//!
//! InlineSend は `detect` が runtime の外で呼ばれたときに選ばれます。
//! たとえば host が runtime を起動する前に HTTP client と strategy を
//! 組み立てる場合です。このとき spawn 先の Handle はまだ無いので、
//! 送信は teardown hook のタスク上でそのまま await されます。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::ports::{BestEffortSend, ReleasePayload};

async fn post_release(client: &reqwest::Client, url: &str, payload: &ReleasePayload) {
    // 結果は観測しない。ログだけ残す
    match client.post(url).form(payload).send().await {
        Ok(response) => debug!(url, status = response.status().as_u16(), "release sent"),
        Err(e) => warn!(url, error = %e, "release failed"),
    }
}

/// runtime に spawn して即座に戻る
pub struct DetachedSend {
    client: reqwest::Client,
    runtime: Handle,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl DetachedSend {
    pub fn new(client: reqwest::Client, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// spawn 済みの送信がすべて終わるまで待つ
    ///
    /// プロセスを終える前に呼ぶ（runtime が落ちると送信も止まる）。
    pub async fn drain(&self) {
        let pending = {
            let mut guard = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
            std::mem::take(&mut *guard)
        };
        for join in pending {
            let _ = join.await;
        }
    }
}

#[async_trait]
impl BestEffortSend for DetachedSend {
    async fn send(&self, url: &str, payload: &ReleasePayload) {
        let client = self.client.clone();
        let url = url.to_string();
        let payload = payload.clone();
        let join = self.runtime.spawn(async move {
            post_release(&client, &url, &payload).await;
        });
        let mut guard = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        guard.retain(|j| !j.is_finished());
        guard.push(join);
    }

    fn strategy(&self) -> &'static str {
        "detached"
    }
}

/// 呼び出し側で await する（teardown で中断されうる）
///
/// runtime より先に client を作る host 向け。keeper を start する時点では
/// runtime が必要なので、送信自体は teardown hook のタスクで行われる。
pub struct InlineSend {
    client: reqwest::Client,
}

impl InlineSend {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BestEffortSend for InlineSend {
    async fn send(&self, url: &str, payload: &ReleasePayload) {
        post_release(&self.client, url, payload).await;
    }

    fn strategy(&self) -> &'static str {
        "inline"
    }
}

/// 実行時に選ばれた release 手段
#[derive(Clone)]
pub enum ReleaseStrategy {
    Detached(Arc<DetachedSend>),
    Inline(Arc<InlineSend>),
}

impl ReleaseStrategy {
    /// runtime があれば Detached、なければ Inline
    ///
    /// 判定は呼び出した時点の thread で行う。`#[tokio::main]` の中なら常に
    /// Detached になる。runtime を自前で組み立てる host が `block_on` の前に
    /// 呼ぶと Inline になり、`drain` は不要になる。
    pub fn detect(client: reqwest::Client) -> Self {
        match Handle::try_current() {
            Ok(runtime) => ReleaseStrategy::Detached(Arc::new(DetachedSend::new(client, runtime))),
            Err(_) => ReleaseStrategy::Inline(Arc::new(InlineSend::new(client))),
        }
    }

    pub fn sender(&self) -> Arc<dyn BestEffortSend> {
        match self {
            ReleaseStrategy::Detached(s) => s.clone(),
            ReleaseStrategy::Inline(s) => s.clone(),
        }
    }

    /// Detached の送信を待つ。Inline では何もしない
    pub async fn drain(&self) {
        if let ReleaseStrategy::Detached(s) = self {
            s.drain().await;
        }
    }
}

/// `ReleaseStrategy::detect(client).sender()` の短縮形
pub fn best_effort_sender(client: reqwest::Client) -> Arc<dyn BestEffortSend> {
    ReleaseStrategy::detect(client).sender()
}
