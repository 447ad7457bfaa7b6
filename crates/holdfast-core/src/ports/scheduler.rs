//! Scheduler port - 待機の抽象化
//!
//! renewal ループは次の renewal まで `Scheduler::sleep` で待ちます。
//! テストでは tokio の paused time で早送りできます。

use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn sleep(&self, delay: Duration);
}
