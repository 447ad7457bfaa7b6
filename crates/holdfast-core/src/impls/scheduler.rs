//! TokioScheduler - tokio::time::sleep による待機
//!
//! tokio の paused time（`#[tokio::test(start_paused = true)]`）と組み合わせると
//! 60 秒の周期をテストで早送りできます。

use std::time::Duration;

use async_trait::async_trait;

use crate::ports::Scheduler;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_requested_delay() {
        let start = Instant::now();
        TokioScheduler.sleep(Duration::from_secs(60)).await;
        assert!(start.elapsed() >= Duration::from_secs(60));
    }
}
