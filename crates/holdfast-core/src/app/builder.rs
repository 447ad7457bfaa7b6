//! KeeperBuilder - collaborator のワイヤリング
//!
//! transport / sender / notifier / prompt / unload / token は必須で、
//! 欠けていれば `build()` が `KeeperError::MissingPort` を返します。
//! start 前にワイヤリングの漏れを見つけるためのものです。

use std::sync::Arc;

use super::keeper::{KeeperPorts, LeaseKeeper};
use crate::config::KeeperConfig;
use crate::domain::KeeperError;
use crate::impls::{DefaultErrorFormatter, TokioScheduler};
use crate::ports::{
    BestEffortSend, BlockingPrompt, Clock, ErrorFormatter, Notifier, RenewalTransport, Scheduler,
    SystemClock, TokenSource, UnloadSignal,
};

/// KeeperBuilder は LeaseKeeper を構築
///
/// # 使用例
/// ```ignore
/// let keeper = KeeperBuilder::new()
///     .transport(Arc::new(HttpTransport::new(config.request_timeout())?))
///     .sender(strategy.sender())
///     .notifier(Arc::new(TracingNotifier))
///     .prompt(Arc::new(TracingPrompt))
///     .unload(Arc::new(CtrlCUnload))
///     .token(Arc::new(StaticToken::new(token)))
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - 必須の port（transport, sender, notifier, prompt, unload, token）が
///   揃っていなければ build() が `KeeperError::MissingPort` を返す
/// - formatter / scheduler / clock は省略するとデフォルト実装
/// - config は build() 時に validate() される
#[derive(Default)]
pub struct KeeperBuilder {
    config: KeeperConfig,
    transport: Option<Arc<dyn RenewalTransport>>,
    sender: Option<Arc<dyn BestEffortSend>>,
    notifier: Option<Arc<dyn Notifier>>,
    prompt: Option<Arc<dyn BlockingPrompt>>,
    unload: Option<Arc<dyn UnloadSignal>>,
    token: Option<Arc<dyn TokenSource>>,
    formatter: Option<Arc<dyn ErrorFormatter>>,
    scheduler: Option<Arc<dyn Scheduler>>,
    clock: Option<Arc<dyn Clock>>,
}

impl KeeperBuilder {
    /// 新しい KeeperBuilder を作成
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: KeeperConfig) -> Self {
        self.config = config;
        self
    }

    pub fn transport(mut self, transport: Arc<dyn RenewalTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn sender(mut self, sender: Arc<dyn BestEffortSend>) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn prompt(mut self, prompt: Arc<dyn BlockingPrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn unload(mut self, unload: Arc<dyn UnloadSignal>) -> Self {
        self.unload = Some(unload);
        self
    }

    pub fn token(mut self, token: Arc<dyn TokenSource>) -> Self {
        self.token = Some(token);
        self
    }

    pub fn formatter(mut self, formatter: Arc<dyn ErrorFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// KeeperBuilder を構築して LeaseKeeper を生成
    ///
    /// # 検証
    /// - 必須 port の不足は最初に見つかったものを MissingPort で返す
    /// - config が不正なら InvalidConfig
    pub fn build(self) -> Result<LeaseKeeper, KeeperError> {
        self.config.validate()?;

        let ports = KeeperPorts {
            transport: self.transport.ok_or(KeeperError::MissingPort("transport"))?,
            sender: self.sender.ok_or(KeeperError::MissingPort("sender"))?,
            notifier: self.notifier.ok_or(KeeperError::MissingPort("notifier"))?,
            prompt: self.prompt.ok_or(KeeperError::MissingPort("prompt"))?,
            unload: self.unload.ok_or(KeeperError::MissingPort("unload"))?,
            token: self.token.ok_or(KeeperError::MissingPort("token"))?,
            formatter: self
                .formatter
                .unwrap_or_else(|| Arc::new(DefaultErrorFormatter)),
            scheduler: self.scheduler.unwrap_or_else(|| Arc::new(TokioScheduler)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        };
        Ok(LeaseKeeper::new(ports, self.config))
    }
}
