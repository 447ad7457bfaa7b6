//! LeaseKeeper - renewal ループ
//!
//! # フロー
//! 1. renewal を送る（start 直後は待たずに 1 回目）
//! 2. 結果を分類して lease state / 通知 / prompt に反映
//! 3. 続けるなら interval だけ待って 1 に戻る（interval は処理完了から数える）
//! 4. 止めるなら Halted にしてタスクを終える
//!
//! 同時に in-flight な renewal は常に 1 件まで。

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::status::StatusPublisher;
use super::teardown::TeardownHook;
use crate::config::{AfterFailure, KeeperConfig};
use crate::domain::notice::{renewal_failed_text, review_conflict_html};
use crate::domain::{
    ActionContext, HaltReason, KeeperPhase, LeaseState, LeaseStatus, LeaseTarget, NoticeLevel,
    RejectReason, RenewalFailure, RenewalOutcome,
};
use crate::ports::{
    BestEffortSend, BlockingPrompt, Clock, ErrorFormatter, Notifier, ReleasePayload,
    RenewalTransport, Scheduler, TokenSource, UnloadSignal,
};

/// keeper が使う collaborator 一式（KeeperBuilder が組み立てる）
pub(crate) struct KeeperPorts {
    pub(crate) transport: Arc<dyn RenewalTransport>,
    pub(crate) sender: Arc<dyn BestEffortSend>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) prompt: Arc<dyn BlockingPrompt>,
    pub(crate) unload: Arc<dyn UnloadSignal>,
    pub(crate) token: Arc<dyn TokenSource>,
    pub(crate) formatter: Arc<dyn ErrorFormatter>,
    pub(crate) scheduler: Arc<dyn Scheduler>,
    pub(crate) clock: Arc<dyn Clock>,
}

/// LeaseKeeper は 1 ページビューにつき 1 つ
///
/// # 使用例
/// ```ignore
/// let keeper = KeeperBuilder::new()
///     .transport(transport)
///     .sender(strategy.sender())
///     .notifier(Arc::new(TracingNotifier))
///     .prompt(Arc::new(TracingPrompt))
///     .unload(Arc::new(CtrlCUnload))
///     .token(Arc::new(EnvToken::new("HOLDFAST_CSRF_TOKEN")))
///     .build()?;
/// let handle = keeper.start(target, ActionContext::Editing);
/// ```
pub struct LeaseKeeper {
    ports: Arc<KeeperPorts>,
    config: Arc<KeeperConfig>,
}

impl LeaseKeeper {
    pub(crate) fn new(ports: KeeperPorts, config: KeeperConfig) -> Self {
        Self {
            ports: Arc::new(ports),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &KeeperConfig {
        &self.config
    }

    /// renewal ループと teardown hook を spawn する
    ///
    /// tokio runtime の中で呼ぶこと。
    pub fn start(&self, target: LeaseTarget, context: ActionContext) -> KeeperHandle {
        let (status, status_rx) = StatusPublisher::new();
        let (shutdown_tx, shutdown_rx) = watch::channel(None);
        let shutdown_tx = Arc::new(shutdown_tx);
        let (unload_tx, unload_rx) = watch::channel(false);

        info!(url = target.url(), %context, "starting reservation keeper");

        let teardown = TeardownHook {
            url: target.url().to_string(),
            unload: Arc::clone(&self.ports.unload),
            token: Arc::clone(&self.ports.token),
            sender: Arc::clone(&self.ports.sender),
            manual: unload_rx,
            shutdown: Arc::clone(&shutdown_tx),
        };
        let renewal = RenewalLoop {
            target,
            context,
            ports: Arc::clone(&self.ports),
            config: Arc::clone(&self.config),
            status,
            shutdown: shutdown_rx,
        };

        KeeperHandle {
            status: status_rx,
            shutdown: shutdown_tx,
            unload: unload_tx,
            renewal: tokio::spawn(renewal.run()),
            teardown: tokio::spawn(teardown.run()),
        }
    }
}

/// 1 回の renewal を処理した後の行き先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Halt(HaltReason),
}

struct RenewalLoop {
    target: LeaseTarget,
    context: ActionContext,
    ports: Arc<KeeperPorts>,
    config: Arc<KeeperConfig>,
    status: StatusPublisher,
    shutdown: watch::Receiver<Option<HaltReason>>,
}

impl RenewalLoop {
    async fn run(mut self) -> LeaseStatus {
        let interval = self.config.renew_interval();
        loop {
            let requested = *self.shutdown.borrow();
            if let Some(reason) = requested {
                return self.halt(reason);
            }

            self.status.set_phase(KeeperPhase::Renewing);
            let renewed = tokio::select! {
                reason = wait_shutdown(&mut self.shutdown) => Err(reason),
                result = self.ports.transport.renew(self.target.url()) => Ok(result),
            };
            let result = match renewed {
                Ok(result) => result,
                Err(reason) => return self.halt(reason),
            };

            if let Step::Halt(reason) = self.apply(result) {
                return self.halt(reason);
            }

            self.status.set_phase(KeeperPhase::Waiting);
            debug!(url = self.target.url(), delay_secs = interval.as_secs(), "next renewal scheduled");
            let woke = tokio::select! {
                reason = wait_shutdown(&mut self.shutdown) => Err(reason),
                _ = self.ports.scheduler.sleep(interval) => Ok(()),
            };
            if let Err(reason) = woke {
                return self.halt(reason);
            }
        }
    }

    fn apply(&self, result: Result<(), RenewalFailure>) -> Step {
        let outcome = RenewalOutcome::from_result(&result);
        debug!(url = self.target.url(), ?outcome, "renewal outcome");

        let failure = match result {
            Ok(()) => {
                let first = !self.status.current().state.is_held();
                self.status.renewed(self.ports.clock.now());
                if first {
                    info!(url = self.target.url(), "reservation acquired");
                }
                return Step::Continue;
            }
            Err(failure) => failure,
        };

        let category = self.config.category.as_str();
        match RejectReason::classify(&failure) {
            RejectReason::Conflict => match self.context {
                ActionContext::Editing => {
                    self.lose_lease("reserved by someone else");
                    Step::Halt(HaltReason::Conflict)
                }
                ActionContext::Reviewing => {
                    let html = review_conflict_html(self.target.find_new_url());
                    self.ports.notifier.notify_html(NoticeLevel::Warning, &html, category);
                    after(self.config.on_review_conflict, HaltReason::ReviewConflict)
                }
            },
            RejectReason::Expired => {
                self.lose_lease("renewal arrived too late");
                Step::Halt(HaltReason::Expired)
            }
            RejectReason::Other { status, .. } => {
                let summary = self.ports.formatter.format_error(&failure);
                warn!(url = self.target.url(), ?status, %summary, "renewal failed");
                self.ports.notifier.notify(
                    NoticeLevel::Error,
                    &renewal_failed_text(&summary),
                    category,
                );
                after(self.config.on_unknown_failure, HaltReason::RenewalFailed)
            }
        }
    }

    fn lose_lease(&self, why: &str) {
        warn!(url = self.target.url(), why, "reservation lost");
        self.status.set_state(LeaseState::NotHeld);
        self.ports.prompt.show();
    }

    fn halt(&self, reason: HaltReason) -> LeaseStatus {
        info!(url = self.target.url(), ?reason, "reservation keeper halted");
        self.status.set_phase(KeeperPhase::Halted(reason));
        self.status.current()
    }
}

fn after(policy: AfterFailure, reason: HaltReason) -> Step {
    match policy {
        AfterFailure::Stop => Step::Halt(reason),
        AfterFailure::Reschedule => Step::Continue,
    }
}

async fn wait_shutdown(rx: &mut watch::Receiver<Option<HaltReason>>) -> HaltReason {
    let requested = rx.wait_for(Option::is_some).await.map(|r| *r);
    match requested {
        Ok(Some(reason)) => reason,
        Ok(None) => HaltReason::Stopped,
        // sender が全部 drop された: 停止要求はもう来ない
        Err(_) => std::future::pending().await,
    }
}

/// start() が返すハンドル
///
/// - `status()` で lease state と変更通知を購読できる
/// - `stop()` はループだけを止める（release は送らない）
/// - `unload()` は unload signal と同じ扱い（release を送ってループを止める）
/// - handle を drop してもループと teardown hook は動き続ける
pub struct KeeperHandle {
    status: watch::Receiver<LeaseStatus>,
    shutdown: Arc<watch::Sender<Option<HaltReason>>>,
    unload: watch::Sender<bool>,
    renewal: JoinHandle<LeaseStatus>,
    teardown: JoinHandle<ReleasePayload>,
}

impl KeeperHandle {
    /// 変更通知付きの購読
    pub fn status(&self) -> watch::Receiver<LeaseStatus> {
        self.status.clone()
    }

    pub fn current(&self) -> LeaseStatus {
        self.status.borrow().clone()
    }

    pub fn lease_state(&self) -> LeaseState {
        self.status.borrow().state
    }

    /// ループを止める。teardown hook は残る
    pub fn stop(&self) {
        self.shutdown.send_if_modified(|reason| {
            if reason.is_some() {
                return false;
            }
            *reason = Some(HaltReason::Stopped);
            true
        });
    }

    /// teardown を手動で発火する（発火済みなら何もしない）
    pub fn unload(&self) {
        // teardown が終わっていれば receiver は居ない
        let _ = self.unload.send(true);
    }

    /// Halted になるまで待つ
    pub async fn halted(&self) -> LeaseStatus {
        let mut rx = self.status.clone();
        let halted = rx.wait_for(|s| s.phase.is_halted()).await.map(|s| s.clone());
        match halted {
            Ok(status) => status,
            Err(_) => rx.borrow().clone(),
        }
    }

    /// ループの終了を待つ（teardown hook は待たない）
    ///
    /// teardown hook は発火するまで残り、後から unload signal が来れば
    /// release を送る。release まで待つなら `unload_and_wait` を使う。
    pub async fn join(self) -> LeaseStatus {
        let KeeperHandle {
            status, renewal, ..
        } = self;
        match renewal.await {
            Ok(last) => last,
            Err(_) => status.borrow().clone(),
        }
    }

    /// teardown を発火し、release の送信とループの終了を待つ
    ///
    /// 戻り値は送った release payload（teardown が失敗した場合は None）。
    pub async fn unload_and_wait(self) -> (LeaseStatus, Option<ReleasePayload>) {
        self.unload();
        let KeeperHandle {
            status,
            renewal,
            teardown,
            ..
        } = self;
        let payload = teardown.await.ok();
        let last = match renewal.await {
            Ok(last) => last,
            Err(_) => status.borrow().clone(),
        };
        (last, payload)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeZone;
    use tokio::time::Instant;

    use super::*;
    use crate::app::KeeperBuilder;
    use crate::domain::{NoticeBody, RenewalFailure};
    use crate::impls::{
        ManualUnload, RecordingNotifier, RecordingPrompt, RecordingSend, ScriptedTransport,
        StaticToken,
    };
    use crate::ports::FixedClock;

    const MINUTE: Duration = Duration::from_secs(60);

    struct Fixture {
        transport: Arc<ScriptedTransport>,
        notifier: Arc<RecordingNotifier>,
        prompt: Arc<RecordingPrompt>,
        sender: Arc<RecordingSend>,
        unload: Arc<ManualUnload>,
        token: Arc<StaticToken>,
    }

    impl Fixture {
        fn new(transport: ScriptedTransport) -> Self {
            Self {
                transport: Arc::new(transport),
                notifier: Arc::new(RecordingNotifier::new()),
                prompt: Arc::new(RecordingPrompt::new()),
                sender: Arc::new(RecordingSend::new()),
                unload: Arc::new(ManualUnload::new()),
                token: Arc::new(StaticToken::new("csrf-123")),
            }
        }

        fn with_token(mut self, token: StaticToken) -> Self {
            self.token = Arc::new(token);
            self
        }

        fn keeper(&self, config: KeeperConfig) -> LeaseKeeper {
            let at = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
            KeeperBuilder::new()
                .config(config)
                .transport(self.transport.clone())
                .sender(self.sender.clone())
                .notifier(self.notifier.clone())
                .prompt(self.prompt.clone())
                .unload(self.unload.clone())
                .token(self.token.clone())
                .clock(Arc::new(FixedClock::new(at)))
                .build()
                .unwrap()
        }

        fn start(&self, context: ActionContext) -> KeeperHandle {
            self.start_with(KeeperConfig::default(), context)
        }

        fn start_with(&self, config: KeeperConfig, context: ActionContext) -> KeeperHandle {
            let target = LeaseTarget::new("/reserve/42/", "/next/").unwrap();
            self.keeper(config).start(target, context)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn success_then_conflict_while_editing() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok().then_status(409, "Conflict"));
        let handle = fx.start(ActionContext::Editing);
        let mut status = handle.status();

        // 1 回目は待たずに送られる
        status.wait_for(|s| s.renewals == 1).await.unwrap();
        assert_eq!(handle.lease_state(), LeaseState::Held);
        assert_eq!(fx.prompt.shown(), 0);

        let last = handle.halted().await;
        assert_eq!(last.state, LeaseState::NotHeld);
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::Conflict));
        assert_eq!(fx.prompt.shown(), 1);

        let calls = fx.transport.call_times();
        assert_eq!(calls.len(), 2);
        assert!(calls[1] - calls[0] >= MINUTE);

        // 以降の renewal は無い
        tokio::time::sleep(10 * MINUTE).await;
        assert_eq!(fx.transport.call_count(), 2);
        assert!(fx.notifier.notices().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn first_renewal_fires_immediately() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok());
        let started = Instant::now();
        let handle = fx.start(ActionContext::Editing);
        handle.status().wait_for(|s| s.renewals == 1).await.unwrap();
        assert!(fx.transport.call_times()[0] - started < Duration::from_secs(1));
        assert_eq!(fx.transport.called_urls(), vec!["/reserve/42/".to_string()]);
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn cadence_is_measured_from_completion() {
        let slow = Duration::from_secs(25);
        let fx = Fixture::new(
            ScriptedTransport::new()
                .then_slow_ok(slow)
                .then_slow_ok(slow)
                .then_ok(),
        );
        let handle = fx.start(ActionContext::Editing);
        handle.status().wait_for(|s| s.renewals == 3).await.unwrap();
        handle.stop();

        let calls = fx.transport.call_times();
        let done = fx.transport.completion_times();
        for i in 0..2 {
            assert!(calls[i + 1] - done[i] >= MINUTE);
            assert!(calls[i + 1] - calls[i] >= MINUTE + slow);
        }
        assert_eq!(fx.transport.max_in_flight(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_loses_lease_in_any_context() {
        for context in [ActionContext::Editing, ActionContext::Reviewing] {
            let fx = Fixture::new(ScriptedTransport::new().then_ok().then_status(408, "Request Timeout"));
            let handle = fx.start(context);
            let last = handle.halted().await;
            assert_eq!(last.state, LeaseState::NotHeld);
            assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::Expired));
            assert_eq!(fx.prompt.shown(), 1);
            assert!(fx.notifier.notices().is_empty());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn review_conflict_warns_with_redirect_and_keeps_state() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok().then_status(409, "Conflict"));
        let handle = fx.start(ActionContext::Reviewing);
        let last = handle.halted().await;

        assert_eq!(last.state, LeaseState::Held);
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::ReviewConflict));
        assert_eq!(fx.prompt.shown(), 0);

        let notices = fx.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert_eq!(notices[0].category, "transcription-reservation");
        match &notices[0].body {
            NoticeBody::Html(html) => assert!(html.contains("href=\"/next/\"")),
            other => panic!("expected html notice, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn review_conflict_can_reschedule() {
        let fx = Fixture::new(
            ScriptedTransport::new()
                .then_status(409, "Conflict")
                .then_ok(),
        );
        let config = KeeperConfig {
            on_review_conflict: AfterFailure::Reschedule,
            ..KeeperConfig::default()
        };
        let handle = fx.start_with(config, ActionContext::Reviewing);
        handle.status().wait_for(|s| s.renewals == 1).await.unwrap();
        assert_eq!(handle.lease_state(), LeaseState::Held);
        assert_eq!(fx.transport.call_count(), 2);
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_failure_reports_and_halts_by_default() {
        let fx = Fixture::new(ScriptedTransport::new().then_status(500, "Internal Server Error"));
        let handle = fx.start(ActionContext::Editing);
        let last = handle.halted().await;

        assert_eq!(last.state, LeaseState::Unknown);
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::RenewalFailed));
        assert_eq!(fx.prompt.shown(), 0);

        let notices = fx.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(
            notices[0].body,
            NoticeBody::Text("Unable to reserve this page: 500 Internal Server Error".to_string())
        );

        tokio::time::sleep(10 * MINUTE).await;
        assert_eq!(fx.transport.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_failure_keeps_held_state() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok().then_network_error("connection reset"));
        let handle = fx.start(ActionContext::Editing);
        let last = handle.halted().await;
        assert_eq!(last.state, LeaseState::Held);
        let notices = fx.notifier.notices();
        assert_eq!(
            notices[0].body.as_str(),
            "Unable to reserve this page: connection reset"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_failure_can_reschedule() {
        let fx = Fixture::new(
            ScriptedTransport::new()
                .then_status(503, "Service Unavailable")
                .then_ok(),
        );
        let config = KeeperConfig {
            on_unknown_failure: AfterFailure::Reschedule,
            ..KeeperConfig::default()
        };
        let handle = fx.start_with(config, ActionContext::Editing);
        handle.status().wait_for(|s| s.renewals == 1).await.unwrap();

        let calls = fx.transport.call_times();
        assert!(calls[1] - calls[0] >= MINUTE);
        assert_eq!(fx.notifier.notices().len(), 1);
        handle.stop();
        assert_eq!(handle.halted().await.phase, KeeperPhase::Halted(HaltReason::Stopped));
    }

    #[tokio::test(start_paused = true)]
    async fn unload_releases_with_token_while_looping() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok());
        let handle = fx.start(ActionContext::Editing);
        handle.status().wait_for(|s| s.renewals == 1).await.unwrap();

        fx.unload.fire();
        fx.sender.wait_sent().await;
        let last = handle.halted().await;
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::Unloaded));

        let sent = fx.sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "/reserve/42/");
        assert_eq!(sent[0].1, ReleasePayload::new("csrf-123"));
        assert!(sent[0].1.release);
    }

    #[tokio::test(start_paused = true)]
    async fn unload_releases_after_halt() {
        let fx = Fixture::new(ScriptedTransport::new().then_status(409, "Conflict"));
        let handle = fx.start(ActionContext::Editing);
        handle.halted().await;

        let (last, payload) = handle.unload_and_wait().await;
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::Conflict));
        assert_eq!(payload, Some(ReleasePayload::new("csrf-123")));
        assert_eq!(fx.sender.sent().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unload_without_token_sends_empty_token() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok()).with_token(StaticToken::none());
        let handle = fx.start(ActionContext::Editing);
        handle.status().wait_for(|s| s.renewals == 1).await.unwrap();

        let (last, payload) = handle.unload_and_wait().await;
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::Unloaded));
        assert_eq!(payload, Some(ReleasePayload::new("")));

        let sent = fx.sender.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.release);
        assert_eq!(sent[0].1.csrfmiddlewaretoken, "");
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_fires_at_most_once() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok());
        let handle = fx.start(ActionContext::Editing);
        fx.unload.fire();
        handle.unload();
        let (_, payload) = handle.unload_and_wait().await;
        assert!(payload.is_some());
        assert_eq!(fx.sender.sent().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unload_abandons_in_flight_renewal() {
        // 応答の無い renewal の最中に unload
        let fx = Fixture::new(ScriptedTransport::new());
        let handle = fx.start(ActionContext::Editing);
        handle
            .status()
            .wait_for(|s| s.phase == KeeperPhase::Renewing)
            .await
            .unwrap();

        let (last, payload) = handle.unload_and_wait().await;
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::Unloaded));
        assert_eq!(last.state, LeaseState::Unknown);
        assert!(payload.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_does_not_release() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok().then_ok());
        let handle = fx.start(ActionContext::Editing);
        handle.status().wait_for(|s| s.renewals == 1).await.unwrap();
        handle.stop();
        let last = handle.join().await;
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::Stopped));
        assert_eq!(fx.transport.call_count(), 1);
        assert!(fx.sender.sent().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn join_returns_while_teardown_stays_armed() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok());
        let handle = fx.start(ActionContext::Editing);
        handle.status().wait_for(|s| s.renewals == 1).await.unwrap();
        handle.stop();

        // unload を待たずに戻る
        let last = handle.join().await;
        assert_eq!(last.phase, KeeperPhase::Halted(HaltReason::Stopped));
        assert!(fx.sender.sent().is_empty());

        // handle が無くなっても unload signal で release される
        fx.unload.fire();
        fx.sender.wait_sent().await;
        let sent = fx.sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, ReleasePayload::new("csrf-123"));
    }

    #[tokio::test(start_paused = true)]
    async fn state_change_is_signalled_on_every_renewal() {
        let fx = Fixture::new(ScriptedTransport::new().then_ok().then_ok().then_ok());
        let handle = fx.start(ActionContext::Editing);
        let mut rx = handle.status();
        let mut seen = 0;
        while seen < 3 {
            rx.changed().await.unwrap();
            let s = rx.borrow_and_update().clone();
            if s.renewals > seen {
                assert!(s.state.is_held());
                assert!(s.last_renewed_at.is_some());
                seen = s.renewals;
            }
        }
        handle.stop();
    }

    #[test]
    fn after_maps_policy() {
        assert_eq!(after(AfterFailure::Stop, HaltReason::RenewalFailed), Step::Halt(HaltReason::RenewalFailed));
        assert_eq!(after(AfterFailure::Reschedule, HaltReason::RenewalFailed), Step::Continue);
    }

    #[test]
    fn generic_failure_is_not_lease_loss() {
        let reason = RejectReason::classify(&RenewalFailure::http(502, "Bad Gateway"));
        assert!(!reason.is_lease_lost());
    }
}
