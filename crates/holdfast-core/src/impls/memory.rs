//! In-memory impls - 開発・テスト用の port 実装
//!
//! # 含まれる実装
//! - **ScriptedTransport**: 用意した応答を順番に返す
//! - **RecordingNotifier / RecordingPrompt / RecordingSend**: 呼び出しを記録する

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio::time::Instant;

use crate::domain::{Notice, NoticeBody, NoticeLevel, RenewalFailure};
use crate::ports::{BestEffortSend, BlockingPrompt, Notifier, ReleasePayload, RenewalTransport};

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

/// 1 回分の応答
#[derive(Debug, Clone)]
struct ScriptedReply {
    delay: Duration,
    result: Result<(), RenewalFailure>,
}

/// ScriptedTransport は応答を順番に返す
///
/// 応答が尽きたら、その renewal は永遠に返らない（ループは Renewing で止まる）。
/// 呼び出し時刻と完了時刻（tokio の Instant）を記録するので、
/// paused time のテストで周期を検証できます。
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<(String, Instant)>>,
    completions: Mutex<Vec<Instant>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self) -> Self {
        self.push(Duration::ZERO, Ok(()))
    }

    pub fn then_status(self, status: u16, status_text: &str) -> Self {
        self.push(Duration::ZERO, Err(RenewalFailure::http(status, status_text)))
    }

    pub fn then_network_error(self, error: &str) -> Self {
        self.push(Duration::ZERO, Err(RenewalFailure::network(error)))
    }

    /// 応答までに `delay` かかる成功
    pub fn then_slow_ok(self, delay: Duration) -> Self {
        self.push(delay, Ok(()))
    }

    fn push(self, delay: Duration, result: Result<(), RenewalFailure>) -> Self {
        lock(&self.replies).push_back(ScriptedReply { delay, result });
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        lock(&self.calls).iter().map(|(_, at)| *at).collect()
    }

    pub fn completion_times(&self) -> Vec<Instant> {
        lock(&self.completions).clone()
    }

    pub fn called_urls(&self) -> Vec<String> {
        lock(&self.calls).iter().map(|(url, _)| url.clone()).collect()
    }

    /// 同時に in-flight だった renewal の最大数
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RenewalTransport for ScriptedTransport {
    async fn renew(&self, url: &str) -> Result<(), RenewalFailure> {
        lock(&self.calls).push((url.to_string(), Instant::now()));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let reply = lock(&self.replies).pop_front();
        let Some(reply) = reply else {
            return std::future::pending().await;
        };

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        lock(&self.completions).push(Instant::now());
        reply.result
    }
}

/// RecordingNotifier は受け取った Notice を貯める
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }

    fn record(&self, level: NoticeLevel, body: NoticeBody, category: &str) {
        lock(&self.notices).push(Notice {
            level,
            body,
            category: category.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str, category: &str) {
        self.record(level, NoticeBody::Text(message.to_string()), category);
    }

    fn notify_html(&self, level: NoticeLevel, html: &str, category: &str) {
        self.record(level, NoticeBody::Html(html.to_string()), category);
    }
}

/// RecordingPrompt は show() の回数を数える
#[derive(Default)]
pub struct RecordingPrompt {
    shown: AtomicUsize,
}

impl RecordingPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> usize {
        self.shown.load(Ordering::SeqCst)
    }
}

impl BlockingPrompt for RecordingPrompt {
    fn show(&self) {
        self.shown.fetch_add(1, Ordering::SeqCst);
    }
}

/// RecordingSend は release の送信内容を記録する
#[derive(Default)]
pub struct RecordingSend {
    sent: Mutex<Vec<(String, ReleasePayload)>>,
    notify: Notify,
}

impl RecordingSend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, ReleasePayload)> {
        lock(&self.sent).clone()
    }

    /// 1 件以上送られるまで待つ
    pub async fn wait_sent(&self) {
        loop {
            let notified = self.notify.notified();
            if !lock(&self.sent).is_empty() {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl BestEffortSend for RecordingSend {
    async fn send(&self, url: &str, payload: &ReleasePayload) {
        lock(&self.sent).push((url.to_string(), payload.clone()));
        self.notify.notify_waiters();
    }

    fn strategy(&self) -> &'static str {
        "recording"
    }
}
