//! Status - lease state の公開
//!
//! 書き込むのは renewal ループだけ、読むのは UI 側（複数可）。
//! 更新のたびに watch チャネルで変更通知が飛びます。

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::domain::{KeeperPhase, LeaseState, LeaseStatus};

pub(crate) struct StatusPublisher {
    tx: watch::Sender<LeaseStatus>,
}

impl StatusPublisher {
    pub(crate) fn new() -> (Self, watch::Receiver<LeaseStatus>) {
        let (tx, rx) = watch::channel(LeaseStatus::default());
        (Self { tx }, rx)
    }

    pub(crate) fn current(&self) -> LeaseStatus {
        self.tx.borrow().clone()
    }

    /// 成功: held=true を書き、回数と時刻を更新
    ///
    /// 値が変わらなくても通知する（renewed の通知を兼ねる）。
    pub(crate) fn renewed(&self, at: DateTime<Utc>) {
        self.tx.send_modify(|s| {
            s.state = LeaseState::Held;
            s.renewals += 1;
            s.last_renewed_at = Some(at);
        });
    }

    pub(crate) fn set_state(&self, state: LeaseState) {
        self.tx.send_modify(|s| s.state = state);
    }

    pub(crate) fn set_phase(&self, phase: KeeperPhase) {
        self.tx.send_if_modified(|s| {
            if s.phase == phase {
                return false;
            }
            s.phase = phase;
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HaltReason;
    use chrono::TimeZone;

    #[test]
    fn renewed_marks_held_and_counts() {
        let (publisher, rx) = StatusPublisher::new();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        publisher.renewed(at);
        publisher.renewed(at);

        let status = rx.borrow().clone();
        assert_eq!(status.state, LeaseState::Held);
        assert_eq!(status.renewals, 2);
        assert_eq!(status.last_renewed_at, Some(at));
    }

    #[test]
    fn every_state_write_is_signalled() {
        let (publisher, mut rx) = StatusPublisher::new();
        publisher.set_state(LeaseState::NotHeld);
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        // 同じ値でも通知される
        publisher.set_state(LeaseState::NotHeld);
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn repeated_phase_is_not_signalled() {
        let (publisher, mut rx) = StatusPublisher::new();
        publisher.set_phase(KeeperPhase::Halted(HaltReason::Stopped));
        rx.mark_unchanged();
        publisher.set_phase(KeeperPhase::Halted(HaltReason::Stopped));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(publisher.current().phase, KeeperPhase::Halted(HaltReason::Stopped));
    }
}
