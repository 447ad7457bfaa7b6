//! State - lease の状態と keeper のフェーズ
//!
//! LeaseState は UI 側が読む出力専用の状態です。
//! Keeper 自身はこの値で分岐しません。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// LeaseState は lease を保持しているかどうか
///
/// 最初の renewal が終わるまでは Unknown（= 保持していない扱い）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseState {
    #[default]
    Unknown,
    Held,
    NotHeld,
}

impl LeaseState {
    pub fn is_held(&self) -> bool {
        matches!(self, LeaseState::Held)
    }
}

/// HaltReason は renewal ループが止まった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaltReason {
    /// 409 + Editing
    Conflict,
    /// 408
    Expired,
    /// 409 + Reviewing（再スケジュールしない設定のとき）
    ReviewConflict,
    /// その他の失敗（再スケジュールしない設定のとき）
    RenewalFailed,
    /// KeeperHandle::stop()
    Stopped,
    /// teardown（unload）
    Unloaded,
}

impl HaltReason {
    /// blocking prompt を出した停止かどうか
    pub fn is_lease_lost(&self) -> bool {
        matches!(self, HaltReason::Conflict | HaltReason::Expired)
    }
}

/// KeeperPhase は renewal ループの現在位置
///
/// # 状態遷移
/// - idle: start 前
/// - renewing: renewal リクエスト送信中（同時に 1 件まで）
/// - waiting: 次の renewal までの待機中
/// - halted: 終了（タイマーは残らない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase", content = "reason")]
pub enum KeeperPhase {
    #[default]
    Idle,
    Renewing,
    Waiting,
    Halted(HaltReason),
}

impl KeeperPhase {
    pub fn is_halted(&self) -> bool {
        matches!(self, KeeperPhase::Halted(_))
    }
}

/// LeaseStatus は observer に公開するスナップショット
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseStatus {
    pub state: LeaseState,
    pub phase: KeeperPhase,
    /// 成功した renewal の回数
    pub renewals: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_renewed_at: Option<DateTime<Utc>>,
}
