//! holdfast-core
//!
//! Client-side reservation keeper: renews a time-boxed lease over HTTP on a
//! fixed cadence, reacts to the server's verdict, and releases the lease on
//! teardown.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（target, context, outcome, state, notice, errors）
//! - **ports**: 抽象化レイヤー（RenewalTransport, BestEffortSend, Notifier, Scheduler, など）
//! - **app**: アプリケーションロジック（builder, keeper, teardown, status）
//! - **impls**: 実装（HttpTransport, ReleaseStrategy, テスト用の Recording* など）
//! - **config**: KeeperConfig

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{KeeperBuilder, KeeperHandle, LeaseKeeper};
pub use config::{AfterFailure, KeeperConfig};
pub use domain::{
    ActionContext, HaltReason, KeeperError, KeeperPhase, LeaseState, LeaseStatus, LeaseTarget,
    RejectReason, RenewalFailure, RenewalOutcome,
};
