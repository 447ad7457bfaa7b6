//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! Keeper はページ環境（通知、モーダル、unload、CSRF token）や HTTP に
//! 直接触れず、すべてここの trait 経由で扱います。
//!
//! # 設計原則
//! - lock の正本はサーバー側（keeper は判定結果に反応するだけ）
//! - 時間と送信は差し替え可能（テストで早送り・記録できる）

pub mod clock;
pub mod formatter;
pub mod notifier;
pub mod prompt;
pub mod release;
pub mod scheduler;
pub mod signal;
pub mod token;
pub mod transport;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::formatter::ErrorFormatter;
pub use self::notifier::Notifier;
pub use self::prompt::BlockingPrompt;
pub use self::release::{BestEffortSend, ReleasePayload};
pub use self::scheduler::Scheduler;
pub use self::signal::UnloadSignal;
pub use self::token::TokenSource;
pub use self::transport::RenewalTransport;
