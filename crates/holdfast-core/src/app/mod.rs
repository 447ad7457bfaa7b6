//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせて keeper のロジックを実装します。
//!
//! # 主要コンポーネント
//! - **KeeperBuilder**: collaborator のワイヤリングと起動時検証
//! - **LeaseKeeper**: renewal ループ（renew → 判定 → 待機 → renew ...）
//! - **KeeperHandle**: 状態の購読、stop / unload
//! - **TeardownHook**: unload 時の release（最大 1 回）
//! - **StatusPublisher**: lease state の変更通知

pub mod builder;
pub mod keeper;
mod status;
mod teardown;

// 主要な型を再エクスポート
pub use self::builder::KeeperBuilder;
pub use self::keeper::{KeeperHandle, LeaseKeeper};
