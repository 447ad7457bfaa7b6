//! Impls - ports の実装
//!
//! # 本番用
//! - **HttpTransport**: reqwest による renewal
//! - **DetachedSend / InlineSend**: release の best-effort 送信（ReleaseStrategy で選択）
//! - **TokioScheduler**, **DefaultErrorFormatter**
//! - **TracingNotifier / TracingPrompt**: UI の無いプロセス向け
//! - **CtrlCUnload**, **EnvToken / StaticToken**
//!
//! # 開発・テスト用
//! - **ScriptedTransport**, **RecordingNotifier**, **RecordingPrompt**, **RecordingSend**
//! - **ManualUnload**

pub mod console;
pub mod formatter;
pub mod http;
pub mod memory;
pub mod release;
pub mod scheduler;
pub mod signal;
pub mod token;

// 主要な型を再エクスポート
pub use self::console::{TracingNotifier, TracingPrompt};
pub use self::formatter::DefaultErrorFormatter;
pub use self::http::HttpTransport;
pub use self::memory::{RecordingNotifier, RecordingPrompt, RecordingSend, ScriptedTransport};
pub use self::release::{DetachedSend, InlineSend, ReleaseStrategy, best_effort_sender};
pub use self::scheduler::TokioScheduler;
pub use self::signal::{CtrlCUnload, ManualUnload};
pub use self::token::{EnvToken, StaticToken};
