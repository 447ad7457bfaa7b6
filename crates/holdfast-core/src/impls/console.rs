//! Console impls - tracing に流す notifier / prompt
//!
//! UI を持たないプロセス（CLI など）で使います。

use tracing::{error, warn};

use crate::domain::NoticeLevel;
use crate::ports::{BlockingPrompt, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str, category: &str) {
        match level {
            NoticeLevel::Warning => warn!(category, "{message}"),
            NoticeLevel::Error => error!(category, "{message}"),
        }
    }

    fn notify_html(&self, level: NoticeLevel, html: &str, category: &str) {
        match level {
            NoticeLevel::Warning => warn!(category, html = true, "{html}"),
            NoticeLevel::Error => error!(category, html = true, "{html}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPrompt;

impl BlockingPrompt for TracingPrompt {
    fn show(&self) {
        error!("reservation lost: this session can no longer edit the resource");
    }
}
