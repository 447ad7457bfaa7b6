//! Notifier port - UI への通知
//!
//! `category` が同じメッセージは UI 側で重複排除・置き換えされます。

use crate::domain::NoticeLevel;

pub trait Notifier: Send + Sync {
    /// プレーンテキスト
    fn notify(&self, level: NoticeLevel, message: &str, category: &str);

    /// markup（リンクなど）を含むメッセージ
    fn notify_html(&self, level: NoticeLevel, html: &str, category: &str);
}
