//! Notice - UI に出すメッセージ

use std::fmt;

use serde::{Deserialize, Serialize};

/// NoticeLevel は通知の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeLevel::Warning => write!(f, "warning"),
            NoticeLevel::Error => write!(f, "error"),
        }
    }
}

/// 本文がプレーンテキストか markup を含むか
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NoticeBody {
    Text(String),
    Html(String),
}

impl NoticeBody {
    pub fn as_str(&self) -> &str {
        match self {
            NoticeBody::Text(s) | NoticeBody::Html(s) => s,
        }
    }
}

/// Notice は notifier に渡された 1 件のメッセージ
///
/// `category` が同じメッセージは UI 側で置き換えられる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub body: NoticeBody,
    pub category: String,
}

/// review 中の conflict で出す HTML
pub fn review_conflict_html(find_new_url: &str) -> String {
    format!(
        "There are other reviewers on this page. <a href=\"{}\">Find a new page to review</a>",
        escape_html(find_new_url)
    )
}

/// 想定外の失敗で出すテキスト
pub fn renewal_failed_text(summary: &str) -> String {
    format!("Unable to reserve this page: {summary}")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
