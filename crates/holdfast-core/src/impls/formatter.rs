//! DefaultErrorFormatter - 失敗の要約
//!
//! `"<status> <status text>: <error>"` の形にまとめます。
//! 欠けている部分は省略します。

use crate::domain::RenewalFailure;
use crate::ports::ErrorFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorFormatter;

impl ErrorFormatter for DefaultErrorFormatter {
    fn format_error(&self, failure: &RenewalFailure) -> String {
        let head = match (failure.status, failure.status_text.as_deref()) {
            (Some(status), Some(text)) if !text.is_empty() => format!("{status} {text}"),
            (Some(status), _) => status.to_string(),
            (None, _) => String::new(),
        };
        let error = failure.error.as_deref().filter(|e| !e.is_empty());

        match (head.is_empty(), error) {
            (false, Some(error)) if Some(error) != failure.status_text.as_deref() => {
                format!("{head}: {error}")
            }
            (false, _) => head,
            (true, Some(error)) => error.to_string(),
            (true, None) => "unknown error".to_string(),
        }
    }
}
