//! ErrorFormatter port - 失敗の要約文字列を作る

use crate::domain::RenewalFailure;

pub trait ErrorFormatter: Send + Sync {
    fn format_error(&self, failure: &RenewalFailure) -> String;
}
