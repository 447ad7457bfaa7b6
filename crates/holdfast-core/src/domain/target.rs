//! LeaseTarget - 予約対象の識別子
//!
//! renew と release は同じ URL に POST します。
//! review 中の conflict では `find_new_url` を案内に使います。

use serde::{Deserialize, Serialize};

use super::errors::KeeperError;

/// LeaseTarget は 1 つの予約エンドポイントを表す
///
/// LeaseKeeper の生存期間中は不変です。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseTarget {
    url: String,
    find_new_url: String,
}

impl LeaseTarget {
    /// 新しい LeaseTarget を作成
    ///
    /// 空の URL は `KeeperError::InvalidTarget` になります。
    pub fn new(
        url: impl Into<String>,
        find_new_url: impl Into<String>,
    ) -> Result<Self, KeeperError> {
        let url = url.into();
        let find_new_url = find_new_url.into();
        if url.trim().is_empty() {
            return Err(KeeperError::InvalidTarget("reservation url is empty".to_string()));
        }
        if find_new_url.trim().is_empty() {
            return Err(KeeperError::InvalidTarget("find-new url is empty".to_string()));
        }
        Ok(Self { url, find_new_url })
    }

    /// renew / release の送信先
    pub fn url(&self) -> &str {
        &self.url
    }

    /// 別の対象を探すためのリダイレクト先
    pub fn find_new_url(&self) -> &str {
        &self.find_new_url
    }
}
