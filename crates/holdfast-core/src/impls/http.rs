//! HttpTransport - reqwest による renewal
//!
//! `POST <url>` を送り、2xx を成功とみなします。本文は送りません。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::domain::{KeeperError, RenewalFailure};
use crate::ports::{RenewalTransport, TokenSource};

/// 失敗レスポンスの本文はこの長さまでしか残さない
const BODY_EXCERPT_LIMIT: usize = 200;

pub struct HttpTransport {
    client: reqwest::Client,
    csrf: Option<Arc<dyn TokenSource>>,
}

impl HttpTransport {
    /// タイムアウト付きの client を作る
    pub fn new(timeout: Duration) -> Result<Self, KeeperError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client, csrf: None }
    }

    /// renewal にも `X-CSRFToken` ヘッダーを付ける
    pub fn with_csrf_header(mut self, token: Arc<dyn TokenSource>) -> Self {
        self.csrf = Some(token);
        self
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl RenewalTransport for HttpTransport {
    async fn renew(&self, url: &str) -> Result<(), RenewalFailure> {
        let mut request = self.client.post(url).header(ACCEPT, "application/json");
        if let Some(token) = self.csrf.as_ref().and_then(|t| t.token()) {
            request = request.header("X-CSRFToken", token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RenewalFailure::network(e.to_string()))?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "renewal response");
        if status.is_success() {
            return Ok(());
        }

        let mut failure = RenewalFailure::http(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        );
        // 本文が読めなくても status だけで分類できる
        if let Ok(body) = response.text().await {
            let body = body.trim();
            if !body.is_empty() {
                failure = failure.with_error(excerpt(body));
            }
        }
        Err(failure)
    }
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LIMIT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
