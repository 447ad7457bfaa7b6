//! Outcome model: the verdict of one renewal attempt.
//!
//! This module is transport-agnostic: it does not assume reqwest or any
//! particular server. It only defines the "shape" of a renewal result and how
//! a failed response is classified.

use serde::{Deserialize, Serialize};

/// Response metadata of a failed renewal.
///
/// `status == None` means the request never produced an HTTP response
/// (connection refused, timeout, DNS, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalFailure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    /// Underlying error text (transport error or response body excerpt).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenewalFailure {
    /// A rejection carrying an HTTP status.
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            status_text: Some(status_text.into()),
            error: None,
        }
    }

    /// A failure below HTTP (no response at all).
    pub fn network(error: impl Into<String>) -> Self {
        Self {
            status: None,
            status_text: None,
            error: Some(error.into()),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Why the server refused to renew.
///
/// We serialize as SCREAMING_SNAKE_CASE so logged outcomes read
/// CONFLICT / EXPIRED / OTHER.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "reason")]
pub enum RejectReason {
    /// 409: another holder owns the resource.
    Conflict,

    /// 408: the renewal arrived after the server's timeout window.
    Expired,

    /// Any other status, or a network-level failure.
    Other {
        status: Option<u16>,
        detail: String,
    },
}

impl RejectReason {
    /// Classify a failed renewal by its HTTP status.
    pub fn classify(failure: &RenewalFailure) -> Self {
        match failure.status {
            Some(409) => RejectReason::Conflict,
            Some(408) => RejectReason::Expired,
            status => RejectReason::Other {
                status,
                detail: failure
                    .error
                    .clone()
                    .or_else(|| failure.status_text.clone())
                    .unwrap_or_default(),
            },
        }
    }

    /// Conflict and Expired mean the lease is gone for this session.
    pub fn is_lease_lost(&self) -> bool {
        matches!(self, RejectReason::Conflict | RejectReason::Expired)
    }
}

/// The result of one renewal attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum RenewalOutcome {
    Success,
    Rejected(RejectReason),
}

impl RenewalOutcome {
    pub fn from_result(result: &Result<(), RenewalFailure>) -> Self {
        match result {
            Ok(()) => RenewalOutcome::Success,
            Err(failure) => RenewalOutcome::Rejected(RejectReason::classify(failure)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RenewalOutcome::Success)
    }
}
