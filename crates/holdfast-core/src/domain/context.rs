//! ActionContext - lease を保持している理由

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::KeeperError;

/// ActionContext は 409 (Conflict) の扱いだけを変える
///
/// - Editing: lease を失ったとみなし、blocking prompt を出して停止
/// - Reviewing: 警告を出して別の対象へ誘導する（lease state は変えない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionContext {
    Editing,
    Reviewing,
}

impl fmt::Display for ActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionContext::Editing => write!(f, "editing"),
            ActionContext::Reviewing => write!(f, "reviewing"),
        }
    }
}

impl FromStr for ActionContext {
    type Err = KeeperError;

    /// `transcribe` / `review` は既存ページが使う action type の名前
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "editing" | "edit" | "transcribe" => Ok(ActionContext::Editing),
            "reviewing" | "review" => Ok(ActionContext::Reviewing),
            other => Err(KeeperError::UnknownContext(other.to_string())),
        }
    }
}
