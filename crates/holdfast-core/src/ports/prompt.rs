//! BlockingPrompt port - lease を失ったときのモーダル

/// lease が回復不能になったときに 1 回呼ばれる
pub trait BlockingPrompt: Send + Sync {
    fn show(&self);
}
