//! TokenSource port - anti-forgery token の読み取り

/// token は teardown のたびに読み直す（読み取り専用）
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}
