use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Backendが採番するBookのID。中身は不透明で、数値・文字列どちらの形でも受け取りそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    /// 桁数・表記（`1.0` など）を含めてそのまま保持する
    Number(Number),
    Text(String),
}

impl From<i64> for BookId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Number> for BookId {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for BookId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// `DELETE /books/{id}` のパスセグメントとして使う表記。
impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
