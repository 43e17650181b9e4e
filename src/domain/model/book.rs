use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::id::BookId;
use crate::domain::error::DomainError;

/// Backendが所有するレコード。idは必須、title/authorは欠けていれば空文字として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    #[serde(default, deserialize_with = "lenient_text")]
    title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    author: String,
}

/// 表示用テキストとして読む。nullは空文字、文字列以外はJSON表記のまま。
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

impl Book {
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

/// フォームの入力欄。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Author,
}

/// 未送信の新規Book入力。クライアント内だけに存在し、送信成功で空に戻る。
/// シリアライズ結果がそのまま `POST /books` のペイロードになる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewBookDraft {
    title: String,
    author: String,
}

impl NewBookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Author => &self.author,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Title => self.title = value.into(),
            DraftField::Author => self.author = value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
    }

    /// 送信前の存在チェック。trimはしない（空白だけの入力も「入力あり」）。
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.is_empty() || self.author.is_empty() {
            return Err(DomainError::MissingFields);
        }
        Ok(())
    }
}
