use serde_json::Value;

use super::book::Book;
use super::id::BookId;
use crate::domain::error::CollectionError;

/// Backendが返した順序のままのBook列。取得のたびに丸ごと置き換える。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// `GET /books` のレスポンスボディから組み立てる。
    ///
    /// - 配列 → 各要素をBookとして読む（1つでも読めなければエラー）
    /// - 配列以外（object, null, 数値…） → 空の一覧
    pub fn from_response(body: Value) -> Result<Self, CollectionError> {
        let items = match body {
            Value::Array(items) => items,
            other => {
                tracing::warn!(
                    kind = json_kind(&other),
                    "book list response is not an array; treating as empty"
                );
                return Ok(Self::default());
            }
        };

        let books = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<Book>(item)
                    .map_err(|source| CollectionError::MalformedRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { books })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, id: &BookId) -> bool {
        self.books.iter().any(|b| b.id() == id)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
