use async_trait::async_trait;
use serde_json::Value;

use super::model::book::NewBookDraft;
use super::model::id::BookId;

/// Book一覧を持つ外部REST backendの抽象。Infra層が実装する。
///
/// viewは単一タスク上で動くため `?Send`。
#[async_trait(?Send)]
pub trait BookBackend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// `GET /books`。ボディの形は検査せずそのまま返す。
    async fn fetch_all(&self) -> Result<Value, Self::Error>;

    /// `POST /books`。レスポンスボディは捨てる。
    async fn create(&self, draft: &NewBookDraft) -> Result<(), Self::Error>;

    /// `DELETE /books/{id}`。レスポンスボディは捨てる。
    async fn delete(&self, id: &BookId) -> Result<(), Self::Error>;
}
