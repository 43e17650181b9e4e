use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::domain::backend::BookBackend;
use crate::domain::model::book::NewBookDraft;
use crate::domain::model::id::BookId;

#[derive(Debug, thiserror::Error)]
pub enum HttpBackendError {
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("API URL cannot be a base: {0}")]
    NotABase(Url),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// REST backend（`{base}/books`）に対するBookBackend実装。
pub struct HttpBookBackend {
    base_url: Url,
    client: Client,
}

impl HttpBookBackend {
    /// `base_url` は `/` で終わっていること（`books` をその下に連結するため）。
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self { base_url, client }
    }

    fn books_url(&self) -> Result<Url, HttpBackendError> {
        let url = self.base_url.join("books")?;
        tracing::trace!(%url, "API URL");
        Ok(url)
    }

    /// IDはパスセグメントとしてエスケープして連結する。
    fn book_url(&self, id: &BookId) -> Result<Url, HttpBackendError> {
        let mut url = self.books_url()?;
        url.path_segments_mut()
            .map_err(|()| HttpBackendError::NotABase(self.base_url.clone()))?
            .push(&id.to_string());
        Ok(url)
    }
}

/// 2xx以外はすべて失敗として扱う。
fn check_status(response: Response) -> Result<Response, HttpBackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(HttpBackendError::Status(status));
    }
    Ok(response)
}

#[async_trait(?Send)]
impl BookBackend for HttpBookBackend {
    type Error = HttpBackendError;

    async fn fetch_all(&self) -> Result<Value, Self::Error> {
        let url = self.books_url()?;
        tracing::debug!(%url, "GET");
        let response = check_status(self.client.get(url).send().await?)?;
        let bytes = response.bytes().await?;

        // JSONとして読めないボディは文字列として渡す（一覧側で「配列でない」扱いになる）
        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::debug!("book list body is not JSON: {e}");
                Ok(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
            }
        }
    }

    async fn create(&self, draft: &NewBookDraft) -> Result<(), Self::Error> {
        let url = self.books_url()?;
        tracing::debug!(%url, "POST");
        check_status(self.client.post(url).json(draft).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: &BookId) -> Result<(), Self::Error> {
        let url = self.book_url(id)?;
        tracing::debug!(%url, "DELETE");
        check_status(self.client.delete(url).send().await?)?;
        Ok(())
    }
}
