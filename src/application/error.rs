type Cause = Box<dyn std::error::Error + Send + Sync>;

/// 画面に出すエラー。文言は固定で、原因はログ用に `source` として保持する。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch books")]
    FetchFailed(#[source] Cause),

    #[error("Failed to add book")]
    CreateFailed(#[source] Cause),

    #[error("Failed to delete book")]
    DeleteFailed(#[source] Cause),
}
