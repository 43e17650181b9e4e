#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Both title and author are required!")]
    MissingFields,
}

/// 一覧レスポンスの配列要素がBookとして読めなかった。
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("malformed book record at index {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
