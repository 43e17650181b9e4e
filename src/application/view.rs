use tracing::Instrument;
use uuid::Uuid;

use crate::domain::backend::BookBackend;
use crate::domain::error::DomainError;
use crate::domain::model::book::{DraftField, NewBookDraft};
use crate::domain::model::collection::BookCollection;
use crate::domain::model::id::BookId;

use super::error::AppError;
use super::render::{self, Page};

/// 初回取得が終わるまでは `Initializing`。以後はずっと `Loaded`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Initializing,
    Loaded,
}

/// viewが持つ状態のすべて。handlerだけが変更する。
#[derive(Debug, Default)]
pub struct ViewState {
    phase: Phase,
    collection: BookCollection,
    draft: NewBookDraft,
    /// 直近の失敗。成功しても消えず、次の失敗で上書きされる。
    error: Option<AppError>,
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Initializing
    }

    pub fn collection(&self) -> &BookCollection {
        &self.collection
    }

    pub fn draft(&self) -> &NewBookDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }
}

/// Book一覧画面。
/// handlerが状態を更新し、呼び出し側が `render` で描き直す。
/// 変更系の操作が成功したら必ず一覧を丸ごと取り直す（差分更新はしない）。
pub struct BookListView<B: BookBackend> {
    backend: B,
    state: ViewState,
}

impl<B: BookBackend> BookListView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ViewState::default(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn render(&self) -> Page {
        render::render(&self.state)
    }

    /// 初期化時の一覧取得。
    pub async fn mount(&mut self) {
        self.load_all().await;
    }

    /// 一覧を取得して置き換える。失敗時は前回の一覧を残す。
    pub async fn load_all(&mut self) {
        let span = tracing::info_span!("load_all", action_id = %Uuid::new_v4());
        self.refresh().instrument(span).await;
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.draft.set(field, value);
    }

    /// 入力中のBookを登録する。
    ///
    /// 未入力の欄があれば通信せずに `DomainError` を返す（呼び出し側がブロッキング通知を出す）。
    /// 登録に失敗した場合は入力内容を残す。
    pub async fn submit(&mut self) -> Result<(), DomainError> {
        let span = tracing::info_span!("submit", action_id = %Uuid::new_v4());
        async move {
            if let Err(e) = self.state.draft.validate() {
                tracing::info!("submit rejected: {e}");
                return Err(e);
            }

            tracing::debug!(title = self.state.draft.title(), "creating book");
            match self.backend.create(&self.state.draft).await {
                Ok(()) => {
                    self.state.draft.clear();
                    self.refresh().await;
                }
                Err(e) => self.fail(AppError::CreateFailed(Box::new(e))),
            }
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// 指定IDのBookを削除してから一覧を取り直す。楽観的な削除はしない。
    pub async fn delete_one(&mut self, id: &BookId) {
        let span = tracing::info_span!("delete_one", action_id = %Uuid::new_v4(), %id);
        async move {
            tracing::debug!("deleting book");
            match self.backend.delete(id).await {
                Ok(()) => self.refresh().await,
                Err(e) => self.fail(AppError::DeleteFailed(Box::new(e))),
            }
        }
        .instrument(span)
        .await
    }

    // --- private ---

    async fn refresh(&mut self) {
        let loaded = match self.backend.fetch_all().await {
            Ok(body) => BookCollection::from_response(body)
                .map_err(|e| AppError::FetchFailed(Box::new(e))),
            Err(e) => Err(AppError::FetchFailed(Box::new(e))),
        };

        match loaded {
            Ok(collection) => {
                tracing::debug!(count = collection.len(), "book list loaded");
                self.state.collection = collection;
            }
            Err(err) => self.fail(err),
        }

        self.state.phase = Phase::Loaded;
    }

    fn fail(&mut self, err: AppError) {
        let cause = std::error::Error::source(&err)
            .map(ToString::to_string)
            .unwrap_or_default();
        tracing::warn!(%cause, "{err}");
        self.state.error = Some(err);
    }
}
