//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::{json, Value};

use book_manager::application::view::BookListView;
use book_manager::domain::backend::BookBackend;
use book_manager::domain::model::book::NewBookDraft;
use book_manager::domain::model::id::BookId;

// =============================================================================
// ScriptedBackend — テスト用backend
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("scripted backend failure")]
pub struct ScriptedError;

/// backendが受けた呼び出し。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchAll,
    Create(NewBookDraft),
    Delete(BookId),
}

/// 応答を順番に積んでおくbackend。積んだ分を使い切ったら
/// fetchは `[]`、create/deleteは成功を返す。
#[derive(Default)]
pub struct ScriptedBackend {
    fetches: RefCell<VecDeque<Result<Value, ScriptedError>>>,
    creates: RefCell<VecDeque<Result<(), ScriptedError>>>,
    deletes: RefCell<VecDeque<Result<(), ScriptedError>>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_fetch(self, body: Value) -> Self {
        self.fetches.borrow_mut().push_back(Ok(body));
        self
    }

    pub fn then_fetch_fails(self) -> Self {
        self.fetches.borrow_mut().push_back(Err(ScriptedError));
        self
    }

    pub fn then_create_fails(self) -> Self {
        self.creates.borrow_mut().push_back(Err(ScriptedError));
        self
    }

    pub fn then_delete_fails(self) -> Self {
        self.deletes.borrow_mut().push_back(Err(ScriptedError));
        self
    }

    /// 後から応答を積む（viewに渡した後でも使える）。
    pub fn push_fetch(&self, body: Value) {
        self.fetches.borrow_mut().push_back(Ok(body));
    }

    pub fn push_fetch_failure(&self) {
        self.fetches.borrow_mut().push_back(Err(ScriptedError));
    }

    pub fn push_create_failure(&self) {
        self.creates.borrow_mut().push_back(Err(ScriptedError));
    }

    pub fn push_delete_failure(&self) {
        self.deletes.borrow_mut().push_back(Err(ScriptedError));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

#[async_trait(?Send)]
impl BookBackend for ScriptedBackend {
    type Error = ScriptedError;

    async fn fetch_all(&self) -> Result<Value, Self::Error> {
        self.calls.borrow_mut().push(Call::FetchAll);
        self.fetches
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(json!([])))
    }

    async fn create(&self, draft: &NewBookDraft) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(Call::Create(draft.clone()));
        self.creates.borrow_mut().pop_front().unwrap_or(Ok(()))
    }

    async fn delete(&self, id: &BookId) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(Call::Delete(id.clone()));
        self.deletes.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn dune() -> Value {
    json!({"id": 1, "title": "Dune", "author": "Herbert"})
}

pub fn two_books() -> Value {
    json!([
        {"id": 1, "title": "Dune", "author": "Herbert"},
        {"id": "b-2", "title": "Neuromancer", "author": "Gibson"},
    ])
}

/// 初回取得まで済ませたviewを返す。呼び出し履歴はクリア済み。
pub async fn mounted_view(backend: ScriptedBackend) -> BookListView<ScriptedBackend> {
    let mut view = BookListView::new(backend);
    view.mount().await;
    view.backend().clear_calls();
    view
}
