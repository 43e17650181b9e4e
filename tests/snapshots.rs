//! Snapshot tests — render_markdown output regression detection.

mod common;

use common::{mounted_view, two_books, ScriptedBackend};
use insta::assert_snapshot;
use serde_json::json;

use book_manager::application::render::render_markdown;
use book_manager::application::view::BookListView;
use book_manager::domain::model::book::DraftField;

#[test]
fn snapshot_loading() {
    let view = BookListView::new(ScriptedBackend::new());
    assert_snapshot!(render_markdown(&view.render()), @"Loading...");
}

#[tokio::test]
async fn snapshot_populated() {
    let view = mounted_view(ScriptedBackend::new().then_fetch(two_books())).await;
    assert_snapshot!(render_markdown(&view.render()), @r###"
## Book Management

- Title: ""
- Author: ""
- [Add Book]

| Title | Author | Actions |
|---|---|---|
| Dune | Herbert | [Remove 1] |
| Neuromancer | Gibson | [Remove 2] |
"###);
}

#[tokio::test]
async fn snapshot_empty_with_error_and_draft() {
    let mut view = mounted_view(ScriptedBackend::new().then_fetch_fails()).await;
    view.update_field(DraftField::Title, "Foo");

    assert_snapshot!(render_markdown(&view.render()), @r###"
## Book Management

> Failed to fetch books

- Title: "Foo"
- Author: ""
- [Add Book]

| Title | Author | Actions |
|---|---|---|
| No books available | | |
"###);
}

#[tokio::test]
async fn snapshot_cells_stay_on_one_line() {
    let body = json!([{"id": 9, "title": "Either|Or", "author": "Søren\nKierkegaard"}]);
    let view = mounted_view(ScriptedBackend::new().then_fetch(body)).await;

    assert_snapshot!(render_markdown(&view.render()), @r###"
## Book Management

- Title: ""
- Author: ""
- [Add Book]

| Title | Author | Actions |
|---|---|---|
| Either\|Or | Søren Kierkegaard | [Remove 1] |
"###);
}
