//! book-manager
//!
//! REST backend <-> BookListView (state + handlers) -> Page -> terminal
//!
//! - `domain`: Book / Draft / Collection と backend trait
//! - `application`: view の状態遷移と純粋な render
//! - `infra`: reqwest による backend 実装
//! - `interface`: stdin/stdout のセッションループ

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod interface;
