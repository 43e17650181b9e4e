use crate::domain::model::id::BookId;

use super::view::ViewState;

pub const HEADING: &str = "Book Management";
pub const LOADING: &str = "Loading...";
pub const EMPTY_PLACEHOLDER: &str = "No books available";

/// 画面全体の描画モデル。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// 初回取得が終わるまで
    Loading,
    Ready(BookListPage),
}

impl Page {
    /// 表示上の行番号（1始まり）から行を引く。
    pub fn row(&self, number: usize) -> Option<&RowView> {
        match self {
            Page::Ready(page) => page.rows().iter().find(|r| r.number == number),
            Page::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListPage {
    pub heading: &'static str,
    pub error: Option<String>,
    pub form: FormView,
    pub table: TableBody,
}

impl BookListPage {
    pub fn rows(&self) -> &[RowView] {
        match &self.table {
            TableBody::Rows(rows) => rows,
            TableBody::Empty => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RowView>),
    /// 一覧が空なら空のtbodyではなくプレースホルダ行を1行出す
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub number: usize,
    pub id: BookId,
    pub title: String,
    pub author: String,
}

/// 状態 → 描画モデル。副作用なし。
pub fn render(state: &ViewState) -> Page {
    if state.is_loading() {
        return Page::Loading;
    }

    let books = state.collection().books();
    let table = if books.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Rows(
            books
                .iter()
                .enumerate()
                .map(|(i, book)| RowView {
                    number: i + 1,
                    id: book.id().clone(),
                    title: book.title().to_string(),
                    author: book.author().to_string(),
                })
                .collect(),
        )
    };

    Page::Ready(BookListPage {
        heading: HEADING,
        error: state.error().map(ToString::to_string),
        form: FormView {
            title: state.draft().title().to_string(),
            author: state.draft().author().to_string(),
        },
        table,
    })
}

/// 描画モデルをMarkdown風テキストに変換する。
pub fn render_markdown(page: &Page) -> String {
    let mut buf = String::new();

    let page = match page {
        Page::Loading => {
            buf.push_str(LOADING);
            buf.push('\n');
            return buf;
        }
        Page::Ready(page) => page,
    };

    buf.push_str(&format!("## {}\n\n", page.heading));

    if let Some(error) = &page.error {
        buf.push_str(&format!("> {error}\n\n"));
    }

    buf.push_str(&format!("- Title: {:?}\n", page.form.title));
    buf.push_str(&format!("- Author: {:?}\n", page.form.author));
    buf.push_str("- [Add Book]\n\n");

    buf.push_str("| Title | Author | Actions |\n");
    buf.push_str("|---|---|---|\n");
    match &page.table {
        TableBody::Rows(rows) => {
            for row in rows {
                buf.push_str(&format!(
                    "| {} | {} | [Remove {}] |\n",
                    escape_cell(&row.title),
                    escape_cell(&row.author),
                    row.number
                ));
            }
        }
        TableBody::Empty => {
            buf.push_str(&format!("| {EMPTY_PLACEHOLDER} | | |\n"));
        }
    }

    buf
}

/// 1レコード = 1行を保つため、改行とパイプをエスケープする。
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace("\r\n", " ").replace(['\r', '\n'], " ")
}
