//! Terminal front end for BookListView
//!
//! stdin (1 line = 1 command) <-> BookListView handlers -> render_markdown -> stdout
//!
//! commands: title, author, add, remove, help, quit

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::application::render::{render_markdown, Page};
use crate::application::view::BookListView;
use crate::config::Config;
use crate::domain::backend::BookBackend;
use crate::domain::model::book::DraftField;
use crate::infra::http_backend::HttpBookBackend;

pub const HELP: &str = "\
Commands:
  title <text>   set the title field
  author <text>  set the author field
  add            add the book in the form
  remove <n>     remove the book in row n
  help           show this help
  quit           exit
";

// =============================================================================
// Public entry point
// =============================================================================

/// 設定されたbackendに接続し、stdin/stdoutでセッションを回す。
pub async fn run(config: Config) -> anyhow::Result<()> {
    tracing::info!(api_url = %config.api_url(), "starting book manager");
    let backend = HttpBookBackend::new(config.api_url().clone());
    let mut view = BookListView::new(backend);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_session(&mut view, stdin, stdout).await
}

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(DraftField, String),
    Add,
    /// 表示上の行番号（1始まり）
    Remove(usize),
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: '{0}' (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid row number: '{0}'")]
    InvalidRow(String),
}

/// 1行をコマンドに変換する。空行は `Ok(None)`。
///
/// `title` / `author` の値は区切りの空白1つの後ろをそのまま使う（trimしない）。
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }

    // 最初の空白1文字で区切る。値側の空白はそのまま残す
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let command = match word.to_ascii_lowercase().as_str() {
        "title" => Command::Set(DraftField::Title, rest.to_string()),
        "author" => Command::Set(DraftField::Author, rest.to_string()),
        "add" => Command::Add,
        "remove" | "rm" => Command::Remove(parse_row(rest.trim())?),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn parse_row(arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument("remove"));
    }
    arg.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| CommandError::InvalidRow(arg.to_string()))
}

// =============================================================================
// Session loop
// =============================================================================

/// 入力が尽きるか `quit` までコマンドを処理する。
///
/// 最初に読み込み中の画面を出してから初回取得を行い、
/// 以後は状態を変えたコマンドのたびに画面全体を描き直す。
pub async fn run_session<B, R, W>(
    view: &mut BookListView<B>,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    B: BookBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_page(&mut output, &view.render()).await?;
    view.mount().await;
    write_page(&mut output, &view.render()).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                write_notice(&mut output, &e.to_string()).await?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                output.write_all(HELP.as_bytes()).await?;
                output.flush().await?;
            }
            Command::Set(field, value) => {
                view.update_field(field, value);
                write_page(&mut output, &view.render()).await?;
            }
            Command::Add => match view.submit().await {
                Ok(()) => write_page(&mut output, &view.render()).await?,
                Err(e) => write_notice(&mut output, &e.to_string()).await?,
            },
            Command::Remove(number) => {
                let id = view.render().row(number).map(|row| row.id.clone());
                match id {
                    Some(id) => {
                        view.delete_one(&id).await;
                        write_page(&mut output, &view.render()).await?;
                    }
                    None => {
                        write_notice(&mut output, &format!("No book in row {number}")).await?;
                    }
                }
            }
        }
    }

    output.flush().await?;
    Ok(())
}

async fn write_page<W: AsyncWrite + Unpin>(output: &mut W, page: &Page) -> std::io::Result<()> {
    output.write_all(render_markdown(page).as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

/// ブロッキング通知。画面は描き直さない。
async fn write_notice<W: AsyncWrite + Unpin>(output: &mut W, message: &str) -> std::io::Result<()> {
    output.write_all(format!("! {message}\n").as_bytes()).await?;
    output.flush().await
}
