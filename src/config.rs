use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_ENV: &str = "BOOK_MANAGER_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid backend URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("backend URL must be http or https: {0}")]
    UnsupportedScheme(String),
}

/// 起動時に一度だけ決まる設定。実行中には変わらない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_url: Url,
}

impl Config {
    /// 第1引数 → `BOOK_MANAGER_API_URL` → 既定値 の順に解決する。
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(API_URL_ENV).ok());
        Self::resolve(raw.as_deref())
    }

    pub fn resolve(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Ok(Self {
            api_url: parse_base_url(raw)?,
        })
    }

    /// 末尾が `/` に正規化されたbackendのベースURL。
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

/// `books` を設定したパスの下に連結できるよう、末尾に `/` を補う。
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
