//! Character API adapter
//!
//! Fetches one page of characters from the remote API and maps the response
//! into a `PageResult`. Every fetch is bracketed by the loading indicator,
//! and failures are surfaced on the error banner before being returned.

use crate::model::character::{CharacterPage, PageResult};
use crate::model::surface::UiSurface;
use async_trait::async_trait;
use std::time::Duration;

/// Default endpoint of the public character API
pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api/character";

/// Failure to obtain a page. All variants are reported the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, ...)
    #[error("{0}")]
    Request(String),
    /// The API answered with a non-2xx status
    #[error("Erro na API: {status} {reason}")]
    Status { status: u16, reason: String },
    /// The body was not the expected JSON shape
    #[error("Resposta inválida da API: {0}")]
    Decode(String),
    #[error("Página inválida: {0}")]
    InvalidPage(u32),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e.to_string())
    }
}

/// Paginated source of character records
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch page `page` (1-based)
    async fn fetch_page(&self, page: u32) -> Result<PageResult, FetchError>;
}

/// `CharacterSource` backed by the HTTP API
pub struct HttpCharacterSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCharacterSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Request URL for a page
    pub fn page_url(&self, page: u32) -> String {
        format!("{}?page={}", self.base_url, page)
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    async fn fetch_page(&self, page: u32) -> Result<PageResult, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage(page));
        }

        let url = self.page_url(page);
        tracing::info!(%url, "fetching characters");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        let page: CharacterPage =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let result = PageResult::from(page);

        tracing::info!(
            items = result.items.len(),
            total_pages = result.total_pages,
            "characters received"
        );
        Ok(result)
    }
}

/// Open the loading bracket: indicator visible, stale banner cleared
pub fn begin_fetch(surface: &mut dyn UiSurface) {
    surface.set_loading(true);
    surface.hide_error();
}

/// Close the loading bracket. On failure the banner shows the message and
/// the error is handed back to the caller.
pub fn end_fetch(
    surface: &mut dyn UiSurface,
    result: Result<PageResult, FetchError>,
) -> Result<PageResult, FetchError> {
    surface.set_loading(false);
    if let Err(ref e) = result {
        tracing::error!(error = %e, "failed to fetch characters");
        surface.show_error(&format!("Erro ao carregar personagens: {}", e));
    }
    result
}
