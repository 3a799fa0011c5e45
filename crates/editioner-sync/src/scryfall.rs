//! Scryfall card search client.

use std::time::Duration;

use editioner_core::SearchCard;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};

use crate::FetchError;
use crate::page::{SearchPage, UniqueMode, set_query};

pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// Scryfall asks clients to wait 50-100 ms between requests.
const PAGE_DELAY: Duration = Duration::from_millis(100);

/// Client for Scryfall's `/cards/search` endpoint.
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client for the given base URL, e.g. `https://api.scryfall.com`.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("editioner/", env!("CARGO_PKG_VERSION"))),
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every card of a set, following `next_page` links until the last
    /// page. Any non-success response aborts the whole fetch.
    pub async fn fetch_search(
        &self,
        set_code: &str,
        include_extras: bool,
        unique: UniqueMode,
    ) -> Result<Vec<SearchCard>, FetchError> {
        let query = set_query(set_code, include_extras);
        let first = self
            .client
            .get(format!("{}/cards/search", self.base_url))
            .query(&[
                ("q", query.as_str()),
                ("order", "set"),
                ("unique", unique.as_str()),
                ("page", "1"),
            ]);

        let mut cards = Vec::new();
        let mut request = first;
        let mut page_no = 1usize;

        loop {
            let page = self.get_page(request).await?;
            cards.extend(page.data);
            info!(
                set_code,
                page = page_no,
                cards = cards.len(),
                total = page.total_cards,
                "fetched search page"
            );

            if !page.has_more {
                break;
            }
            let Some(next) = page.next_page else {
                return Err(FetchError::MissingNextPage {
                    set_code: set_code.to_string(),
                    page: page_no,
                });
            };

            tokio::time::sleep(PAGE_DELAY).await;
            // The link already carries q/order/unique.
            request = self.client.get(next);
            page_no += 1;
        }

        Ok(cards)
    }

    async fn get_page(&self, request: reqwest::RequestBuilder) -> Result<SearchPage, FetchError> {
        let resp = request.send().await?;
        let url = resp.url().to_string();
        let status = resp.status();
        debug!(url = %url, status = status.as_u16(), "search response");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Server {
                url,
                status: status.as_u16(),
                body,
            });
        }
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
