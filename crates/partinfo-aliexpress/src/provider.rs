//! The Aliexpress provider façade.
//!
//! Composes one outbound GET per operation with the page parsers. No
//! retries, caching, or pagination happen here: a failed or slow request
//! surfaces directly as a transport error, and timeout policy lives on the
//! HTTP client built at construction time.

use std::time::Duration;

use async_trait::async_trait;
use partinfo_core::{
    InfoProvider, PartDetail, ProviderCapability, ProviderConfig, ProviderError, ProviderInfo,
    SearchHit,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use tracing::{debug, info};

use crate::detail::parse_detail;
use crate::search::parse_search_results;
use crate::urls::is_decimal;

/// Stable key namespacing this provider's ids.
pub(crate) const PROVIDER_KEY: &str = "aliexpress";

/// Production origin, without a trailing slash. The German storefront is
/// used because it reliably serves the Open-Graph price metadata the
/// detail parser reads.
const BASE_URL: &str = "https://de.aliexpress.com";

/// The legacy wholesale endpoint still accepts plain query parameters,
/// unlike the SEO search URLs.
const SEARCH_PATH: &str = "/wholesale";

const USER_AGENT: &str = "Part-DB-AliexpressProvider/1.0";
const ACCEPT_LANGUAGE_VALUE: &str = "de-DE,de;q=0.9,en;q=0.8";

/// Part information provider scraping `de.aliexpress.com`.
///
/// Carries no state besides the HTTP client and its configuration, so one
/// instance can serve concurrent callers.
pub struct AliexpressProvider {
    client: reqwest::Client,
    base_url: String,
    active: bool,
}

impl AliexpressProvider {
    /// Creates a provider pointed at the production site.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Self::with_base_url(config, BASE_URL)
    }

    /// Creates a provider with a custom base origin (for tests against a
    /// mock server). A trailing slash on `base_url` is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn with_base_url(config: &ProviderConfig, base_url: &str) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(ProviderError::transport)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            active: config.aliexpress_enabled,
        })
    }

    /// Issues one GET and returns the response body, forwarding transport
    /// failures (including non-2xx statuses) unchanged.
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(ProviderError::transport)?
            .error_for_status()
            .map_err(ProviderError::transport)?;

        response.text().await.map_err(ProviderError::transport)
    }
}

#[async_trait]
impl InfoProvider for AliexpressProvider {
    fn provider_key(&self) -> &'static str {
        PROVIDER_KEY
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "Aliexpress".to_string(),
            description: "Web scraping from aliexpress.com to get part information.".to_string(),
            url: "https://aliexpress.com/".to_string(),
            disabled_help: "Set PARTINFO_ALIEXPRESS_ENABLED=true to enable this provider."
                .to_string(),
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn capabilities(&self) -> &'static [ProviderCapability] {
        &[
            ProviderCapability::Basic,
            ProviderCapability::Picture,
            ProviderCapability::Price,
        ]
    }

    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<SearchHit>, ProviderError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}{SEARCH_PATH}", self.base_url);
        debug!(url = %url, keyword, "fetching search results page");
        let body = self
            .fetch(&url, &[("SearchText", keyword), ("CatId", "0"), ("d", "y")])
            .await?;

        let hits = parse_search_results(&body, &self.base_url);
        info!(keyword, hits = hits.len(), "search completed");
        Ok(hits)
    }

    async fn get_details(&self, id: &str) -> Result<PartDetail, ProviderError> {
        if !is_decimal(id) {
            return Err(ProviderError::InvalidProductId { id: id.to_string() });
        }

        let product_url = format!("{}/item/{id}.html", self.base_url);
        debug!(url = %product_url, "fetching product detail page");
        let body = self.fetch(&product_url, &[]).await?;

        Ok(parse_detail(&body, id, &product_url))
    }
}
