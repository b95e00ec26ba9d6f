//! Provider abstraction shared by all part information sources.
//!
//! A provider wraps one external catalog or shop site and exposes keyword
//! search plus detail lookup over it. Implementations live in their own
//! crates; this module only carries the contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::{PartDetail, SearchHit};

/// Static metadata describing a provider to the embedding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Human-readable display name.
    pub name: String,
    pub description: String,
    /// Homepage of the upstream data source.
    pub url: String,
    /// Shown to users when the provider is disabled, explaining how to
    /// turn it on.
    pub disabled_help: String,
}

/// What kind of part data a provider can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderCapability {
    /// Basic fields: name, description, URL.
    Basic,
    Footprint,
    /// A preview/product image.
    Picture,
    Datasheet,
    /// Price and vendor offer data.
    Price,
}

/// Errors surfaced by provider operations.
///
/// Only structurally invalid input fails a call outright. Extraction
/// problems (missing fields, unparseable prices, malformed markup) degrade
/// to absent fields or skipped records and never show up here. Transport
/// failures pass through wrapped but otherwise unchanged, so callers can
/// downcast to the transport's own error type if they need its taxonomy.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid product id \"{id}\": expected decimal digits")]
    InvalidProductId { id: String },

    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
    /// Wraps a transport-layer error (the orphan rule keeps a blanket
    /// `From` impl for foreign error types out of this crate).
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}

/// Contract implemented by every part information source.
#[async_trait]
pub trait InfoProvider: Send + Sync {
    /// Stable key used to namespace ids across providers (e.g.
    /// `"aliexpress"`).
    fn provider_key(&self) -> &'static str;

    /// Display metadata for the provider.
    fn provider_info(&self) -> ProviderInfo;

    /// Whether the provider is currently enabled.
    fn is_active(&self) -> bool;

    /// The capability set this provider's source can actually supply.
    fn capabilities(&self) -> &'static [ProviderCapability];

    /// Searches the source by free-text keyword.
    ///
    /// Empty or whitespace-only keywords return an empty list without any
    /// network traffic.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] if the request fails or the
    /// server answers with a non-success status.
    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<SearchHit>, ProviderError>;

    /// Fetches the full detail record for one product id.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::InvalidProductId`] if `id` is not a plain
    ///   decimal digit string (checked before any I/O).
    /// - [`ProviderError::Transport`] if the request fails or the server
    ///   answers with a non-success status.
    async fn get_details(&self, id: &str) -> Result<PartDetail, ProviderError>;
}
