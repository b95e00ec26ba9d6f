//! Output records produced by info providers.
//!
//! All records are immutable value types: constructed once by a provider's
//! parsers and never mutated afterwards. Persistence is the embedding
//! application's concern, so everything here is plain serde-friendly data.

use serde::{Deserialize, Serialize};

/// A lightweight record describing one item found by keyword search.
///
/// Search surfaces carry no taxonomy data; `category`, `manufacturer`,
/// `mpn`, `manufacturing_status`, and `footprint` are only ever filled by a
/// detail lookup. A provider that cannot determine a stable id or a usable
/// name for a result emits nothing for it rather than a partial record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Key of the provider that produced this hit (e.g. `"aliexpress"`).
    pub provider_key: String,
    /// Canonical product id on the source site. Always a plain decimal
    /// digit string, stable across the URL shapes the site exposes.
    pub provider_id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub mpn: Option<String>,
    /// Absolute URL of a preview image, if the result card had one.
    #[serde(default)]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub manufacturing_status: Option<String>,
    /// Absolute, query-stripped URL of the product page.
    pub provider_url: String,
    #[serde(default)]
    pub footprint: Option<String>,
}

/// A single price point within a [`VendorOffer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceOffer {
    /// Minimum order quantity this price applies from. At least 1.
    pub minimum_quantity: u32,
    /// Price as a decimal string, kept verbatim to avoid float rounding.
    pub price: String,
    /// ISO 4217 currency code (e.g. `"USD"`, `"EUR"`).
    pub currency: String,
    /// Whether the price includes tax. Sources that never disambiguate
    /// this report `false`.
    pub includes_tax: bool,
}

/// A distributor-scoped purchasing record: who sells the part, under which
/// reference, at which prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorOffer {
    /// Display name of the vendor (e.g. `"Aliexpress"`).
    pub vendor_name: String,
    /// The vendor's order reference for this part.
    pub order_reference: String,
    pub offers: Vec<PriceOffer>,
    /// Absolute URL of the vendor's product page.
    pub product_url: String,
}

/// The full record for one product, as derived from a detail lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartDetail {
    /// Key of the provider that produced this record.
    pub provider_key: String,
    /// Canonical product id on the source site; decimal digits only.
    pub provider_id: String,
    /// Display name. Never empty: providers fall back to the raw id when
    /// no title is recoverable from the page.
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub preview_image_url: Option<String>,
    /// Absolute URL of the product page this record was derived from.
    pub provider_url: String,
    /// Rich inline documentation HTML when the page exposes it, else the
    /// short description, else absent.
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub vendor_offers: Vec<VendorOffer>,
}

impl PartDetail {
    /// Returns the first price offer across all vendor offers, if any.
    #[must_use]
    pub fn first_price(&self) -> Option<&PriceOffer> {
        self.vendor_offers.iter().find_map(|v| v.offers.first())
    }

    /// Returns `true` if at least one vendor offer carries a price.
    #[must_use]
    pub fn has_pricing(&self) -> bool {
        self.first_price().is_some()
    }
}
