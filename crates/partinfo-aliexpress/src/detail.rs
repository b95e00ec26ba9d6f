//! Product detail page parsing.
//!
//! Item pages expose their reliable data through Open-Graph metadata; the
//! visible markup differs per layout generation and is only used as a
//! fallback. Every extraction step is best-effort: a missing or malformed
//! field degrades to an absent value and never fails the record.

use std::str::FromStr;

use partinfo_core::{PartDetail, PriceOffer, VendorOffer};
use regex::Regex;
use rust_decimal::Decimal;
use scraper::Html;
use tracing::debug;

use crate::html::{first_attr, first_inner_html, first_text};
use crate::provider::PROVIDER_KEY;
use crate::urls::ensure_https;

const OG_TITLE: &str = r#"meta[property="og:title"]"#;
const OG_DESCRIPTION: &str = r#"meta[property="og:description"]"#;
const OG_IMAGE: &str = r#"meta[property="og:image"]"#;
const OG_PRICE_AMOUNT: &str = r#"meta[property="og:price:amount"]"#;
const OG_PRICE_CURRENCY: &str = r#"meta[property="og:price:currency"]"#;
/// Visible page title, used when the Open-Graph title is missing.
const TITLE_FALLBACK: &str = "h1";
/// Container holding the seller's rich inline product documentation.
const DESCRIPTION_CONTAINER: &str = "#product-description";

/// The page metadata never states whether tax is included, so the price
/// currency falls back to the storefront default.
const DEFAULT_CURRENCY: &str = "USD";
const VENDOR_NAME: &str = "Aliexpress";

/// Parses a product detail page into a [`PartDetail`].
///
/// `id` must already be validated as an all-digit string by the caller;
/// it is consumed as the canonical identifier and as the name of last
/// resort. `product_url` is the URL the page was fetched from.
#[must_use]
pub fn parse_detail(html: &str, id: &str, product_url: &str) -> PartDetail {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let name = first_attr(root, OG_TITLE, "content")
        .or_else(|| first_text(root, TITLE_FALLBACK))
        .unwrap_or_else(|| id.to_string());

    let short_description = first_attr(root, OG_DESCRIPTION, "content");

    let notes_html = first_inner_html(root, DESCRIPTION_CONTAINER)
        .and_then(|markup| strip_scripts(&markup));

    let preview_image_url = first_attr(root, OG_IMAGE, "content").map(|url| ensure_https(&url));

    let currency =
        first_attr(root, OG_PRICE_CURRENCY, "content").unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    let price = first_attr(root, OG_PRICE_AMOUNT, "content").and_then(|raw| {
        let normalized = normalize_price(&raw);
        if normalized.is_none() {
            debug!(raw = %raw, "discarding price without numeric content");
        }
        normalized
    });

    let vendor_offers = price
        .map(|price| {
            vec![VendorOffer {
                vendor_name: VENDOR_NAME.to_string(),
                order_reference: id.to_string(),
                offers: vec![PriceOffer {
                    minimum_quantity: 1,
                    price,
                    currency,
                    includes_tax: false,
                }],
                product_url: product_url.to_string(),
            }]
        })
        .unwrap_or_default();

    let notes = notes_html.or_else(|| short_description.clone());

    PartDetail {
        provider_key: PROVIDER_KEY.to_string(),
        provider_id: id.to_string(),
        name,
        description: short_description.unwrap_or_default(),
        preview_image_url,
        provider_url: product_url.to_string(),
        notes,
        vendor_offers,
    }
}

/// Strips `<script>` blocks from seller-supplied description markup so
/// stored notes never carry executable content. One case-insensitive,
/// non-greedy pass, not a full sanitizer. Markup that is empty once
/// stripped counts as absent.
fn strip_scripts(markup: &str) -> Option<String> {
    let script_re =
        Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("valid script strip regex");
    let stripped = script_re.replace_all(markup, "");
    if stripped.trim().is_empty() {
        None
    } else {
        Some(stripped.into_owned())
    }
}

/// Normalizes a raw Open-Graph price amount to a decimal string.
///
/// Commas are treated as mis-encoded decimal separators and replaced with
/// periods. When the result still is not a parseable decimal, the first
/// run of digits/periods/commas in the raw value is extracted and
/// normalized the same way. `None` when the value has no such run at all.
fn normalize_price(raw: &str) -> Option<String> {
    let normalized = raw.replace(',', ".");
    if Decimal::from_str(&normalized).is_ok() {
        return Some(normalized);
    }

    let run_re = Regex::new(r"[0-9.,]+").expect("valid price run regex");
    run_re.find(raw).map(|m| m.as_str().replace(',', "."))
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
