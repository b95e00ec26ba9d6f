//! Search results page parsing.
//!
//! A results page is a flat list of product cards. The gallery layout
//! changes per campaign and some cards are ads without a stable product
//! link, so each card is parsed independently and dropped when the minimum
//! viable fields (link, id, title) cannot be derived. Dropping a card
//! never fails the whole page.

use partinfo_core::SearchHit;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::html::{first_attr, first_text, has_match};
use crate::provider::PROVIDER_KEY;
use crate::urls::{clean_product_url, ensure_https, extract_product_id};

/// One result card per match.
const CARD: &str = "div.search-item-card-wrapper-gallery";
/// Primary link inside a card, pointing at the product or an SSR bundle.
const CARD_LINK: &str = "a.search-card-item";
/// Titled container variant of the card layout.
const CARD_TITLE: &str = "div[title]";
/// Heading variant of the card layout, in document order.
const CARD_HEADINGS: &str = "h1, h2, h3";
/// Preview image. The tagged product image sits first in card markup;
/// otherwise the first image of any kind is taken.
const CARD_IMAGE: &str = "img.product-img, img";

/// Parses a search results page into hits, in document order.
///
/// `base_url` is the origin the page was fetched from, used to absolutize
/// root-relative links. No deduplication or re-sorting happens here.
#[must_use]
pub fn parse_search_results(html: &str, base_url: &str) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let card_selector =
        scraper::Selector::parse(CARD).expect("valid search card selector");

    document
        .select(&card_selector)
        .filter_map(|card| parse_card(card, base_url))
        .collect()
}

/// Parses one result card, or `None` when it lacks the minimum viable
/// fields.
fn parse_card(card: ElementRef<'_>, base_url: &str) -> Option<SearchHit> {
    let href = first_attr(card, CARD_LINK, "href")?;

    let provider_url = clean_product_url(&href, base_url);
    let Some(provider_id) = extract_product_id(&href) else {
        debug!(href = %href, "skipping card without a stable product id");
        return None;
    };

    let Some(name) = card_title(card) else {
        debug!(id = %provider_id, "skipping card without a usable title");
        return None;
    };

    let preview_image_url = first_attr(card, CARD_IMAGE, "src").map(|src| ensure_https(&src));

    Some(SearchHit {
        provider_key: PROVIDER_KEY.to_string(),
        provider_id,
        name,
        // The search surface carries no description or taxonomy data; only
        // a detail fetch can fill those.
        description: String::new(),
        category: None,
        manufacturer: None,
        mpn: None,
        preview_image_url,
        manufacturing_status: None,
        provider_url,
        footprint: None,
    })
}

/// Title chain: a `div[title]` node settles the lookup, even when its
/// attribute is blank (the card is then dropped). The headings are only
/// consulted when no titled container exists at all.
fn card_title(card: ElementRef<'_>) -> Option<String> {
    if has_match(card, CARD_TITLE) {
        return first_attr(card, CARD_TITLE, "title");
    }
    first_text(card, CARD_HEADINGS)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
