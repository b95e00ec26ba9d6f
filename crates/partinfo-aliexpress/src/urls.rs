//! URL normalization for Aliexpress product links.
//!
//! The site exposes the same product through at least two URL shapes: the
//! classic item page (`/item/1005006063706718.html`) and SSR bundle
//! deep-links carrying a `productIds=<id>:<secondary>,…` query parameter.
//! Both must collapse to the same numeric key so downstream consumers can
//! dedupe and link records no matter which page style a crawl met the
//! product on.

use regex::Regex;

/// Makes `href` absolute against `base_url` and strips the query string.
///
/// Protocol-relative links get an `https:` prefix and root-relative links
/// get the base origin; anything else (already absolute, or relative to the
/// current path) passes through untouched. Everything from the first `?`
/// onward is dropped; the display URL is always path-only.
#[must_use]
pub fn clean_product_url(href: &str, base_url: &str) -> String {
    let absolute = if let Some(rest) = href.strip_prefix("//") {
        format!("https://{rest}")
    } else if href.starts_with('/') {
        format!("{}{href}", base_url.trim_end_matches('/'))
    } else {
        href.to_string()
    };

    match absolute.split_once('?') {
        Some((path, _)) => path.to_string(),
        None => absolute,
    }
}

/// Extracts the numeric product id from any of the known URL shapes.
///
/// Tried in order:
/// 1. a `/<digits>.html` path segment,
/// 2. the `productIds` query parameter, a comma-separated list whose
///    entries may carry a `:<secondary>` suffix; the first entry with an
///    all-digit primary part wins.
///
/// Returns `None` when neither shape matches. Callers treat that as "this
/// link is unusable", not as an error.
#[must_use]
pub fn extract_product_id(href: &str) -> Option<String> {
    // [0-9] rather than \d: the regex crate's \d covers all Unicode decimal
    // digits, but provider ids are ASCII-only.
    let item_re = Regex::new(r"/([0-9]+)\.html").expect("valid item id regex");
    if let Some(cap) = item_re.captures(href) {
        return cap.get(1).map(|m| m.as_str().to_string());
    }

    let query = query_part(href)?;
    let product_ids = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "productIds")
        .map(|(_, value)| value.into_owned())?;

    product_ids
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.split(':').next().unwrap_or(entry))
        .find(|primary| is_decimal(primary))
        .map(str::to_string)
}

/// Prefixes protocol-relative URLs with `https:`; anything else unchanged.
#[must_use]
pub fn ensure_https(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

/// `true` if `s` is non-empty and consists solely of ASCII digits.
#[must_use]
pub fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the query portion of `href`, tolerating relative URLs and
/// trailing fragments.
fn query_part(href: &str) -> Option<&str> {
    let (_, after) = href.split_once('?')?;
    Some(after.split_once('#').map_or(after, |(query, _)| query))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://de.aliexpress.com";

    // -----------------------------------------------------------------------
    // clean_product_url
    // -----------------------------------------------------------------------

    #[test]
    fn clean_prefixes_protocol_relative_links() {
        assert_eq!(
            clean_product_url("//m.aliexpress.com/item/123.html", BASE),
            "https://m.aliexpress.com/item/123.html"
        );
    }

    #[test]
    fn clean_prefixes_root_relative_links_with_origin() {
        assert_eq!(
            clean_product_url("/item/123.html?foo=bar", BASE),
            "https://de.aliexpress.com/item/123.html"
        );
    }

    #[test]
    fn clean_does_not_double_the_slash_for_trailing_slash_base() {
        assert_eq!(
            clean_product_url("/item/123.html", "https://de.aliexpress.com/"),
            "https://de.aliexpress.com/item/123.html"
        );
    }

    #[test]
    fn clean_leaves_absolute_urls_alone() {
        assert_eq!(
            clean_product_url("https://de.aliexpress.com/item/123.html", BASE),
            "https://de.aliexpress.com/item/123.html"
        );
    }

    #[test]
    fn clean_strips_query_and_fragment() {
        assert_eq!(
            clean_product_url("//m.aliexpress.com/item/123.html?spm=a2g0o#reviews", BASE),
            "https://m.aliexpress.com/item/123.html"
        );
    }

    // -----------------------------------------------------------------------
    // extract_product_id
    // -----------------------------------------------------------------------

    #[test]
    fn id_from_item_path() {
        assert_eq!(
            extract_product_id("/item/1005006063706718.html").as_deref(),
            Some("1005006063706718")
        );
    }

    #[test]
    fn id_from_item_path_ignores_query() {
        assert_eq!(
            extract_product_id("https://de.aliexpress.com/item/123.html?spm=abc&x=1").as_deref(),
            Some("123")
        );
    }

    #[test]
    fn id_from_protocol_relative_item_path() {
        assert_eq!(
            extract_product_id("//m.aliexpress.com/item/456.html").as_deref(),
            Some("456")
        );
    }

    #[test]
    fn id_from_product_ids_query() {
        let href = "/ssr/300000512/BundleDeals2?productIds=1005006063706718:12000036624981621";
        assert_eq!(
            extract_product_id(href).as_deref(),
            Some("1005006063706718")
        );
    }

    #[test]
    fn id_from_product_ids_list_takes_first_numeric_entry() {
        let href = "/ssr/x?productIds=abc:1,789:2,456:3";
        assert_eq!(extract_product_id(href).as_deref(), Some("789"));
    }

    #[test]
    fn id_from_product_ids_skips_blank_entries() {
        let href = "/ssr/x?productIds=,%20,123:9";
        assert_eq!(extract_product_id(href).as_deref(), Some("123"));
    }

    #[test]
    fn id_from_product_ids_entry_without_secondary_part() {
        let href = "/ssr/x?productIds=321";
        assert_eq!(extract_product_id(href).as_deref(), Some("321"));
    }

    #[test]
    fn id_from_percent_encoded_product_ids() {
        let href = "/ssr/x?productIds=555%3A777";
        assert_eq!(extract_product_id(href).as_deref(), Some("555"));
    }

    #[test]
    fn no_id_when_product_ids_is_empty() {
        assert!(extract_product_id("/ssr/x?productIds=").is_none());
    }

    #[test]
    fn no_id_when_no_entry_is_numeric() {
        assert!(extract_product_id("/ssr/x?productIds=abc:1,def").is_none());
    }

    #[test]
    fn no_id_without_query_or_item_path() {
        assert!(extract_product_id("/store/912345").is_none());
    }

    #[test]
    fn item_path_takes_precedence_over_query() {
        assert_eq!(
            extract_product_id("/item/111.html?productIds=222:1").as_deref(),
            Some("111")
        );
    }

    // -----------------------------------------------------------------------
    // ensure_https / is_decimal
    // -----------------------------------------------------------------------

    #[test]
    fn ensure_https_qualifies_protocol_relative() {
        assert_eq!(
            ensure_https("//ae01.alicdn.com/kf/img.jpg"),
            "https://ae01.alicdn.com/kf/img.jpg"
        );
    }

    #[test]
    fn ensure_https_leaves_absolute_untouched() {
        assert_eq!(
            ensure_https("https://ae01.alicdn.com/kf/img.jpg"),
            "https://ae01.alicdn.com/kf/img.jpg"
        );
    }

    #[test]
    fn is_decimal_accepts_digit_runs_only() {
        assert!(is_decimal("1005006063706718"));
        assert!(!is_decimal(""));
        assert!(!is_decimal("12a3"));
        assert!(!is_decimal("١٢٣"));
    }
}
