use super::*;

const BASE: &str = "https://de.aliexpress.com";

fn page(cards: &str) -> String {
    format!("<html><body><div id=\"results\">{cards}</div></body></html>")
}

/// A fully populated gallery card in the titled-container layout.
fn full_card(id: &str, title: &str) -> String {
    format!(
        r#"<div class="hr_bm search-item-card-wrapper-gallery">
            <a class="search-card-item" href="/item/{id}.html?spm=a2g0o.productlist">
                <img class="product-img" src="//ae01.alicdn.com/kf/{id}.jpg">
                <div title="{title}">{title}</div>
            </a>
        </div>"#
    )
}

#[test]
fn full_card_produces_a_complete_hit() {
    let html = page(&full_card("1005006063706718", "USB-C Breakout Board"));
    let hits = parse_search_results(&html, BASE);

    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.provider_key, "aliexpress");
    assert_eq!(hit.provider_id, "1005006063706718");
    assert_eq!(hit.name, "USB-C Breakout Board");
    assert_eq!(
        hit.provider_url,
        "https://de.aliexpress.com/item/1005006063706718.html"
    );
    assert_eq!(
        hit.preview_image_url.as_deref(),
        Some("https://ae01.alicdn.com/kf/1005006063706718.jpg")
    );
    assert_eq!(hit.description, "");
    assert!(hit.category.is_none());
    assert!(hit.manufacturer.is_none());
    assert!(hit.mpn.is_none());
    assert!(hit.manufacturing_status.is_none());
    assert!(hit.footprint.is_none());
}

#[test]
fn card_without_link_is_skipped_and_siblings_survive() {
    let cards = format!(
        r#"<div class="search-item-card-wrapper-gallery"><div title="No link here"></div></div>
        {}"#,
        full_card("123", "Kept")
    );
    let hits = parse_search_results(&page(&cards), BASE);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].provider_id, "123");
}

#[test]
fn card_without_extractable_id_is_skipped() {
    let cards = format!(
        r#"<div class="search-item-card-wrapper-gallery">
            <a class="search-card-item" href="/store/912345"><div title="Storefront ad"></div></a>
        </div>
        {}"#,
        full_card("456", "Kept")
    );
    let hits = parse_search_results(&page(&cards), BASE);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].provider_id, "456");
}

#[test]
fn card_without_title_or_heading_is_skipped_while_siblings_are_emitted() {
    let cards = format!(
        r#"<div class="search-item-card-wrapper-gallery">
            <a class="search-card-item" href="/item/111.html"><img src="//x.jpg"></a>
        </div>
        {}"#,
        full_card("222", "Kept")
    );
    let hits = parse_search_results(&page(&cards), BASE);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].provider_id, "222");
}

#[test]
fn heading_is_used_when_no_titled_container_exists() {
    let cards = r#"<div class="search-item-card-wrapper-gallery">
        <a class="search-card-item" href="/item/333.html">
            <h3> Relay Module 5V </h3>
        </a>
    </div>"#;
    let hits = parse_search_results(&page(cards), BASE);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Relay Module 5V");
}

#[test]
fn blank_titled_container_drops_the_card_even_with_a_heading_present() {
    let cards = r#"<div class="search-item-card-wrapper-gallery">
        <a class="search-card-item" href="/item/444.html">
            <div title="">x</div>
            <h2>Heading that is not consulted</h2>
        </a>
    </div>"#;
    let hits = parse_search_results(&page(cards), BASE);

    assert!(hits.is_empty());
}

#[test]
fn missing_image_yields_none_not_a_skip() {
    let cards = r#"<div class="search-item-card-wrapper-gallery">
        <a class="search-card-item" href="/item/555.html"><div title="Imageless"></div></a>
    </div>"#;
    let hits = parse_search_results(&page(cards), BASE);

    assert_eq!(hits.len(), 1);
    assert!(hits[0].preview_image_url.is_none());
}

#[test]
fn ssr_bundle_link_resolves_to_the_primary_product_id() {
    let cards = r#"<div class="search-item-card-wrapper-gallery">
        <a class="search-card-item"
           href="/ssr/300000512/BundleDeals2?productIds=1005006063706718:12000036624981621&disableNav=YES">
            <div title="Bundle deal"></div>
        </a>
    </div>"#;
    let hits = parse_search_results(&page(cards), BASE);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].provider_id, "1005006063706718");
    assert_eq!(
        hits[0].provider_url,
        "https://de.aliexpress.com/ssr/300000512/BundleDeals2"
    );
}

#[test]
fn hits_keep_document_order() {
    let cards = format!(
        "{}{}{}",
        full_card("3", "Third listed first"),
        full_card("1", "Then this"),
        full_card("2", "Then that")
    );
    let hits = parse_search_results(&page(&cards), BASE);

    let ids: Vec<&str> = hits.iter().map(|h| h.provider_id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

#[test]
fn page_without_cards_yields_nothing() {
    let hits = parse_search_results("<html><body><p>captcha</p></body></html>", BASE);
    assert!(hits.is_empty());
}
