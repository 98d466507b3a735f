use crate::scraper::ListingExtractor;
use scraper::Html;
use url::Url;

const PAGE_URL: &str = "https://homedy.com/ban-nha-dat-ha-noi";

fn extract_all(html: &str) -> Vec<crate::domain::RawListing> {
    let extractor = ListingExtractor::new().unwrap();
    let document = Html::parse_document(html);
    let page_url = Url::parse(PAGE_URL).unwrap();
    extractor
        .listing_items(&document)
        .into_iter()
        .map(|item| extractor.extract(item, &page_url).unwrap())
        .collect()
}

#[test]
fn extracts_all_fields_from_product_item() {
    let html = r#"
        <div class="product-item hot">
          <h3 class="product-title"><a href="/ban-nha-rieng-cau-giay-es123">Bán nhà Cầu Giấy 45m2 🔥</a></h3>
          <div class="product-price">5,2 Tỷ</div>
          <div class="product-address">Quận Cầu Giấy, Hà Nội</div>
          <div class="product-desc">  Nhà đẹp, ngõ ô tô  </div>
        </div>"#;

    let listings = extract_all(html);
    assert_eq!(listings.len(), 1);

    let l = &listings[0];
    assert_eq!(l.title.as_deref(), Some("Bán nhà Cầu Giấy 45m2 🔥"));
    assert_eq!(
        l.url.as_deref(),
        Some("https://homedy.com/ban-nha-rieng-cau-giay-es123")
    );
    assert_eq!(l.price_raw.as_deref(), Some("5,2 Tỷ"));
    assert_eq!(l.price_vnd, Some(52));
    assert_eq!(l.location.as_deref(), Some("Quận Cầu Giấy, Hà Nội"));
    assert_eq!(l.area_m2, Some(45));
    assert_eq!(l.snippet.as_deref(), Some("Nhà đẹp, ngõ ô tô"));
}

#[test]
fn later_selectors_are_used_when_earlier_ones_miss() {
    let html = r#"
        <div class="product-item">
          <a class="product-title" href="https://other.example/listing/9">Chung cư mini</a>
          <span class="price-value">850 triệu</span>
          <span class="location">Huyện Gia Lâm</span>
          <span class="area">62 m²</span>
          <p>Sổ đỏ chính chủ</p>
        </div>"#;

    let l = &extract_all(html)[0];
    assert_eq!(l.title.as_deref(), Some("Chung cư mini"));
    assert_eq!(l.url.as_deref(), Some("https://other.example/listing/9"));
    assert_eq!(l.price_raw.as_deref(), Some("850 triệu"));
    assert_eq!(l.location.as_deref(), Some("Huyện Gia Lâm"));
    assert_eq!(l.area_m2, Some(62));
    assert_eq!(l.snippet.as_deref(), Some("Sổ đỏ chính chủ"));
}

#[test]
fn empty_match_falls_through_to_next_selector() {
    let html = r#"
        <div class="product-item">
          <div class="product-price"></div>
          <div class="price">Thỏa thuận</div>
        </div>"#;

    let l = &extract_all(html)[0];
    assert_eq!(l.price_raw.as_deref(), Some("Thỏa thuận"));
    assert_eq!(l.price_vnd, None);
}

#[test]
fn missing_fields_are_absent() {
    let html = r#"<div class="product-item"><span>no data</span></div>"#;

    let l = &extract_all(html)[0];
    assert_eq!(l.title, None);
    assert_eq!(l.url, None);
    assert_eq!(l.price_raw, None);
    assert_eq!(l.location, None);
    assert_eq!(l.area_m2, None);
    assert_eq!(l.snippet, None);
}

#[test]
fn generic_item_classes_are_a_fallback() {
    let html = r#"
        <div class="listing-item"><h3><a href="/a">Nhà A</a></h3></div>
        <li class="item"><h3><a href="/b">Nhà B</a></h3></li>"#;

    let listings = extract_all(html);
    let titles: Vec<_> = listings.iter().map(|l| l.title.as_deref()).collect();
    assert_eq!(titles, vec![Some("Nhà A"), Some("Nhà B")]);
    assert_eq!(listings[1].url.as_deref(), Some("https://homedy.com/b"));
}

#[test]
fn product_item_cards_take_precedence_over_generic_classes() {
    let html = r#"
        <div class="item"><h3><a href="/x">generic</a></h3></div>
        <div class="product-item-wrapper"><h3><a href="/y">specific</a></h3></div>"#;

    let listings = extract_all(html);
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title.as_deref(), Some("specific"));
}
