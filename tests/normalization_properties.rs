//! Behavioral properties of theme resolution, normalization, URLs and currency

use pretty_assertions::assert_eq;
use serde_json::json;

use storefront_engine::content::{InfoBox, SectionContent};
use storefront_engine::routes::{resolve_url, RouteError, RouteParams, StaticRouteTable};
use storefront_engine::{
    format_currency, normalize, CurrencyConfig, RawContentBundle, SectionName, SymbolPosition,
    TenantDescriptor, ThemeRegistry,
};

fn info_boxes(raw: serde_json::Value, theme: &str) -> Vec<InfoBox> {
    let content = normalize(theme, &RawContentBundle::from(raw));
    match content.get(SectionName::InfoBoxes) {
        Some(SectionContent::InfoBoxes(c)) => c.boxes.clone(),
        other => panic!("expected info boxes, got {:?}", other),
    }
}

#[test]
fn test_every_theme_normalizes_every_declared_section() {
    let registry = ThemeRegistry::builtin();
    let garbage = RawContentBundle::from(json!({
        "hero": 42,
        "cta": "nope",
        "footer": [null, 1],
        "info_boxes": {"value": "text"}
    }));
    for id in registry.ids() {
        let theme = registry.resolve(id);
        let content = normalize(id, &garbage);
        assert_eq!(content.theme_id, id);
        assert_eq!(content.sections().collect::<Vec<_>>(), theme.sections);
    }
}

#[test]
fn test_missing_and_stale_theme_ids_use_default() {
    let registry = ThemeRegistry::builtin();
    assert_eq!(registry.resolve("").id, "default");
    assert_eq!(registry.resolve("vintage").id, "default");
    assert_eq!(registry.resolve_opt(None).sections, SectionName::ALL.to_vec());
}

#[test]
fn test_precedence_wrapper_over_bare_alias_and_defaults() {
    let content = normalize(
        "fashion",
        &RawContentBundle::from(json!({
            "hero": {"value": {"title": "Wrapped"}},
            "hero_title": "Alias"
        })),
    );
    let hero = serde_json::to_value(content.get(SectionName::Hero).unwrap()).unwrap();
    assert_eq!(hero["title"], json!("Wrapped"));

    let content = normalize("fashion", &RawContentBundle::from(json!({"hero_title": "Alias"})));
    let hero = serde_json::to_value(content.get(SectionName::Hero).unwrap()).unwrap();
    assert_eq!(hero["title"], json!("Alias"));

    let content = normalize("fashion", &RawContentBundle::new());
    let hero = serde_json::to_value(content.get(SectionName::Hero).unwrap()).unwrap();
    assert_eq!(hero["title"], json!("New Season Arrivals"));

    let content = normalize("default", &RawContentBundle::new());
    let hero = serde_json::to_value(content.get(SectionName::Hero).unwrap()).unwrap();
    assert_eq!(hero["title"], json!("Welcome to Our Store"));
}

#[test]
fn test_empty_list_falls_through_to_theme_default() {
    let boxes = info_boxes(json!({"info_boxes": []}), "jewelry");
    assert_eq!(boxes.len(), 3);
    assert_eq!(boxes[0].title, "Certified Gems");

    let boxes = info_boxes(json!({"info_boxes": {"value": []}}), "default");
    assert_eq!(boxes.len(), 4);
    assert_eq!(boxes[0].title, "Free Shipping");
}

#[test]
fn test_empty_list_falls_through_to_alias() {
    let boxes = info_boxes(
        json!({
            "info_boxes": [],
            "features": [{"icon": "star", "title": "Quality", "text": "Only the best"}]
        }),
        "default",
    );
    assert_eq!(
        boxes,
        vec![InfoBox {
            icon: "star".to_string(),
            title: "Quality".to_string(),
            description: "Only the best".to_string(),
        }]
    );
}

#[test]
fn test_stray_value_key_keeps_section_fields() {
    let content = normalize(
        "default",
        &RawContentBundle::from(json!({
            "brand_logos": {"stats": [{"number": 9, "label": "X"}], "value": "legacy"}
        })),
    );
    let brand = serde_json::to_value(content.get(SectionName::BrandLogos).unwrap()).unwrap();
    assert_eq!(brand["stats"], json!([{"number": "9", "label": "X"}]));
    assert_eq!(brand["logos"][0]["image"], json!("/images/brands/brand-1.png"));
}

#[test]
fn test_partial_section_completed_from_defaults() {
    let content = normalize(
        "jewelry",
        &RawContentBundle::from(json!({"featured_products": {"title": "Bridal"}})),
    );
    let featured = serde_json::to_value(content.get(SectionName::FeaturedProducts).unwrap()).unwrap();
    assert_eq!(
        featured,
        json!({"title": "Bridal", "description": "Crafted with precision and care"})
    );
}

#[test]
fn test_normalized_content_serializes_in_theme_order() {
    let content = normalize("minimal", &RawContentBundle::new());
    let serialized = serde_json::to_string(&content).unwrap();
    let positions: Vec<usize> = ["\"hero\":", "\"cta\":", "\"footer\":"]
        .iter()
        .map(|key| serialized.find(key).expect("section key should be serialized"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_url_regimes() {
    let routes = StaticRouteTable::storefront();
    let mut params = RouteParams::new();
    params.insert("product".to_string(), "silver-ring".to_string());

    let shared = TenantDescriptor::with_slug("acme");
    let domain = TenantDescriptor::with_slug("acme").with_custom_domain(true);
    let subdomain = TenantDescriptor::with_slug("acme").with_custom_subdomain(true);

    assert_eq!(
        resolve_url(&routes, "store.product", &shared, &params).unwrap(),
        "/acme/products/silver-ring"
    );
    assert_eq!(
        resolve_url(&routes, "store.product", &domain, &params).unwrap(),
        "/products/silver-ring"
    );
    assert_eq!(
        resolve_url(&routes, "store.product", &subdomain, &params).unwrap(),
        "/products/silver-ring"
    );
}

#[test]
fn test_url_extra_params_become_query() {
    let routes = StaticRouteTable::storefront();
    let mut params = RouteParams::new();
    params.insert("sort".to_string(), "price".to_string());
    params.insert("page".to_string(), "2".to_string());
    let url = resolve_url(&routes, "store.products", &TenantDescriptor::with_slug("acme"), &params)
        .unwrap();
    insta::assert_snapshot!(url, @"/acme/products?page=2&sort=price");
}

#[test]
fn test_url_params_cannot_escape_their_segment() {
    let routes = StaticRouteTable::storefront();
    let mut params = RouteParams::new();
    params.insert("product".to_string(), "a/b?x=1".to_string());
    params.insert("q".to_string(), "shoes & socks=1#top".to_string());
    let url = resolve_url(&routes, "store.product", &TenantDescriptor::with_slug("acme"), &params)
        .unwrap();
    insta::assert_snapshot!(url, @"/acme/products/a%2Fb%3Fx%3D1?q=shoes%20%26%20socks%3D1%23top");
    assert_eq!(url.matches('?').count(), 1);
    assert!(!url.contains('#'));
}

#[test]
fn test_url_failures() {
    let routes = StaticRouteTable::storefront();
    let tenant = TenantDescriptor::with_slug("acme");
    assert_eq!(
        resolve_url(&routes, "store.product", &tenant, &RouteParams::new()),
        Err(RouteError::MissingParameter {
            route: "store.product".to_string(),
            param: "product".to_string(),
        })
    );
    assert_eq!(
        resolve_url(&routes, "admin.dashboard", &tenant, &RouteParams::new()),
        Err(RouteError::UnknownRoute {
            name: "admin.dashboard".to_string(),
        })
    );
}

#[test]
fn test_currency_formatting() {
    assert_eq!(format_currency(1234.5, None), "$ 1,234.50");
    assert_eq!(format_currency("0.005", None), "$ 0.01");
    assert_eq!(format_currency("abc", None), "$ 0.00");
    assert_eq!(format_currency(None::<f64>, None), "$ 0.00");

    let jpy = CurrencyConfig::preset("JPY").unwrap();
    assert_eq!(format_currency(1234.5, Some(&jpy)), "¥ 1,235");

    let custom = CurrencyConfig::usd()
        .with_symbol("CHF")
        .with_separators(".", "'")
        .with_position(SymbolPosition::After);
    assert_eq!(format_currency(9876543.21, Some(&custom)), "9'876'543.21 CHF");
}
