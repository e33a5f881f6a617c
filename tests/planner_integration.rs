//! End-to-end planning from store config, content and catalog fixtures

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use storefront_engine::{
    CatalogData, ContentNormalizer, PlannedSection, RawContentBundle, RenderPlanner, RouteTable,
    SectionName, StoreConfig,
};

const STORE: &str = include_str!("fixtures/store.toml");
const CONTENT: &str = include_str!("fixtures/content.json");
const CATALOG: &str = include_str!("fixtures/catalog.json");

fn fixtures() -> (StoreConfig, RawContentBundle, CatalogData) {
    let store = StoreConfig::from_str(STORE).expect("Store fixture should parse");
    let raw = RawContentBundle::from_json_str(CONTENT).expect("Content fixture should parse");
    let catalog: CatalogData = serde_json::from_str(CATALOG).expect("Catalog fixture should parse");
    (store, raw, catalog)
}

fn plan_fixture() -> Vec<PlannedSection> {
    let (store, raw, catalog) = fixtures();
    let routes = store.route_table();
    RenderPlanner::new(ContentNormalizer::builtin(), &routes)
        .with_config(store.plan_config())
        .plan(&store.tenant, &store.theme, &raw, &catalog)
        .expect("Should plan")
}

fn props(plan: &[PlannedSection], section: SectionName) -> &serde_json::Map<String, Value> {
    &plan
        .iter()
        .find(|p| p.section == section)
        .unwrap_or_else(|| panic!("{} should be planned", section))
        .props
}

#[test]
fn test_fixture_section_order() {
    let plan = plan_fixture();
    let order: Vec<String> = plan.iter().map(|p| p.section.to_string()).collect();
    insta::assert_snapshot!(
        order.join(" > "),
        @"hero > category > featured_products > cta > trending > blog > newsletter > footer"
    );
}

#[test]
fn test_fixture_hero_mixes_wrapper_and_defaults() {
    let plan = plan_fixture();
    assert_eq!(
        Value::Object(props(&plan, SectionName::Hero).clone()),
        json!({
            "title": "Summer Collection",
            "subtitle": "",
            "button_text": "Shop Collection",
            "button_link": "#products",
            "image": "/images/themes/fashion/hero.jpg"
        })
    );
}

#[test]
fn test_fixture_headings_use_aliases() {
    let plan = plan_fixture();
    let category = props(&plan, SectionName::Category);
    assert_eq!(category["title"], json!("Browse Departments"));
    assert_eq!(category["description"], json!("Browse our collections"));

    let featured = props(&plan, SectionName::FeaturedProducts);
    assert_eq!(featured["title"], json!("Featured Styles"));
    assert_eq!(featured["description"], json!("Our best sellers"));
}

#[test]
fn test_fixture_cta_boxes_and_bottom() {
    let plan = plan_fixture();
    let cta = props(&plan, SectionName::Cta);
    assert_eq!(
        cta["boxes"],
        json!([{
            "title": "Gift Cards",
            "subtitle": "",
            "button_text": "Buy Now",
            "button_link": "/gift-cards",
            "image": ""
        }])
    );
    assert_eq!(
        cta["bottom"],
        json!({
            "title": "Stay in touch",
            "description": "Be the first to hear about new products and exclusive offers",
            "button_text": "Sign Up",
            "button_link": "#newsletter"
        })
    );
}

#[test]
fn test_fixture_empty_wrapper_falls_through() {
    let plan = plan_fixture();
    let blog = props(&plan, SectionName::Blog);
    assert_eq!(blog["title"], json!("From Our Blog"));
    assert_eq!(blog["description"], json!("News, tips and stories"));
}

#[test]
fn test_fixture_field_wrapper_and_theme_default_loses() {
    let plan = plan_fixture();
    let newsletter = props(&plan, SectionName::Newsletter);
    assert_eq!(newsletter["title"], json!("Weekly Drops"));
    assert_eq!(newsletter["placeholder"], json!("Enter your email"));
    assert_eq!(newsletter["subscribe_url"], json!("/acme/newsletter/subscribe"));
}

#[test]
fn test_fixture_footer() {
    let plan = plan_fixture();
    let footer = props(&plan, SectionName::Footer);
    assert_eq!(footer["copyright"], json!("© 2026 Acme"));
    assert_eq!(footer["description"], json!("Quality products, delivered to your door."));
    assert_eq!(
        footer["social_links"],
        json!([{"platform": "tiktok", "url": "https://tiktok.com/@acme"}])
    );
    assert_eq!(footer["home_url"], json!("/acme"));
}

#[test]
fn test_fixture_catalog_and_prices() {
    let plan = plan_fixture();
    let featured = props(&plan, SectionName::FeaturedProducts);
    assert_eq!(featured["price_labels"], json!(["49,90 €", "1.200,00 €"]));
    assert_eq!(featured["view_all_url"], json!("/acme/products"));
    assert_eq!(featured["currency"]["code"], json!("EUR"));

    let category = props(&plan, SectionName::Category);
    assert_eq!(category["categories"], json!([{"id": 10, "name": "Shirts"}]));
    assert_eq!(category["view_all_url"], json!("/acme/categories"));

    let blog = props(&plan, SectionName::Blog);
    assert_eq!(blog["posts"][0]["slug"], json!("summer-guide"));

    let trending = props(&plan, SectionName::Trending);
    assert!(!trending.contains_key("products"));
    assert!(!trending.contains_key("price_labels"));
}

#[test]
fn test_fixture_custom_route() {
    let (store, _, _) = fixtures();
    let routes = store.route_table();
    let url = storefront_engine::resolve_url(&routes, "store.lookbook", &store.tenant, &Default::default())
        .unwrap();
    assert_eq!(url, "/acme/lookbook");
    assert!(routes.build("store.cart", &Default::default()).is_ok());
}

#[test]
fn test_stale_theme_id_plans_default_theme() {
    let (store, raw, catalog) = fixtures();
    let plan = storefront_engine::plan(&store.tenant, "retired-theme", &raw, &catalog).unwrap();
    let order: Vec<SectionName> = plan.iter().map(|p| p.section).collect();
    assert_eq!(order, SectionName::ALL.to_vec());
}
