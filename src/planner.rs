//! Render planning: the ordered list of sections a storefront page shows

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::content::{ContentNormalizer, RawContentBundle, SectionContent, SectionOverrides};
use crate::currency::{self, CurrencyConfig};
use crate::routes::{resolve_url, RouteParams, RouteTable, StaticRouteTable, TenantDescriptor};
use crate::theme::SectionName;
use crate::PlanError;

/// Catalog data from the data-fetch layer
///
/// Opaque to the engine: values are passed to renderers unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default, alias = "products")]
    pub featured_products: Option<Value>,
    #[serde(default)]
    pub trending_products: Option<Value>,
    #[serde(default)]
    pub categories: Option<Value>,
    #[serde(default, alias = "posts")]
    pub blog_posts: Option<Value>,
}

impl CatalogData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_featured_products(mut self, products: Value) -> Self {
        self.featured_products = Some(products);
        self
    }

    pub fn with_trending_products(mut self, products: Value) -> Self {
        self.trending_products = Some(products);
        self
    }

    pub fn with_categories(mut self, categories: Value) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_blog_posts(mut self, posts: Value) -> Self {
        self.blog_posts = Some(posts);
        self
    }
}

/// One entry of a render plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedSection {
    pub section: SectionName,
    pub props: Map<String, Value>,
}

/// Per-request planning options
#[derive(Debug, Clone, Default)]
pub struct PlanConfig {
    /// Tenant currency; USD when absent
    pub currency: Option<CurrencyConfig>,
    /// Explicit props that win over tenant content
    pub overrides: SectionOverrides,
}

impl PlanConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tenant currency
    pub fn with_currency(mut self, currency: CurrencyConfig) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set explicit section props
    pub fn with_overrides(mut self, overrides: SectionOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Builds render plans from tenant configuration and content
#[derive(Debug, Clone)]
pub struct RenderPlanner<'a, R> {
    normalizer: ContentNormalizer<'a>,
    routes: R,
    config: PlanConfig,
}

impl RenderPlanner<'static, &'static StaticRouteTable> {
    /// Planner over the compiled-in themes, defaults and routes
    pub fn builtin() -> Self {
        RenderPlanner::new(ContentNormalizer::builtin(), StaticRouteTable::builtin())
    }
}

impl<'a, R: RouteTable> RenderPlanner<'a, R> {
    pub fn new(normalizer: ContentNormalizer<'a>, routes: R) -> Self {
        Self {
            normalizer,
            routes,
            config: PlanConfig::default(),
        }
    }

    /// Set the planning options
    pub fn with_config(mut self, config: PlanConfig) -> Self {
        self.config = config;
        self
    }

    /// Plan the sections of a storefront page
    ///
    /// The result follows the theme's section order exactly; sections the
    /// theme does not declare never appear.
    pub fn plan(
        &self,
        tenant: &TenantDescriptor,
        theme_id: &str,
        raw: &RawContentBundle,
        catalog: &CatalogData,
    ) -> Result<Vec<PlannedSection>, PlanError> {
        let content = self
            .normalizer
            .normalize_with_overrides(theme_id, raw, &self.config.overrides);
        tracing::debug!(
            tenant = %tenant.slug,
            requested = theme_id,
            theme = %content.theme_id,
            sections = content.len(),
            "planning storefront"
        );

        content
            .iter()
            .map(|section| {
                Ok(PlannedSection {
                    section: section.section(),
                    props: self.section_props(section, tenant, catalog)?,
                })
            })
            .collect()
    }

    fn section_props(
        &self,
        content: &SectionContent,
        tenant: &TenantDescriptor,
        catalog: &CatalogData,
    ) -> Result<Map<String, Value>, PlanError> {
        let mut props = content.to_props();
        let section = content.section();

        match section {
            SectionName::FeaturedProducts | SectionName::Trending => {
                let products = if section == SectionName::FeaturedProducts {
                    &catalog.featured_products
                } else {
                    &catalog.trending_products
                };
                let currency = self.currency();
                if let Some(products) = products {
                    if let Some(labels) = price_labels(products, &currency) {
                        props.insert("price_labels".to_string(), labels);
                    }
                    props.insert("products".to_string(), products.clone());
                }
                props.insert("currency".to_string(), json!(currency));
                props.insert("view_all_url".to_string(), self.url("store.products", tenant)?);
            }
            SectionName::Category => {
                if let Some(categories) = &catalog.categories {
                    props.insert("categories".to_string(), categories.clone());
                }
                props.insert("view_all_url".to_string(), self.url("store.categories", tenant)?);
            }
            SectionName::Blog => {
                if let Some(posts) = &catalog.blog_posts {
                    props.insert("posts".to_string(), posts.clone());
                }
                props.insert("view_all_url".to_string(), self.url("store.blog", tenant)?);
            }
            SectionName::Newsletter => {
                props.insert(
                    "subscribe_url".to_string(),
                    self.url("store.newsletter.subscribe", tenant)?,
                );
            }
            SectionName::Footer => {
                props.insert("home_url".to_string(), self.url("store.home", tenant)?);
            }
            SectionName::Hero | SectionName::BrandLogos | SectionName::InfoBoxes | SectionName::Cta => {}
        }
        Ok(props)
    }

    fn currency(&self) -> CurrencyConfig {
        self.config.currency.clone().unwrap_or_default()
    }

    fn url(&self, route: &str, tenant: &TenantDescriptor) -> Result<Value, PlanError> {
        let url = resolve_url(&self.routes, route, tenant, &RouteParams::new())?;
        Ok(Value::String(url))
    }
}

/// Formatted `price` of each product, `null` where a product has none
///
/// Returns `None` when the products value is not a list.
fn price_labels(products: &Value, currency: &CurrencyConfig) -> Option<Value> {
    let labels = products
        .as_array()?
        .iter()
        .map(|product| match product.get("price") {
            Some(price) => Value::String(currency::format(price, Some(currency))),
            None => Value::Null,
        })
        .collect();
    Some(Value::Array(labels))
}
