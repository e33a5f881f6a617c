//! Storefront Engine - rendering configuration for multi-tenant storefronts
//!
//! This library decides what a storefront page renders and how its values are
//! computed: which sections a tenant's theme shows, the canonical content of
//! each section, tenant-scoped URLs and currency display.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use storefront_engine::{plan, CatalogData, RawContentBundle, SectionName, TenantDescriptor};
//!
//! let tenant = TenantDescriptor::with_slug("acme");
//! let raw = RawContentBundle::from(json!({"hero": {"value": {"title": "Spring Sale"}}}));
//!
//! let sections = plan(&tenant, "minimal", &raw, &CatalogData::new()).unwrap();
//! let order: Vec<_> = sections.iter().map(|s| s.section).collect();
//! assert_eq!(order, vec![SectionName::Hero, SectionName::Cta, SectionName::Footer]);
//! assert_eq!(sections[0].props["title"], "Spring Sale");
//! ```

pub mod config;
pub mod content;
pub mod currency;
pub mod error;
pub mod planner;
pub mod routes;
pub mod theme;

pub use config::StoreConfig;
pub use content::{normalize, ContentNormalizer, NormalizedContent, RawContentBundle, SectionOverrides};
pub use currency::{format as format_currency, CurrencyConfig, CurrencyOverrides, SymbolPosition};
pub use error::ConfigError;
pub use planner::{CatalogData, PlanConfig, PlannedSection, RenderPlanner};
pub use routes::{resolve_url, RouteError, RouteParams, RouteTable, StaticRouteTable, TenantDescriptor};
pub use theme::{SectionName, ThemeDescriptor, ThemeRegistry};

use thiserror::Error;

/// Errors that can occur while planning a page
#[derive(Debug, Error)]
pub enum PlanError {
    /// A section link named a route the route table does not know
    #[error("route error: {0}")]
    Route(#[from] RouteError),
}

/// Plan a storefront page with the built-in themes, defaults and routes
///
/// Prices are formatted in USD; use [`plan_with_config`] for the tenant's
/// currency or explicit section props.
pub fn plan(
    tenant: &TenantDescriptor,
    theme_id: &str,
    raw: &RawContentBundle,
    catalog: &CatalogData,
) -> Result<Vec<PlannedSection>, PlanError> {
    plan_with_config(tenant, theme_id, raw, catalog, PlanConfig::default())
}

/// Plan a storefront page with custom configuration
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use storefront_engine::{
///     plan_with_config, CatalogData, CurrencyConfig, PlanConfig, RawContentBundle, SectionName,
///     TenantDescriptor,
/// };
///
/// let tenant = TenantDescriptor::with_slug("acme").with_custom_domain(true);
/// let catalog = CatalogData::new().with_featured_products(json!([{"price": 2500}]));
/// let config = PlanConfig::new().with_currency(CurrencyConfig::preset("EUR").unwrap());
///
/// let sections = plan_with_config(&tenant, "jewelry", &RawContentBundle::new(), &catalog, config).unwrap();
/// let featured = sections.iter().find(|s| s.section == SectionName::FeaturedProducts).unwrap();
/// assert_eq!(featured.props["price_labels"], json!(["2.500,00 €"]));
/// assert_eq!(featured.props["view_all_url"], "/products");
/// ```
pub fn plan_with_config(
    tenant: &TenantDescriptor,
    theme_id: &str,
    raw: &RawContentBundle,
    catalog: &CatalogData,
    config: PlanConfig,
) -> Result<Vec<PlannedSection>, PlanError> {
    RenderPlanner::builtin()
        .with_config(config)
        .plan(tenant, theme_id, raw, catalog)
}
