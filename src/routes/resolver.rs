//! Tenant-aware URL resolution

use serde::{Deserialize, Serialize};

use super::table::{RouteError, RouteParams, RouteTable};

/// Route parameter carrying the tenant slug in shared-host routing
pub const STORE_SLUG_PARAM: &str = "storeSlug";

/// How a tenant is addressed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDescriptor {
    pub slug: String,
    #[serde(default, alias = "enable_custom_domain")]
    pub enable_custom_domain: bool,
    #[serde(default, alias = "enable_custom_subdomain")]
    pub enable_custom_subdomain: bool,
}

impl TenantDescriptor {
    /// A tenant on the shared host, addressed by slug
    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn with_custom_domain(mut self, enabled: bool) -> Self {
        self.enable_custom_domain = enabled;
        self
    }

    pub fn with_custom_subdomain(mut self, enabled: bool) -> Self {
        self.enable_custom_subdomain = enabled;
        self
    }

    /// True when the tenant is served from its own host
    pub fn uses_own_host(&self) -> bool {
        self.enable_custom_domain || self.enable_custom_subdomain
    }
}

/// Apply the slug-injection policy to caller params
///
/// Tenants on their own host get the params unchanged. Tenants on the shared
/// host get `storeSlug` set to their slug, replacing any caller value.
pub fn route_params(tenant: &TenantDescriptor, params: &RouteParams) -> RouteParams {
    let mut params = params.clone();
    if !tenant.uses_own_host() {
        params.insert(STORE_SLUG_PARAM.to_string(), tenant.slug.clone());
    }
    params
}

/// Resolve a named route for a tenant
///
/// Unknown route names are reported by `routes` and returned unchanged.
///
/// # Example
///
/// ```rust
/// use storefront_engine::routes::{resolve_url, RouteParams, StaticRouteTable, TenantDescriptor};
///
/// let routes = StaticRouteTable::storefront();
/// let shared = TenantDescriptor::with_slug("acme");
/// let own = TenantDescriptor::with_slug("acme").with_custom_domain(true);
///
/// assert_eq!(resolve_url(&routes, "store.cart", &shared, &RouteParams::new()).unwrap(), "/acme/cart");
/// assert_eq!(resolve_url(&routes, "store.cart", &own, &RouteParams::new()).unwrap(), "/cart");
/// ```
pub fn resolve_url<R: RouteTable + ?Sized>(
    routes: &R,
    route_name: &str,
    tenant: &TenantDescriptor,
    params: &RouteParams,
) -> Result<String, RouteError> {
    let params = route_params(tenant, params);
    let url = routes.build(route_name, &params)?;
    tracing::trace!(route = route_name, tenant = %tenant.slug, %url, "resolved route");
    Ok(url)
}
