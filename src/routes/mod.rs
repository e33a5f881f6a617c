//! Tenant-scoped URL resolution
//!
//! Tenants are addressed either by their own host (custom domain or
//! subdomain) or by a slug segment on the shared host. The resolver only
//! decides whether to inject the slug; building the path is the route table's
//! job.

mod resolver;
mod table;

pub use resolver::{resolve_url, route_params, TenantDescriptor, STORE_SLUG_PARAM};
pub use table::{RouteError, RouteParams, RouteTable, StaticRouteTable};
