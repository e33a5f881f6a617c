//! Named route table used to build storefront paths

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

/// Route parameters, kept sorted so generated query strings are stable
pub type RouteParams = BTreeMap<String, String>;

/// Errors raised while building a path from a named route
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// No route registered under this name
    #[error("route not defined: {name}")]
    UnknownRoute { name: String },

    /// A required `{param}` placeholder had no value
    #[error("missing required parameter {param} for route {route}")]
    MissingParameter { route: String, param: String },

    /// Route table TOML could not be parsed
    #[error("invalid route table: {0}")]
    Parse(String),
}

/// Lookup from route name to a concrete path
///
/// This is the seam to the host application's router. Implementations decide
/// what an unknown name means; the engine only passes the error on.
pub trait RouteTable {
    fn build(&self, name: &str, params: &RouteParams) -> Result<String, RouteError>;
}

impl<T: RouteTable + ?Sized> RouteTable for &T {
    fn build(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        (**self).build(name, params)
    }
}

/// Storefront routes shipped with the engine
const STOREFRONT_ROUTES: &[(&str, &str)] = &[
    ("store.home", "/{storeSlug?}"),
    ("store.products", "/{storeSlug?}/products"),
    ("store.product", "/{storeSlug?}/products/{product}"),
    ("store.categories", "/{storeSlug?}/categories"),
    ("store.category", "/{storeSlug?}/categories/{category}"),
    ("store.blog", "/{storeSlug?}/blog"),
    ("store.blog.post", "/{storeSlug?}/blog/{post}"),
    ("store.cart", "/{storeSlug?}/cart"),
    ("store.checkout", "/{storeSlug?}/checkout"),
    ("store.wishlist", "/{storeSlug?}/wishlist"),
    ("store.search", "/{storeSlug?}/search"),
    ("store.page", "/{storeSlug?}/pages/{page}"),
    ("store.newsletter.subscribe", "/{storeSlug?}/newsletter/subscribe"),
];

static BUILTIN: LazyLock<StaticRouteTable> = LazyLock::new(StaticRouteTable::storefront);

/// TOML structure for route tables
#[derive(Deserialize)]
struct TomlRoutes {
    #[serde(default)]
    routes: HashMap<String, String>,
}

/// Route table backed by path patterns
///
/// Patterns use `{name}` for required and `{name?}` for optional parameters.
/// An optional parameter with no value drops its whole path segment. Params
/// not consumed by the pattern are appended as a query string.
#[derive(Debug, Clone, Default)]
pub struct StaticRouteTable {
    routes: HashMap<String, String>,
}

impl StaticRouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in storefront routes
    pub fn storefront() -> Self {
        let mut table = Self::new();
        for (name, pattern) in STOREFRONT_ROUTES {
            table.insert(*name, *pattern);
        }
        table
    }

    /// Shared instance of the built-in storefront routes
    pub fn builtin() -> &'static StaticRouteTable {
        &BUILTIN
    }

    /// Load routes from a TOML document with a `[routes]` table
    pub fn from_str(content: &str) -> Result<Self, RouteError> {
        let parsed: TomlRoutes =
            toml::from_str(content).map_err(|e| RouteError::Parse(e.to_string()))?;
        Ok(Self {
            routes: parsed.routes,
        })
    }

    /// Add or replace a route
    pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.routes.insert(name.into(), pattern.into());
    }

    /// Add or replace a route, builder style
    pub fn with_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.insert(name, pattern);
        self
    }

    /// Add every route from another table, replacing same-named ones
    pub fn merge(&mut self, other: StaticRouteTable) {
        self.routes.extend(other.routes);
    }

    /// Get the pattern of a route
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(|s| s.as_str())
    }

    /// Check if a route exists
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }
}

impl RouteTable for StaticRouteTable {
    fn build(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        let pattern = self.pattern(name).ok_or_else(|| RouteError::UnknownRoute {
            name: name.to_string(),
        })?;
        build_path(name, pattern, params)
    }
}

/// Substitute params into a pattern, percent-encoding every value
fn build_path(route: &str, pattern: &str, params: &RouteParams) -> Result<String, RouteError> {
    let mut used = Vec::new();
    let mut segments = Vec::new();

    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        match placeholder(segment) {
            Some((param, optional)) => {
                // Empty values count as absent and never leak into the query
                used.push(param);
                match params.get(param).filter(|v| !v.is_empty()) {
                    Some(value) => segments.push(urlencoding::encode(value).into_owned()),
                    None if optional => {}
                    None => {
                        return Err(RouteError::MissingParameter {
                            route: route.to_string(),
                            param: param.to_string(),
                        })
                    }
                }
            }
            None => segments.push(segment.to_string()),
        }
    }

    let mut path = format!("/{}", segments.join("/"));

    let query: Vec<String> = params
        .iter()
        .filter(|(key, _)| !used.contains(&key.as_str()))
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect();
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query.join("&"));
    }
    Ok(path)
}

/// Parse `{name}` / `{name?}` into (name, optional)
fn placeholder(segment: &str) -> Option<(&str, bool)> {
    let inner = segment.strip_prefix('{')?.strip_suffix('}')?;
    match inner.strip_suffix('?') {
        Some(name) => Some((name, true)),
        None => Some((inner, false)),
    }
}
