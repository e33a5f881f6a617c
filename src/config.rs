//! Store configuration files
//!
//! A store config is a TOML document describing one tenant:
//!
//! ```toml
//! theme = "fashion"
//! currency_code = "EUR"
//!
//! [tenant]
//! slug = "acme"
//! enable_custom_domain = false
//!
//! [currency]
//! symbol = "€"
//! position = "after"
//!
//! [routes]
//! "store.lookbook" = "/{storeSlug?}/lookbook"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::currency::{CurrencyConfig, CurrencyOverrides};
use crate::error::ConfigError;
use crate::planner::PlanConfig;
use crate::routes::{StaticRouteTable, TenantDescriptor};
use crate::theme::DEFAULT_THEME_ID;

/// Configuration of one store
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    pub tenant: TenantDescriptor,
    /// Theme id; stale ids fall back to the default theme at render time
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Explicit currency settings, applied on top of the preset
    #[serde(default)]
    pub currency: Option<CurrencyOverrides>,
    /// Currency preset used when no `[currency]` table is given
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Extra or replacement routes
    #[serde(default)]
    pub routes: HashMap<String, String>,
}

fn default_theme() -> String {
    DEFAULT_THEME_ID.to_string()
}

impl StoreConfig {
    /// Load a store config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_str(&content)
    }

    /// Load a store config from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Effective currency: `[currency]` fields over the preset, the preset
    /// over USD
    pub fn currency(&self) -> CurrencyConfig {
        let base = match self.currency_code.as_deref() {
            Some(code) => CurrencyConfig::preset(code).unwrap_or_else(|| {
                tracing::debug!(code, "unknown currency preset, using USD");
                CurrencyConfig::usd()
            }),
            None => CurrencyConfig::usd(),
        };
        match &self.currency {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }

    /// Built-in routes with this store's routes applied on top
    pub fn route_table(&self) -> StaticRouteTable {
        let mut table = StaticRouteTable::storefront();
        for (name, pattern) in &self.routes {
            table.insert(name.clone(), pattern.clone());
        }
        table
    }

    /// Planning options for this store
    pub fn plan_config(&self) -> PlanConfig {
        PlanConfig::new().with_currency(self.currency())
    }
}

/// Load a JSON document (content bundle, catalog data) from a file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::SymbolPosition;
    use crate::routes::RouteTable;

    #[test]
    fn test_minimal_config() {
        let config = StoreConfig::from_str("[tenant]\nslug = \"acme\"").expect("Should parse");
        assert_eq!(config.tenant.slug, "acme");
        assert_eq!(config.theme, "default");
        assert_eq!(config.currency(), CurrencyConfig::usd());
        assert!(!config.tenant.uses_own_host());
    }

    #[test]
    fn test_currency_table_over_code() {
        let config = StoreConfig::from_str(
            r#"
currency_code = "GBP"

[tenant]
slug = "acme"

[currency]
symbol = "€"
position = "after"
"#,
        )
        .expect("Should parse");
        let currency = config.currency();
        assert_eq!(currency.symbol, "€");
        assert_eq!(currency.position, SymbolPosition::After);
        assert_eq!(currency.code, "GBP");
    }

    #[test]
    fn test_partial_currency_table_keeps_preset() {
        let config = StoreConfig::from_str(
            r#"
currency_code = "EUR"

[tenant]
slug = "acme"

[currency]
position = "before"
"#,
        )
        .expect("Should parse");
        let currency = config.currency();
        assert_eq!(currency.code, "EUR");
        assert_eq!(currency.symbol, "€");
        assert_eq!(currency.decimal_separator, ",");
        assert_eq!(currency.position, SymbolPosition::Before);
    }

    #[test]
    fn test_currency_table_without_code_fills_from_usd() {
        let config =
            StoreConfig::from_str("[tenant]\nslug = \"acme\"\n[currency]\ndecimals = 0").unwrap();
        let currency = config.currency();
        assert_eq!(currency.symbol, "$");
        assert_eq!(currency.decimals, 0);
    }

    #[test]
    fn test_currency_code_preset() {
        let config =
            StoreConfig::from_str("currency_code = \"jpy\"\n[tenant]\nslug = \"acme\"").unwrap();
        assert_eq!(config.currency().decimals, 0);

        let config =
            StoreConfig::from_str("currency_code = \"XXX\"\n[tenant]\nslug = \"acme\"").unwrap();
        assert_eq!(config.currency(), CurrencyConfig::usd());
    }

    #[test]
    fn test_custom_routes_applied() {
        let config = StoreConfig::from_str(
            r#"
[tenant]
slug = "acme"
enableCustomDomain = true

[routes]
"store.home" = "/{storeSlug?}/home"
"#,
        )
        .unwrap();
        assert!(config.tenant.enable_custom_domain);
        let table = config.route_table();
        assert_eq!(table.pattern("store.home"), Some("/{storeSlug?}/home"));
        assert!(table.build("store.cart", &Default::default()).is_ok());
    }

    #[test]
    fn test_missing_tenant_is_error() {
        let result = StoreConfig::from_str("theme = \"fashion\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = StoreConfig::from_file(Path::new("/nonexistent/store.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
