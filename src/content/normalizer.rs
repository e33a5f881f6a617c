//! Content normalization for a theme

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::bundle::{RawContentBundle, SectionOverrides};
use super::defaults::DefaultTables;
use super::precedence::FieldResolver;
use super::sections::SectionContent;
use crate::theme::{SectionName, ThemeRegistry};

/// Canonical content for every section of a theme, in theme order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContent {
    /// Id of the theme that was actually used, after fallback
    pub theme_id: String,
    sections: Vec<SectionContent>,
}

impl NormalizedContent {
    /// Content of a section, if the theme declares it
    pub fn get(&self, section: SectionName) -> Option<&SectionContent> {
        self.sections.iter().find(|c| c.section() == section)
    }

    /// Sections in theme order
    pub fn sections(&self) -> impl Iterator<Item = SectionName> + '_ {
        self.sections.iter().map(SectionContent::section)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionContent> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for NormalizedContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for content in &self.sections {
            map.serialize_entry(content.section().content_key(), content)?;
        }
        map.end()
    }
}

/// Resolves raw content bundles against a theme registry and default tables
#[derive(Debug, Clone, Copy)]
pub struct ContentNormalizer<'r> {
    registry: &'r ThemeRegistry,
    defaults: &'r DefaultTables,
}

impl Default for ContentNormalizer<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'r> ContentNormalizer<'r> {
    pub fn new(registry: &'r ThemeRegistry, defaults: &'r DefaultTables) -> Self {
        Self { registry, defaults }
    }

    /// Normalizer over the compiled-in themes and default tables
    pub fn builtin() -> ContentNormalizer<'static> {
        ContentNormalizer::new(ThemeRegistry::builtin(), DefaultTables::builtin())
    }

    /// Normalize a bundle for a theme
    pub fn normalize(&self, theme_id: &str, raw: &RawContentBundle) -> NormalizedContent {
        self.normalize_with_overrides(theme_id, raw, &SectionOverrides::default())
    }

    /// Normalize a bundle, letting explicit props win over everything else
    pub fn normalize_with_overrides(
        &self,
        theme_id: &str,
        raw: &RawContentBundle,
        overrides: &SectionOverrides,
    ) -> NormalizedContent {
        let theme = self.registry.resolve(theme_id);
        let sections = theme
            .sections
            .iter()
            .map(|&section| {
                let resolver = FieldResolver::new(section, raw)
                    .with_explicit(overrides.get(section))
                    .with_theme_defaults(self.defaults.theme_section(&theme.id, section))
                    .with_global_defaults(self.defaults.global_section(section));
                SectionContent::resolve(section, &resolver)
            })
            .collect();

        NormalizedContent {
            theme_id: theme.id.clone(),
            sections,
        }
    }
}

/// Normalize with the compiled-in themes and defaults
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use storefront_engine::content::{normalize, RawContentBundle, SectionContent};
/// use storefront_engine::theme::SectionName;
///
/// let raw = RawContentBundle::from(json!({"featured_products": {"title": "Sale"}}));
/// let content = normalize("default", &raw);
///
/// let Some(SectionContent::FeaturedProducts(featured)) = content.get(SectionName::FeaturedProducts) else {
///     panic!("default theme renders featured products");
/// };
/// assert_eq!(featured.title, "Sale");
/// assert_eq!(featured.description, "Hand-picked favorites from our collection");
/// ```
pub fn normalize(theme_id: &str, raw: &RawContentBundle) -> NormalizedContent {
    ContentNormalizer::builtin().normalize(theme_id, raw)
}
