//! Theme registry mapping theme ids to their section capability sets

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use thiserror::Error;

use super::section::SectionName;

/// Id of the theme used when a tenant's configured theme is unknown
pub const DEFAULT_THEME_ID: &str = "default";

/// Errors that can occur while building a registry by hand
///
/// Lookups never fail; only registration does.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// Theme id registered twice
    #[error("duplicate theme definition: {id}")]
    Duplicate { id: String },

    /// Theme declares no sections
    #[error("theme {id} declares no sections")]
    EmptySections { id: String },

    /// Theme declares the same section more than once
    #[error("theme {id} declares section {section} more than once")]
    DuplicateSection { id: String, section: SectionName },
}

/// A theme's identity and ordered section set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Theme id as stored in tenant configuration
    pub id: String,
    /// Human-readable name
    pub label: String,
    /// Sections rendered by this theme, in page order
    pub sections: Vec<SectionName>,
}

impl ThemeDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, sections: Vec<SectionName>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sections,
        }
    }

    /// Check if this theme renders a section
    pub fn has_section(&self, section: SectionName) -> bool {
        self.sections.contains(&section)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        if self.sections.is_empty() {
            return Err(ThemeError::EmptySections {
                id: self.id.clone(),
            });
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(*section) {
                return Err(ThemeError::DuplicateSection {
                    id: self.id.clone(),
                    section: *section,
                });
            }
        }
        Ok(())
    }
}

/// Built-in registration table: (id, label, sections)
const BUILTIN_THEMES: &[(&str, &str, &[SectionName])] = {
    use SectionName::*;
    &[
        (
            DEFAULT_THEME_ID,
            "Default",
            &[
                Hero,
                Category,
                FeaturedProducts,
                Trending,
                BrandLogos,
                InfoBoxes,
                Cta,
                Newsletter,
                Blog,
                Footer,
            ],
        ),
        (
            "fashion",
            "Fashion",
            &[Hero, Category, FeaturedProducts, Cta, Trending, Blog, Newsletter, Footer],
        ),
        (
            "jewelry",
            "Jewelry",
            &[Hero, FeaturedProducts, InfoBoxes, BrandLogos, Cta, Footer],
        ),
        (
            "watches",
            "Watches",
            &[Hero, BrandLogos, FeaturedProducts, Trending, InfoBoxes, Newsletter, Footer],
        ),
        (
            "electronics",
            "Electronics",
            &[
                Hero,
                Category,
                FeaturedProducts,
                Trending,
                InfoBoxes,
                Cta,
                Blog,
                Newsletter,
                Footer,
            ],
        ),
        (
            "furniture",
            "Furniture",
            &[Hero, Category, FeaturedProducts, Cta, BrandLogos, Blog, Footer],
        ),
        ("minimal", "Minimal", &[Hero, Cta, Footer]),
    ]
};

static BUILTIN: LazyLock<ThemeRegistry> = LazyLock::new(|| {
    let mut registry = ThemeRegistry::empty();
    for (id, label, sections) in BUILTIN_THEMES {
        registry
            .register(ThemeDescriptor::new(*id, *label, sections.to_vec()))
            .expect("Built-in theme table should be valid");
    }
    registry
});

/// Registry of theme descriptors with a designated fallback
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: HashMap<String, ThemeDescriptor>,
    default: ThemeDescriptor,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl ThemeRegistry {
    /// The process-wide registry of compiled-in themes
    pub fn builtin() -> &'static ThemeRegistry {
        &BUILTIN
    }

    /// Create a registry containing only the fallback theme (every section)
    pub fn empty() -> Self {
        Self {
            themes: HashMap::new(),
            default: ThemeDescriptor::new(DEFAULT_THEME_ID, "Default", SectionName::ALL.to_vec()),
        }
    }

    /// Register a theme descriptor
    ///
    /// Registering the default id replaces the fallback descriptor.
    pub fn register(&mut self, theme: ThemeDescriptor) -> Result<(), ThemeError> {
        theme.validate()?;
        if self.themes.contains_key(&theme.id) {
            return Err(ThemeError::Duplicate { id: theme.id });
        }
        if theme.id == DEFAULT_THEME_ID {
            self.default = theme.clone();
        }
        self.themes.insert(theme.id.clone(), theme);
        Ok(())
    }

    /// Resolve a theme id, falling back to the default theme
    pub fn resolve(&self, theme_id: &str) -> &ThemeDescriptor {
        match self.themes.get(theme_id) {
            Some(theme) => theme,
            None => {
                tracing::debug!(theme_id, fallback = %self.default.id, "unknown theme id");
                &self.default
            }
        }
    }

    /// Resolve an optional theme id; an absent id gets the default theme
    pub fn resolve_opt(&self, theme_id: Option<&str>) -> &ThemeDescriptor {
        match theme_id {
            Some(id) => self.resolve(id),
            None => &self.default,
        }
    }

    /// Get a theme by exact id, without fallback
    pub fn get(&self, theme_id: &str) -> Option<&ThemeDescriptor> {
        self.themes.get(theme_id)
    }

    /// Check if a theme id is registered
    pub fn contains(&self, theme_id: &str) -> bool {
        self.themes.contains_key(theme_id)
    }

    /// The fallback descriptor
    pub fn default_theme(&self) -> &ThemeDescriptor {
        &self.default
    }

    /// Registered theme ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}
