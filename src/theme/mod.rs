//! Theme selection
//!
//! A theme is a fixed, ordered set of sections. Themes are registered once in a
//! static table; resolving an id never fails, stale or unknown ids get the
//! default theme so a storefront still renders.
//!
//! # Example
//!
//! ```rust
//! use storefront_engine::theme::{SectionName, ThemeRegistry};
//!
//! let theme = ThemeRegistry::builtin().resolve("minimal");
//! assert_eq!(theme.sections, vec![SectionName::Hero, SectionName::Cta, SectionName::Footer]);
//!
//! let fallback = ThemeRegistry::builtin().resolve("retired-theme");
//! assert_eq!(fallback.id, "default");
//! ```

mod registry;
mod section;

pub use registry::{ThemeDescriptor, ThemeError, ThemeRegistry, DEFAULT_THEME_ID};
pub use section::{SectionName, UnknownSection};
