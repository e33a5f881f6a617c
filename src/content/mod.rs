//! Content normalization
//!
//! Tenant content arrives in whatever shape the content source produced over
//! the years: bare lists, `{ "value": ... }` wrappers, fields nested under
//! legacy keys. This module turns it into one canonical structure per section.
//!
//! Each field is resolved independently, taking the first usable value from:
//!
//! 1. explicit props passed by the caller
//! 2. `raw[section].value`
//! 3. `raw[section]`
//! 4. legacy key paths, in a fixed order per field
//! 5. the theme's default table
//! 6. the global default table
//!
//! Empty lists count as absent, so `[]` never suppresses a default.

mod bundle;
mod defaults;
mod normalizer;
mod precedence;
mod sections;

pub use bundle::{RawContentBundle, SectionOverrides};
pub use defaults::{parse_table, DefaultTables};
pub use normalizer::{normalize, ContentNormalizer, NormalizedContent};
pub use precedence::{FieldResolver, FieldSpec, Precedence, Resolved};
pub use sections::{
    BrandLogosContent, CtaBottom, CtaBox, CtaContent, FooterContent, HeadingContent, HeroContent,
    InfoBox, InfoBoxesContent, Logo, NewsletterContent, SectionContent, SocialLink, Stat,
};
