//! Section identities shared by every theme

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One named, orderable block of a storefront page
///
/// The set is closed: themes choose a subset and an order, but never add
/// sections of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Hero,
    Category,
    FeaturedProducts,
    Trending,
    BrandLogos,
    InfoBoxes,
    #[serde(rename = "cta")]
    Cta,
    Newsletter,
    Blog,
    Footer,
}

impl SectionName {
    /// Every section, in the canonical page order of the default theme
    pub const ALL: [SectionName; 10] = [
        SectionName::Hero,
        SectionName::Category,
        SectionName::FeaturedProducts,
        SectionName::Trending,
        SectionName::BrandLogos,
        SectionName::InfoBoxes,
        SectionName::Cta,
        SectionName::Newsletter,
        SectionName::Blog,
        SectionName::Footer,
    ];

    /// Key under which the section's fragment lives in a content bundle
    pub fn content_key(self) -> &'static str {
        match self {
            SectionName::Hero => "hero",
            SectionName::Category => "category",
            SectionName::FeaturedProducts => "featured_products",
            SectionName::Trending => "trending",
            SectionName::BrandLogos => "brand_logos",
            SectionName::InfoBoxes => "info_boxes",
            SectionName::Cta => "cta",
            SectionName::Newsletter => "newsletter",
            SectionName::Blog => "blog",
            SectionName::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_key())
    }
}

/// Error returned when a string names no known section
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionName {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionName::ALL
            .into_iter()
            .find(|section| section.content_key() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
