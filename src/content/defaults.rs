//! Compiled-in default content tables
//!
//! Each table is a TOML document keyed by section content key. The global
//! table defines every field of every section; theme tables only override
//! what the theme presents differently.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::theme::SectionName;

/// Defaults shared by every theme. Must define every field of every section.
const GLOBAL_DEFAULTS: &str = r##"
[hero]
title = "Welcome to Our Store"
subtitle = "Discover products you will love"
button_text = "Shop Now"
button_link = "#products"
image = "/images/hero/default.jpg"

[category]
title = "Shop by Category"
description = "Browse our collections"

[featured_products]
title = "Featured Products"
description = "Hand-picked favorites from our collection"

[trending]
title = "Trending Now"
description = "What everyone is buying this week"

[[brand_logos.logos]]
image = "/images/brands/brand-1.png"

[[brand_logos.logos]]
image = "/images/brands/brand-2.png"

[[brand_logos.logos]]
image = "/images/brands/brand-3.png"

[[brand_logos.logos]]
image = "/images/brands/brand-4.png"

[[brand_logos.stats]]
number = "10K+"
label = "Happy Customers"

[[brand_logos.stats]]
number = "500+"
label = "Products"

[[brand_logos.stats]]
number = "50+"
label = "Brands"

[[info_boxes.boxes]]
icon = "truck"
title = "Free Shipping"
description = "On orders over 50"

[[info_boxes.boxes]]
icon = "shield"
title = "Secure Payment"
description = "Your data is always protected"

[[info_boxes.boxes]]
icon = "refresh"
title = "Easy Returns"
description = "30 day return policy"

[[info_boxes.boxes]]
icon = "headset"
title = "24/7 Support"
description = "We are here to help"

[[cta.boxes]]
title = "New Arrivals"
subtitle = "Fresh picks for the season"
button_text = "Explore"
button_link = "#products"
image = "/images/cta/new-arrivals.jpg"

[[cta.boxes]]
title = "Special Offers"
subtitle = "Limited time deals"
button_text = "Shop Deals"
button_link = "#products"
image = "/images/cta/offers.jpg"

[cta.bottom]
title = "Join Our Community"
description = "Be the first to hear about new products and exclusive offers"
button_text = "Sign Up"
button_link = "#newsletter"

[newsletter]
title = "Subscribe to Our Newsletter"
description = "Get the latest updates and offers"
placeholder = "Enter your email"
button_text = "Subscribe"

[blog]
title = "From Our Blog"
description = "News, tips and stories"

[footer]
description = "Quality products, delivered to your door."
copyright = "All rights reserved."

[[footer.social_links]]
platform = "facebook"
url = "#"

[[footer.social_links]]
platform = "instagram"
url = "#"

[[footer.social_links]]
platform = "twitter"
url = "#"
"##;

const FASHION_DEFAULTS: &str = r##"
[hero]
title = "New Season Arrivals"
subtitle = "Discover the latest trends in fashion"
button_text = "Shop Collection"
image = "/images/themes/fashion/hero.jpg"

[featured_products]
title = "Featured Styles"

[[cta.boxes]]
title = "Women's Collection"
subtitle = "Up to 40% off"
button_text = "Shop Women"
button_link = "#products"
image = "/images/themes/fashion/women.jpg"

[[cta.boxes]]
title = "Men's Collection"
subtitle = "New styles added weekly"
button_text = "Shop Men"
button_link = "#products"
image = "/images/themes/fashion/men.jpg"

[newsletter]
title = "Get Style Updates"
"##;

const JEWELRY_DEFAULTS: &str = r##"
[hero]
title = "Timeless Elegance"
subtitle = "Handcrafted pieces for every occasion"
button_text = "Discover"
image = "/images/themes/jewelry/hero.jpg"

[featured_products]
title = "Signature Pieces"
description = "Crafted with precision and care"

[[info_boxes.boxes]]
icon = "gem"
title = "Certified Gems"
description = "Every stone comes with a certificate"

[[info_boxes.boxes]]
icon = "award"
title = "Lifetime Warranty"
description = "Craftsmanship guaranteed for life"

[[info_boxes.boxes]]
icon = "pen"
title = "Free Engraving"
description = "Make it personal"

[cta.bottom]
title = "Book a Private Consultation"
button_text = "Book Now"
"##;

const WATCHES_DEFAULTS: &str = r##"
[hero]
title = "Precision in Every Second"
subtitle = "Luxury timepieces from renowned makers"
image = "/images/themes/watches/hero.jpg"

[[brand_logos.stats]]
number = "120+"
label = "Watch Brands"

[[brand_logos.stats]]
number = "25"
label = "Years of Expertise"

[trending]
title = "Most Wanted"
"##;

const ELECTRONICS_DEFAULTS: &str = r##"
[hero]
title = "Latest Tech, Best Prices"
subtitle = "Gadgets and gear for every need"
image = "/images/themes/electronics/hero.jpg"

[[info_boxes.boxes]]
icon = "truck"
title = "Fast Delivery"
description = "Next day delivery available"

[[info_boxes.boxes]]
icon = "shield"
title = "2 Year Warranty"
description = "On all devices"

[category]
title = "Shop by Department"
"##;

const FURNITURE_DEFAULTS: &str = r##"
[hero]
title = "Design Your Space"
subtitle = "Furniture made to last"
image = "/images/themes/furniture/hero.jpg"

[cta.bottom]
title = "Visit Our Showroom"
description = "See and feel our collection in person"
button_text = "Find a Showroom"
"##;

const MINIMAL_DEFAULTS: &str = r##"
[hero]
title = "Simply Better"
"##;

/// Theme id to its default table
const THEME_DEFAULTS: &[(&str, &str)] = &[
    ("fashion", FASHION_DEFAULTS),
    ("jewelry", JEWELRY_DEFAULTS),
    ("watches", WATCHES_DEFAULTS),
    ("electronics", ELECTRONICS_DEFAULTS),
    ("furniture", FURNITURE_DEFAULTS),
    ("minimal", MINIMAL_DEFAULTS),
];

static BUILTIN: LazyLock<DefaultTables> = LazyLock::new(|| {
    let mut tables = DefaultTables::new(
        parse_table(GLOBAL_DEFAULTS).expect("Global defaults should be valid TOML"),
    );
    for (theme_id, content) in THEME_DEFAULTS {
        tables.insert_theme(
            *theme_id,
            parse_table(content).expect("Theme defaults should be valid TOML"),
        );
    }
    tables
});

/// Parse a TOML default table into JSON form
pub fn parse_table(content: &str) -> Result<Value, toml::de::Error> {
    toml::from_str::<Value>(content)
}

/// Global and per-theme default content
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultTables {
    global: Value,
    themes: HashMap<String, Value>,
}

impl Default for DefaultTables {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl DefaultTables {
    /// Create tables with a global table and no theme tables
    pub fn new(global: Value) -> Self {
        Self {
            global,
            themes: HashMap::new(),
        }
    }

    /// The compiled-in tables
    pub fn builtin() -> &'static DefaultTables {
        &BUILTIN
    }

    /// Add or replace a theme's default table
    pub fn insert_theme(&mut self, theme_id: impl Into<String>, table: Value) {
        self.themes.insert(theme_id.into(), table);
    }

    /// Add or replace a theme's default table from TOML text
    pub fn with_theme_toml(
        mut self,
        theme_id: impl Into<String>,
        content: &str,
    ) -> Result<Self, toml::de::Error> {
        self.insert_theme(theme_id, parse_table(content)?);
        Ok(self)
    }

    /// The theme's defaults for one section, if the theme has any
    pub fn theme_section(&self, theme_id: &str, section: SectionName) -> Option<&Value> {
        self.themes.get(theme_id)?.get(section.content_key())
    }

    /// The global defaults for one section
    pub fn global_section(&self, section: SectionName) -> Option<&Value> {
        self.global.get(section.content_key())
    }

    /// Themes with their own default table
    pub fn theme_ids(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|k| k.as_str())
    }

    /// An empty table, for building tables by hand
    pub fn empty_table() -> Value {
        Value::Object(Map::new())
    }
}
