//! Canonical section shapes and their field tables
//!
//! The alias lists below are the frozen legacy spellings each field is known
//! by, most specific first.

use serde::Serialize;
use serde_json::{Map, Value};

use super::bundle::unwrap_value;
use super::precedence::{list, text, FieldResolver, FieldSpec};
use crate::theme::SectionName;

/// Hero banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub image: String,
}

/// Title and description block used by listing sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingContent {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandLogosContent {
    pub logos: Vec<Logo>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoBox {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoBoxesContent {
    pub boxes: Vec<InfoBox>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaBox {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub image: String,
}

/// Closing call to action under the CTA boxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaBottom {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaContent {
    pub boxes: Vec<CtaBox>,
    pub bottom: CtaBottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterContent {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterContent {
    pub description: String,
    pub copyright: String,
    pub social_links: Vec<SocialLink>,
}

/// Normalized content of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Hero(HeroContent),
    Category(HeadingContent),
    FeaturedProducts(HeadingContent),
    Trending(HeadingContent),
    BrandLogos(BrandLogosContent),
    InfoBoxes(InfoBoxesContent),
    Cta(CtaContent),
    Newsletter(NewsletterContent),
    Blog(HeadingContent),
    Footer(FooterContent),
}

impl SectionContent {
    /// Resolve every field of `section`
    pub fn resolve(section: SectionName, r: &FieldResolver<'_>) -> Self {
        match section {
            SectionName::Hero => SectionContent::Hero(HeroContent {
                title: resolve_text(r, &hero::TITLE),
                subtitle: resolve_text(r, &hero::SUBTITLE),
                button_text: resolve_text(r, &hero::BUTTON_TEXT),
                button_link: resolve_text(r, &hero::BUTTON_LINK),
                image: resolve_text(r, &hero::IMAGE),
            }),
            SectionName::Category => {
                SectionContent::Category(resolve_heading(r, category::TITLE, category::DESCRIPTION))
            }
            SectionName::FeaturedProducts => SectionContent::FeaturedProducts(resolve_heading(
                r,
                featured::TITLE,
                featured::DESCRIPTION,
            )),
            SectionName::Trending => {
                SectionContent::Trending(resolve_heading(r, trending::TITLE, trending::DESCRIPTION))
            }
            SectionName::BrandLogos => SectionContent::BrandLogos(BrandLogosContent {
                logos: resolve_list(r, &brand_logos::LOGOS, logo),
                stats: resolve_list(r, &brand_logos::STATS, stat),
            }),
            SectionName::InfoBoxes => SectionContent::InfoBoxes(InfoBoxesContent {
                boxes: resolve_list(r, &info_boxes::BOXES, info_box),
            }),
            SectionName::Cta => SectionContent::Cta(CtaContent {
                boxes: resolve_list(r, &cta::BOXES, cta_box),
                bottom: CtaBottom {
                    title: resolve_text(r, &cta::BOTTOM_TITLE),
                    description: resolve_text(r, &cta::BOTTOM_DESCRIPTION),
                    button_text: resolve_text(r, &cta::BOTTOM_BUTTON_TEXT),
                    button_link: resolve_text(r, &cta::BOTTOM_BUTTON_LINK),
                },
            }),
            SectionName::Newsletter => SectionContent::Newsletter(NewsletterContent {
                title: resolve_text(r, &newsletter::TITLE),
                description: resolve_text(r, &newsletter::DESCRIPTION),
                placeholder: resolve_text(r, &newsletter::PLACEHOLDER),
                button_text: resolve_text(r, &newsletter::BUTTON_TEXT),
            }),
            SectionName::Blog => {
                SectionContent::Blog(resolve_heading(r, blog::TITLE, blog::DESCRIPTION))
            }
            SectionName::Footer => SectionContent::Footer(FooterContent {
                description: resolve_text(r, &footer::DESCRIPTION),
                copyright: resolve_text(r, &footer::COPYRIGHT),
                social_links: resolve_list(r, &footer::SOCIAL_LINKS, social_link),
            }),
        }
    }

    /// The section this content belongs to
    pub fn section(&self) -> SectionName {
        match self {
            SectionContent::Hero(_) => SectionName::Hero,
            SectionContent::Category(_) => SectionName::Category,
            SectionContent::FeaturedProducts(_) => SectionName::FeaturedProducts,
            SectionContent::Trending(_) => SectionName::Trending,
            SectionContent::BrandLogos(_) => SectionName::BrandLogos,
            SectionContent::InfoBoxes(_) => SectionName::InfoBoxes,
            SectionContent::Cta(_) => SectionName::Cta,
            SectionContent::Newsletter(_) => SectionName::Newsletter,
            SectionContent::Blog(_) => SectionName::Blog,
            SectionContent::Footer(_) => SectionName::Footer,
        }
    }

    /// Content as a JSON object of props
    pub fn to_props(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(props)) => props,
            _ => Map::new(),
        }
    }
}

// Missing text falls back to "" only if a default table lacks the field.
fn resolve_text(r: &FieldResolver<'_>, field: &FieldSpec) -> String {
    r.resolve(field, text).map(|v| v.value).unwrap_or_default()
}

fn resolve_list<T>(r: &FieldResolver<'_>, field: &FieldSpec, item: fn(&Value) -> Option<T>) -> Vec<T> {
    r.resolve(field, |v| list(v, item))
        .map(|v| v.value)
        .unwrap_or_default()
}

fn resolve_heading(r: &FieldResolver<'_>, title: FieldSpec, description: FieldSpec) -> HeadingContent {
    HeadingContent {
        title: resolve_text(r, &title),
        description: resolve_text(r, &description),
    }
}

/// Text of an item field; absent or non-text fields become ""
fn item_text(item: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| item.get(*key))
        .find_map(|v| text(unwrap_value(v)))
        .unwrap_or_default()
}

fn logo(value: &Value) -> Option<Logo> {
    match value {
        Value::String(image) if !image.is_empty() => Some(Logo {
            image: image.clone(),
        }),
        Value::Object(item) => Some(Logo {
            image: item_text(item, &["image", "logo", "src"]),
        }),
        _ => None,
    }
}

fn stat(value: &Value) -> Option<Stat> {
    let item = value.as_object()?;
    Some(Stat {
        number: item_text(item, &["number", "value", "count"]),
        label: item_text(item, &["label", "title"]),
    })
}

fn info_box(value: &Value) -> Option<InfoBox> {
    let item = value.as_object()?;
    Some(InfoBox {
        icon: item_text(item, &["icon"]),
        title: item_text(item, &["title"]),
        description: item_text(item, &["description", "text"]),
    })
}

fn cta_box(value: &Value) -> Option<CtaBox> {
    let item = value.as_object()?;
    Some(CtaBox {
        title: item_text(item, &["title"]),
        subtitle: item_text(item, &["subtitle", "description"]),
        button_text: item_text(item, &["button_text", "buttonText"]),
        button_link: item_text(item, &["button_link", "buttonLink", "link"]),
        image: item_text(item, &["image"]),
    })
}

fn social_link(value: &Value) -> Option<SocialLink> {
    let item = value.as_object()?;
    Some(SocialLink {
        platform: item_text(item, &["platform", "name"]),
        url: item_text(item, &["url", "link"]),
    })
}

mod hero {
    use super::FieldSpec;

    pub const TITLE: FieldSpec =
        FieldSpec::new(&["title"]).aliases(&[&["hero_section", "title"], &["hero_title"]]);
    pub const SUBTITLE: FieldSpec =
        FieldSpec::new(&["subtitle"]).aliases(&[&["hero_section", "subtitle"], &["hero_subtitle"]]);
    pub const BUTTON_TEXT: FieldSpec = FieldSpec::new(&["button_text"])
        .aliases(&[&["hero_section", "button_text"], &["hero", "cta_text"]]);
    pub const BUTTON_LINK: FieldSpec = FieldSpec::new(&["button_link"])
        .aliases(&[&["hero_section", "button_link"], &["hero", "cta_link"]]);
    pub const IMAGE: FieldSpec = FieldSpec::new(&["image"]).aliases(&[
        &["hero_section", "image"],
        &["hero_image"],
        &["banner_image"],
    ]);
}

mod category {
    use super::FieldSpec;

    pub const TITLE: FieldSpec =
        FieldSpec::new(&["title"]).aliases(&[&["categories", "title"], &["category_section", "title"]]);
    pub const DESCRIPTION: FieldSpec = FieldSpec::new(&["description"]).aliases(&[
        &["categories", "description"],
        &["category_section", "description"],
    ]);
}

mod featured {
    use super::FieldSpec;

    pub const TITLE: FieldSpec = FieldSpec::new(&["title"])
        .aliases(&[&["featured_products_section", "title"], &["featured", "title"]]);
    pub const DESCRIPTION: FieldSpec = FieldSpec::new(&["description"]).aliases(&[
        &["featured_products_section", "description"],
        &["featured", "description"],
    ]);
}

mod trending {
    use super::FieldSpec;

    pub const TITLE: FieldSpec = FieldSpec::new(&["title"])
        .aliases(&[&["trending_products", "title"], &["trending_section", "title"]]);
    pub const DESCRIPTION: FieldSpec = FieldSpec::new(&["description"]).aliases(&[
        &["trending_products", "description"],
        &["trending_section", "description"],
    ]);
}

mod brand_logos {
    use super::FieldSpec;

    pub const LOGOS: FieldSpec = FieldSpec::new(&["logos"])
        .primary()
        .aliases(&[&["brand_logos_section", "logos"], &["brands"], &["logos"]]);
    pub const STATS: FieldSpec = FieldSpec::new(&["stats"]).aliases(&[
        &["brand_stats"],
        &["brand_logos", "statistics"],
        &["brand_logos_section", "stats"],
        &["brand_section", "stats"],
        &["stats"],
    ]);
}

mod info_boxes {
    use super::FieldSpec;

    pub const BOXES: FieldSpec = FieldSpec::new(&["boxes"]).primary().aliases(&[
        &["info_section", "info_boxes"],
        &["info_section", "boxes"],
        &["features"],
    ]);
}

mod cta {
    use super::FieldSpec;

    pub const BOXES: FieldSpec = FieldSpec::new(&["boxes"]).primary().aliases(&[
        &["cta_boxes"],
        &["cta_section", "cta_boxes"],
        &["cta_section", "boxes"],
    ]);
    pub const BOTTOM_TITLE: FieldSpec = FieldSpec::new(&["bottom", "title"]).aliases(&[
        &["cta_bottom", "title"],
        &["cta_section", "bottom", "title"],
        &["cta_section", "bottom_title"],
        &["cta_bottom_title"],
    ]);
    pub const BOTTOM_DESCRIPTION: FieldSpec = FieldSpec::new(&["bottom", "description"]).aliases(&[
        &["cta_bottom", "description"],
        &["cta_section", "bottom", "description"],
        &["cta_section", "bottom_description"],
        &["cta_bottom_description"],
    ]);
    pub const BOTTOM_BUTTON_TEXT: FieldSpec = FieldSpec::new(&["bottom", "button_text"]).aliases(&[
        &["cta_bottom", "button_text"],
        &["cta_section", "bottom", "button_text"],
        &["cta_section", "bottom_button_text"],
        &["cta_bottom_button_text"],
    ]);
    pub const BOTTOM_BUTTON_LINK: FieldSpec = FieldSpec::new(&["bottom", "button_link"]).aliases(&[
        &["cta_bottom", "button_link"],
        &["cta_section", "bottom", "button_link"],
        &["cta_section", "bottom_button_link"],
        &["cta_bottom_button_link"],
    ]);
}

mod newsletter {
    use super::FieldSpec;

    pub const TITLE: FieldSpec =
        FieldSpec::new(&["title"]).aliases(&[&["newsletter_section", "title"]]);
    pub const DESCRIPTION: FieldSpec =
        FieldSpec::new(&["description"]).aliases(&[&["newsletter_section", "description"]]);
    pub const PLACEHOLDER: FieldSpec = FieldSpec::new(&["placeholder"])
        .aliases(&[&["newsletter_section", "placeholder"], &["newsletter", "input_placeholder"]]);
    pub const BUTTON_TEXT: FieldSpec = FieldSpec::new(&["button_text"])
        .aliases(&[&["newsletter_section", "button_text"], &["newsletter", "button"]]);
}

mod blog {
    use super::FieldSpec;

    pub const TITLE: FieldSpec =
        FieldSpec::new(&["title"]).aliases(&[&["blog_section", "title"], &["latest_blog", "title"]]);
    pub const DESCRIPTION: FieldSpec = FieldSpec::new(&["description"])
        .aliases(&[&["blog_section", "description"], &["latest_blog", "description"]]);
}

mod footer {
    use super::FieldSpec;

    pub const DESCRIPTION: FieldSpec = FieldSpec::new(&["description"])
        .aliases(&[&["footer_section", "description"], &["store_description"]]);
    pub const COPYRIGHT: FieldSpec = FieldSpec::new(&["copyright"])
        .aliases(&[&["footer_section", "copyright"], &["copyright_text"]]);
    pub const SOCIAL_LINKS: FieldSpec = FieldSpec::new(&["social_links"]).aliases(&[
        &["footer_section", "social_links"],
        &["social_links"],
        &["socials"],
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RawContentBundle;
    use serde_json::json;

    fn resolve(section: SectionName, raw: Value) -> SectionContent {
        let raw = RawContentBundle::from(raw);
        SectionContent::resolve(section, &FieldResolver::new(section, &raw))
    }

    #[test]
    fn test_logo_items_accept_bare_strings() {
        let content = resolve(SectionName::BrandLogos, json!({"brand_logos": ["/a.png", {"image": "/b.png"}, 3]}));
        let SectionContent::BrandLogos(logos) = content else {
            panic!("expected brand logos");
        };
        assert_eq!(
            logos.logos,
            vec![Logo { image: "/a.png".into() }, Logo { image: "/b.png".into() }]
        );
    }

    #[test]
    fn test_stats_accept_numeric_values() {
        let content = resolve(
            SectionName::BrandLogos,
            json!({"brand_stats": [{"number": 500, "label": "Stores"}]}),
        );
        let SectionContent::BrandLogos(logos) = content else {
            panic!("expected brand logos");
        };
        assert_eq!(logos.stats, vec![Stat { number: "500".into(), label: "Stores".into() }]);
    }

    #[test]
    fn test_stat_alias_order() {
        let content = resolve(
            SectionName::BrandLogos,
            json!({
                "stats": [{"number": "5", "label": "least specific"}],
                "brand_logos": {"statistics": [{"number": "2", "label": "second"}]},
                "brand_section": {"stats": [{"number": "4", "label": "fourth"}]}
            }),
        );
        let SectionContent::BrandLogos(logos) = content else {
            panic!("expected brand logos");
        };
        assert_eq!(logos.stats[0].label, "second");
    }

    #[test]
    fn test_cta_bottom_aliases() {
        let content = resolve(
            SectionName::Cta,
            json!({
                "cta_section": {"bottom_title": "Section Title", "cta_boxes": [{"title": "Box"}]},
                "cta_bottom": {"button_text": "Go"}
            }),
        );
        let SectionContent::Cta(cta) = content else {
            panic!("expected cta");
        };
        assert_eq!(cta.bottom.title, "Section Title");
        assert_eq!(cta.bottom.button_text, "Go");
        assert_eq!(cta.boxes.len(), 1);
        assert_eq!(cta.boxes[0].title, "Box");
        assert_eq!(cta.boxes[0].image, "");
    }

    #[test]
    fn test_cta_items_accept_camel_case_keys() {
        let content = resolve(
            SectionName::Cta,
            json!({"cta": [{"title": "T", "buttonText": "Buy", "buttonLink": "/buy"}]}),
        );
        let SectionContent::Cta(cta) = content else {
            panic!("expected cta");
        };
        assert_eq!(cta.boxes[0].button_text, "Buy");
        assert_eq!(cta.boxes[0].button_link, "/buy");
    }

    #[test]
    fn test_section_round_trip() {
        for section in SectionName::ALL {
            assert_eq!(resolve(section, json!({})).section(), section);
        }
    }

    #[test]
    fn test_to_props_is_flat_object() {
        let content = SectionContent::Category(HeadingContent {
            title: "T".into(),
            description: "D".into(),
        });
        let props = content.to_props();
        assert_eq!(props.get("title"), Some(&json!("T")));
        assert_eq!(props.len(), 2);
    }
}
