//! Sprite composition.
//!
//! Many icons are merged into one hidden container document, each under a
//! `<symbol>` addressable by identifier:
//!
//! ```text
//! <svg xmlns="http://www.w3.org/2000/svg" style="display: none;">
//!   <symbol id="dental_bur-diamond" viewBox="0 0 110 110"> … </symbol>
//!   <symbol id="standalone" viewBox="0 0 24 24"> … </symbol>
//! </svg>
//! ```
//!
//! Alongside the document the composer produces an index of entries, which
//! becomes the JSON metadata consumed by the front end.

use std::{fmt, str::FromStr};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::{GeometryError, ViewWindow};
use super::model::{Document, Element, SVG_NS};
use super::rewrite::mark_non_scaling;
use crate::catalog::{category, palette::Palette, tags};

/// Category used when a source key carries none.
pub const GENERAL: &str = "General";
/// Category of every background asset.
pub const BACKGROUNDS: &str = "Backgrounds";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("identifier `{identifier}` from {origin} is already taken")]
    DuplicateIdentifier { identifier: String, origin: String },
}

// ============================================================================
// Source keys
// ============================================================================

/// `(asset type, category, identifier)` derived from a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey {
    pub asset_type: String,
    pub category: String,
    pub identifier: String,
}

impl SourceKey {
    /// Key with an identifier supplied verbatim.
    pub fn new(
        asset_type: impl Into<String>,
        category: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            asset_type: asset_type.into(),
            category: category.into(),
            identifier: identifier.into(),
        }
    }

    /// Derive a key from an underscore-delimited file stem.
    ///
    /// | stem                      | type         | category      | identifier           |
    /// |---------------------------|--------------|---------------|----------------------|
    /// | (background folder)       | `background` | `Backgrounds` | stem                 |
    /// | `icon_dental_bur-diamond` | `icon`       | `dental`      | `dental_bur-diamond` |
    /// | `icon_standalone`         | `icon`       | `General`     | `standalone`         |
    /// | `standalone`              | `unknown`    | `General`     | `standalone`         |
    pub fn parse(stem: &str, is_background: bool) -> Self {
        if is_background {
            return Self::new("background", BACKGROUNDS, stem);
        }
        let parts: Vec<&str> = stem.splitn(3, '_').collect();
        match parts[..] {
            [asset_type, category, name] => {
                Self::new(asset_type, category, format!("{category}_{name}"))
            }
            [asset_type, name] => Self::new(asset_type, GENERAL, name),
            _ => Self::new("unknown", GENERAL, stem),
        }
    }

    pub fn is_background(&self) -> bool {
        self.category == BACKGROUNDS && self.asset_type == "background"
    }
}

// ============================================================================
// Collision policy
// ============================================================================

/// What happens when two sources derive the same identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later sources get `-2`, `-3`, … appended.
    #[default]
    Suffix,
    /// Later sources are left out and reported.
    Reject,
    /// Both symbols are embedded; the later entry replaces the earlier one in
    /// the index. Reproduces sprites built by older tooling.
    Shadow,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "suffix" => Ok(Self::Suffix),
            "reject" => Ok(Self::Reject),
            "shadow" => Ok(Self::Shadow),
            other => Err(format!(
                "unknown collision policy `{other}` (expected suffix, reject or shadow)"
            )),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Suffix => "suffix",
            Self::Reject => "reject",
            Self::Shadow => "shadow",
        })
    }
}

// ============================================================================
// Composition
// ============================================================================

/// One input to [`compose`].
#[derive(Debug, Clone)]
pub struct SpriteSource<'a> {
    pub key: SourceKey,
    pub document: &'a Document,
    /// File name, used for the metadata path of backgrounds.
    pub file_name: String,
}

/// One index entry of a composed sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteEntry {
    pub identifier: String,
    pub window: ViewWindow,
    pub asset_type: String,
    pub category: String,
    /// Location of the original file, for assets not embedded in the sprite.
    pub path: Option<String>,
    /// Index into [`Sprite::symbols`], `None` for backgrounds.
    pub symbol: Option<usize>,
}

/// Options for [`compose`].
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    pub collision: CollisionPolicy,
    /// Prefix joined with a background's file name to form its path.
    pub background_path_prefix: String,
}

/// Result of [`compose`].
#[derive(Debug, Default)]
pub struct Sprite {
    pub entries: Vec<SpriteEntry>,
    /// Embedded `<symbol>` elements, in input order.
    pub symbols: Vec<Element>,
    /// Sources that fell back to the default window.
    pub fallbacks: Vec<(String, GeometryError)>,
    pub rejected: Vec<ComposeError>,
}

impl Sprite {
    /// Container document holding every symbol.
    pub fn document(&self, source: impl Into<String>) -> Document {
        let mut root = Element::svg("svg").with_attr("style", "display: none;");
        root.children = self.symbols.clone();
        Document::new(source, root)
    }

    pub fn entry(&self, identifier: &str) -> Option<&SpriteEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }
}

/// Merge sources into a sprite, in order.
///
/// Each source's view window comes from its `viewBox`, or the default window
/// when that is absent or malformed.
pub fn compose(sources: &[SpriteSource<'_>], options: &ComposeOptions) -> Sprite {
    let mut sprite = Sprite::default();
    // identifier → position in `entries`
    let mut taken: FxHashMap<String, usize> = FxHashMap::default();

    for source in sources {
        let root = &source.document.root;
        let window = match root.attr("viewBox").map(ViewWindow::from_view_box) {
            Some(Ok(window)) => window,
            Some(Err(e)) => {
                sprite.fallbacks.push((source.key.identifier.clone(), e));
                ViewWindow::default()
            }
            None => {
                sprite
                    .fallbacks
                    .push((source.key.identifier.clone(), GeometryError::Missing));
                ViewWindow::default()
            }
        };

        let mut identifier = source.key.identifier.clone();
        let mut shadowed = None;
        if let Some(&position) = taken.get(&identifier) {
            match options.collision {
                CollisionPolicy::Suffix => identifier = next_free(&identifier, &taken),
                CollisionPolicy::Reject => {
                    sprite.rejected.push(ComposeError::DuplicateIdentifier {
                        identifier,
                        origin: source.document.source.clone(),
                    });
                    continue;
                }
                CollisionPolicy::Shadow => shadowed = Some(position),
            }
        }

        let is_background = source.key.is_background();
        let symbol = (!is_background).then(|| {
            sprite.symbols.push(make_symbol(root, &identifier, &window));
            sprite.symbols.len() - 1
        });
        let entry = SpriteEntry {
            identifier: identifier.clone(),
            window,
            asset_type: source.key.asset_type.clone(),
            category: source.key.category.clone(),
            path: is_background
                .then(|| format!("{}{}", options.background_path_prefix, source.file_name)),
            symbol,
        };

        match shadowed {
            Some(position) => sprite.entries[position] = entry,
            None => {
                taken.insert(identifier, sprite.entries.len());
                sprite.entries.push(entry);
            }
        }
    }

    sprite
}

fn next_free(identifier: &str, taken: &FxHashMap<String, usize>) -> String {
    (2..)
        .map(|n| format!("{identifier}-{n}"))
        .find(|candidate| !taken.contains_key(candidate))
        .unwrap_or_else(|| identifier.to_string())
}

/// Re-parent a document's children under a `<symbol>`.
fn make_symbol(root: &Element, identifier: &str, window: &ViewWindow) -> Element {
    let mut symbol = Element::svg("symbol")
        .with_attr("id", identifier)
        .with_attr("viewBox", window.to_string());
    symbol.children = root.children.clone();
    symbol.adopt_namespace(SVG_NS);
    symbol.walk_mut(&mut |el| {
        if el.is_drawable() {
            mark_non_scaling(el);
        }
    });
    symbol
}

// ============================================================================
// Metadata
// ============================================================================

/// Index record of one entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub id: String,
    pub view_box: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub category: String,
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggested_categories: Vec<&'static str>,
    pub tags: Vec<String>,
}

/// Companion JSON describing a sprite.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteMetadata {
    pub sprite_name: String,
    pub sprite_url: String,
    pub sprite_file: String,
    pub icons: Vec<IconRecord>,
    pub colors: Palette,
}

impl SpriteMetadata {
    /// `url_prefix` is joined with `<name>.svg` to locate the sprite.
    pub fn new(sprite: &Sprite, name: &str, url_prefix: &str) -> Self {
        let url = format!("{url_prefix}{name}.svg");
        let icons = sprite
            .entries
            .iter()
            .map(|entry| {
                let tags = tags::generate(
                    &entry.identifier,
                    &entry.category,
                    &entry.asset_type,
                    entry.symbol.and_then(|i| sprite.symbols.get(i)),
                );
                IconRecord {
                    id: entry.identifier.clone(),
                    view_box: entry.window.to_string(),
                    asset_type: entry.asset_type.clone(),
                    category: entry.category.clone(),
                    path: entry.path.clone(),
                    suggested_categories: category::suggest(&entry.identifier, &tags),
                    tags,
                }
            })
            .collect();

        Self {
            sprite_name: name.to_string(),
            sprite_url: url.clone(),
            sprite_file: url,
            icons,
            colors: Palette,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::model::QName;
    use crate::svg::rewrite::{NON_SCALING_STROKE, VECTOR_EFFECT};

    fn doc(source: &str, markup: &str) -> Document {
        Document::parse(source, markup.as_bytes()).unwrap()
    }

    fn source<'a>(stem: &str, document: &'a Document) -> SpriteSource<'a> {
        SpriteSource {
            key: SourceKey::parse(stem, false),
            document,
            file_name: format!("{stem}.svg"),
        }
    }

    #[test]
    fn test_source_key_three_segments() {
        let key = SourceKey::parse("icon_dental_bur-diamond", false);
        assert_eq!(key, SourceKey::new("icon", "dental", "dental_bur-diamond"));
    }

    #[test]
    fn test_source_key_splits_at_most_twice() {
        let key = SourceKey::parse("icon_medical_blood_bag", false);
        assert_eq!(key.category, "medical");
        assert_eq!(key.identifier, "medical_blood_bag");
    }

    #[test]
    fn test_source_key_two_segments() {
        let key = SourceKey::parse("icon_standalone", false);
        assert_eq!(key, SourceKey::new("icon", "General", "standalone"));
    }

    #[test]
    fn test_source_key_single_segment_and_background() {
        assert_eq!(
            SourceKey::parse("logo", false),
            SourceKey::new("unknown", "General", "logo")
        );
        let bg = SourceKey::parse("wave_blue", true);
        assert_eq!(bg, SourceKey::new("background", "Backgrounds", "wave_blue"));
        assert!(bg.is_background());
    }

    #[test]
    fn test_collision_policy_parsing() {
        assert_eq!("Reject".parse::<CollisionPolicy>(), Ok(CollisionPolicy::Reject));
        assert_eq!("shadow".parse::<CollisionPolicy>(), Ok(CollisionPolicy::Shadow));
        assert!("merge".parse::<CollisionPolicy>().is_err());
        assert_eq!(CollisionPolicy::default().to_string(), "suffix");
    }

    #[test]
    fn test_compose_builds_symbols() {
        let a = doc(
            "a.svg",
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><g><path d="M0 0"/></g><circle r="2"/></svg>"##,
        );
        let b = doc("b.svg", r#"<svg><rect width="3"/></svg>"#);
        let sprite = compose(
            &[source("icon_dental_tooth", &a), source("icon_plain", &b)],
            &ComposeOptions::default(),
        );

        assert_eq!(sprite.entries.len(), 2);
        assert_eq!(sprite.symbols.len(), 2);

        let first = &sprite.symbols[0];
        assert_eq!(first.name, QName::svg("symbol"));
        assert_eq!(first.attr("id"), Some("dental_tooth"));
        assert_eq!(first.attr("viewBox"), Some("0 0 24 24"));
        assert_eq!(first.children[0].attr(VECTOR_EFFECT), None);
        assert_eq!(
            first.children[0].children[0].attr(VECTOR_EFFECT),
            Some(NON_SCALING_STROKE)
        );
        assert_eq!(first.children[1].attr(VECTOR_EFFECT), Some(NON_SCALING_STROKE));

        // unqualified content is adopted into the SVG namespace
        let second = &sprite.symbols[1];
        assert_eq!(second.children[0].name, QName::svg("rect"));
        assert_eq!(second.attr("viewBox"), Some("0 0 110 110"));
        assert_eq!(sprite.fallbacks.len(), 1);
        assert_eq!(sprite.fallbacks[0].0, "plain");
    }

    #[test]
    fn test_compose_does_not_touch_inputs() {
        let a = doc("a.svg", "<svg><path/></svg>");
        let _ = compose(&[source("icon_a", &a)], &ComposeOptions::default());
        assert_eq!(a.root.children[0].attr(VECTOR_EFFECT), None);
    }

    #[test]
    fn test_malformed_view_box_uses_default() {
        let a = doc("a.svg", r#"<svg viewBox="0 0 abc"><path/></svg>"#);
        let sprite = compose(&[source("icon_a", &a)], &ComposeOptions::default());
        assert_eq!(sprite.entries[0].window, ViewWindow::default());
        assert!(matches!(sprite.fallbacks[0].1, GeometryError::Malformed(_)));
    }

    #[test]
    fn test_collision_suffix() {
        let a = doc("a.svg", "<svg><path/></svg>");
        let b = doc("b.svg", "<svg><rect/></svg>");
        let c = doc("c.svg", "<svg><circle/></svg>");
        let sprite = compose(
            &[source("x_icon", &a), source("y_icon", &b), source("z_icon", &c)],
            &ComposeOptions::default(),
        );
        let ids: Vec<_> = sprite.entries.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, ["icon", "icon-2", "icon-3"]);
        assert_eq!(sprite.symbols[2].attr("id"), Some("icon-3"));
    }

    #[test]
    fn test_collision_reject() {
        let a = doc("a.svg", "<svg><path/></svg>");
        let b = doc("b.svg", "<svg><rect/></svg>");
        let options = ComposeOptions {
            collision: CollisionPolicy::Reject,
            ..Default::default()
        };
        let sprite = compose(&[source("x_icon", &a), source("y_icon", &b)], &options);
        assert_eq!(sprite.entries.len(), 1);
        assert_eq!(sprite.symbols.len(), 1);
        assert_eq!(
            sprite.rejected,
            [ComposeError::DuplicateIdentifier {
                identifier: "icon".to_string(),
                origin: "b.svg".to_string(),
            }]
        );
    }

    #[test]
    fn test_collision_shadow() {
        let a = doc("a.svg", r#"<svg viewBox="0 0 10 10"><path/></svg>"#);
        let b = doc("b.svg", r#"<svg viewBox="0 0 20 20"><rect/></svg>"#);
        let c = doc("c.svg", "<svg><circle/></svg>");
        let options = ComposeOptions {
            collision: CollisionPolicy::Shadow,
            ..Default::default()
        };
        let sprite = compose(
            &[source("x_icon", &a), source("other_thing", &c), source("y_icon", &b)],
            &options,
        );

        // both fragments are embedded under the same id
        assert_eq!(sprite.symbols.len(), 3);
        assert_eq!(sprite.symbols[0].attr("id"), Some("icon"));
        assert_eq!(sprite.symbols[2].attr("id"), Some("icon"));

        // the later entry took the earlier one's slot
        assert_eq!(sprite.entries.len(), 2);
        assert_eq!(sprite.entries[0].asset_type, "y");
        assert_eq!(sprite.entries[0].window.width, 20.0);
        assert_eq!(sprite.entries[0].symbol, Some(2));
        assert_eq!(sprite.entries[1].identifier, "thing");
    }

    #[test]
    fn test_backgrounds_are_not_embedded() {
        let icon = doc("i.svg", "<svg><path/></svg>");
        let bg = doc("wave.svg", r#"<svg viewBox="0 0 1920 400"><rect/></svg>"#);
        let options = ComposeOptions {
            background_path_prefix: "./svg/backgrounds/".to_string(),
            ..Default::default()
        };
        let sprite = compose(
            &[
                source("icon_dental_tooth", &icon),
                SpriteSource {
                    key: SourceKey::parse("wave", true),
                    document: &bg,
                    file_name: "wave.svg".to_string(),
                },
            ],
            &options,
        );

        assert_eq!(sprite.symbols.len(), 1);
        let entry = sprite.entry("wave").unwrap();
        assert_eq!(entry.path.as_deref(), Some("./svg/backgrounds/wave.svg"));
        assert_eq!(entry.symbol, None);
        assert_eq!(entry.window.to_string(), "0 0 1920 400");
        assert_eq!(sprite.entry("dental_tooth").unwrap().path, None);
    }

    #[test]
    fn test_sprite_document_serializes() {
        let a = doc("a.svg", r#"<svg viewBox="0 0 24 24"><path d="M1 1"/></svg>"#);
        let sprite = compose(&[source("icon_a", &a)], &ComposeOptions::default());
        let text = String::from_utf8(sprite.document("icons.svg").serialize().unwrap()).unwrap();
        assert!(text.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" style="display: none;">"#));
        assert!(text.contains(r#"<symbol id="a" viewBox="0 0 24 24">"#));
        assert!(text.contains(r#"vector-effect="non-scaling-stroke""#));
    }

    #[test]
    fn test_metadata_json() {
        let a = doc("a.svg", r#"<svg viewBox="0 0 24 24"><path/></svg>"#);
        let sprite = compose(&[source("icon_dental_tooth", &a)], &ComposeOptions::default());
        let meta = SpriteMetadata::new(&sprite, "hs-icons", "./dist/");
        let value: serde_json::Value = serde_json::from_str(&meta.to_json().unwrap()).unwrap();

        assert_eq!(value["spriteName"], "hs-icons");
        assert_eq!(value["spriteUrl"], "./dist/hs-icons.svg");
        assert_eq!(value["spriteFile"], "./dist/hs-icons.svg");

        let icon = &value["icons"][0];
        assert_eq!(icon["id"], "dental_tooth");
        assert_eq!(icon["viewBox"], "0 0 24 24");
        assert_eq!(icon["type"], "icon");
        assert_eq!(icon["category"], "dental");
        assert!(icon["path"].is_null());
        assert_eq!(icon["suggestedCategories"][0], "dental");
        assert_eq!(
            icon["tags"],
            serde_json::json!([
                "clinical", "custom", "dental", "dentist", "drawn", "healthcare", "icon",
                "medical", "oral", "teeth", "tooth", "vector"
            ])
        );

        assert_eq!(value["colors"]["Neutrals"]["icon-black"], "#000000");
    }

    #[test]
    fn test_metadata_key_order() {
        let sprite = Sprite::default();
        let json = SpriteMetadata::new(&sprite, "s", "./").to_json().unwrap();
        let name = json.find("spriteName").unwrap();
        let url = json.find("spriteUrl").unwrap();
        let icons = json.find("\"icons\"").unwrap();
        let colors = json.find("\"colors\"").unwrap();
        assert!(name < url && url < icons && icons < colors);
    }
}
