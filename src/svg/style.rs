//! Fill and stroke inspection.
//!
//! Paint can be declared two ways on the same element, and both are honored
//! independently:
//!
//! ```text
//! <path stroke="#000"/>               attribute channel
//! <path style="fill:#fff;stroke:red"/> style-string channel
//! ```

use std::fmt;

use super::model::{Document, Element};

/// Encodings of pure white, compared after lower-casing and removing spaces.
const WHITE: &[&str] = &[
    "white",
    "#fff",
    "#ffffff",
    "rgb(255,255,255)",
    "rgba(255,255,255,1)",
];

/// Encodings of "no paint".
const TRANSPARENT: &[&str] = &["none", "transparent", "rgba(0,0,0,0)"];

/// Coarse color class used by the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    White,
    Transparent,
    Opaque,
}

/// Classify a paint value. Anything not white or transparent is opaque.
pub fn classify_color(value: &str) -> ColorClass {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    if WHITE.contains(&normalized.as_str()) {
        ColorClass::White
    } else if TRANSPARENT.contains(&normalized.as_str()) {
        ColorClass::Transparent
    } else {
        ColorClass::Opaque
    }
}

// ============================================================================
// Style strings
// ============================================================================

/// Declarations of an inline `style` attribute, in source order.
///
/// Only `key:value` pairs containing a colon are kept; keys are trimmed and
/// lower-cased, values trimmed. A repeated key keeps its first position and
/// its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDecls(Vec<(String, String)>);

impl StyleDecls {
    pub fn parse(style: &str) -> Self {
        let mut decls = Self::default();
        for item in style.split(';') {
            if let Some((key, value)) = item.split_once(':') {
                decls.set(&key.trim().to_ascii_lowercase(), value.trim());
            }
        }
        decls
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Serializes as `k:v` pairs joined by `;`.
impl fmt::Display for StyleDecls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{key}:{value}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Classification
// ============================================================================

/// A declared paint is active when present, non-empty and not `none`.
#[inline]
pub fn is_active_paint(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case("none")
}

/// Whether this element declares an active stroke in either channel.
pub fn element_has_active_stroke(el: &Element) -> bool {
    if el.attr("stroke").is_some_and(is_active_paint) {
        return true;
    }
    el.attr("style")
        .map(StyleDecls::parse)
        .is_some_and(|style| style.get("stroke").is_some_and(is_active_paint))
}

/// Whether any element of the document declares an active stroke.
pub fn has_active_stroke(doc: &Document) -> bool {
    doc.root.iter().any(element_has_active_stroke)
}
