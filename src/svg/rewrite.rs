//! Fill/stroke rewriting policies.
//!
//! Every policy takes a document by reference and returns a rewritten copy.
//! Rewriting is best-effort: values that cannot be interpreted are kept.
//!
//! | Policy                      | Effect                                          |
//! |-----------------------------|-------------------------------------------------|
//! | [`rewrite_for_theming`]     | per-value: white/none → `none`, color → token   |
//! | [`rewrite_unified`]         | per-document: all stroke or all fill            |
//! | [`rewrite_for_masks`]       | solid strokes for CSS masks, no fixed size      |
//! | [`apply_non_scaling_stroke`]| fixed stroke width that ignores scaling         |
//! | [`strip_dimensions`]        | drop root `width`/`height`                      |

use super::model::{Document, Element};
use super::style::{ColorClass, StyleDecls, classify_color, has_active_stroke, is_active_paint};

/// Attribute marking a stroke that keeps its width under transforms.
pub const VECTOR_EFFECT: &str = "vector-effect";
pub const NON_SCALING_STROKE: &str = "non-scaling-stroke";

/// Mark an element so uniform scaling leaves stroke thickness alone.
#[inline]
pub fn mark_non_scaling(el: &mut Element) {
    el.set_attr(VECTOR_EFFECT, NON_SCALING_STROKE);
}

// ============================================================================
// Paint channels
// ============================================================================

/// One place paint can be declared: the element's attributes or its
/// inline style string. The two are rewritten independently.
trait PaintChannel {
    fn paint(&self, key: &str) -> Option<&str>;
    fn set_paint(&mut self, key: &str, value: &str);
}

impl PaintChannel for Element {
    fn paint(&self, key: &str) -> Option<&str> {
        self.attr(key)
    }

    fn set_paint(&mut self, key: &str, value: &str) {
        self.set_attr(key, value);
    }
}

impl PaintChannel for StyleDecls {
    fn paint(&self, key: &str) -> Option<&str> {
        self.get(key)
    }

    fn set_paint(&mut self, key: &str, value: &str) {
        self.set(key, value);
    }
}

/// Run `rewrite` over the element's style string, writing it back only when
/// the closure reports a change.
fn with_style(el: &mut Element, rewrite: impl FnOnce(&mut StyleDecls) -> bool) {
    let Some(style) = el.attr("style") else {
        return;
    };
    let mut decls = StyleDecls::parse(style);
    if rewrite(&mut decls) {
        el.set_attr("style", decls.to_string());
    }
}

// ============================================================================
// Theming
// ============================================================================

/// Target of the theming rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePolicy {
    /// Substitute for opaque colors, e.g. `currentColor` or `var(--icon)`.
    pub token: String,
    /// Width forced on rewritten opaque strokes.
    pub stroke_width: String,
}

impl Default for ThemePolicy {
    fn default() -> Self {
        Self {
            token: "currentColor".to_string(),
            stroke_width: "1.5".to_string(),
        }
    }
}

/// Rewrite every fill and stroke to the policy's token.
///
/// White and transparent paints become `none` (strokes also get width `0`),
/// opaque paints become the token (strokes also get the policy width),
/// absent paints are left alone.
pub fn rewrite_for_theming(doc: &Document, policy: &ThemePolicy) -> Document {
    let mut out = doc.clone();
    out.root.walk_mut(&mut |el| {
        with_style(el, |decls| theme_channel(decls, policy));
        theme_channel(el, policy);
    });
    out
}

fn theme_channel(channel: &mut impl PaintChannel, policy: &ThemePolicy) -> bool {
    let mut changed = false;

    if let Some(fill) = channel.paint("fill").and_then(|v| themed_paint(v, policy)) {
        channel.set_paint("fill", fill);
        changed = true;
    }

    if let Some(stroke) = channel.paint("stroke").and_then(|v| themed_paint(v, policy)) {
        let width = if stroke == "none" {
            "0"
        } else {
            policy.stroke_width.as_str()
        };
        channel.set_paint("stroke", stroke);
        channel.set_paint("stroke-width", width);
        changed = true;
    }

    changed
}

/// `None` means "leave the value as it is".
fn themed_paint<'p>(value: &str, policy: &'p ThemePolicy) -> Option<&'p str> {
    if value.trim().is_empty() {
        return None;
    }
    match classify_color(value) {
        ColorClass::White | ColorClass::Transparent => Some("none"),
        ColorClass::Opaque => Some(policy.token.as_str()),
    }
}

// ============================================================================
// Unified
// ============================================================================

/// Document-level rewrite: an icon is drawn either entirely with strokes or
/// entirely with fills.
///
/// When any element strokes, every element declaring paint becomes
/// `fill=none stroke=<token>`; otherwise fills become the token (unless
/// `none`) and strokes are removed.
pub fn rewrite_unified(doc: &Document, policy: &ThemePolicy) -> Document {
    let stroked = has_active_stroke(doc);
    let mut out = doc.clone();
    out.root.walk_mut(&mut |el| {
        with_style(el, |decls| {
            unify_channel(decls, stroked, policy);
            true
        });
        if el.attributes.contains("fill") || el.attributes.contains("stroke") {
            unify_channel(el, stroked, policy);
        }
    });
    out
}

fn unify_channel(channel: &mut impl PaintChannel, stroked: bool, policy: &ThemePolicy) {
    if stroked {
        channel.set_paint("fill", "none");
        channel.set_paint("stroke", &policy.token);
        channel.set_paint("stroke-width", &policy.stroke_width);
    } else {
        let fill_is_none = channel
            .paint("fill")
            .is_some_and(|f| f.trim().eq_ignore_ascii_case("none"));
        if !fill_is_none {
            channel.set_paint("fill", &policy.token);
        }
        channel.set_paint("stroke", "none");
        channel.set_paint("stroke-width", "0");
    }
}

// ============================================================================
// Masks
// ============================================================================

/// Target of the mask rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPolicy {
    /// Solid color every active stroke is forced to.
    pub color: String,
    pub stroke_width: String,
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            stroke_width: "1.5".to_string(),
        }
    }
}

/// Prepare an icon for use as a CSS mask image.
///
/// Fixed root dimensions are dropped so the icon scales with its container,
/// and every active stroke becomes a solid color so the mask is opaque.
pub fn rewrite_for_masks(doc: &Document, policy: &MaskPolicy) -> Document {
    let mut out = strip_dimensions(doc);
    out.root.walk_mut(&mut |el| {
        if el.attr("stroke").is_some_and(is_active_paint) {
            el.set_attr("stroke", policy.color.as_str());
            el.set_attr("stroke-width", policy.stroke_width.as_str());
        }
        with_style(el, |decls| {
            if !decls.get("stroke").is_some_and(is_active_paint) {
                return false;
            }
            decls.set("stroke", policy.color.as_str());
            if !decls.contains("stroke-width") {
                decls.set("stroke-width", policy.stroke_width.as_str());
            }
            true
        });
    });
    out
}

// ============================================================================
// Dimensions and scale-invariant strokes
// ============================================================================

/// Remove `width`/`height` from the root element.
pub fn strip_dimensions(doc: &Document) -> Document {
    let mut out = doc.clone();
    out.root.attributes.remove("width");
    out.root.attributes.remove("height");
    out
}

/// Force one stroke width everywhere and make it scale-invariant.
///
/// The root gets the width (and `stroke=currentColor` when it declares no
/// stroke); every drawable element gets the width plus the non-scaling marker.
pub fn apply_non_scaling_stroke(doc: &Document, stroke_width: &str) -> Document {
    let mut out = doc.clone();
    out.root.set_attr("stroke-width", stroke_width);
    if !out.root.attributes.contains("stroke") {
        out.root.set_attr("stroke", "currentColor");
    }
    out.root.walk_mut(&mut |el| {
        if el.is_drawable() {
            mark_non_scaling(el);
            el.set_attr("stroke-width", stroke_width);
        }
    });
    out
}
