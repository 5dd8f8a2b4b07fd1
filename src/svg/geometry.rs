//! View windows, placement transforms and backdrop composition.
//!
//! ```text
//!   source viewBox (minX minY w h)          target canvas W × H
//!   ┌──────────┐                            ┌──────────────────────────┐
//!   │   icon   │  ── scale = region_h / h ─►│                 ┌──────┐ │
//!   └──────────┘     center → (anchor_x,    │                 │ icon │ │
//!                              H / 2)       │                 └──────┘ │
//!                                           └──────────────────────────┘
//! ```

use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use super::model::{Document, Element, SVG_NS};
use super::rewrite::mark_non_scaling;

/// Why a document's view window could not be determined.
///
/// Callers substitute [`ViewWindow::default`] rather than failing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("no viewBox and no usable width/height")]
    Missing,

    #[error("malformed viewBox `{0}`")]
    Malformed(String),

    #[error("degenerate view window {width}×{height}")]
    Degenerate { width: f64, height: f64 },
}

// ============================================================================
// ViewWindow
// ============================================================================

/// A document's native coordinate rectangle. Width and height are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewWindow {
    /// `0 0 110 110`, the size icons are drawn at.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: 110.0,
            height: 110.0,
        }
    }
}

/// `width`/`height` with an optional `px` unit.
static DIMENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\r\n]*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)[ \t\r\n]*(?:px)?[ \t\r\n]*$")
        .unwrap()
});

impl ViewWindow {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(GeometryError::Degenerate { width, height });
        }
        Ok(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// Parse a `viewBox` value: four numbers separated by whitespace and/or commas.
    pub fn from_view_box(value: &str) -> Result<Self, GeometryError> {
        let malformed = || GeometryError::Malformed(value.to_string());
        let numbers = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?;

        match numbers[..] {
            [min_x, min_y, width, height] if min_x.is_finite() && min_y.is_finite() => {
                Self::new(min_x, min_y, width, height)
            }
            _ => Err(malformed()),
        }
    }

    /// Window declared by a root element: its `viewBox`, otherwise
    /// `0 0 width height`.
    pub fn of_root(root: &Element) -> Result<Self, GeometryError> {
        let from_view_box = root.attr("viewBox").map(Self::from_view_box);
        if let Some(Ok(window)) = from_view_box {
            return Ok(window);
        }

        let width = root.attr("width").and_then(parse_dimension);
        let height = root.attr("height").and_then(parse_dimension);
        match (width, height, from_view_box) {
            (Some(w), Some(h), _) => Self::new(0.0, 0.0, w, h),
            (_, _, Some(Err(e))) => Err(e),
            _ => Err(GeometryError::Missing),
        }
    }

    /// Center of the window in its own coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }
}

/// Formats as a `viewBox` value.
impl fmt::Display for ViewWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

fn parse_dimension(value: &str) -> Option<f64> {
    DIMENSION
        .captures(value)
        .and_then(|caps| caps[1].parse().ok())
}

// ============================================================================
// Transform
// ============================================================================

/// Uniform scale followed by translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    /// SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!(
            "translate({} {}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Fit `source` to `region_height` and center it on `(anchor_x, canvas_height / 2)`.
pub fn compute_transform(
    source: &ViewWindow,
    canvas: (f64, f64),
    anchor_x: f64,
    region_height: f64,
) -> Transform {
    let scale = region_height / source.height;
    let (cx, cy) = source.center();
    Transform {
        scale,
        translate_x: anchor_x - cx * scale,
        translate_y: canvas.1 / 2.0 - cy * scale,
    }
}

// ============================================================================
// Outline
// ============================================================================

/// Flat stroke applied after placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineStyle {
    pub color: String,
    pub width: String,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            width: "2".to_string(),
        }
    }
}

/// Force every drawable element to an unfilled, flat, scale-invariant stroke.
pub fn apply_uniform_outline(doc: &Document, outline: &OutlineStyle) -> Document {
    let mut out = doc.clone();
    outline_subtree(&mut out.root, outline);
    out
}

fn outline_subtree(root: &mut Element, outline: &OutlineStyle) {
    root.walk_mut(&mut |el| {
        if !el.is_drawable() {
            return;
        }
        el.set_attr("fill", "none");
        el.set_attr("stroke", outline.color.as_str());
        el.set_attr("stroke-width", outline.width.as_str());
        el.set_attr("stroke-linecap", "round");
        el.set_attr("stroke-linejoin", "round");
        mark_non_scaling(el);
    });
}

// ============================================================================
// Backdrop composition
// ============================================================================

/// Canvas and placement of a single icon on a wide background strip.
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropLayout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Height the icon's view window is scaled to.
    pub icon_height: f64,
    /// Horizontal center of the icon on the canvas.
    pub anchor_x: f64,
    pub outline: OutlineStyle,
}

impl Default for BackdropLayout {
    fn default() -> Self {
        Self {
            canvas_width: 1920.0,
            canvas_height: 400.0,
            icon_height: 650.0,
            anchor_x: 1440.0,
            outline: OutlineStyle::default(),
        }
    }
}

const CLIP_ID: &str = "canvasClip";

/// Place an icon on a fixed canvas, clipped to the canvas bounds.
///
/// ```text
/// <svg viewBox="0 0 W H" width=W height=H fill="none">
///   <defs><clipPath id="canvasClip"><rect width=W height=H/></clipPath></defs>
///   <g clip-path="url(#canvasClip)">
///     <g transform="translate(tx ty) scale(s)"> …icon content… </g>
///   </g>
/// </svg>
/// ```
///
/// The icon's children are copied with their structure intact, moved into
/// the SVG namespace and stripped of inline `style`. Returns the composed
/// document and the window that was used, which is the default when the
/// icon declares none.
pub fn compose_backdrop(
    doc: &Document,
    layout: &BackdropLayout,
) -> (Document, Result<ViewWindow, GeometryError>) {
    let window = ViewWindow::of_root(&doc.root);
    let source = window.clone().unwrap_or_default();
    let transform = compute_transform(
        &source,
        (layout.canvas_width, layout.canvas_height),
        layout.anchor_x,
        layout.icon_height,
    );

    let mut placed = Element::svg("g").with_attr("transform", transform.to_svg());
    for child in &doc.root.children {
        let mut content = child.clone();
        content.tail = None;
        content.adopt_namespace(SVG_NS);
        content.walk_mut(&mut |el| {
            el.attributes.remove("style");
        });
        outline_subtree(&mut content, &layout.outline);
        placed.children.push(content);
    }

    let (w, h) = (layout.canvas_width.to_string(), layout.canvas_height.to_string());
    let clip = Element::svg("clipPath").with_attr("id", CLIP_ID).with_child(
        Element::svg("rect")
            .with_attr("width", w.as_str())
            .with_attr("height", h.as_str()),
    );
    let root = Element::svg("svg")
        .with_attr("viewBox", format!("0 0 {w} {h}"))
        .with_attr("width", w.as_str())
        .with_attr("height", h.as_str())
        .with_attr("fill", "none")
        .with_child(Element::svg("defs").with_child(clip))
        .with_child(
            Element::svg("g")
                .with_attr("clip-path", format!("url(#{CLIP_ID})"))
                .with_child(placed),
        );

    (Document::new(doc.source.clone(), root), window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::model::QName;
    use crate::svg::rewrite::{NON_SCALING_STROKE, VECTOR_EFFECT};

    fn doc(markup: &str) -> Document {
        Document::parse("t.svg", markup.as_bytes()).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_view_box_parsing() {
        let w = ViewWindow::from_view_box("0 0 110 110").unwrap();
        assert_eq!(w, ViewWindow::default());

        let w = ViewWindow::from_view_box(" -5,2.5 , 20\t40 ").unwrap();
        assert_eq!((w.min_x, w.min_y, w.width, w.height), (-5.0, 2.5, 20.0, 40.0));
    }

    #[test]
    fn test_view_box_rejects_bad_values() {
        for bad in ["", "0 0 10", "0 0 10 10 10", "a b c d", "0 0 10 NaN"] {
            assert!(ViewWindow::from_view_box(bad).is_err(), "{bad:?}");
        }
        assert!(matches!(
            ViewWindow::from_view_box("0 0 0 10"),
            Err(GeometryError::Degenerate { .. })
        ));
        assert!(matches!(
            ViewWindow::from_view_box("0 0 10 -1"),
            Err(GeometryError::Degenerate { .. })
        ));
    }

    #[test]
    fn test_of_root_falls_back_to_dimensions() {
        let root = Element::svg("svg").with_attr("width", "48px").with_attr("height", " 24 ");
        let w = ViewWindow::of_root(&root).unwrap();
        assert_eq!((w.min_x, w.min_y, w.width, w.height), (0.0, 0.0, 48.0, 24.0));

        let root = root.with_attr("viewBox", "1 2 3 4");
        assert_eq!(ViewWindow::of_root(&root).unwrap().height, 4.0);
    }

    #[test]
    fn test_of_root_missing_and_malformed() {
        assert_eq!(
            ViewWindow::of_root(&Element::svg("svg")),
            Err(GeometryError::Missing)
        );
        let root = Element::svg("svg").with_attr("width", "100%").with_attr("height", "10");
        assert_eq!(ViewWindow::of_root(&root), Err(GeometryError::Missing));

        let root = Element::svg("svg").with_attr("viewBox", "oops");
        assert_eq!(
            ViewWindow::of_root(&root),
            Err(GeometryError::Malformed("oops".to_string()))
        );
    }

    #[test]
    fn test_window_display() {
        let w = ViewWindow::new(0.0, -1.5, 24.0, 24.0).unwrap();
        assert_eq!(w.to_string(), "0 -1.5 24 24");
    }

    #[test]
    fn test_transform_for_wide_canvas() {
        let t = compute_transform(&ViewWindow::default(), (1920.0, 400.0), 1440.0, 650.0);
        let scale = 650.0 / 110.0;
        assert!(close(t.scale, scale));
        assert!(close(t.translate_x, 1440.0 - 55.0 * scale));
        assert!(close(t.translate_y, 200.0 - 55.0 * scale));
        assert!((t.scale - 5.909).abs() < 1e-3);
        assert!((t.translate_x - 1115.0).abs() < 1.0);
        assert!((t.translate_y + 125.0).abs() < 1.0);
    }

    #[test]
    fn test_transform_accounts_for_offset() {
        let source = ViewWindow::new(10.0, 20.0, 50.0, 100.0).unwrap();
        let t = compute_transform(&source, (400.0, 200.0), 100.0, 200.0);
        assert!(close(t.scale, 2.0));
        assert!(close(t.translate_x, 100.0 - 35.0 * 2.0));
        assert!(close(t.translate_y, 100.0 - 70.0 * 2.0));
    }

    #[test]
    fn test_transform_to_svg() {
        let t = Transform {
            scale: 2.0,
            translate_x: 10.5,
            translate_y: -3.0,
        };
        assert_eq!(t.to_svg(), "translate(10.5 -3) scale(2)");
    }

    #[test]
    fn test_uniform_outline() {
        let out = apply_uniform_outline(
            &doc(r##"<svg><g fill="red"><circle r="1" fill="#0072BC"/></g></svg>"##),
            &OutlineStyle::default(),
        );
        let group = &out.root.children[0];
        assert_eq!(group.attr("fill"), Some("red"));

        let circle = &group.children[0];
        assert_eq!(circle.attr("fill"), Some("none"));
        assert_eq!(circle.attr("stroke"), Some("#000000"));
        assert_eq!(circle.attr("stroke-width"), Some("2"));
        assert_eq!(circle.attr("stroke-linecap"), Some("round"));
        assert_eq!(circle.attr("stroke-linejoin"), Some("round"));
        assert_eq!(circle.attr(VECTOR_EFFECT), Some(NON_SCALING_STROKE));
    }

    #[test]
    fn test_compose_backdrop_structure() {
        let icon = doc(
            r#"<svg viewBox="0 0 110 110"><g style="opacity:.5"><path d="M0 0" style="fill:red"/></g></svg>"#,
        );
        let (out, window) = compose_backdrop(&icon, &BackdropLayout::default());
        assert_eq!(window, Ok(ViewWindow::default()));

        let root = &out.root;
        assert_eq!(root.name, QName::svg("svg"));
        assert_eq!(root.attr("viewBox"), Some("0 0 1920 400"));
        assert_eq!(root.attr("width"), Some("1920"));
        assert_eq!(root.attr("fill"), Some("none"));

        let clip = &root.children[0].children[0];
        assert_eq!(clip.attr("id"), Some("canvasClip"));
        // the clip rectangle is not outlined
        assert_eq!(clip.children[0].attr("stroke"), None);

        let clipped = &root.children[1];
        assert_eq!(clipped.attr("clip-path"), Some("url(#canvasClip)"));
        let placed = &clipped.children[0];
        assert!(placed.attr("transform").unwrap().starts_with("translate("));

        let group = &placed.children[0];
        assert_eq!(group.name, QName::svg("g"));
        assert_eq!(group.attr("style"), None);
        let path = &group.children[0];
        assert_eq!(path.name, QName::svg("path"));
        assert_eq!(path.attr("d"), Some("M0 0"));
        assert_eq!(path.attr("style"), None);
        assert_eq!(path.attr("stroke"), Some("#000000"));
    }

    #[test]
    fn test_compose_backdrop_defaults_missing_window() {
        let (out, window) = compose_backdrop(&doc("<svg><path/></svg>"), &BackdropLayout::default());
        assert_eq!(window, Err(GeometryError::Missing));
        let placed = &out.root.children[1].children[0];
        let expected = compute_transform(&ViewWindow::default(), (1920.0, 400.0), 1440.0, 650.0);
        assert_eq!(placed.attr("transform"), Some(expected.to_svg().as_str()));
    }

    #[test]
    fn test_compose_backdrop_serializes_with_default_namespace() {
        let (out, _) = compose_backdrop(&doc("<svg><rect/></svg>"), &BackdropLayout::default());
        let text = String::from_utf8(out.serialize().unwrap()).unwrap();
        assert!(text.contains(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        assert!(!text.contains("svg:"));
    }
}
