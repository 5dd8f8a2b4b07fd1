//! In-memory document model for vector icons.
//!
//! Every element and attribute name is resolved to a [`QName`] while parsing,
//! using the `xmlns` declarations in scope at that point. Declarations are
//! consumed by the parser and regenerated by the serializer, so nothing
//! downstream depends on implicit default-namespace resolution.
//!
//! ```text
//! bytes ──► Document::parse ──► Element tree (QName + ordered attributes)
//!                                     │
//!                                     ▼
//!                          Document::serialize ──► bytes
//! ```

use std::fmt;
use std::sync::LazyLock;

use quick_xml::{
    Reader, Writer,
    escape::{resolve_predefined_entity, unescape, unescape_with},
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use regex::Regex;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// XLink namespace URI (legacy `xlink:href`).
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
/// Reserved `xml:` namespace URI.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Shape elements that draw a stroke.
pub const DRAWABLE: &[&str] = &[
    "path", "line", "polyline", "polygon", "rect", "circle", "ellipse",
];

/// Errors produced while reading or writing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("undeclared namespace prefix `{0}`")]
    UnknownPrefix(String),

    #[error("failed to serialize document: {0}")]
    Serialize(String),
}

impl DocumentError {
    fn malformed(position: impl TryInto<u64>, message: impl Into<String>) -> Self {
        Self::Malformed {
            position: position.try_into().unwrap_or(u64::MAX),
            message: message.into(),
        }
    }
}

// ============================================================================
// Names
// ============================================================================

/// A namespace-qualified name.
///
/// `namespace` holds the resolved URI, never a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QName {
    /// Name without a namespace.
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    /// Name in the SVG namespace.
    pub fn svg(local: impl Into<String>) -> Self {
        Self::qualified(SVG_NS, local)
    }

    pub fn qualified(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Compare against an unqualified name.
    #[inline]
    fn is_plain(&self, local: &str) -> bool {
        self.namespace.is_none() && self.local == local
    }
}

/// Clark notation: `{uri}local`, or just `local` when unqualified.
impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

// ============================================================================
// Attributes
// ============================================================================

/// Ordered attribute list.
///
/// Order is not semantically significant but is reproduced on output.
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(QName, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of an unqualified attribute.
    pub fn get(&self, local: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name.is_plain(local))
            .map(|(_, value)| value.as_str())
    }

    pub fn get_qualified(&self, name: &QName) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, local: &str) -> bool {
        self.get(local).is_some()
    }

    /// Set an unqualified attribute.
    pub fn set(&mut self, local: &str, value: impl Into<String>) {
        self.set_qualified(QName::local(local), value);
    }

    pub fn set_qualified(&mut self, name: QName, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Remove an unqualified attribute, returning its value.
    pub fn remove(&mut self, local: &str) -> Option<String> {
        let pos = self.0.iter().position(|(name, _)| name.is_plain(local))?;
        Some(self.0.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QName, &str)> {
        self.0.iter().map(|(name, value)| (name, value.as_str()))
    }

    /// Sort by Clark-notation key.
    pub fn sort(&mut self) {
        self.0.sort_by_cached_key(|(name, _)| name.to_string());
    }

    /// Keep only the attributes matching the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&QName, &str) -> bool) {
        self.0.retain(|(name, value)| keep(name, value));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Elements
// ============================================================================

/// A single element node.
///
/// `text` is character data before the first child; `tail` is character data
/// after this element's end tag, up to the next sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: QName,
    pub attributes: Attributes,
    pub children: Vec<Element>,
    pub text: Option<String>,
    pub tail: Option<String>,
}

impl Element {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Attributes::new(),
            children: Vec::new(),
            text: None,
            tail: None,
        }
    }

    /// Element in the SVG namespace.
    pub fn svg(local: &str) -> Self {
        Self::new(QName::svg(local))
    }

    /// Builder-style unqualified attribute.
    pub fn with_attr(mut self, local: &str, value: impl Into<String>) -> Self {
        self.attributes.set(local, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    /// Whether this is one of the [`DRAWABLE`] shapes.
    pub fn is_drawable(&self) -> bool {
        DRAWABLE.contains(&self.local_name())
    }

    /// Unqualified attribute lookup.
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attributes.get(local)
    }

    pub fn set_attr(&mut self, local: &str, value: impl Into<String>) {
        self.attributes.set(local, value);
    }

    /// Pre-order traversal including `self`.
    pub fn iter(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Visit every element of the subtree mutably, parents before children.
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }

    /// Move every unqualified element of this subtree into `namespace`.
    ///
    /// Attributes are left alone: unprefixed attributes never carry a namespace.
    pub fn adopt_namespace(&mut self, namespace: &str) {
        self.walk_mut(&mut |el| {
            if el.name.namespace.is_none() {
                el.name.namespace = Some(namespace.to_string());
            }
        });
    }
}

/// Pre-order iterator over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        self.stack.extend(el.children.iter().rev());
        Some(el)
    }
}

// ============================================================================
// Document
// ============================================================================

/// A parsed icon: one root element plus the key it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
    pub source: String,
}

impl Document {
    pub fn new(source: impl Into<String>, root: Element) -> Self {
        Self {
            root,
            source: source.into(),
        }
    }

    /// Parse markup bytes into a document.
    pub fn parse(source: impl Into<String>, bytes: &[u8]) -> Result<Self, DocumentError> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let content = std::str::from_utf8(bytes)
            .map_err(|e| DocumentError::malformed(e.valid_up_to(), "invalid UTF-8"))?;
        let root = parse_root(content)?;
        Ok(Self::new(source, root))
    }

    /// Namespace URI of the root element.
    pub fn namespace(&self) -> Option<&str> {
        self.root.name.namespace()
    }

    /// Serialize to UTF-8 markup with an XML declaration.
    pub fn serialize(&self) -> Result<Vec<u8>, DocumentError> {
        serialize_root(&self.root)
    }
}

// ============================================================================
// Parsing
// ============================================================================

type Scope = Vec<(Option<String>, Option<String>)>;

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Element>,
    scopes: Vec<Scope>,
    root: Option<Element>,
    /// Internal-subset `<!ENTITY name "value">` declarations.
    entities: FxHashMap<String, String>,
}

/// General entity declaration with a quoted literal value.
static ENTITY_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<!ENTITY[ \t\r\n]+([A-Za-z_:][A-Za-z0-9_.:-]*)[ \t\r\n]+(?:"([^"]*)"|'([^']*)')[ \t\r\n]*>"#,
    )
    .unwrap()
});

impl TreeBuilder {
    /// Record the entities declared in a DOCTYPE internal subset.
    ///
    /// Graphics editors declare namespace URIs and style fragments this way
    /// (`<!ENTITY ns_svg "http://www.w3.org/2000/svg">`). Parameter entities
    /// and external declarations are ignored. The first declaration wins.
    fn declare_entities(&mut self, doctype: &str) {
        for caps in ENTITY_DECL.captures_iter(doctype) {
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            self.entities
                .entry(caps[1].to_string())
                .or_insert_with(|| value.to_string());
        }
    }

    fn entity(&self, name: &str) -> Option<&str> {
        self.entities
            .get(name)
            .map(String::as_str)
            .or_else(|| resolve_predefined_entity(name))
    }

    /// Resolve `&name;` / `&#N;` / `&#xN;` outside of attribute values.
    fn resolve_reference(&self, name: &str) -> Option<String> {
        if let Some(code) = name.strip_prefix('#') {
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            return char::from_u32(value).map(String::from);
        }
        self.entity(name).map(str::to_string)
    }

    fn resolve(&self, prefix: Option<&str>) -> Result<Option<String>, DocumentError> {
        if prefix == Some("xml") {
            return Ok(Some(XML_NS.to_string()));
        }
        for scope in self.scopes.iter().rev() {
            if let Some((_, uri)) = scope.iter().find(|(p, _)| p.as_deref() == prefix) {
                return Ok(uri.clone());
            }
        }
        match prefix {
            None => Ok(None),
            Some(p) => Err(DocumentError::UnknownPrefix(p.to_string())),
        }
    }

    fn open(&mut self, start: &BytesStart<'_>, position: u64) -> Result<(), DocumentError> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(DocumentError::malformed(position, "multiple root elements"));
        }

        let mut scope = Scope::new();
        let mut raw_attrs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| DocumentError::malformed(position, e.to_string()))?;
            let key = utf8(attr.key.as_ref(), position)?;
            let value = unescape_with(utf8(&attr.value, position)?, |name| self.entity(name))
                .map_err(|e| DocumentError::malformed(position, e.to_string()))?
                .into_owned();
            if key == "xmlns" {
                scope.push((None, (!value.is_empty()).then_some(value)));
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                scope.push((Some(prefix.to_string()), Some(value)));
            } else {
                raw_attrs.push((key.to_string(), value));
            }
        }
        self.scopes.push(scope);

        let qname = start.name();
        let (prefix, local) = split_name(utf8(qname.as_ref(), position)?);
        let mut element = Element::new(QName {
            namespace: self.resolve(prefix)?,
            local: local.to_string(),
        });
        for (key, value) in raw_attrs {
            let name = match split_name(&key) {
                (None, local) => QName::local(local),
                (Some(prefix), local) => QName {
                    namespace: self.resolve(Some(prefix))?,
                    local: local.to_string(),
                },
            };
            element.attributes.set_qualified(name, value);
        }
        self.stack.push(element);
        Ok(())
    }

    fn close(&mut self, position: u64) -> Result<(), DocumentError> {
        let element = self
            .stack
            .pop()
            .ok_or_else(|| DocumentError::malformed(position, "unexpected end tag"))?;
        self.scopes.pop();
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => self.root = Some(element),
        }
        Ok(())
    }

    fn text(&mut self, text: &str, position: u64) -> Result<(), DocumentError> {
        let Some(current) = self.stack.last_mut() else {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(DocumentError::malformed(position, "text outside root element"));
        };
        let slot = match current.children.last_mut() {
            Some(last) => &mut last.tail,
            None => &mut current.text,
        };
        slot.get_or_insert_with(String::new).push_str(text);
        Ok(())
    }

    fn finish(self, position: u64) -> Result<Element, DocumentError> {
        if !self.stack.is_empty() {
            return Err(DocumentError::malformed(position, "unclosed element at end of input"));
        }
        self.root
            .ok_or_else(|| DocumentError::malformed(position, "no root element"))
    }
}

fn parse_root(content: &str) -> Result<Element, DocumentError> {
    let mut reader = Reader::from_str(content);
    let mut builder = TreeBuilder::default();

    loop {
        let position = u64::try_from(reader.buffer_position()).unwrap_or(u64::MAX);
        let event = reader.read_event().map_err(|e| {
            DocumentError::malformed(reader.error_position(), e.to_string())
        })?;
        match event {
            Event::Start(start) => builder.open(&start, position)?,
            Event::Empty(start) => {
                builder.open(&start, position)?;
                builder.close(position)?;
            }
            Event::End(_) => builder.close(position)?,
            Event::Text(text) => {
                let raw = utf8(&text, position)?;
                let decoded = unescape(raw)
                    .map_err(|e| DocumentError::malformed(position, e.to_string()))?;
                builder.text(&decoded, position)?;
            }
            Event::CData(data) => builder.text(utf8(&data, position)?, position)?,
            Event::GeneralRef(reference) => {
                let name = utf8(&reference, position)?;
                let resolved = builder.resolve_reference(name).ok_or_else(|| {
                    DocumentError::malformed(position, format!("unknown entity `&{name};`"))
                })?;
                builder.text(&resolved, position)?;
            }
            Event::DocType(doctype) => builder.declare_entities(utf8(&doctype, position)?),
            Event::Eof => return builder.finish(position),
            // declarations, comments, processing instructions
            _ => {}
        }
    }
}

#[inline]
fn utf8(bytes: &[u8], position: u64) -> Result<&str, DocumentError> {
    std::str::from_utf8(bytes).map_err(|_| DocumentError::malformed(position, "invalid UTF-8"))
}

#[inline]
fn split_name(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Prefix assignment for one serialization pass.
struct Prefixes {
    /// Namespace written as the default (`xmlns="…"`), if any.
    default: Option<String>,
    /// `(uri, prefix)` in first-use order.
    bound: Vec<(String, String)>,
}

impl Prefixes {
    fn plan(root: &Element) -> Self {
        let mut element_uris: Vec<&str> = Vec::new();
        let mut attr_uris: Vec<&str> = Vec::new();
        let mut has_unqualified = false;

        for el in root.iter() {
            match el.name.namespace() {
                Some(uri) if !element_uris.contains(&uri) => element_uris.push(uri),
                Some(_) => {}
                None => has_unqualified = true,
            }
            for (name, _) in el.attributes.iter() {
                if let Some(uri) = name.namespace()
                    && uri != XML_NS
                    && !attr_uris.contains(&uri)
                {
                    attr_uris.push(uri);
                }
            }
        }

        let default = if has_unqualified {
            None
        } else {
            root.name.namespace.clone()
        };

        let mut bound: Vec<(String, String)> = Vec::new();
        let mut counter = 0;
        let ordered = element_uris.iter().chain(attr_uris.iter());
        for &uri in ordered {
            let is_default = default.as_deref() == Some(uri);
            if uri == XML_NS
                || bound.iter().any(|(u, _)| u == uri)
                || (is_default && !attr_uris.contains(&uri))
            {
                continue;
            }
            let prefix = match uri {
                SVG_NS => "svg".to_string(),
                XLINK_NS => "xlink".to_string(),
                _ => {
                    let p = format!("ns{counter}");
                    counter += 1;
                    p
                }
            };
            bound.push((uri.to_string(), prefix));
        }

        Self { default, bound }
    }

    fn prefix_of(&self, uri: &str) -> Option<&str> {
        if uri == XML_NS {
            return Some("xml");
        }
        self.bound
            .iter()
            .find(|(u, _)| u == uri)
            .map(|(_, p)| p.as_str())
    }

    fn element_name(&self, name: &QName) -> String {
        match name.namespace() {
            Some(uri) if self.default.as_deref() == Some(uri) => name.local.clone(),
            Some(uri) => match self.prefix_of(uri) {
                Some(prefix) => format!("{prefix}:{}", name.local),
                None => name.local.clone(),
            },
            None => name.local.clone(),
        }
    }

    fn attribute_name(&self, name: &QName) -> String {
        match name.namespace().and_then(|uri| self.prefix_of(uri)) {
            Some(prefix) => format!("{prefix}:{}", name.local),
            None => name.local.clone(),
        }
    }
}

fn serialize_root(root: &Element) -> Result<Vec<u8>, DocumentError> {
    let mut writer = Writer::new(Vec::new());
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    emit(&mut writer, Event::Text(BytesText::new("\n")))?;
    write_element(&mut writer, root, &Prefixes::plan(root), true)?;
    Ok(writer.into_inner())
}

/// Serialize a subtree without an XML declaration.
///
/// The root's tail is never written.
pub(crate) fn serialize_fragment(root: &Element) -> Result<Vec<u8>, DocumentError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, root, &Prefixes::plan(root), true)?;
    Ok(writer.into_inner())
}

#[inline]
fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), DocumentError> {
    writer
        .write_event(event)
        .map_err(|e| DocumentError::Serialize(e.to_string()))
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    el: &Element,
    prefixes: &Prefixes,
    is_root: bool,
) -> Result<(), DocumentError> {
    let name = prefixes.element_name(&el.name);
    let mut start = BytesStart::new(name.as_str());

    if is_root {
        if let Some(uri) = &prefixes.default {
            start.push_attribute(("xmlns", uri.as_str()));
        }
        for (uri, prefix) in &prefixes.bound {
            let key = format!("xmlns:{prefix}");
            start.push_attribute((key.as_str(), uri.as_str()));
        }
    }
    for (attr, value) in el.attributes.iter() {
        let key = prefixes.attribute_name(attr);
        start.push_attribute((key.as_str(), value));
    }

    let text = el.text.as_deref().filter(|t| !t.is_empty());
    if el.children.is_empty() && text.is_none() {
        emit(writer, Event::Empty(start))?;
    } else {
        emit(writer, Event::Start(start))?;
        if let Some(text) = text {
            emit(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &el.children {
            write_element(writer, child, prefixes, false)?;
        }
        emit(writer, Event::End(BytesEnd::new(name.as_str())))?;
    }

    if !is_root
        && let Some(tail) = el.tail.as_deref().filter(|t| !t.is_empty())
    {
        emit(writer, Event::Text(BytesText::new(tail)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported by a design tool -->
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 110 110">
  <g id="layer">
    <path d="M0 0L10 10" fill="#0072BC"/>
    <use xlink:href="#dot"/>
  </g>
</svg>"##;

    fn parse(s: &str) -> Document {
        Document::parse("icon.svg", s.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_resolves_namespaces() {
        let doc = parse(ICON);
        assert_eq!(doc.namespace(), Some(SVG_NS));
        assert_eq!(doc.root.name, QName::svg("svg"));
        // xmlns declarations are not kept as attributes
        assert_eq!(doc.root.attributes.len(), 1);

        let group = &doc.root.children[0];
        assert_eq!(group.name, QName::svg("g"));
        assert_eq!(group.attr("id"), Some("layer"));

        let href = QName::qualified(XLINK_NS, "href");
        assert_eq!(group.children[1].attributes.get_qualified(&href), Some("#dot"));
    }

    #[test]
    fn test_parse_unqualified_document() {
        let doc = parse(r#"<svg viewBox="0 0 10 10"><rect width="1"/></svg>"#);
        assert_eq!(doc.namespace(), None);
        assert_eq!(doc.root.children[0].name, QName::local("rect"));
    }

    #[test]
    fn test_parse_text_and_tail() {
        let doc = parse("<svg><title>a &amp; b</title>\n  tail<g/></svg>");
        let title = &doc.root.children[0];
        assert_eq!(title.text.as_deref(), Some("a & b"));
        assert_eq!(title.tail.as_deref(), Some("\n  tail"));
        assert_eq!(doc.root.text, None);
    }

    #[test]
    fn test_parse_malformed() {
        for bad in [
            "",
            "not markup",
            "<svg><g></svg>",
            "<svg>",
            "<svg/><svg/>",
            "<svg><p:rect/></svg>",
        ] {
            assert!(
                Document::parse("bad.svg", bad.as_bytes()).is_err(),
                "expected failure for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_doctype_entities() {
        let markup = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd" [
	<!ENTITY ns_svg "http://www.w3.org/2000/svg">
	<!ENTITY ns_xlink 'http://www.w3.org/1999/xlink'>
	<!ENTITY st0 "fill:#0072BC;">
]>
<svg version="1.1" xmlns="&ns_svg;" xmlns:xlink="&ns_xlink;" viewBox="0 0 110 110">
  <path style="&st0;stroke:none" d="M0 0"/>
  <text>&st0;&#65;&amp;</text>
</svg>"#;
        let doc = parse(markup);
        assert_eq!(doc.namespace(), Some(SVG_NS));
        assert_eq!(doc.root.children[0].name, QName::svg("path"));
        assert_eq!(
            doc.root.children[0].attr("style"),
            Some("fill:#0072BC;stroke:none")
        );
        assert_eq!(doc.root.children[1].text.as_deref(), Some("fill:#0072BC;A&"));
    }

    #[test]
    fn test_undeclared_entity_is_rejected() {
        let with_doctype = "<!DOCTYPE svg [<!ENTITY a \"1\">]><svg width=\"&b;\"/>";
        assert!(Document::parse("x", with_doctype.as_bytes()).is_err());
        assert!(Document::parse("x", b"<svg><title>&nope;</title></svg>").is_err());
    }

    #[test]
    fn test_unknown_prefix_error() {
        let err = Document::parse("x", b"<svg><p:rect/></svg>").unwrap_err();
        assert!(matches!(err, DocumentError::UnknownPrefix(p) if p == "p"));
    }

    #[test]
    fn test_serialize_roundtrip_preserves_tree() {
        let doc = parse(ICON);
        let bytes = doc.serialize().unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(text.contains(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        assert!(text.contains(r##"xlink:href="#dot""##));

        let reparsed = Document::parse("icon.svg", &bytes).unwrap();
        assert_eq!(reparsed.root, doc.root);
    }

    #[test]
    fn test_serialize_mixed_namespaces_uses_prefixes() {
        // an unqualified child under an SVG root must not fall into the default namespace
        let root = Element::svg("svg").with_child(Element::new(QName::local("symbol")));
        let doc = Document::new("mixed", root);
        let bytes = doc.serialize().unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("<svg:svg"));
        assert!(text.contains("xmlns:svg="));

        let reparsed = Document::parse("mixed", &bytes).unwrap();
        assert_eq!(reparsed.root.name, QName::svg("svg"));
        assert_eq!(reparsed.root.children[0].name, QName::local("symbol"));
    }

    #[test]
    fn test_attribute_set_replaces_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("fill", "red");
        attrs.set("stroke", "blue");
        attrs.set("fill", "none");
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k.local.as_str()).collect();
        assert_eq!(keys, ["fill", "stroke"]);
        assert_eq!(attrs.get("fill"), Some("none"));
        assert_eq!(attrs.remove("stroke"), Some("blue".to_string()));
        assert!(!attrs.contains("stroke"));
    }

    #[test]
    fn test_adopt_namespace() {
        let mut el = Element::new(QName::local("g")).with_child(Element::svg("path"));
        el.adopt_namespace(SVG_NS);
        assert!(el.iter().all(|e| e.name.namespace() == Some(SVG_NS)));
    }

    #[test]
    fn test_iter_is_preorder() {
        let doc = parse("<svg><g><a/><b/></g><c/></svg>");
        let names: Vec<_> = doc.root.iter().map(Element::local_name).collect();
        assert_eq!(names, ["svg", "g", "a", "b", "c"]);
    }

    #[test]
    fn test_qname_display_clark() {
        assert_eq!(QName::svg("path").to_string(), format!("{{{SVG_NS}}}path"));
        assert_eq!(QName::local("d").to_string(), "d");
    }
}
