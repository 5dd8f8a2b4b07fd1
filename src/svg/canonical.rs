//! Canonical form and content fingerprints.
//!
//! Two icons exported by different tools often differ only in attribute order
//! and indentation. The canonical form erases both:
//!
//! - attributes sorted by their namespace-qualified key
//! - text and tail trimmed, empty strings dropped
//! - child order kept exactly (it is drawing order)
//!
//! The result is itself well-formed markup, so it can be parsed again and
//! canonicalizes to the same bytes.

use std::fmt;

use thiserror::Error;

use super::model::{self, Document, Element, QName};

/// Reasons a tree cannot be brought into canonical form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid element or attribute name `{0}`")]
    InvalidName(String),

    #[error("character U+{code:04X} is not allowed in {context}")]
    InvalidCharacter { code: u32, context: String },

    #[error("canonical serialization failed: {0}")]
    Serialize(String),
}

// ============================================================================
// Fingerprint
// ============================================================================

/// A 256-bit blake3 digest of a canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s).ok()?;
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(arr))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // first 16 hex chars are plenty for log lines
        write!(f, "{}", &self.to_hex()[..16])
    }
}

// ============================================================================
// Canonical form
// ============================================================================

/// Deterministic byte serialization used only for equality comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalForm(Vec<u8>);

impl CanonicalForm {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(*blake3::hash(&self.0).as_bytes())
    }
}

/// Canonicalize an element subtree.
pub fn canonicalize(root: &Element) -> Result<CanonicalForm, CanonicalError> {
    let mut normalized = root.clone();
    normalize(&mut normalized)?;
    normalized.tail = None;

    model::serialize_fragment(&normalized)
        .map(CanonicalForm)
        .map_err(|e| CanonicalError::Serialize(e.to_string()))
}

/// Fingerprint a whole document.
///
/// Depends only on the tree; the document's source key is ignored.
pub fn fingerprint(doc: &Document) -> Result<Fingerprint, CanonicalError> {
    canonicalize(&doc.root).map(|form| form.fingerprint())
}

fn normalize(el: &mut Element) -> Result<(), CanonicalError> {
    check_name(&el.name)?;
    for (name, value) in el.attributes.iter() {
        check_name(name)?;
        check_chars(value, "attribute value")?;
    }
    el.attributes.sort();

    el.text = trimmed(el.text.take());
    el.tail = trimmed(el.tail.take());
    if let Some(text) = &el.text {
        check_chars(text, "text")?;
    }
    if let Some(tail) = &el.tail {
        check_chars(tail, "text")?;
    }

    el.children.iter_mut().try_for_each(normalize)
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn check_name(name: &QName) -> Result<(), CanonicalError> {
    let mut chars = name.local.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_'));
    if valid {
        Ok(())
    } else {
        Err(CanonicalError::InvalidName(name.to_string()))
    }
}

fn check_chars(value: &str, context: &str) -> Result<(), CanonicalError> {
    match value.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(CanonicalError::InvalidCharacter {
            code: c as u32,
            context: context.to_string(),
        }),
        None => Ok(()),
    }
}

/// XML 1.0 `Char` production (surrogates are not valid `char`s anyway).
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(markup: &str) -> Fingerprint {
        let doc = Document::parse("test.svg", markup.as_bytes()).unwrap();
        fingerprint(&doc).unwrap()
    }

    #[test]
    fn test_attribute_order_does_not_matter() {
        let a = fp(r#"<svg viewBox="0 0 10 10" width="10"><path d="M0 0" fill="red"/></svg>"#);
        let b = fp(r#"<svg width="10" viewBox="0 0 10 10"><path fill="red" d="M0 0"/></svg>"#);
        assert_eq!(a, b);
    }

    #[test]
    fn test_whitespace_does_not_matter() {
        let a = fp("<svg><g><rect/></g></svg>");
        let b = fp("<svg>\n  <g>\n    <rect/>\n  </g>\n</svg>\n");
        assert_eq!(a, b);
    }

    #[test]
    fn test_child_order_matters() {
        let a = fp("<svg><rect/><circle/></svg>");
        let b = fp("<svg><circle/><rect/></svg>");
        assert_ne!(a, b);
    }

    #[test]
    fn test_attribute_value_matters() {
        let a = fp(r#"<svg><rect fill="red"/></svg>"#);
        let b = fp(r#"<svg><rect fill="blue"/></svg>"#);
        assert_ne!(a, b);
    }

    #[test]
    fn test_source_key_is_ignored() {
        let markup = b"<svg><rect/></svg>";
        let a = Document::parse("a/one.svg", markup).unwrap();
        let b = Document::parse("b/two.svg", markup).unwrap();
        assert_eq!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let markup = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 10 10">
            <title>  Tooth  </title>
            <use xlink:href="#a" y="2" x="1"/>
            <path fill="#fff" d="M0 0"/>
        </svg>"##;
        let doc = Document::parse("x.svg", markup.as_bytes()).unwrap();
        let first = canonicalize(&doc.root).unwrap();

        let reparsed = Document::parse("x.svg", first.as_bytes()).unwrap();
        let second = canonicalize(&reparsed.root).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_canonical_form_sorts_attributes() {
        let doc = Document::parse("x", br#"<rect y="1" x="2" fill="red"/>"#).unwrap();
        let form = canonicalize(&doc.root).unwrap();
        assert_eq!(form.as_bytes(), br#"<rect fill="red" x="2" y="1"/>"#);
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let el = Element::new(QName::local("bad name"));
        assert!(matches!(
            canonicalize(&el),
            Err(CanonicalError::InvalidName(_))
        ));
    }

    #[test]
    fn test_invalid_character_is_rejected() {
        let el = Element::svg("rect").with_attr("fill", "red\u{1}");
        assert!(matches!(
            canonicalize(&el),
            Err(CanonicalError::InvalidCharacter { code: 1, .. })
        ));
    }

    #[test]
    fn test_fingerprint_hex_roundtrip() {
        let original = Fingerprint::new([0x5a; 32]);
        assert_eq!(Fingerprint::from_hex(&original.to_hex()), Some(original));
        assert_eq!(format!("{original}"), "5a5a5a5a5a5a5a5a");
    }
}
