//! Content-addressed duplicate detection.
//!
//! Input order decides the survivor: the first document seen for a
//! fingerprint is the representative, every later one is its duplicate.
//! Callers must hand documents over in a reproducible order.

use rustc_hash::FxHashMap;

use super::canonical::{CanonicalError, Fingerprint, fingerprint};
use super::model::Document;

/// All documents sharing one fingerprint.
#[derive(Debug)]
pub struct DuplicateGroup<'a> {
    pub fingerprint: Fingerprint,
    pub representative: &'a Document,
    /// Later copies, in input order.
    pub duplicates: Vec<&'a Document>,
}

/// Result of [`find_duplicates`].
#[derive(Debug, Default)]
pub struct DuplicateIndex<'a> {
    groups: Vec<DuplicateGroup<'a>>,
    lookup: FxHashMap<Fingerprint, usize>,
    /// `(duplicate, representative)` in input order.
    pairs: Vec<(&'a Document, &'a Document)>,
    /// Documents that could not be canonicalized; treated as unique.
    pub failures: Vec<(&'a Document, CanonicalError)>,
}

impl<'a> DuplicateIndex<'a> {
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&DuplicateGroup<'a>> {
        self.lookup.get(fingerprint).map(|&i| &self.groups[i])
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> &[DuplicateGroup<'a>] {
        &self.groups
    }

    pub fn pairs(&self) -> &[(&'a Document, &'a Document)] {
        &self.pairs
    }

    pub fn duplicate_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn unique_count(&self) -> usize {
        self.groups.len() + self.failures.len()
    }
}

/// Group documents by canonical fingerprint.
pub fn find_duplicates(documents: &[Document]) -> DuplicateIndex<'_> {
    let mut index = DuplicateIndex::default();

    for doc in documents {
        let fp = match fingerprint(doc) {
            Ok(fp) => fp,
            Err(e) => {
                index.failures.push((doc, e));
                continue;
            }
        };

        match index.lookup.get(&fp) {
            Some(&i) => {
                let group = &mut index.groups[i];
                group.duplicates.push(doc);
                index.pairs.push((doc, group.representative));
            }
            None => {
                index.lookup.insert(fp, index.groups.len());
                index.groups.push(DuplicateGroup {
                    fingerprint: fp,
                    representative: doc,
                    duplicates: Vec::new(),
                });
            }
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::model::{Element, QName};

    fn doc(source: &str, markup: &str) -> Document {
        Document::parse(source, markup.as_bytes()).unwrap()
    }

    fn sources(docs: &[&Document]) -> Vec<String> {
        docs.iter().map(|d| d.source.clone()).collect()
    }

    #[test]
    fn test_first_document_survives() {
        let docs = vec![
            doc("a.svg", r#"<svg><rect x="1" y="2"/></svg>"#),
            doc("b.svg", r#"<svg><circle r="3"/></svg>"#),
            doc("c.svg", "<svg>\n  <rect y=\"2\" x=\"1\"/>\n</svg>"),
        ];
        let index = find_duplicates(&docs);

        assert_eq!(index.groups().len(), 2);
        let group = &index.groups()[0];
        assert_eq!(group.representative.source, "a.svg");
        assert_eq!(sources(&group.duplicates), ["c.svg"]);
        assert!(index.groups()[1].duplicates.is_empty());
        assert_eq!(index.duplicate_count(), 1);
        assert_eq!(index.unique_count(), 2);
    }

    #[test]
    fn test_reversed_order_flips_representative() {
        let docs = vec![
            doc("c.svg", r#"<svg><rect x="1"/></svg>"#),
            doc("b.svg", r#"<svg><circle/></svg>"#),
            doc("a.svg", r#"<svg><rect x="1"/></svg>"#),
        ];
        let index = find_duplicates(&docs);
        let (dup, rep) = index.pairs()[0];
        assert_eq!(rep.source, "c.svg");
        assert_eq!(dup.source, "a.svg");
    }

    #[test]
    fn test_lookup_by_fingerprint() {
        let docs = vec![
            doc("a.svg", "<svg><g/></svg>"),
            doc("b.svg", "<svg><g></g></svg>"),
            doc("c.svg", "<svg> <g/> </svg>"),
        ];
        let index = find_duplicates(&docs);
        let fp = fingerprint(&docs[0]).unwrap();
        let group = index.get(&fp).unwrap();
        assert_eq!(sources(&group.duplicates), ["b.svg", "c.svg"]);
    }

    #[test]
    fn test_failures_are_unique_and_reported() {
        let broken = Document::new("broken.svg", Element::new(QName::local("")));
        let docs = vec![broken.clone(), broken, doc("ok.svg", "<svg/>")];
        let index = find_duplicates(&docs);

        assert_eq!(index.failures.len(), 2);
        assert_eq!(index.failures[0].0.source, "broken.svg");
        assert_eq!(index.duplicate_count(), 0);
        assert_eq!(index.unique_count(), 3);
    }
}
