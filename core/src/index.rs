use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tokenizer::tokenize;

pub type TermId = u32;
pub type DocId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: DocId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}

/// Number texts sequentially from zero.
pub fn corpus_from_texts<I, S>(texts: I) -> Vec<Document>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .zip(0..)
        .map(|(text, id)| Document::new(id, text))
        .collect()
}

/// Term -> posting list, terms kept in first-seen order.
///
/// A document id appears once per occurrence of the term in that document,
/// so repeated ids carry the in-document term frequency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedIndex {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
    postings: Vec<Vec<DocId>>, // indexed by TermId, each list non-decreasing
    num_docs: u32,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index a corpus in document-id order.
    ///
    /// # Panics
    ///
    /// If the corpus holds more than `u32::MAX` documents or distinct terms.
    pub fn build(corpus: &[Document]) -> Self {
        let mut ordered: Vec<&Document> = corpus.iter().collect();
        if !corpus.windows(2).all(|w| w[0].id <= w[1].id) {
            ordered.sort_by_key(|doc| doc.id);
        }

        let mut index = Self {
            num_docs: bounded_u32(corpus.len(), "document"),
            ..Self::default()
        };
        for doc in ordered {
            for term in tokenize(&doc.text) {
                let tid = match index.dictionary.get(&term) {
                    Some(&tid) => tid,
                    None => {
                        let tid: TermId = bounded_u32(index.terms.len(), "term");
                        index.dictionary.insert(term.clone(), tid);
                        index.terms.push(term);
                        index.postings.push(Vec::new());
                        tid
                    }
                };
                index.postings[tid as usize].push(doc.id);
            }
        }

        tracing::debug!(
            num_docs = index.num_docs,
            num_terms = index.terms.len(),
            total_postings = index.total_postings(),
            "built inverted index"
        );
        index
    }

    pub fn get(&self, term: &str) -> Option<&[DocId]> {
        let tid = *self.dictionary.get(term)?;
        self.postings.get(tid as usize).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool { self.dictionary.contains_key(term) }

    /// Number of distinct terms.
    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    /// Terms in first-seen order.
    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn total_postings(&self) -> usize { self.postings.iter().map(Vec::len).sum() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.terms.iter().map(String::as_str).zip(self.postings.iter().map(Vec::as_slice))
    }

    /// Dictionary, term list and posting lists agree, and every list is non-decreasing.
    pub fn is_consistent(&self) -> bool {
        dictionary_matches(&self.dictionary, &self.terms)
            && self.postings.len() == self.terms.len()
            && self.postings.iter().all(|ids| ids.windows(2).all(|w| w[0] <= w[1]))
    }

    pub(crate) fn dictionary(&self) -> &HashMap<String, TermId> { &self.dictionary }
}

/// Every term maps to its own position in `terms`, and nothing else is mapped.
pub(crate) fn dictionary_matches(
    dictionary: &HashMap<String, TermId>,
    terms: &[String],
) -> bool {
    dictionary.len() == terms.len()
        && terms
            .iter()
            .enumerate()
            .all(|(i, term)| dictionary.get(term).map(|&tid| tid as usize) == Some(i))
}

fn bounded_u32(count: usize, what: &str) -> u32 {
    match u32::try_from(count) {
        Ok(n) => n,
        Err(_) => panic!("{what} count {count} exceeds u32 range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_terms_keep_duplicate_ids() {
        let index = InvertedIndex::build(&corpus_from_texts(["a b a", "a"]));
        assert_eq!(index.get("a"), Some(&[0, 0, 1][..]));
        assert_eq!(index.get("b"), Some(&[0][..]));
        assert_eq!(index.total_postings(), 4);
    }

    #[test]
    fn terms_in_first_seen_order() {
        let index = InvertedIndex::build(&corpus_from_texts(["c a", "b a c"]));
        assert_eq!(index.terms(), &["c", "a", "b"]);
        let keys: Vec<&str> = index.iter().map(|(t, _)| t).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn case_and_punctuation_are_significant() {
        let index = InvertedIndex::build(&corpus_from_texts(["Rust rust rust,"]));
        assert_eq!(index.len(), 3);
        assert!(index.contains("rust,"));
        assert!(!index.contains("RUST"));
    }

    #[test]
    fn out_of_order_corpus_is_indexed_by_id() {
        let corpus = vec![Document::new(2, "x"), Document::new(0, "x"), Document::new(1, "y x")];
        let index = InvertedIndex::build(&corpus);
        assert_eq!(index.get("x"), Some(&[0, 1, 2][..]));
        assert_eq!(index.terms(), &["x", "y"]);
    }

    #[test]
    fn built_index_is_consistent() {
        let index = InvertedIndex::build(&corpus_from_texts(["a b a", "c", "b"]));
        assert!(index.is_consistent());
        assert!(InvertedIndex::new().is_consistent());
    }

    #[test]
    fn dictionary_must_point_at_own_position() {
        let terms = vec!["a".to_string(), "b".to_string()];
        let mut dictionary: HashMap<String, TermId> = HashMap::new();
        dictionary.insert("a".into(), 0);
        dictionary.insert("b".into(), 1);
        assert!(dictionary_matches(&dictionary, &terms));

        dictionary.insert("b".into(), 7);
        assert!(!dictionary_matches(&dictionary, &terms));

        dictionary.insert("b".into(), 1);
        dictionary.insert("c".into(), 2);
        assert!(!dictionary_matches(&dictionary, &terms));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "term count 4294967296 exceeds u32 range")]
    fn term_ids_stay_in_u32() {
        bounded_u32(u32::MAX as usize + 1, "term");
    }

    #[test]
    fn empty_corpus() {
        let index = InvertedIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.num_docs(), 0);
        assert_eq!(index, InvertedIndex::new());
    }
}
