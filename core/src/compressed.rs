use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::elias::{delta_encode, Code};
use crate::index::{dictionary_matches, InvertedIndex, TermId};

/// Posting lists stored as one Elias-delta code per document id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedIndex {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
    postings: Vec<Vec<Code>>,
}

impl CompressedIndex {
    /// Encode every posting of `index`, keeping term order and entry order.
    pub fn compress(index: &InvertedIndex) -> Self {
        let postings: Vec<Vec<Code>> = index
            .iter()
            .map(|(_, ids)| ids.iter().map(|&id| delta_encode(u64::from(id))).collect())
            .collect();
        let compressed = Self {
            dictionary: index.dictionary().clone(),
            terms: index.terms().to_vec(),
            postings,
        };
        tracing::debug!(
            num_terms = compressed.len(),
            total_bits = compressed.total_bits(),
            "compressed inverted index"
        );
        compressed
    }

    pub fn get(&self, term: &str) -> Option<&[Code]> {
        let tid = *self.dictionary.get(term)?;
        self.postings.get(tid as usize).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn total_codes(&self) -> usize { self.postings.iter().map(Vec::len).sum() }

    /// Sum of code lengths over the whole index.
    pub fn total_bits(&self) -> usize {
        self.postings.iter().flatten().map(String::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Code])> {
        self.terms.iter().map(String::as_str).zip(self.postings.iter().map(Vec::as_slice))
    }

    /// Same terms in the same order, with one code per posting of `index`.
    pub fn is_derived_from(&self, index: &InvertedIndex) -> bool {
        dictionary_matches(&self.dictionary, &self.terms)
            && self.postings.len() == self.terms.len()
            && self.terms.as_slice() == index.terms()
            && self.iter().zip(index.iter()).all(|((_, codes), (_, ids))| codes.len() == ids.len())
    }
}
