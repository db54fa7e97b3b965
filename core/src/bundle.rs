use serde::{Deserialize, Serialize};

use crate::compressed::CompressedIndex;
use crate::index::{Document, InvertedIndex};

/// Both representations of one corpus, built together and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexBundle {
    pub compressed: CompressedIndex,
    pub uncompressed: InvertedIndex,
}

impl IndexBundle {
    pub fn from_corpus(corpus: &[Document]) -> Self {
        let uncompressed = InvertedIndex::build(corpus);
        let compressed = CompressedIndex::compress(&uncompressed);
        Self { compressed, uncompressed }
    }
}
