//! Inverted index over whitespace tokens, with posting lists kept both as raw
//! document ids and as Elias-delta bit strings, plus size and latency
//! measurement for single-term lookups.

pub mod bundle;
pub mod compressed;
pub mod decode;
pub mod elias;
pub mod error;
pub mod evaluate;
pub mod index;
pub mod persist;
pub mod search;
pub mod tokenizer;

pub use bundle::IndexBundle;
pub use compressed::CompressedIndex;
pub use elias::Code;
pub use error::CodecError;
pub use evaluate::{evaluate, Metrics};
pub use index::{corpus_from_texts, DocId, Document, InvertedIndex, TermId};
pub use search::{search, Hits, Representation, SearchResult};
