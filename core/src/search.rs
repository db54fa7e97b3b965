use std::fmt;
use std::time::{Duration, Instant};

use crate::bundle::IndexBundle;
use crate::compressed::CompressedIndex;
use crate::decode::decode_postings;
use crate::elias::Code;
use crate::error::CodecError;
use crate::index::{DocId, InvertedIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Raw,
    Compressed,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Raw => f.write_str("raw"),
            Representation::Compressed => f.write_str("compressed"),
        }
    }
}

/// Postings found for a term, borrowed from the index that was searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hits<'a> {
    Raw(&'a [DocId]),
    Compressed(&'a [Code]),
}

impl<'a> Hits<'a> {
    pub fn len(&self) -> usize {
        match self {
            Hits::Raw(ids) => ids.len(),
            Hits::Compressed(codes) => codes.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn representation(&self) -> Representation {
        match self {
            Hits::Raw(_) => Representation::Raw,
            Hits::Compressed(_) => Representation::Compressed,
        }
    }

    /// Document ids of the hits, decoding codes when needed.
    pub fn decode(&self) -> Result<Vec<DocId>, CodecError> {
        match self {
            Hits::Raw(ids) => Ok(ids.to_vec()),
            Hits::Compressed(codes) => decode_postings(codes),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResult<'a> {
    pub results: Hits<'a>,
    pub count: usize,
    /// Time spent in the dictionary lookup only.
    pub elapsed: Duration,
}

pub fn search_raw<'a>(index: &'a InvertedIndex, term: &str) -> SearchResult<'a> {
    let start = Instant::now();
    let ids = index.get(term).unwrap_or(&[]);
    let elapsed = start.elapsed();
    SearchResult { results: Hits::Raw(ids), count: ids.len(), elapsed }
}

pub fn search_compressed<'a>(index: &'a CompressedIndex, term: &str) -> SearchResult<'a> {
    let start = Instant::now();
    let codes = index.get(term).unwrap_or(&[]);
    let elapsed = start.elapsed();
    SearchResult { results: Hits::Compressed(codes), count: codes.len(), elapsed }
}

/// Exact-match lookup of `term` in the chosen representation. Unknown terms yield no hits.
pub fn search<'a>(
    bundle: &'a IndexBundle,
    term: &str,
    representation: Representation,
) -> SearchResult<'a> {
    match representation {
        Representation::Raw => search_raw(&bundle.uncompressed, term),
        Representation::Compressed => search_compressed(&bundle.compressed, term),
    }
}
