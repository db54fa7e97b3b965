use serde::{Serialize, Serializer};
use std::time::Duration;

use crate::compressed::CompressedIndex;
use crate::index::{DocId, InvertedIndex};
use crate::search::{search_compressed, search_raw};

/// Bytes per document id in the uncompressed baseline (little-endian `u32`, no length prefix).
pub const POSTING_WIDTH_BYTES: u64 = std::mem::size_of::<DocId>() as u64;

/// Whole-index size figures plus lookup timings for one term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub uncompressed_size: u64,
    pub compressed_size: f64,
    pub compression_ratio: f64,
    #[serde(serialize_with = "as_secs")]
    pub uncompressed_search_time: Duration,
    #[serde(serialize_with = "as_secs")]
    pub compressed_search_time: Duration,
    pub results_count: usize,
}

impl Metrics {
    pub fn uncompressed_size_kb(&self) -> f64 { self.uncompressed_size as f64 / 1024.0 }

    pub fn compressed_size_kb(&self) -> f64 { self.compressed_size / 1024.0 }
}

fn as_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Size of every posting list at [`POSTING_WIDTH_BYTES`] per id.
pub fn uncompressed_size(index: &InvertedIndex) -> u64 {
    index.total_postings() as u64 * POSTING_WIDTH_BYTES
}

/// Total code bits over eight; fractional bytes are kept.
pub fn compressed_size(index: &CompressedIndex) -> f64 {
    index.total_bits() as f64 / 8.0
}

pub fn evaluate(uncompressed: &InvertedIndex, compressed: &CompressedIndex, term: &str) -> Metrics {
    let raw = search_raw(uncompressed, term);
    let coded = search_compressed(compressed, term);

    let uncompressed_size = uncompressed_size(uncompressed);
    let compressed_size = compressed_size(compressed);
    let compression_ratio = if uncompressed_size == 0 {
        0.0
    } else {
        compressed_size / uncompressed_size as f64
    };

    tracing::debug!(
        term,
        uncompressed_size,
        compressed_size,
        compression_ratio,
        results = raw.count,
        "evaluated query"
    );
    Metrics {
        uncompressed_size,
        compressed_size,
        compression_ratio,
        uncompressed_search_time: raw.elapsed,
        compressed_search_time: coded.elapsed,
        results_count: raw.count,
    }
}
