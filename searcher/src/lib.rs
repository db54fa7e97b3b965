use anyhow::Result;
use postings_core::persist::{load_bundle, IndexPaths};
use postings_core::{
    evaluate, search, Code, CodecError, DocId, Hits, IndexBundle, Metrics, Representation,
    SearchResult,
};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum Postings {
    Ids(Vec<DocId>),
    Codes(Vec<Code>),
}

#[derive(Serialize, Debug)]
pub struct SearchResponse {
    pub query: String,
    pub representation: String,
    pub took_s: f64,
    pub count: usize,
    pub results: Postings,
}

impl SearchResponse {
    /// Copy a lookup result out of the index; with `decode`, codes are turned back into ids.
    pub fn from_result(
        query: &str,
        result: &SearchResult<'_>,
        decode: bool,
    ) -> Result<Self, CodecError> {
        let results = match result.results {
            Hits::Raw(ids) => Postings::Ids(ids.to_vec()),
            Hits::Compressed(_) if decode => Postings::Ids(result.results.decode()?),
            Hits::Compressed(codes) => Postings::Codes(codes.to_vec()),
        };
        Ok(Self {
            query: query.to_string(),
            representation: result.results.representation().to_string(),
            took_s: result.elapsed.as_secs_f64(),
            count: result.count,
            results,
        })
    }
}

/// A loaded index ready for queries.
pub struct Searcher {
    bundle: IndexBundle,
}

impl Searcher {
    pub fn open<P: AsRef<Path>>(index_dir: P) -> Result<Self> {
        let bundle = load_bundle(&IndexPaths::new(index_dir))?;
        tracing::info!(
            num_docs = bundle.uncompressed.num_docs(),
            num_terms = bundle.uncompressed.len(),
            "index loaded"
        );
        Ok(Self::from_bundle(bundle))
    }

    pub fn from_bundle(bundle: IndexBundle) -> Self { Self { bundle } }

    pub fn search(&self, query: &str, representation: Representation) -> SearchResult<'_> {
        search(&self.bundle, query, representation)
    }

    pub fn evaluate(&self, query: &str) -> Metrics {
        evaluate(&self.bundle.uncompressed, &self.bundle.compressed, query)
    }
}

pub fn format_report(metrics: &Metrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Uncompressed index size: {:.2} KB", metrics.uncompressed_size_kb());
    let _ = writeln!(out, "Compressed index size: {:.2} KB", metrics.compressed_size_kb());
    let _ = writeln!(out, "Compression ratio: {:.2}x", metrics.compression_ratio);
    let raw_secs = metrics.uncompressed_search_time.as_secs_f64();
    let coded_secs = metrics.compressed_search_time.as_secs_f64();
    let _ = writeln!(out, "Uncompressed search time: {raw_secs:.6} s");
    let _ = writeln!(out, "Compressed search time: {coded_secs:.6} s");
    let _ = writeln!(out, "Results found: {}", metrics.results_count);
    out
}

pub fn format_search(response: &SearchResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Query: {} ({})", response.query, response.representation);
    let _ = writeln!(out, "Results found: {}", response.count);
    let _ = writeln!(out, "Search time: {:.6} s", response.took_s);
    match &response.results {
        Postings::Ids(ids) => {
            for id in ids {
                let _ = writeln!(out, "{id}");
            }
        }
        Postings::Codes(codes) => {
            for code in codes {
                let _ = writeln!(out, "{code}");
            }
        }
    }
    out
}
