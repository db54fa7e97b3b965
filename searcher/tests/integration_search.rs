use postings_core::persist::{save_bundle, IndexPaths};
use postings_core::{corpus_from_texts, IndexBundle, Representation};
use searcher::{format_report, format_search, Postings, SearchResponse, Searcher};
use serde_json::Value;
use tempfile::tempdir;

fn build_tiny_index(dir: &std::path::Path) {
    let bundle = IndexBundle::from_corpus(&corpus_from_texts([
        "декан студент факультет",
        "декан преподаватель",
        "преподаватель экзамен",
        "",
    ]));
    save_bundle(&IndexPaths::new(dir), &bundle).unwrap();
}

#[test]
fn evaluate_from_disk() {
    let dir = tempdir().unwrap();
    build_tiny_index(dir.path());
    let searcher = Searcher::open(dir.path()).unwrap();

    let metrics = searcher.evaluate("декан");
    assert_eq!(metrics.results_count, 2);
    assert!(metrics.uncompressed_size > 0);
    assert!(metrics.compressed_size > 0.0);
    assert!(metrics.compression_ratio > 0.0);

    let report = format_report(&metrics);
    assert!(report.contains("Uncompressed index size: 0.03 KB"));
    assert!(report.contains("Results found: 2"));
    assert_eq!(report.lines().count(), 6);
}

#[test]
fn compressed_search_returns_codes_or_ids() {
    let dir = tempdir().unwrap();
    build_tiny_index(dir.path());
    let searcher = Searcher::open(dir.path()).unwrap();
    let result = searcher.search("преподаватель", Representation::Compressed);

    let coded = SearchResponse::from_result("преподаватель", &result, false).unwrap();
    assert_eq!(coded.results, Postings::Codes(vec!["1".into(), "0100".into()]));
    assert_eq!(coded.representation, "compressed");

    let decoded = SearchResponse::from_result("преподаватель", &result, true).unwrap();
    assert_eq!(decoded.results, Postings::Ids(vec![1, 2]));
    assert!(format_search(&decoded).contains("Results found: 2"));
}

#[test]
fn missing_term_serializes_empty() {
    let dir = tempdir().unwrap();
    build_tiny_index(dir.path());
    let searcher = Searcher::open(dir.path()).unwrap();
    let result = searcher.search("аспирант", Representation::Raw);
    let response = SearchResponse::from_result("аспирант", &result, false).unwrap();

    let json: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["count"], 0);
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
    assert_eq!(json["representation"], "raw");
}

#[test]
fn open_fails_without_index() {
    let dir = tempdir().unwrap();
    assert!(Searcher::open(dir.path().join("absent")).is_err());
}
