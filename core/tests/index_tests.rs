use postings_core::decode::decode_postings;
use postings_core::elias::delta_encode;
use postings_core::{corpus_from_texts, evaluate, search, Hits, IndexBundle, Representation};

fn faculty_bundle() -> IndexBundle {
    IndexBundle::from_corpus(&corpus_from_texts([
        "декан студент факультет",
        "декан преподаватель",
        "преподаватель экзамен",
        "",
    ]))
}

#[test]
fn builds_expected_postings() {
    let bundle = faculty_bundle();
    let index = &bundle.uncompressed;
    assert_eq!(index.get("декан"), Some(&[0, 1][..]));
    assert_eq!(index.get("студент"), Some(&[0][..]));
    assert_eq!(index.get("факультет"), Some(&[0][..]));
    assert_eq!(index.get("преподаватель"), Some(&[1, 2][..]));
    assert_eq!(index.get("экзамен"), Some(&[2][..]));
    assert_eq!(index.len(), 5);
    assert_eq!(index.num_docs(), 4);
    assert!(index.iter().all(|(_, ids)| !ids.contains(&3)));
}

#[test]
fn postings_are_non_decreasing() {
    let bundle = IndexBundle::from_corpus(&corpus_from_texts([
        "a a b", "b a", "c", "a c a c", "", "b b b",
    ]));
    for (term, ids) in bundle.uncompressed.iter() {
        assert!(ids.windows(2).all(|w| w[0] <= w[1]), "{term}: {ids:?}");
    }
}

#[test]
fn compressed_mirrors_uncompressed() {
    let bundle = faculty_bundle();
    assert_eq!(bundle.compressed.len(), bundle.uncompressed.len());
    for (term, ids) in bundle.uncompressed.iter() {
        let codes = bundle.compressed.get(term).expect("term present in both");
        assert_eq!(codes.len(), ids.len());
        for (code, &id) in codes.iter().zip(ids) {
            assert_eq!(*code, delta_encode(u64::from(id)));
        }
        assert_eq!(decode_postings(codes).unwrap(), ids);
    }
}

#[test]
fn search_known_term() {
    let bundle = faculty_bundle();
    let r = search(&bundle, "декан", Representation::Raw);
    assert_eq!(r.results, Hits::Raw(&[0, 1]));
    assert_eq!(r.count, 2);

    let r = search(&bundle, "декан", Representation::Compressed);
    assert_eq!(r.count, 2);
    assert_eq!(r.results.decode().unwrap(), vec![0, 1]);
}

#[test]
fn search_missing_term() {
    let bundle = faculty_bundle();
    for repr in [Representation::Raw, Representation::Compressed] {
        let r = search(&bundle, "аспирант", repr);
        assert_eq!(r.count, 0);
        assert!(r.results.is_empty());
    }
}

#[test]
fn evaluate_reports_whole_index() {
    let bundle = faculty_bundle();
    let m = evaluate(&bundle.uncompressed, &bundle.compressed, "декан");
    // 7 postings at 4 bytes
    assert_eq!(m.uncompressed_size, 28);
    assert!(m.compressed_size > 0.0);
    assert!(m.compression_ratio > 0.0);
    assert!(m.compression_ratio < 1.0);
    assert_eq!(m.results_count, search(&bundle, "декан", Representation::Raw).count);
}
