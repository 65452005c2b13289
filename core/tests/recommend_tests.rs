use core::{index, similarity, CatalogRecord, Recommender};

fn record(title: &str, director: Option<&str>, genres: &str) -> CatalogRecord {
    CatalogRecord {
        title: title.to_string(),
        director: director.map(str::to_string),
        genres: genres.to_string(),
    }
}

fn fixture() -> Vec<CatalogRecord> {
    vec![
        record("Alpha", Some("Jane Doe"), "Comedies"),
        record("Beta", None, "Comedies"),
        record("Gamma", Some("John Roe"), "Dramas"),
        record("Delta", None, "Dramas"),
        record("Epsilon", None, "Dramas"),
    ]
}

#[test]
fn indexing_is_deterministic() {
    let records = fixture();
    let (space_a, matrix_a) = index::build(&records);
    let (space_b, matrix_b) = index::build(&records);
    assert_eq!(space_a, space_b);
    assert_eq!(matrix_a, matrix_b);
}

#[test]
fn similarity_is_symmetric() {
    let records = vec![
        record("One", None, "Dramas, International Movies"),
        record("Two", None, "Dramas, Thrillers"),
        record("Three", None, "Comedies, International Movies"),
    ];
    let (_, matrix) = index::build(&records);
    for a in 0..matrix.len() {
        let from_a = similarity::score_all(&matrix, a);
        for b in 0..matrix.len() {
            let from_b = similarity::score_all(&matrix, b);
            assert!((from_a[b] - from_b[a]).abs() < 1e-6, "score({a}->{b}) != score({b}->{a})");
        }
    }
}

#[test]
fn self_similarity_is_one_for_nonempty_rows() {
    let (_, matrix) = index::build(&fixture());
    for row in 0..matrix.len() {
        let scores = similarity::score_all(&matrix, row);
        assert!((scores[row] - 1.0).abs() < 1e-6);
    }
}

#[test]
fn empty_genre_corpus_scores_zero_everywhere() {
    let records = vec![record("A", None, ""), record("B", None, "")];
    let (space, matrix) = index::build(&records);
    assert!(space.vocabulary.is_empty());
    assert_eq!(matrix.len(), 2);
    let scores = similarity::score_all(&matrix, 0);
    assert_eq!(scores, vec![0.0, 0.0]);
}

#[test]
fn never_recommends_an_input_title() {
    let recommender = Recommender::build(fixture());
    let titles = vec!["alpha".to_string()];
    for _ in 0..100 {
        let recs = recommender.recommend(&titles);
        assert!(recs.iter().all(|r| !r.title.eq_ignore_ascii_case("alpha")));
    }
}

#[test]
fn unknown_titles_yield_no_recommendations() {
    let recommender = Recommender::build(fixture());
    let recs = recommender.recommend(&["Zeta".to_string(), "Omega".to_string()]);
    assert!(recs.is_empty());
}

#[test]
fn single_title_result_is_bounded() {
    let records: Vec<CatalogRecord> = (0..50)
        .map(|i| record(&format!("Title {i}"), None, "Action & Adventure"))
        .collect();
    let recommender = Recommender::build(records);
    let recs = recommender.recommend(&["Title 0".to_string()]);
    assert!(recs.len() <= 10);
    assert!(recs.len() < recommender.len());
}

#[test]
fn disjoint_genres_never_cross_recommend() {
    // Two Comedy rows, three Drama rows; the genre vectors share no terms,
    // so querying the first Comedy title may only ever return the other.
    let recommender = Recommender::build(fixture());
    let titles = vec!["Alpha".to_string()];
    for _ in 0..100 {
        let recs = recommender.recommend(&titles);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Beta");
        assert_eq!(recs[0].director, None);
    }
}

#[test]
fn duplicate_rows_of_a_query_title_are_all_excluded() {
    let records = vec![
        record("Twin", None, "Comedies"),
        record("TWIN", None, "Comedies"),
        record("Other", None, "Comedies"),
    ];
    let recommender = Recommender::build(records);
    for _ in 0..100 {
        let recs = recommender.recommend(&["twin".to_string()]);
        assert!(recs.iter().all(|r| !r.title.eq_ignore_ascii_case("twin")));
    }
}

#[test]
fn missing_fields_serialize_json_safe() {
    let recommender = Recommender::build(vec![
        record("Alpha", None, "Comedies"),
        record("Beta", None, "Comedies"),
    ]);
    let recs = recommender.recommend(&["Alpha".to_string()]);
    assert_eq!(recs.len(), 1);
    let value = serde_json::to_value(&recs[0]).unwrap();
    assert_eq!(value["title"], "Beta");
    assert!(value["director"].is_null());
    assert_eq!(value["genres"], "Comedies");
}
