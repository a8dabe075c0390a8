//! Repeated searches and algorithm choice don't change results.

use crate::common::{sample_resumes, search};
use cvscan::{Algorithm, SearchRequest};

#[test]
fn test_repeated_search_is_identical() {
    let corpus = sample_resumes();
    let request = SearchRequest::new(["python", "sql", "kubernets", "figma"]);

    let first = search(&corpus, request.clone());
    for _ in 0..5 {
        let again = search(&corpus, request.clone());
        assert_eq!(again.results, first.results);
        assert_eq!(again.escalated, first.escalated);
        assert_eq!(again.unavailable, first.unavailable);
    }
}

#[test]
fn test_algorithm_choice_does_not_change_results() {
    let corpus = sample_resumes();
    let keywords = ["java", "python", "sql", "kubernetes", "engineer", "e"];

    let baseline = search(&corpus, SearchRequest::new(keywords));
    for algorithm in Algorithm::ALL {
        let report = search(&corpus, SearchRequest::new(keywords).with_algorithm(algorithm));
        assert_eq!(report.results, baseline.results, "{}", algorithm);
        assert_eq!(report.timings.exact.algorithm, algorithm);
    }
}

#[test]
fn test_unknown_algorithm_name_behaves_like_kmp() {
    let corpus = sample_resumes();
    let options = cvscan::SearchOptions {
        algorithm: "rabin-karp".to_string(),
        ..Default::default()
    };
    let request = options.into_request(["sql"]).unwrap();
    assert_eq!(request.algorithm, Algorithm::Kmp);

    let report = search(&corpus, request);
    let kmp = search(&corpus, SearchRequest::new(["sql"]));
    assert_eq!(report.results, kmp.results);
}
