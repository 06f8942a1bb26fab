//! End-to-end behavior of the search view state, from decoded responses
//! through CSV export, exercised without a UI or a live service.

use esmfinder::api::client::{decode_response, NETWORK_ERROR};
use esmfinder::api::models::SearchMatch;
use esmfinder::api::{SearchClient, SearchError};
use esmfinder::export::{rows_to_csv, write_csv_file, EXPORT_FILE_NAME};
use esmfinder::state::{SearchAction, SearchState, EMPTY_SEQUENCE_ERROR};
use reqwest::StatusCode;

/// Initialize tracing for tests with proper test output handling
fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn insulin_match() -> SearchMatch {
    SearchMatch {
        id: "P01308".to_string(),
        id_link: "https://www.uniprot.org/uniprot/P01308/entry".to_string(),
        similarity: 0.97,
        identity: 88.5,
        pfam: vec!["Insulin".to_string()],
        pfam_links: vec!["https://pfam/ins".to_string()],
    }
}

#[test]
fn successful_search_produces_ordered_rows_and_exportable_csv() {
    tracing_init();

    let body = r#"{"results": [
        {"id": "P01308", "id_link": "https://www.uniprot.org/uniprot/P01308/entry",
         "similarity": 0.97, "identity": 88.5,
         "pfam": ["Insulin"], "pfam_links": ["https://pfam/ins"]},
        {"id": "P06213", "id_link": "https://www.uniprot.org/uniprot/P06213/entry",
         "similarity": 0.81, "identity": 42.5,
         "pfam": ["PK_Tyr_Ser-Thr", "Furin-like"],
         "pfam_links": ["https://pfam/pk", "https://pfam/furin"]}
    ]}"#;
    let matches = decode_response(StatusCode::OK, body).unwrap();

    let mut state = SearchState::default();
    state.apply(SearchAction::SubmitStarted { generation: 1 });
    assert!(state.loading);

    state.apply(SearchAction::SubmitSucceeded {
        generation: 1,
        matches,
    });

    assert!(!state.loading);
    assert_eq!(state.error, None);
    let ids: Vec<usize> = state.rows.iter().map(|r| r.row_id).collect();
    assert_eq!(ids, vec![0, 1]);

    let csv = rows_to_csv(&state.rows);
    assert_eq!(
        csv,
        "UniProt ID,Cosine Similarity,Sequence Identity (%),Pfam Domains\n\
         P01308,0.97,88.5,Insulin\n\
         P06213,0.81,42.5,PK_Tyr_Ser-Thr;Furin-like"
    );
    // Repeating the export over unchanged rows is byte-identical.
    assert_eq!(csv, rows_to_csv(&state.rows));
}

#[test]
fn service_failure_leaves_previous_rows_visible() {
    tracing_init();

    let mut state = SearchState::default();
    state.apply(SearchAction::SubmitStarted { generation: 1 });
    state.apply(SearchAction::SubmitSucceeded {
        generation: 1,
        matches: vec![insulin_match()],
    });
    let rows_before = state.rows.clone();

    let err = decode_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"detail": "model unavailable"}"#,
    )
    .unwrap_err();

    state.apply(SearchAction::SubmitStarted { generation: 2 });
    state.apply(SearchAction::SubmitFailed {
        generation: 2,
        message: err.user_message(),
    });

    assert_eq!(state.error.as_deref(), Some("model unavailable"));
    assert_eq!(state.rows, rows_before);
    assert!(!state.loading);
}

#[test]
fn only_the_latest_submission_outcome_applies() {
    tracing_init();

    let mut state = SearchState::default();

    // Two submissions race; the older one resolves last.
    state.apply(SearchAction::SubmitStarted { generation: 1 });
    state.apply(SearchAction::SubmitStarted { generation: 2 });

    state.apply(SearchAction::SubmitSucceeded {
        generation: 2,
        matches: vec![insulin_match()],
    });
    state.apply(SearchAction::SubmitFailed {
        generation: 1,
        message: "Network error".to_string(),
    });

    assert_eq!(state.error, None);
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].entry.id, "P01308");
}

#[test]
fn empty_sequence_sets_fixed_message_without_loading() {
    let mut state = SearchState::default();
    state.apply(SearchAction::ValidationFailed {
        message: EMPTY_SEQUENCE_ERROR.to_string(),
    });

    assert_eq!(state.error.as_deref(), Some("Please enter a protein sequence."));
    assert!(!state.loading);
    // No submission was issued, so no generation was consumed.
    assert_eq!(state.generation, 0);
}

#[tokio::test]
async fn transport_failure_surfaces_the_generic_network_message() {
    tracing_init();

    // Port 9 (discard) has no listener; the connection is refused locally,
    // so this exercises the transport path without leaving the host.
    let client = SearchClient::new("http://127.0.0.1:9".to_string());
    let err = client.recommend_sequence("MKTLLVLL", 5).await.unwrap_err();

    assert!(matches!(err, SearchError::Request(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR);

    // A transport failure resolves like any other failed completion:
    // error set, rows untouched.
    let mut state = SearchState::default();
    state.apply(SearchAction::SubmitStarted { generation: 1 });
    state.apply(SearchAction::SubmitFailed {
        generation: 1,
        message: err.user_message(),
    });
    assert_eq!(state.error.as_deref(), Some(NETWORK_ERROR));
    assert!(state.rows.is_empty());
    assert!(!state.loading);
}

#[test]
fn export_writes_the_same_bytes_it_renders() {
    tracing_init();

    let mut state = SearchState::default();
    state.apply(SearchAction::SubmitStarted { generation: 1 });
    state.apply(SearchAction::SubmitSucceeded {
        generation: 1,
        matches: vec![insulin_match()],
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);
    write_csv_file(&path, &state.rows).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        rows_to_csv(&state.rows)
    );
}
