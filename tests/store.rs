//! Integration tests for the file store: initialization, atomic save,
//! export/import, and corrupt-file handling.

use serde_json::json;
use team_ranking_web::{apply_match, FileStore, MatchInput, StoreError, TeamColor};

fn store_in(dir: &tempfile::TempDir) -> FileStore {
    FileStore::new(dir.path().join("data.json"))
}

fn sample_doc() -> team_ranking_web::RankingDocument {
    let mut doc = team_ranking_web::RankingDocument::new();
    let input = MatchInput {
        team_black: vec!["A".to_string(), "B".to_string()],
        team_white: vec!["C".to_string()],
        winner: TeamColor::Black,
        date: Some("2024-05-01T18:30:00Z".to_string()),
    };
    apply_match(&mut doc, &input).unwrap();
    doc
}

#[test]
fn load_initializes_missing_file_to_empty_document() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let doc = store.load().unwrap();
    assert!(doc.players.is_empty());
    assert!(doc.matches.is_empty());
    // The empty document was persisted, not just returned.
    assert!(store.path().exists());
    assert_eq!(store.load().unwrap(), doc);
}

#[test]
fn save_then_load_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let doc = sample_doc();
    store.save(&doc).unwrap();
    assert_eq!(store.load().unwrap(), doc);
}

#[test]
fn save_replaces_prior_content() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    store.save(&sample_doc()).unwrap();
    let empty = team_ranking_web::RankingDocument::new();
    store.save(&empty).unwrap();
    assert_eq!(store.load().unwrap(), empty);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    store.save(&sample_doc()).unwrap();
    let names: Vec<String> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["data.json".to_string()]);
}

#[test]
fn corrupt_file_is_an_error_and_left_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data.json");
    std::fs::write(&path, b"{ not json").unwrap();
    let store = FileStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    assert_eq!(std::fs::read(&path).unwrap(), b"{ not json");
}

#[test]
fn wrong_shape_file_is_also_corrupt() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data.json");
    // Valid JSON, but not a ranking document.
    std::fs::write(&path, b"[1, 2, 3]").unwrap();
    let store = FileStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
}

#[test]
fn export_returns_exact_persisted_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    store.save(&sample_doc()).unwrap();
    let bytes = store.export_raw().unwrap();
    assert_eq!(bytes, std::fs::read(store.path()).unwrap());
}

#[test]
fn export_on_fresh_store_initializes_first() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let bytes = store.export_raw().unwrap();
    let doc: team_ranking_web::RankingDocument = serde_json::from_slice(&bytes).unwrap();
    assert!(doc.players.is_empty());
    assert!(doc.matches.is_empty());
}

#[test]
fn import_replaces_the_document_wholesale() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    store.save(&sample_doc()).unwrap();

    let raw = json!({
        "players": {
            "X": { "id": "X", "points": 7, "wins": 2, "losses": 1, "streak": 2 }
        },
        "matches": [
            {
                "id": "abc12345",
                "date": "2024-04-30T20:00:00Z",
                "teamBlack": ["X"],
                "teamWhite": ["Y"],
                "winner": "Black"
            }
        ]
    });
    store.import_raw(raw).unwrap();

    let doc = store.load().unwrap();
    assert_eq!(doc.players.len(), 1);
    assert_eq!(doc.players["X"].points, 7);
    assert_eq!(doc.matches.len(), 1);
    assert_eq!(doc.matches[0].id, "abc12345");
    assert_eq!(doc.matches[0].winner, TeamColor::Black);
}

#[test]
fn invalid_import_is_rejected_without_touching_state() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let doc = sample_doc();
    store.save(&doc).unwrap();

    // Missing the `matches` field: not a ranking document.
    let err = store.import_raw(json!({ "players": {} })).unwrap_err();
    assert!(matches!(err, StoreError::InvalidImport(_)));
    assert_eq!(store.load().unwrap(), doc);
}

#[test]
fn export_import_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let doc = sample_doc();
    store.save(&doc).unwrap();

    let bytes = store.export_raw().unwrap();
    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    store.import_raw(raw).unwrap();
    assert_eq!(store.load().unwrap(), doc);
}
