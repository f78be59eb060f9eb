use dealsheet::io::prefs_io::{self, PrefsIoError};
use dealsheet::state::columns::ColumnId;
use dealsheet::state::prefs::{SortKey, UiPrefs};

fn sample_prefs() -> UiPrefs {
    let mut prefs = UiPrefs::default();
    prefs.sort = vec![
        SortKey {
            column: ColumnId::Stage,
            desc: false,
        },
        SortKey {
            column: ColumnId::Amount,
            desc: true,
        },
    ];
    prefs.set_filter(ColumnId::Company, "corp".into());
    prefs.set_filter(ColumnId::Stage, "Won".into());
    prefs.toggle_hidden(ColumnId::Notes);
    prefs.set_width(ColumnId::Company, 300.0);
    prefs.move_visible_column(0, 1);
    prefs.toggle_selected("D-1003");
    prefs.toggle_selected("D-1008");
    prefs
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deals-ui.json");

    let prefs = prefs_io::load_prefs_from(&path).unwrap();
    assert_eq!(prefs, UiPrefs::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deals-ui.json");

    let original = sample_prefs();
    prefs_io::save_prefs_to(&path, &original).unwrap();
    let loaded = prefs_io::load_prefs_from(&path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state").join("deals-ui.json");
    assert!(!path.exists());

    prefs_io::save_prefs_to(&path, &UiPrefs::default()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_save_pretty_printed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deals-ui.json");

    prefs_io::save_prefs_to(&path, &sample_prefs()).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    // Pretty-printed JSON contains newlines
    assert!(content.contains('\n'));
    assert!(content.contains("\"sort\""));
}

#[test]
fn test_load_malformed_blob_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json at all").unwrap();

    let err = prefs_io::load_prefs_from(&path).unwrap_err();
    assert!(matches!(err, PrefsIoError::Parse(_)));
}

#[test]
fn test_load_wrong_shape_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("array.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = prefs_io::load_prefs_from(&path).unwrap_err();
    assert!(matches!(err, PrefsIoError::Parse(_)));
}

#[test]
fn test_load_ignores_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.json");
    std::fs::write(
        &path,
        r#"{"sort":[{"column":"amount","desc":true}],"theme":"dark"}"#,
    )
    .unwrap();

    let prefs = prefs_io::load_prefs_from(&path).unwrap();
    assert_eq!(
        prefs.sort,
        vec![SortKey {
            column: ColumnId::Amount,
            desc: true,
        }]
    );
    assert!(prefs.filters.is_empty());
}

#[test]
fn test_rewrite_replaces_previous_blob() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deals-ui.json");

    prefs_io::save_prefs_to(&path, &sample_prefs()).unwrap();
    prefs_io::save_prefs_to(&path, &UiPrefs::default()).unwrap();

    let loaded = prefs_io::load_prefs_from(&path).unwrap();
    assert_eq!(loaded, UiPrefs::default());

    // The temp file used for the atomic swap must not linger.
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_state_dir_override() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(prefs_io::STATE_DIR_ENV, dir.path());
    let path = prefs_io::prefs_path().unwrap();
    std::env::remove_var(prefs_io::STATE_DIR_ENV);

    assert_eq!(path, dir.path().join(prefs_io::PREFS_FILE_NAME));
}
