use std::fs;

use regionality_i18n::{DictionaryError, DictionaryStore};
use tempfile::tempdir;

#[test]
fn load_resolves_present_keys_to_values() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("en.json"),
        r#"{ "nav": { "faq": "FAQ" }, "pages": { "faq": { "title": "Questions" } } }"#,
    )
    .expect("write pack");

    let mut store = DictionaryStore::new(dir.path());
    assert!(!store.is_loaded());
    assert_eq!(store.text("nav.faq"), "nav.faq");

    store.load("en").expect("load en");
    assert!(store.is_loaded());
    assert_eq!(store.active_code(), Some("en"));
    assert_eq!(store.text("nav.faq"), "FAQ");
    assert_eq!(store.text("pages.faq.title"), "Questions");
    assert_eq!(store.text("pages.doesNotExist.title"), "pages.doesNotExist.title");
}

#[test]
fn switching_languages_replaces_the_dictionary_wholesale() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("en.json"),
        r#"{ "nav": { "faq": "FAQ" }, "only": { "en": "english extra" } }"#,
    )
    .expect("write en");
    fs::write(dir.path().join("pl.json"), r#"{ "nav": { "faq": "Pytania" } }"#)
        .expect("write pl");

    let mut store = DictionaryStore::new(dir.path());
    store.load("en").expect("load en");
    store.load("pl").expect("load pl");
    assert_eq!(store.active_code(), Some("pl"));
    assert_eq!(store.text("nav.faq"), "Pytania");
    // Replacement is wholesale; nothing lingers from the previous pack.
    assert_eq!(store.text("only.en"), "only.en");
}

#[test]
fn failed_load_keeps_the_previous_dictionary() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("en.json"), r#"{ "nav": { "faq": "FAQ" } }"#)
        .expect("write en");
    fs::write(dir.path().join("tl.json"), "{ not json").expect("write broken pack");

    let mut store = DictionaryStore::new(dir.path());
    store.load("en").expect("load en");

    let err = store.load("tl").expect_err("broken pack must fail");
    assert!(matches!(err, DictionaryError::Parse { .. }));
    assert_eq!(store.active_code(), Some("en"));
    assert_eq!(store.text("nav.faq"), "FAQ");

    let err = store.load("es").expect_err("missing pack must fail");
    match err {
        DictionaryError::Read { path, .. } => {
            assert!(path.ends_with("es.json"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.active_code(), Some("en"));
}
