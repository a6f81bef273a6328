use std::fs;
use std::path::{Path, PathBuf};

use regionality_app::{LanguageChoice, Phase, SiteController, SiteOptions, ViewHost};
use tempfile::tempdir;

#[derive(Default)]
struct RecordingHost {
    content: Option<String>,
    overlay: Option<(String, String, Vec<LanguageChoice>)>,
    overlay_hidden: bool,
    picker_active: Option<String>,
    alerts: Vec<String>,
}

impl ViewHost for RecordingHost {
    fn set_content(&mut self, html: &str) {
        self.content = Some(html.to_string());
    }

    fn show_language_overlay(&mut self, title: &str, hint: &str, choices: &[LanguageChoice]) {
        self.overlay = Some((title.to_string(), hint.to_string(), choices.to_vec()));
    }

    fn hide_language_overlay(&mut self) {
        self.overlay_hidden = true;
    }

    fn set_language_picker(&mut self, _choices: &[LanguageChoice], active: &str) {
        self.picker_active = Some(active.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

fn write_packs(dir: &Path) {
    for (code, home_title, faq_title) in [
        ("en", "Regionality", "Questions"),
        ("pl", "Regionality PL", "Pytania"),
        ("tl", "Regionality TL", "Mga tanong"),
        ("es", "Regionality ES", "Preguntas"),
    ] {
        let pack = format!(
            r#"{{
                "overlay": {{ "title": "Choose a language", "hint": "You can change it later." }},
                "common": {{ "backHome": "Back" }},
                "footer": {{ "tagline": "tagline", "rights": "Regionality" }},
                "pages": {{
                    "home": {{ "title": "{home_title}", "tagline": "t", "intro": "i" }},
                    "faq": {{ "title": "{faq_title}", "items": [] }}
                }}
            }}"#
        );
        fs::write(dir.join(format!("{code}.json")), pack).expect("write pack");
    }
}

fn options(lang_dir: &Path, preference_path: PathBuf) -> SiteOptions {
    SiteOptions {
        lang_dir: lang_dir.to_path_buf(),
        preference_path,
        asset_base: "assets".to_string(),
        year: 2026,
    }
}

#[test]
fn first_visit_shows_the_overlay_and_a_pick_completes_it() {
    let dir = tempdir().unwrap();
    write_packs(dir.path());
    let pref_path = dir.path().join("regionality_lang.json");

    let mut controller =
        SiteController::start(RecordingHost::default(), options(dir.path(), pref_path.clone()))
            .unwrap();
    assert_eq!(controller.phase(), Phase::LanguageOverlay);
    let (_, _, choices) = controller.host().overlay.as_ref().expect("overlay shown");
    assert_eq!(choices.len(), 4);
    assert!(controller.host().content.is_none());

    // Navigation while the overlay is up records the route but renders nothing.
    controller.on_fragment_change("#faq");
    assert!(controller.host().content.is_none());

    controller.select_language("pl");
    assert_eq!(controller.phase(), Phase::Ready);
    assert!(controller.host().overlay_hidden);
    assert_eq!(controller.active_language(), Some("pl"));
    let content = controller.host().content.as_ref().expect("content rendered");
    assert!(content.contains("Pytania"));
    assert!(pref_path.exists());
}

#[test]
fn a_saved_preference_skips_the_overlay_and_beats_detection() {
    let dir = tempdir().unwrap();
    write_packs(dir.path());
    let pref_path = dir.path().join("regionality_lang.json");
    fs::write(&pref_path, r#"{ "version": 1, "lang": "es" }"#).unwrap();

    let controller =
        SiteController::start(RecordingHost::default(), options(dir.path(), pref_path)).unwrap();
    assert_eq!(controller.phase(), Phase::Ready);
    assert!(controller.host().overlay.is_none());
    assert_eq!(controller.active_language(), Some("es"));
    let content = controller.host().content.as_ref().expect("content rendered");
    assert!(content.contains("Regionality ES"));
    assert_eq!(controller.host().picker_active.as_deref(), Some("es"));
}

#[test]
fn a_failed_switch_retains_dictionary_ui_and_preference() {
    let dir = tempdir().unwrap();
    write_packs(dir.path());
    fs::write(dir.path().join("tl.json"), "{ broken").unwrap();
    let pref_path = dir.path().join("regionality_lang.json");
    fs::write(&pref_path, r#"{ "version": 1, "lang": "en" }"#).unwrap();

    let mut controller =
        SiteController::start(RecordingHost::default(), options(dir.path(), pref_path.clone()))
            .unwrap();
    let before = controller.host().content.clone().expect("initial render");

    controller.select_language("tl");
    assert_eq!(controller.active_language(), Some("en"));
    assert_eq!(controller.host().content.as_ref(), Some(&before));
    let alert = controller.host().alerts.last().expect("alert surfaced");
    assert!(alert.contains("tl.json"));

    // A simulated reload still comes back in English.
    let reloaded =
        SiteController::start(RecordingHost::default(), options(dir.path(), pref_path)).unwrap();
    assert_eq!(reloaded.active_language(), Some("en"));
}

#[test]
fn fragment_changes_rerender_without_reloading() {
    let dir = tempdir().unwrap();
    write_packs(dir.path());
    let pref_path = dir.path().join("regionality_lang.json");
    fs::write(&pref_path, r#"{ "version": 1, "lang": "en" }"#).unwrap();

    let mut controller =
        SiteController::start(RecordingHost::default(), options(dir.path(), pref_path)).unwrap();
    assert!(controller
        .host()
        .content
        .as_ref()
        .unwrap()
        .contains("data-route=\"home\""));

    controller.on_fragment_change("#faq");
    let content = controller.host().content.as_ref().unwrap();
    assert!(content.contains("data-route=\"faq\""));
    assert!(content.contains("Questions"));

    // Unknown fragments alias to home rather than failing.
    controller.on_fragment_change("#no-such-page");
    assert!(controller
        .host()
        .content
        .as_ref()
        .unwrap()
        .contains("data-route=\"home\""));
}

#[test]
fn a_broken_pack_at_startup_alerts_and_leaves_the_container_alone() {
    let dir = tempdir().unwrap();
    write_packs(dir.path());
    fs::write(dir.path().join("es.json"), "not json at all").unwrap();
    let pref_path = dir.path().join("regionality_lang.json");
    fs::write(&pref_path, r#"{ "version": 1, "lang": "es" }"#).unwrap();

    let controller =
        SiteController::start(RecordingHost::default(), options(dir.path(), pref_path)).unwrap();
    assert_eq!(controller.phase(), Phase::Ready);
    assert!(controller.host().content.is_none());
    assert_eq!(controller.host().alerts.len(), 1);
}
