use std::path::PathBuf;

use regionality_i18n::{registry, DictionaryStore};
use regionality_pages::{fill_data_lang, render, RenderContext};
use regionality_router::Route;

use crate::host::{LanguageChoice, ViewHost};
use crate::preference::{PreferenceError, PreferenceStore};

/// Inputs fixed at startup.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Directory holding `<code>.json` dictionaries.
    pub lang_dir: PathBuf,
    /// Backing file for the persisted language choice.
    pub preference_path: PathBuf,
    /// Base path for image references in rendered pages.
    pub asset_base: String,
    /// Footer year; read from the clock by the host, not in here.
    pub year: i32,
}

/// The two UI phases. A first visit (no persisted code) starts in the
/// overlay; everything afterwards runs in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    LanguageOverlay,
    Ready,
}

/// Orchestrates initial load, language switches, and fragment-driven
/// re-rendering over a [`ViewHost`].
/// （協調初始載入、語言切換與片段變更後的重新渲染。）
pub struct SiteController<H: ViewHost> {
    host: H,
    store: DictionaryStore,
    preferences: PreferenceStore,
    asset_base: String,
    year: i32,
    route: Route,
    phase: Phase,
}

impl<H: ViewHost> SiteController<H> {
    /// Boots the controller: overlay phase when no language was ever chosen,
    /// otherwise straight to the persisted language and the current route.
    /// （啟動控制器：從未選擇語言時進入選語覆蓋層，否則直接以已存語言
    /// 渲染目前路由。）
    pub fn start(host: H, options: SiteOptions) -> Result<Self, PreferenceError> {
        let preferences = PreferenceStore::load(&options.preference_path)?;
        let mut controller = Self {
            host,
            store: DictionaryStore::new(&options.lang_dir),
            preferences,
            asset_base: options.asset_base,
            year: options.year,
            route: Route::Home,
            phase: Phase::Ready,
        };
        match controller.preferences.lang().map(str::to_owned) {
            Some(code) => controller.enter_ready(&code),
            None => controller.enter_overlay(),
        }
        Ok(controller)
    }

    /// The single language-switch operation, used by both the overlay and
    /// the picker. Fully succeeds (dictionary swapped, code persisted, page
    /// re-rendered) or fully fails (prior dictionary, UI, and preference all
    /// retained; the user is alerted with the offending resource).
    /// （唯一的語言切換操作：完全成功或完全失敗，失敗時保留原字典、畫面
    /// 與偏好，並以警示告知使用者。）
    pub fn select_language(&mut self, code: &str) {
        if let Err(err) = self.store.load(code) {
            self.host.alert(&err.to_string());
            return;
        }
        if let Err(err) = self.preferences.set_lang(code) {
            // The switch itself stands; only the persistence is stale.
            self.host.alert(&err.to_string());
        }
        if self.phase == Phase::LanguageOverlay {
            self.host.hide_language_overlay();
            self.phase = Phase::Ready;
        }
        self.refresh_picker();
        self.render_current();
    }

    /// Handles an external fragment-change notification. Re-renders without
    /// reloading the dictionary; ignored while the overlay is still up.
    /// （處理外部片段變更通知：不重新載入字典即重新渲染；覆蓋層顯示期間
    /// 僅記錄路由不渲染。）
    pub fn on_fragment_change(&mut self, fragment: &str) {
        self.route = Route::from_fragment(fragment);
        if self.phase == Phase::Ready && self.store.is_loaded() {
            self.render_current();
        }
    }

    /// Current phase, for hosts that gate their own chrome on it.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Route currently shown (or pending, while the overlay is up).
    pub fn route(&self) -> Route {
        self.route
    }

    /// Code of the active language, once a dictionary is loaded.
    pub fn active_language(&self) -> Option<&str> {
        self.store.active_code()
    }

    /// The display host, mainly for tests and terminal frontends.
    pub fn host(&self) -> &H {
        &self.host
    }

    fn enter_overlay(&mut self) {
        self.phase = Phase::LanguageOverlay;
        // Translate the overlay itself in the detected language, falling
        // back to the baseline pack; if neither loads, the overlay strings
        // degrade to their dotted keys like any other missing translation.
        let detected = registry::detect();
        if self.store.load(detected).is_err() && detected != regionality_i18n::DEFAULT_LANGUAGE {
            let _ = self.store.load(regionality_i18n::DEFAULT_LANGUAGE);
        }
        let title = self.store.text("overlay.title").into_owned();
        let hint = self.store.text("overlay.hint").into_owned();
        let choices = language_choices();
        self.host.show_language_overlay(&title, &hint, &choices);
    }

    fn enter_ready(&mut self, code: &str) {
        self.phase = Phase::Ready;
        if let Err(err) = self.store.load(code) {
            // No previous dictionary exists at startup; leave the container
            // untouched and surface the failure.
            self.host.alert(&err.to_string());
            return;
        }
        self.refresh_picker();
        self.render_current();
    }

    fn render_current(&mut self) {
        let ctx = RenderContext {
            store: &self.store,
            asset_base: &self.asset_base,
            year: self.year,
        };
        let html = render(self.route, &ctx);
        let html = fill_data_lang(&html, &self.store);
        self.host.set_content(&html);
    }

    fn refresh_picker(&mut self) {
        let active = self
            .store
            .active_code()
            .unwrap_or(regionality_i18n::DEFAULT_LANGUAGE)
            .to_string();
        let choices = language_choices();
        self.host.set_language_picker(&choices, &active);
    }
}

fn language_choices() -> Vec<LanguageChoice> {
    regionality_i18n::LANGUAGES
        .iter()
        .map(|language| LanguageChoice {
            code: language.code.to_string(),
            label: language.label.to_string(),
            name: language.name.to_string(),
            flag: language.flag.to_string(),
        })
        .collect()
}
