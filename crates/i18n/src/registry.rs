//! The fixed, ordered set of interface languages the site ships with.

/// Display metadata for one supported interface language.
/// （單一支援介面語言的顯示資訊。）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub code: &'static str,
    pub label: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Baseline language used when nothing better is known.
pub const DEFAULT_LANGUAGE: &str = "en";

/// The supported languages, in menu order.
pub const LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        code: "en",
        label: "EN",
        name: "English",
        flag: "🇬🇧",
    },
    LanguageDescriptor {
        code: "pl",
        label: "PL",
        name: "Polski",
        flag: "🇵🇱",
    },
    LanguageDescriptor {
        code: "tl",
        label: "TL",
        name: "Tagalog",
        flag: "🇵🇭",
    },
    LanguageDescriptor {
        code: "es",
        label: "ES",
        name: "Español",
        flag: "🇪🇸",
    },
];

/// Finds the descriptor for a language code.
/// （依語言代碼查詢描述資訊。）
pub fn find(code: &str) -> Option<&'static LanguageDescriptor> {
    LANGUAGES.iter().find(|language| language.code == code)
}

/// True when the code names a shipped language.
pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

/// Detects the best matching supported language from the system locale,
/// defaulting to [`DEFAULT_LANGUAGE`] when the locale is unknown.
/// （由系統地區設定偵測最合適的支援語言；無法判斷時回退至預設語言。）
pub fn detect() -> &'static str {
    match sys_locale::get_locale() {
        Some(raw) => match_locale(&raw),
        None => DEFAULT_LANGUAGE,
    }
}

/// Maps a raw locale string such as `pl-PL` or `es_MX.UTF-8` to a supported
/// code by its language prefix.
/// （將 `pl-PL`、`es_MX.UTF-8` 等原始地區字串依語言前綴對應到支援代碼。）
pub fn match_locale(raw: &str) -> &'static str {
    let lowered = raw.to_ascii_lowercase();
    let prefix = lowered
        .split(['-', '_', '.'])
        .next()
        .unwrap_or(DEFAULT_LANGUAGE);
    match prefix {
        "pl" => "pl",
        // Filipino system locales report either code.
        "tl" | "fil" => "tl",
        "es" => "es",
        _ => DEFAULT_LANGUAGE,
    }
}
