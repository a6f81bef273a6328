//! Post-render translation sweep.
//!
//! Renderers tag translatable nodes with a `data-lang="<dotted path>"`
//! attribute. The sweep re-resolves every tagged node against the current
//! dictionary, so hosts can retranslate already-injected markup after a
//! language switch without re-running a renderer. Only direct text content
//! is rewritten; elements with child markup are left alone.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use regionality_i18n::DictionaryStore;

use crate::shell::escape;

static DATA_LANG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(<[^<>]*\bdata-lang="([^"]+)"[^<>]*>)([^<]*)(</)"#)
        .expect("data-lang pattern")
});

/// Replaces the text of every `data-lang`-tagged element with the resolved
/// translation for its key. Unknown keys degrade to the key itself, the
/// same marker the renderers emit.
pub fn fill_data_lang(html: &str, store: &DictionaryStore) -> String {
    DATA_LANG
        .replace_all(html, |caps: &Captures<'_>| {
            let resolved = store.text(&caps[2]);
            format!("{}{}{}", &caps[1], escape(&resolved), &caps[4])
        })
        .into_owned()
}
