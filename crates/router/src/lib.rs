//! Route keys derived from the URL fragment.
//! 由 URL 片段推導的路由鍵。

use std::fmt;

/// The fixed set of pages the site can show. Route keys are flat, opaque
/// strings; there are no hierarchical or parameterized routes.
/// （網站可顯示頁面的固定集合；路由鍵為扁平的不透明字串，無階層或參數化
/// 路由。）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Announcements,
    Faq,
    Guides,
    GuidesNintendo,
    GuidesXbox,
    GuidesPlaystation,
    GuidesSteam,
    Vouches,
    PaymentMethods,
    PriceListNintendo,
    SoftbanNintendo,
}

impl Route {
    /// Every route, in menu order. Used for export and dispatch tests.
    pub const ALL: [Route; 12] = [
        Route::Home,
        Route::Announcements,
        Route::Faq,
        Route::Guides,
        Route::GuidesNintendo,
        Route::GuidesXbox,
        Route::GuidesPlaystation,
        Route::GuidesSteam,
        Route::Vouches,
        Route::PaymentMethods,
        Route::PriceListNintendo,
        Route::SoftbanNintendo,
    ];

    /// Derives the route from a URL fragment. One leading `#` is stripped;
    /// an empty or unknown fragment falls back to [`Route::Home`], so
    /// routing never fails.
    /// （由 URL 片段推導路由；去除開頭的 `#`，空白或未知片段回退至首頁，
    /// 因此路由不會失敗。）
    pub fn from_fragment(fragment: &str) -> Route {
        let key = fragment.strip_prefix('#').unwrap_or(fragment);
        Route::from_key(key).unwrap_or(Route::Home)
    }

    /// Exact key lookup with no fallback, for callers that must reject
    /// unknown keys (the CLI does).
    /// （精確查詢路由鍵，不做回退；供須拒絕未知鍵的呼叫端（如 CLI）使用。）
    pub fn from_key(key: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|route| route.key() == key)
    }

    /// The fragment key naming this route.
    pub fn key(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Announcements => "announcements",
            Route::Faq => "faq",
            Route::Guides => "guides",
            Route::GuidesNintendo => "guides-nintendo",
            Route::GuidesXbox => "guides-xbox",
            Route::GuidesPlaystation => "guides-playstation",
            Route::GuidesSteam => "guides-steam",
            Route::Vouches => "vouches",
            Route::PaymentMethods => "payment-methods",
            Route::PriceListNintendo => "price-list-nintendo",
            Route::SoftbanNintendo => "softban-nintendo",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_enumerated_fragment_selects_its_route() {
        for route in Route::ALL {
            assert_eq!(Route::from_fragment(route.key()), route);
            assert_eq!(Route::from_fragment(&format!("#{}", route.key())), route);
        }
    }

    #[test]
    fn unknown_and_empty_fragments_fall_back_to_home() {
        assert_eq!(Route::from_fragment(""), Route::Home);
        assert_eq!(Route::from_fragment("#"), Route::Home);
        assert_eq!(Route::from_fragment("no-such-page"), Route::Home);
        assert_eq!(Route::from_fragment("#price-list-xbox"), Route::Home);
        // Only one leading marker is stripped.
        assert_eq!(Route::from_fragment("##faq"), Route::Home);
    }

    #[test]
    fn exact_lookup_rejects_unknown_keys() {
        assert_eq!(Route::from_key("faq"), Some(Route::Faq));
        assert_eq!(Route::from_key("#faq"), None);
        assert_eq!(Route::from_key("FAQ"), None);
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = Route::ALL.iter().map(Route::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Route::ALL.len());
    }
}
