//! Pure page renderers: route in, HTML string out.
//!
//! Renderers read nothing but the [`RenderContext`]; all user-visible text
//! comes from the dictionary store, so switching languages and re-invoking
//! them retranslates the whole page.

pub mod content;
pub mod shell;
pub mod sweep;

use regionality_i18n::DictionaryStore;
use regionality_router::Route;

pub use sweep::fill_data_lang;

/// Everything a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub store: &'a DictionaryStore,
    /// Base path prepended to image references, e.g. `assets`.
    pub asset_base: &'a str,
    /// Year stamped into the footer; supplied by the host so renderers stay
    /// free of clock reads.
    pub year: i32,
}

/// Renders the page for a route. Total over [`Route`]; rendering never fails.
pub fn render(route: Route, ctx: &RenderContext<'_>) -> String {
    match route {
        Route::Home => content::home(ctx),
        Route::Announcements => content::announcements(ctx),
        Route::Faq => content::faq(ctx),
        Route::Guides => content::guides(ctx),
        Route::GuidesNintendo => content::guide(ctx, Route::GuidesNintendo),
        Route::GuidesXbox => content::guide(ctx, Route::GuidesXbox),
        Route::GuidesPlaystation => content::guide(ctx, Route::GuidesPlaystation),
        Route::GuidesSteam => content::guide(ctx, Route::GuidesSteam),
        Route::Vouches => content::vouches(ctx),
        Route::PaymentMethods => content::payment_methods(ctx),
        Route::PriceListNintendo => content::price_list_nintendo(ctx),
        Route::SoftbanNintendo => content::softban_nintendo(ctx),
    }
}
