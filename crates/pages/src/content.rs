//! The individual page renderers.

use std::fmt::Write;

use regionality_router::Route;

use crate::shell::{self, escape};
use crate::RenderContext;

/// Cards shown on the home page, in menu order.
const HOME_CARDS: &[(Route, &str)] = &[
    (Route::Announcements, "nav.announcements"),
    (Route::Faq, "nav.faq"),
    (Route::Guides, "nav.guides"),
    (Route::Vouches, "nav.vouches"),
    (Route::PaymentMethods, "nav.paymentMethods"),
    (Route::PriceListNintendo, "nav.priceList"),
    (Route::SoftbanNintendo, "nav.softban"),
];

/// Platform entries on the guides hub.
const GUIDE_PLATFORMS: &[(Route, &str)] = &[
    (Route::GuidesNintendo, "pages.guides.nintendo"),
    (Route::GuidesXbox, "pages.guides.xbox"),
    (Route::GuidesPlaystation, "pages.guides.playstation"),
    (Route::GuidesSteam, "pages.guides.steam"),
];

/// The home page carries its own hero layout instead of the shared shell;
/// it is the one page without a back link.
pub fn home(ctx: &RenderContext<'_>) -> String {
    let s = ctx.store;
    let mut html = String::with_capacity(1024);
    html.push_str("<section class=\"page page-home\" data-route=\"home\">\n");
    let _ = write!(
        html,
        "  <header class=\"hero\">\n    \
         <h1>{}</h1>\n    \
         <p class=\"tagline\" data-lang=\"pages.home.tagline\">{}</p>\n    \
         <p>{}</p>\n  \
         </header>\n",
        escape(&s.text("pages.home.title")),
        escape(&s.text("pages.home.tagline")),
        escape(&s.text("pages.home.intro")),
    );
    html.push_str("  <nav class=\"route-cards\">\n");
    for (route, label_key) in HOME_CARDS {
        let _ = write!(
            html,
            "    <a class=\"route-card\" href=\"#{}\" data-lang=\"{label_key}\">{}</a>\n",
            route.key(),
            escape(&s.text(label_key)),
        );
    }
    html.push_str("  </nav>\n");
    html.push_str(&shell::footer(ctx));
    html.push_str("</section>\n");
    html
}

pub fn announcements(ctx: &RenderContext<'_>) -> String {
    let mut body = String::from("  <ul class=\"announcement-list\">\n");
    for item in ctx.store.list("pages.announcements.items") {
        let _ = write!(
            body,
            "    <li><time>{}</time> {}</li>\n",
            escape(item.text_or("date", "")),
            escape(item.text_or("text", "")),
        );
    }
    body.push_str("  </ul>\n");
    shell::page(ctx, "announcements", "pages.announcements.title", &body)
}

pub fn faq(ctx: &RenderContext<'_>) -> String {
    let mut body = String::from("  <dl class=\"faq-list\">\n");
    for item in ctx.store.list("pages.faq.items") {
        let _ = write!(
            body,
            "    <dt>{}</dt>\n    <dd>{}</dd>\n",
            escape(item.text_or("q", "")),
            escape(item.text_or("a", "")),
        );
    }
    body.push_str("  </dl>\n");
    shell::page(ctx, "faq", "pages.faq.title", &body)
}

pub fn guides(ctx: &RenderContext<'_>) -> String {
    let s = ctx.store;
    let mut body = format!(
        "  <p class=\"page-intro\">{}</p>\n",
        escape(&s.text("pages.guides.intro"))
    );
    body.push_str("  <nav class=\"route-cards\">\n");
    for (route, label_key) in GUIDE_PLATFORMS {
        let _ = write!(
            body,
            "    <a class=\"route-card\" href=\"#{}\" data-lang=\"{label_key}\">{}</a>\n",
            route.key(),
            escape(&s.text(label_key)),
        );
    }
    body.push_str("  </nav>\n");
    shell::page(ctx, "guides", "pages.guides.title", &body)
}

/// Renders one platform guide: intro, numbered steps, and a captioned
/// screenshot from the shared asset tree.
pub fn guide(ctx: &RenderContext<'_>, route: Route) -> String {
    let (prefix, image) = match route {
        Route::GuidesNintendo => ("pages.guidesNintendo", "nintendo.png"),
        Route::GuidesXbox => ("pages.guidesXbox", "xbox.png"),
        Route::GuidesPlaystation => ("pages.guidesPlaystation", "playstation.png"),
        Route::GuidesSteam => ("pages.guidesSteam", "steam.png"),
        // The dispatcher only sends guide routes here; anything else gets
        // the home page rather than a panic.
        _ => return home(ctx),
    };
    let s = ctx.store;
    let intro_key = format!("{prefix}.intro");
    let mut body = format!("  <p class=\"page-intro\">{}</p>\n", escape(&s.text(&intro_key)));
    body.push_str("  <ol class=\"guide-steps\">\n");
    let steps_key = format!("{prefix}.steps");
    for step in s.list(&steps_key) {
        if let Some(text) = step.as_text() {
            let _ = write!(body, "    <li>{}</li>\n", escape(text));
        }
    }
    body.push_str("  </ol>\n");
    let src = format!("{}/guides/{image}", ctx.asset_base);
    let caption_key = format!("{prefix}.caption");
    let caption = s.text(&caption_key);
    body.push_str(&shell::figure(&src, &caption));
    let title_key = format!("{prefix}.title");
    shell::page(ctx, route.key(), &title_key, &body)
}

pub fn vouches(ctx: &RenderContext<'_>) -> String {
    let s = ctx.store;
    let mut body = format!(
        "  <p class=\"page-intro\">{}</p>\n",
        escape(&s.text("pages.vouches.intro"))
    );
    body.push_str("  <ul class=\"vouch-list\">\n");
    for item in s.list("pages.vouches.items") {
        let _ = write!(
            body,
            "    <li><blockquote>{}</blockquote><cite>{}</cite></li>\n",
            escape(item.text_or("quote", "")),
            escape(item.text_or("author", "")),
        );
    }
    body.push_str("  </ul>\n");
    shell::page(ctx, "vouches", "pages.vouches.title", &body)
}

pub fn payment_methods(ctx: &RenderContext<'_>) -> String {
    let s = ctx.store;
    let mut body = format!(
        "  <p class=\"page-intro\">{}</p>\n",
        escape(&s.text("pages.paymentMethods.intro"))
    );
    body.push_str("  <ul class=\"method-list\">\n");
    for method in s.list("pages.paymentMethods.methods") {
        let _ = write!(
            body,
            "    <li><strong>{}</strong> <span>{}</span></li>\n",
            escape(method.text_or("name", "")),
            escape(method.text_or("note", "")),
        );
    }
    body.push_str("  </ul>\n");
    shell::page(ctx, "payment-methods", "pages.paymentMethods.title", &body)
}

pub fn price_list_nintendo(ctx: &RenderContext<'_>) -> String {
    let s = ctx.store;
    let mut body = format!(
        "  <p class=\"page-intro\">{}</p>\n",
        escape(&s.text("pages.priceListNintendo.intro"))
    );
    let _ = write!(
        body,
        "  <table class=\"price-table\">\n    \
         <thead><tr><th>{}</th><th>{}</th></tr></thead>\n    \
         <tbody>\n",
        escape(&s.text("pages.priceListNintendo.colAmount")),
        escape(&s.text("pages.priceListNintendo.colPrice")),
    );
    for row in s.list("pages.priceListNintendo.rows") {
        let _ = write!(
            body,
            "      <tr><td>{}</td><td>{}</td></tr>\n",
            escape(row.text_or("amount", "")),
            escape(row.text_or("price", "")),
        );
    }
    body.push_str("    </tbody>\n  </table>\n");
    let _ = write!(
        body,
        "  <p class=\"price-note\">{}</p>\n",
        escape(&s.text("pages.priceListNintendo.note"))
    );
    shell::page(ctx, "price-list-nintendo", "pages.priceListNintendo.title", &body)
}

pub fn softban_nintendo(ctx: &RenderContext<'_>) -> String {
    let s = ctx.store;
    let mut body = format!(
        "  <p class=\"page-intro\">{}</p>\n",
        escape(&s.text("pages.softbanNintendo.intro"))
    );
    body.push_str("  <ol class=\"guide-steps\">\n");
    for step in s.list("pages.softbanNintendo.steps") {
        if let Some(text) = step.as_text() {
            let _ = write!(body, "    <li>{}</li>\n", escape(text));
        }
    }
    body.push_str("  </ol>\n");
    let _ = write!(
        body,
        "  <p class=\"warning\">{}</p>\n",
        escape(&s.text("pages.softbanNintendo.warning"))
    );
    shell::page(ctx, "softban-nintendo", "pages.softbanNintendo.title", &body)
}
