use std::fs;

use regionality_i18n::DictionaryStore;
use regionality_pages::{fill_data_lang, render, RenderContext};
use regionality_router::Route;
use tempfile::tempdir;

const PACK: &str = r#"
{
    "nav": {
        "home": "Home",
        "announcements": "Announcements",
        "faq": "FAQ",
        "guides": "Guides",
        "vouches": "Vouches",
        "paymentMethods": "Payment methods",
        "priceList": "Price list",
        "softban": "Softban help"
    },
    "common": { "backHome": "Back to home" },
    "footer": { "tagline": "Region switching, done right.", "rights": "Regionality" },
    "pages": {
        "home": {
            "title": "Regionality",
            "tagline": "Cheaper games, every region.",
            "intro": "Pick a guide and start saving."
        },
        "faq": {
            "title": "Frequently asked questions",
            "items": [
                { "q": "How fast is delivery?", "a": "Usually under an hour." },
                { "q": "Is this safe?", "a": "Yes — read the softban guide." }
            ]
        },
        "guidesNintendo": {
            "title": "Nintendo eShop guide",
            "intro": "Switching your eShop region takes five minutes.",
            "steps": ["Open system settings.", "Change the region.", "Restart the eShop."],
            "caption": "The region menu on a Switch console."
        },
        "priceListNintendo": {
            "title": "Nintendo price list",
            "intro": "Current top-up pricing.",
            "colAmount": "Top-up",
            "colPrice": "Price",
            "rows": [
                { "amount": "$10 card", "price": "8.50" },
                { "amount": "$20 card", "price": "16.00" }
            ],
            "note": "Prices refresh every morning."
        }
    }
}
"#;

fn loaded_store() -> DictionaryStore {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("en.json"), PACK).expect("write pack");
    let mut store = DictionaryStore::new(dir.path());
    store.load("en").expect("load en");
    store
}

#[test]
fn faq_page_carries_resolved_title_and_home_backlink() {
    let store = loaded_store();
    let ctx = RenderContext {
        store: &store,
        asset_base: "assets",
        year: 2026,
    };
    let html = render(Route::from_fragment("#faq"), &ctx);
    assert!(html.contains("<h1>Frequently asked questions</h1>"));
    assert!(html.contains("href=\"#home\""));
    assert!(html.contains("<dt>How fast is delivery?</dt>"));
    assert!(html.contains("<dd>Yes — read the softban guide.</dd>"));
}

#[test]
fn home_links_every_section_and_skips_the_backlink() {
    let store = loaded_store();
    let ctx = RenderContext {
        store: &store,
        asset_base: "assets",
        year: 2026,
    };
    let html = render(Route::Home, &ctx);
    for key in [
        "#announcements",
        "#faq",
        "#guides",
        "#vouches",
        "#payment-methods",
        "#price-list-nintendo",
        "#softban-nintendo",
    ] {
        assert!(html.contains(&format!("href=\"{key}\"")), "missing card {key}");
    }
    assert!(!html.contains("back-link"));
    assert!(html.contains("&copy; 2026 Regionality"));
}

#[test]
fn guide_page_embeds_steps_and_figure() {
    let store = loaded_store();
    let ctx = RenderContext {
        store: &store,
        asset_base: "static/img",
        year: 2026,
    };
    let html = render(Route::GuidesNintendo, &ctx);
    assert!(html.contains("<li>Open system settings.</li>"));
    assert!(html.contains("src=\"static/img/guides/nintendo.png\""));
    assert!(html.contains("<figcaption>The region menu on a Switch console.</figcaption>"));
}

#[test]
fn price_table_lists_every_row() {
    let store = loaded_store();
    let ctx = RenderContext {
        store: &store,
        asset_base: "assets",
        year: 2026,
    };
    let html = render(Route::PriceListNintendo, &ctx);
    assert!(html.contains("<th>Top-up</th><th>Price</th>"));
    assert!(html.contains("<tr><td>$10 card</td><td>8.50</td></tr>"));
    assert!(html.contains("<tr><td>$20 card</td><td>16.00</td></tr>"));
    assert!(html.contains("Prices refresh every morning."));
}

#[test]
fn missing_translations_render_as_path_markers() {
    let store = loaded_store();
    let ctx = RenderContext {
        store: &store,
        asset_base: "assets",
        year: 2026,
    };
    // The test pack has no vouches section at all.
    let html = render(Route::Vouches, &ctx);
    assert!(html.contains("<h1>pages.vouches.title</h1>"));
    assert!(html.contains("pages.vouches.intro"));
}

#[test]
fn every_route_renders_and_sweeps_cleanly() {
    let store = loaded_store();
    let ctx = RenderContext {
        store: &store,
        asset_base: "assets",
        year: 2026,
    };
    for route in Route::ALL {
        let html = render(route, &ctx);
        assert!(html.contains(&format!("data-route=\"{}\"", route.key())));
        let swept = fill_data_lang(&html, &store);
        // Sweeping a freshly rendered page is a no-op: renderers already
        // resolved every tagged node against the same dictionary.
        assert_eq!(swept, html, "sweep disturbed {route}");
    }
}
