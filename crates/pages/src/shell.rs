//! Shared markup helpers: escaping, the page shell, and figures.

use std::borrow::Cow;
use std::fmt::Write;

use crate::RenderContext;

/// Escapes text for interpolation into element content or attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Wraps page content with its translated title, the back-to-home
/// affordance, and the shared footer.
pub fn page(ctx: &RenderContext<'_>, route_key: &str, title_key: &str, body: &str) -> String {
    let title = ctx.store.text(title_key);
    let back = ctx.store.text("common.backHome");
    let mut html = String::with_capacity(body.len() + 512);
    let _ = write!(
        html,
        "<section class=\"page\" data-route=\"{route_key}\">\n  \
         <header class=\"page-head\">\n    \
         <h1>{}</h1>\n    \
         <a class=\"back-link\" href=\"#home\" data-lang=\"common.backHome\">{}</a>\n  \
         </header>\n",
        escape(&title),
        escape(&back),
    );
    html.push_str(body);
    html.push_str(&footer(ctx));
    html.push_str("</section>\n");
    html
}

/// The shared footer: tagline plus the year-stamped rights line.
pub fn footer(ctx: &RenderContext<'_>) -> String {
    let tagline = ctx.store.text("footer.tagline");
    let rights = ctx.store.text("footer.rights");
    format!(
        "  <footer class=\"site-footer\">\n    \
         <p data-lang=\"footer.tagline\">{}</p>\n    \
         <p>&copy; {} {}</p>\n  \
         </footer>\n",
        escape(&tagline),
        ctx.year,
        escape(&rights),
    )
}

/// Wraps an image reference with a caption.
pub fn figure(src: &str, caption: &str) -> String {
    format!(
        "  <figure class=\"guide-figure\">\n    \
         <img src=\"{}\" alt=\"{}\">\n    \
         <figcaption>{}</figcaption>\n  \
         </figure>\n",
        escape(src),
        escape(caption),
        escape(caption),
    )
}
