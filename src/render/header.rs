//! Site header rendering: navigation tabs, logo, download button.
//!
//! Rendering is a pure function of the [`RenderContext`]: no I/O, no error
//! path. Malformed context values degrade to empty-string substitution in
//! the output, they are never signaled. Construction is decoupled from
//! transmission — callers decide where the markup goes.

use crate::models::{NavEntry, RenderContext, NAV_ENTRIES};

const LOGO_SUBTITLE: &str = "Open Music Scanner";
const DOWNLOAD_URL: &str =
    "http://kenai.com/projects/audiveris/downloads?field=title&order=desc";
const DOWNLOAD_VERSION: &str = "V4.2";

/// Render the complete header block as a single markup string.
///
/// This is exactly the concatenation of [`fragments`], with no separators
/// inserted. Byte-identical for identical contexts.
pub fn render(ctx: &RenderContext) -> String {
    fragments(ctx).concat()
}

/// Emit the header as an ordered sequence of markup fragments.
///
/// Emission order is part of the external contract:
/// open-header, open-nav, open-list, one list item per [`NAV_ENTRIES`] entry
/// (with the active marker on the entry whose label equals `ctx.page`),
/// close-list, close-nav, logo block, download button block, close-header.
pub fn fragments(ctx: &RenderContext) -> Vec<String> {
    let mut out = Vec::new();

    out.push("<header>".to_string());

    // Navigation tabs
    out.push("<nav>".to_string());
    out.push("    <ul class='tabs'>".to_string());
    for entry in NAV_ENTRIES {
        push_nav_item(&mut out, entry, ctx);
    }
    out.push("    </ul>".to_string());
    out.push("</nav>".to_string());

    // Logo
    out.push(format!("<a id='logo' href='{}index.html'>", ctx.root));
    out.push(format!(
        "   <div id='logo-subtitle'>{}</div>",
        LOGO_SUBTITLE
    ));
    out.push("</a>".to_string());

    // Download button
    out.push(format!("<a id='download-button' href='{}'>", DOWNLOAD_URL));
    out.push("    <div id='download-version'>".to_string());
    out.push(format!("        <b>{}</b>", DOWNLOAD_VERSION));
    out.push("    </div>".to_string());
    out.push("</a>".to_string());

    out.push("</header>".to_string());

    out
}

/// Emit one navigation list item.
///
/// The active marker is an exact, case-sensitive label match; a `ctx.page`
/// matching no label marks nothing. Relative URLs are prefixed with
/// `ctx.root` verbatim — no normalization, no trailing-slash handling.
fn push_nav_item(out: &mut Vec<String>, entry: &NavEntry, ctx: &RenderContext) {
    out.push("        <li><a".to_string());
    if entry.label == ctx.page {
        out.push(" class='current'".to_string());
    }
    out.push(" href='".to_string());
    if entry.relative {
        out.push(ctx.root.clone());
    }
    out.push(entry.url.to_string());
    out.push(format!("'>{}</a></li>", entry.label));
}
