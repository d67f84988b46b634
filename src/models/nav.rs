use serde::Serialize;

/// One navigation tab of the site header.
///
/// `label` is both the visible text and the identity key the active-tab
/// match compares against. When `relative` is set, `url` is resolved by
/// prefixing the render context's root; otherwise it is emitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub url: &'static str,
    pub relative: bool,
}

/// The fixed navigation table, in emission order.
///
/// Labels are unique by construction; the active-tab match relies on that.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        url: "index.html",
        relative: true,
    },
    NavEntry {
        label: "Snapshots",
        url: "docs/manual/snapshots.html",
        relative: true,
    },
    NavEntry {
        label: "Releases",
        url: "docs/manual/releases.html",
        relative: true,
    },
    NavEntry {
        label: "Handbook",
        url: "docs/manual/handbook.html",
        relative: true,
    },
    NavEntry {
        label: "API",
        url: "http://audiveris.kenai.com/docs/api/index.html",
        relative: false,
    },
];
