use serde::{Deserialize, Serialize};

/// Per-render parameters for the site header.
///
/// `root` is the path prefix prepended to relative navigation URLs (for a
/// page one level down it would be `"../"`). `page` names the active tab by
/// its exact label; a value matching no entry simply renders no tab as
/// active. Both default to the empty string, which degrades to empty-string
/// substitution in the output rather than any error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub page: String,
}

impl RenderContext {
    pub fn new(root: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            page: page.into(),
        }
    }
}
