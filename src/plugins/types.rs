use serde::{Deserialize, Serialize};

/// Configuration record for one external notation program.
///
/// Descriptors are immutable once loaded. The deployer edits the JSON file,
/// not the running program:
///
/// ```json
/// {
///   "executable": "C:/Program Files/Finale 2011 Demo/Findemo.exe",
///   "title": "Finale",
///   "tip": "Invoke Finale on score XML"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Path to the program to invoke. Environment-specific; no existence
    /// check is performed here.
    pub executable: String,
    /// Short name shown as the menu item.
    pub title: String,
    /// Long description shown as the tooltip.
    pub tip: String,
}

impl PluginDescriptor {
    /// Build the process argument vector for one exported score file.
    ///
    /// Always exactly `[executable, export_path]`, both verbatim — no
    /// quoting, no path normalization.
    pub fn command_line(&self, export_path: &str) -> Vec<String> {
        vec![self.executable.clone(), export_path.to_string()]
    }
}

/// The interface a host uses to run an external notation program.
///
/// One method does the work; `title` and `tip` exist for menu display.
/// Hosts depend on this trait rather than on [`PluginDescriptor`] so other
/// argument-building strategies can slot in later.
pub trait NotationPlugin {
    fn title(&self) -> &str;

    fn tip(&self) -> &str;

    /// Argument vector for invoking the program on `export_path`.
    fn build_arguments(&self, export_path: &str) -> Vec<String>;
}

impl NotationPlugin for PluginDescriptor {
    fn title(&self) -> &str {
        &self.title
    }

    fn tip(&self) -> &str {
        &self.tip
    }

    fn build_arguments(&self, export_path: &str) -> Vec<String> {
        self.command_line(export_path)
    }
}
