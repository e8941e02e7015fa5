use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Application settings.
/// NOTE: TypeScript mirror types are in ui/src/types.ts
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Show the reply in a native message dialog instead of leaving the
    /// alert to the webview
    pub native_dialogs: bool,
    /// Title of the native reply dialog
    #[serde(default = "default_dialog_title")]
    pub dialog_title: String,
}

fn default_dialog_title() -> String {
    "logo-greeter".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            native_dialogs: true,
            dialog_title: default_dialog_title(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}
