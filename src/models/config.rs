use serde::{Deserialize, Serialize};

/// User configuration from Text Utils Config.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Text_Utils_Settings", default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Route of the page shown when the window opens
    #[serde(rename = "Start Page", default = "default_start_page")]
    pub start_page: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,

    #[serde(rename = "Console Logging", default = "default_console_logging")]
    pub console_logging: bool,

    #[serde(rename = "Log Directory", default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
            debug_mode: false,
            console_logging: default_console_logging(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_start_page() -> String {
    "/".to_string()
}

fn default_console_logging() -> bool {
    true
}

fn default_log_dir() -> String {
    "logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.start_page, "/");
        assert!(!settings.debug_mode);
        assert!(settings.console_logging);
        assert_eq!(settings.log_dir, "logs");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let yaml = "Text_Utils_Settings:\n  Debug Mode: true\n";
        let config: UserConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(config.settings.debug_mode);
        assert_eq!(config.settings.start_page, "/");
        assert_eq!(config.settings.log_dir, "logs");
    }

    #[test]
    fn test_renamed_keys() {
        let yaml = r#"
Text_Utils_Settings:
  Start Page: "/pattern"
  Console Logging: false
  Log Directory: "out/logs"
"#;
        let config: UserConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.settings.start_page, "/pattern");
        assert!(!config.settings.console_logging);
        assert_eq!(config.settings.log_dir, "out/logs");
    }
}
