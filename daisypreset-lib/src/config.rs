use crate::error::{PresetError, Result};
use crate::theming::ThemeColors;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Preset configuration. Every field is optional in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresetOptions {
    /// Styled component sources instead of the unstyled ones.
    pub styled: bool,
    pub themes: ThemesOption,
    /// Emit the foundational custom-property block.
    pub base: bool,
    /// Include the utility stylesheets.
    pub utils: bool,
    /// Accepted for compatibility, has no effect.
    pub rtl: bool,
    /// Theme used for `prefers-color-scheme: dark`.
    #[serde(alias = "dark_theme")]
    pub dark_theme: String,
    /// Class-name prefix applied to every generated selector.
    pub prefix: String,
}

impl Default for PresetOptions {
    fn default() -> Self {
        Self {
            styled: true,
            themes: ThemesOption::default(),
            base: true,
            utils: true,
            rtl: false,
            dark_theme: "dark".to_string(),
            prefix: String::new(),
        }
    }
}

/// `themes = false`, `themes = true` or `themes = ["light", { custom = { ... } }]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ThemesOption {
    Enabled(bool),
    List(Vec<ThemeChoice>),
}

impl Default for ThemesOption {
    fn default() -> Self {
        ThemesOption::Enabled(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ThemeChoice {
    /// A built-in theme by name.
    Named(String),
    /// Custom themes, name -> colors.
    Custom(IndexMap<String, ThemeColors>),
}

pub fn load(path: &Path) -> Result<PresetOptions> {
    let text = fs::read_to_string(path).map_err(|err| PresetError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;
    from_toml_str(&text).map_err(|err| PresetError::Config {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

pub fn from_toml_str(text: &str) -> std::result::Result<PresetOptions, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn defaults_when_empty() {
        let options = from_toml_str("").expect("config should parse");
        assert_eq!(options, PresetOptions::default());
        assert!(options.styled && options.base && options.utils);
        assert_eq!(options.themes, ThemesOption::Enabled(false));
        assert_eq!(options.dark_theme, "dark");
        assert_eq!(options.prefix, "");
    }

    #[test]
    fn reads_flags_and_prefix() {
        let options = from_toml_str(
            r#"
styled = false
base = false
prefix = "d-"
darkTheme = "night"
themes = true
"#,
        )
        .expect("config should parse");
        assert!(!options.styled);
        assert!(!options.base);
        assert!(options.utils);
        assert_eq!(options.prefix, "d-");
        assert_eq!(options.dark_theme, "night");
        assert_eq!(options.themes, ThemesOption::Enabled(true));
    }

    #[test]
    fn reads_theme_lists_with_custom_themes() {
        let options = from_toml_str(
            r##"
dark_theme = "midnight"
themes = ["light", { midnight = { primary = "#38bdf8", "base-100" = "#0f172a" } }]
"##,
        )
        .expect("config should parse");
        assert_eq!(options.dark_theme, "midnight");
        let ThemesOption::List(choices) = options.themes else {
            panic!("expected a theme list");
        };
        assert_eq!(choices[0], ThemeChoice::Named("light".into()));
        let ThemeChoice::Custom(custom) = &choices[1] else {
            panic!("expected a custom theme");
        };
        assert_eq!(custom["midnight"]["base-100"], "#0f172a");
    }

    #[test]
    fn load_reports_path_on_bad_toml() {
        let path = temp_path("daisypreset_bad_config");
        let _ = fs::write(&path, "styled = \"yes\"");
        match load(&path) {
            Err(PresetError::Config { path: reported, .. }) => {
                assert_eq!(reported, path.display().to_string())
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn load_reads_files() {
        let path = temp_path("daisypreset_config");
        let _ = fs::write(&path, "utils = false");
        let options = load(&path).expect("config should load");
        assert!(!options.utils);
    }

    fn temp_path(prefix: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{}_{}.toml", prefix, nanos))
    }
}
