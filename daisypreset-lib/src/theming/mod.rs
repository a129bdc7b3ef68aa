//! Theme palettes: the color palette handed to the host engine and the
//! per-theme CSS variable blocks emitted as preflights.

pub mod color;
pub mod themes;
pub mod utility_classes;

use crate::config::{ThemeChoice, ThemesOption};
use crate::error::{PresetError, Result};
use color::{darken, hsl_channels, is_dark, mix, parse_rgb, rgb_to_hsl, BLACK, WHITE};
use indexmap::IndexMap;

/// Color name (or raw `--variable`) -> value, as authored.
pub type ThemeColors = IndexMap<String, String>;

/// Semantic color names and the CSS variables holding their HSL channels.
pub const COLOR_VARIABLES: &[(&str, &str)] = &[
    ("primary", "--p"),
    ("primary-focus", "--pf"),
    ("primary-content", "--pc"),
    ("secondary", "--s"),
    ("secondary-focus", "--sf"),
    ("secondary-content", "--sc"),
    ("accent", "--a"),
    ("accent-focus", "--af"),
    ("accent-content", "--ac"),
    ("neutral", "--n"),
    ("neutral-focus", "--nf"),
    ("neutral-content", "--nc"),
    ("base-100", "--b1"),
    ("base-200", "--b2"),
    ("base-300", "--b3"),
    ("base-content", "--bc"),
    ("info", "--in"),
    ("info-content", "--inc"),
    ("success", "--su"),
    ("success-content", "--suc"),
    ("warning", "--wa"),
    ("warning-content", "--wac"),
    ("error", "--er"),
    ("error-content", "--erc"),
];

/// Fallback channels for state colors a theme leaves out.
const STATE_DEFAULTS: &[(&str, &str)] = &[
    ("info", "198 93% 60%"),
    ("success", "158 64% 52%"),
    ("warning", "43 96% 56%"),
    ("error", "0 91% 71%"),
];

const FOCUS_DARKEN: f64 = 0.07;
const CONTENT_MIX: f64 = 0.8;
const DEFAULT_DARK_THEME: &str = "dark";

fn variable_of(name: &str) -> Option<&'static str> {
    COLOR_VARIABLES
        .iter()
        .find(|(color, _)| *color == name)
        .map(|(_, variable)| *variable)
}

/// Named themes in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: IndexMap<String, ThemeColors>,
}

impl ThemeCatalog {
    pub fn builtin() -> Self {
        themes::builtin()
    }

    pub fn insert(&mut self, name: &str, colors: ThemeColors) {
        self.themes.insert(name.to_owned(), colors);
    }

    pub fn get(&self, name: &str) -> Option<&ThemeColors> {
        self.themes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

/// Palette exposed to the host engine: every semantic color as an
/// alpha-aware `hsl()` over its variable.
pub fn colors() -> IndexMap<String, String> {
    let mut palette = IndexMap::new();
    palette.insert("transparent".to_owned(), "transparent".to_owned());
    palette.insert("current".to_owned(), "currentColor".to_owned());
    for (name, variable) in COLOR_VARIABLES {
        palette.insert(
            name.to_string(),
            format!("hsl(var({}) / <alpha-value>)", variable),
        );
    }
    palette
}

/// Turn authored theme colors into CSS variables, deriving focus, content and
/// base shades the theme does not spell out.
pub fn convert_to_hsl(theme: &str, input: &ThemeColors) -> Result<IndexMap<String, String>> {
    let rgb_of = |name: &str| -> Result<Option<[f64; 3]>> {
        match input.get(name) {
            None => Ok(None),
            Some(value) => parse_rgb(value).map(Some).ok_or_else(|| PresetError::Color {
                theme: theme.to_owned(),
                name: name.to_owned(),
                value: value.clone(),
            }),
        }
    };

    let mut variables = IndexMap::new();
    for (name, value) in input {
        match variable_of(name) {
            Some(variable) => {
                let rgb = rgb_of(name.as_str())?.unwrap_or(BLACK);
                variables.insert(variable.to_owned(), hsl_channels(rgb_to_hsl(rgb)));
            }
            None => {
                variables.insert(name.clone(), value.clone());
            }
        }
    }

    let mut derive = |variable: &str, value: Option<String>| {
        if let Some(value) = value {
            variables.entry(variable.to_owned()).or_insert(value);
        }
    };

    for color in ["primary", "secondary", "accent", "neutral"] {
        let focus = format!("{}-focus", color);
        if !input.contains_key(&focus) {
            let value = rgb_of(color)?.map(|rgb| hsl_channels(darken(rgb, FOCUS_DARKEN)));
            derive(variable_of(&focus).unwrap_or_default(), value);
        }
    }

    let base_100 = rgb_of("base-100")?;
    if base_100.is_none() {
        derive("--b1", Some("0 0% 100%".to_owned()));
    }
    let base_100 = base_100.unwrap_or(WHITE);
    if !input.contains_key("base-200") {
        derive("--b2", Some(hsl_channels(darken(base_100, FOCUS_DARKEN))));
    }
    if !input.contains_key("base-300") {
        let value = match rgb_of("base-200")? {
            Some(base_200) => darken(base_200, FOCUS_DARKEN),
            None => darken(base_100, FOCUS_DARKEN * 2.0),
        };
        derive("--b3", Some(hsl_channels(value)));
    }

    for (color, channels) in STATE_DEFAULTS {
        if !input.contains_key(*color) {
            derive(variable_of(color).unwrap_or_default(), Some(channels.to_string()));
        }
    }

    if !input.contains_key("base-content") {
        derive("--bc", Some(foreground_of(base_100)));
    }
    for color in [
        "primary", "secondary", "accent", "neutral", "info", "success", "warning", "error",
    ] {
        let content = format!("{}-content", color);
        if !input.contains_key(&content) {
            let value = rgb_of(color)?.map(foreground_of);
            derive(variable_of(&content).unwrap_or_default(), value);
        }
    }

    Ok(variables)
}

/// Readable text color on top of `rgb`.
fn foreground_of(rgb: [f64; 3]) -> String {
    let target = if is_dark(rgb) { WHITE } else { BLACK };
    hsl_channels(rgb_to_hsl(mix(rgb, target, CONTENT_MIX)))
}

/// One theme's variables under one selector, optionally inside a media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBlock {
    pub theme: String,
    pub selector: String,
    pub media: Option<String>,
    pub variables: IndexMap<String, String>,
}

impl ThemeBlock {
    pub fn to_css(&self) -> String {
        let indent = if self.media.is_some() { "  " } else { "" };
        let mut css = String::new();
        if let Some(media) = &self.media {
            css.push_str(&format!("@media {} {{\n", media));
        }
        css.push_str(&format!("{}{} {{\n", indent, self.selector));
        for (name, value) in &self.variables {
            css.push_str(&format!("{}  {}: {};\n", indent, name, value));
        }
        css.push_str(&format!("{}}}\n", indent));
        if self.media.is_some() {
            css.push_str("}\n");
        }
        css
    }
}

/// Resolve which themes apply and hand each emitted block to `add_block`.
///
/// The first theme owns `:root`. At the second position the dark theme is
/// also wired to `prefers-color-scheme: dark`, then the first two themes get
/// their `[data-theme=...]` blocks; every later theme gets only its own.
/// Returns the theme order; `themes = false` emits nothing.
pub fn inject_themes<F>(
    themes: &ThemesOption,
    dark_theme: &str,
    catalog: &ThemeCatalog,
    mut add_block: F,
) -> Result<Vec<String>>
where
    F: FnMut(ThemeBlock),
{
    let mut available = catalog.clone();
    let order: Vec<String> = match themes {
        ThemesOption::Enabled(false) => {
            log::debug!("theming disabled");
            return Ok(Vec::new());
        }
        ThemesOption::Enabled(true) => catalog.names().map(str::to_owned).collect(),
        ThemesOption::List(choices) => {
            for choice in choices {
                if let ThemeChoice::Custom(custom) = choice {
                    for (name, colors) in custom {
                        available.insert(name, colors.clone());
                    }
                }
            }
            let mut order = Vec::new();
            for choice in choices {
                match choice {
                    ThemeChoice::Custom(custom) => order.extend(custom.keys().cloned()),
                    ThemeChoice::Named(name) if available.get(name).is_some() => {
                        order.push(name.clone())
                    }
                    ThemeChoice::Named(name) => log::warn!("unknown theme `{}` skipped", name),
                }
            }
            order
        }
    };

    let mut resolved = IndexMap::new();
    for name in &order {
        if let Some(colors) = available.get(name) {
            resolved.insert(name.clone(), convert_to_hsl(name, colors)?);
        }
    }

    let dark_theme = if dark_theme.is_empty() {
        DEFAULT_DARK_THEME
    } else {
        dark_theme
    };
    let block = |name: &str, selector: String, media: Option<String>| ThemeBlock {
        theme: name.to_owned(),
        selector,
        media,
        variables: resolved.get(name).cloned().unwrap_or_default(),
    };
    let named = |name: &str| format!("[data-theme={}]", name);

    for (index, name) in order.iter().enumerate() {
        match index {
            0 => add_block(block(name.as_str(), ":root".to_owned(), None)),
            1 => {
                if order[0] != dark_theme && resolved.contains_key(dark_theme) {
                    add_block(block(
                        dark_theme,
                        ":root".to_owned(),
                        Some("(prefers-color-scheme: dark)".to_owned()),
                    ));
                }
                let first = order[0].as_str();
                add_block(block(first, named(first), None));
                add_block(block(name.as_str(), named(name.as_str()), None));
            }
            _ => add_block(block(name.as_str(), named(name.as_str()), None)),
        }
    }

    log::debug!("injected themes {:?}", order);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(entries: &[(&str, &str)]) -> ThemeColors {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn collect(themes: &ThemesOption, dark: &str) -> Vec<ThemeBlock> {
        let mut blocks = Vec::new();
        inject_themes(themes, dark, &ThemeCatalog::builtin(), |block| blocks.push(block)).unwrap();
        blocks
    }

    #[test]
    fn palette_has_every_semantic_color() {
        let palette = colors();
        assert_eq!(palette["current"], "currentColor");
        assert_eq!(palette["primary"], "hsl(var(--p) / <alpha-value>)");
        assert_eq!(palette["base-200"], "hsl(var(--b2) / <alpha-value>)");
        assert_eq!(palette.len(), COLOR_VARIABLES.len() + 2);
    }

    #[test]
    fn converts_colors_and_derives_missing_ones() {
        let variables =
            convert_to_hsl("test", &theme(&[("primary", "#ff0000"), ("--rounded-btn", "1rem")]))
                .unwrap();
        assert_eq!(variables["--p"], "0 100% 50%");
        assert_eq!(variables["--pf"], "0 100% 43%");
        assert_eq!(variables["--rounded-btn"], "1rem");
        assert_eq!(variables["--b1"], "0 0% 100%");
        assert_eq!(variables["--b2"], "0 0% 93%");
        assert_eq!(variables["--b3"], "0 0% 86%");
        assert_eq!(variables["--in"], "198 93% 60%");
        assert_eq!(variables["--bc"], "0 0% 20%");
        assert!(variables.contains_key("--pc"));
        // no secondary authored, nothing to derive from
        assert!(!variables.contains_key("--sf"));
    }

    #[test]
    fn authored_values_win_over_derived_ones() {
        let variables = convert_to_hsl(
            "test",
            &theme(&[("primary", "#ff0000"), ("primary-focus", "#0000ff")]),
        )
        .unwrap();
        assert_eq!(variables["--pf"], "240 100% 50%");
    }

    #[test]
    fn invalid_colors_are_errors() {
        let err = convert_to_hsl("broken", &theme(&[("primary", "nope")])).unwrap_err();
        assert!(matches!(err, PresetError::Color { ref name, .. } if name == "primary"));
    }

    #[test]
    fn disabled_themes_emit_nothing() {
        assert!(collect(&ThemesOption::Enabled(false), "dark").is_empty());
    }

    #[test]
    fn light_and_dark_get_root_media_and_named_blocks() {
        let themes = ThemesOption::List(vec![
            ThemeChoice::Named("light".into()),
            ThemeChoice::Named("dark".into()),
        ]);
        let blocks = collect(&themes, "dark");
        let shape: Vec<_> = blocks
            .iter()
            .map(|block| (block.theme.as_str(), block.selector.as_str(), block.media.is_some()))
            .collect();
        assert_eq!(
            shape,
            [
                ("light", ":root", false),
                ("dark", ":root", true),
                ("light", "[data-theme=light]", false),
                ("dark", "[data-theme=dark]", false),
            ]
        );
    }

    #[test]
    fn dark_theme_first_skips_the_media_block() {
        let themes = ThemesOption::List(vec![
            ThemeChoice::Named("dark".into()),
            ThemeChoice::Named("cupcake".into()),
            ThemeChoice::Named("night".into()),
        ]);
        let blocks = collect(&themes, "");
        assert!(blocks.iter().all(|block| block.media.is_none()));
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[3].selector, "[data-theme=night]");
    }

    #[test]
    fn all_themes_follow_catalog_order() {
        let blocks = collect(&ThemesOption::Enabled(true), "night");
        assert_eq!(blocks[0].theme, "light");
        assert_eq!(blocks[1].theme, "night");
        assert!(blocks[1].media.is_some());
        assert_eq!(blocks.last().unwrap().theme, "night");
    }

    #[test]
    fn custom_themes_and_unknown_names() {
        let mut custom = IndexMap::new();
        custom.insert("brand".to_owned(), theme(&[("primary", "#0000ff")]));
        let themes = ThemesOption::List(vec![
            ThemeChoice::Named("missing".into()),
            ThemeChoice::Custom(custom),
        ]);
        let blocks = collect(&themes, "dark");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].theme, "brand");
        assert_eq!(blocks[0].variables["--p"], "240 100% 50%");
    }

    #[test]
    fn renders_css() {
        let block = ThemeBlock {
            theme: "dark".into(),
            selector: ":root".into(),
            media: Some("(prefers-color-scheme: dark)".into()),
            variables: [("--p".to_owned(), "0 0% 0%".to_owned())].into_iter().collect(),
        };
        assert_eq!(
            block.to_css(),
            "@media (prefers-color-scheme: dark) {\n  :root {\n    --p: 0 0% 0%;\n  }\n}\n"
        );
    }
}
