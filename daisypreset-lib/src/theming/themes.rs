use super::{ThemeCatalog, ThemeColors};

const LIGHT: &[(&str, &str)] = &[
    ("color-scheme", "light"),
    ("primary", "#570df8"),
    ("primary-content", "#E0D2FE"),
    ("secondary", "#f000b8"),
    ("secondary-content", "#FFD1F4"),
    ("accent", "#1ECEBC"),
    ("accent-content", "#07312D"),
    ("neutral", "#2B3440"),
    ("neutral-content", "#D7DDE4"),
    ("base-100", "#ffffff"),
    ("base-200", "#F2F2F2"),
    ("base-300", "#E5E6E6"),
    ("base-content", "#1f2937"),
];

const DARK: &[(&str, &str)] = &[
    ("color-scheme", "dark"),
    ("primary", "#661AE6"),
    ("primary-content", "#ffffff"),
    ("secondary", "#D926AA"),
    ("secondary-content", "#ffffff"),
    ("accent", "#1FB2A5"),
    ("accent-content", "#ffffff"),
    ("neutral", "#191D24"),
    ("neutral-focus", "#111318"),
    ("neutral-content", "#A6ADBB"),
    ("base-100", "#2A303C"),
    ("base-200", "#242933"),
    ("base-300", "#20252E"),
    ("base-content", "#A6ADBB"),
];

const CUPCAKE: &[(&str, &str)] = &[
    ("color-scheme", "light"),
    ("primary", "#65c3c8"),
    ("secondary", "#ef9fbc"),
    ("accent", "#eeaf3a"),
    ("neutral", "#291334"),
    ("base-100", "#faf7f5"),
    ("base-200", "#efeae6"),
    ("base-300", "#e7e2df"),
    ("base-content", "#291334"),
    ("--rounded-btn", "1.9rem"),
    ("--tab-border", "2px"),
    ("--tab-radius", "0.5rem"),
];

const CORPORATE: &[(&str, &str)] = &[
    ("color-scheme", "light"),
    ("primary", "#4b6bfb"),
    ("secondary", "#7b92b2"),
    ("accent", "#67cba0"),
    ("neutral", "#181a2a"),
    ("neutral-content", "#edf2f7"),
    ("base-100", "#ffffff"),
    ("base-content", "#181a2a"),
    ("--rounded-box", "0.25rem"),
    ("--rounded-btn", "0.125rem"),
    ("--rounded-badge", "0.125rem"),
    ("--animation-btn", "0"),
    ("--animation-input", "0"),
    ("--btn-focus-scale", "1"),
];

const SYNTHWAVE: &[(&str, &str)] = &[
    ("color-scheme", "dark"),
    ("primary", "#e779c1"),
    ("secondary", "#58c7f3"),
    ("accent", "#f3cc30"),
    ("neutral", "#221551"),
    ("neutral-content", "#f9f7fd"),
    ("base-100", "#1a103d"),
    ("base-content", "#f9f7fd"),
    ("info", "#53c0f3"),
    ("info-content", "#201047"),
    ("success", "#71ead2"),
    ("success-content", "#201047"),
    ("warning", "#f3cc30"),
    ("warning-content", "#201047"),
    ("error", "#e24056"),
    ("error-content", "#f9f7fd"),
];

const NIGHT: &[(&str, &str)] = &[
    ("color-scheme", "dark"),
    ("primary", "#38bdf8"),
    ("secondary", "#818CF8"),
    ("accent", "#F471B5"),
    ("neutral", "#1E293B"),
    ("neutral-focus", "#273449"),
    ("base-100", "#0F172A"),
    ("info", "#0CA5E9"),
    ("info-content", "#000000"),
    ("success", "#2DD4BF"),
    ("warning", "#F4BF50"),
    ("error", "#FB7085"),
];

/// Built-in themes, in the order used when every theme is requested.
pub fn builtin() -> ThemeCatalog {
    let mut catalog = ThemeCatalog::default();
    for (name, entries) in [
        ("light", LIGHT),
        ("dark", DARK),
        ("cupcake", CUPCAKE),
        ("corporate", CORPORATE),
        ("synthwave", SYNTHWAVE),
        ("night", NIGHT),
    ] {
        let colors: ThemeColors = entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        catalog.insert(name, colors);
    }
    catalog
}
