use indexmap::IndexMap;
use serde::Serialize;

/// Static theme extensions shipped alongside the color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilityClasses {
    #[serde(rename = "borderRadius")]
    pub border_radius: IndexMap<String, String>,
}

pub fn utility_classes() -> UtilityClasses {
    let border_radius = [
        ("badge", "var(--rounded-badge, 1.9rem)"),
        ("btn", "var(--rounded-btn, 0.5rem)"),
        ("box", "var(--rounded-box, 1rem)"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), value.to_owned()))
    .collect();

    UtilityClasses { border_radius }
}
