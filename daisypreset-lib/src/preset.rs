//! The preset artifact handed to the host engine: named preflights, a theme
//! extension and one exact-match rule per utility base.

use crate::buckets::RuleBuckets;
use crate::config::PresetOptions;
use crate::error::{PresetError, Result};
use crate::generator::CssGenerator;
use crate::preflight::{assemble_preflights, Preflight, BASE_LAYER, THEMES_LAYER};
use crate::sources::SourceStylesheets;
use crate::style::daisy_css::categorize_sources;
use crate::style::postprocess::{replace_prefix, Postprocessor};
use crate::theming::utility_classes::{utility_classes, UtilityClasses};
use crate::theming::{colors, ThemeCatalog};
use heck::ToLowerCamelCase;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

pub const PRESET_NAME: &str = "unocss-preset-daisy";
pub const COMPONENTS_LAYER: &str = "daisy-components";
pub const COMPONENTS_POST_LAYER: &str = "daisy-components-post";

/// Layer order the host engine should emit.
pub const LAYER_ORDER: [&str; 6] = [
    BASE_LAYER,
    "daisy-keyframes",
    "daisy-supports",
    THEMES_LAYER,
    COMPONENTS_LAYER,
    COMPONENTS_POST_LAYER,
];

/// Bases whose CSS must come after every other component.
const POST_COMPONENT_PREFIX: &str = "checkbox-";

/// Matches exactly one utility name and yields its merged CSS.
#[derive(Debug, Clone)]
pub struct DynamicRule {
    pub pattern: Regex,
    pub layer: &'static str,
    generator: CssGenerator,
}

impl DynamicRule {
    pub fn new(base: &str, css: &str) -> Result<Self> {
        let pattern = Regex::new(&format!("^{}$", regex::escape(base))).map_err(|source| {
            PresetError::Pattern {
                base: base.to_owned(),
                source,
            }
        })?;
        Ok(DynamicRule {
            pattern,
            layer: layer_for(base),
            generator: CssGenerator::from_text(replace_prefix(css)),
        })
    }

    pub fn matches(&self, utility: &str) -> bool {
        self.pattern.is_match(utility)
    }

    pub fn get_css(&self) -> String {
        self.generator.get_css()
    }
}

pub fn layer_for(base: &str) -> &'static str {
    if base.starts_with(POST_COMPONENT_PREFIX) {
        COMPONENTS_POST_LAYER
    } else {
        COMPONENTS_LAYER
    }
}

/// One rule per bucket, in bucket order.
pub fn emit_rules(buckets: &RuleBuckets) -> Result<Vec<DynamicRule>> {
    buckets
        .iter()
        .map(|(base, css)| DynamicRule::new(base, css))
        .collect()
}

/// Colors as the host theme expects them: `base-*` shades nested under
/// `base`, everything else camelCased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    #[serde(flatten)]
    pub named: IndexMap<String, String>,
    pub base: IndexMap<String, String>,
}

impl ThemePalette {
    pub fn from_colors(colors: &IndexMap<String, String>) -> Self {
        let mut palette = ThemePalette::default();
        for (name, value) in colors {
            if name == "transparent" || name == "current" {
                continue;
            }
            if name.starts_with("base") {
                palette
                    .base
                    .insert(name.replacen("base-", "", 1), value.clone());
            } else {
                palette.named.insert(name.to_lower_camel_case(), value.clone());
            }
        }
        palette
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetTheme {
    pub colors: ThemePalette,
    #[serde(flatten)]
    pub utilities: UtilityClasses,
}

impl Default for PresetTheme {
    fn default() -> Self {
        PresetTheme {
            colors: ThemePalette::from_colors(&colors()),
            utilities: utility_classes(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PresetArtifact {
    pub name: &'static str,
    pub preflights: Vec<Preflight>,
    pub theme: PresetTheme,
    pub rules: Vec<DynamicRule>,
}

#[derive(Debug, Serialize)]
pub struct PresetSummary<'a> {
    pub name: &'a str,
    pub layers: Vec<&'a str>,
    pub preflights: Vec<SectionSummary>,
    pub rules: Vec<SectionSummary>,
    pub theme: &'a PresetTheme,
}

#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub name: String,
    pub layer: String,
    pub bytes: usize,
}

impl PresetArtifact {
    pub fn match_utility(&self, utility: &str) -> Option<&DynamicRule> {
        self.rules.iter().find(|rule| rule.matches(utility))
    }

    /// CSS for the given utilities, preflights included, sorted by layer.
    /// Each matched rule is emitted once however often it is requested.
    pub fn generate<'a, I>(&self, utilities: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut matched: Vec<usize> = Vec::new();
        for utility in utilities {
            match self.rules.iter().position(|rule| rule.matches(utility)) {
                Some(index) if !matched.contains(&index) => matched.push(index),
                Some(_) => {}
                None => log::warn!("no rule matches `{}`", utility),
            }
        }
        self.render(matched)
    }

    /// Every preflight and every rule, as a complete stylesheet.
    pub fn generate_all(&self) -> String {
        self.render((0..self.rules.len()).collect())
    }

    fn render(&self, matched: Vec<usize>) -> String {
        let mut sections: Vec<(usize, usize, String)> = self
            .preflights
            .iter()
            .enumerate()
            .map(|(order, preflight)| (layer_rank(&preflight.layer), order, preflight.get_css()))
            .collect();
        let offset = sections.len();
        sections.extend(matched.into_iter().map(|index| {
            let rule = &self.rules[index];
            (layer_rank(rule.layer), offset + index, rule.get_css())
        }));
        sections.sort_by_key(|(rank, order, _)| (*rank, *order));

        sections
            .into_iter()
            .map(|(_, _, css)| css)
            .filter(|css| !css.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn summary(&self) -> PresetSummary<'_> {
        PresetSummary {
            name: self.name,
            layers: LAYER_ORDER.to_vec(),
            preflights: self
                .preflights
                .iter()
                .map(|preflight| SectionSummary {
                    name: preflight.layer.clone(),
                    layer: preflight.layer.clone(),
                    bytes: preflight.get_css().len(),
                })
                .collect(),
            rules: self
                .rules
                .iter()
                .map(|rule| SectionSummary {
                    name: rule.pattern.as_str().to_owned(),
                    layer: rule.layer.to_owned(),
                    bytes: rule.get_css().len(),
                })
                .collect(),
            theme: &self.theme,
        }
    }
}

fn layer_rank(layer: &str) -> usize {
    LAYER_ORDER
        .iter()
        .position(|known| *known == layer)
        .unwrap_or(LAYER_ORDER.len())
}

/// Build the preset with the built-in themes, vendor-prefixed for current browsers.
pub fn build_preset(options: &PresetOptions, sources: &SourceStylesheets) -> Result<PresetArtifact> {
    build_preset_with(options, sources, &Postprocessor::autoprefix(), &ThemeCatalog::builtin())
}

pub fn build_preset_with(
    options: &PresetOptions,
    sources: &SourceStylesheets,
    postprocessor: &Postprocessor,
    catalog: &ThemeCatalog,
) -> Result<PresetArtifact> {
    if options.rtl {
        log::debug!("rtl option has no effect");
    }

    let categorized = categorize_sources(sources.ordered(options), &options.prefix, postprocessor)?;
    let buckets = RuleBuckets::merge(&categorized.rules, &options.prefix)?;
    let rules = emit_rules(&buckets)?;
    let preflights =
        assemble_preflights(options, sources, &categorized.special, postprocessor, catalog)?;

    log::info!(
        "built {} with {} rules and {} preflights",
        PRESET_NAME,
        rules.len(),
        preflights.len()
    );

    Ok(PresetArtifact {
        name: PRESET_NAME,
        preflights,
        theme: PresetTheme::default(),
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn checkbox_bases_go_to_the_post_layer() {
        assert_eq!(layer_for("checkbox-primary"), COMPONENTS_POST_LAYER);
        assert_eq!(layer_for("checkbox"), COMPONENTS_LAYER);
        assert_eq!(layer_for("btn"), COMPONENTS_LAYER);
    }

    #[test]
    fn patterns_match_exactly() {
        let rule = DynamicRule::new("btn", ".btn { --tw-x: 1; }").unwrap();
        assert!(rule.matches("btn"));
        assert!(!rule.matches("btn-primary"));
        assert!(!rule.matches("xbtn"));
        assert_eq!(rule.get_css(), ".btn { --un-x: 1; }");
    }

    #[test]
    fn metacharacters_are_literal() {
        let rule = DynamicRule::new("w-1/2", "").unwrap();
        assert!(rule.matches("w-1/2"));
        let rule = DynamicRule::new("a.b", "").unwrap();
        assert!(!rule.matches("axb"));
    }

    #[test]
    fn palette_nests_base_and_camel_cases_the_rest() {
        let palette = ThemePalette::from_colors(&colors());
        assert!(!palette.named.contains_key("transparent"));
        assert!(!palette.named.contains_key("current"));
        assert_eq!(palette.named["primaryFocus"], "hsl(var(--pf) / <alpha-value>)");
        assert_eq!(palette.named["errorContent"], "hsl(var(--erc) / <alpha-value>)");
        let base: Vec<_> = palette.base.keys().map(String::as_str).collect();
        assert_eq!(base, ["100", "200", "300", "content"]);
    }

    #[test]
    fn theme_serializes_flat() {
        let json = serde_json::to_value(PresetTheme::default()).unwrap();
        assert_eq!(json["colors"]["primary"], "hsl(var(--p) / <alpha-value>)");
        assert_eq!(json["colors"]["base"]["100"], "hsl(var(--b1) / <alpha-value>)");
        assert_eq!(json["borderRadius"]["btn"], "var(--rounded-btn, 0.5rem)");
    }

    #[test]
    fn generate_orders_by_layer_and_dedupes() {
        let mut buckets = RuleBuckets::default();
        buckets.append("checkbox-primary".into(), ".checkbox-primary {}");
        buckets.append("btn".into(), ".btn {}");
        let artifact = PresetArtifact {
            name: PRESET_NAME,
            preflights: vec![Preflight::new(BASE_LAYER, CssGenerator::from_text(":root {}"))],
            theme: PresetTheme::default(),
            rules: emit_rules(&buckets).unwrap(),
        };

        let css = artifact.generate(["checkbox-primary", "btn", "btn", "nope"]);
        assert_eq!(css, ":root {}\n.btn {}\n\n.checkbox-primary {}\n");
    }
}
