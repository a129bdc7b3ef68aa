use crate::buckets::{GroupingAtRule, SpecialRuleBuckets};
use crate::config::PresetOptions;
use crate::error::Result;
use crate::generator::CssGenerator;
use crate::sources::SourceStylesheets;
use crate::style::postprocess::{replace_prefix, Postprocessor};
use crate::theming::{inject_themes, ThemeCatalog};

pub const BASE_LAYER: &str = "daisy-base";
pub const THEMES_LAYER: &str = "daisy-themes";

/// Unconditional CSS emitted ahead of any utility, tagged with its layer.
#[derive(Debug, Clone)]
pub struct Preflight {
    pub layer: String,
    generator: CssGenerator,
}

impl Preflight {
    pub fn new(layer: impl Into<String>, generator: CssGenerator) -> Self {
        Preflight {
            layer: layer.into(),
            generator,
        }
    }

    pub fn get_css(&self) -> String {
        self.generator.get_css()
    }
}

/// `daisy-keyframes`, `daisy-supports`.
pub fn special_layer(kind: GroupingAtRule) -> String {
    format!("daisy-{}", kind.name())
}

/// Base block, grouping at-rules and theme blocks, in that order.
pub fn assemble_preflights(
    options: &PresetOptions,
    sources: &SourceStylesheets,
    special: &SpecialRuleBuckets,
    postprocessor: &Postprocessor,
    catalog: &ThemeCatalog,
) -> Result<Vec<Preflight>> {
    let mut preflights = Vec::new();

    if options.base {
        let css = replace_prefix(&postprocessor.process("base.css", &sources.base)?);
        preflights.push(Preflight::new(BASE_LAYER, CssGenerator::from_text(css)));
    } else {
        log::debug!("base styles disabled");
    }

    // Emitted even when empty.
    for (kind, blocks) in special.iter() {
        preflights.push(Preflight::new(
            special_layer(kind),
            CssGenerator::from_text(blocks.join("\n")),
        ));
    }

    let mut blocks = Vec::new();
    inject_themes(&options.themes, &options.dark_theme, catalog, |block| {
        blocks.push(block)
    })?;
    for block in blocks {
        let css = postprocessor.process(&block.theme, &block.to_css())?;
        preflights.push(Preflight::new(THEMES_LAYER, CssGenerator::from_text(css)));
    }

    Ok(preflights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ThemeChoice, ThemesOption};

    fn layers(preflights: &[Preflight]) -> Vec<&str> {
        preflights.iter().map(|p| p.layer.as_str()).collect()
    }

    #[test]
    fn base_then_special_buckets() {
        let sources = SourceStylesheets {
            base: ":root { --tw-ring: 0; }".into(),
            ..SourceStylesheets::default()
        };
        let mut special = SpecialRuleBuckets::default();
        special.push(GroupingAtRule::Keyframes, "@keyframes a {}".into());
        special.push(GroupingAtRule::Keyframes, "@keyframes b {}".into());

        let preflights = assemble_preflights(
            &PresetOptions::default(),
            &sources,
            &special,
            &Postprocessor::new(),
            &ThemeCatalog::builtin(),
        )
        .unwrap();

        assert_eq!(layers(&preflights), ["daisy-base", "daisy-keyframes", "daisy-supports"]);
        assert!(preflights[0].get_css().contains("--un-ring"));
        assert!(!preflights[0].get_css().contains("--tw-"));
        assert_eq!(preflights[1].get_css(), "@keyframes a {}\n@keyframes b {}");
        assert_eq!(preflights[2].get_css(), "");
    }

    #[test]
    fn base_disabled_keeps_special_buckets() {
        let options = PresetOptions {
            base: false,
            ..PresetOptions::default()
        };
        let preflights = assemble_preflights(
            &options,
            &SourceStylesheets::default(),
            &SpecialRuleBuckets::default(),
            &Postprocessor::new(),
            &ThemeCatalog::builtin(),
        )
        .unwrap();
        assert_eq!(layers(&preflights), ["daisy-keyframes", "daisy-supports"]);
    }

    #[test]
    fn themes_come_last() {
        let options = PresetOptions {
            base: false,
            themes: ThemesOption::List(vec![ThemeChoice::Named("light".into())]),
            ..PresetOptions::default()
        };
        let preflights = assemble_preflights(
            &options,
            &SourceStylesheets::default(),
            &SpecialRuleBuckets::default(),
            &Postprocessor::new(),
            &ThemeCatalog::builtin(),
        )
        .unwrap();
        assert_eq!(
            layers(&preflights),
            ["daisy-keyframes", "daisy-supports", "daisy-themes"]
        );
        let css = preflights[2].get_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("color-scheme: light"));
    }

    #[test]
    fn theme_blocks_go_through_the_postprocessor() {
        let options = PresetOptions {
            base: false,
            themes: ThemesOption::List(vec![
                ThemeChoice::Named("light".into()),
                ThemeChoice::Named("dark".into()),
            ]),
            ..PresetOptions::default()
        };
        let preflights = assemble_preflights(
            &options,
            &SourceStylesheets::default(),
            &SpecialRuleBuckets::default(),
            &Postprocessor::autoprefix(),
            &ThemeCatalog::builtin(),
        )
        .unwrap();
        let themes: Vec<_> = preflights
            .iter()
            .filter(|p| p.layer == THEMES_LAYER)
            .map(Preflight::get_css)
            .collect();
        assert_eq!(themes.len(), 4);
        assert!(themes[1].starts_with("@media (prefers-color-scheme: dark)"));
        assert!(themes[1].contains("color-scheme: dark"));
        assert!(themes[3].contains("data-theme"));
    }
}
