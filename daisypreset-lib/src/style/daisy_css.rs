use crate::buckets::{GroupingAtRule, SpecialRuleBuckets};
use crate::error::Result;
use crate::selector::prefix::apply_prefix;
use crate::style::owned_css::OwnedRule;
use crate::style::postprocess::{parse_stylesheet, print_error, Postprocessor};
use lightningcss::printer::PrinterOptions;
use lightningcss::rules::{style::StyleRule, CssRule};
use lightningcss::traits::ToCss;

/// Ordinary rules in encounter order plus the grouping at-rules set aside.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategorizedRules {
    pub rules: Vec<OwnedRule>,
    pub special: SpecialRuleBuckets,
}

/// Walks LightningCSS rule trees and sorts every node into ordinary rules or
/// grouping at-rules, prefixing selectors on the way.
///
/// Vendor prefixing happens one rule at a time, so minification never sees
/// two source rules side by side and cannot merge them.
#[derive(Debug)]
pub struct RuleWalker<'p> {
    prefix: &'p str,
    postprocessor: Postprocessor,
    categorized: CategorizedRules,
}

impl<'p> RuleWalker<'p> {
    pub fn new(prefix: &'p str, postprocessor: Postprocessor) -> Self {
        RuleWalker {
            prefix,
            postprocessor,
            categorized: CategorizedRules::default(),
        }
    }

    /// Parse one source stylesheet and walk it.
    pub fn walk_source(&mut self, name: &str, css: &str) -> Result<()> {
        let sheet = parse_stylesheet(name, css)?;
        log::debug!("walking {} ({} top-level rules)", name, sheet.rules.0.len());
        self.walk_rules(&sheet.rules.0)
    }

    pub fn walk_rules(&mut self, rules: &[CssRule<'_>]) -> Result<()> {
        for rule in rules {
            self.categorize(rule)?;
        }
        Ok(())
    }

    fn categorize(&mut self, rule: &CssRule<'_>) -> Result<()> {
        match rule {
            CssRule::Style(_) if self.postprocessor.targets().is_some() => {
                self.walk_prefixed(rule)?
            }
            CssRule::Style(style_rule) => {
                let owned = convert_style_rule(style_rule, self.prefix)?;
                self.categorized.rules.push(owned);
            }
            CssRule::Keyframes(_) => self.set_aside(GroupingAtRule::Keyframes, rule)?,
            CssRule::Supports(_) => self.set_aside(GroupingAtRule::Supports, rule)?,
            // Conditional wrappers are dropped: every rule inside them is
            // self-contained and gets classified on its own.
            CssRule::Media(media) => self.walk_rules(&media.rules.0)?,
            CssRule::LayerBlock(layer) => self.walk_rules(&layer.rules.0)?,
            CssRule::Container(container) => self.walk_rules(&container.rules.0)?,
            CssRule::StartingStyle(starting) => self.walk_rules(&starting.rules.0)?,
            CssRule::Scope(scope) => self.walk_rules(&scope.rules.0)?,
            CssRule::MozDocument(document) => self.walk_rules(&document.rules.0)?,
            _ => log::trace!("ignoring at-rule without nested rules"),
        }
        Ok(())
    }

    /// Vendor-prefix a single style rule and walk whatever it expands to.
    fn walk_prefixed(&mut self, rule: &CssRule<'_>) -> Result<()> {
        let css = rule
            .to_css_string(PrinterOptions::default())
            .map_err(print_error)?;
        let mut sheet = parse_stylesheet("rule", &css)?;
        self.postprocessor.prepare(&mut sheet)?;

        let mut inner = RuleWalker::new(self.prefix, Postprocessor::new());
        inner.walk_rules(&sheet.rules.0)?;
        let CategorizedRules { rules, special } = inner.finish();
        self.categorized.rules.extend(rules);
        for (kind, blocks) in special.iter() {
            for block in blocks {
                self.categorized.special.push(kind, block.clone());
            }
        }
        Ok(())
    }

    fn set_aside(&mut self, kind: GroupingAtRule, rule: &CssRule<'_>) -> Result<()> {
        let css = rule
            .to_css_string(PrinterOptions::default())
            .map_err(print_error)?;
        let css = if self.postprocessor.targets().is_some() {
            self.postprocessor.process(kind.name(), &css)?
        } else {
            css
        };
        self.categorized.special.push(kind, css);
        Ok(())
    }

    pub fn finish(self) -> CategorizedRules {
        self.categorized
    }
}

/// Walk named source stylesheets in the given order.
pub fn categorize_sources<'a, I>(sources: I, prefix: &str, postprocessor: &Postprocessor) -> Result<CategorizedRules>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut walker = RuleWalker::new(prefix, *postprocessor);
    for (name, css) in sources {
        walker.walk_source(name, css)?;
    }
    Ok(walker.finish())
}

/// Copy a single StyleRule's selectors + declarations into an OwnedRule,
/// prefixing every selector.
fn convert_style_rule(style_rule: &StyleRule<'_>, prefix: &str) -> Result<OwnedRule> {
    let mut selectors = Vec::with_capacity(style_rule.selectors.0.len());
    for selector in &style_rule.selectors.0 {
        let text = selector
            .to_css_string(PrinterOptions::default())
            .map_err(print_error)?;
        selectors.push(apply_prefix(&text, prefix)?);
    }

    let block = &style_rule.declarations;
    let mut declarations =
        Vec::with_capacity(block.declarations.len() + block.important_declarations.len());
    for property in &block.declarations {
        declarations.push(
            property
                .to_css_string(false, PrinterOptions::default())
                .map_err(print_error)?,
        );
    }
    for property in &block.important_declarations {
        declarations.push(
            property
                .to_css_string(true, PrinterOptions::default())
                .map_err(print_error)?,
        );
    }

    if !style_rule.rules.0.is_empty() {
        log::warn!(
            "nested rules under `{}` are not supported and were skipped",
            selectors.join(", ")
        );
    }

    Ok(OwnedRule {
        selectors,
        declarations,
    })
}
