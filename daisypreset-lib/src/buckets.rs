use crate::error::Result;
use crate::selector::classify::classify_rule;
use crate::style::owned_css::OwnedRule;
use indexmap::IndexMap;

/// Base key of rules no classification case recognized.
pub const UNCLASSIFIED: &str = "";

/// At-rules whose children only make sense emitted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingAtRule {
    Keyframes,
    Supports,
}

impl GroupingAtRule {
    pub const ALL: [GroupingAtRule; 2] = [GroupingAtRule::Keyframes, GroupingAtRule::Supports];

    pub fn name(self) -> &'static str {
        match self {
            GroupingAtRule::Keyframes => "keyframes",
            GroupingAtRule::Supports => "supports",
        }
    }
}

/// Verbatim grouping at-rules, one list per at-rule name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialRuleBuckets {
    buckets: IndexMap<GroupingAtRule, Vec<String>>,
}

impl Default for SpecialRuleBuckets {
    fn default() -> Self {
        SpecialRuleBuckets {
            buckets: GroupingAtRule::ALL
                .into_iter()
                .map(|kind| (kind, Vec::new()))
                .collect(),
        }
    }
}

impl SpecialRuleBuckets {
    pub fn push(&mut self, kind: GroupingAtRule, css: String) {
        self.buckets.entry(kind).or_default().push(css);
    }

    pub fn get(&self, kind: GroupingAtRule) -> &[String] {
        self.buckets.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every bucket in emission order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (GroupingAtRule, &[String])> {
        self.buckets
            .iter()
            .map(|(kind, blocks)| (*kind, blocks.as_slice()))
    }
}

/// Concatenated CSS per base key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBuckets {
    buckets: IndexMap<String, String>,
}

impl RuleBuckets {
    /// Classify every rule and append its text to the bucket of its base key.
    pub fn merge(rules: &[OwnedRule], prefix: &str) -> Result<Self> {
        let mut buckets = RuleBuckets::default();
        for rule in rules {
            let base = classify_rule(rule, prefix)?;
            if base == UNCLASSIFIED {
                log::warn!("no utility matches `{}`, its css is unreachable", rule.selector_text());
            }
            buckets.append(base, &rule.to_string());
        }
        log::debug!("merged {} rules into {} buckets", rules.len(), buckets.len());
        Ok(buckets)
    }

    /// Append one rule's text, newline-terminated. No deduplication.
    pub fn append(&mut self, base: String, css: &str) {
        let bucket = self.buckets.entry(base).or_default();
        bucket.push_str(css);
        bucket.push('\n');
    }

    pub fn get(&self, base: &str) -> Option<&str> {
        self.buckets.get(base).map(String::as_str)
    }

    /// CSS of rules that fell through every classification case.
    pub fn unclassified(&self) -> Option<&str> {
        self.get(UNCLASSIFIED)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buckets
            .iter()
            .map(|(base, css)| (base.as_str(), css.as_str()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
