// src/style/owned_css.rs (rules copied out of the LightningCSS tree so they outlive the parsed sheet)
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRule {
    /// One entry per selector of the list, e.g. ".btn", ":where(.btn-outline)".
    pub selectors: Vec<String>,
    /// Serialized declarations without the trailing `;`, e.g. "display: inline-flex".
    pub declarations: Vec<String>,
}

impl OwnedRule {
    /// The full selector list as it appears in front of the block.
    pub fn selector_text(&self) -> String {
        self.selectors.join(", ")
    }
}

impl fmt::Display for OwnedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector_text())?;
        for decl in &self.declarations {
            writeln!(f, "  {};", decl)?;
        }
        write!(f, "}}")
    }
}
