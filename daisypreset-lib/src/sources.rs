use crate::config::PresetOptions;
use crate::error::{PresetError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The prebuilt component library stylesheets a preset is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStylesheets {
    pub base: String,
    pub styled: String,
    pub unstyled: String,
    pub utilities: String,
    pub utilities_unstyled: String,
    pub utilities_styled: String,
}

impl SourceStylesheets {
    /// Read the stylesheets from `dir`. Missing files count as empty.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        Ok(SourceStylesheets {
            base: read_optional(dir, "base.css")?,
            styled: read_optional(dir, "styled.css")?,
            unstyled: read_optional(dir, "unstyled.css")?,
            utilities: read_optional(dir, "utilities.css")?,
            utilities_unstyled: read_optional(dir, "utilities-unstyled.css")?,
            utilities_styled: read_optional(dir, "utilities-styled.css")?,
        })
    }

    /// Component and utility stylesheets to categorize, in processing order.
    /// The base stylesheet is never part of this list.
    pub fn ordered(&self, options: &PresetOptions) -> Vec<(&'static str, &str)> {
        let mut sources = vec![if options.styled {
            ("styled.css", self.styled.as_str())
        } else {
            ("unstyled.css", self.unstyled.as_str())
        }];
        if options.utils {
            sources.push(("utilities.css", self.utilities.as_str()));
            sources.push(("utilities-unstyled.css", self.utilities_unstyled.as_str()));
            sources.push(("utilities-styled.css", self.utilities_styled.as_str()));
        }
        sources
    }
}

fn read_optional(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("{} not found, treating it as empty", path.display());
            Ok(String::new())
        }
        Err(err) => Err(PresetError::Io { path, source: err }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn sources() -> SourceStylesheets {
        SourceStylesheets {
            base: "base".into(),
            styled: "styled".into(),
            unstyled: "unstyled".into(),
            utilities: "utilities".into(),
            utilities_unstyled: "utilities-unstyled".into(),
            utilities_styled: "utilities-styled".into(),
        }
    }

    #[test]
    fn styled_with_utilities() {
        let sources = sources();
        let names: Vec<_> = sources
            .ordered(&PresetOptions::default())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            ["styled.css", "utilities.css", "utilities-unstyled.css", "utilities-styled.css"]
        );
    }

    #[test]
    fn unstyled_without_utilities() {
        let options = PresetOptions {
            styled: false,
            utils: false,
            ..PresetOptions::default()
        };
        let sources = sources();
        assert_eq!(sources.ordered(&options), [("unstyled.css", "unstyled")]);
    }

    #[test]
    fn missing_files_are_empty() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("daisypreset_sources_{}", nanos));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("styled.css"), ".btn { color: red; }").unwrap();

        let loaded = SourceStylesheets::load_dir(&dir).unwrap();
        assert_eq!(loaded.styled, ".btn { color: red; }");
        assert_eq!(loaded.base, "");
        assert_eq!(loaded.utilities_styled, "");
    }
}
